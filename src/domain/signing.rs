//! Release signing configuration resolution
//!
//! The packaging step signs release artifacts with a keystore described by
//! an optional Java-style properties file. When the file is absent, debug
//! signing is used. Resolution returns a tagged choice instead of mutating
//! shared build state.

use std::path::PathBuf;

use crate::domain::error::SigningError;

/// Keystore credentials parsed from a properties file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystoreProperties {
    pub key_alias: String,
    pub key_password: String,
    pub store_file: PathBuf,
    pub store_password: String,
}

impl KeystoreProperties {
    /// Parse Java-style `key=value` properties.
    ///
    /// Lines starting with `#` or `!` are comments; blank lines are skipped;
    /// keys and values are trimmed. All four keystore keys are required.
    pub fn parse(content: &str) -> Result<Self, SigningError> {
        let mut key_alias = None;
        let mut key_password = None;
        let mut store_file = None;
        let mut store_password = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) =
                line.split_once('=')
                    .ok_or_else(|| SigningError::MalformedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    })?;

            match key.trim() {
                "keyAlias" => key_alias = Some(value.trim().to_string()),
                "keyPassword" => key_password = Some(value.trim().to_string()),
                "storeFile" => store_file = Some(PathBuf::from(value.trim())),
                "storePassword" => store_password = Some(value.trim().to_string()),
                // Unknown keys are ignored, matching properties-file convention
                _ => {}
            }
        }

        Ok(Self {
            key_alias: key_alias.ok_or(SigningError::MissingKey("keyAlias"))?,
            key_password: key_password.ok_or(SigningError::MissingKey("keyPassword"))?,
            store_file: store_file.ok_or(SigningError::MissingKey("storeFile"))?,
            store_password: store_password.ok_or(SigningError::MissingKey("storePassword"))?,
        })
    }
}

/// The resolved signing choice for a release build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningConfig {
    /// Sign with the release keystore from the properties file
    Release(KeystoreProperties),
    /// Fall back to debug signing (no keystore provided)
    Debug,
}

impl SigningConfig {
    /// Resolve from optionally-present properties file content.
    /// `None` means the file does not exist.
    pub fn from_properties(content: Option<&str>) -> Result<Self, SigningError> {
        match content {
            Some(content) => Ok(Self::Release(KeystoreProperties::parse(content)?)),
            None => Ok(Self::Debug),
        }
    }

    /// Short label for presentation ("release" or "debug")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Release(_) => "release",
            Self::Debug => "debug",
        }
    }
}
