//! Signing configuration loader

use std::path::Path;

use tokio::fs;

use crate::domain::error::SigningError;
use crate::domain::signing::SigningConfig;

/// Resolve the signing configuration from an optional properties file.
///
/// Absent file means debug signing; a present file must parse completely.
pub async fn resolve_signing(path: &Path) -> Result<SigningConfig, SigningError> {
    if !path.exists() {
        return SigningConfig::from_properties(None);
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| SigningError::ReadError(e.to_string()))?;

    SigningConfig::from_properties(Some(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn missing_file_resolves_to_debug() {
        let config = resolve_signing(Path::new("/nonexistent/key.properties"))
            .await
            .unwrap();
        assert_eq!(config, SigningConfig::Debug);
    }

    #[tokio::test]
    async fn complete_file_resolves_to_release() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keyAlias=upload").unwrap();
        writeln!(file, "keyPassword=p1").unwrap();
        writeln!(file, "storeFile=/keys/upload.jks").unwrap();
        writeln!(file, "storePassword=p2").unwrap();

        let config = resolve_signing(file.path()).await.unwrap();
        assert_eq!(config.label(), "release");
    }

    #[tokio::test]
    async fn incomplete_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keyAlias=upload").unwrap();

        let err = resolve_signing(file.path()).await.unwrap_err();
        assert!(matches!(err, SigningError::MissingKey(_)));
    }
}
