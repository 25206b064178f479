//! Domain error types

use thiserror::Error;

/// Error when a push payload cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid push payload: {message}")]
pub struct PayloadError {
    pub message: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when signing configuration cannot be resolved
#[derive(Debug, Clone, Error)]
pub enum SigningError {
    #[error("Failed to read keystore properties: {0}")]
    ReadError(String),

    #[error("Missing required keystore property '{0}'")]
    MissingKey(&'static str),

    #[error("Malformed keystore properties line {line}: \"{content}\"")]
    MalformedLine { line: usize, content: String },
}
