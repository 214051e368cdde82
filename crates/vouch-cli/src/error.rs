//! Error handling for the Vouch CLI

use thiserror::Error;

/// CLI-specific error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Key handling error: {0}")]
    Core(#[from] vouch_core::VouchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid expiration date: {0}")]
    InvalidExpiry(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
