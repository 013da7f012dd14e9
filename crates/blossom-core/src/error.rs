//! Error types for Blossom
//!
//! The simulation itself never fails: bad configuration degrades to
//! defaults or empty geometry. These variants cover the host-side surface
//! only (config files, pointer scripts).

use thiserror::Error;

/// The main error type for Blossom operations
#[derive(Debug, Error)]
pub enum BlossomError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for Blossom operations
pub type Result<T> = std::result::Result<T, BlossomError>;

impl From<toml::de::Error> for BlossomError {
    fn from(err: toml::de::Error) -> Self {
        BlossomError::TomlParseError(err.to_string())
    }
}
