//! Error types for Vesper

use thiserror::Error;

/// The main error type for Vesper operations
#[derive(Debug, Error)]
pub enum VesperError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Result type alias for Vesper operations
pub type Result<T> = std::result::Result<T, VesperError>;

impl From<toml::de::Error> for VesperError {
    fn from(err: toml::de::Error) -> Self {
        VesperError::TomlParseError(err.to_string())
    }
}
