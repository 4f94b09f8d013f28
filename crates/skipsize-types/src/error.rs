//! Error types for the skip size picker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Size API returned status {0}")]
    HttpStatus(u16),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Size {0} is not in the loaded list")]
    UnknownSize(u32),

    #[error("Size {0} is not suitable for heavy waste")]
    HeavyWasteUnsuitable(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
