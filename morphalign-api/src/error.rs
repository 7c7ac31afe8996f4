//! API error types

use morphalign_core::CoreError;
use morphalign_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Alignment error from a direct core call
    #[error("alignment error: {0}")]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML parse error
    #[cfg(feature = "serde")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
