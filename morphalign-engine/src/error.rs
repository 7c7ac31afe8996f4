//! Layered error types

use morphalign_core::CoreError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Alignment of one request in a batch failed
    #[error("alignment of request {index} ({word:?}) failed: {source}")]
    Request {
        /// Position of the request in the batch
        index: usize,
        /// The word being aligned
        word: String,
        /// The underlying failure
        #[source]
        source: CoreError,
    },

    /// Thread pool could not be built
    #[cfg(feature = "parallel")]
    #[error("thread pool construction failed: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
