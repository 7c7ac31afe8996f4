//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
///
/// A word that finds no matching morpheme is not an error: the aligner
/// always has the degenerate all-unaligned solution to fall back on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Normalization changed the number of characters of the surface word,
    /// so positions in the comparison form no longer map onto the original
    #[error(
        "normalization changed the length of {text:?} from {original} to {normalized} characters"
    )]
    LengthMismatch {
        /// The offending surface word
        text: String,
        /// Character count of the original text
        original: usize,
        /// Character count after normalization
        normalized: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
