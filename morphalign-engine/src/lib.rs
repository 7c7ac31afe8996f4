//! Batch orchestration for morpheme alignment
//!
//! This crate provides execution strategies, memoization, and configuration
//! around the aligners in `morphalign-core`.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod executor;
pub mod processor;
pub mod request;

// Re-export key types
pub use cache::{AlignmentCache, CacheStats};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use processor::{AlignmentProcessor, AlignmentProcessorBuilder, BatchMetadata, BatchOutput};
pub use request::AlignmentRequest;

// Re-export from core for convenience
pub use morphalign_core::{Aligner, Alignment, AlignmentStrategy, CoreError, MorphemeSlot};
