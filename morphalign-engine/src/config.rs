//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    executor::ExecutionMode,
};
use morphalign_core::AlignmentStrategy;

/// Default configuration constants
pub mod defaults {
    /// Batch size from which adaptive mode goes parallel
    pub const PARALLEL_THRESHOLD: usize = 1_000;

    /// Maximum number of memoized alignments
    pub const CACHE_CAPACITY: usize = 100_000;
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Alignment algorithm
    pub strategy: AlignmentStrategy,
    /// Execution mode selector for batches
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum batch size for parallel processing in adaptive mode
    pub parallel_threshold: usize,
    /// Maximum number of cached alignments (0 disables the cache)
    pub cache_capacity: usize,
    /// Split hyphens at the end of morphs into their own unit when segmenting
    pub split_hyphens: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: AlignmentStrategy::Optimal,
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            cache_capacity: defaults::CACHE_CAPACITY,
            split_hyphens: false,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration without a cache
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            cache_capacity: 0,
            ..Default::default()
        }
    }

    /// Configuration for large corpora with many repeated words
    pub fn fast() -> Self {
        Self {
            parallel_threshold: 256,
            cache_capacity: 1_000_000,
            ..Default::default()
        }
    }

    /// Greedy alignment, for comparison against the optimal aligner
    pub fn reference() -> Self {
        Self {
            strategy: AlignmentStrategy::Greedy,
            ..Self::sequential()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(EngineError::ConfigError(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        if let Some(0) = self.threads {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
