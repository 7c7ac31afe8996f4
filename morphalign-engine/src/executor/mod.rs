//! Execution strategies for alignment batches

use crate::{error::Result, request::AlignmentRequest};
use morphalign_core::Alignment;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick sequential or parallel from the batch size
    Adaptive,
}

impl ExecutionMode {
    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }

    /// Parse a mode name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sequential" => Some(ExecutionMode::Sequential),
            "parallel" => Some(ExecutionMode::Parallel),
            "adaptive" | "auto" => Some(ExecutionMode::Adaptive),
            _ => None,
        }
    }
}

/// Aligns one request; shared by all workers of a batch
pub type AlignFn<'a> = dyn Fn(usize, &AlignmentRequest) -> Result<Alignment> + Sync + 'a;

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Align every request, returning results in request order
    fn execute(&self, requests: &[AlignmentRequest], align: &AlignFn<'_>) -> Result<Vec<Alignment>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on batch size
pub fn auto_select(batch_len: usize, threshold: usize) -> ExecutionMode {
    if batch_len < threshold {
        // Words are tiny; below the threshold thread handoff costs more than it saves
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
