//! Parallel execution strategy
//!
//! Alignments share no state beyond the cache, so a batch is split across
//! the pool one request at a time.

use crate::{
    error::{EngineError, Result},
    executor::{AlignFn, ExecutionMode, Executor},
    request::AlignmentRequest,
};
use morphalign_core::Alignment;
use rayon::prelude::*;

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
}

impl ParallelExecutor {
    /// Create a parallel executor with `threads` workers (None = one per CPU)
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or_else(num_cpus::get))
            .thread_name(|index| format!("morphalign-{index}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn execute(&self, requests: &[AlignmentRequest], align: &AlignFn<'_>) -> Result<Vec<Alignment>> {
        self.pool.install(|| {
            requests
                .par_iter()
                .enumerate()
                .map(|(index, request)| align(index, request))
                .collect::<Result<Vec<_>>>()
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
