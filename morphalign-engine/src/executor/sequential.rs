//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{AlignFn, ExecutionMode, Executor},
    request::AlignmentRequest,
};
use morphalign_core::Alignment;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(&self, requests: &[AlignmentRequest], align: &AlignFn<'_>) -> Result<Vec<Alignment>> {
        requests
            .iter()
            .enumerate()
            .map(|(index, request)| align(index, request))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
