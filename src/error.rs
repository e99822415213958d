//! Error types for the sort engine

use crate::parallel::Side;
use thiserror::Error;

/// Result type used throughout the crate.
pub type SortResult<T> = Result<T, SortError>;

/// Errors surfaced by a sort invocation.
#[derive(Debug, Error)]
pub enum SortError {
    /// A worker's recursive sort failed. The description is opaque text and
    /// may itself be the rendering of a deeper `ChildFailure`.
    #[error("Child exception ({side}): {description}")]
    ChildFailure { side: Side, description: String },

    /// The OS refused to start a worker thread.
    #[error("failed to spawn {side} worker: {source}")]
    Spawn {
        side: Side,
        #[source]
        source: std::io::Error,
    },

    /// A benchmark run produced output that is not in non-descending order.
    #[error("sort of {size} elements with {cores} cores produced unsorted output")]
    Unsorted { size: usize, cores: usize },
}

impl SortError {
    /// The side a child failure originated from, if this is one.
    pub fn side(&self) -> Option<Side> {
        match self {
            SortError::ChildFailure { side, .. } | SortError::Spawn { side, .. } => Some(*side),
            SortError::Unsorted { .. } => None,
        }
    }
}
