//! Fork-join orchestrator: split, sort both halves in workers, merge.

use crate::error::{SortError, SortResult};
use crate::parallel::channel::{Outcome, Side};
use crate::parallel::config::SortConfig;
use crate::parallel::worker::{Spawned, spawn_worker};
use crate::sort::{merge, merge_sort};
use tracing::{debug, trace, warn};

/// Position of a call in the split tree plus the limits fixed at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortContext {
    /// Split levels already applied above this call.
    pub depth: u32,
    /// Depth at which splitting stops.
    pub max_depth: u32,
    /// Sequences this short or shorter are sorted serially.
    pub threshold: usize,
}

impl SortContext {
    /// Context for the top-level call of a sort.
    pub fn root(config: &SortConfig) -> Self {
        Self {
            depth: 0,
            max_depth: config.max_depth(),
            threshold: config.threshold,
        }
    }

    /// Context handed to both children of a split.
    pub fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Why a sequence of `len` elements should not be split, if it shouldn't.
    fn fallback_reason(&self, len: usize) -> Option<&'static str> {
        if self.depth >= self.max_depth {
            Some("depth")
        } else if len <= self.threshold {
            Some("threshold")
        } else {
            None
        }
    }

    /// Whether a sequence of `len` elements would be split at this context.
    pub fn splits(&self, len: usize) -> bool {
        len > 1 && self.fallback_reason(len).is_none()
    }
}

/// A sequence together with the context it is to be sorted in. This is what
/// a worker owns for its whole lifetime.
#[derive(Debug)]
pub struct WorkItem<T> {
    pub sequence: Vec<T>,
    pub context: SortContext,
}

impl<T> WorkItem<T> {
    pub fn new(sequence: Vec<T>, context: SortContext) -> Self {
        Self { sequence, context }
    }
}

/// Sort `sequence` at the given point of the split tree.
///
/// Falls back to [`merge_sort`] once `depth >= max_depth` or the sequence is
/// no longer than `threshold`. Otherwise cuts it at `len / 2`, hands each
/// half to its own worker at `depth + 1`, waits for the left outcome then the
/// right, joins both workers and merges. If either child failed, the left
/// failure takes precedence and is wrapped with its side.
pub fn fork_join_sort<T>(sequence: Vec<T>, context: SortContext) -> SortResult<Vec<T>>
where
    T: Ord + Send + 'static,
{
    split_and_join(sequence, context, spawn_worker)
}

/// [`fork_join_sort`] with the worker spawner for this level supplied by the
/// caller. Nested levels always use [`spawn_worker`].
fn split_and_join<T, S>(sequence: Vec<T>, context: SortContext, spawn: S) -> SortResult<Vec<T>>
where
    T: Ord + Send + 'static,
    S: Fn(Side, WorkItem<T>) -> SortResult<Spawned<T>>,
{
    let len = sequence.len();
    if len <= 1 {
        return Ok(sequence);
    }

    if let Some(reason) = context.fallback_reason(len) {
        trace!(depth = context.depth, len, reason, "serial fallback");
        return Ok(merge_sort(sequence));
    }

    let mut left = sequence;
    let right = left.split_off(len / 2);
    debug!(
        depth = context.depth,
        len,
        left = left.len(),
        right = right.len(),
        "splitting"
    );

    let child = context.child();
    let (left_rx, left_handle) = spawn(Side::Left, WorkItem::new(left, child))?;
    let (right_rx, right_handle) = match spawn(Side::Right, WorkItem::new(right, child)) {
        Ok(spawned) => spawned,
        Err(err) => {
            // Left is already running; drain and reap it before bailing out
            let _ = left_rx.recv();
            let _ = left_handle.join();
            return Err(err);
        }
    };

    let left_outcome = left_rx.recv();
    let right_outcome = right_rx.recv();

    let _ = left_handle.join();
    let _ = right_handle.join();

    match (left_outcome, right_outcome) {
        (Outcome::Sorted(left), Outcome::Sorted(right)) => Ok(merge(left, right)),
        (Outcome::Failure { side, description }, _)
        | (Outcome::Sorted(_), Outcome::Failure { side, description }) => {
            warn!(depth = context.depth, %side, %description, "child sort failed");
            Err(SortError::ChildFailure { side, description })
        }
    }
}
