//! Worker entry: runs a nested orchestrator call on its own thread and
//! reports the result to the parent.

use crate::error::{SortError, SortResult};
use crate::parallel::channel::{Outcome, OutcomeReceiver, OutcomeSender, Side, outcome_channel};
use crate::parallel::orchestrator::{WorkItem, fork_join_sort};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Parent's end of a worker's outcome channel plus the handle to join it with.
pub(crate) type Spawned<T> = (OutcomeReceiver<T>, JoinHandle<()>);

/// Start a worker for `item` on a fresh thread.
pub(crate) fn spawn_worker<T>(side: Side, item: WorkItem<T>) -> SortResult<Spawned<T>>
where
    T: Ord + Send + 'static,
{
    let (tx, rx) = outcome_channel(side);
    let handle = thread::Builder::new()
        .name(format!("forksort-d{}-{}", item.context.depth, side))
        .spawn(move || run_worker(side, item, tx))
        .map_err(|source| SortError::Spawn { side, source })?;
    Ok((rx, handle))
}

/// Body of a worker.
///
/// Sorts the work item with a nested [`fork_join_sort`] and sends exactly one
/// [`Outcome`]. Errors and panics from the nested call are both turned into
/// `Outcome::Failure` tagged with `side`. The sender is consumed by the send,
/// so the channel is closed on every path out of this function.
pub fn run_worker<T>(side: Side, item: WorkItem<T>, channel: OutcomeSender<T>)
where
    T: Ord + Send + 'static,
{
    let WorkItem { sequence, context } = item;
    let result = panic::catch_unwind(AssertUnwindSafe(|| fork_join_sort(sequence, context)));

    let outcome = match result {
        Ok(Ok(sorted)) => Outcome::Sorted(sorted),
        Ok(Err(err)) => Outcome::Failure {
            side,
            description: err.to_string(),
        },
        Err(payload) => {
            let description = panic_message(payload.as_ref());
            debug!(depth = context.depth, %side, %description, "worker panicked");
            Outcome::Failure { side, description }
        }
    };

    channel.send(outcome);
}

/// Text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
