//! One-shot outcome channel between a sort worker and its parent.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::fmt;

/// Which half of a split a worker was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Message sent from a worker to its parent. Exactly one per worker.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The worker's half, sorted ascending.
    Sorted(Vec<T>),
    /// The worker's recursive sort failed.
    Failure { side: Side, description: String },
}

/// Send half of an outcome channel. Sending consumes it, so a worker can
/// report at most once; dropping it unsent closes the channel.
pub struct OutcomeSender<T> {
    tx: Sender<Outcome<T>>,
}

impl<T> OutcomeSender<T> {
    pub fn send(self, outcome: Outcome<T>) {
        // The parent only goes away if it has itself panicked; nothing to do
        let _ = self.tx.send(outcome);
    }
}

/// Receive half of an outcome channel, held by the parent.
pub struct OutcomeReceiver<T> {
    rx: Receiver<Outcome<T>>,
    side: Side,
}

impl<T> OutcomeReceiver<T> {
    /// Block until the worker reports. A worker that exits without sending is
    /// reported as a failure on this receiver's side.
    pub fn recv(self) -> Outcome<T> {
        self.rx.recv().unwrap_or_else(|_| Outcome::Failure {
            side: self.side,
            description: "worker exited without reporting an outcome".to_string(),
        })
    }
}

/// Create the channel for a worker assigned to `side`.
pub fn outcome_channel<T>(side: Side) -> (OutcomeSender<T>, OutcomeReceiver<T>) {
    // Capacity 1 so the worker never blocks on its single send
    let (tx, rx) = bounded(1);
    (OutcomeSender { tx }, OutcomeReceiver { rx, side })
}
