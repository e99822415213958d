//! Fork-join parallel merge sort.
//!
//! # Architecture
//!
//! - The **orchestrator** decides, per call, whether to split or fall back to
//!   the serial sorter, based on the depth budget and the length threshold
//! - Each split spawns two **workers**, one per half, each running a nested
//!   orchestrator call one level deeper on a sequence it owns outright
//! - Every worker reports exactly one **outcome** (sorted half or failure)
//!   over its own one-shot **channel**; the parent receives left then right,
//!   joins both, then merges or surfaces the failure
//!
//! No state is shared between a parent and its workers: halves are moved in,
//! results are moved back out through the channel.
//!
//! # Example
//!
//! ```ignore
//! use forksort::parallel::{SortConfig, SortContext, fork_join_sort};
//!
//! let config = SortConfig::default().with_cores(4).with_threshold(0);
//! let sorted = fork_join_sort(vec![5, 3, 8, 1], SortContext::root(&config))?;
//! ```

pub mod channel;
pub mod config;
pub mod orchestrator;
pub mod worker;

pub use channel::{Outcome, Side};
pub use config::{DEFAULT_THRESHOLD, SortConfig};
pub use orchestrator::{SortContext, WorkItem, fork_join_sort};
pub use worker::run_worker;
