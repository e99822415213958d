//! Fork-join parallel merge sort.
//!
//! A sequence is split recursively across isolated worker threads until a
//! depth budget (derived from a core count) or a length threshold is reached,
//! sorted serially at the leaves, and merged back bottom-up. Workers share no
//! mutable state: each owns its half and returns its result over a one-shot
//! channel.
//!
//! ```
//! let sorted = forksort::sort(vec![5, 3, 8, 1, 9, 2, 7, 4], 4, 0).unwrap();
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5, 7, 8, 9]);
//! ```

pub mod bench;
pub mod error;
pub mod parallel;
pub mod sort;

pub use error::{SortError, SortResult};
pub use parallel::{Side, SortConfig};

use parallel::{SortContext, fork_join_sort};

/// Sort `sequence` with a worker budget of `cores` and a serial cutoff of
/// `threshold` elements.
///
/// The split depth is `floor(log2(cores))` (zero for `cores == 0`). A failure
/// in any worker aborts the whole sort; the error describes the path of
/// sides it propagated through.
pub fn sort<T>(sequence: Vec<T>, cores: usize, threshold: usize) -> SortResult<Vec<T>>
where
    T: Ord + Send + 'static,
{
    let config = SortConfig { cores, threshold };
    sort_with_config(sequence, &config)
}

/// Sort `sequence` as configured by `config`.
pub fn sort_with_config<T>(sequence: Vec<T>, config: &SortConfig) -> SortResult<Vec<T>>
where
    T: Ord + Send + 'static,
{
    fork_join_sort(sequence, SortContext::root(config))
}
