//! Serial sorting building blocks
//!
//! - [`merge`]: combines two sorted runs (right-first on ties)
//! - [`merge_sort`]: recursive halving + merge, used as the base case of the
//!   parallel engine
//! - [`max_depth`]: derives the split-depth budget from a core count

pub mod depth;
pub mod merge;
pub mod serial;

pub use depth::max_depth;
pub use merge::merge;
pub use serial::merge_sort;
