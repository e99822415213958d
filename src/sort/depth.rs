//! Recursion depth budget for parallel splitting

/// Maximum number of split levels for a worker budget of `cores`.
///
/// Each level doubles the worker count, so `floor(log2(cores))` keeps the
/// number of leaf workers at or below `cores`. A budget of zero yields depth
/// zero (no splitting).
pub fn max_depth(cores: usize) -> u32 {
    if cores < 1 { 0 } else { cores.ilog2() }
}
