//! Serial top-down merge sort

use super::merge::merge;

/// Sort a sequence by recursive halving and [`merge`].
///
/// Sequences of length 0 or 1 are returned unchanged. The cut is always at
/// `len / 2`, the same midpoint the fork-join engine uses, so a parallel sort
/// that falls back here at any depth produces exactly this output.
pub fn merge_sort<T: Ord>(mut sequence: Vec<T>) -> Vec<T> {
    if sequence.len() <= 1 {
        return sequence;
    }

    let right = sequence.split_off(sequence.len() / 2);
    merge(merge_sort(sequence), merge_sort(right))
}
