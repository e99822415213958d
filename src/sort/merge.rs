//! Two-way merge of sorted runs

/// Merge two ascending sequences into one ascending sequence.
///
/// The left head is taken only when it is strictly less than the right head;
/// on ties the right element is emitted first. The merge is therefore not
/// stable across the two runs, and every caller in this crate relies on that
/// exact tie-break so serial and parallel paths order equal keys identically.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l < r,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    // At most one of these still has elements
    merged.extend(left);
    merged.extend(right);
    merged
}
