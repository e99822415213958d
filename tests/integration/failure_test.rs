use forksort::{Side, SortError, sort};
use std::cmp::Ordering;

const TRIP: i32 = -1;

/// Comparing the `TRIP` value panics, which stands in for any failure raised
/// inside a worker's sub-sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tripwire(i32);

impl PartialOrd for Tripwire {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tripwire {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == TRIP || other.0 == TRIP {
            panic!("tripwire compared");
        }
        self.0.cmp(&other.0)
    }
}

fn wires(values: &[i32]) -> Vec<Tripwire> {
    values.iter().copied().map(Tripwire).collect()
}

#[test]
fn test_right_child_failure_names_right_side() {
    let err = sort(wires(&[1, 2, 3, 4, 5, 6, TRIP, 8]), 2, 0).unwrap_err();

    assert_eq!(err.side(), Some(Side::Right));
    assert_eq!(err.to_string(), "Child exception (right): tripwire compared");
}

#[test]
fn test_nested_failure_accumulates_path() {
    // cores=4: the tripwire sits in the right half of the right half
    let err = sort(wires(&[1, 2, 3, 4, 5, 6, TRIP, 8]), 4, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Child exception (right): Child exception (right): tripwire compared"
    );

    // Left half, then that half's right quarter
    let err = sort(wires(&[1, 2, TRIP, 4, 5, 6, 7, 8]), 4, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Child exception (left): Child exception (right): tripwire compared"
    );
}

#[test]
fn test_left_failure_wins_when_both_fail() {
    let err = sort(wires(&[TRIP, 1, 2, 3, 4, 5, TRIP, 6]), 2, 0).unwrap_err();

    match err {
        SortError::ChildFailure { side, description } => {
            assert_eq!(side, Side::Left);
            assert_eq!(description, "tripwire compared");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_tripwire_without_trip_sorts() {
    let sorted = sort(wires(&[4, 3, 2, 1]), 4, 0).unwrap();
    assert_eq!(sorted, wires(&[1, 2, 3, 4]));
}

#[test]
fn test_failure_below_threshold_stays_serial() {
    // No split happens, so the panic is raised on the caller's own thread
    let result = std::panic::catch_unwind(|| sort(wires(&[3, TRIP, 1]), 8, 3));
    assert!(result.is_err());
}
