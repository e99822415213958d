use forksort::sort::merge_sort;
use forksort::sort;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Equal keys with distinguishable tags, to observe tie order.
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: u8,
    tag: u16,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sort_is_sorted_permutation(
        values in prop::collection::vec(any::<i32>(), 0..400),
        cores in 1usize..=8,
        threshold in 0usize..64,
    ) {
        let mut expected = values.clone();
        expected.sort();

        let sorted = sort(values, cores, threshold).unwrap();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_tie_order_independent_of_split_pattern(
        keys in prop::collection::vec(0u8..4, 0..200),
        cores in 0usize..=8,
        threshold in 0usize..32,
    ) {
        let items: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(i, &key)| Keyed { key, tag: i as u16 })
            .collect();

        let serial: Vec<u16> = merge_sort(items.clone()).iter().map(|k| k.tag).collect();
        let parallel: Vec<u16> = sort(items, cores, threshold)
            .unwrap()
            .iter()
            .map(|k| k.tag)
            .collect();
        prop_assert_eq!(parallel, serial);
    }

    #[test]
    fn prop_sorted_input_unchanged(
        mut values in prop::collection::vec(any::<i64>(), 0..300),
        cores in 1usize..=8,
        threshold in 0usize..16,
    ) {
        values.sort();
        let sorted = sort(values.clone(), cores, threshold).unwrap();
        prop_assert_eq!(sorted, values);
    }
}
