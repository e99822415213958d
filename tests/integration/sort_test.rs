use forksort::parallel::{SortContext, fork_join_sort};
use forksort::sort::{max_depth, merge_sort};
use forksort::{SortConfig, sort, sort_with_config};

#[test]
fn test_concrete_scenario() {
    let input = vec![5, 3, 8, 1, 9, 2, 7, 4];
    assert_eq!(max_depth(4), 2);

    let sorted = sort(input, 4, 0).unwrap();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn test_concrete_scenario_intermediate_halves() {
    // The depth-1 workers each see one half and split it into pairs
    let ctx = SortContext {
        depth: 1,
        max_depth: 2,
        threshold: 0,
    };
    assert_eq!(fork_join_sort(vec![5, 3, 8, 1], ctx).unwrap(), vec![1, 3, 5, 8]);
    assert_eq!(fork_join_sort(vec![9, 2, 7, 4], ctx).unwrap(), vec![2, 4, 7, 9]);
}

#[test]
fn test_empty_and_single_for_any_budget() {
    for cores in [0, 1, 2, 7, 64] {
        for threshold in [0, 1, 1000] {
            assert!(sort(Vec::<i32>::new(), cores, threshold).unwrap().is_empty());
            assert_eq!(sort(vec![42], cores, threshold).unwrap(), vec![42]);
        }
    }
}

#[test]
fn test_zero_and_one_core_sort_serially() {
    let input: Vec<i32> = vec![10, -3, 7, 7, 0, 22, -8];
    let expected = merge_sort(input.clone());
    assert_eq!(sort(input.clone(), 0, 0).unwrap(), expected);
    assert_eq!(sort(input, 1, 0).unwrap(), expected);
}

#[test]
fn test_large_random_input_matches_std() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0xF0_4C);
    let input: Vec<u32> = (0..20_000).map(|_| rng.random_range(0..1000)).collect();
    let mut expected = input.clone();
    expected.sort();

    let config = SortConfig::default().with_cores(8).with_threshold(500);
    assert_eq!(sort_with_config(input, &config).unwrap(), expected);
}

#[test]
fn test_strings_sort() {
    let input: Vec<String> = ["pear", "apple", "fig", "banana", "apple"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let sorted = sort(input, 4, 0).unwrap();
    assert_eq!(sorted, vec!["apple", "apple", "banana", "fig", "pear"]);
}

#[test]
fn test_odd_lengths_uneven_splits() {
    for len in 2..40i32 {
        let input: Vec<i32> = (0..len).map(|i| (i * 7919) % 31).collect();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sort(input, 8, 0).unwrap(), expected, "len={}", len);
    }
}
