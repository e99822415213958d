//! Configuration for benchmark runs.

use crate::parallel::DEFAULT_THRESHOLD;

/// Which dataset sizes and core budgets to time, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in each generated dataset.
    pub dataset_sizes: Vec<usize>,
    /// Core budgets to time each dataset with.
    pub core_targets: Vec<usize>,
    /// Serial cutoff passed to every sort.
    pub threshold: usize,
    /// Timed runs per (size, cores) pair; the mean is reported.
    pub runs: usize,
    /// Generated values are uniform in `0..=max_value`.
    pub max_value: u64,
    /// Seed for dataset generation (None = random seed).
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset_sizes: vec![100_000, 250_000, 500_000, 1_000_000],
            core_targets: vec![2, 4, 6, 8],
            threshold: DEFAULT_THRESHOLD,
            runs: 1,
            max_value: 1_000_000,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.dataset_sizes = sizes;
        self
    }

    pub fn with_core_targets(mut self, cores: Vec<usize>) -> Self {
        self.core_targets = cores;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the number of timed runs (at least 1).
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs.max(1);
        self
    }

    pub fn with_max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
