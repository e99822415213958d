//! Configuration for a parallel sort invocation.

use crate::sort::max_depth;

/// Default sequence length at or below which splitting stops.
pub const DEFAULT_THRESHOLD: usize = 50_000;

/// Worker budget and split cutoff for a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Core/worker budget; bounds the number of leaf workers.
    pub cores: usize,
    /// Sequences this short or shorter are sorted serially.
    pub threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            cores: num_cpus::get(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SortConfig {
    /// Set the core budget. Zero is allowed and disables splitting.
    pub fn with_cores(mut self, cores: usize) -> Self {
        self.cores = cores;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the core budget from an Option, keeping the current one on `None`.
    pub fn with_cores_option(mut self, cores: Option<usize>) -> Self {
        if let Some(cores) = cores {
            self.cores = cores;
        }
        self
    }

    /// Split-depth budget derived from `cores`.
    pub fn max_depth(&self) -> u32 {
        max_depth(self.cores)
    }
}
