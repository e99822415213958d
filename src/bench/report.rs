//! Benchmark measurements and the summary table.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

/// Mean time of one (size, cores) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub size: usize,
    pub cores: usize,
    pub depth: u32,
    pub runs: usize,
    pub mean: Duration,
}

impl Measurement {
    /// Progress line for this measurement.
    pub fn format_line(&self) -> String {
        format!(
            "Cores: {:2}  (depth={}) -> {:.3} sec over {} run(s)",
            self.cores,
            self.depth,
            self.mean.as_secs_f64(),
            self.runs
        )
    }
}

/// All measurements of a benchmark, keyed by size then cores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchReport {
    results: BTreeMap<usize, BTreeMap<usize, Duration>>,
}

impl BenchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, measurement: &Measurement) {
        self.results
            .entry(measurement.size)
            .or_default()
            .insert(measurement.cores, measurement.mean);
    }

    pub fn get(&self, size: usize, cores: usize) -> Option<Duration> {
        self.results.get(&size)?.get(&cores).copied()
    }

    /// Tab-separated table: one row per size, one column per core budget.
    /// Missing cells are rendered as `-`.
    pub fn format_table(&self) -> String {
        let mut cores: Vec<usize> = self
            .results
            .values()
            .flat_map(|row| row.keys().copied())
            .collect();
        cores.sort_unstable();
        cores.dedup();

        let mut s = String::from("Size\\Cores");
        for c in &cores {
            let _ = write!(s, "\t{}", c);
        }
        s.push('\n');

        for (size, row) in &self.results {
            let _ = write!(s, "{}", size);
            for c in &cores {
                match row.get(c) {
                    Some(mean) => {
                        let _ = write!(s, "\t{:.3}", mean.as_secs_f64());
                    }
                    None => s.push_str("\t-"),
                }
            }
            s.push('\n');
        }
        s
    }
}
