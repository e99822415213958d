//! Timing harness for the parallel sort.
//!
//! Generates one random dataset per size, sorts a fresh copy of it once per
//! run for every core budget, and records the mean wall-clock time.

pub mod config;
pub mod report;

pub use config::BenchConfig;
pub use report::{BenchReport, Measurement};

use crate::error::{SortError, SortResult};
use crate::parallel::SortConfig;
use crate::sort::max_depth;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// `size` values drawn uniformly from `0..=max_value`.
pub fn generate_dataset<R: Rng>(size: usize, max_value: u64, rng: &mut R) -> Vec<u64> {
    (0..size).map(|_| rng.random_range(0..=max_value)).collect()
}

/// `total` split evenly over `runs` (at least 1).
fn mean_duration(total: Duration, runs: usize) -> Duration {
    total.div_f64(runs.max(1) as f64)
}

/// Run every (size, cores) pair in `config`, calling `progress` after each
/// pair is measured.
pub fn run_benchmarks<F>(config: &BenchConfig, mut progress: F) -> SortResult<BenchReport>
where
    F: FnMut(&Measurement),
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let runs = config.runs.max(1);
    let mut report = BenchReport::new();

    for &size in &config.dataset_sizes {
        info!(size, "generating dataset");
        let master = generate_dataset(size, config.max_value, &mut rng);

        for &cores in &config.core_targets {
            let sort_config = SortConfig {
                cores,
                threshold: config.threshold,
            };
            let mut total = Duration::ZERO;

            for run in 0..runs {
                let data = master.clone();
                let start = Instant::now();
                let sorted = crate::sort_with_config(data, &sort_config)?;
                let elapsed = start.elapsed();
                debug!(size, cores, run, ?elapsed, "run finished");

                if !sorted.is_sorted() {
                    return Err(SortError::Unsorted { size, cores });
                }
                total += elapsed;
            }

            let measurement = Measurement {
                size,
                cores,
                depth: max_depth(cores),
                runs,
                mean: mean_duration(total, runs),
            };
            report.record(&measurement);
            progress(&measurement);
        }
    }

    Ok(report)
}
