use clap::{Parser, Subcommand};
use forksort::SortConfig;
use forksort::bench::{BenchConfig, run_benchmarks};
use forksort::parallel::DEFAULT_THRESHOLD;
use std::io::{self, Read};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "forksort")]
#[command(about = "forksort - fork-join parallel merge sort")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time the parallel sort over random datasets and core budgets
    Bench {
        /// Dataset sizes to benchmark
        #[arg(long, value_delimiter = ',', default_values_t = [100_000usize, 250_000, 500_000, 1_000_000])]
        sizes: Vec<usize>,
        /// Core budgets to benchmark each size with
        #[arg(long, value_delimiter = ',', default_values_t = [2usize, 4, 6, 8])]
        cores: Vec<usize>,
        /// Sequences this short or shorter are sorted serially
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
        /// Timed runs per (size, cores) pair
        #[arg(long, default_value = "1")]
        runs: usize,
        /// Random seed for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Sort whitespace-separated integers read from stdin
    Sort {
        /// Core budget (defaults to the number of CPUs)
        #[arg(long, short = 'j')]
        cores: Option<usize>,
        /// Sequences this short or shorter are sorted serially
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

// --- Benchmark ---

fn run_bench(config: &BenchConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Machine reported CPU count: {}", num_cpus::get());
    println!("Running fully recursive parallel merge sort.");

    let mut current_size = None;
    let report = run_benchmarks(config, |measurement| {
        if current_size != Some(measurement.size) {
            println!("\n=== Dataset = {} ===", measurement.size);
            current_size = Some(measurement.size);
        }
        println!("{}", measurement.format_line());
    })?;

    println!("\n--- Summary ---");
    print!("{}", report.format_table());
    Ok(())
}

// --- Sort ---

fn parse_values(input: &str) -> Result<Vec<i64>, String> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| format!("Invalid integer: '{}'", token))
        })
        .collect()
}

fn run_sort(config: &SortConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let values = parse_values(&input)?;
    tracing::debug!(
        count = values.len(),
        cores = config.cores,
        threshold = config.threshold,
        "sorting input"
    );

    let sorted = forksort::sort_with_config(values, config)?;
    let line = sorted
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Bench {
            sizes,
            cores,
            threshold,
            runs,
            seed,
        } => {
            let config = BenchConfig::default()
                .with_sizes(sizes)
                .with_core_targets(cores)
                .with_threshold(threshold)
                .with_runs(runs)
                .with_seed_option(seed);

            if let Err(e) = run_bench(&config) {
                eprintln!("Error during benchmark: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Sort { cores, threshold } => {
            let config = SortConfig::default()
                .with_cores_option(cores)
                .with_threshold(threshold);

            if let Err(e) = run_sort(&config) {
                eprintln!("Error during sort: {}", e);
                std::process::exit(1);
            }
        }
    }
}
