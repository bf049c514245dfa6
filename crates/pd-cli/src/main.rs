//! PrimeDigit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod run;

use run::TransitionJob;

#[derive(Parser)]
#[command(name = "primedigit")]
#[command(about = "PrimeDigit - last-digit transition statistics for consecutive primes")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all primes up to a bound
    Enumerate {
        /// Inclusive upper bound
        #[arg(long)]
        max_n: u64,

        /// Log progress during enumeration
        #[arg(long)]
        progress: bool,

        /// Threads (0 = auto). Use 1 for the deterministic sequential path.
        #[arg(long, default_value = "1")]
        threads: usize,

        /// Output primes file (one integer per line). Defaults to a JSON
        /// artifact on stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Distribution of the next prime's last digit after a source digit
    Transitions {
        /// Inclusive enumeration bound (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        max_n: Option<u64>,

        /// Precomputed primes file, one integer per line, ascending
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Last digit to condition on (0-9)
        #[arg(long, default_value = "9")]
        source_digit: u8,

        /// Log progress during enumeration
        #[arg(long)]
        progress: bool,

        /// Threads (0 = auto). Use 1 for the deterministic sequential path.
        #[arg(long, default_value = "1")]
        threads: usize,

        /// Output file for the report (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a transition analysis described by a config file (JSON or YAML)
    Run {
        /// Config file path
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Enumerate { max_n, progress, threads, output } => {
            cmd_enumerate(max_n, progress, threads, output.as_ref())
        }
        Commands::Transitions { max_n, input, source_digit, progress, threads, output } => {
            run::cmd_transitions(&TransitionJob {
                primes_path: input,
                max_n,
                source_digit,
                show_progress: progress,
                threads,
                output,
            })
        }
        Commands::Run { config } => run::cmd_run(&config),
        Commands::Version => {
            println!("primedigit {}", pd_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_enumerate(max_n: u64, progress: bool, threads: usize, output: Option<&PathBuf>) -> Result<()> {
    if threads > 0 {
        let _ = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global();
    }

    tracing::info!(max_n, "enumerating primes");
    let primes = if threads == 1 || progress {
        pd_primes::enumerate(max_n, progress)
    } else {
        pd_primes::enumerate_parallel(max_n)
    };
    tracing::info!(n_primes = primes.len(), "enumeration complete");

    if let Some(path) = output {
        pd_io::write_primes(path, &primes)
            .with_context(|| format!("failed to write primes to {}", path.display()))?;
        return Ok(());
    }

    write_json(
        None,
        serde_json::json!({
            "max_n": max_n,
            "n_primes": primes.len(),
            "primes": primes,
        }),
    )
}

pub(crate) fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
