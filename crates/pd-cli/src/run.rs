//! `primedigit transitions` / `primedigit run` orchestration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A transition analysis to execute: where the primes come from, which
/// source digit to condition on, and where the report goes.
#[derive(Debug, Clone)]
pub struct TransitionJob {
    /// Precomputed primes file (one integer per line). Mutually
    /// exclusive with `max_n`.
    pub primes_path: Option<PathBuf>,
    /// Inclusive enumeration bound. Mutually exclusive with `primes_path`.
    pub max_n: Option<u64>,
    /// Last digit whose successor distribution is measured.
    pub source_digit: u8,
    /// Log enumeration progress.
    pub show_progress: bool,
    /// Threads (0 = auto). Use 1 for the deterministic sequential path.
    pub threads: usize,
    /// Report destination (pretty JSON). Defaults to stdout.
    pub output: Option<PathBuf>,
}

/// File-based configuration mirroring the `transitions` flags.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub primes_path: Option<PathBuf>,

    #[serde(default)]
    pub max_n: Option<u64>,

    #[serde(default = "default_source_digit")]
    pub source_digit: u8,

    #[serde(default)]
    pub show_progress: bool,

    #[serde(default = "default_threads")]
    pub threads: usize,

    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_source_digit() -> u8 {
    9
}

fn default_threads() -> usize {
    1
}

/// Read an [`AnalysisConfig`] from JSON (`.json`) or YAML (anything else).
pub fn read_analysis_config(path: &Path) -> Result<AnalysisConfig> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
    let cfg: AnalysisConfig = if ext == "json" {
        serde_json::from_slice(&bytes)?
    } else {
        serde_yaml_ng::from_slice(&bytes)?
    };
    Ok(cfg)
}

impl From<AnalysisConfig> for TransitionJob {
    fn from(cfg: AnalysisConfig) -> Self {
        Self {
            primes_path: cfg.primes_path,
            max_n: cfg.max_n,
            source_digit: cfg.source_digit,
            show_progress: cfg.show_progress,
            threads: cfg.threads,
            output: cfg.output,
        }
    }
}

/// Execute a transition analysis end to end.
pub fn cmd_transitions(job: &TransitionJob) -> Result<()> {
    if job.threads > 0 {
        // Best-effort; if a global pool already exists, keep going.
        let _ = rayon::ThreadPoolBuilder::new().num_threads(job.threads).build_global();
    }

    let primes = match (&job.primes_path, job.max_n) {
        (Some(path), None) => {
            tracing::info!(path = %path.display(), "reading primes file");
            let primes = pd_io::read_primes(path)
                .with_context(|| format!("failed to read primes from {}", path.display()))?;
            if let Some(i) = primes.windows(2).position(|w| w[0] >= w[1]) {
                anyhow::bail!(
                    "primes file {} is not strictly increasing at entry {} ({} then {})",
                    path.display(),
                    i + 2,
                    primes[i],
                    primes[i + 1]
                );
            }
            primes
        }
        (None, Some(max_n)) => {
            tracing::info!(max_n, "enumerating primes");
            if job.threads == 1 || job.show_progress {
                pd_primes::enumerate(max_n, job.show_progress)
            } else {
                pd_primes::enumerate_parallel(max_n)
            }
        }
        (Some(_), Some(_)) => {
            anyhow::bail!("set either primes_path or max_n, not both")
        }
        (None, None) => anyhow::bail!("one of primes_path or max_n is required"),
    };

    tracing::info!(n_primes = primes.len(), "computing transition distribution");
    let report = pd_analysis::transition_report(&primes, job.source_digit, job.max_n)?;
    tracing::info!(total = report.total, "analysis complete");

    crate::write_json(job.output.as_ref(), serde_json::to_value(&report)?)
}

/// Execute a config-file run.
pub fn cmd_run(config: &Path) -> Result<()> {
    let cfg = read_analysis_config(config)?;
    cmd_transitions(&TransitionJob::from(cfg))
}
