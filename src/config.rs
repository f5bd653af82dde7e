use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rank::{
    Convergence, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_THRESHOLD,
};

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
/// All program arguments. The estimators themselves only see the damping
/// factor, the sample count and a [`Convergence`] built from these.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Directory holding the corpus of .html pages
    pub corpus: PathBuf,
    /// Probability of following a link rather than jumping to a random page
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,
    /// Number of steps of the sampling random walk
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,
    /// Largest per-page rank change at which iteration stops
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// Iterations after which iteration is abandoned as non-converging
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,
    /// Seed for the random walk, random if omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output file for the rank report
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn convergence(&self) -> Convergence {
        Convergence::default()
            .with_threshold(self.threshold)
            .with_max_iterations(self.max_iterations)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            anyhow::bail!("damping must be between 0 and 1 (exclusive)");
        }
        if self.samples == 0 {
            anyhow::bail!("samples must be greater than 0");
        }
        self.convergence().validate()?;
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
