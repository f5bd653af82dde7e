use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Probability that the surfer follows a link instead of jumping.
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Number of steps of the sampling random walk
pub const DEFAULT_SAMPLES: usize = 10_000;
/// Largest per-page change accepted as converged
pub const DEFAULT_THRESHOLD: f64 = 0.001;
/// Iterations after which the iterative estimator gives up
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Stopping policy of the iterative estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Convergence {
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Default for Convergence {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Convergence {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(RankError::InvalidParameter(format!(
                "convergence threshold must be a positive number, got {}",
                self.threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidParameter(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
