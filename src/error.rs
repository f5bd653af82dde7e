use thiserror::Error;

/// Errors raised by the rank estimators and the link graph.
///
/// None of these are recoverable: PageRank on a malformed graph or with
/// out-of-range parameters has no well-defined answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("invalid link graph: {0}")]
    InvalidGraph(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "iteration did not converge after {iterations} iterations (last max delta {max_delta})"
    )]
    NonConvergence { iterations: usize, max_delta: f64 },
}

pub type Result<T> = std::result::Result<T, RankError>;

/// Damping factor must lie strictly between 0 and 1.
pub(crate) fn check_damping(damping_factor: f64) -> Result<()> {
    if !(damping_factor > 0.0 && damping_factor < 1.0) {
        return Err(RankError::InvalidParameter(format!(
            "damping factor must be in (0, 1), got {}",
            damping_factor
        )));
    }
    Ok(())
}
