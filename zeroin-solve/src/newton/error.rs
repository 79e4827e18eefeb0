use thiserror::Error;

use super::{config::ConfigError, solution::Step};

/// Errors that can occur during Newton–Raphson solving.
///
/// Failures after iteration has started carry the steps recorded up to
/// the failure point.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial guess must be finite, got {x0}")]
    InvalidGuess { x0: f64 },

    #[error("derivative {derivative} at x = {x} is unusable for a Newton step")]
    ZeroDerivative {
        x: f64,
        derivative: f64,
        steps: Vec<Step>,
    },

    #[error("iteration diverged: x = {x}, f(x) = {residual}")]
    Diverged {
        x: f64,
        residual: f64,
        steps: Vec<Step>,
    },

    #[error("tolerance not met within {iters} iterations: last x = {x}, residual = {residual}")]
    MaxIters {
        iters: usize,
        x: f64,
        residual: f64,
        steps: Vec<Step>,
    },
}
