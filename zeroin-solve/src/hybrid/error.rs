use thiserror::Error;

use crate::bracket::BracketError;

use super::{config::ConfigError, solution::Step};

/// Errors that can occur during hybrid solving.
///
/// A derivative that is unusable never appears here: rejected Newton
/// proposals fall back to bisection. Failures after iteration has
/// started carry the steps recorded up to the failure point.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite value {value} at x = {x}")]
    NonFinite {
        x: f64,
        value: f64,
        steps: Vec<Step>,
    },

    #[error("tolerance not met within {iters} iterations: bracket {bracket:?}, best x = {x}")]
    MaxIters {
        iters: usize,
        bracket: [f64; 2],
        x: f64,
        residual: f64,
        steps: Vec<Step>,
    },
}
