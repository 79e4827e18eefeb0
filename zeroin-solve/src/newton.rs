//! Newton–Raphson root finding from a single starting point.
//!
//! # Algorithm
//!
//! Each iteration updates the estimate with the local linear
//! approximation of `f`:
//!
//! `x_next = x - f(x) / f'(x)`
//!
//! Convergence is quadratic near a simple root when the starting point
//! is close enough, but there is no guarantee: the solver's contract is
//! to iterate the update rule and report failures faithfully, never to
//! adjust the caller's starting point. The caller supplies the
//! derivative; nothing is differentiated automatically.
//!
//! The solve stops when |f(x)| meets the residual tolerance or the
//! Newton update is smaller than the step tolerance. A derivative too
//! small to divide by safely fails with [`Error::ZeroDerivative`]
//! before any division occurs, and non-finite iterates fail with
//! [`Error::Diverged`] instead of propagating NaN or infinity.
//!
//! # Observer Steps
//!
//! One [`Step`] is recorded per completed update, carrying the iterate,
//! residual, and derivative. Observers can return
//! [`Action::StopEarly`] to halt at the current estimate.

mod config;
mod error;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status, Step};

use crate::Observer;

/// Control actions supported by the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    StopEarly,
}

/// Finds a root of `f` by Newton–Raphson iteration starting at `x0`.
///
/// The observer sees each recorded [`Step`]; see the
/// [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::InvalidGuess`] for a non-finite `x0`,
/// [`Error::ZeroDerivative`] when the derivative is unusable,
/// [`Error::Diverged`] when an iterate or residual becomes non-finite,
/// and [`Error::MaxIters`] when the tolerances are not met within the
/// iteration limit. Every post-iteration failure carries the partial
/// step history.
pub fn solve<F, G, Obs>(
    f: F,
    df: G,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
    Obs: Observer<Step, Action>,
{
    if !x0.is_finite() {
        return Err(Error::InvalidGuess { x0 });
    }

    let mut x = x0;
    let mut steps = Vec::new();

    for iter in 1..=config.max_iters() {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(Error::Diverged {
                x,
                residual: fx,
                steps,
            });
        }

        if fx.abs() <= config.residual_tol() {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual: fx,
                iters: iter - 1,
                steps,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < config.derivative_floor() {
            return Err(Error::ZeroDerivative {
                x,
                derivative: dfx,
                steps,
            });
        }

        let step = Step {
            iter,
            x,
            residual: fx,
            derivative: dfx,
        };
        steps.push(step);

        if matches!(observer.observe(&step), Some(Action::StopEarly)) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual: fx,
                iters: iter,
                steps,
            });
        }

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            return Err(Error::Diverged {
                x: x_next,
                residual: fx,
                steps,
            });
        }

        if (x_next - x).abs() <= config.x_abs_tol() + config.x_rel_tol() * x_next.abs() {
            let residual = f(x_next);
            if !residual.is_finite() {
                return Err(Error::Diverged {
                    x: x_next,
                    residual,
                    steps,
                });
            }
            return Ok(Solution {
                status: Status::Converged,
                x: x_next,
                residual,
                iters: iter,
                steps,
            });
        }

        x = x_next;
    }

    let residual = f(x);
    Err(Error::MaxIters {
        iters: config.max_iters(),
        x,
        residual,
        steps,
    })
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// Same conditions as [`solve`].
pub fn solve_unobserved<F, G>(f: F, df: G, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    solve(f, df, x0, config, ())
}
