//! Safeguarded Newton: bracketed Newton–Raphson with bisection fallback.
//!
//! # Algorithm
//!
//! The solver maintains a sign-change bracket exactly as bisection does,
//! plus a current estimate initialized to the bracket midpoint. Each
//! iteration proposes a Newton step from the current estimate and
//! accepts it only if:
//!
//! - the derivative is finite and at least the derivative floor,
//! - the candidate lands strictly inside the current bracket, and
//! - the residual magnitude at the candidate does not exceed the
//!   residual magnitude at the current estimate.
//!
//! A rejected proposal falls back to one bisection step at the bracket
//! midpoint. Either way the bracket then shrinks by discarding the side
//! that no longer brackets a sign change, so the result is at least as
//! reliable as bisection while converging like Newton–Raphson whenever
//! Newton–Raphson behaves.
//!
//! A bad derivative alone can therefore never fail the solve; without a
//! derivative the solver degrades to pure bisection.
//!
//! # Observer Steps
//!
//! Each recorded [`Step`] carries a [`StepKind`] identifying whether the
//! Newton proposal was accepted or the bisection fallback ran.
//! Observers can return [`Action::StopEarly`] to halt and receive the
//! best point seen so far.

mod config;
mod error;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status, Step, StepKind};

use crate::Observer;
use crate::bracket::{Bounds, Bracket, Sign};

/// Control actions supported by the hybrid solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,
}

/// Finds a root of `f` inside `interval` using bracketed Newton–Raphson
/// with bisection fallback.
///
/// Passing `None` for the derivative runs pure bisection steps. Callers
/// without a derivative can write `None::<fn(f64) -> f64>`.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the interval is malformed or
/// does not bracket a sign change, [`Error::NonFinite`] if `f` returns
/// a non-finite value, and [`Error::MaxIters`] if the tolerances are
/// not met within the iteration limit.
pub fn solve<F, G, Obs>(
    f: F,
    df: Option<G>,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
    Obs: Observer<Step, Action>,
{
    let bounds = Bounds::new(interval)?;

    let f_left = residual_at(&f, bounds.left)?;
    if f_left.abs() <= config.residual_tol() {
        return Ok(Solution::at_point(bounds.left, f_left));
    }

    let f_right = residual_at(&f, bounds.right)?;
    if f_right.abs() <= config.residual_tol() {
        return Ok(Solution::at_point(bounds.right, f_right));
    }

    let mut bracket = Bracket::new(bounds, Sign::of(f_left), Sign::of(f_right))?;

    let mut x = bracket.midpoint();
    let mut fx = residual_at(&f, x)?;
    if fx.abs() <= config.residual_tol() {
        return Ok(Solution::at_point(x, fx));
    }

    let (mut best_x, mut best_residual) = (x, fx);
    let mut steps = Vec::new();

    for iter in 1..=config.max_iters() {
        let mut candidate = None;
        if let Some(df) = &df {
            let dfx = df(x);
            if dfx.is_finite() && dfx.abs() >= config.derivative_floor() {
                let x_newton = x - fx / dfx;
                if x_newton.is_finite() && bracket.contains(x_newton) {
                    let f_newton = f(x_newton);
                    if !f_newton.is_finite() {
                        return Err(Error::NonFinite {
                            x: x_newton,
                            value: f_newton,
                            steps,
                        });
                    }
                    if f_newton.abs() <= fx.abs() {
                        candidate = Some((x_newton, f_newton, dfx));
                    }
                }
            }
        }

        let (x_next, f_next, kind, derivative) = match candidate {
            Some((x_newton, f_newton, dfx)) => {
                (x_newton, f_newton, StepKind::Newton, Some(dfx))
            }
            None => {
                let mid = bracket.midpoint();
                let f_mid = f(mid);
                if !f_mid.is_finite() {
                    return Err(Error::NonFinite {
                        x: mid,
                        value: f_mid,
                        steps,
                    });
                }
                (mid, f_mid, StepKind::Bisection, None)
            }
        };

        let step = Step {
            iter,
            kind,
            bracket: bracket.as_array(),
            x: x_next,
            residual: f_next,
            derivative,
        };
        steps.push(step);

        if f_next.abs() < best_residual.abs() {
            best_x = x_next;
            best_residual = f_next;
        }

        if matches!(observer.observe(&step), Some(Action::StopEarly)) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: best_x,
                residual: best_residual,
                iters: iter,
                steps,
            });
        }

        if f_next.abs() <= config.residual_tol() {
            return Ok(Solution {
                status: Status::Converged,
                x: x_next,
                residual: f_next,
                iters: iter,
                steps,
            });
        }

        bracket.shrink(x_next, Sign::of(f_next));
        x = x_next;
        fx = f_next;

        if bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol()) {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual: fx,
                iters: iter,
                steps,
            });
        }
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        bracket: bracket.as_array(),
        x: best_x,
        residual: best_residual,
        steps,
    })
}

/// Runs the hybrid solver without observation.
///
/// # Errors
///
/// Same conditions as [`solve`].
pub fn solve_unobserved<F, G>(
    f: F,
    df: Option<G>,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    solve(f, df, interval, config, ())
}

/// Evaluates `f` at a point, rejecting non-finite values.
fn residual_at<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite {
            x,
            value,
            steps: Vec::new(),
        })
    }
}
