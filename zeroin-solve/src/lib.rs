//! Root-finding solvers for continuous scalar functions.
//!
//! Each solver finds an `x` with `f(x) = 0` for a caller-supplied
//! `f: Fn(f64) -> f64`, taking all tolerances and iteration limits as
//! explicit [`Config`] parameters and returning either a converged
//! [`Solution`] or an error that explains why convergence did not occur.
//!
//! # Solvers
//!
//! - [`bisection`] — interval halving on a verified sign-change bracket;
//!   guaranteed convergence under its precondition
//! - [`newton`] — derivative-guided iteration from a single starting
//!   point; fast near a simple root but with no convergence guarantee
//! - [`hybrid`] — Newton steps constrained to a shrinking bracket, with
//!   bisection fallback whenever a step is unusable
//! - [`scan`] — partitions a larger interval and collects every root that
//!   bisection finds in a sign-changing subinterval
//!
//! Solutions carry the full iteration history as an ordered list of
//! steps, and failures carry the partial history up to the failure point.
//! Observers can watch each step as it happens and stop a solve early;
//! see [`Observer`].
//!
//! [`Config`]: bisection::Config
//! [`Solution`]: bisection::Solution

mod bracket;
mod observe;

pub mod bisection;
pub mod hybrid;
pub mod newton;
pub mod scan;

pub use bracket::BracketError;
pub use observe::Observer;
