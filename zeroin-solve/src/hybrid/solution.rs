/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The kind of step the solver took in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// An accepted Newton proposal.
    Newton,

    /// A bisection step at the bracket midpoint.
    Bisection,
}

/// A per-iteration snapshot recorded during a hybrid solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Whether the Newton proposal was accepted or the bisection
    /// fallback ran.
    pub kind: StepKind,

    /// Search bracket at the start of this iteration.
    pub bracket: [f64; 2],

    /// The evaluated point.
    pub x: f64,

    /// Function value at the evaluated point.
    pub residual: f64,

    /// Derivative used by an accepted Newton proposal, if any.
    pub derivative: Option<f64>,
}

/// The result of a hybrid solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// The recorded iteration history, in order.
    pub steps: Vec<Step>,
}

impl Solution {
    /// Constructs a zero-iteration solution at a point whose residual
    /// already meets the tolerance.
    pub(crate) fn at_point(x: f64, residual: f64) -> Self {
        Self {
            status: Status::Converged,
            x,
            residual,
            iters: 0,
            steps: Vec::new(),
        }
    }
}
