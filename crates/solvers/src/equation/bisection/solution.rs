/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root; always within `bracket`.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Final bracket `[left, right]`.
    pub bracket: [f64; 2],

    /// Number of midpoint evaluations performed.
    pub iters: usize,
}
