/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `|f(x)|` fell below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,

    /// Final iterate.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Number of Newton steps taken.
    pub iters: usize,
}
