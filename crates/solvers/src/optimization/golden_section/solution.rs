use super::Point;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width fell to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the optimum: the midpoint of the final bracket.
    pub x: f64,

    /// Final bracket `[left, right]`.
    pub bracket: [f64; 2],

    /// The best point actually evaluated during the search.
    pub best: Point,

    /// The worse of the two final interior objectives.
    ///
    /// This is a coarse estimate of the opposite extremum's value. It reuses
    /// the bookkeeping of the search and is only meaningful as a hint; it is
    /// not the result of searching for the opposite extremum. `None` when
    /// neither final interior point holds a real evaluation.
    pub opposite_estimate: Option<f64>,

    /// Number of shrink iterations performed.
    pub iters: usize,
}
