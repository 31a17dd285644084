/// A Newton step about to be taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current iterate.
    pub x: f64,
    /// `f(x)`.
    pub residual: f64,
    /// `f'(x)`.
    pub derivative: f64,
    /// The next iterate, `x - f(x) / f'(x)`.
    pub next: f64,
}

/// Control actions supported by Newton's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before taking the step and report the current iterate.
    StopEarly,
}
