use crate::optimization::ternary::SliceKind;

/// Emitted after each outer iteration, once both axes have been searched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Outer iteration counter (1-based).
    pub iter: usize,
    /// Point after the `x` and `y` line searches.
    pub point: [f64; 2],
    /// Objective at `point`.
    pub value: f64,
    /// Absolute change in objective since the previous iteration.
    pub change: f64,
    /// Line search labels for the `x` and `y` axes.
    pub slices: [SliceKind; 2],
}

/// Control actions supported by coordinate descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after this iteration and report its point.
    StopEarly,
}
