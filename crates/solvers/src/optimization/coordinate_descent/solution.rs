use crate::optimization::ternary::SliceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The objective changed by at most the tolerance between iterations.
    Converged,
    MaxIters,
    StoppedByObserver,
}

/// Heuristic extremum label for a coordinate descent result.
///
/// This is the conjunction of the two line search labels: it is
/// [`Extremum::Minimum`] or [`Extremum::Maximum`] only when both axes agree.
/// The labels come from which half each line search retained last, so
/// neither value is a proof of the point's nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Minimum,
    Maximum,
    Mixed,
}

impl Extremum {
    pub(super) fn from_slices(slices: [SliceKind; 2]) -> Self {
        match slices {
            [SliceKind::Minimum, SliceKind::Minimum] => Self::Minimum,
            [SliceKind::Maximum, SliceKind::Maximum] => Self::Maximum,
            _ => Self::Mixed,
        }
    }
}

/// The result of a coordinate descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,

    /// Final point `[x, y]`.
    pub point: [f64; 2],

    /// Objective at `point`.
    pub value: f64,

    pub extremum: Extremum,

    /// Number of outer iterations.
    pub iters: usize,
}
