/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the current bracket.
    StopEarly,

    /// Treat this point as having a worse objective than the other point.
    ///
    /// This causes the solver to shrink away from this point.
    /// The evaluation (if successful) is not considered for the best point.
    ///
    /// Use this to recover from a failed or non-finite evaluation when the
    /// failing region is known to be uninteresting, or to steer the search
    /// away from a region even when evaluation succeeded.
    AssumeWorse,
}
