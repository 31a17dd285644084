use super::Sign;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the midpoint of the current bracket.
    StopEarly,

    /// Assume a residual sign for the bracket update.
    ///
    /// This action is mainly used for error recovery: a midpoint where the
    /// function is undefined can still shrink the bracket. If used on a
    /// successful evaluation, the residual is ignored, including its
    /// convergence check.
    AssumeResidualSign(Sign),
}

impl Action {
    /// Assumes a positive residual sign for the bracket update.
    #[must_use]
    pub fn assume_positive() -> Self {
        Self::AssumeResidualSign(Sign::Positive)
    }

    /// Assumes a negative residual sign for the bracket update.
    #[must_use]
    pub fn assume_negative() -> Self {
        Self::AssumeResidualSign(Sign::Negative)
    }
}
