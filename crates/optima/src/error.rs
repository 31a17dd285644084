use std::{error::Error as StdError, fmt};

use optima_core::{IntervalError, ToleranceError};
use optima_expr::{DerivativeError, EvalError, ParseError};
use thiserror::Error;

use crate::Location;

/// Why a solve call produced no result.
///
/// Every failure the solvers can hit is reported here rather than as a NaN
/// or a panic. Use [`SolveError::kind`] for a stable classification when
/// rendering messages.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The formula text is malformed.
    #[error("invalid formula: {0}")]
    Parse(#[from] ParseError),

    /// The formula could not be evaluated at a probe point.
    #[error("evaluation failed at {at}: {source}")]
    Eval {
        at: Location,
        #[source]
        source: EvalError,
    },

    /// Bisection endpoints have the same sign.
    #[error(
        "no sign change on [{low}, {high}]: f({low}) = {low_value}, f({high}) = {high_value}"
    )]
    NoBracket {
        low: f64,
        high: f64,
        low_value: f64,
        high_value: f64,
    },

    /// Bisection endpoints have equal nonzero values.
    #[error("function has the same value {value} at both ends of the interval")]
    FlatFunction { value: f64 },

    /// Newton's method reached a near-zero derivative.
    #[error("derivative {derivative} is too close to zero at x = {x}")]
    DegenerateDerivative { x: f64, derivative: f64 },

    /// Newton's method stepped to a non-finite point.
    #[error("iteration diverged after x = {x}")]
    Diverged { x: f64 },

    /// The iteration cap was exhausted before the tolerance was met.
    #[error("no convergence after {iterations} iterations")]
    NonConvergence { iterations: usize },

    /// The formula could not be differentiated symbolically.
    #[error(transparent)]
    Derivative(#[from] DerivativeError),

    /// Bounds, tolerance, or another numeric input was rejected.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The time limit ran out.
    #[error("stopped after {iterations} iterations: time limit reached")]
    Stopped { iterations: usize },
}

/// A stable, data-free classification of [`SolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    Parse,
    Eval,
    NoBracket,
    FlatFunction,
    DegenerateDerivative,
    Diverged,
    NonConvergence,
    Derivative,
    InvalidInput,
    Stopped,
}

impl SolveError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Eval { .. } => ErrorKind::Eval,
            Self::NoBracket { .. } => ErrorKind::NoBracket,
            Self::FlatFunction { .. } => ErrorKind::FlatFunction,
            Self::DegenerateDerivative { .. } => ErrorKind::DegenerateDerivative,
            Self::Diverged { .. } => ErrorKind::Diverged,
            Self::NonConvergence { .. } => ErrorKind::NonConvergence,
            Self::Derivative(_) => ErrorKind::Derivative,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Stopped { .. } => ErrorKind::Stopped,
        }
    }

    /// Recovers the expression error behind a solver's boxed source.
    pub(crate) fn eval(at: Location, source: Box<dyn StdError + Send + Sync>) -> Self {
        match source.downcast::<EvalError>() {
            Ok(source) => Self::Eval {
                at,
                source: *source,
            },
            Err(other) => Self::InvalidInput {
                reason: other.to_string(),
            },
        }
    }

    pub(crate) fn non_finite(at: Location, value: f64) -> Self {
        Self::Eval {
            at,
            source: EvalError::NonFinite { value },
        }
    }
}

impl ErrorKind {
    /// Returns the snake_case name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Eval => "eval",
            Self::NoBracket => "no_bracket",
            Self::FlatFunction => "flat_function",
            Self::DegenerateDerivative => "degenerate_derivative",
            Self::Diverged => "diverged",
            Self::NonConvergence => "non_convergence",
            Self::Derivative => "derivative",
            Self::InvalidInput => "invalid_input",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<IntervalError> for SolveError {
    fn from(err: IntervalError) -> Self {
        Self::InvalidInput {
            reason: err.to_string(),
        }
    }
}

impl From<ToleranceError> for SolveError {
    fn from(err: ToleranceError) -> Self {
        Self::InvalidInput {
            reason: err.to_string(),
        }
    }
}
