//! Ternary line search over a fixed window.
//!
//! Each step probes the points one third and two thirds of the way across
//! the window, keeps the two thirds adjacent to the lower value, and repeats
//! until the window is at most `tolerance` wide. The midpoint of the final
//! window is reported. Every step costs two evaluations, so golden section
//! search is cheaper for standalone use; this search is the line search
//! behind [`coordinate_descent`](super::coordinate_descent).
//!
//! Each solution carries a [`SliceKind`], read off the half retained by the
//! last step. It is a heuristic label and says nothing reliable about the
//! function's shape.

use std::error::Error as StdError;

use optima_core::{Function, Interval, Tolerance, ToleranceError};
use thiserror::Error;

use crate::{EvalError, evaluate::evaluate};

/// Configuration for the ternary line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iters: 500,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ToleranceError> {
        Ok(Self {
            tolerance: Tolerance::new(tolerance)?,
            max_iters,
        })
    }

    pub(crate) fn from_parts(tolerance: Tolerance, max_iters: usize) -> Self {
        Self {
            tolerance,
            max_iters,
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.get()
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Heuristic label for what the line search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    /// The last step kept the lower-left two thirds (`f(m1) < f(m2)`), or no
    /// step was taken.
    Minimum,
    /// The last step kept the upper-right two thirds.
    Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    MaxIters,
}

/// The result of a ternary line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,

    /// Midpoint of the final window.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Final window `[left, right]`.
    pub window: [f64; 2],

    pub kind: SliceKind,

    /// Number of narrowing steps.
    pub iters: usize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl Error {
    fn at<E>(x: f64, err: EvalError<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Function(source) => Self::Function {
                x,
                source: Box::new(source),
            },
            EvalError::NonFinite(value) => Self::NonFiniteValue { x, value },
        }
    }

    /// Returns the probe point where the failure occurred.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Function { x, .. } | Self::NonFiniteValue { x, .. } => *x,
        }
    }
}

/// Searches `window` for a minimum of `f` by repeated thirds.
///
/// # Errors
///
/// Returns an error if any probe fails or yields a non-finite value.
pub fn minimize<F: Function<1>>(
    f: &F,
    window: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    let probe = |x: f64| evaluate(f, [x]).map_err(|err| Error::at(x, err));

    let [mut a, mut b] = window.bounds();
    let mut kind = SliceKind::Minimum;
    let mut iters = 0;
    let mut status = Status::Converged;

    while b - a > config.tolerance() {
        if iters == config.max_iters() {
            status = Status::MaxIters;
            break;
        }
        iters += 1;

        let third = b / 3.0 - a / 3.0;
        let m1 = a + third;
        let m2 = b - third;

        if probe(m1)? < probe(m2)? {
            b = m2;
            kind = SliceKind::Minimum;
        } else {
            a = m1;
            kind = SliceKind::Maximum;
        }
    }

    let x = 0.5 * a + 0.5 * b;
    Ok(Solution {
        status,
        x,
        value: probe(x)?,
        window: [a, b],
        kind,
        iters,
    })
}
