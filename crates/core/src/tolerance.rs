use thiserror::Error;

/// A strictly positive convergence threshold (epsilon).
///
/// Depending on the solver, the threshold applies to an interval width,
/// a successive-iterate difference, or a function-value magnitude.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "f64", into = "f64"))]
pub struct Tolerance(f64);

/// Error returned for a tolerance that is not finite and strictly positive.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("tolerance must be finite and positive, got {0}")]
pub struct ToleranceError(pub f64);

impl Tolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is non-finite, zero, or negative.
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ToleranceError(value))
        }
    }

    /// Returns the threshold value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Defaults to `1e-10`.
impl Default for Tolerance {
    fn default() -> Self {
        Self(1e-10)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}
