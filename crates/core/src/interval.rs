use thiserror::Error;

/// A closed search interval `[low, high]` with `low < high`.
///
/// Solvers narrow an interval as they iterate but never widen it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Interval {
    low: f64,
    high: f64,
}

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("interval bound is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("interval lower bound {low} must be less than upper bound {high}")]
    NotOrdered { low: f64, high: f64 },
}

impl Interval {
    /// Creates an interval from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or if `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self, IntervalError> {
        if !low.is_finite() {
            return Err(IntervalError::NonFinite { value: low });
        }
        if !high.is_finite() {
            return Err(IntervalError::NonFinite { value: high });
        }
        if low >= high {
            return Err(IntervalError::NotOrdered { low, high });
        }
        Ok(Self { low, high })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns `high - low`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the midpoint of the interval.
    ///
    /// Finite for any valid interval, even when [`Interval::width`] overflows.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.low + 0.5 * self.high
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Returns the bounds as `[low, high]`.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        interval.bounds()
    }
}
