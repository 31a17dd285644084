use optima_core::Interval;

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value, counting both zeros as positive.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// Current bracket bounds and the residual sign at the left bound.
///
/// The right bound always carries the opposite sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    pub(super) fn new(interval: Interval, left_sign: Sign) -> Self {
        Self {
            left: interval.low(),
            right: interval.high(),
            left_sign,
        }
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    pub(super) fn half_width(&self) -> f64 {
        0.5 * self.right - 0.5 * self.left
    }

    /// Replaces whichever bound shares `sign` with `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}
