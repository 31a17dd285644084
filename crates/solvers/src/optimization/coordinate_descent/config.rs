use optima_core::{Interval, Tolerance, ToleranceError};

use crate::optimization::ternary;

/// Configuration for coordinate descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    window: Interval,
    max_iters: usize,
    line_max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            // Known-good bounds, expect is safe
            window: Interval::new(-10.0, 10.0).expect("default window is ordered"),
            max_iters: 100,
            line_max_iters: 500,
        }
    }
}

impl Config {
    /// Creates a new config with the default window and iteration caps.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ToleranceError> {
        Ok(Self {
            tolerance: Tolerance::new(tolerance)?,
            ..Self::default()
        })
    }

    /// Sets the window each line search is restricted to.
    #[must_use]
    pub fn with_window(self, window: Interval) -> Self {
        Self { window, ..self }
    }

    /// Sets the maximum number of outer iterations.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Sets the maximum number of narrowing steps per line search.
    #[must_use]
    pub fn with_line_max_iters(self, line_max_iters: usize) -> Self {
        Self {
            line_max_iters,
            ..self
        }
    }

    /// Returns the tolerance on the change in objective between outer
    /// iterations, also used as the line search window tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.get()
    }

    #[must_use]
    pub fn window(&self) -> Interval {
        self.window
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn line_max_iters(&self) -> usize {
        self.line_max_iters
    }

    pub(super) fn line_search(&self) -> ternary::Config {
        ternary::Config::from_parts(self.tolerance, self.line_max_iters)
    }
}
