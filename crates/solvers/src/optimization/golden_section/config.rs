use optima_core::{Tolerance, ToleranceError};

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iters: 200,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The search stops once the bracket width is at most `tolerance`.
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

    /// Returns the bracket width tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.get()
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
