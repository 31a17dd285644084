use optima_core::{Tolerance, ToleranceError};

/// Configuration for Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `tolerance` is both the residual threshold (`|f(x)| < tolerance`
    /// converges) and the derivative magnitude below which a step is refused.
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

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.get()
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
