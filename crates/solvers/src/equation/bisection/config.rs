use optima_core::{Tolerance, ToleranceError};

/// Configuration for the bisection solver.
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
    /// `tolerance` bounds both the residual (`|f(x)| < tolerance` stops the
    /// search) and the bracket half-width.
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

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.get()
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
