use crate::EvalError;

/// Iteration events emitted by the bisection solver.
///
/// One event is emitted per midpoint evaluation. Endpoint evaluations are
/// not observed: a failure there means no bracket exists.
#[derive(Debug)]
pub enum Event<'a, E> {
    /// The midpoint was evaluated successfully.
    Evaluated {
        /// Iteration counter (1-based).
        iter: usize,
        /// Bracket before this iteration's update.
        bracket: [f64; 2],
        /// The midpoint.
        x: f64,
        /// The function value at the midpoint.
        residual: f64,
    },

    /// The midpoint evaluation failed.
    Failed {
        /// Iteration counter (1-based).
        iter: usize,
        /// Bracket before this iteration's update.
        bracket: [f64; 2],
        /// The midpoint.
        x: f64,
        /// Why the evaluation failed.
        error: &'a EvalError<E>,
    },
}

impl<E> Event<'_, E> {
    /// Returns the iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. } | Self::Failed { iter, .. } => *iter,
        }
    }

    /// Returns the midpoint that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { x, .. } | Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the bracket before this iteration's update.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        match self {
            Self::Evaluated { bracket, .. } | Self::Failed { bracket, .. } => *bracket,
        }
    }

    /// Returns the residual, or the error if the evaluation failed.
    pub fn result(&self) -> Result<f64, &EvalError<E>> {
        match self {
            Self::Evaluated { residual, .. } => Ok(*residual),
            Self::Failed { error, .. } => Err(error),
        }
    }
}
