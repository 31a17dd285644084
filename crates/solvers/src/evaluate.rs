use thiserror::Error;

use optima_core::Function;

/// Errors that can occur when a solver evaluates its function.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The function reported an error.
    #[error("function evaluation failed")]
    Function(#[source] E),

    /// The function returned NaN or an infinity.
    #[error("function returned non-finite value {0}")]
    NonFinite(f64),
}

/// Calls `f` at `x`, treating non-finite values as failures.
///
/// Solvers compare and combine function values, so a NaN or infinity must
/// never reach that logic.
pub(crate) fn evaluate<F, const N: usize>(f: &F, x: [f64; N]) -> Result<f64, EvalError<F::Error>>
where
    F: Function<N>,
{
    let value = f.call(&x).map_err(EvalError::Function)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(value))
    }
}
