use std::error::Error as StdError;

use crate::EvalError;

/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite objective {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl Error {
    pub(super) fn at<E>(x: f64, err: EvalError<E>) -> Self
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
}
