use std::error::Error as StdError;

use thiserror::Error;

use crate::EvalError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("function is flat on the interval: f(a) = f(b) = {value}")]
    FlatFunction { value: f64 },

    #[error("no sign change in bracket: f({left}) = {left_value}, f({right}) = {right_value}")]
    NoBracket {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x}")]
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
