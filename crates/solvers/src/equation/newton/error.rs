use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("derivative {derivative} is too close to zero at x = {x}")]
    DegenerateDerivative { x: f64, derivative: f64 },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("non-finite derivative {value} at x = {x}")]
    NonFiniteDerivative { x: f64, value: f64 },

    #[error("step from x = {from} produced non-finite iterate {x}")]
    NonFiniteIterate { from: f64, x: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("derivative evaluation failed at x = {x}")]
    Derivative {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
