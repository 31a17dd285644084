use std::error::Error as StdError;

use thiserror::Error;

use crate::EvalError;

/// Errors that can occur during coordinate descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("function evaluation failed at ({}, {})", point[0], point[1])]
    Function {
        point: [f64; 2],
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at ({}, {})", point[0], point[1])]
    NonFiniteValue { point: [f64; 2], value: f64 },
}

impl Error {
    pub(super) fn at<E>(point: [f64; 2], err: EvalError<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Function(source) => Self::Function {
                point,
                source: Box::new(source),
            },
            EvalError::NonFinite(value) => Self::NonFiniteValue { point, value },
        }
    }

    /// Returns the point where the failing evaluation was attempted.
    #[must_use]
    pub fn point(&self) -> [f64; 2] {
        match self {
            Self::Function { point, .. } | Self::NonFiniteValue { point, .. } => *point,
        }
    }
}
