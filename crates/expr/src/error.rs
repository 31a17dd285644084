use thiserror::Error;

/// Errors that can occur when parsing formula text.
///
/// A parse error means the text itself is malformed; no choice of variable
/// values can fix it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("formula is empty")]
    Empty,

    #[error("syntax error at position {position}")]
    Syntax { position: usize },

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedInput { position: usize, found: char },

    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("formula has more than {limit} operators")]
    TooLarge { limit: usize },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("function '{name}' takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur when evaluating a parsed expression.
///
/// Unlike [`ParseError`], most of these depend on the values bound to the
/// variables; see [`EvalError::is_retryable`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("variable '{name}' is not bound")]
    UnboundVariable { name: String },

    #[error("variable '{name}' is bound to non-finite value {value}")]
    NonFiniteBinding { name: String, value: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({argument}) is undefined")]
    Domain {
        function: &'static str,
        argument: f64,
    },

    #[error("result is not finite: {value}")]
    NonFinite { value: f64 },
}

impl EvalError {
    /// Returns true if the failure is specific to the evaluated point.
    ///
    /// Domain violations and non-finite values may disappear at a different
    /// probe point. An unbound variable fails everywhere.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::UnboundVariable { .. })
    }
}
