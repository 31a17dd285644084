//! Textual scalar formulas: parsing, evaluation, and differentiation.
//!
//! An [`Expression`] is parsed once from text and can then be evaluated any
//! number of times against fresh variable [`Bindings`]. Parsing resolves every
//! function name against a fixed registry of [`Builtin`]s, so evaluation never
//! looks anything up by name except variables.
//!
//! ```
//! use optima_expr::Expression;
//!
//! let expr: Expression = "2*x + 1".parse().unwrap();
//! assert_eq!(expr.eval(&[("x", 5.0)]).unwrap(), 11.0);
//!
//! let slope = expr.derivative("x").unwrap();
//! assert_eq!(slope.to_string(), "2");
//! ```
//!
//! Errors are split by phase: [`ParseError`] for malformed text (fatal) and
//! [`EvalError`] for problems at a particular set of bindings (a solver may
//! retry at another point).
//!
//! [`Bound`] adapts an expression to the [`optima_core::Function`] trait so
//! the solvers can drive it, and [`sample`] / [`sample_grid`] produce dense
//! point sets for plotting.

mod ast;
mod bind;
mod builtin;
mod derivative;
mod error;
mod expression;
mod parser;
mod sample;

pub use bind::Bound;
pub use builtin::Builtin;
pub use derivative::DerivativeError;
pub use error::{EvalError, ParseError};
pub use expression::{Bindings, Expression};
pub use sample::{GridSample, Sample, sample, sample_grid};
