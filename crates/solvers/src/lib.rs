//! Numerical solvers for scalar functions of one or two variables.
//!
//! Every solver is generic over [`optima_core::Function`], takes a validated
//! `Config`, and reports a `Solution` carrying a `Status` or a
//! solver-specific `Error`. Solvers that expose per-iteration events accept an
//! [`optima_core::Observer`]; each also has an `*_unobserved` convenience
//! wrapper.
//!
//! # Modules
//!
//! - [`equation`] — root finding: [`equation::bisection`], [`equation::newton`]
//! - [`optimization`] — extremum search: [`optimization::golden_section`],
//!   [`optimization::ternary`], [`optimization::coordinate_descent`]
//! - [`quadrature`] — definite integrals by midpoint, trapezoid, and Simpson rules

mod evaluate;

pub mod equation;
pub mod optimization;
pub mod quadrature;

pub use evaluate::EvalError;
