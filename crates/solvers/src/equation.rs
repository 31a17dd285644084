//! Solvers for equations — finding roots of scalar functions.
//!
//! A root of `f` is an `x` with `f(x) = 0`. Solvers in this module drive
//! `|f(x)|` below a tolerance.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on an interval with a sign change
//! - [`newton`] — fast local convergence from a starting guess, using `f'`

pub mod bisection;
pub mod newton;
