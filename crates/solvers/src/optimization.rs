//! Solvers for optimization problems — minimizing or maximizing an objective.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free search over a bracketed interval for
//!   unimodal functions of one variable
//! - [`ternary`] — thirds-based line search over a fixed window
//! - [`coordinate_descent`] — alternating line searches for functions of two
//!   variables

pub mod coordinate_descent;
pub mod golden_section;
pub mod ternary;
