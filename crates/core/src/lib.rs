//! Core traits and types for the Optima solvers.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! expression bindings build on:
//!
//! - [`Function`] — a scalar function of `N` solver variables
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Interval`] — a validated, ordered search interval
//! - [`Tolerance`] — a strictly positive convergence threshold

mod function;
mod interval;
mod observer;
mod tolerance;

pub use function::Function;
pub use interval::{Interval, IntervalError};
pub use observer::Observer;
pub use tolerance::{Tolerance, ToleranceError};
