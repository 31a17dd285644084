//! Root finding and extremum search for formulas given as text.
//!
//! Every entry point takes the formula as a string in the variable `x` (and
//! `y` for [`coordinate_descent`]), compiles it once, runs a solver from
//! `optima-solvers`, and returns either an [`Outcome`] or a [`SolveError`]:
//!
//! - [`bisect`] — root on a sign-changing interval
//! - [`newton`] — root from a starting point, with an optional derivative
//! - [`golden_section`] — minimum or maximum on an interval
//! - [`coordinate_descent`] — minimum of a two-variable formula
//! - [`integrate`], [`differentiate`], [`evaluate`], [`sample`],
//!   [`sample_surface`] — the supporting calculus and plotting helpers
//!
//! ```
//! use optima::{Classification, Settings, bisect, newton};
//!
//! let settings = Settings::default();
//!
//! let root = bisect("x^2 - 2", 0.0, 2.0, &settings).unwrap();
//! assert!((root.x().unwrap() - 2f64.sqrt()).abs() < 1e-5);
//! assert_eq!(root.classification, Classification::Root);
//!
//! let root = newton("x^2 - 4", Some("2*x"), 3.0, &settings).unwrap();
//! assert!((root.x().unwrap() - 2.0).abs() < 1e-6);
//! ```
//!
//! Failures are never reported as NaN. [`SolveError::kind`] gives a stable
//! [`ErrorKind`] for callers that render their own messages.

mod calculus;
mod error;
mod extremum;
mod outcome;
mod root;
mod settings;
mod watch;

pub use calculus::{differentiate, evaluate, integrate, sample, sample_surface};
pub use error::{ErrorKind, SolveError};
pub use extremum::{Goal, coordinate_descent, golden_section};
pub use outcome::{Advisory, Classification, Curvature, Integral, Location, Outcome, Probe};
pub use root::{bisect, newton};
pub use settings::Settings;

pub use optima_expr::{Expression, GridSample, Sample};
pub use optima_solvers::quadrature::Rule;
