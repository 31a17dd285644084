//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It maintains two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward the
//! better point. The retained interior point is reused, so every iteration
//! after initialization costs exactly one evaluation.
//!
//! The search runs while the bracket is wider than the tolerance and reports
//! the midpoint of the final bracket.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: May find a local optimum if multiple extrema exist
//! - **Opposite estimate**: [`Solution::opposite_estimate`] is a by-product of
//!   the bookkeeping, not a search for the opposite extremum
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after initialization:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::Failed`] — the function returned an error or a non-finite value
//!
//! Each event includes `other`, the other interior point. During
//! **initialization**, the solver evaluates two points but emits only one
//! event (for the second point), since the first has no `other` yet.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other` (useful for
//! error recovery or steering the search away from a region). A non-finite
//! objective is never compared directly: without `AssumeWorse` it is an error.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use optima_core::{Function, Interval, Observer};

use search::search;

/// Finds the minimum of `f` on `interval` using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if an evaluation fails or is non-finite and the observer
/// does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<F, Obs>(
    f: &F,
    interval: Interval,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function<1>,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    search(f, interval, config, observer, |v| v)
}

/// Finds the minimum of `f` without observer support.
///
/// # Errors
///
/// Returns an error if an evaluation fails or is non-finite.
pub fn minimize_unobserved<F: Function<1>>(
    f: &F,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    minimize(f, interval, config, ())
}

/// Finds the maximum of `f` on `interval` using golden section search.
///
/// # Errors
///
/// Returns an error if an evaluation fails or is non-finite and the observer
/// does not return [`Action::AssumeWorse`] to recover.
pub fn maximize<F, Obs>(
    f: &F,
    interval: Interval,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function<1>,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    search(f, interval, config, observer, |v| -v)
}

/// Finds the maximum of `f` without observer support.
///
/// # Errors
///
/// Returns an error if an evaluation fails or is non-finite.
pub fn maximize_unobserved<F: Function<1>>(
    f: &F,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    maximize(f, interval, config, ())
}
