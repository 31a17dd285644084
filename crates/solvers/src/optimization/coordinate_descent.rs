//! Coordinate descent for functions of two variables.
//!
//! Each outer iteration holds `y` fixed and runs a [ternary](super::ternary)
//! line search over `x` inside the configured window, then holds the new `x`
//! and searches over `y`. Iteration stops once the objective changes by at
//! most the tolerance between outer iterations.
//!
//! The line searches always look inside the same fixed window, not around
//! the current point, so the starting point only matters through the first
//! fixed coordinate. Non-convex functions may not settle; the outer
//! iteration cap reports that as [`Status::MaxIters`].

mod config;
mod error;
mod event;
mod solution;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Extremum, Solution, Status};

use optima_core::{Function, Observer};

use crate::{evaluate::evaluate, optimization::ternary};

/// A one-variable slice of `f` along `axis`, holding the other coordinate.
struct Slice<'a, F> {
    f: &'a F,
    axis: usize,
    point: [f64; 2],
}

impl<F> Slice<'_, F> {
    fn at(&self, t: f64) -> [f64; 2] {
        let mut point = self.point;
        point[self.axis] = t;
        point
    }
}

impl<F: Function<2>> Function<1> for Slice<'_, F> {
    type Error = F::Error;

    fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        self.f.call(&self.at(x[0]))
    }
}

/// Minimizes `f` by alternating line searches along each axis from `start`.
///
/// # Errors
///
/// Returns an error if any evaluation fails or yields a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    start: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function<2>,
    Obs: Observer<Event, Action>,
{
    let line_config = config.line_search();
    let mut point = start;
    let mut value = evaluate(f, point).map_err(|err| Error::at(point, err))?;
    let mut slices = [ternary::SliceKind::Minimum; 2];

    for iter in 1..=config.max_iters() {
        for axis in 0..2 {
            let slice = Slice { f, axis, point };
            let line = ternary::minimize(&slice, config.window(), &line_config)
                .map_err(|err| line_error(&slice, err))?;
            point[axis] = line.x;
            slices[axis] = line.kind;
        }

        let next = evaluate(f, point).map_err(|err| Error::at(point, err))?;
        let change = (next - value).abs();
        value = next;

        let event = Event {
            iter,
            point,
            value,
            change,
            slices,
        };
        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if change <= config.tolerance() {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                point,
                value,
                extremum: Extremum::from_slices(slices),
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        point,
        value,
        extremum: Extremum::from_slices(slices),
        iters: config.max_iters(),
    })
}

/// Runs coordinate descent without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function<2>>(
    f: &F,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, start, config, ())
}

fn line_error<F>(slice: &Slice<'_, F>, err: ternary::Error) -> Error {
    let point = slice.at(err.x());
    match err {
        ternary::Error::Function { source, .. } => Error::Function { point, source },
        ternary::Error::NonFiniteValue { value, .. } => Error::NonFiniteValue { point, value },
    }
}
