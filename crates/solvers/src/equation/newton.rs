//! Newton's method for roots of a function of one variable.
//!
//! Starting from `x0`, the solver repeatedly steps `x := x - f(x) / f'(x)`
//! until `|f(x)| < tolerance`. A derivative whose magnitude is below the
//! tolerance stops the iteration with [`Error::DegenerateDerivative`]
//! instead of producing an enormous or non-finite step.
//!
//! Convergence is local. A poor starting guess can cycle or diverge, which
//! the iteration cap turns into [`Status::MaxIters`].

mod config;
mod error;
mod event;
mod extremum;
mod solution;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use extremum::{Extremum, classify};
pub use solution::{Solution, Status};

use optima_core::{Function, Observer};

use crate::{EvalError, evaluate::evaluate};

/// Finds a root of `f` by Newton's method, using `df` as its derivative.
///
/// # Errors
///
/// Returns an error if `f` or `df` fails or returns a non-finite value,
/// if the derivative is within tolerance of zero at an iterate, or if a
/// step lands on a non-finite iterate.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function<1>,
    D: Function<1>,
    Obs: Observer<Event, Action>,
{
    let eps = config.tolerance();
    let mut x = x0;
    let mut iter = 0;

    loop {
        let residual = evaluate(f, [x]).map_err(|err| match err {
            EvalError::Function(source) => Error::Function {
                x,
                source: Box::new(source),
            },
            EvalError::NonFinite(value) => Error::NonFiniteValue { x, value },
        })?;

        if residual.abs() < eps {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters: iter,
            });
        }

        if iter == config.max_iters() {
            return Ok(Solution {
                status: Status::MaxIters,
                x,
                residual,
                iters: iter,
            });
        }

        let derivative = evaluate(df, [x]).map_err(|err| match err {
            EvalError::Function(source) => Error::Derivative {
                x,
                source: Box::new(source),
            },
            EvalError::NonFinite(value) => Error::NonFiniteDerivative { x, value },
        })?;

        if derivative.abs() < eps {
            return Err(Error::DegenerateDerivative { x, derivative });
        }

        let next = x - residual / derivative;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { from: x, x: next });
        }

        let event = Event {
            iter: iter + 1,
            x,
            residual,
            derivative,
            next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                iters: iter,
            });
        }

        iter += 1;
        x = next;
    }
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function<1>,
    D: Function<1>,
{
    solve(f, df, x0, config, ())
}
