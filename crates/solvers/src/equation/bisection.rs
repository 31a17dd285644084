//! Bisection for roots of a function of one variable.
//!
//! The solver requires an interval whose endpoint values have opposite
//! signs. Each iteration evaluates the midpoint and keeps the half that
//! still contains the sign change, so the bracket half-width halves every
//! step. The search stops when `|f(mid)| < tolerance`, or when the bracket
//! half-width falls to `tolerance`, in which case the final midpoint is
//! reported.
//!
//! An endpoint that is already within tolerance of zero is returned without
//! iterating.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per midpoint evaluation. Observers may return
//! [`Action::StopEarly`] or [`Action::AssumeResidualSign`], the latter
//! allowing recovery from midpoints where the function is undefined.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::Sign;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use optima_core::{Function, Interval, Observer};

use crate::evaluate::evaluate;

use bracket::Bracket;

/// Finds a root of `f` on `interval` by bisection.
///
/// # Errors
///
/// Returns [`Error::FlatFunction`] if the endpoint values are equal and
/// nonzero, [`Error::NoBracket`] if they share a sign, and
/// [`Error::Function`] or [`Error::NonFiniteValue`] if an evaluation fails
/// and the observer does not recover from it.
pub fn solve<F, Obs>(
    f: &F,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function<1>,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    let eps = config.tolerance();
    let [left, right] = interval.bounds();

    let left_value = evaluate(f, [left]).map_err(|err| Error::at(left, err))?;
    if left_value.abs() < eps {
        return Ok(endpoint(left, left_value, interval));
    }

    let right_value = evaluate(f, [right]).map_err(|err| Error::at(right, err))?;
    if right_value.abs() < eps {
        return Ok(endpoint(right, right_value, interval));
    }

    #[allow(clippy::float_cmp)]
    if left_value == right_value {
        return Err(Error::FlatFunction { value: left_value });
    }

    let left_sign = Sign::of(left_value);
    if left_sign == Sign::of(right_value) {
        return Err(Error::NoBracket {
            left,
            right,
            left_value,
            right_value,
        });
    }

    let mut bracket = Bracket::new(interval, left_sign);
    let mut iter = 0;

    while bracket.half_width() > eps {
        if iter == config.max_iters() {
            return finish(f, bracket, Status::MaxIters, iter);
        }
        iter += 1;

        let x = bracket.midpoint();
        let result = evaluate(f, [x]);

        let event = match &result {
            Ok(residual) => Event::Evaluated {
                iter,
                bracket: bracket.as_array(),
                x,
                residual: *residual,
            },
            Err(error) => Event::Failed {
                iter,
                bracket: bracket.as_array(),
                x,
                error,
            },
        };
        let action = observer.observe(&event);

        match action {
            Some(Action::StopEarly) => {
                return finish(f, bracket, Status::StoppedByObserver, iter);
            }
            Some(Action::AssumeResidualSign(sign)) => bracket.shrink(x, sign),
            None => {
                let residual = result.map_err(|err| Error::at(x, err))?;
                if residual.abs() < eps {
                    return Ok(Solution {
                        status: Status::Converged,
                        x,
                        residual,
                        bracket: bracket.as_array(),
                        iters: iter,
                    });
                }
                bracket.shrink(x, Sign::of(residual));
            }
        }
    }

    finish(f, bracket, Status::Converged, iter)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function<1>>(
    f: &F,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, interval, config, ())
}

fn endpoint(x: f64, residual: f64, interval: Interval) -> Solution {
    Solution {
        status: Status::Converged,
        x,
        residual,
        bracket: interval.bounds(),
        iters: 0,
    }
}

/// Reports the midpoint of the final bracket, evaluating it once more.
fn finish<F: Function<1>>(
    f: &F,
    bracket: Bracket,
    status: Status,
    iters: usize,
) -> Result<Solution, Error> {
    let x = bracket.midpoint();
    let residual = evaluate(f, [x]).map_err(|err| Error::at(x, err))?;
    Ok(Solution {
        status,
        x,
        residual,
        bracket: bracket.as_array(),
        iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{EvalError, evaluate::test_fns::*};

    fn interval(low: f64, high: f64) -> Interval {
        Interval::new(low, high).expect("valid interval")
    }

    fn config(tolerance: f64) -> Config {
        Config::new(tolerance, 200).expect("valid config")
    }

    #[test]
    fn finds_square_root() {
        let f = Scalar(|x| x * x - 9.0);

        let solution =
            solve_unobserved(&f, interval(0.0, 10.0), &config(1e-10)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-9);
        assert!(solution.residual.abs() < 1e-8);
    }

    #[test]
    fn root_stays_inside_final_bracket() {
        let f = Scalar(|x| x * x * x - 2.0);

        let solution =
            solve_unobserved(&f, interval(0.0, 2.0), &config(1e-6)).expect("should solve");

        let [left, right] = solution.bracket;
        assert!(left <= solution.x && solution.x <= right);
        assert!(solution.x > 0.0 && solution.x < 2.0);
        assert_relative_eq!(solution.x, 2f64.cbrt(), epsilon = 1e-6);
    }

    #[test]
    fn endpoint_root_returns_immediately() {
        let f = Scalar(|x| x - 1.0);

        let solution =
            solve_unobserved(&f, interval(1.0, 4.0), &config(1e-8)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn exact_midpoint_root_converges_in_one_step() {
        let f = Scalar(|x| x);

        let solution =
            solve_unobserved(&f, interval(-1.0, 1.0), &config(1e-8)).expect("should solve");

        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 0.0);
    }

    #[test]
    fn widest_bracket_still_bisects() {
        let f = Scalar(|x| x);

        let solution = solve_unobserved(&f, interval(-f64::MAX, f64::MAX), &config(1e-8))
            .expect("should solve");

        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, 0.0);
    }

    #[test]
    fn errors_on_no_sign_change() {
        let f = Scalar(|x| x + 1.0);

        let result = solve_unobserved(&f, interval(0.0, 1.0), &config(1e-6));

        assert!(matches!(
            result,
            Err(Error::NoBracket { left_value, right_value, .. })
                if left_value == 1.0 && right_value == 2.0
        ));
    }

    #[test]
    fn errors_on_flat_function() {
        let f = Scalar(|_| 5.0);

        let result = solve_unobserved(&f, interval(-2.0, 2.0), &config(1e-6));

        assert!(matches!(result, Err(Error::FlatFunction { value }) if value == 5.0));
    }

    #[test]
    fn flat_check_precedes_sign_check() {
        let f = Scalar(|x| x * x + 1.0);

        let result = solve_unobserved(&f, interval(-3.0, 3.0), &config(1e-6));

        assert!(matches!(result, Err(Error::FlatFunction { .. })));
    }

    #[test]
    fn errors_on_non_finite_endpoint() {
        let f = Scalar(|x| 1.0 / x);

        let result = solve_unobserved(&f, interval(0.0, 1.0), &config(1e-6));

        assert!(matches!(result, Err(Error::NonFiniteValue { x, .. }) if x == 0.0));
    }

    #[test]
    fn max_iters_reports_final_midpoint() {
        let f = Scalar(|x| x - 0.3);

        let solution = solve_unobserved(
            &f,
            interval(0.0, 1.0),
            &Config::new(1e-12, 3).expect("valid config"),
        )
        .expect("should return");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
        // [0, 1] -> [0, 0.5] -> [0.25, 0.5] -> [0.25, 0.375]
        assert_eq!(solution.bracket, [0.25, 0.375]);
        assert_relative_eq!(solution.x, 0.3125);
        assert_relative_eq!(solution.residual, 0.0125, epsilon = 1e-12);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = Scalar(|x| x * x - 9.0);

        let mut calls = 0usize;
        let observer = |event: &Event<'_, _>| {
            calls += 1;
            (event.iter() >= 3).then_some(Action::StopEarly)
        };

        let solution =
            solve(&f, interval(0.0, 10.0), &config(1e-10), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn observer_can_recover_from_failed_midpoint() {
        let f = HoleBetween {
            low: 0.3,
            high: 0.7,
        };

        let unobserved = solve_unobserved(&f, interval(-1.0, 2.0), &config(1e-8));
        assert!(matches!(unobserved, Err(Error::Function { x, .. }) if x == 0.5));

        let mut recovered = Vec::new();
        let observer = |event: &Event<'_, Undefined>| match event.result() {
            Err(EvalError::Function(Undefined(x))) => {
                recovered.push(*x);
                Some(Action::assume_positive())
            }
            _ => None,
        };

        let solution =
            solve(&f, interval(-1.0, 2.0), &config(1e-3), observer).expect("should recover");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.x.abs() < 2e-3);
        assert_eq!(recovered, vec![0.5]);
    }
}
