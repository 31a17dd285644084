//! Extremum search: golden section in one variable, coordinate descent in two.

use optima_core::{Function, Interval};
use optima_expr::{Bound, Expression};
use optima_solvers::optimization::{coordinate_descent, golden_section};

use crate::{
    Advisory, Classification, Location, Outcome, Settings, SolveError,
    watch::{Finish, Watch},
};

/// Which extremum a golden section search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Goal {
    #[default]
    Minimize,
    Maximize,
}

/// Finds the minimum or maximum of `formula` in `x` on `[low, high]`.
///
/// The reported location is the midpoint of the final bracket. The
/// [`Advisory::OppositeEstimate`], when present, is only a by-product of the
/// search bookkeeping.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for bad bounds or tolerance and
/// [`SolveError::Eval`] when a probe cannot be evaluated. A non-finite
/// value is always an error, never a winning comparison.
pub fn golden_section(
    formula: &str,
    low: f64,
    high: f64,
    goal: Goal,
    settings: &Settings,
) -> Result<Outcome, SolveError> {
    tracing::debug!(
        target: "optima",
        method = "golden_section",
        formula,
        low,
        high,
        ?goal,
        "solve_start"
    );

    let expr = Expression::parse(formula)?;
    let f = Bound::new(&expr, ["x"]);
    let interval = Interval::new(low, high)?;
    let config = golden_section::Config::new(settings.tolerance, settings.golden_max_iters)?;

    let mut watch = Watch::<1>::new("golden_section", settings);
    let solution = match goal {
        Goal::Minimize => golden_section::minimize(&f, interval, &config, &mut watch),
        Goal::Maximize => golden_section::maximize(&f, interval, &config, &mut watch),
    }
    .map_err(golden_error)?;
    Finish::from(solution.status).check(solution.iters)?;

    let at = Location::Scalar(solution.x);
    let value = f
        .call(&[solution.x])
        .map_err(|source| SolveError::Eval { at, source })?;

    tracing::debug!(
        target: "optima",
        method = "golden_section",
        x = solution.x,
        value,
        iterations = solution.iters,
        "solve_finished"
    );

    Ok(Outcome {
        location: at,
        value,
        classification: match goal {
            Goal::Minimize => Classification::Minimum,
            Goal::Maximize => Classification::Maximum,
        },
        iterations: solution.iters,
        advisory: solution
            .opposite_estimate
            .map(|value| Advisory::OppositeEstimate { value }),
        path: watch.into_path(),
    })
}

fn golden_error(err: golden_section::Error) -> SolveError {
    match err {
        golden_section::Error::Function { x, source } => {
            SolveError::eval(Location::Scalar(x), source)
        }
        golden_section::Error::NonFiniteValue { x, value } => {
            SolveError::non_finite(Location::Scalar(x), value)
        }
    }
}

/// Minimizes `formula` in `x` and `y` by coordinate descent from `start`.
///
/// Each line search covers [`Settings::window`]. The classification is the
/// conjunction of the two final line searches: if they disagree the result
/// is [`Classification::Indeterminate`].
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for a bad start, window, or
/// tolerance, [`SolveError::Eval`] when a probe cannot be evaluated, and
/// [`SolveError::NonConvergence`] when the outer iteration cap runs out.
pub fn coordinate_descent(
    formula: &str,
    start: [f64; 2],
    settings: &Settings,
) -> Result<Outcome, SolveError> {
    tracing::debug!(
        target: "optima",
        method = "coordinate_descent",
        formula,
        x0 = start[0],
        y0 = start[1],
        "solve_start"
    );

    let expr = Expression::parse(formula)?;
    if !start.iter().all(|v| v.is_finite()) {
        return Err(SolveError::InvalidInput {
            reason: format!("starting point must be finite, got {start:?}"),
        });
    }
    let [low, high] = settings.window;
    let config = coordinate_descent::Config::new(settings.tolerance)?
        .with_window(Interval::new(low, high)?)
        .with_max_iters(settings.descent_max_iters)
        .with_line_max_iters(settings.line_max_iters);

    let f = Bound::new(&expr, ["x", "y"]);
    let mut watch = Watch::<2>::new("coordinate_descent", settings);
    let solution =
        coordinate_descent::solve(&f, start, &config, &mut watch).map_err(descent_error)?;
    Finish::from(solution.status).check(solution.iters)?;

    let classification = match solution.extremum {
        coordinate_descent::Extremum::Minimum => Classification::Minimum,
        coordinate_descent::Extremum::Maximum => Classification::Maximum,
        coordinate_descent::Extremum::Mixed => Classification::Indeterminate,
    };

    tracing::debug!(
        target: "optima",
        method = "coordinate_descent",
        x = solution.point[0],
        y = solution.point[1],
        value = solution.value,
        iterations = solution.iters,
        ?classification,
        "solve_finished"
    );

    Ok(Outcome {
        location: Location::Pair(solution.point),
        value: solution.value,
        classification,
        iterations: solution.iters,
        advisory: None,
        path: watch.into_path(),
    })
}

fn descent_error(err: coordinate_descent::Error) -> SolveError {
    match err {
        coordinate_descent::Error::Function { point, source } => {
            SolveError::eval(Location::Pair(point), source)
        }
        coordinate_descent::Error::NonFiniteValue { point, value } => {
            SolveError::non_finite(Location::Pair(point), value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use optima_expr::EvalError;

    #[test]
    fn golden_finds_maximum() {
        let outcome = golden_section("4 - (x + 1)^2", -5.0, 5.0, Goal::Maximize, &Settings::default())
            .expect("should converge");

        assert_abs_diff_eq!(outcome.x().expect("scalar"), -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(outcome.value, 4.0, epsilon = 1e-9);
        assert_eq!(outcome.classification, Classification::Maximum);
    }

    #[test]
    fn golden_opposite_estimate_is_never_better() {
        let outcome = golden_section("(x - 3)^2", -10.0, 10.0, Goal::Minimize, &Settings::default())
            .expect("should converge");

        match outcome.advisory {
            Some(Advisory::OppositeEstimate { value }) => assert!(value >= outcome.value),
            other => panic!("expected an opposite estimate, got {other:?}"),
        }
    }

    #[test]
    fn golden_domain_failure_is_an_eval_error() {
        let err = golden_section("ln(x)", -1.0, 1.0, Goal::Minimize, &Settings::default())
            .unwrap_err();

        assert!(matches!(
            err,
            SolveError::Eval {
                at: Location::Scalar(x),
                source: EvalError::Domain { .. },
            } if x < 0.0
        ));
    }

    #[test]
    fn descent_uses_both_variables() {
        let outcome = coordinate_descent("(x + 2)^2 + (y - 0.5)^2 + 1", [0.0, 0.0], &Settings::default())
            .expect("should converge");

        let [x, y] = outcome.pair().expect("pair");
        assert_abs_diff_eq!(x, -2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(y, 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(outcome.value, 1.0, epsilon = 1e-6);
        assert!(matches!(outcome.path.last(), Some(probe) if probe.location == outcome.location));
    }

    #[test]
    fn descent_rejects_empty_window() {
        let settings = Settings {
            window: [1.0, 1.0],
            ..Settings::default()
        };

        let err = coordinate_descent("x + y", [0.0, 0.0], &settings).unwrap_err();

        assert!(matches!(err, SolveError::InvalidInput { .. }));
    }
}
