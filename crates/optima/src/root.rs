//! Root finding: bisection and Newton's method.

use optima_core::{Function, Interval};
use optima_expr::{Bound, Expression};
use optima_solvers::equation::{bisection, newton};

use crate::{
    Advisory, Classification, Curvature, Location, Outcome, Settings, SolveError,
    watch::{Finish, Watch},
};

/// Finds a root of `formula` in `x` on `[low, high]` by bisection.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for bad bounds or tolerance,
/// [`SolveError::FlatFunction`] or [`SolveError::NoBracket`] when the
/// endpoints do not bracket a sign change, and [`SolveError::Eval`] when a
/// probe cannot be evaluated.
pub fn bisect(formula: &str, low: f64, high: f64, settings: &Settings) -> Result<Outcome, SolveError> {
    tracing::debug!(target: "optima", method = "bisection", formula, low, high, "solve_start");

    let expr = Expression::parse(formula)?;
    let f = Bound::new(&expr, ["x"]);
    let interval = Interval::new(low, high)?;
    let config = bisection::Config::new(settings.tolerance, settings.bisection_max_iters)?;

    let mut watch = Watch::<1>::new("bisection", settings);
    let solution = bisection::solve(&f, interval, &config, &mut watch).map_err(bisection_error)?;
    Finish::from(solution.status).check(solution.iters)?;

    tracing::debug!(
        target: "optima",
        method = "bisection",
        x = solution.x,
        iterations = solution.iters,
        "solve_finished"
    );

    Ok(Outcome {
        location: Location::Scalar(solution.x),
        value: solution.residual,
        classification: Classification::Root,
        iterations: solution.iters,
        advisory: None,
        path: watch.into_path(),
    })
}

fn bisection_error(err: bisection::Error) -> SolveError {
    match err {
        bisection::Error::FlatFunction { value } => SolveError::FlatFunction { value },
        bisection::Error::NoBracket {
            left,
            right,
            left_value,
            right_value,
        } => SolveError::NoBracket {
            low: left,
            high: right,
            low_value: left_value,
            high_value: right_value,
        },
        bisection::Error::Function { x, source } => SolveError::eval(Location::Scalar(x), source),
        bisection::Error::NonFiniteValue { x, value } => {
            SolveError::non_finite(Location::Scalar(x), value)
        }
    }
}

/// Finds a root of `formula` in `x` by Newton's method, starting from `x0`.
///
/// When `derivative` is `None` the derivative is taken symbolically. After
/// convergence the second derivative (the derivative of `derivative`) is
/// evaluated at the root and reported as an [`Advisory::Curvature`]; if it
/// cannot be formed or evaluated the advisory is omitted.
///
/// # Errors
///
/// Returns [`SolveError::DegenerateDerivative`] when the derivative is
/// within tolerance of zero at an iterate, [`SolveError::Diverged`] when a
/// step leaves the finite numbers, and [`SolveError::NonConvergence`] when
/// the iteration cap runs out.
pub fn newton(
    formula: &str,
    derivative: Option<&str>,
    x0: f64,
    settings: &Settings,
) -> Result<Outcome, SolveError> {
    tracing::debug!(
        target: "optima",
        method = "newton",
        formula,
        derivative,
        x0,
        "solve_start"
    );

    let expr = Expression::parse(formula)?;
    let slope = match derivative {
        Some(text) => Expression::parse(text)?,
        None => expr.derivative("x")?,
    };
    if !x0.is_finite() {
        return Err(SolveError::InvalidInput {
            reason: format!("starting point must be finite, got {x0}"),
        });
    }
    let config = newton::Config::new(settings.tolerance, settings.newton_max_iters)?;

    let f = Bound::new(&expr, ["x"]);
    let df = Bound::new(&slope, ["x"]);
    let mut watch = Watch::<1>::new("newton", settings);
    let solution = newton::solve(&f, &df, x0, &config, &mut watch).map_err(newton_error)?;
    Finish::from(solution.status).check(solution.iters)?;

    let advisory = curvature(&slope, solution.x, settings.tolerance)
        .map(|curvature| Advisory::Curvature { curvature });

    tracing::debug!(
        target: "optima",
        method = "newton",
        x = solution.x,
        iterations = solution.iters,
        ?advisory,
        "solve_finished"
    );

    Ok(Outcome {
        location: Location::Scalar(solution.x),
        value: solution.residual,
        classification: Classification::Root,
        iterations: solution.iters,
        advisory,
        path: watch.into_path(),
    })
}

fn curvature(slope: &Expression, x: f64, tolerance: f64) -> Option<Curvature> {
    let second = slope.derivative("x").ok()?;
    let value = Bound::new(&second, ["x"]).call(&[x]).ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(match newton::classify(value, tolerance) {
        newton::Extremum::Minimum => Curvature::Minimum,
        newton::Extremum::Maximum => Curvature::Maximum,
        newton::Extremum::Inconclusive => Curvature::Inconclusive,
    })
}

fn newton_error(err: newton::Error) -> SolveError {
    match err {
        newton::Error::DegenerateDerivative { x, derivative } => {
            SolveError::DegenerateDerivative { x, derivative }
        }
        newton::Error::NonFiniteValue { x, value }
        | newton::Error::NonFiniteDerivative { x, value } => {
            SolveError::non_finite(Location::Scalar(x), value)
        }
        newton::Error::NonFiniteIterate { from, .. } => SolveError::Diverged { x: from },
        newton::Error::Function { x, source } | newton::Error::Derivative { x, source } => {
            SolveError::eval(Location::Scalar(x), source)
        }
    }
}
