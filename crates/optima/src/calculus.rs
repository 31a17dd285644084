//! Evaluation, differentiation, integration, and plot sampling.

use optima_core::{Function, Interval};
use optima_expr::{Bound, Expression, GridSample, Sample};
use optima_solvers::quadrature::{self, Rule};

use crate::{Integral, Location, SolveError};

/// Evaluates `formula` at a single `x`.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for malformed text and [`SolveError::Eval`]
/// when the formula is undefined at `x`.
pub fn evaluate(formula: &str, x: f64) -> Result<f64, SolveError> {
    let expr = Expression::parse(formula)?;
    Bound::new(&expr, ["x"])
        .call(&[x])
        .map_err(|source| SolveError::Eval {
            at: Location::Scalar(x),
            source,
        })
}

/// Differentiates `formula` symbolically with respect to `var`.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for malformed text and
/// [`SolveError::Derivative`] when the formula uses a function without a
/// symbolic derivative.
pub fn differentiate(formula: &str, var: &str) -> Result<Expression, SolveError> {
    let expr = Expression::parse(formula)?;
    Ok(expr.derivative(var)?)
}

/// Integrates `formula` in `x` over `[low, high]` with a composite `rule`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for bad bounds or a subinterval
/// count of zero or above [`quadrature::MAX_SUBINTERVALS`], and
/// [`SolveError::Eval`] at the first failing sample.
pub fn integrate(
    formula: &str,
    low: f64,
    high: f64,
    subintervals: usize,
    rule: Rule,
) -> Result<Integral, SolveError> {
    tracing::debug!(
        target: "optima",
        method = "integrate",
        formula,
        low,
        high,
        subintervals,
        ?rule,
        "solve_start"
    );

    let expr = Expression::parse(formula)?;
    let f = Bound::new(&expr, ["x"]);
    let interval = Interval::new(low, high)?;

    let estimate =
        quadrature::integrate(&f, interval, subintervals, rule).map_err(|err| match err {
            err @ (quadrature::Error::NoSubintervals
            | quadrature::Error::TooManySubintervals { .. }) => SolveError::InvalidInput {
                reason: err.to_string(),
            },
            quadrature::Error::Function { x, source } => {
                SolveError::eval(Location::Scalar(x), source)
            }
            quadrature::Error::NonFiniteValue { x, value } => {
                SolveError::non_finite(Location::Scalar(x), value)
            }
        })?;

    tracing::debug!(
        target: "optima",
        method = "integrate",
        value = estimate.value,
        evaluations = estimate.evaluations,
        "solve_finished"
    );

    Ok(Integral {
        value: estimate.value,
        subintervals: estimate.subintervals,
        evaluations: estimate.evaluations,
    })
}

/// Samples `formula` in `x` at `count` evenly spaced points on `[low, high]`.
///
/// Points where the formula is undefined come back with `y: None`.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for malformed text and
/// [`SolveError::InvalidInput`] for bad bounds.
pub fn sample(formula: &str, low: f64, high: f64, count: usize) -> Result<Vec<Sample>, SolveError> {
    let expr = Expression::parse(formula)?;
    let interval = Interval::new(low, high)?;
    Ok(optima_expr::sample(&Bound::new(&expr, ["x"]), interval, count))
}

/// Samples `formula` in `x` and `y` on a `counts[0]` × `counts[1]` grid.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for malformed text and
/// [`SolveError::InvalidInput`] for bad ranges.
pub fn sample_surface(
    formula: &str,
    x_range: [f64; 2],
    y_range: [f64; 2],
    counts: [usize; 2],
) -> Result<Vec<GridSample>, SolveError> {
    let expr = Expression::parse(formula)?;
    let intervals = [
        Interval::new(x_range[0], x_range[1])?,
        Interval::new(y_range[0], y_range[1])?,
    ];
    Ok(optima_expr::sample_grid(
        &Bound::new(&expr, ["x", "y"]),
        intervals,
        counts,
    ))
}
