//! Definite integrals by composite Newton–Cotes rules.
//!
//! The interval is split into `n` equal subintervals of width `h`:
//!
//! - [`Rule::Midpoint`] samples each subinterval at its centre (`n` evaluations)
//! - [`Rule::Trapezoid`] samples the `n + 1` grid points, halving the ends
//! - [`Rule::Simpson`] weights grid points `1, 4, 2, 4, …, 4, 1` and needs an
//!   even `n`; an odd count is rounded up
//!
//! Any failed or non-finite sample aborts the integral. At most
//! [`MAX_SUBINTERVALS`] subintervals are accepted.

use std::error::Error as StdError;

use optima_core::{Function, Interval};
use thiserror::Error;

use crate::{EvalError, evaluate::evaluate};

/// Largest subinterval count [`integrate`] accepts.
pub const MAX_SUBINTERVALS: usize = 1 << 24;

/// A composite quadrature rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Midpoint,
    Trapezoid,
    Simpson,
}

/// An integral estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub rule: Rule,
    /// Subintervals actually used, after Simpson's even rounding.
    pub subintervals: usize,
    /// Number of function evaluations performed.
    pub evaluations: usize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("at least one subinterval is required")]
    NoSubintervals,

    #[error("{requested} subintervals exceeds the limit of {limit}")]
    TooManySubintervals { requested: usize, limit: usize },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl<E> From<(f64, EvalError<E>)> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from((x, err): (f64, EvalError<E>)) -> Self {
        match err {
            EvalError::Function(source) => Self::Function {
                x,
                source: Box::new(source),
            },
            EvalError::NonFinite(value) => Self::NonFiniteValue { x, value },
        }
    }
}

/// Integrates `f` over `interval` with `subintervals` panels of `rule`.
///
/// # Errors
///
/// Returns [`Error::NoSubintervals`] when `subintervals` is zero,
/// [`Error::TooManySubintervals`] above [`MAX_SUBINTERVALS`], or an
/// evaluation error for the first failing sample.
pub fn integrate<F: Function<1>>(
    f: &F,
    interval: Interval,
    subintervals: usize,
    rule: Rule,
) -> Result<Estimate, Error> {
    if subintervals == 0 {
        return Err(Error::NoSubintervals);
    }
    if subintervals > MAX_SUBINTERVALS {
        return Err(Error::TooManySubintervals {
            requested: subintervals,
            limit: MAX_SUBINTERVALS,
        });
    }

    let n = match rule {
        Rule::Simpson if subintervals % 2 == 1 => subintervals + 1,
        _ => subintervals,
    };
    let a = interval.low();
    let h = interval.width() / n as f64;
    let sample = |x: f64| evaluate(f, [x]).map_err(|err| Error::from((x, err)));
    // Grid points are computed from `a` directly to avoid accumulating error.
    let grid = |i: usize| if i == n { interval.high() } else { a + i as f64 * h };

    let (sum, evaluations) = match rule {
        Rule::Midpoint => {
            let mut sum = 0.0;
            for i in 0..n {
                sum += sample(a + (i as f64 + 0.5) * h)?;
            }
            (sum, n)
        }
        Rule::Trapezoid => {
            let mut sum = 0.5 * (sample(grid(0))? + sample(grid(n))?);
            for i in 1..n {
                sum += sample(grid(i))?;
            }
            (sum, n + 1)
        }
        Rule::Simpson => {
            let mut sum = sample(grid(0))? + sample(grid(n))?;
            for i in 1..n {
                let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
                sum += weight * sample(grid(i))?;
            }
            (sum / 3.0, n + 1)
        }
    };

    Ok(Estimate {
        value: sum * h,
        rule,
        subintervals: n,
        evaluations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::evaluate::test_fns::*;

    fn unit() -> Interval {
        Interval::new(0.0, 1.0).expect("valid interval")
    }

    #[test]
    fn rules_are_exact_on_their_degree() {
        let line = Scalar(|x| 3.0 * x + 1.0);
        let cubic = Scalar(|x| x.powi(3));

        let midpoint = integrate(&line, unit(), 1, Rule::Midpoint).expect("should integrate");
        assert_relative_eq!(midpoint.value, 2.5, epsilon = 1e-14);

        let trapezoid = integrate(&line, unit(), 1, Rule::Trapezoid).expect("should integrate");
        assert_relative_eq!(trapezoid.value, 2.5, epsilon = 1e-14);

        let simpson = integrate(&cubic, unit(), 2, Rule::Simpson).expect("should integrate");
        assert_relative_eq!(simpson.value, 0.25, epsilon = 1e-14);
    }

    #[test]
    fn converges_on_sine() {
        let sin = Scalar(f64::sin);
        let interval = Interval::new(0.0, std::f64::consts::PI).expect("valid interval");

        for rule in [Rule::Midpoint, Rule::Trapezoid, Rule::Simpson] {
            let estimate = integrate(&sin, interval, 200, rule).expect("should integrate");
            assert_relative_eq!(estimate.value, 2.0, epsilon = 1e-4);
        }

        let simpson = integrate(&sin, interval, 200, Rule::Simpson).expect("should integrate");
        assert_relative_eq!(simpson.value, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn simpson_rounds_odd_counts_up() {
        let estimate =
            integrate(&Scalar(|x| x * x), unit(), 3, Rule::Simpson).expect("should integrate");

        assert_eq!(estimate.subintervals, 4);
        assert_eq!(estimate.evaluations, 5);
        assert_relative_eq!(estimate.value, 1.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn evaluation_counts() {
        let f = Scalar(|x| x);

        let midpoint = integrate(&f, unit(), 10, Rule::Midpoint).expect("should integrate");
        assert_eq!(midpoint.evaluations, 10);

        let trapezoid = integrate(&f, unit(), 10, Rule::Trapezoid).expect("should integrate");
        assert_eq!(trapezoid.evaluations, 11);
    }

    #[test]
    fn zero_subintervals_is_rejected() {
        let result = integrate(&Scalar(|x| x), unit(), 0, Rule::Trapezoid);

        assert!(matches!(result, Err(Error::NoSubintervals)));
    }

    #[test]
    fn oversized_counts_are_rejected() {
        for rule in [Rule::Midpoint, Rule::Trapezoid, Rule::Simpson] {
            let result = integrate(&Scalar(|x| x), unit(), usize::MAX, rule);
            assert!(
                matches!(
                    result,
                    Err(Error::TooManySubintervals { requested: usize::MAX, limit })
                        if limit == MAX_SUBINTERVALS
                ),
                "{rule:?}"
            );
        }

        // An odd count at the limit still rounds up for Simpson.
        let result = integrate(&Scalar(|x| x), unit(), MAX_SUBINTERVALS + 1, Rule::Simpson);
        assert!(matches!(result, Err(Error::TooManySubintervals { .. })));
    }

    #[test]
    fn singularity_is_reported() {
        let result = integrate(&Scalar(|x| 1.0 / x), unit(), 4, Rule::Trapezoid);

        assert!(matches!(result, Err(Error::NonFiniteValue { x, .. }) if x == 0.0));

        // The midpoint rule never samples the endpoint.
        assert!(integrate(&Scalar(|x| 1.0 / x.sqrt()), unit(), 4, Rule::Midpoint).is_ok());
    }

    #[test]
    fn function_errors_carry_location() {
        let f = HoleBetween {
            low: 0.4,
            high: 0.6,
        };

        let result = integrate(&f, unit(), 2, Rule::Trapezoid);

        assert!(matches!(result, Err(Error::Function { x, .. }) if x == 0.5));
    }
}
