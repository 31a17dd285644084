//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasIterate`] — events that describe a point the solver visited
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use optima_core::Observer;
//! use optima_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use optima_solvers::{
    equation::{bisection, newton},
    optimization::{coordinate_descent, golden_section},
};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// A point visited by a solver, with the function value there if known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate<const N: usize> {
    pub position: [f64; N],
    pub value: Option<f64>,
}

/// An event that describes a point the solver visited.
pub trait HasIterate<const N: usize> {
    /// Returns the visited point, or `None` if the event should not be recorded.
    fn iterate(&self) -> Option<Iterate<N>>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the other.
    fn assume_worse() -> Self;
}

// --- bisection ---

impl<E> HasResidual for bisection::Event<'_, E> {
    fn residual(&self) -> f64 {
        self.result().unwrap_or(f64::NAN)
    }
}

impl<E> HasIterate<1> for bisection::Event<'_, E> {
    fn iterate(&self) -> Option<Iterate<1>> {
        Some(Iterate {
            position: [self.x()],
            value: self.result().ok(),
        })
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasIterate<1> for newton::Event {
    fn iterate(&self) -> Option<Iterate<1>> {
        Some(Iterate {
            position: [self.x],
            value: Some(self.residual),
        })
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- golden section ---

impl<E> HasObjective for golden_section::Event<'_, E> {
    fn objective(&self) -> f64 {
        match self {
            golden_section::Event::Evaluated { point, .. } => point.objective,
            golden_section::Event::Failed { .. } => f64::NAN,
        }
    }
}

impl<E> HasIterate<1> for golden_section::Event<'_, E> {
    fn iterate(&self) -> Option<Iterate<1>> {
        let value = match self {
            golden_section::Event::Evaluated { point, .. } => Some(point.objective),
            golden_section::Event::Failed { .. } => None,
        };
        Some(Iterate {
            position: [self.x()],
            value,
        })
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

// --- coordinate descent ---

impl HasObjective for coordinate_descent::Event {
    fn objective(&self) -> f64 {
        self.value
    }
}

impl HasIterate<2> for coordinate_descent::Event {
    fn iterate(&self) -> Option<Iterate<2>> {
        Some(Iterate {
            position: self.point,
            value: Some(self.value),
        })
    }
}

impl CanStopEarly for coordinate_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use optima_core::{Function, Interval, Observer};
    use optima_solvers::EvalError;

    struct Square;

    impl Function<1> for Square {
        type Error = std::convert::Infallible;

        fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0] * x[0] - 2.0)
        }
    }

    /// Stops once the residual is small, whatever the solver.
    struct GoodEnough(f64);

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_bisection_and_newton() {
        let interval = Interval::new(0.0, 2.0).expect("valid interval");
        let config = bisection::Config::new(1e-12, 200).expect("valid config");

        let solution =
            bisection::solve(&Square, interval, &config, GoodEnough(1e-2)).expect("should stop");
        assert_eq!(solution.status, bisection::Status::StoppedByObserver);

        let derivative = |x: f64| 2.0 * x;
        struct Derivative<F>(F);
        impl<F: Fn(f64) -> f64> Function<1> for Derivative<F> {
            type Error = std::convert::Infallible;
            fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
                Ok((self.0)(x[0]))
            }
        }

        let config = newton::Config::new(1e-14, 100).expect("valid config");
        let solution = newton::solve(&Square, &Derivative(derivative), 1.0, &config, GoodEnough(1e-2))
            .expect("should stop");
        assert_eq!(solution.status, newton::Status::StoppedByObserver);
    }

    #[test]
    fn failed_events_have_nan_values() {
        let error: EvalError<std::convert::Infallible> = EvalError::NonFinite(f64::INFINITY);
        let event = bisection::Event::Failed {
            iter: 1,
            bracket: [0.0, 1.0],
            x: 0.5,
            error: &error,
        };

        assert!(event.residual().is_nan());
        let iterate = event.iterate().expect("always recorded");
        assert_eq!(iterate.position, [0.5]);
        assert_eq!(iterate.value, None);
    }
}
