use std::time::{Duration, Instant};

use optima_core::Observer;

use crate::traits::CanStopEarly;

/// An observer that stops the solver once a wall-clock budget is spent.
///
/// The clock starts when the observer is created. Without a limit it never
/// intervenes. Solvers only consult observers between evaluations, so a
/// single slow evaluation can overrun the budget.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    #[must_use]
    pub fn new(limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// A deadline that never expires.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Returns true once the budget has been used up.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.expired().then(A::stop_early)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for &mut Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.expired().then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use optima_core::{Function, Interval};
    use optima_solvers::equation::bisection;

    struct Cube;

    impl Function<1> for Cube {
        type Error = std::convert::Infallible;

        fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0].powi(3) - 2.0)
        }
    }

    #[test]
    fn zero_budget_stops_at_first_event() {
        let interval = Interval::new(0.0, 2.0).expect("valid interval");
        let config = bisection::Config::new(1e-12, 200).expect("valid config");

        let solution = bisection::solve(
            &Cube,
            interval,
            &config,
            Deadline::new(Some(Duration::ZERO)),
        )
        .expect("should stop");

        assert_eq!(solution.status, bisection::Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn unlimited_never_stops() {
        let interval = Interval::new(0.0, 2.0).expect("valid interval");
        let config = bisection::Config::new(1e-9, 200).expect("valid config");

        let solution = bisection::solve(&Cube, interval, &config, Deadline::unlimited())
            .expect("should converge");

        assert_eq!(solution.status, bisection::Status::Converged);
        assert!(!Deadline::unlimited().expired());
    }
}
