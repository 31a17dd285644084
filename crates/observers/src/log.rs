use std::fmt::Debug;

use optima_core::Observer;

/// An observer that reports every solver event through `tracing`.
///
/// Events are emitted at `TRACE` level under the `optima::solver` target,
/// tagged with the solver name and a running event count. The observer never
/// returns an action.
///
/// Pass `&mut LogObserver` to keep access to [`LogObserver::events`] after
/// the solve completes.
#[derive(Debug, Clone)]
pub struct LogObserver {
    solver: &'static str,
    events: usize,
}

impl LogObserver {
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver, events: 0 }
    }

    /// Number of events seen so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }

    fn log<E: Debug>(&mut self, event: &E) {
        self.events += 1;
        tracing::trace!(
            target: "optima::solver",
            solver = self.solver,
            n = self.events,
            ?event,
            "solver_event"
        );
    }
}

impl<E: Debug, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.log(event);
        None
    }
}

impl<E: Debug, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.log(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use optima_core::{Function, Interval};
    use optima_solvers::optimization::golden_section;

    struct Parabola;

    impl Function<1> for Parabola {
        type Error = std::convert::Infallible;

        fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok((x[0] - 1.0).powi(2))
        }
    }

    #[test]
    fn counts_every_event() {
        let mut log = LogObserver::new("golden_section");
        let interval = Interval::new(-3.0, 3.0).expect("valid interval");
        let config = golden_section::Config::new(1e-6, 200).expect("valid config");

        let solution =
            golden_section::minimize(&Parabola, interval, &config, &mut log).expect("should solve");

        assert_eq!(log.events(), solution.iters + 1);
    }
}
