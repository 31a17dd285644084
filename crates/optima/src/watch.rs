use std::fmt::Debug;

use optima_core::Observer;
use optima_observers::{
    Deadline, LogObserver, Recorder,
    traits::{CanStopEarly, HasIterate},
};
use optima_solvers::{
    equation::{bisection, newton},
    optimization::{coordinate_descent, golden_section},
};

use crate::{Location, Probe, Settings, SolveError};

/// The observer every entry point hands to its solver.
///
/// Logs each event, records the probe path for display, and enforces the
/// time limit from [`Settings`].
pub(crate) struct Watch<const N: usize> {
    log: LogObserver,
    path: Recorder<N>,
    deadline: Deadline,
}

impl<const N: usize> Watch<N> {
    pub(crate) fn new(method: &'static str, settings: &Settings) -> Self {
        Self {
            log: LogObserver::new(method),
            path: Recorder::with_limit(settings.path_limit),
            deadline: Deadline::new(settings.time_limit()),
        }
    }

    pub(crate) fn into_path(self) -> Vec<Probe>
    where
        Location: From<[f64; N]>,
    {
        self.path
            .into_iterates()
            .into_iter()
            .map(|iterate| Probe {
                location: Location::from(iterate.position),
                value: iterate.value,
            })
            .collect()
    }
}

impl<const N: usize, E, A> Observer<E, A> for &mut Watch<N>
where
    E: Debug + HasIterate<N>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut self.log, event);
        Observer::<E, A>::observe(&mut self.path, event);
        Observer::<E, A>::observe(&mut self.deadline, event)
    }
}

/// How a solver run ended, across the solver-specific status enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Finish {
    Converged,
    MaxIters,
    Stopped,
}

impl Finish {
    /// Turns anything short of convergence into an error.
    pub(crate) fn check(self, iterations: usize) -> Result<(), SolveError> {
        match self {
            Self::Converged => Ok(()),
            Self::MaxIters => Err(SolveError::NonConvergence { iterations }),
            Self::Stopped => Err(SolveError::Stopped { iterations }),
        }
    }
}

impl From<bisection::Status> for Finish {
    fn from(status: bisection::Status) -> Self {
        match status {
            bisection::Status::Converged => Self::Converged,
            bisection::Status::MaxIters => Self::MaxIters,
            bisection::Status::StoppedByObserver => Self::Stopped,
        }
    }
}

impl From<newton::Status> for Finish {
    fn from(status: newton::Status) -> Self {
        match status {
            newton::Status::Converged => Self::Converged,
            newton::Status::MaxIters => Self::MaxIters,
            newton::Status::StoppedByObserver => Self::Stopped,
        }
    }
}

impl From<golden_section::Status> for Finish {
    fn from(status: golden_section::Status) -> Self {
        match status {
            golden_section::Status::Converged => Self::Converged,
            golden_section::Status::MaxIters => Self::MaxIters,
            golden_section::Status::StoppedByObserver => Self::Stopped,
        }
    }
}

impl From<coordinate_descent::Status> for Finish {
    fn from(status: coordinate_descent::Status) -> Self {
        match status {
            coordinate_descent::Status::Converged => Self::Converged,
            coordinate_descent::Status::MaxIters => Self::MaxIters,
            coordinate_descent::Status::StoppedByObserver => Self::Stopped,
        }
    }
}
