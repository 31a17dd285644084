use optima_core::Observer;

use crate::traits::{HasIterate, Iterate};

/// An observer that collects the points a solver visits.
///
/// Works with any event implementing [`HasIterate<N>`]. Pass
/// `&mut Recorder` as the observer, then read the path with
/// [`Recorder::iterates`] or take it with [`Recorder::into_iterates`].
#[derive(Debug, Clone)]
pub struct Recorder<const N: usize> {
    iterates: Vec<Iterate<N>>,
    limit: Option<usize>,
}

impl<const N: usize> Default for Recorder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Recorder<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterates: Vec::new(),
            limit: None,
        }
    }

    /// Keeps at most `limit` iterates; later ones are dropped.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            iterates: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Records a point directly.
    pub fn record(&mut self, iterate: Iterate<N>) {
        if self.limit.is_none_or(|limit| self.iterates.len() < limit) {
            self.iterates.push(iterate);
        }
    }

    #[must_use]
    pub fn iterates(&self) -> &[Iterate<N>] {
        &self.iterates
    }

    #[must_use]
    pub fn into_iterates(self) -> Vec<Iterate<N>> {
        self.iterates
    }
}

impl<const N: usize, E, A> Observer<E, A> for Recorder<N>
where
    E: HasIterate<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(iterate) = event.iterate() {
            self.record(iterate);
        }
        None
    }
}

/// Allows `&mut Recorder<N>` to be passed to solvers that take an observer
/// by value, so the iterates can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut Recorder<N>
where
    E: HasIterate<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use optima_core::{Function, Interval};
    use optima_solvers::{equation::bisection, optimization::coordinate_descent};

    struct Line;

    impl Function<1> for Line {
        type Error = std::convert::Infallible;

        fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0] - 0.3)
        }
    }

    struct Bowl;

    impl Function<2> for Bowl {
        type Error = std::convert::Infallible;

        fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok((x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2))
        }
    }

    #[test]
    fn records_bisection_midpoints() {
        let mut recorder = Recorder::<1>::new();
        let interval = Interval::new(0.0, 1.0).expect("valid interval");
        let config = bisection::Config::new(1e-12, 3).expect("valid config");

        bisection::solve(&Line, interval, &config, &mut recorder).expect("should run");

        let xs: Vec<f64> = recorder.iterates().iter().map(|it| it.position[0]).collect();
        assert_eq!(xs, vec![0.5, 0.25, 0.375]);
        assert_relative_eq!(
            recorder.iterates()[0].value.expect("evaluated"),
            0.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn records_descent_path() {
        let mut recorder = Recorder::<2>::new();
        let config = coordinate_descent::Config::new(1e-6).expect("valid config");

        let solution = coordinate_descent::solve(&Bowl, [0.0, 0.0], &config, &mut recorder)
            .expect("should converge");

        assert_eq!(recorder.iterates().len(), solution.iters);
        let last = recorder.iterates().last().expect("at least one sweep");
        assert_eq!(last.position, solution.point);
    }

    #[test]
    fn limit_drops_later_iterates() {
        let mut recorder = Recorder::<1>::with_limit(2);
        for x in [1.0, 2.0, 3.0] {
            recorder.record(Iterate {
                position: [x],
                value: None,
            });
        }

        assert_eq!(recorder.into_iterates().len(), 2);
    }
}
