use super::bracket::GoldenBracket;
use super::solution::Status;
use super::{Point, Solution};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Keep the upper section; payload is x for the new `inner_high`.
    ShrinkLeft(f64),

    /// Keep the lower section; payload is x for the new `inner_low`.
    ShrinkRight(f64),
}

#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best: Point,
}

impl State {
    pub(super) fn new(bracket: GoldenBracket, left: Point, right: Point, best: Point) -> Self {
        Self {
            bracket,
            left,
            right,
            best,
        }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    pub(super) fn width(&self) -> f64 {
        self.bracket.width()
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    pub(super) fn next_action<F: Fn(f64) -> f64>(&self, transform: &F) -> ShrinkDirection {
        let left_score = transform(self.left.objective);
        let right_score = transform(self.right.objective);

        if left_score <= right_score {
            ShrinkDirection::ShrinkRight(self.bracket.next_inner_low())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.next_inner_high())
        }
    }

    /// Apply shrink and update interior point with new evaluation.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                self.bracket.keep_lower();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                self.bracket.keep_upper();
                self.left = self.right;
                self.right = point;
            }
        }
    }

    /// Update best if this point has better score. Only call with real evaluations.
    pub(super) fn maybe_update_best<F: Fn(f64) -> f64>(&mut self, point: Point, transform: &F) {
        if transform(point.objective) < transform(self.best.objective) {
            self.best = point;
        }
    }

    pub(super) fn into_solution<F: Fn(f64) -> f64>(
        self,
        status: Status,
        iters: usize,
        transform: &F,
    ) -> Solution {
        let opposite_estimate = [self.left.objective, self.right.objective]
            .into_iter()
            .filter(|value| value.is_finite())
            .max_by(|a, b| transform(*a).total_cmp(&transform(*b)));

        Solution {
            status,
            x: self.bracket.midpoint(),
            bracket: self.bracket.bounds(),
            best: self.best,
            opposite_estimate,
            iters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use optima_core::Interval;

    fn state(left: f64, right: f64) -> State {
        let bracket = GoldenBracket::new(Interval::new(0.0, 10.0).expect("valid interval"));
        let left = Point::new(bracket.inner_low, left);
        let right = Point::new(bracket.inner_high, right);
        State::new(bracket, left, right, left)
    }

    #[test]
    fn opposite_estimate_is_worse_interior_value() {
        let identity = |v: f64| v;
        let negate = |v: f64| -v;

        let min = state(1.0, 4.0).into_solution(Status::Converged, 0, &identity);
        assert_eq!(min.opposite_estimate, Some(4.0));

        let max = state(1.0, 4.0).into_solution(Status::Converged, 0, &negate);
        assert_eq!(max.opposite_estimate, Some(1.0));
    }

    #[test]
    fn assumed_points_are_not_estimates() {
        let identity = |v: f64| v;

        let solution = state(2.0, f64::INFINITY).into_solution(Status::Converged, 0, &identity);
        assert_eq!(solution.opposite_estimate, Some(2.0));
        assert_relative_eq!(solution.x, 5.0);

        let solution = state(f64::INFINITY, f64::NEG_INFINITY).into_solution(
            Status::Converged,
            0,
            &identity,
        );
        assert_eq!(solution.opposite_estimate, None);
    }
}
