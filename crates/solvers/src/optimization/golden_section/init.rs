use optima_core::{Function, Observer};

use crate::{EvalError, evaluate::evaluate};

use super::{Action, Error, Event, Point, bracket::GoldenBracket, state::State};

pub(super) enum InitResult {
    Continue(State),
    StopEarly(State),
}

/// Initialize state by evaluating both interior points.
///
/// Only the second point (or a failure) triggers an observer event, since the
/// first has no `other` point to report yet.
///
/// If both evaluations fail, one failure event is emitted (with a synthetic
/// `other`) for observer awareness, then an error is returned. Recovery isn't
/// possible: `AssumeWorse` needs one valid point to compare against.
pub(super) fn init<F, Obs, T>(
    f: &F,
    bracket: &GoldenBracket,
    observer: &mut Obs,
    transform: &T,
) -> Result<InitResult, Error>
where
    F: Function<1>,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
    T: Fn(f64) -> f64,
{
    enum Outcome<E> {
        BothOk(Point, Point),
        OneFailed {
            ok: Point,
            failed_x: f64,
            err: EvalError<E>,
        },
    }

    let left = evaluate(f, [bracket.inner_low]);
    let right = evaluate(f, [bracket.inner_high]);

    let outcome = match (left, right) {
        (Err(left_err), Err(_)) => {
            let synthetic_other = Point::new(bracket.inner_high, f64::NAN);
            Event::emit_failure(bracket.inner_low, synthetic_other, &left_err, observer);
            return Err(Error::at(bracket.inner_low, left_err));
        }
        (Ok(l), Ok(r)) => Outcome::BothOk(
            Point::new(bracket.inner_low, l),
            Point::new(bracket.inner_high, r),
        ),
        (Ok(l), Err(err)) => Outcome::OneFailed {
            ok: Point::new(bracket.inner_low, l),
            failed_x: bracket.inner_high,
            err,
        },
        (Err(err), Ok(r)) => Outcome::OneFailed {
            ok: Point::new(bracket.inner_high, r),
            failed_x: bracket.inner_low,
            err,
        },
    };

    match outcome {
        Outcome::BothOk(left_pt, right_pt) => {
            let event = Event::Evaluated {
                point: right_pt,
                other: left_pt,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(InitResult::StopEarly(State::new(
                    *bracket, left_pt, right_pt, left_pt,
                ))),
                Some(Action::AssumeWorse) => {
                    let worse = Point::new(right_pt.x, transform(f64::INFINITY));
                    Ok(InitResult::Continue(State::new(
                        *bracket, left_pt, worse, left_pt,
                    )))
                }
                None => {
                    let best = if transform(left_pt.objective) <= transform(right_pt.objective) {
                        left_pt
                    } else {
                        right_pt
                    };
                    Ok(InitResult::Continue(State::new(
                        *bracket, left_pt, right_pt, best,
                    )))
                }
            }
        }

        Outcome::OneFailed { ok, failed_x, err } => {
            let action = Event::emit_failure(failed_x, ok, &err, observer);
            let worse = Point::new(failed_x, transform(f64::INFINITY));
            let (left_pt, right_pt) = if ok.x < worse.x {
                (ok, worse)
            } else {
                (worse, ok)
            };
            let state = State::new(*bracket, left_pt, right_pt, ok);
            match action {
                Some(Action::StopEarly) => Ok(InitResult::StopEarly(state)),
                Some(Action::AssumeWorse) => Ok(InitResult::Continue(state)),
                None => Err(Error::at(failed_x, err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use optima_core::Interval;

    use crate::evaluate::test_fns::*;

    fn identity_transform(x: f64) -> f64 {
        x
    }

    fn bracket() -> GoldenBracket {
        GoldenBracket::new(Interval::new(0.0, 10.0).expect("valid interval"))
    }

    fn continued(result: InitResult) -> State {
        match result {
            InitResult::Continue(s) => s,
            InitResult::StopEarly(_) => panic!("unexpected stop"),
        }
    }

    #[test]
    fn both_ok_keeps_both_points() {
        let bracket = bracket();

        let result = init(&Scalar(|x| x), &bracket, &mut (), &identity_transform)
            .expect("should succeed");
        let state = continued(result);

        assert_relative_eq!(state.left().x, bracket.inner_low, epsilon = 1e-10);
        assert_relative_eq!(state.right().x, bracket.inner_high, epsilon = 1e-10);
        assert_relative_eq!(state.right().objective, bracket.inner_high, epsilon = 1e-10);
    }

    #[test]
    fn both_ok_observer_can_stop() {
        let mut observer = |_: &Event<'_, _>| Some(Action::StopEarly);

        let result = init(&Scalar(|x| x), &bracket(), &mut observer, &identity_transform)
            .expect("should succeed");

        assert!(matches!(result, InitResult::StopEarly(_)));
    }

    #[test]
    fn both_ok_observer_can_assume_worse() {
        let bracket = bracket();
        let mut observer = |_: &Event<'_, _>| Some(Action::AssumeWorse);

        let result = init(&Scalar(|x| x), &bracket, &mut observer, &identity_transform)
            .expect("should succeed");
        let state = continued(result);

        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_low, epsilon = 1e-10);
    }

    #[test]
    fn one_failed_errors_without_observer_action() {
        // Right point (~6.18) fails, left (~3.82) succeeds.
        let f = HoleBetween {
            low: 5.0,
            high: 10.0,
        };

        let result = init(&f, &bracket(), &mut (), &identity_transform);

        assert!(matches!(result, Err(Error::Function { .. })));
    }

    #[test]
    fn one_failed_recovers_with_assume_worse() {
        let bracket = bracket();
        let f = HoleBetween {
            low: 5.0,
            high: 10.0,
        };
        let mut observer = |event: &Event<'_, _>| {
            matches!(event, Event::Failed { .. }).then_some(Action::AssumeWorse)
        };

        let result =
            init(&f, &bracket, &mut observer, &identity_transform).expect("should recover");
        let state = continued(result);

        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_low, epsilon = 1e-10);
    }

    #[test]
    fn non_finite_value_is_a_failure() {
        let f = Scalar(|x| if x > 5.0 { f64::NAN } else { x });

        let result = init(&f, &bracket(), &mut (), &identity_transform);

        assert!(matches!(result, Err(Error::NonFiniteValue { value, .. }) if value.is_nan()));
    }

    #[test]
    fn both_failed_notifies_observer_then_errors() {
        let f = HoleBetween {
            low: 0.0,
            high: 10.0,
        };

        let mut notified = false;
        let mut observer = |event: &Event<'_, _>| {
            if matches!(event, Event::Failed { .. }) {
                notified = true;
            }
            Some(Action::AssumeWorse)
        };

        let result = init(&f, &bracket(), &mut observer, &identity_transform);

        assert!(result.is_err());
        assert!(notified, "observer should be notified when both fail");
    }
}
