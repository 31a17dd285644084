use optima_core::{Function, Interval, Observer};

use crate::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Point, Solution,
    bracket::GoldenBracket,
    init::{InitResult, init},
    solution::Status,
    state::ShrinkDirection,
};

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<F, Obs, T>(
    f: &F,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
    transform: T,
) -> Result<Solution, Error>
where
    F: Function<1>,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
    T: Fn(f64) -> f64,
{
    let bracket = GoldenBracket::new(interval);

    let mut state = match init(f, &bracket, &mut observer, &transform)? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly(state) => {
            return Ok(state.into_solution(Status::StoppedByObserver, 0, &transform));
        }
    };

    let mut iters = 0;
    while state.width() > config.tolerance() {
        if iters == config.max_iters() {
            return Ok(state.into_solution(Status::MaxIters, iters, &transform));
        }
        iters += 1;

        let direction = state.next_action(&transform);
        let (eval_x, other) = match direction {
            ShrinkDirection::ShrinkLeft(x) => (x, state.right()),
            ShrinkDirection::ShrinkRight(x) => (x, state.left()),
        };

        let point = match eval_and_observe(f, eval_x, other, &mut observer)? {
            EvalOutcome::Continue(point) => point,
            EvalOutcome::AssumeWorse => Point::new(eval_x, transform(f64::INFINITY)),
            EvalOutcome::StopEarly => {
                return Ok(state.into_solution(Status::StoppedByObserver, iters, &transform));
            }
        };

        state.apply(direction, point);
        if point.objective.is_finite() {
            state.maybe_update_best(point, &transform);
        }
    }

    Ok(state.into_solution(Status::Converged, iters, &transform))
}

enum EvalOutcome {
    Continue(Point),
    AssumeWorse,
    StopEarly,
}

/// Evaluate at `x`, emit event, and handle observer action.
fn eval_and_observe<F, Obs>(
    f: &F,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<EvalOutcome, Error>
where
    F: Function<1>,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    match evaluate(f, [x]) {
        Ok(objective) => {
            let point = Point::new(x, objective);
            match observer.observe(&Event::Evaluated { point, other }) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue(point)),
            }
        }
        Err(err) => match Event::emit_failure(x, other, &err, observer) {
            Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
            Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
            None => Err(Error::at(x, err)),
        },
    }
}
