use approx::assert_relative_eq;
use optima_core::Interval;

use crate::evaluate::test_fns::*;

use super::{
    Action, Config, Error, Event, Status, maximize_unobserved, minimize, minimize_unobserved,
};

fn interval(low: f64, high: f64) -> Interval {
    Interval::new(low, high).expect("valid interval")
}

fn config(tolerance: f64, max_iters: usize) -> Config {
    Config::new(tolerance, max_iters).expect("valid config")
}

/// f(x) = x³ - 4x, with a local minimum at 2/√3 and a local maximum at -2/√3.
fn polynomial(x: f64) -> f64 {
    x.powi(3) - 4.0 * x
}

#[test]
fn minimizes_shifted_parabola() {
    let f = Scalar(|x| (x - 3.0).powi(2));

    let solution = minimize_unobserved(&f, interval(-10.0, 10.0), &config(1e-6, 200))
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);

    let [left, right] = solution.bracket;
    assert!(right - left <= 1e-6);
    assert!(left <= 3.0 && 3.0 <= right);
}

#[test]
fn minimizes_polynomial() {
    let expected_x = 2.0 / 3.0_f64.sqrt();

    let solution = minimize_unobserved(&Scalar(polynomial), interval(-2.0, 2.0), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-7);
    assert_relative_eq!(solution.best.x, expected_x, epsilon = 1e-7);
}

#[test]
fn maximizes_polynomial() {
    let expected_x = -2.0 / 3.0_f64.sqrt();

    let solution = maximize_unobserved(&Scalar(polynomial), interval(-2.0, 2.0), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-7);
    assert_relative_eq!(solution.best.objective, polynomial(expected_x), epsilon = 1e-12);
}

#[test]
fn opposite_estimate_is_worse_final_value() {
    let f = Scalar(|x| (x - 1.0).powi(2) + 2.0);

    let solution =
        minimize_unobserved(&f, interval(-4.0, 4.0), &config(1e-6, 200)).expect("should converge");

    let estimate = solution.opposite_estimate.expect("both interior points evaluated");
    assert!(estimate >= solution.best.objective);
    assert_relative_eq!(estimate, 2.0, epsilon = 1e-9);
}

#[test]
fn one_evaluation_per_iteration() {
    let mut events = 0;
    let observer = |_: &Event<'_, _>| {
        events += 1;
        None
    };

    let solution = minimize(
        &Scalar(|x| (x - 3.0).powi(2)),
        interval(-10.0, 10.0),
        &config(1e-6, 200),
        observer,
    )
    .expect("should converge");

    // One event for the second initial point, then one per iteration.
    assert_eq!(events, solution.iters + 1);
}

#[test]
fn max_iters_reports_current_bracket() {
    let solution = minimize_unobserved(&Scalar(polynomial), interval(-2.0, 2.0), &config(1e-12, 5))
        .expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    let [left, right] = solution.bracket;
    assert_relative_eq!(solution.x, 0.5 * (left + right));
}

#[test]
fn assume_worse_discards_from_best() {
    // For f(x) = x on [0, 10], minimum is at x=0.
    //
    // Init: left interior (~3.82) is evaluated without observer,
    //       right interior (~6.18) goes through observer (event 1).
    //       Best after init: left (~3.82).
    //
    // Iter 1: the bracket shrinks right and the new left interior (~2.36)
    //         is evaluated (event 2). Marking it AssumeWorse keeps it out of
    //         best tracking.
    let mut event_count = 0;
    let observer = |_event: &Event<'_, _>| {
        event_count += 1;
        (event_count == 2).then_some(Action::AssumeWorse)
    };

    let solution = minimize(&Scalar(|x| x), interval(0.0, 10.0), &config(1e-12, 1), observer)
        .expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_relative_eq!(solution.best.x, 3.819_660_1, epsilon = 1e-5);
}

#[test]
fn assume_worse_steers_search() {
    // Marking every observed point with x < 5 as worse leaves the unobserved
    // init left (~3.82) as the only finite point below 5, so the bracket
    // collapses onto it instead of the true minimum at 0.
    let observer = |event: &Event<'_, _>| (event.x() < 5.0).then_some(Action::AssumeWorse);

    let solution = minimize(&Scalar(|x| x), interval(0.0, 10.0), &config(1e-12, 20), observer)
        .expect("should complete");

    assert_relative_eq!(solution.best.x, 3.819_660_1, epsilon = 1e-5);
    assert!((solution.x - 3.819_660_1).abs() < 1e-3);
}

#[test]
fn observer_can_stop_early() {
    let mut eval_count = 0;
    let observer = |_event: &Event<'_, _>| {
        eval_count += 1;
        (eval_count >= 3).then_some(Action::StopEarly)
    };

    let solution = minimize(&Scalar(polynomial), interval(0.0, 3.0), &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    // 1 event for init right, 2 events for loop iterations = 3 total, stopped on 3rd.
    assert_eq!(solution.iters, 2);
    assert_eq!(eval_count, 3);
}

#[test]
fn failure_stops_early_during_init() {
    // Fails for x in (5, 20). Init right (~6.18) fails.
    let f = HoleBetween {
        low: 5.0,
        high: 20.0,
    };
    let observer =
        |event: &Event<'_, _>| matches!(event, Event::Failed { .. }).then_some(Action::StopEarly);

    let solution = minimize(&f, interval(0.0, 10.0), &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
}

#[test]
fn failure_recovers_with_assume_worse() {
    // Undefined for x > 5; minimum of (x - 2)² at x = 2.
    let f = Scalar(|x| if x > 5.0 { f64::NAN } else { (x - 2.0).powi(2) });
    let observer =
        |event: &Event<'_, _>| matches!(event, Event::Failed { .. }).then_some(Action::AssumeWorse);

    let solution = minimize(&f, interval(0.0, 10.0), &config(1e-9, 200), observer)
        .expect("should recover and converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
}

#[test]
fn failure_without_action_errors() {
    let f = HoleBetween {
        low: 5.0,
        high: 20.0,
    };

    let result = minimize_unobserved(&f, interval(0.0, 10.0), &Config::default());

    assert!(matches!(result, Err(Error::Function { x, .. }) if x > 5.0));
}

#[test]
fn non_finite_objective_never_wins() {
    let f = Scalar(|x| if x < 4.0 { f64::NEG_INFINITY } else { x });

    let result = minimize_unobserved(&f, interval(0.0, 10.0), &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteValue { value, .. }) if value.is_infinite()));
}
