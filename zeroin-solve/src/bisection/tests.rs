use approx::assert_relative_eq;

use crate::bracket::BracketError;

use super::{Action, Config, Error, Status, Step, solve, solve_unobserved};

fn tol_config(max_iters: usize, tol: f64) -> Config {
    Config::new(max_iters, tol, 0.0, 0.0).expect("valid config")
}

#[test]
fn finds_root_of_quadratic() {
    let f = |x: f64| x * x - 4.0;

    let solution = solve_unobserved(f, [0.0, 3.0], &tol_config(500, 1e-6)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
}

#[test]
fn finds_cube_root() {
    let f = |x: f64| x * x * x - 27.0;

    let solution = solve_unobserved(f, [0.0, 10.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
}

#[test]
fn final_bracket_width_meets_tolerance() {
    let f = |x: f64| x.cos() - x;
    let tol = 1e-9;

    let solution = solve_unobserved(f, [0.0, 1.0], &tol_config(500, tol)).expect("should solve");

    let [left, right] = solution.steps.last().expect("steps recorded").bracket;
    assert!(right - left <= tol);
    assert_relative_eq!(solution.x, 0.739_085_133_215_160_7, epsilon = tol);
}

#[test]
fn returns_endpoint_zero_without_iterating() {
    let f = |x: f64| x * x - 4.0;

    let solution = solve_unobserved(f, [1.0, 2.0], &tol_config(500, 1e-9)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert!(solution.steps.is_empty());
    assert_relative_eq!(solution.x, 2.0);
    assert_relative_eq!(solution.residual, 0.0);
}

#[test]
fn errors_when_signs_match() {
    let f = |x: f64| x * x - 4.0;

    let result = solve_unobserved(f, [3.0, 5.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange))
    ));
}

#[test]
fn errors_on_reversed_interval() {
    let f = |x: f64| x * x - 4.0;

    let result = solve_unobserved(f, [3.0, 0.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NotOrdered))
    ));
}

#[test]
fn errors_on_non_finite_interval() {
    let f = |x: f64| x;

    let result = solve_unobserved(f, [f64::NAN, 1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite))
    ));
}

#[test]
fn max_iters_reports_final_bracket_and_history() {
    let f = |x: f64| x * x - 2.0;

    // Zero tolerances can only be met by an exact zero, which this
    // function never produces at a representable midpoint of [0, 2].
    let result = solve_unobserved(f, [0.0, 2.0], &tol_config(3, 0.0));

    match result {
        Err(Error::MaxIters {
            iters,
            bracket: [left, right],
            x,
            steps,
            ..
        }) => {
            assert_eq!(iters, 3);
            assert_eq!(steps.len(), 3);
            assert!(left <= x && x <= right);
            assert!(left <= 2.0_f64.sqrt() && 2.0_f64.sqrt() <= right);
        }
        other => panic!("expected MaxIters, got {other:?}"),
    }
}

#[test]
fn errors_on_non_finite_evaluation() {
    let f = |x: f64| 1.0 / (x - 1.0);

    let result = solve_unobserved(f, [0.0, 2.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFinite { x, .. }) if x == 1.0));
}

#[test]
fn observer_can_stop_iteration() {
    let f = |x: f64| x * x - 4.0;

    let mut calls = 0usize;
    let observer = |step: &Step| {
        calls += 1;
        if step.iter >= 2 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(f, [0.0, 3.0], &Config::default(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(calls, 2);
    assert_eq!(solution.steps.len(), 2);
}

#[test]
fn bracket_width_halves_each_iteration() {
    let f = |x: f64| x * x - 4.0;

    let solution = solve_unobserved(f, [0.0, 3.0], &tol_config(500, 1e-9)).expect("should solve");

    for pair in solution.steps.windows(2) {
        let [l0, r0] = pair[0].bracket;
        let [l1, r1] = pair[1].bracket;
        assert_relative_eq!(r1 - l1, 0.5 * (r0 - l0), epsilon = 1e-12);
    }
}

#[test]
fn reruns_are_bit_identical() {
    let f = |x: f64| x.cos() - x;
    let config = tol_config(200, 1e-12);

    let first = solve_unobserved(f, [0.0, 1.0], &config).expect("should solve");
    let second = solve_unobserved(f, [0.0, 1.0], &config).expect("should solve");

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.iters, second.iters);
}
