//! End-to-end solver scenarios
//!
//! Each scenario pins the exact switch lists a model must produce,
//! including the regression cases that once exposed rounding and
//! index-tracking bugs in earlier implementations of this solver family.

use bde_core::{BooleanSeries, Tolerance};
use bde_plot::print_tabular;
use bde_solver::BdeSolver;
use bde_test::square_wave;

fn series(t: Vec<f64>, y: Vec<bool>, end: f64) -> BooleanSeries {
    BooleanSeries::new(t, y, end).unwrap()
}

fn assert_times(expected: &[f64], actual: &[f64]) {
    assert_eq!(expected.len(), actual.len(), "got {actual:?}");
    for (e, a) in expected.iter().zip(actual) {
        assert!((e - a).abs() < 1e-9, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn one_variable_negation() {
    // x(t) = not x(t - 1), alternating forever
    let history = series(vec![0.0], vec![true], 1.0);
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![!z[0][0]];
    let solver = BdeSolver::new(f, vec![1.0], vec![history]).unwrap();

    let result = solver.solve(5.0).unwrap();

    assert_times(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], result[0].times());
    assert_eq!(
        &[true, false, true, false, true, false],
        result[0].states()
    );
    assert_eq!(5.0, result[0].end());
}

#[test]
fn one_variable_from_multi_switch_history() {
    let history = series(vec![0.0, 1.0, 1.5], vec![false, true, true], 1.6);
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![!z[0][0]];
    let solver = BdeSolver::new(f, vec![1.0], vec![history]).unwrap();

    let result = solver.solve(3.0).unwrap();

    assert_times(&[0.0, 1.0, 1.5, 2.0, 3.0], result[0].times());
    assert_eq!(&[false, true, true, false, true], result[0].states());
}

#[test]
fn two_variables_two_delays() {
    // x1(t) = x2(t - 1);  x2(t) = not x1(t - 0.5)
    let h1 = series(vec![0.0, 1.5], vec![true, false], 2.0);
    let h2 = series(vec![0.0, 1.0], vec![true, false], 2.0);
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![z[0][1], !z[1][0]];
    let solver = BdeSolver::new(f, vec![1.0, 0.5], vec![h1, h2]).unwrap();

    let result = solver.solve(6.0).unwrap();

    let (t, y) = BooleanSeries::merge(&result, Tolerance::default()).unwrap();
    assert_times(&[0.0, 1.0, 1.5, 2.0, 3.0, 3.5, 4.5, 5.0, 6.0], &t);
    assert_eq!(
        vec![
            vec![true, true],
            vec![true, false],
            vec![false, false],
            vec![false, true],
            vec![true, true],
            vec![true, false],
            vec![false, false],
            vec![false, true],
            vec![true, true],
        ],
        y
    );
}

#[test]
fn two_variables_ending_on_a_switch_point() {
    let h1 = series(vec![0.0, 1.5], vec![true, false], 1.8);
    let h2 = series(vec![0.0, 0.5], vec![true, false], 1.8);
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![z[0][1], !z[1][0]];
    let solver = BdeSolver::new(f, vec![1.0, 0.5], vec![h1, h2]).unwrap();

    // The end time lands exactly on a switch, which must be emitted
    let result = solver.solve(5.0).unwrap();

    assert_times(&[0.0, 1.5, 3.0, 4.5], result[0].times());
    assert_eq!(&[true, false, true, false], result[0].states());
    assert_times(&[0.0, 0.5, 2.0, 3.5, 5.0], result[1].times());
    assert_eq!(&[true, false, true, false, true], result[1].states());
    assert_eq!(5.0, result[1].end());
}

#[test]
fn two_variables_switching_at_every_point() {
    // x1(t) = x2(t - 1);  x2(t) = x1(t - 1): both variables flip together
    let h1 = series(vec![0.0, 0.5, 1.0, 1.5], vec![true, false, true, false], 1.8);
    let h2 = series(vec![0.0, 0.5, 1.0, 1.5], vec![true, false, true, false], 1.8);
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![z[0][1], z[1][0]];
    let solver = BdeSolver::new(f, vec![1.0, 1.0], vec![h1, h2]).unwrap();

    let result = solver.solve(3.2).unwrap();

    for r in &result {
        assert_times(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0], r.times());
        assert_eq!(
            &[true, false, true, false, true, false, true],
            r.states()
        );
    }
}

#[test]
fn forced_variable_follows_delayed_signal() {
    // x(t) = u(t - 0.3) with a square-wave forcing u. This once produced
    // wrong answers from accumulated rounding in candidate projection.
    let history = series(vec![0.0], vec![true], 0.5);
    let forcing = square_wave(0.0, 3.0, 0.5, false);
    let f = |_: &[Vec<bool>], zf: Option<&[Vec<bool>]>| vec![zf.unwrap()[0][0]];
    let solver = BdeSolver::with_forcing(f, vec![0.3], vec![history], vec![forcing]).unwrap();

    let result = solver.solve(3.0).unwrap();

    assert_times(&[0.0, 0.5, 0.8, 1.3, 1.8, 2.3, 2.8], result[0].times());
    assert_eq!(
        &[true, false, true, false, true, false, true],
        result[0].states()
    );
    assert_eq!(3.0, result[0].end());
}

#[test]
fn forced_input_passthrough() {
    let history = series(vec![0.0, 0.5, 1.5], vec![true, false, true], 1.7);
    let forcing = series(
        vec![0.0, 0.5, 1.5, 2.0, 2.5, 3.0],
        vec![false, true, false, true, false, true],
        3.0,
    );
    let f = |_: &[Vec<bool>], zf: Option<&[Vec<bool>]>| vec![zf.unwrap()[0][0]];
    let solver = BdeSolver::with_forcing(f, vec![0.5], vec![history], vec![forcing]).unwrap();

    let result = solver.solve(3.0).unwrap();

    assert_times(&[0.0, 0.5, 1.5, 2.0, 2.5, 3.0], result[0].times());
    assert_eq!(
        &[true, false, true, false, true, false],
        result[0].states()
    );
}

#[test]
fn equal_delays_with_forcing() {
    // Two variables, three equal delays, one forcing input: every candidate
    // time carries several coinciding projections that must coalesce.
    // x1(t) = x2(t - 1);  x2(t) = not x1(t - 1) or u(t - 1)
    let h1 = series(vec![0.0], vec![true], 1.0);
    let h2 = series(vec![0.0], vec![false], 1.0);
    let forcing = series(
        vec![0.0, 0.25, 0.75, 1.25, 1.75, 2.25, 2.75, 3.25, 3.75, 4.25, 4.75],
        vec![false],
        5.0,
    );
    let f = |z: &[Vec<bool>], zf: Option<&[Vec<bool>]>| {
        vec![z[0][1], !z[1][0] || zf.unwrap()[2][0]]
    };
    let solver =
        BdeSolver::with_forcing(f, vec![1.0, 1.0, 1.0], vec![h1, h2], vec![forcing]).unwrap();

    let result = solver.solve(5.0).unwrap();

    let (t, y) = BooleanSeries::merge(&result, Tolerance::default()).unwrap();
    assert_times(
        &[0.0, 1.0, 1.25, 1.75, 2.0, 2.25, 2.75, 3.0, 4.0, 4.25, 4.75, 5.0],
        &t,
    );
    let expected: Vec<Vec<bool>> = [
        (true, false),
        (false, false),
        (false, true),
        (false, false),
        (false, true),
        (true, true),
        (false, true),
        (true, true),
        (true, false),
        (true, true),
        (true, false),
        (false, false),
    ]
    .iter()
    .map(|&(a, b)| vec![a, b])
    .collect();
    assert_eq!(expected, y);
}

#[test]
fn solved_series_print_as_one_line_per_interval() {
    let history = series(vec![0.0], vec![true], 1.0);
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![!z[0][0]];
    let solver = BdeSolver::new(f, vec![1.0], vec![history]).unwrap();
    let result = solver.solve(5.0).unwrap();

    let (t, y) = BooleanSeries::merge(&result, Tolerance::default()).unwrap();
    let mut buf = Vec::new();
    print_tabular(&t, &y, result[0].end(), &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(6, text.lines().count());
    assert!(text.lines().next().unwrap().ends_with('T'));
}
