//! Edge-stepped plot data

use bde_core::{BooleanSeries, Tolerance};

/// Expand a series into `(xs, ys)` arrays that render as square-edged
/// steps on a line plot.
///
/// Interior switch times and their levels are duplicated so the connecting
/// segment at each switch is vertical; the series end is appended when the
/// final switch lies strictly before it. False maps to 0.0 and true to 1.0.
pub fn to_step_plot_data(series: &BooleanSeries, tol: Tolerance) -> (Vec<f64>, Vec<f64>) {
    to_step_plot_data_offset(series, 0.0, tol)
}

/// [`to_step_plot_data`] with every level raised by `offset`, for stacking
/// several variables on one axis.
pub fn to_step_plot_data_offset(
    series: &BooleanSeries,
    offset: f64,
    tol: Tolerance,
) -> (Vec<f64>, Vec<f64>) {
    let t = series.times();
    let y = series.states();
    let level = |state: bool| if state { 1.0 + offset } else { offset };

    let mut xs = Vec::with_capacity(t.len() * 2);
    let mut ys = Vec::with_capacity(t.len() * 2);

    xs.push(t[0]);
    for &tt in &t[1..] {
        xs.push(tt);
        xs.push(tt);
    }
    for &state in &y[..y.len() - 1] {
        ys.push(level(state));
        ys.push(level(state));
    }
    ys.push(level(y[y.len() - 1]));

    if tol.lt(t[t.len() - 1], series.end()) {
        xs.push(series.end());
        ys.push(level(y[y.len() - 1]));
    }

    (xs, ys)
}
