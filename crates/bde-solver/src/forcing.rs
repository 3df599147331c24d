//! Read-only forcing-input adapter for the solve loop

use std::cell::Cell;

use bde_core::{BdeResult, BooleanSeries, Tolerance};

/// Cached view over a forcing series.
///
/// The solver reads forcing states at `t_c - delay` for candidate times
/// `t_c` that only ever move forward, so the interval found by the previous
/// lookup is almost always the right one for the next. The view remembers
/// it and falls back to the series' binary search on a miss.
///
/// Views are created once per solve and never outlive it.
pub struct ForcingView<'a> {
    series: &'a BooleanSeries,
    hint: Cell<usize>,
}

impl<'a> ForcingView<'a> {
    pub fn new(series: &'a BooleanSeries) -> Self {
        ForcingView {
            series,
            hint: Cell::new(0),
        }
    }

    /// The underlying series.
    pub fn series(&self) -> &BooleanSeries {
        self.series
    }

    /// Forcing state at `t`, with the same right-limit rule as
    /// [`BooleanSeries::evaluate_at`].
    pub fn state_at(&self, t: f64, tol: Tolerance) -> BdeResult<bool> {
        let times = self.series.times();
        let i = self.hint.get();
        if tol.ge(t, times[i]) {
            let in_interval = match times.get(i + 1) {
                Some(&next) => tol.lt(t, next),
                None => tol.le(t, self.series.end()),
            };
            if in_interval {
                return Ok(self.series.states()[i]);
            }
        }
        let i = self.series.interval_at(t, tol)?;
        self.hint.set(i);
        Ok(self.series.states()[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_matches_series_evaluation() {
        let tol = Tolerance::default();
        let series = BooleanSeries::new(vec![0.0, 0.5, 1.5, 2.0], vec![true], 3.0).unwrap();
        let view = ForcingView::new(&series);

        // A forward sweep interleaved with backward jumps, as two delays
        // produce in a real solve
        for &t in &[0.1, 0.6, 0.4, 1.6, 1.4, 2.0, 1.9, 3.0, 0.0] {
            assert_eq!(
                series.evaluate_at(t, tol).unwrap(),
                view.state_at(t, tol).unwrap(),
                "at t={t}"
            );
        }
    }

    #[test]
    fn test_view_right_limit_on_switch() {
        let tol = Tolerance::default();
        let series = BooleanSeries::new(vec![0.0, 1.0], vec![false, true], 2.0).unwrap();
        let view = ForcingView::new(&series);

        assert!(!view.state_at(0.5, tol).unwrap());
        assert!(view.state_at(1.0 - 1e-12, tol).unwrap());
        assert!(view.state_at(1.0, tol).unwrap());
    }

    #[test]
    fn test_view_out_of_range() {
        let tol = Tolerance::default();
        let series = BooleanSeries::new(vec![0.0, 1.0], vec![false, true], 2.0).unwrap();
        let view = ForcingView::new(&series);

        assert!(view.state_at(-1.0, tol).is_err());
        assert!(view.state_at(2.5, tol).is_err());
    }
}
