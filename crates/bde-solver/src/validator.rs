//! Solution checker - re-evaluates the transition along a solved series set
//!
//! Independent of the solve loop, so a bug in the candidate machinery
//! cannot hide in its own verification.

use bde_core::{BdeError, BdeResult, BooleanSeries, Tolerance};

use crate::model::Transition;

/// Checks a multi-variable series set against its model.
///
/// Probes every switch time inside the checked window, the window end, and
/// the midpoint of every interval in between, and compares each series'
/// state (right limit) with the transition's verdict from the delayed
/// states. A solution consistent with the model scores zero.
pub struct SolutionValidator<'a, T> {
    transition: &'a T,
    delays: &'a [f64],
    series: &'a [BooleanSeries],
    forcings: &'a [BooleanSeries],
    tol: Tolerance,
}

impl<'a, T: Transition> SolutionValidator<'a, T> {
    pub fn new(
        transition: &'a T,
        delays: &'a [f64],
        series: &'a [BooleanSeries],
    ) -> Self {
        Self::with_forcing(transition, delays, series, &[])
    }

    pub fn with_forcing(
        transition: &'a T,
        delays: &'a [f64],
        series: &'a [BooleanSeries],
        forcings: &'a [BooleanSeries],
    ) -> Self {
        SolutionValidator {
            transition,
            delays,
            series,
            forcings,
            tol: Tolerance::default(),
        }
    }

    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// Count the probes on `(start, end]` at which any variable's solved
    /// state disagrees with the transition. Each disagreeing
    /// (probe, variable) pair counts once.
    pub fn validate(&self, start: f64, end: f64) -> BdeResult<usize> {
        let tol = self.tol;

        let mut probes: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.times().iter().copied())
            .filter(|&t| tol.gt(t, start) && tol.le(t, end))
            .collect();
        probes.push(end);
        probes.sort_by(f64::total_cmp);
        probes.dedup_by(|b, a| tol.eq(*a, *b));

        // Interval midpoints catch states that are wrong between switches
        let mut all = Vec::with_capacity(probes.len() * 2);
        let mut prev = start;
        for &p in &probes {
            let mid = prev + (p - prev) / 2.0;
            if tol.gt(mid, start) && tol.lt(mid, p) {
                all.push(mid);
            }
            all.push(p);
            prev = p;
        }

        let n_vars = self.series.len();
        let mut failures = 0;
        for &p in &all {
            let mut z = Vec::with_capacity(self.delays.len());
            let mut zf = Vec::with_capacity(self.delays.len());
            for &delay in self.delays {
                let t_past = p - delay;
                let row: BdeResult<Vec<bool>> = self
                    .series
                    .iter()
                    .map(|s| s.evaluate_at(t_past, tol))
                    .collect();
                z.push(row?);
                let row: BdeResult<Vec<bool>> = self
                    .forcings
                    .iter()
                    .map(|f| f.evaluate_at(t_past, tol))
                    .collect();
                zf.push(row?);
            }

            let forced = if self.forcings.is_empty() {
                None
            } else {
                Some(&zf[..])
            };
            let verdict = self.transition.evaluate(&z, forced);
            if verdict.len() != n_vars {
                return Err(BdeError::TransitionArityMismatch {
                    expected: n_vars,
                    actual: verdict.len(),
                });
            }

            for (v, s) in self.series.iter().enumerate() {
                if s.evaluate_at(p, tol)? != verdict[v] {
                    failures += 1;
                }
            }
        }
        Ok(failures)
    }
}
