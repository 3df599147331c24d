//! The event-driven delay solver

use tracing::{debug, trace};

use bde_core::series::interval_index;
use bde_core::{BdeError, BdeResult, BooleanSeries};

use crate::candidates::CandidateQueue;
use crate::forcing::ForcingView;
use crate::model::{SolverConfig, Transition};

/// Event-driven solver for a Boolean delay equation model.
///
/// Construction takes the transition function, the delay vector, and one
/// history series per modelled variable (their common end is the
/// simulation start), plus optional forcing series. [`BdeSolver::solve`]
/// then extends every history to a requested end time such that at each
/// instant the state of every variable equals the transition applied to
/// the delayed states.
///
/// The solver never searches continuous time. All delays are positive
/// constants and all states are Boolean, so a variable can only change at
/// a projection `t_s + delay` of an earlier switch `t_s`; the solver
/// evaluates the transition at exactly those candidate times, in order,
/// appending the switches that are real.
///
/// A solve runs start to finish on the calling thread and owns all of its
/// mutable state, so independent solves may run on separate threads as
/// long as each has its own solver and a re-entrant transition.
pub struct BdeSolver<T> {
    transition: T,
    delays: Vec<f64>,
    histories: Vec<BooleanSeries>,
    forcings: Vec<BooleanSeries>,
    config: SolverConfig,
    /// Simulation start: the common end of the histories
    start: f64,
    max_delay: f64,
}

impl<T: Transition> BdeSolver<T> {
    /// Solver for a model without forcing inputs.
    pub fn new(
        transition: T,
        delays: Vec<f64>,
        histories: Vec<BooleanSeries>,
    ) -> BdeResult<Self> {
        Self::with_config(transition, delays, histories, Vec::new(), SolverConfig::default())
    }

    /// Solver for a model with forcing inputs.
    pub fn with_forcing(
        transition: T,
        delays: Vec<f64>,
        histories: Vec<BooleanSeries>,
        forcings: Vec<BooleanSeries>,
    ) -> BdeResult<Self> {
        Self::with_config(transition, delays, histories, forcings, SolverConfig::default())
    }

    /// Solver with explicit configuration, validating every input
    /// invariant. Each violation is a distinct error kind.
    pub fn with_config(
        transition: T,
        delays: Vec<f64>,
        histories: Vec<BooleanSeries>,
        forcings: Vec<BooleanSeries>,
        config: SolverConfig,
    ) -> BdeResult<Self> {
        let tol = config.tolerance;

        if delays.is_empty() {
            return Err(BdeError::InvalidDelay {
                index: 0,
                delay: 0.0,
            });
        }
        for (index, &delay) in delays.iter().enumerate() {
            if delay <= 0.0 {
                return Err(BdeError::InvalidDelay { index, delay });
            }
        }
        if histories.is_empty() {
            return Err(BdeError::InvalidSeriesShape { t_len: 0, y_len: 0 });
        }

        let start = histories[0].end();
        for h in &histories[1..] {
            if !tol.eq(h.end(), start) {
                return Err(BdeError::DomainMismatch {
                    start_a: histories[0].start(),
                    end_a: start,
                    start_b: h.start(),
                    end_b: h.end(),
                });
            }
        }

        let max_delay = delays.iter().copied().fold(0.0, f64::max);
        for (variable, h) in histories.iter().enumerate() {
            let span = start - h.start();
            if tol.lt(span, max_delay) {
                return Err(BdeError::HistoryTooShort {
                    variable,
                    span,
                    max_delay,
                });
            }
            let last_switch = h.times()[h.len() - 1];
            if tol.eq(last_switch, start) {
                // The transition may contradict the asserted state exactly
                // at the simulation start; a clear final interval removes
                // the ambiguity.
                return Err(BdeError::HistoryEndsOnSwitch {
                    variable,
                    switch_time: last_switch,
                });
            }
        }

        Ok(BdeSolver {
            transition,
            delays,
            histories,
            forcings,
            config,
            start,
            max_delay,
        })
    }

    /// The simulation start time, the common end of the histories.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The delay vector, in the order the transition sees it.
    pub fn delays(&self) -> &[f64] {
        &self.delays
    }

    /// Extend every history to `end_time`.
    ///
    /// Returns one series per modelled variable covering
    /// `[history.start, end_time]`, with the history preserved verbatim as
    /// a prefix. A switch landing tolerance-equal to `end_time` is emitted
    /// as a final switch, not absorbed; callers wanting it gone can
    /// [`BooleanSeries::cut`] the result.
    pub fn solve(&self, end_time: f64) -> BdeResult<Vec<BooleanSeries>> {
        let tol = self.config.tolerance;
        if tol.le(end_time, self.start) {
            return Err(BdeError::EndBeforeStart {
                start_time: self.start,
                end_time,
            });
        }

        let required_start = self.start - self.max_delay;
        for (input, f) in self.forcings.iter().enumerate() {
            if tol.gt(f.start(), required_start) || tol.lt(f.end(), end_time) {
                return Err(BdeError::ForcingTooShort {
                    input,
                    start: f.start(),
                    end: f.end(),
                    required_start,
                    required_end: end_time,
                });
            }
        }

        let n_vars = self.histories.len();
        let n_delays = self.delays.len();
        let max_switches =
            (self.config.max_switch_density * (end_time - self.start)).ceil() as usize;

        debug!(
            n_vars,
            n_delays,
            n_forced = self.forcings.len(),
            start = self.start,
            end_time,
            "starting solve"
        );

        // Growing switch buffers, seeded with the histories
        let mut times: Vec<Vec<f64>> =
            self.histories.iter().map(|h| h.times().to_vec()).collect();
        let mut states: Vec<Vec<bool>> =
            self.histories.iter().map(|h| h.states().to_vec()).collect();
        let history_len: Vec<usize> = times.iter().map(Vec::len).collect();

        let mut queue = CandidateQueue::new(self.start, end_time, tol);
        for h in &self.histories {
            for &t_s in h.times() {
                queue.push_projections(t_s, &self.delays);
            }
        }
        for f in &self.forcings {
            for &t_s in f.times() {
                queue.push_projections(t_s, &self.delays);
            }
        }
        // The start itself is always a candidate: the transition may
        // already disagree with the asserted history state there, and that
        // disagreement is a switch at the first representable instant.
        queue.push(self.start);

        let views: Vec<ForcingView<'_>> = self.forcings.iter().map(ForcingView::new).collect();

        let mut z = vec![vec![false; n_vars]; n_delays];
        let mut zf = vec![vec![false; self.forcings.len()]; n_delays];

        while let Some(t_c) = queue.pop() {
            for (d, &delay) in self.delays.iter().enumerate() {
                let t_past = t_c - delay;
                for v in 0..n_vars {
                    z[d][v] = states[v][interval_index(&times[v], t_past, tol)];
                }
                for (k, view) in views.iter().enumerate() {
                    zf[d][k] = view.state_at(t_past, tol)?;
                }
            }

            let forced = if views.is_empty() { None } else { Some(&zf[..]) };
            let new_state = self.transition.evaluate(&z, forced);
            if new_state.len() != n_vars {
                return Err(BdeError::TransitionArityMismatch {
                    expected: n_vars,
                    actual: new_state.len(),
                });
            }

            for (v, &state) in new_state.iter().enumerate() {
                let prev = states[v][states[v].len() - 1];
                if state == prev {
                    continue;
                }
                trace!(t = t_c, variable = v, state, "committing switch");
                times[v].push(t_c);
                states[v].push(state);
                if times[v].len() - history_len[v] > max_switches {
                    return Err(BdeError::SwitchDensityExceeded {
                        variable: v,
                        time: t_c,
                        max_switches,
                    });
                }
                queue.push_projections(t_c, &self.delays);
            }
        }

        let mut out = Vec::with_capacity(n_vars);
        for (v, h) in self.histories.iter().enumerate() {
            let t = std::mem::take(&mut times[v]);
            let y = std::mem::take(&mut states[v]);
            let mut series = BooleanSeries::with_tolerance(t, y, end_time, tol)?;
            series.label = h.label.clone();
            series.style = h.style.clone();
            out.push(series);
        }

        debug!(
            switches = out.iter().map(BooleanSeries::len).sum::<usize>(),
            "solve complete"
        );
        Ok(out)
    }
}
