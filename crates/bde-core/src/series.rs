//! Boolean time series - the record of one variable's state over time

use crate::error::{BdeError, BdeResult};
use crate::tolerance::Tolerance;

/// The state of a single Boolean variable over the closed interval
/// `[t[0], end]`.
///
/// `y[i]` is the state in force from `t[i]` (inclusive) until the next
/// switch (exclusive) or `end`. Switch times are strictly increasing under
/// the tolerance comparator; successive states need not alternate, so a
/// series may carry redundant switch points (see [`BooleanSeries::compress`]).
///
/// Instances are immutable after construction; every operation returns a
/// fresh series.
#[derive(Clone, Debug)]
pub struct BooleanSeries {
    t: Vec<f64>,
    y: Vec<bool>,
    end: f64,
    /// Presentation only, excluded from semantic identity
    pub label: Option<String>,
    /// Presentation only, excluded from semantic identity
    pub style: Option<String>,
}

/// Semantic identity: switch times, states, and end. Labels and styles are
/// presentation attributes and do not participate.
impl PartialEq for BooleanSeries {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && self.y == other.y && self.end == other.end
    }
}

/// Index of the interval in force at `t` within a strictly increasing
/// switch-time slice: the largest `i` with `times[i] <= t`, where a query
/// tolerance-equal to a switch time counts as at-or-after it (right limit).
///
/// Callers are responsible for range-checking `t` against the domain; the
/// solver also uses this directly on its growing switch buffers.
pub fn interval_index(times: &[f64], t: f64, tol: Tolerance) -> usize {
    let mut i = times.partition_point(|&s| s <= t);
    if i < times.len() && tol.eq(times[i], t) {
        i += 1;
    }
    i.max(1) - 1
}

impl BooleanSeries {
    /// Create a series under the default comparator.
    pub fn new(t: Vec<f64>, y: Vec<bool>, end: f64) -> BdeResult<Self> {
        Self::with_tolerance(t, y, end, Tolerance::default())
    }

    /// Create a series, validating every invariant under `tol`.
    ///
    /// As a convenience, a single supplied state is padded out with
    /// alternating states, one per switch time.
    pub fn with_tolerance(t: Vec<f64>, mut y: Vec<bool>, end: f64, tol: Tolerance) -> BdeResult<Self> {
        if t.is_empty() {
            return Err(BdeError::InvalidSeriesShape {
                t_len: 0,
                y_len: y.len(),
            });
        }
        if y.len() == 1 && t.len() > 1 {
            let first = y[0];
            y = (0..t.len()).map(|i| (i % 2 == 0) == first).collect();
        }
        if y.len() != t.len() {
            return Err(BdeError::InvalidSeriesShape {
                t_len: t.len(),
                y_len: y.len(),
            });
        }
        for i in 1..t.len() {
            if !tol.lt(t[i - 1], t[i]) {
                return Err(BdeError::TimesNotSorted {
                    index: i,
                    prev: t[i - 1],
                    next: t[i],
                });
            }
        }
        let last = t[t.len() - 1];
        if tol.lt(end, last) {
            return Err(BdeError::EndBeforeLastSwitch {
                end,
                last_switch: last,
            });
        }
        Ok(BooleanSeries {
            t,
            y,
            end,
            label: None,
            style: None,
        })
    }

    /// Attach a presentation label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a presentation style hint.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Switch times, strictly increasing.
    pub fn times(&self) -> &[f64] {
        &self.t
    }

    /// State in force from each switch time.
    pub fn states(&self) -> &[bool] {
        &self.y
    }

    /// First switch time; the series domain starts here.
    pub fn start(&self) -> f64 {
        self.t[0]
    }

    /// End of the series domain.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of switch points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// A series always holds at least one switch point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// State in force over the final interval, up to and including `end`.
    pub fn last_state(&self) -> bool {
        self.y[self.y.len() - 1]
    }

    /// Index of the interval in force at `t`, range-checked.
    pub fn interval_at(&self, t: f64, tol: Tolerance) -> BdeResult<usize> {
        if tol.lt(t, self.t[0]) || tol.gt(t, self.end) {
            return Err(BdeError::OutOfRange {
                t,
                start: self.t[0],
                end: self.end,
            });
        }
        Ok(interval_index(&self.t, t, tol))
    }

    /// The state in force at `t`.
    ///
    /// A query tolerance-equal to a switch time takes the right-limit value,
    /// the state immediately after the switch: a switch at `t` means its
    /// state is already in force at `t` itself.
    pub fn evaluate_at(&self, t: f64, tol: Tolerance) -> BdeResult<bool> {
        Ok(self.y[self.interval_at(t, tol)?])
    }

    /// Sub-series on `[new_start, new_end]`.
    ///
    /// A start lying inside an interval synthesises a leading switch at
    /// `new_start` carrying the state at that time. Switches strictly
    /// outside the window are dropped; a switch equal to `new_end` is
    /// dropped unless `keep_switch_on_end`. The requested window must be a
    /// subset of the series domain.
    pub fn cut(
        &self,
        new_start: f64,
        new_end: f64,
        keep_switch_on_end: bool,
        tol: Tolerance,
    ) -> BdeResult<BooleanSeries> {
        if tol.lt(new_start, self.t[0]) || tol.ge(new_start, new_end) {
            return Err(BdeError::OutOfRange {
                t: new_start,
                start: self.t[0],
                end: self.end,
            });
        }
        if tol.gt(new_end, self.end) {
            return Err(BdeError::OutOfRange {
                t: new_end,
                start: self.t[0],
                end: self.end,
            });
        }

        let lead = interval_index(&self.t, new_start, tol);
        let mut t = Vec::new();
        let mut y = Vec::new();
        if tol.eq(self.t[lead], new_start) {
            t.push(self.t[lead]);
        } else {
            t.push(new_start);
        }
        y.push(self.y[lead]);

        for i in (lead + 1)..self.t.len() {
            let keep = tol.lt(self.t[i], new_end)
                || (keep_switch_on_end && tol.eq(self.t[i], new_end));
            if keep {
                t.push(self.t[i]);
                y.push(self.y[i]);
            }
        }

        Ok(BooleanSeries {
            t,
            y,
            end: new_end,
            label: self.label.clone(),
            style: self.style.clone(),
        })
    }

    /// Drop switch points that do not change the state. The first switch is
    /// always kept; the result is the canonical form of the series.
    pub fn compress(&self) -> BooleanSeries {
        let mut t = vec![self.t[0]];
        let mut y = vec![self.y[0]];
        for i in 1..self.t.len() {
            if self.y[i] != y[y.len() - 1] {
                t.push(self.t[i]);
                y.push(self.y[i]);
            }
        }
        BooleanSeries {
            t,
            y,
            end: self.end,
            label: self.label.clone(),
            style: self.style.clone(),
        }
    }

    /// Total length of time on which two series disagree, over the
    /// intersection of their domains.
    ///
    /// Symmetric, non-negative, and zero against itself. Differing only at
    /// isolated points (a switch on one series' end boundary, say)
    /// contributes nothing. Domains that do not intersect at all are a
    /// [`BdeError::DomainMismatch`].
    pub fn hamming_distance(&self, other: &BooleanSeries, tol: Tolerance) -> BdeResult<f64> {
        let lo = self.t[0].max(other.t[0]);
        let hi = self.end.min(other.end);
        if tol.gt(lo, hi) {
            return Err(BdeError::DomainMismatch {
                start_a: self.t[0],
                end_a: self.end,
                start_b: other.t[0],
                end_b: other.end,
            });
        }

        let mut acc = 0.0;
        let mut cursor = lo;
        let mut ia = interval_index(&self.t, lo, tol);
        let mut ib = interval_index(&other.t, lo, tol);
        loop {
            let na = self.t.get(ia + 1).copied();
            let nb = other.t.get(ib + 1).copied();
            let mut next = hi;
            if let Some(v) = na {
                if v < next {
                    next = v;
                }
            }
            if let Some(v) = nb {
                if v < next {
                    next = v;
                }
            }
            if self.y[ia] != other.y[ib] {
                acc += next - cursor;
            }
            if tol.ge(next, hi) {
                break;
            }
            if let Some(v) = na {
                if tol.le(v, next) {
                    ia += 1;
                }
            }
            if let Some(v) = nb {
                if tol.le(v, next) {
                    ib += 1;
                }
            }
            cursor = next;
        }
        Ok(acc)
    }

    /// Merge several series onto a shared time grid.
    ///
    /// Returns the union of all switch times (sorted, deduplicated under
    /// the comparator) and, for each grid time, the vector of every series'
    /// state there. All domains must coincide.
    pub fn merge(
        list: &[BooleanSeries],
        tol: Tolerance,
    ) -> BdeResult<(Vec<f64>, Vec<Vec<bool>>)> {
        let Some(first) = list.first() else {
            return Ok((Vec::new(), Vec::new()));
        };
        for s in &list[1..] {
            if !tol.eq(s.t[0], first.t[0]) || !tol.eq(s.end, first.end) {
                return Err(BdeError::DomainMismatch {
                    start_a: first.t[0],
                    end_a: first.end,
                    start_b: s.t[0],
                    end_b: s.end,
                });
            }
        }

        let mut grid: Vec<f64> = list.iter().flat_map(|s| s.t.iter().copied()).collect();
        grid.sort_by(f64::total_cmp);
        grid.dedup_by(|b, a| tol.eq(*a, *b));

        let y = grid
            .iter()
            .map(|&tt| {
                list.iter()
                    .map(|s| s.y[interval_index(&s.t, tt, tol)])
                    .collect()
            })
            .collect();

        Ok((grid, y))
    }

    /// Inverse of [`BooleanSeries::merge`]: recover one series per variable
    /// from a shared grid, dropping grid points that do not change the
    /// variable's state.
    pub fn unmerge(
        t: &[f64],
        y: &[Vec<bool>],
        end: f64,
        tol: Tolerance,
    ) -> BdeResult<Vec<BooleanSeries>> {
        if t.is_empty() || t.len() != y.len() {
            return Err(BdeError::InvalidSeriesShape {
                t_len: t.len(),
                y_len: y.len(),
            });
        }
        let n_vars = y[0].len();
        if y.iter().any(|row| row.len() != n_vars) {
            return Err(BdeError::InvalidSeriesShape {
                t_len: t.len(),
                y_len: n_vars,
            });
        }

        let mut out = Vec::with_capacity(n_vars);
        for v in 0..n_vars {
            let mut vt = vec![t[0]];
            let mut vy = vec![y[0][v]];
            for i in 1..t.len() {
                if y[i][v] != vy[vy.len() - 1] {
                    vt.push(t[i]);
                    vy.push(y[i][v]);
                }
            }
            out.push(BooleanSeries::with_tolerance(vt, vy, end, tol)?);
        }
        Ok(out)
    }

    /// Build a series from numeric levels, reading any level above zero as
    /// true, and compress away the redundant points.
    pub fn from_levels(t: &[f64], levels: &[i32], end: f64) -> BdeResult<BooleanSeries> {
        let y = levels.iter().map(|&v| v > 0).collect();
        Ok(BooleanSeries::new(t.to_vec(), y, end)?.compress())
    }
}
