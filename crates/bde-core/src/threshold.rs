//! Thresholding of sampled numeric signals into Boolean series
//!
//! Converts continuous measurements (gene expression levels, say) into the
//! Boolean form the delay solver consumes. The state is true where the
//! signal is above the threshold; crossing times between samples on
//! opposite sides are placed by linear interpolation on the signal.

use crate::error::{BdeError, BdeResult};
use crate::series::BooleanSeries;
use crate::tolerance::Tolerance;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
}

/// Convert numeric samples into a Boolean series using a fixed threshold.
///
/// Samples tolerance-equal to the threshold bind to neither side: a
/// crossing interpolates between the nearest samples strictly off the
/// threshold on each side. A plateau lying exactly on the threshold
/// therefore yields at most one switch, placed where the chord between its
/// off-threshold neighbours meets the threshold, and a touch that returns
/// to the same side yields no switch at all.
///
/// The returned series spans `[t_samples[0], t_samples[last]]`. Its initial
/// state is the state of the first off-threshold sample, or false when the
/// whole signal sits on the threshold.
pub fn absolute_threshold(
    t_samples: &[f64],
    y_samples: &[f64],
    threshold: f64,
    tol: Tolerance,
) -> BdeResult<BooleanSeries> {
    if t_samples.is_empty() || t_samples.len() != y_samples.len() {
        return Err(BdeError::InvalidSeriesShape {
            t_len: t_samples.len(),
            y_len: y_samples.len(),
        });
    }
    for i in 1..t_samples.len() {
        if !tol.lt(t_samples[i - 1], t_samples[i]) {
            return Err(BdeError::TimesNotSorted {
                index: i,
                prev: t_samples[i - 1],
                next: t_samples[i],
            });
        }
    }

    let side = |v: f64| -> Option<Side> {
        if tol.eq(v, threshold) {
            None
        } else if v > threshold {
            Some(Side::Above)
        } else {
            Some(Side::Below)
        }
    };

    let off: Vec<(usize, Side)> = y_samples
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| side(v).map(|s| (i, s)))
        .collect();

    let initial = matches!(off.first(), Some((_, Side::Above)));
    let mut times = vec![t_samples[0]];
    let mut states = vec![initial];

    for w in off.windows(2) {
        let (i, si) = w[0];
        let (j, sj) = w[1];
        if si == sj {
            continue;
        }
        let t_cross = t_samples[i]
            + (threshold - y_samples[i]) / (y_samples[j] - y_samples[i])
                * (t_samples[j] - t_samples[i]);
        let new_state = sj == Side::Above;

        let last = times[times.len() - 1];
        if tol.eq(t_cross, last) {
            if times.len() > 1 {
                // Opposite crossings at the same instant cancel out
                times.pop();
                states.pop();
            } else {
                // Crossing on the very first instant: the pre-crossing
                // interval has zero width
                states[0] = new_state;
            }
            continue;
        }
        times.push(t_cross);
        states.push(new_state);
    }

    let end = t_samples[t_samples.len() - 1];
    BooleanSeries::with_tolerance(times, states, end, tol)
}

/// Convert numeric samples into a Boolean series using a threshold placed
/// at `fraction` of the way between the signal's minimum and maximum.
pub fn relative_threshold(
    t_samples: &[f64],
    y_samples: &[f64],
    fraction: f64,
    tol: Tolerance,
) -> BdeResult<BooleanSeries> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(BdeError::OutOfRange {
            t: fraction,
            start: 0.0,
            end: 1.0,
        });
    }
    let min = y_samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = y_samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    absolute_threshold(t_samples, y_samples, min + fraction * (max - min), tol)
}
