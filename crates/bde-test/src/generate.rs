//! Deterministic series generators for tests and benchmarks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bde_core::BooleanSeries;

/// Square wave on `[start, end]`: a switch every `period` starting from
/// `initial` at `start`. The wave's last interval runs to `end` without a
/// closing switch.
pub fn square_wave(start: f64, end: f64, period: f64, initial: bool) -> BooleanSeries {
    let mut times = Vec::new();
    let mut k = 0u32;
    loop {
        let t = start + f64::from(k) * period;
        if t >= end {
            break;
        }
        times.push(t);
        k += 1;
    }
    BooleanSeries::new(times, vec![initial], end)
        .expect("square wave times are strictly increasing")
}

/// Random Boolean series with up to `n_switches` interior switches,
/// deterministic in the seed. The first switch sits at `start` and no
/// switch lands on `end`.
pub fn random_series(seed: u64, n_switches: usize, start: f64, end: f64) -> BooleanSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = end - start;
    let mut sampled: Vec<f64> = (0..n_switches)
        .map(|_| start + rng.gen::<f64>() * span)
        .collect();
    sampled.sort_by(f64::total_cmp);

    // Clear separation so construction never trips the comparator
    let min_gap = span * 1e-6;
    let mut times = vec![start];
    for t in sampled {
        if t - times[times.len() - 1] > min_gap && end - t > min_gap {
            times.push(t);
        }
    }

    let initial = rng.gen::<bool>();
    BooleanSeries::new(times, vec![initial], end)
        .expect("generated times are strictly increasing")
}

/// Random numeric samples on the unit-spaced grid `0..n`, deterministic in
/// the seed. Values are uniform on `[0, amplitude)`.
pub fn random_samples(seed: u64, n: usize, amplitude: f64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let t = (0..n).map(|i| i as f64).collect();
    let y = (0..n).map(|_| rng.gen::<f64>() * amplitude).collect();
    (t, y)
}
