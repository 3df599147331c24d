//! Benchmarks for solver and series hot paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bde_core::threshold::absolute_threshold;
use bde_core::{BooleanSeries, Tolerance};
use bde_solver::BdeSolver;
use bde_test::{random_samples, random_series, square_wave};

fn bench_two_variable_solve(c: &mut Criterion) {
    let f = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![z[0][1], !z[1][0]];

    c.bench_function("two_variable_solve_200", |b| {
        b.iter(|| {
            let h1 = BooleanSeries::new(vec![0.0, 1.5], vec![true, false], 1.8).unwrap();
            let h2 = BooleanSeries::new(vec![0.0, 0.5], vec![true, false], 1.8).unwrap();
            let solver = BdeSolver::new(f, vec![1.0, 0.5], vec![h1, h2]).unwrap();
            black_box(solver.solve(black_box(200.0)).unwrap())
        })
    });
}

fn bench_forced_solve(c: &mut Criterion) {
    let f = |_: &[Vec<bool>], zf: Option<&[Vec<bool>]>| vec![zf.unwrap()[0][0]];

    c.bench_function("forced_solve_100", |b| {
        b.iter(|| {
            let history = BooleanSeries::new(vec![0.0], vec![true], 0.5).unwrap();
            let forcing = square_wave(0.0, 100.0, 0.5, false);
            let solver =
                BdeSolver::with_forcing(f, vec![0.3], vec![history], vec![forcing]).unwrap();
            black_box(solver.solve(black_box(100.0)).unwrap())
        })
    });
}

fn bench_absolute_threshold(c: &mut Criterion) {
    let (t, y) = random_samples(1, 10_000, 10.0);
    let tol = Tolerance::default();

    c.bench_function("absolute_threshold_10k", |b| {
        b.iter(|| black_box(absolute_threshold(&t, &y, black_box(5.0), tol).unwrap()))
    });
}

fn bench_hamming_distance(c: &mut Criterion) {
    let a = random_series(1, 1_000, 0.0, 100.0);
    let b2 = random_series(2, 1_000, 0.0, 100.0);
    let tol = Tolerance::default();

    c.bench_function("hamming_distance_1k", |b| {
        b.iter(|| black_box(a.hamming_distance(&b2, tol).unwrap()))
    });
}

fn bench_merge(c: &mut Criterion) {
    let list: Vec<BooleanSeries> = (0..8).map(|s| random_series(s, 200, 0.0, 50.0)).collect();
    let tol = Tolerance::default();

    c.bench_function("merge_8x200", |b| {
        b.iter(|| black_box(BooleanSeries::merge(&list, tol).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_two_variable_solve,
    bench_forced_solve,
    bench_absolute_threshold,
    bench_hamming_distance,
    bench_merge,
);
criterion_main!(benches);
