//! Factorization and solve throughput, with nalgebra as the yardstick.
//!
//! Run with `cargo bench`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doolittle::{LuDecomposition, Matrix};

fn well_conditioned(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        let base = ((i * 7 + j * 13) % 17) as f64 - 8.0;
        if i == j {
            base + 50.0
        } else {
            base
        }
    })
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");
    for n in [16, 50, 200] {
        let a = well_conditioned(n);
        let na = nalgebra::DMatrix::from_fn(n, n, |i, j| a[(i, j)]);

        group.bench_function(format!("doolittle {n}x{n}"), |b| {
            b.iter(|| LuDecomposition::new(black_box(&a)).unwrap())
        });
        group.bench_function(format!("nalgebra {n}x{n}"), |b| {
            b.iter(|| black_box(&na).clone().lu())
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("factor+solve");
    for n in [50, 200] {
        let a = well_conditioned(n);
        let rhs: Vec<f64> = (0..n).map(|i| (i % 7) as f64).collect();
        let na = nalgebra::DMatrix::from_fn(n, n, |i, j| a[(i, j)]);
        let nb = nalgebra::DVector::from_iterator(n, rhs.iter().copied());

        group.bench_function(format!("doolittle {n}x{n}"), |b| {
            b.iter(|| doolittle::solve(black_box(&a), black_box(&rhs)).unwrap())
        });
        group.bench_function(format!("nalgebra {n}x{n}"), |b| {
            b.iter(|| black_box(&na).clone().lu().solve(black_box(&nb)).unwrap())
        });
    }
    group.finish();
}

fn bench_repeated_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve-only");
    for n in [50, 200] {
        let a = well_conditioned(n);
        let lu = LuDecomposition::new(&a).unwrap();
        let rhs: Vec<f64> = (0..n).map(|i| (i % 7) as f64).collect();

        group.bench_function(format!("doolittle {n}x{n}"), |b| {
            b.iter(|| lu.solve(black_box(&rhs)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factorize, bench_solve, bench_repeated_solve);
criterion_main!(benches);
