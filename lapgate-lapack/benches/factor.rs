use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lapgate_lapack::{getrf, getrs, potrf, potrs, Transpose, Uplo};

/// Column-major diagonally dominant test matrix.
fn test_matrix(n: usize) -> Vec<f64> {
    let mut a = vec![0.0f64; n * n];
    for j in 0..n {
        for i in 0..n {
            a[j * n + i] = if i == j {
                n as f64 + 1.0
            } else {
                1.0 / (1.0 + (i as f64 - j as f64).abs())
            };
        }
    }
    a
}

fn bench_lu_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("getrf_getrs");
    for &n in &[16usize, 64, 128] {
        let a0 = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bch, &n| {
            bch.iter(|| {
                let mut a = a0.clone();
                let mut pivots = vec![0i32; n];
                getrf::<f64>(n as i32, n as i32, &mut a, n as i32, &mut pivots).unwrap();
                let mut b = vec![1.0f64; n];
                getrs::<f64>(Transpose::None, n as i32, 1, &a, &pivots, &mut b).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_cholesky_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("potrf_potrs");
    for &n in &[16usize, 64, 128] {
        let a0 = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bch, &n| {
            bch.iter(|| {
                let mut a = a0.clone();
                potrf::<f64>(Uplo::Lower, n as i32, &mut a, n as i32).unwrap();
                let mut b = vec![1.0f64; n];
                potrs::<f64>(Uplo::Lower, n as i32, 1, &a, &mut b).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lu_solve, bench_cholesky_solve);
criterion_main!(benches);
