use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quickfig::{
    fit::{FitResult, Polynomial},
    FitOptions,
};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::hint::black_box;

/// `y = 5.3x^2 + 3x + 1` sampled at `x = 1..=n` with 10% relative gaussian noise
fn gen_sample_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let truth = Polynomial::new(vec![5.3, 3.0, 1.0]);

    (1..=n)
        .map(|i| {
            let x = i as f64;
            let y = truth.y(x);
            let noise = Normal::new(0.0, (y * 0.1).abs().max(1e-9)).expect("valid std dev");
            (x, y + noise.sample(&mut rng))
        })
        .unzip()
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // How the solver scales with data size
    let mut group = c.benchmark_group("fit_vs_n");
    for n in [100, 1_000, 10_000, 100_000] {
        let (x, y) = gen_sample_data(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(x, y), |b, (x, y)| {
            b.iter(|| Polynomial::fit(black_box(x), black_box(y), 2).expect("Failed to fit data"));
        });
    }
    group.finish();

    //
    // Same data, scaling with order
    let (x, y) = gen_sample_data(1_000);
    let mut group = c.benchmark_group("fit_vs_order");
    for order in [1, 2, 3, 5, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| Polynomial::fit(black_box(&x), black_box(&y), order).expect("Failed to fit data"));
        });
    }
    group.finish();

    //
    // Full figure-facing fit: solve, sample the curve, format the equation
    c.bench_function("fit_result_density_1000", |b| {
        let options = FitOptions::polynomial(2).with_density(1_000);
        b.iter(|| FitResult::compute(black_box(&x), black_box(&y), &options).expect("Failed to fit data"));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
