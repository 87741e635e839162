use std::hint::black_box;

use finite_difference::{derivative, partial_derivative};
use tango_bench::{benchmark_fn, tango_benchmarks, tango_main, IntoBenchmarks};

pub fn finite_difference_benchmarks() -> impl IntoBenchmarks {
    let len = 20000;

    [
        benchmark_fn("derivative sin", |b| {
            let d = derivative(f64::sin, 0.0001);
            b.iter(move || d(black_box(1.0)))
        }),
        benchmark_fn(format!("partial derivative sphere {len}"), move |b| {
            let d = partial_derivative(sphere, 0.0001);
            let point = vec![1.0; len];
            b.iter(move || d(black_box(point.as_slice()), black_box(len / 2)))
        }),
    ]
}

fn sphere(point: &[f64]) -> f64 {
    point.iter().map(|x| x.powi(2)).sum()
}

tango_benchmarks!(finite_difference_benchmarks());
tango_main!();
