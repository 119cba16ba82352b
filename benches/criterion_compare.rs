// Benchmark: Comparing Join and Sum Implementations
// Contrasts the crate's iterator-based joins and sums with naive loops.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use array_text_utils::arrays::make_string_from_array;
use array_text_utils::numbers::get_absolute_sum;

fn join_push_loop(data: &[i32]) -> String {
    let mut joined = String::new();
    for value in data {
        joined.push_str(&value.to_string());
    }
    joined
}

fn abs_sum_loop(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &value in data {
        sum += value.abs();
    }
    sum
}

fn benchmark_join_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_implementations");

    let data: Vec<i32> = (0..1000).collect();

    group.bench_with_input(BenchmarkId::new("push_loop", data.len()), &data, |b, data| {
        b.iter(|| join_push_loop(black_box(data)))
    });

    group.bench_with_input(BenchmarkId::new("itertools_join", data.len()), &data, |b, data| {
        b.iter(|| make_string_from_array(black_box(data)))
    });

    group.finish();
}

fn benchmark_sum_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolute_sum_implementations");

    let data: Vec<f64> = (0..1000).map(|i| f64::from(i - 500)).collect();

    group.bench_with_input(BenchmarkId::new("loop", data.len()), &data, |b, data| {
        b.iter(|| abs_sum_loop(black_box(data)))
    });

    group.bench_with_input(BenchmarkId::new("iterator", data.len()), &data, |b, data| {
        b.iter(|| get_absolute_sum(black_box(data)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_join_implementations,
    benchmark_sum_implementations
);
criterion_main!(benches);
