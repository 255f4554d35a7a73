//! Throughput of the signal operators over synchronous upstreams
//!
//! Each benchmark drains a `stream::iter` through a single operator with `block_on`,
//! at 1k, 10k and 100k items.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use futures::StreamExt;
use futures::executor::block_on;
use futures::stream;
use rivulet_signal::prelude::*;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn results(size: usize) -> Vec<Result<Result<u64, u64>, NoError>> {
    (0..size as u64)
        .map(|i| if i % 3 == 0 { Ok(Err(i)) } else { Ok(Ok(i)) })
        .collect()
}

fn bench_lift_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("lift_error");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let values = (0..size as u64).map(Ok::<u64, ()>).collect::<Vec<_>>();
                let lifted = stream::iter(values).lift_error::<NoError>();
                black_box(block_on(lifted.count()))
            });
        });
    }
    group.finish();
}

fn bench_into_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("into_results");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let values = (0..size as u64).map(Ok::<u64, ()>).collect::<Vec<_>>();
                let wrapped = stream::iter(values).into_results();
                black_box(block_on(wrapped.count()))
            });
        });
    }
    group.finish();
}

fn bench_filter_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_values");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let values = stream::iter(results(size)).filter_values();
                black_box(block_on(values.count()))
            });
        });
    }
    group.finish();
}

fn bench_skip_not_nil(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_not_nil");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let values = (0..size as u64)
                    .map(|i| Ok::<_, NoError>((i % 2 == 0).then_some(i)))
                    .collect::<Vec<_>>();
                let absent = stream::iter(values).skip_not_nil();
                black_box(block_on(absent.count()))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_lift_error,
    bench_into_results,
    bench_filter_values,
    bench_skip_not_nil
);
criterion_main!(benches);
