//! Criterion benchmarks for delegating_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use delegating_logger::prelude::*;
use std::sync::Arc;

// ============================================================================
// Derivation Benchmarks
// ============================================================================

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_name_pending", |b| {
        b.iter_batched(
            || new_delegating_logger(Arc::new(NullSink)),
            |(logger, _fulfiller)| black_box(logger.with_name(black_box("child"))),
            criterion::BatchSize::SmallInput,
        );
    });

    let (fulfilled, fulfiller) = new_delegating_logger(Arc::new(NullSink));
    fulfiller.fulfill(Arc::new(NullSink));

    group.bench_function("with_name_fulfilled", |b| {
        b.iter(|| black_box(fulfilled.with_name(black_box("child"))));
    });

    group.bench_function("with_values_fulfilled", |b| {
        let pairs = kvs!["request_id" => "abc", "attempt" => 1];
        b.iter(|| black_box(fulfilled.with_values(black_box(&pairs))));
    });

    group.finish();
}

// ============================================================================
// Fulfillment Benchmarks
// ============================================================================

fn bench_fulfillment(c: &mut Criterion) {
    let mut group = c.benchmark_group("fulfillment");

    for width in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(width as u64));
        group.bench_function(format!("tree_{}", width), |b| {
            b.iter_batched(
                || {
                    let (root, fulfiller) = new_delegating_logger(Arc::new(NullSink));
                    let children: Vec<Logger> = (0..width)
                        .map(|i| root.with_name("worker").with_values(&kvs!["i" => i as i64]))
                        .collect();
                    (root, fulfiller, children)
                },
                |(_root, fulfiller, children)| {
                    fulfiller.fulfill(Arc::new(NullSink));
                    black_box(children)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let (pending, _keep) = new_delegating_logger(Arc::new(NullSink));
    group.bench_function("info_pending", |b| {
        b.iter(|| pending.info(black_box("Info message")));
    });

    let (delegated, fulfiller) = new_delegating_logger(Arc::new(NullSink));
    fulfiller.fulfill(Arc::new(RecordingSink::builder().max_verbosity(0).build()));
    group.bench_function("enabled_check_delegated", |b| {
        b.iter(|| black_box(delegated.v(1).enabled()));
    });

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_fulfillment, bench_logging);
criterion_main!(benches);
