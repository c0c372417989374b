//! Criterion benchmarks for pipelog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pipelog::prelude::*;

fn discarding_logger(level: Level, serialize: bool) -> Logger {
    Logger::builder("bench")
        .level(level)
        .style(Style::new(false))
        .sinks(
            WriterSink::new(std::io::sink()),
            WriterSink::new(std::io::sink()),
        )
        .serialize(serialize)
        .build()
}

fn bench_admitted_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("admitted_emission");
    group.throughput(Throughput::Elements(1));

    let logger = discarding_logger(Level::Trace, false);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("error", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.finish();
}

fn bench_filtered_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_emission");
    group.throughput(Throughput::Elements(1));

    let logger = discarding_logger(Level::Off, false);

    group.bench_function("dropped_info", |b| {
        b.iter(|| logger.info(black_box("Dropped message")));
    });

    group.finish();
}

fn bench_serialized_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialized_emission");
    group.throughput(Throughput::Elements(1));

    let unlocked = discarding_logger(Level::Trace, false);
    let locked = discarding_logger(Level::Trace, true);

    group.bench_function("unserialized", |b| {
        b.iter(|| unlocked.info(black_box("Benchmark message")));
    });

    group.bench_function("serialized", |b| {
        b.iter(|| locked.info(black_box("Benchmark message")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_admitted_emission,
    bench_filtered_emission,
    bench_serialized_emission
);
criterion_main!(benches);
