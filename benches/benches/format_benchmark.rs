//! Candle file benchmarks.
//!
//! Run with: `cargo bench --package candela-bench --bench format_benchmark`

use candela_bench::synthetic_candles;
use candela_lib::{Formatter, JsonFormatter, read_candles_file, write_candles_file};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;

const NEWEST: i64 = 1_705_321_800_000;

fn encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_encode");

    for size in [100, 10_000] {
        let candles = synthetic_candles(size, NEWEST);
        group.throughput(Throughput::Elements(size as u64));

        for (name, formatter) in [("array", JsonFormatter::new()), ("ndjson", JsonFormatter::ndjson())] {
            group.bench_with_input(BenchmarkId::new(name, size), &candles, |b, candles| {
                b.iter(|| {
                    let mut buffer = Vec::with_capacity(candles.len() * 128);
                    formatter.write_candles(black_box(candles), &mut buffer).unwrap();
                    buffer
                });
            });
        }
    }

    group.finish();
}

fn file_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("candle_file");
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    let candles = synthetic_candles(10_000, NEWEST);
    group.throughput(Throughput::Elements(candles.len() as u64));

    group.bench_function("write", |b| {
        b.iter(|| write_candles_file(&path, black_box(&candles)).unwrap());
    });

    write_candles_file(&path, &candles).unwrap();
    group.bench_function("read", |b| {
        b.iter(|| read_candles_file(&path).unwrap());
    });

    group.finish();
}

criterion_group!(benches, encode_benchmark, file_benchmark);
criterion_main!(benches);
