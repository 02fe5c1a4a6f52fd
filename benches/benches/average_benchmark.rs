//! Averaging benchmarks.
//!
//! Run with: `cargo bench --package candela-bench --bench average_benchmark`

use candela_bench::{MINUTE_MILLIS, synthetic_candles, synthetic_candles_ascending};
use candela_lib::{Divisor, WindowAverager, sliding_average};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const NEWEST: i64 = 1_705_321_800_000;
const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

fn window_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_average");

    for size in SIZES {
        let candles = synthetic_candles(size, NEWEST);
        group.throughput(Throughput::Elements(size as u64));

        for (name, divisor) in [("nominal", Divisor::Nominal), ("actual", Divisor::Actual)] {
            let averager = WindowAverager::default().with_divisor(divisor);
            group.bench_with_input(BenchmarkId::new(name, size), &candles, |b, candles| {
                b.iter(|| averager.average(black_box(candles)));
            });
        }
    }

    group.finish();
}

fn sliding_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_average");

    for size in [100, 10_000] {
        let candles = synthetic_candles_ascending(size, NEWEST);
        group.throughput(Throughput::Elements(size as u64));

        for minutes in [5, 60] {
            let window = minutes * MINUTE_MILLIS;
            group.bench_with_input(
                BenchmarkId::new(format!("{minutes}m"), size),
                &candles,
                |b, candles| {
                    b.iter(|| sliding_average(black_box(candles), window));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, window_benchmark, sliding_benchmark);
criterion_main!(benches);
