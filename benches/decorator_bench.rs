//! Benchmark for the synchronous decorators.
//!
//! Measures the overhead of a cache hit against calling the function
//! directly.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::decorator::{memoize, once};

fn checksum(length: usize) -> u64 {
    (0..length as u64).fold(0, |hash, value| hash.wrapping_mul(31).wrapping_add(value))
}

// =============================================================================
// Memoize Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for length in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("direct", length), &length, |bencher, &length| {
            bencher.iter(|| black_box(checksum(black_box(length))));
        });

        let cached = memoize(checksum);
        cached.call(length);
        group.bench_with_input(BenchmarkId::new("cache_hit", length), &length, |bencher, &length| {
            bencher.iter(|| black_box(cached.call(black_box(length))));
        });
    }

    group.bench_function("cache_miss", |bencher| {
        bencher.iter(|| {
            let cached = memoize(checksum);
            black_box(cached.call(black_box(64)))
        });
    });

    group.finish();
}

// =============================================================================
// Once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    let initialized = once(checksum);
    initialized.call(100);
    group.bench_function("after_first_call", |bencher| {
        bencher.iter(|| black_box(initialized.call(black_box(100))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_memoize, benchmark_once);
criterion_main!(benches);
