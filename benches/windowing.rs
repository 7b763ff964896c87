//! Benchmarks for axis layout builds and window resolution.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stickygrid::{resolve_window, AxisLayout, AxisSpec, WindowResolver};

/// Benchmark the one-time cumulative geometry build at several axis sizes
fn bench_layout_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_build");
    for count in [1_000usize, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("fixed", count), &count, |b, &count| {
            let spec = AxisSpec::fixed(count, 24.0);
            b.iter(|| AxisLayout::build(black_box(&spec)));
        });
        group.bench_with_input(BenchmarkId::new("variable", count), &count, |b, &count| {
            let spec = AxisSpec::variable(count, |i| 16.0 + (i % 7) as f32);
            b.iter(|| AxisLayout::build(black_box(&spec)));
        });
    }
    group.finish();
}

/// Benchmark a single uncached window resolution on a million-item axis
fn bench_resolve_uncached(c: &mut Criterion) {
    let layout = AxisLayout::build(&AxisSpec::variable(1_000_000, |i| 16.0 + (i % 7) as f32));
    let total = layout.total_extent();

    c.bench_function("resolve_uncached_1m", |b| {
        let mut offset = 0.0f32;
        b.iter(|| {
            offset = (offset + 379.0) % total;
            resolve_window(black_box(&layout), black_box(offset), 720.0, 5)
        });
    });
}

/// Benchmark the cached resolver on the re-render-storm pattern: many
/// repeated queries at the same scroll offset
fn bench_resolve_cached(c: &mut Criterion) {
    let layout = AxisLayout::build(&AxisSpec::variable(1_000_000, |i| 16.0 + (i % 7) as f32));
    let mut resolver = WindowResolver::new(layout, 5);
    resolver.set_extent(720.0);

    c.bench_function("resolve_cached_repeat", |b| {
        b.iter(|| resolver.resolve(black_box(123_456.0)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_layout_build,
    bench_resolve_uncached,
    bench_resolve_cached
);
criterion_main!(benches);
