//! Benchmarks for wind statistics and dashboard frame rendering.
//!
//! Run with: cargo bench --package renderer --bench dashboard_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use renderer::{Dashboard, FontSet};
use test_utils::random_walk_series;
use wind_common::{DashboardConfig, HistoryMode};
use wind_stats::{CircularStat, SeriesWindow};

fn dashboard(config: DashboardConfig) -> Dashboard {
    Dashboard::with_fonts(config, FontSet::empty()).expect("valid benchmark config")
}

// =============================================================================
// STATISTICS BENCHMARKS
// =============================================================================

fn bench_circular_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_stats");

    for len in [10, 120, 1_000, 10_000] {
        let series = random_walk_series(len, 10, 42);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, s| {
            b.iter(|| black_box(CircularStat::from_directions(black_box(&s.direction))))
        });
    }

    group.finish();
}

fn bench_normalize_and_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_window");
    let config = DashboardConfig::default();

    for len in [120, 1_000, 10_000] {
        let series = random_walk_series(len, 10, 7);
        group.bench_with_input(BenchmarkId::new("normalize", len), &series, |b, s| {
            b.iter(|| {
                black_box(SeriesWindow::normalize(&s.speed, &s.direction, s.timespan, &config))
            })
        });

        let window = SeriesWindow::normalize(&series.speed, &series.direction, series.timespan, &config)
            .expect("valid series");
        group.bench_with_input(BenchmarkId::new("resample_48", len), &window, |b, w| {
            b.iter(|| black_box(w.resample(120.0, 48)))
        });
    }

    group.finish();
}

// =============================================================================
// FRAME BENCHMARKS
// =============================================================================

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let series = random_walk_series(120, 10, 3);

    let modes = [
        ("per_sample", HistoryMode::PerSample),
        ("binned_48", HistoryMode::Binned { bins: 48 }),
    ];

    for (name, mode) in modes {
        let mut dash = dashboard(DashboardConfig {
            history_mode: mode,
            ..Default::default()
        });
        group.bench_function(name, |b| {
            b.iter(|| black_box(dash.render(&series.speed, &series.direction, series.timespan)))
        });
    }

    group.finish();
}

fn bench_frame_png(c: &mut Criterion) {
    let series = random_walk_series(120, 10, 3);
    let mut dash = dashboard(DashboardConfig::default());
    dash.render(&series.speed, &series.direction, series.timespan)
        .expect("valid series");

    c.bench_function("frame_png", |b| b.iter(|| black_box(dash.frame_png())));
}

criterion_group!(
    benches,
    bench_circular_stats,
    bench_normalize_and_resample,
    bench_render_frame,
    bench_frame_png
);
criterion_main!(benches);
