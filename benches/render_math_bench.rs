use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::core::{
    AxisRange, Interpolation, LineSeries, RenderPhase, Sample, Transformer, ViewBounds,
    build_curve_path, close_fill_path, resolve_visible_range,
};
use linechart_rs::render::LineBuffer;
use std::hint::black_box;

fn wave_series(count: usize, interpolation: Interpolation) -> LineSeries {
    LineSeries::new(
        "bench",
        (0..count)
            .map(|i| {
                let t = i as f64;
                Sample::new(i, 100.0 + (t * 0.05).sin() * 40.0 + t * 0.01)
            })
            .collect(),
    )
    .with_interpolation(interpolation)
}

fn bench_visible_range_resolution_100k(c: &mut Criterion) {
    let series = wave_series(100_000, Interpolation::Linear);

    c.bench_function("visible_range_resolution_100k", |b| {
        b.iter(|| {
            let _ = resolve_visible_range(black_box(&series), black_box(25_000.5), black_box(75_000.5));
        })
    });
}

fn bench_line_buffer_feed_and_transform_10k(c: &mut Criterion) {
    let series = wave_series(10_000, Interpolation::Linear);
    let range = resolve_visible_range(&series, 0.0, 9_999.0);
    let transformer = Transformer::new(
        0.0,
        9_999.0,
        AxisRange::new(0.0, 250.0).expect("valid axis range"),
        ViewBounds::of_viewport(1920, 1080).expect("valid bounds"),
    )
    .expect("valid transformer");
    let mut buffer = LineBuffer::new();

    c.bench_function("line_buffer_feed_and_transform_10k", |b| {
        b.iter(|| {
            buffer.feed(black_box(&series), black_box(range), RenderPhase::FULL);
            transformer.point_values_to_pixel(buffer.coordinates_mut());
        })
    });
}

fn bench_curve_path_build_10k(c: &mut Criterion) {
    for (name, interpolation) in [
        ("linear_path_build_10k", Interpolation::Linear),
        ("quadratic_path_build_10k", Interpolation::Quadratic),
        ("cubic_path_build_10k", Interpolation::Cubic),
    ] {
        let series = wave_series(10_000, interpolation);
        let range = resolve_visible_range(&series, 0.0, 9_999.0);

        c.bench_function(name, |b| {
            b.iter(|| {
                let _ = build_curve_path(black_box(&series), black_box(range), RenderPhase::FULL);
            })
        });
    }
}

fn bench_fill_closure_10k(c: &mut Criterion) {
    let series = wave_series(10_000, Interpolation::Linear);
    let range = resolve_visible_range(&series, 0.0, 9_999.0);
    let stroke = build_curve_path(&series, range, RenderPhase::FULL);

    c.bench_function("fill_closure_10k", |b| {
        b.iter(|| {
            let _ = close_fill_path(black_box(&stroke), black_box(0.0));
        })
    });
}

criterion_group!(
    benches,
    bench_visible_range_resolution_100k,
    bench_line_buffer_feed_and_transform_10k,
    bench_curve_path_build_10k,
    bench_fill_closure_10k
);
criterion_main!(benches);
