use crate::core::path::Path;
use crate::core::range::VisibleRange;
use crate::core::series::{Interpolation, LineSeries};
use crate::core::types::{RenderPhase, Sample};

/// Builds the data-space stroke path for a series over the animated part of
/// its visible range.
///
/// Vertical reveal progress scales every emitted y value; horizontal progress
/// shortens the range through [`VisibleRange::animated_end`]. Fewer than two
/// samples in the animated window produce an empty path. The from-zero style
/// pins the starting point's y to zero in every mode.
#[must_use]
pub fn build_curve_path(series: &LineSeries, range: VisibleRange, phase: RenderPhase) -> Path {
    let end = range.animated_end(phase.x);
    if end.saturating_sub(range.min_index) < 2 {
        return Path::new();
    }

    match series.interpolation() {
        Interpolation::Linear => build_linear(series, range.min_index, end, phase.y),
        Interpolation::Quadratic => build_quadratic(series, range.min_index, end, phase.y),
        Interpolation::Cubic => build_cubic(series, range.min_index, end, phase.y),
    }
}

fn build_linear(series: &LineSeries, min: usize, end: usize, phase_y: f64) -> Path {
    let mut path = Path::new();
    let first = series.sample_at(min);
    path.move_to(first.x(), start_y(series, first.value, phase_y));

    for position in (min + 1)..end {
        let sample = series.sample_at(position);
        path.line_to(sample.x(), sample.value * phase_y);
    }
    path
}

/// Midpoint smoothing: each sample pair contributes two quadratic segments
/// meeting at the pair midpoint, with control points halfway toward it.
fn build_quadratic(series: &LineSeries, min: usize, end: usize, phase_y: f64) -> Path {
    let mut path = Path::new();
    let first = series.sample_at(min);
    path.move_to(first.x(), start_y(series, first.value, phase_y));

    for position in (min + 1)..end {
        let prev = series.sample_at(position - 1);
        let cur = series.sample_at(position);

        let mid_x = (prev.x() + cur.x()) / 2.0;
        let mid_y = (prev.value + cur.value) / 2.0;

        path.quad_to(
            (prev.x() + mid_x) / 2.0,
            prev.value * phase_y,
            mid_x,
            mid_y * phase_y,
        );
        path.quad_to(
            (mid_x + cur.x()) / 2.0,
            cur.value * phase_y,
            cur.x(),
            cur.value * phase_y,
        );
    }
    path
}

/// Catmull-Rom style smoothing: one cubic segment per sample pair, tangents
/// scaled by the series intensity, neighbor positions clamped to the series
/// bounds so edge segments reuse their boundary sample.
fn build_cubic(series: &LineSeries, min: usize, end: usize, phase_y: f64) -> Path {
    let intensity = series.cubic_intensity();

    let mut path = Path::new();
    let first = series.sample_at(min);
    path.move_to(first.x(), start_y(series, first.value, phase_y));

    for position in (min + 1)..end {
        let prev_prev = clamped_sample(series, position as isize - 2);
        let prev = series.sample_at(position - 1);
        let cur = series.sample_at(position);
        let next = clamped_sample(series, position as isize + 1);

        let prev_dx = (cur.x() - prev_prev.x()) * intensity;
        let prev_dy = (cur.value - prev_prev.value) * intensity;
        let cur_dx = (next.x() - prev.x()) * intensity;
        let cur_dy = (next.value - prev.value) * intensity;

        path.cubic_to(
            prev.x() + prev_dx,
            (prev.value + prev_dy) * phase_y,
            cur.x() - cur_dx,
            (cur.value - cur_dy) * phase_y,
            cur.x(),
            cur.value * phase_y,
        );
    }
    path
}

fn start_y(series: &LineSeries, value: f64, phase_y: f64) -> f64 {
    if series.is_from_zero() {
        0.0
    } else {
        value * phase_y
    }
}

fn clamped_sample(series: &LineSeries, position: isize) -> Sample {
    let last = series.len() as isize - 1;
    series.sample_at(position.clamp(0, last) as usize)
}

#[cfg(test)]
mod tests {
    use super::build_curve_path;
    use crate::core::path::PathCommand;
    use crate::core::range::resolve_visible_range;
    use crate::core::series::{DrawStyle, DrawStyleFlag, Interpolation, LineSeries};
    use crate::core::types::{RenderPhase, Sample};

    fn series(values: &[(usize, f64)], interpolation: Interpolation) -> LineSeries {
        LineSeries::new(
            "test",
            values
                .iter()
                .map(|&(index, value)| Sample::new(index, value))
                .collect(),
        )
        .with_interpolation(interpolation)
    }

    #[test]
    fn linear_path_emits_one_segment_per_pair() {
        let series = series(
            &[(0, 1.0), (1, 3.0), (2, 2.0), (3, 5.0)],
            Interpolation::Linear,
        );
        let range = resolve_visible_range(&series, 0.0, 3.0);

        let path = build_curve_path(&series, range, RenderPhase::FULL);

        assert_eq!(path.line_segment_count(), 3);
        let vertices: Vec<(f64, f64)> = path
            .commands()
            .iter()
            .filter_map(|command| match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some((x, y)),
                _ => None,
            })
            .collect();
        assert_eq!(
            vertices,
            vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 5.0)]
        );
    }

    #[test]
    fn quadratic_path_emits_two_segments_per_pair() {
        let series = series(&[(0, 1.0), (1, 3.0), (2, 2.0)], Interpolation::Quadratic);
        let range = resolve_visible_range(&series, 0.0, 2.0);

        let path = build_curve_path(&series, range, RenderPhase::FULL);

        assert_eq!(path.quad_segment_count(), 4);
        assert_eq!(path.first_point(), Some((0.0, 1.0)));
        assert_eq!(path.last_point(), Some((2.0, 2.0)));
    }

    #[test]
    fn cubic_path_emits_one_segment_per_pair_and_interpolates_samples() {
        let series = series(
            &[(0, 1.0), (1, 3.0), (2, 2.0), (3, 5.0)],
            Interpolation::Cubic,
        );
        let range = resolve_visible_range(&series, 0.0, 3.0);

        let path = build_curve_path(&series, range, RenderPhase::FULL);

        assert_eq!(path.cubic_segment_count(), 3);
        assert_eq!(path.first_point(), Some((0.0, 1.0)));
        assert_eq!(path.last_point(), Some((3.0, 5.0)));

        // Every cubic segment must end exactly on its sample.
        let endpoints: Vec<(f64, f64)> = path
            .commands()
            .iter()
            .filter_map(|command| match *command {
                PathCommand::CubicTo { x, y, .. } => Some((x, y)),
                _ => None,
            })
            .collect();
        assert_eq!(endpoints, vec![(1.0, 3.0), (2.0, 2.0), (3.0, 5.0)]);
    }

    #[test]
    fn vertical_phase_scales_every_y() {
        let series = series(&[(0, 2.0), (1, 4.0)], Interpolation::Linear);
        let range = resolve_visible_range(&series, 0.0, 1.0);
        let phase = RenderPhase::new(1.0, 0.5).unwrap();

        let path = build_curve_path(&series, range, phase);

        assert_eq!(path.first_point(), Some((0.0, 1.0)));
        assert_eq!(path.last_point(), Some((1.0, 2.0)));
    }

    #[test]
    fn from_zero_pins_the_start_y_in_every_mode() {
        for interpolation in [
            Interpolation::Linear,
            Interpolation::Quadratic,
            Interpolation::Cubic,
        ] {
            let series = series(&[(2, 3.0), (3, 4.0), (4, 2.0)], interpolation)
                .with_draw_style(DrawStyle::from_flag(DrawStyleFlag::FromZero));
            let range = resolve_visible_range(&series, 2.0, 4.0);

            let path = build_curve_path(&series, range, RenderPhase::FULL);

            // x stays on the first sample, only y is pinned.
            assert_eq!(path.first_point(), Some((2.0, 0.0)));
        }
    }

    #[test]
    fn short_windows_emit_nothing() {
        let single = series(&[(0, 1.0)], Interpolation::Cubic);
        let range = resolve_visible_range(&single, 0.0, 1.0);
        assert!(build_curve_path(&single, range, RenderPhase::FULL).is_empty());

        let pair = series(&[(0, 1.0), (1, 2.0)], Interpolation::Linear);
        let range = resolve_visible_range(&pair, 0.0, 1.0);
        let phase = RenderPhase::new(0.0, 1.0).unwrap();
        assert!(build_curve_path(&pair, range, phase).is_empty());
    }

    #[test]
    fn horizontal_phase_shortens_the_emitted_range() {
        let series = series(
            &[(0, 1.0), (1, 2.0), (2, 3.0), (3, 4.0)],
            Interpolation::Linear,
        );
        let range = resolve_visible_range(&series, 0.0, 3.0);
        let phase = RenderPhase::new(0.5, 1.0).unwrap();

        let path = build_curve_path(&series, range, phase);

        // ceil(4 * 0.5) = 2 samples drawn, one segment between them.
        assert_eq!(path.line_segment_count(), 1);
        assert_eq!(path.last_point(), Some((1.0, 2.0)));
    }
}
