use crate::core::bounds::ViewBounds;
use crate::core::range::VisibleRange;
use crate::core::series::LineSeries;
use crate::core::types::RenderPhase;
use crate::render::{Color, RoundedRect};

/// Inner circle drawn on top of a marker when enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleHole {
    pub radius: f64,
    pub color: Color,
}

/// One placed sample marker, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub hole: Option<CircleHole>,
    pub sample_position: usize,
}

/// One placed value label, in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub text_size: f64,
    pub color: Color,
    pub background: Option<RoundedRect>,
    pub sample_position: usize,
}

/// Places circle markers for the animated part of the visible range.
///
/// `pixels` holds transformed (x, y) pairs for the positions starting at
/// `range.min_index`. Points right of the viewport stop the walk, points left
/// of it or vertically outside are skipped. With the first/last-only style,
/// interior markers appear only when their x index is highlighted. The
/// from-zero style pins the first marker to `zero_pixel_y`.
#[must_use]
pub fn layout_circle_markers(
    series: &LineSeries,
    range: VisibleRange,
    phase: RenderPhase,
    pixels: &[f64],
    zero_pixel_y: f64,
    bounds: &ViewBounds,
    density: f64,
    highlighted: Option<&[usize]>,
) -> Vec<CircleMarker> {
    if !series.circles_enabled() || series.is_empty() {
        return Vec::new();
    }

    let end = range.animated_end(phase.x);
    let radius = series.circle_radius() - 0.5 * density;
    let hole_radius = series.circle_radius() / 2.0;
    let hole_color = series.circle_hole_color();

    let mut markers = Vec::new();
    for point in visible_points(range, end, pixels, bounds) {
        let sample = series.sample_at(point.position);
        let is_endpoint = point.position == range.min_index || point.position + 1 == end;
        if series.is_first_end()
            && !is_endpoint
            && !is_highlighted(highlighted, sample.index)
        {
            continue;
        }

        let color = series.circle_color_at(point.position);
        let y = if series.is_from_zero() && point.position == range.min_index {
            zero_pixel_y
        } else {
            point.y
        };
        let hole = (series.circle_hole_enabled() && hole_color != color).then_some(CircleHole {
            radius: hole_radius,
            color: hole_color,
        });

        markers.push(CircleMarker {
            x: point.x,
            y,
            radius,
            color,
            hole,
            sample_position: point.position,
        });
    }
    markers
}

/// Places value labels for the animated part of the visible range.
///
/// Shares the culling walk of [`layout_circle_markers`]. In the highlight
/// pass (`highlighted` is `Some`) only highlighted x indices produce labels;
/// first/last-end labels then move onto a band below the viewport top edge.
/// Outside the highlight pass the first/last-end style labels only the two
/// window endpoints, offset sideways with a rounded background, and the
/// from-zero style suppresses them entirely.
#[must_use]
pub fn layout_value_labels(
    series: &LineSeries,
    range: VisibleRange,
    phase: RenderPhase,
    pixels: &[f64],
    bounds: &ViewBounds,
    density: f64,
    measure: impl Fn(&str) -> f64,
    highlighted: Option<&[usize]>,
) -> Vec<ValueLabel> {
    if !series.values_enabled() || series.is_empty() {
        return Vec::new();
    }

    let end = range.animated_end(phase.x);
    let text_size = series.value_text_size();

    // Labels sit clear of the markers; without markers half the clearance
    // is enough.
    let mut value_offset = series.circle_radius() * 1.75;
    if !series.circles_enabled() {
        value_offset /= 2.0;
    }

    let mut labels = Vec::new();
    for point in visible_points(range, end, pixels, bounds) {
        let sample = series.sample_at(point.position);
        let is_endpoint = point.position == range.min_index || point.position + 1 == end;

        if highlighted.is_some() {
            if !is_highlighted(highlighted, sample.index) {
                continue;
            }
        } else if series.is_first_end() && !is_endpoint {
            continue;
        }

        let text = series.format_value(sample.value);
        let color = series.value_text_color_at(point.position);

        if !series.is_first_end() {
            labels.push(ValueLabel {
                text,
                x: point.x,
                y: point.y - value_offset,
                text_size,
                color,
                background: None,
                sample_position: point.position,
            });
            continue;
        }

        let half_width = measure(&text) / 2.0;
        let side = if point.position == range.min_index {
            1.0
        } else {
            -1.0
        };
        let offset_x = point.x + side * (value_offset + half_width + 3.0 * density);
        let offset_y = point.y + text_size / 3.0;

        if highlighted.is_some() {
            let anchor_x = if is_endpoint { offset_x } else { point.x };
            let band_y = bounds.top() + 38.0 * density;
            labels.push(ValueLabel {
                text,
                x: anchor_x,
                y: band_y,
                text_size,
                color,
                background: Some(label_background(
                    anchor_x, band_y, half_width, text_size, density,
                )),
                sample_position: point.position,
            });
        } else if !series.is_from_zero() {
            labels.push(ValueLabel {
                text,
                x: offset_x,
                y: offset_y,
                text_size,
                color,
                background: Some(label_background(
                    offset_x, offset_y, half_width, text_size, density,
                )),
                sample_position: point.position,
            });
        }
    }
    labels
}

struct VisiblePoint {
    position: usize,
    x: f64,
    y: f64,
}

/// Walks transformed points, stopping at the right viewport edge and
/// dropping points left of it or vertically outside.
fn visible_points(
    range: VisibleRange,
    end: usize,
    pixels: &[f64],
    bounds: &ViewBounds,
) -> Vec<VisiblePoint> {
    let count = end.saturating_sub(range.min_index);

    let mut points = Vec::new();
    for (offset, pair) in pixels.chunks_exact(2).take(count).enumerate() {
        let (x, y) = (pair[0], pair[1]);
        if !bounds.is_in_bounds_right(x) {
            break;
        }
        if !bounds.is_in_bounds_left(x) || !bounds.is_in_bounds_y(y) {
            continue;
        }
        points.push(VisiblePoint {
            position: range.min_index + offset,
            x,
            y,
        });
    }
    points
}

fn is_highlighted(highlighted: Option<&[usize]>, x_index: usize) -> bool {
    highlighted.is_some_and(|indices| indices.contains(&x_index))
}

fn label_background(
    x: f64,
    y: f64,
    half_width: f64,
    text_size: f64,
    density: f64,
) -> RoundedRect {
    RoundedRect {
        left: x - half_width - 2.0 * density,
        top: y - text_size,
        right: x + half_width + 2.0 * density,
        bottom: y + 3.0 * density,
        corner_radius: 2.0 * density,
    }
}
