use crate::core::path::Path;
use crate::core::series::LineSeries;
use crate::core::types::AxisRange;

/// Closes a copy of the stroke path against a value-space baseline so it can
/// be filled.
///
/// The copy gains two segments, down from the stroke's last point to the
/// baseline and back under the stroke to its first point's x, then closes.
/// An empty stroke yields an empty fill.
#[must_use]
pub fn close_fill_path(stroke: &Path, baseline: f64) -> Path {
    let (Some((first_x, _)), Some((last_x, _))) = (stroke.first_point(), stroke.last_point())
    else {
        return Path::new();
    };

    let mut filled = stroke.clone();
    filled.line_to(last_x, baseline);
    filled.line_to(first_x, baseline);
    filled.close();
    filled
}

/// Default baseline policy when a series has no explicit resolver.
///
/// A series crossing zero fills to zero, an all-positive series fills to the
/// bottom of its axis, an all-negative series to the top.
#[must_use]
pub fn default_fill_baseline(series: &LineSeries, axis_range: AxisRange) -> f64 {
    if series.value_max() > 0.0 && series.value_min() < 0.0 {
        0.0
    } else if series.value_min() >= 0.0 {
        axis_range.min
    } else {
        axis_range.max
    }
}
