use serde::{Deserialize, Serialize};

use crate::core::bounds::ViewBounds;
use crate::core::path::Path;
use crate::core::types::AxisRange;
use crate::error::{ChartError, ChartResult};

/// Which of the two possible y axes a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Maps data-space coordinates onto the content rectangle.
///
/// x is the logical sample-index domain, y the value domain of one axis.
/// The mapping is affine, injective and monotonic per axis; pixel y grows
/// downward while the value domain grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    x_min: f64,
    x_max: f64,
    y_range: AxisRange,
    bounds: ViewBounds,
}

impl Transformer {
    pub fn new(x_min: f64, x_max: f64, y_range: AxisRange, bounds: ViewBounds) -> ChartResult<Self> {
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(ChartError::InvalidData(
                "x domain must be finite with min < max".to_owned(),
            ));
        }
        Ok(Self {
            x_min,
            x_max,
            y_range,
            bounds,
        })
    }

    #[must_use]
    pub fn y_range(self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn pixel_for_value(self, x: f64, y: f64) -> (f64, f64) {
        let nx = (x - self.x_min) / (self.x_max - self.x_min);
        let ny = (y - self.y_range.min) / self.y_range.span();
        (
            self.bounds.left() + nx * self.bounds.width(),
            self.bounds.bottom() - ny * self.bounds.height(),
        )
    }

    /// Transforms interleaved `[x0, y0, x1, y1, ..]` pairs in place.
    ///
    /// An odd trailing element is an upstream bookkeeping bug, not input data.
    pub fn point_values_to_pixel(self, values: &mut [f64]) {
        debug_assert!(values.len() % 2 == 0, "coordinate slice must hold pairs");
        for pair in values.chunks_exact_mut(2) {
            let (px, py) = self.pixel_for_value(pair[0], pair[1]);
            pair[0] = px;
            pair[1] = py;
        }
    }

    /// Transforms every point of `path` in place, control points included.
    pub fn path_values_to_pixel(self, path: &mut Path) {
        path.map_points(|x, y| self.pixel_for_value(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisRange, Transformer, ViewBounds};

    fn transformer() -> Transformer {
        let bounds = ViewBounds::new(0.0, 0.0, 100.0, 200.0).expect("valid bounds");
        let range = AxisRange::new(0.0, 10.0).expect("valid range");
        Transformer::new(0.0, 4.0, range, bounds).expect("valid transformer")
    }

    #[test]
    fn maps_domain_corners_onto_content_rect() {
        let transform = transformer();
        assert_eq!(transform.pixel_for_value(0.0, 0.0), (0.0, 200.0));
        assert_eq!(transform.pixel_for_value(4.0, 10.0), (100.0, 0.0));
        assert_eq!(transform.pixel_for_value(2.0, 5.0), (50.0, 100.0));
    }

    #[test]
    fn batch_transform_matches_single_point_mapping() {
        let transform = transformer();
        let mut values = [0.0, 0.0, 2.0, 5.0, 4.0, 10.0];
        transform.point_values_to_pixel(&mut values);
        assert_eq!(values, [0.0, 200.0, 50.0, 100.0, 100.0, 0.0]);
    }
}
