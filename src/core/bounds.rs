use crate::error::{ChartError, ChartResult};

/// Content rectangle of the chart in pixel space, with the culling predicates
/// overlay layout uses. Pixel y grows downward, so `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl ViewBounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        for (name, value) in [
            ("left", left),
            ("top", top),
            ("right", right),
            ("bottom", bottom),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "bounds edge `{name}` must be finite"
                )));
            }
        }
        if left >= right || top >= bottom {
            return Err(ChartError::InvalidData(
                "bounds must satisfy left < right and top < bottom".to_owned(),
            ));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Bounds covering a whole viewport, origin at (0, 0).
    pub fn of_viewport(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        Self::new(0.0, 0.0, f64::from(width), f64::from(height))
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_in_bounds_left(self, x: f64) -> bool {
        x >= self.left
    }

    #[must_use]
    pub fn is_in_bounds_right(self, x: f64) -> bool {
        x <= self.right
    }

    #[must_use]
    pub fn is_in_bounds_top(self, y: f64) -> bool {
        y >= self.top
    }

    #[must_use]
    pub fn is_in_bounds_bottom(self, y: f64) -> bool {
        y <= self.bottom
    }

    #[must_use]
    pub fn is_in_bounds_y(self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }
}
