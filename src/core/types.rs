use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One (logical index, value) data point in a series.
///
/// The index is the logical x position; identity is positional and a series
/// never reorders samples after canonicalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    pub fn from_decimal(index: usize, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            index,
            value: decimal_to_f64(value, "sample value")?,
        })
    }

    /// Logical x position as a coordinate value.
    #[must_use]
    pub fn x(self) -> f64 {
        self.index as f64
    }
}

/// Reveal-animation progress for one draw pass.
///
/// `x` drives the left-to-right reveal, `y` the vertical one. Both are 1.0
/// when no animation is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPhase {
    pub x: f64,
    pub y: f64,
}

impl RenderPhase {
    pub const FULL: Self = Self { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        for (axis, value) in [("x", x), ("y", y)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "phase `{axis}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(Self { x, y })
    }

    /// Builds a phase from arbitrary inputs, clamping into [0, 1].
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        let sanitize = |value: f64| if value.is_finite() { value.clamp(0.0, 1.0) } else { 1.0 };
        Self {
            x: sanitize(x),
            y: sanitize(y),
        }
    }
}

impl Default for RenderPhase {
    fn default() -> Self {
        Self::FULL
    }
}

/// Value extent of one y axis, as currently visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "axis range must be finite with min < max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
