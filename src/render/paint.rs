use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let channel = |value: u8| f64::from(value) / f64::from(u8::MAX);
        Self::rgba(channel(red), channel(green), channel(blue), channel(alpha))
    }

    /// Same color with the alpha channel replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off stroke intervals in pixels, alternating starting with "on".
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    intervals: SmallVec<[f64; 4]>,
    phase: f64,
}

impl DashPattern {
    pub fn new(intervals: impl Into<SmallVec<[f64; 4]>>, phase: f64) -> ChartResult<Self> {
        let intervals = intervals.into();
        if intervals.len() < 2 || intervals.len() % 2 != 0 {
            return Err(ChartError::InvalidData(
                "dash pattern needs an even number of intervals, at least two".to_owned(),
            ));
        }
        for interval in &intervals {
            if !interval.is_finite() || *interval <= 0.0 {
                return Err(ChartError::InvalidData(
                    "dash intervals must be finite and > 0".to_owned(),
                ));
            }
        }
        if !phase.is_finite() || phase < 0.0 {
            return Err(ChartError::InvalidData(
                "dash phase must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self { intervals, phase })
    }

    #[must_use]
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

/// Stroke attributes for lines and outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f64,
    pub dash: Option<DashPattern>,
}

impl Paint {
    #[must_use]
    pub fn stroke(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Text attributes for value labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f64,
    pub color: Color,
}

impl TextStyle {
    #[must_use]
    pub fn new(size_px: f64, color: Color) -> Self {
        Self { size_px, color }
    }
}

/// Axis-aligned rectangle with uniformly rounded corners, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub corner_radius: f64,
}

impl RoundedRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Handle to a host-registered fill image; resolved by the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableId(pub u32);
