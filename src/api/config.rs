use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Presentation settings shared by every draw pass.
///
/// This type is serializable so host applications can persist/load renderer
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Display density factor; dp lengths in the layout rules are multiplied
    /// by it to reach pixels.
    #[serde(default = "default_density")]
    pub density: f64,
    /// Background fill behind first/last-end and highlight-band labels.
    #[serde(default = "default_label_background")]
    pub label_background: Color,
}

impl RendererConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn with_label_background(mut self, color: Color) -> Self {
        self.label_background = color;
        self
    }

    /// Converts a density-independent length to pixels.
    #[must_use]
    pub fn dp_to_px(self, dp: f64) -> f64 {
        dp * self.density
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ChartError::InvalidData(
                "density must be finite and > 0".to_owned(),
            ));
        }
        self.label_background.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            label_background: default_label_background(),
        }
    }
}

fn default_density() -> f64 {
    1.0
}

fn default_label_background() -> Color {
    Color::from_rgba8(255, 255, 255, 192)
}
