//! linechart-rs: line-series geometry and rendering passes.
//!
//! This crate builds the stroke, fill, marker, label and highlight geometry
//! of animated line charts and drives it through pluggable render surfaces
//! with off-screen compositing.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartContext, Highlight, LineChartRenderer, RendererConfig};
pub use error::{ChartError, ChartResult};
