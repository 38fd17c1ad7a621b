use crate::core::path::{Path, PathCommand};
use crate::error::ChartResult;
use crate::render::paint::{Color, DrawableId, Paint, RoundedRect, TextStyle};
use crate::render::surface::{ComposeSurface, RenderSurface};

const DEFAULT_CHAR_WIDTH_PX: f64 = 7.0;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    StrokePath {
        commands: Vec<PathCommand>,
        color: Color,
        stroke_width: f64,
        dashed: bool,
    },
    FillPath {
        commands: Vec<PathCommand>,
        color: Color,
    },
    FillPathImage {
        commands: Vec<PathCommand>,
        drawable: DrawableId,
        alpha: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        dashed: bool,
    },
    LineBatch {
        segments: Vec<f64>,
        color: Color,
    },
    StrokeCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        stroke_width: f64,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    RoundRect {
        rect: RoundedRect,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size_px: f64,
        color: Color,
    },
    /// A layer composited onto this surface; its ops precede this marker.
    Blit {
        op_count: usize,
    },
}

/// In-memory surface that records every draw call instead of rasterizing.
///
/// Text measurement is a fixed width per character so layout assertions stay
/// deterministic.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    char_width: f64,
    ops: Vec<DrawOp>,
    clear_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            char_width: DEFAULT_CHAR_WIDTH_PX,
            ops: Vec::new(),
            clear_count: 0,
        }
    }

    #[must_use]
    pub fn with_char_width(mut self, char_width: f64) -> Self {
        self.char_width = char_width;
        self
    }

    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl RenderSurface for RecordingSurface {
    fn stroke_path(&mut self, path: &Path, paint: &Paint) -> ChartResult<()> {
        self.ops.push(DrawOp::StrokePath {
            commands: path.commands().to_vec(),
            color: paint.color,
            stroke_width: paint.stroke_width,
            dashed: paint.dash.is_some(),
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()> {
        self.ops.push(DrawOp::FillPath {
            commands: path.commands().to_vec(),
            color,
        });
        Ok(())
    }

    fn fill_path_image(
        &mut self,
        path: &Path,
        drawable: DrawableId,
        alpha: f64,
    ) -> ChartResult<()> {
        self.ops.push(DrawOp::FillPathImage {
            commands: path.commands().to_vec(),
            drawable,
            alpha,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        paint: &Paint,
    ) -> ChartResult<()> {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: paint.color,
            dashed: paint.dash.is_some(),
        });
        Ok(())
    }

    fn draw_line_batch(&mut self, segments: &[f64], paint: &Paint) -> ChartResult<()> {
        self.ops.push(DrawOp::LineBatch {
            segments: segments.to_vec(),
            color: paint.color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        stroke_width: f64,
    ) -> ChartResult<()> {
        self.ops.push(DrawOp::StrokeCircle {
            x,
            y,
            radius,
            color,
            stroke_width,
        });
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> ChartResult<()> {
        self.ops.push(DrawOp::FillCircle {
            x,
            y,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_round_rect(&mut self, rect: RoundedRect, color: Color) -> ChartResult<()> {
        self.ops.push(DrawOp::RoundRect { rect, color });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            x,
            y,
            size_px: style.size_px,
            color: style.color,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, _style: &TextStyle) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

impl ComposeSurface for RecordingSurface {
    fn create(width: u32, height: u32) -> ChartResult<Self> {
        Ok(Self::new(width, height))
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_transparent(&mut self) -> ChartResult<()> {
        self.ops.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn draw_surface(&mut self, source: &Self, _x: f64, _y: f64) -> ChartResult<()> {
        let op_count = source.ops.len();
        self.ops.extend(source.ops.iter().cloned());
        self.ops.push(DrawOp::Blit { op_count });
        Ok(())
    }
}
