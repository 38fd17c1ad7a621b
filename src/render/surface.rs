use crate::core::path::Path;
use crate::error::ChartResult;
use crate::render::paint::{Color, DrawableId, Paint, RoundedRect, TextStyle};

/// Pixel-space drawing operations required by the draw passes.
///
/// Implemented by the Cairo backend and by an in-memory recording surface
/// used in tests.
pub trait RenderSurface {
    fn stroke_path(&mut self, path: &Path, paint: &Paint) -> ChartResult<()>;

    /// Fills a closed path with a flat color.
    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()>;

    /// Fills a closed path with a registered image, modulated by `alpha`.
    fn fill_path_image(
        &mut self,
        path: &Path,
        drawable: DrawableId,
        alpha: f64,
    ) -> ChartResult<()>;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, paint: &Paint)
    -> ChartResult<()>;

    /// Strokes independent segments laid out as x1,y1,x2,y2 quads.
    fn draw_line_batch(&mut self, segments: &[f64], paint: &Paint) -> ChartResult<()>;

    fn stroke_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        stroke_width: f64,
    ) -> ChartResult<()>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> ChartResult<()>;

    fn draw_round_rect(&mut self, rect: RoundedRect, color: Color) -> ChartResult<()>;

    /// Draws `text` horizontally centered on `x` with its baseline near `y`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()>;

    /// Pixel width of `text` at the style's size.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64;
}

/// A render surface owning an off-screen pixel buffer that can be composited
/// onto another surface of the same kind.
pub trait ComposeSurface: RenderSurface + Sized {
    fn create(width: u32, height: u32) -> ChartResult<Self>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Resets every pixel to fully transparent.
    fn clear_transparent(&mut self) -> ChartResult<()>;

    /// Paints `source` onto this surface with its origin at (x, y).
    fn draw_surface(&mut self, source: &Self, x: f64, y: f64) -> ChartResult<()>;
}
