use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI};

use cairo::{Context, Extend, Format, ImageSurface, Operator, SurfacePattern};
use pango::FontDescription;
use tracing::warn;

use crate::core::path::{Path, PathCommand};
use crate::error::{ChartError, ChartResult};
use crate::render::paint::{Color, DrawableId, Paint, RoundedRect, TextStyle};
use crate::render::surface::{ComposeSurface, RenderSurface};

/// Cairo + Pango + PangoCairo drawing surface over an ARGB image buffer.
///
/// Doubles as the off-screen compositor layer and the frame target. Image
/// fills resolve through a per-surface registry of drawables.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    width: u32,
    height: u32,
    drawables: HashMap<DrawableId, ImageSurface>,
}

impl CairoSurface {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            width,
            height,
            drawables: HashMap::new(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn image_surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Registers the image behind a drawable handle used for image fills.
    pub fn register_drawable(&mut self, id: DrawableId, image: ImageSurface) {
        self.drawables.insert(id, image);
    }

    fn apply_stroke_paint(&self, paint: &Paint) {
        apply_color(&self.context, paint.color);
        self.context.set_line_width(paint.stroke_width);
        match paint.dash {
            Some(ref dash) => self.context.set_dash(dash.intervals(), dash.phase()),
            None => self.context.set_dash(&[], 0.0),
        }
    }

    fn text_layout(&self, text: &str, style: &TextStyle) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", style.size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl RenderSurface for CairoSurface {
    fn stroke_path(&mut self, path: &Path, paint: &Paint) -> ChartResult<()> {
        self.context.new_path();
        append_path(&self.context, path);
        self.apply_stroke_paint(paint);
        let stroked = self
            .context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err));
        self.context.set_dash(&[], 0.0);
        stroked
    }

    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()> {
        self.context.new_path();
        append_path(&self.context, path);
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn fill_path_image(
        &mut self,
        path: &Path,
        drawable: DrawableId,
        alpha: f64,
    ) -> ChartResult<()> {
        let Some(image) = self.drawables.get(&drawable) else {
            warn!(
                drawable = drawable.0,
                "skipping image fill for unregistered drawable"
            );
            return Ok(());
        };

        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.context.new_path();
        append_path(&self.context, path);
        self.context.clip();

        let pattern = SurfacePattern::create(image);
        pattern.set_extend(Extend::Repeat);
        self.context
            .set_source(&pattern)
            .map_err(|err| map_backend_error("failed to set image fill source", err))?;
        self.context
            .paint_with_alpha(alpha)
            .map_err(|err| map_backend_error("failed to paint image fill", err))?;

        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        paint: &Paint,
    ) -> ChartResult<()> {
        self.context.new_path();
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.apply_stroke_paint(paint);
        let stroked = self
            .context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err));
        self.context.set_dash(&[], 0.0);
        stroked
    }

    fn draw_line_batch(&mut self, segments: &[f64], paint: &Paint) -> ChartResult<()> {
        self.context.new_path();
        for quad in segments.chunks_exact(4) {
            self.context.move_to(quad[0], quad[1]);
            self.context.line_to(quad[2], quad[3]);
        }
        self.apply_stroke_paint(paint);
        let stroked = self
            .context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line batch", err));
        self.context.set_dash(&[], 0.0);
        stroked
    }

    fn stroke_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        stroke_width: f64,
    ) -> ChartResult<()> {
        self.context.new_path();
        self.context.arc(x, y, radius, 0.0, 2.0 * PI);
        apply_color(&self.context, color);
        self.context.set_line_width(stroke_width);
        self.context.set_dash(&[], 0.0);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> ChartResult<()> {
        self.context.new_path();
        self.context.arc(x, y, radius, 0.0, 2.0 * PI);
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))
    }

    fn draw_round_rect(&mut self, rect: RoundedRect, color: Color) -> ChartResult<()> {
        self.context.new_path();
        append_round_rect(&self.context, rect);
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rounded rectangle", err))
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        let layout = self.text_layout(text, style);
        let (text_width, text_height) = layout.pixel_size();

        apply_color(&self.context, style.color);
        self.context
            .move_to(x - f64::from(text_width) / 2.0, y - f64::from(text_height));
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        f64::from(self.text_layout(text, style).pixel_size().0)
    }
}

impl ComposeSurface for CairoSurface {
    fn create(width: u32, height: u32) -> ChartResult<Self> {
        Self::new(width, height)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_transparent(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.context.set_operator(Operator::Clear);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn draw_surface(&mut self, source: &Self, x: f64, y: f64) -> ChartResult<()> {
        self.context
            .set_source_surface(&source.surface, x, y)
            .map_err(|err| map_backend_error("failed to set layer source", err))?;
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to composite layer", err))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_path(context: &Context, path: &Path) {
    let mut current = (0.0, 0.0);
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo { x, y } => {
                context.move_to(x, y);
                current = (x, y);
            }
            PathCommand::LineTo { x, y } => {
                context.line_to(x, y);
                current = (x, y);
            }
            PathCommand::QuadTo { cx, cy, x, y } => {
                // Cairo has no quadratic primitive; elevate to the
                // equivalent cubic.
                let c1x = current.0 + 2.0 / 3.0 * (cx - current.0);
                let c1y = current.1 + 2.0 / 3.0 * (cy - current.1);
                let c2x = x + 2.0 / 3.0 * (cx - x);
                let c2y = y + 2.0 / 3.0 * (cy - y);
                context.curve_to(c1x, c1y, c2x, c2y, x, y);
                current = (x, y);
            }
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => {
                context.curve_to(c1x, c1y, c2x, c2y, x, y);
                current = (x, y);
            }
            PathCommand::Close => context.close_path(),
        }
    }
}

fn append_round_rect(context: &Context, rect: RoundedRect) {
    let radius = rect
        .corner_radius
        .min(rect.width() * 0.5)
        .min(rect.height() * 0.5);
    if radius <= 0.0 {
        context.rectangle(rect.left, rect.top, rect.width(), rect.height());
        return;
    }

    context.new_sub_path();
    context.arc(
        rect.right - radius,
        rect.top + radius,
        radius,
        -FRAC_PI_2,
        0.0,
    );
    context.arc(
        rect.right - radius,
        rect.bottom - radius,
        radius,
        0.0,
        FRAC_PI_2,
    );
    context.arc(
        rect.left + radius,
        rect.bottom - radius,
        radius,
        FRAC_PI_2,
        PI,
    );
    context.arc(
        rect.left + radius,
        rect.top + radius,
        radius,
        PI,
        PI + FRAC_PI_2,
    );
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
