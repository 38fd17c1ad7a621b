use tracing::trace;

use crate::api::context::ChartContext;
use crate::core::{
    Interpolation, LineSeries, Path, RenderPhase, Transformer, ViewBounds, VisibleRange,
    build_curve_path, close_fill_path,
};
use crate::error::ChartResult;
use crate::render::{ComposeSurface, LineBuffer, Paint, RenderSurface};

use super::renderer::LineChartRenderer;

impl<S: ComposeSurface> LineChartRenderer<S> {
    /// Draws every visible series' stroke and fill, then blits the
    /// off-screen layer onto `target` once.
    ///
    /// Curved, dashed and from-zero strokes render into the layer; a plain
    /// straight-line series draws its segment batch directly onto `target`,
    /// keeping its fill there too. A zero-sized viewport defers the frame.
    pub fn draw_data(
        &mut self,
        context: &ChartContext,
        phase: RenderPhase,
        target: &mut S,
    ) -> ChartResult<()> {
        if !self.compositor.begin_frame(context.viewport())? {
            return Ok(());
        }
        self.init_buffers(context.data());

        let Self {
            compositor,
            line_buffers,
            ..
        } = self;
        let Some(layer) = compositor.layer() else {
            return Ok(());
        };

        for (position, series) in context.data().series().iter().enumerate() {
            if !series.is_visible() || series.is_empty() {
                continue;
            }
            trace!(
                series = %series.label(),
                mode = ?series.interpolation(),
                "drawing series"
            );

            if series.interpolation() == Interpolation::Linear && !series.is_from_zero() {
                let surface: &mut dyn RenderSurface = if series.is_dashed() {
                    &mut *layer
                } else {
                    &mut *target
                };
                draw_linear_series(&mut line_buffers[position], surface, context, phase, series)?;
            } else {
                draw_curved_series(&mut *layer, context, phase, series)?;
            }
        }

        compositor.composite(target)
    }
}

/// Straight-segment route through the reusable line buffer.
fn draw_linear_series(
    buffer: &mut LineBuffer,
    surface: &mut dyn RenderSurface,
    context: &ChartContext,
    phase: RenderPhase,
    series: &LineSeries,
) -> ChartResult<()> {
    let transformer = context.transformer(series.axis_dependency());
    let range = context.visible_range(series);
    let bounds = context.bounds();

    buffer.feed(series, range, phase);
    transformer.point_values_to_pixel(buffer.coordinates_mut());

    let paint = Paint::stroke(series.primary_color(), series.line_width())
        .with_dash(series.dash().cloned());
    stroke_segments(
        &mut *surface,
        series,
        range,
        buffer.coordinates(),
        &bounds,
        &paint,
    )?;

    if series.is_fill_enabled() {
        let stroke = build_curve_path(series, range, phase);
        let baseline = series.fill_baseline(context.axis_range(series.axis_dependency()));
        fill_under_stroke(surface, series, &stroke, baseline, transformer)?;
    }
    Ok(())
}

/// Path route for curved, dashed-curved and from-zero series: fill below,
/// stroke on top, both into the layer.
fn draw_curved_series(
    layer: &mut dyn RenderSurface,
    context: &ChartContext,
    phase: RenderPhase,
    series: &LineSeries,
) -> ChartResult<()> {
    let transformer = context.transformer(series.axis_dependency());
    let range = context.visible_range(series);

    let mut stroke = build_curve_path(series, range, phase);
    if stroke.is_empty() {
        return Ok(());
    }

    if series.is_fill_enabled() {
        let baseline = series.fill_baseline(context.axis_range(series.axis_dependency()));
        fill_under_stroke(&mut *layer, series, &stroke, baseline, transformer)?;
    }

    transformer.path_values_to_pixel(&mut stroke);
    let paint = Paint::stroke(series.primary_color(), series.line_width())
        .with_dash(series.dash().cloned());
    layer.stroke_path(&stroke, &paint)
}

/// Strokes the fed segment quads, one batch for a single-color series or one
/// culled line per segment when the palette cycles.
fn stroke_segments(
    surface: &mut dyn RenderSurface,
    series: &LineSeries,
    range: VisibleRange,
    coordinates: &[f64],
    bounds: &ViewBounds,
    paint: &Paint,
) -> ChartResult<()> {
    if series.colors().len() <= 1 {
        return surface.draw_line_batch(coordinates, paint);
    }

    let mut segment_paint = paint.clone();
    for (segment, quad) in coordinates.chunks_exact(4).enumerate() {
        if !bounds.is_in_bounds_right(quad[0]) {
            break;
        }
        // A segment entering above the top edge and leaving below the
        // bottom one is treated as off-screen.
        if !bounds.is_in_bounds_left(quad[2])
            || (!bounds.is_in_bounds_top(quad[1]) && !bounds.is_in_bounds_bottom(quad[3]))
        {
            continue;
        }

        segment_paint.color = series.color_at(range.min_index + segment);
        surface.draw_line(quad[0], quad[1], quad[2], quad[3], &segment_paint)?;
    }
    Ok(())
}

/// Closes a copy of the stroke path against the baseline and fills it with
/// the series' color or registered image, at the fill opacity.
fn fill_under_stroke(
    surface: &mut dyn RenderSurface,
    series: &LineSeries,
    stroke: &Path,
    baseline: f64,
    transformer: Transformer,
) -> ChartResult<()> {
    let mut filled = close_fill_path(stroke, baseline);
    if filled.is_empty() {
        return Ok(());
    }
    transformer.path_values_to_pixel(&mut filled);

    match series.fill_drawable() {
        Some(drawable) => surface.fill_path_image(&filled, drawable, series.fill_alpha()),
        None => surface.fill_path(&filled, series.fill_color().with_alpha(series.fill_alpha())),
    }
}
