use tracing::trace;

use crate::api::context::ChartContext;
use crate::core::{RenderPhase, layout_circle_markers};
use crate::error::ChartResult;
use crate::render::ComposeSurface;

use super::renderer::LineChartRenderer;

impl<S: ComposeSurface> LineChartRenderer<S> {
    /// Draws circle markers for every circle-enabled series, straight onto
    /// `target`.
    ///
    /// `highlighted` lifts the interior-sample skip of first/end styled
    /// series for the named x indices.
    pub fn draw_circles(
        &mut self,
        context: &ChartContext,
        phase: RenderPhase,
        highlighted: Option<&[usize]>,
        target: &mut S,
    ) -> ChartResult<()> {
        self.init_buffers(context.data());
        let bounds = context.bounds();

        for (position, series) in context.data().series().iter().enumerate() {
            if !series.is_visible() || !series.circles_enabled() || series.is_empty() {
                continue;
            }
            let transformer = context.transformer(series.axis_dependency());
            let range = context.visible_range(series);

            let buffer = &mut self.circle_buffers[position];
            buffer.feed(series, range, phase);
            transformer.point_values_to_pixel(buffer.coordinates_mut());

            let zero_pixel_y = transformer.pixel_for_value(0.0, 0.0).1;
            let markers = layout_circle_markers(
                series,
                range,
                phase,
                buffer.coordinates(),
                zero_pixel_y,
                &bounds,
                self.config.density,
                highlighted,
            );
            trace!(
                series = %series.label(),
                markers = markers.len(),
                "drawing circle markers"
            );

            for marker in &markers {
                target.stroke_circle(
                    marker.x,
                    marker.y,
                    marker.radius,
                    marker.color,
                    series.line_width(),
                )?;
                if let Some(hole) = marker.hole {
                    target.fill_circle(marker.x, marker.y, hole.radius, hole.color)?;
                }
            }
        }
        Ok(())
    }
}
