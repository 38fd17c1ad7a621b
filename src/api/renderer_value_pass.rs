use tracing::{debug, trace};

use crate::api::context::ChartContext;
use crate::core::{RenderPhase, layout_value_labels};
use crate::error::ChartResult;
use crate::render::{ComposeSurface, TextStyle};

use super::renderer::LineChartRenderer;

impl<S: ComposeSurface> LineChartRenderer<S> {
    /// Draws value labels for every label-enabled series, straight onto
    /// `target`.
    ///
    /// The whole pass is skipped when the chart holds more samples than the
    /// context's label gate allows. `highlighted` restricts labels to the
    /// named x indices and moves first/end styled labels into the band at
    /// the top of the content rect.
    pub fn draw_values(
        &mut self,
        context: &ChartContext,
        phase: RenderPhase,
        highlighted: Option<&[usize]>,
        target: &mut S,
    ) -> ChartResult<()> {
        if !context.should_draw_values() {
            debug!(
                samples = context.data().total_sample_count(),
                "skipping value labels on dense chart"
            );
            return Ok(());
        }
        self.init_buffers(context.data());
        let bounds = context.bounds();

        for (position, series) in context.data().series().iter().enumerate() {
            if !series.is_visible() || !series.values_enabled() || series.is_empty() {
                continue;
            }
            let transformer = context.transformer(series.axis_dependency());
            let range = context.visible_range(series);

            let buffer = &mut self.circle_buffers[position];
            buffer.feed(series, range, phase);
            transformer.point_values_to_pixel(buffer.coordinates_mut());

            let measure_style =
                TextStyle::new(series.value_text_size(), series.value_text_color_at(0));
            let labels = layout_value_labels(
                series,
                range,
                phase,
                buffer.coordinates(),
                &bounds,
                self.config.density,
                |text| target.measure_text(text, &measure_style),
                highlighted,
            );
            trace!(
                series = %series.label(),
                labels = labels.len(),
                "drawing value labels"
            );

            for label in &labels {
                if let Some(rect) = label.background {
                    target.draw_round_rect(rect, self.config.label_background)?;
                }
                let style = TextStyle::new(label.text_size, label.color);
                target.draw_text(&label.text, label.x, label.y, &style)?;
            }
        }
        Ok(())
    }
}
