use tracing::{trace, warn};

use crate::api::context::ChartContext;
use crate::api::highlight::Highlight;
use crate::core::{RenderPhase, Rounding};
use crate::error::ChartResult;
use crate::render::{ComposeSurface, Paint};

use super::renderer::LineChartRenderer;

impl<S: ComposeSurface> LineChartRenderer<S> {
    /// Draws highlight indicator lines for the given highlights, then runs
    /// the circle and label passes restricted to the highlighted x indices.
    ///
    /// Every highlight is first snapped to the x index of its series'
    /// nearest sample; the snapped index list is what the trailing passes
    /// filter on, including highlights whose indicator lines end up skipped.
    pub fn draw_highlighted(
        &mut self,
        context: &ChartContext,
        phase: RenderPhase,
        highlights: &[Highlight],
        target: &mut S,
    ) -> ChartResult<()> {
        let mut snapped = Vec::with_capacity(highlights.len());
        for highlight in highlights {
            match context.data().series_at(highlight.series_position) {
                Some(series) => {
                    let x_index = series
                        .nearest_sample_index(highlight.x_index as f64, Rounding::Closest)
                        .map(|position| series.sample_at(position).index)
                        .unwrap_or(highlight.x_index);
                    snapped.push(Highlight::new(highlight.series_position, x_index));
                }
                None => {
                    warn!(
                        series = highlight.series_position,
                        "highlight names an unknown series"
                    );
                    snapped.push(*highlight);
                }
            }
        }

        let bounds = context.bounds();
        let chart_x_max = context.data().max_x_index().unwrap_or(0) as f64;

        for highlight in &snapped {
            let Some(series) = context.data().series_at(highlight.series_position) else {
                continue;
            };
            if !series.is_visible() || !series.is_highlight_enabled() {
                continue;
            }
            // Indicators never run ahead of the reveal animation.
            if highlight.x_index as f64 > chart_x_max * phase.x {
                continue;
            }
            let Some(value) = series.value_for_index(highlight.x_index) else {
                continue;
            };

            let transformer = context.transformer(series.axis_dependency());
            let (px, py) = transformer.pixel_for_value(highlight.x_index as f64, value * phase.y);
            trace!(
                series = %series.label(),
                x_index = highlight.x_index,
                "drawing highlight indicator"
            );

            let paint = Paint::stroke(series.highlight_color(), series.highlight_line_width())
                .with_dash(series.highlight_dash().cloned());
            if series.highlight_vertical() {
                target.draw_line(px, bounds.top(), px, bounds.bottom(), &paint)?;
            }
            if series.highlight_horizontal() {
                target.draw_line(bounds.left(), py, bounds.right(), py, &paint)?;
            }
        }

        let indices: Vec<usize> = snapped.iter().map(|highlight| highlight.x_index).collect();
        self.draw_circles(context, phase, Some(&indices), target)?;
        self.draw_values(context, phase, Some(&indices), target)
    }
}
