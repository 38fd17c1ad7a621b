use crate::core::{
    AxisDependency, AxisRange, LineData, LineSeries, Transformer, ViewBounds, Viewport,
    VisibleRange, resolve_visible_range,
};
use crate::error::ChartResult;

/// Chart state one frame renders against: the data, the viewport and its
/// content bounds, the visible x window and one transformer per y axis.
///
/// A zero-sized viewport is accepted here; the draw passes defer such frames
/// instead of failing.
pub struct ChartContext {
    data: LineData,
    viewport: Viewport,
    bounds: ViewBounds,
    x_min: f64,
    x_max: f64,
    left: Transformer,
    right: Transformer,
    max_visible_count: usize,
    scale_x: f64,
}

impl ChartContext {
    pub fn new(
        data: LineData,
        viewport: Viewport,
        x_min: f64,
        x_max: f64,
        left_range: AxisRange,
        right_range: AxisRange,
    ) -> ChartResult<Self> {
        // Transformers need a non-empty rect; an empty viewport still
        // constructs and is deferred at draw time.
        let bounds = ViewBounds::of_viewport(viewport.width.max(1), viewport.height.max(1))?;
        let left = Transformer::new(x_min, x_max, left_range, bounds)?;
        let right = Transformer::new(x_min, x_max, right_range, bounds)?;

        Ok(Self {
            data,
            viewport,
            bounds,
            x_min,
            x_max,
            left,
            right,
            max_visible_count: 100,
            scale_x: 1.0,
        })
    }

    /// Aggregate sample count above which value labels stop drawing.
    #[must_use]
    pub fn with_max_visible_count(mut self, count: usize) -> Self {
        self.max_visible_count = count;
        self
    }

    /// Current horizontal zoom factor; widens the label gate when zoomed in.
    #[must_use]
    pub fn with_scale_x(mut self, scale_x: f64) -> Self {
        if scale_x.is_finite() && scale_x > 0.0 {
            self.scale_x = scale_x;
        }
        self
    }

    #[must_use]
    pub fn data(&self) -> &LineData {
        &self.data
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn max_visible_count(&self) -> usize {
        self.max_visible_count
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    #[must_use]
    pub fn transformer(&self, axis: AxisDependency) -> Transformer {
        match axis {
            AxisDependency::Left => self.left,
            AxisDependency::Right => self.right,
        }
    }

    #[must_use]
    pub fn axis_range(&self, axis: AxisDependency) -> AxisRange {
        self.transformer(axis).y_range()
    }

    /// Padded sample window of `series` for the current x extent.
    #[must_use]
    pub fn visible_range(&self, series: &LineSeries) -> VisibleRange {
        resolve_visible_range(series, self.x_min, self.x_max)
    }

    /// Whether the chart is sparse enough for the value-label pass.
    #[must_use]
    pub fn should_draw_values(&self) -> bool {
        (self.data.total_sample_count() as f64)
            < self.max_visible_count as f64 * self.scale_x
    }
}

#[cfg(test)]
mod tests {
    use super::ChartContext;
    use crate::core::{AxisDependency, AxisRange, LineData, LineSeries, Sample, Viewport};

    fn context_with_samples(count: usize) -> ChartContext {
        let series = LineSeries::new(
            "test",
            (0..count).map(|index| Sample::new(index, 1.0)).collect(),
        );
        let mut data = LineData::new();
        data.add_series(series).expect("valid series");

        ChartContext::new(
            data,
            Viewport::new(800, 500),
            0.0,
            count.max(2) as f64,
            AxisRange::new(0.0, 10.0).expect("valid range"),
            AxisRange::new(0.0, 100.0).expect("valid range"),
        )
        .expect("valid context")
    }

    #[test]
    fn transformers_are_selected_by_axis_dependency() {
        let context = context_with_samples(4);

        let left = context.transformer(AxisDependency::Left);
        let right = context.transformer(AxisDependency::Right);
        assert_eq!(left.y_range().max, 10.0);
        assert_eq!(right.y_range().max, 100.0);
        assert_eq!(context.axis_range(AxisDependency::Right).max, 100.0);
    }

    #[test]
    fn value_gate_compares_total_samples_against_scaled_count() {
        let sparse = context_with_samples(4).with_max_visible_count(5);
        assert!(sparse.should_draw_values());

        let dense = context_with_samples(5).with_max_visible_count(5);
        assert!(!dense.should_draw_values());

        // Zooming in raises the allowance.
        let zoomed = context_with_samples(5)
            .with_max_visible_count(5)
            .with_scale_x(2.0);
        assert!(zoomed.should_draw_values());
    }

    #[test]
    fn rejects_a_degenerate_x_window() {
        let result = ChartContext::new(
            LineData::new(),
            Viewport::new(800, 500),
            2.0,
            2.0,
            AxisRange::new(0.0, 1.0).expect("valid range"),
            AxisRange::new(0.0, 1.0).expect("valid range"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn visible_range_pads_around_the_window() {
        let context = context_with_samples(8);
        let series = context.data().series_at(0).expect("series").clone();

        let range = context.visible_range(&series);
        assert_eq!(range.min_index, 0);
        assert_eq!(range.max_index, 8);
    }
}
