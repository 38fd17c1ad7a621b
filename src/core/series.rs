use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::transform::AxisDependency;
use crate::core::types::{AxisRange, Sample};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern, DrawableId};

/// Rounding policy for index lookups against the sorted sample list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Greatest position whose x does not exceed the query, clamped to the first sample.
    Down,
    /// Smallest position whose x is not below the query, clamped to the last sample.
    Up,
    /// Position with the smallest absolute distance; ties resolve to the lower position.
    Closest,
}

/// Curve construction mode for the series stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    Quadratic,
    Cubic,
}

/// Per-series presentation switches that alter marker and line placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawStyleFlag {
    /// Markers and labels on every visible sample.
    All,
    /// Markers and labels only on the first and last visible sample.
    FirstEnd,
    /// The stroke starts pinned at value zero.
    FromZero,
}

impl DrawStyleFlag {
    const fn bit(self) -> u8 {
        match self {
            Self::All => 1 << 0,
            Self::FirstEnd => 1 << 1,
            Self::FromZero => 1 << 2,
        }
    }
}

/// Bitmask of draw-style flags carried by a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStyle {
    bits: u8,
}

impl DrawStyle {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn from_flag(flag: DrawStyleFlag) -> Self {
        Self { bits: flag.bit() }
    }

    #[must_use]
    pub const fn with_flag(self, flag: DrawStyleFlag) -> Self {
        Self {
            bits: self.bits | flag.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, flag: DrawStyleFlag) -> bool {
        (self.bits & flag.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::from_flag(DrawStyleFlag::All)
    }
}

/// Maps a raw value to its label text.
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Resolves the value-space baseline that a filled series closes against.
pub type FillBaselineFn = Arc<dyn Fn(&LineSeries, AxisRange) -> f64 + Send + Sync + 'static>;

const DEFAULT_SERIES_COLOR: (u8, u8, u8) = (140, 234, 255);
const DEFAULT_HIGHLIGHT_COLOR: (u8, u8, u8) = (255, 187, 115);
const DEFAULT_FILL_ALPHA: f64 = 85.0 / 255.0;
const MIN_CUBIC_INTENSITY: f64 = 0.05;
const MAX_CUBIC_INTENSITY: f64 = 1.0;

/// One line of the chart: canonicalized samples plus stroke, fill, marker,
/// label and highlight styling.
///
/// Samples are sorted by x index with non-finite values removed and repeated
/// indices collapsed to the most recently supplied sample.
#[derive(Clone)]
pub struct LineSeries {
    label: String,
    samples: Vec<Sample>,
    value_min: f64,
    value_max: f64,
    axis: AxisDependency,
    visible: bool,
    interpolation: Interpolation,
    cubic_intensity: f64,
    draw_style: DrawStyle,
    line_width: f64,
    colors: Vec<Color>,
    dash: Option<DashPattern>,
    fill_enabled: bool,
    fill_color: Color,
    fill_alpha: f64,
    fill_drawable: Option<DrawableId>,
    fill_baseline: Option<FillBaselineFn>,
    circles_enabled: bool,
    circle_radius: f64,
    circle_colors: Vec<Color>,
    circle_hole_enabled: bool,
    circle_hole_color: Color,
    values_enabled: bool,
    value_text_size: f64,
    value_text_colors: Vec<Color>,
    value_formatter: Option<ValueFormatterFn>,
    highlight_enabled: bool,
    highlight_color: Color,
    highlight_line_width: f64,
    highlight_dash: Option<DashPattern>,
    highlight_vertical: bool,
    highlight_horizontal: bool,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, samples: Vec<Sample>) -> Self {
        let label = label.into();
        let samples = canonicalize_samples(&label, samples);
        let (value_min, value_max) = value_bounds(&samples);
        let default_color = Color::from_rgb8(
            DEFAULT_SERIES_COLOR.0,
            DEFAULT_SERIES_COLOR.1,
            DEFAULT_SERIES_COLOR.2,
        );

        Self {
            label,
            samples,
            value_min,
            value_max,
            axis: AxisDependency::default(),
            visible: true,
            interpolation: Interpolation::default(),
            cubic_intensity: 0.2,
            draw_style: DrawStyle::default(),
            line_width: 2.5,
            colors: vec![default_color],
            dash: None,
            fill_enabled: false,
            fill_color: default_color,
            fill_alpha: DEFAULT_FILL_ALPHA,
            fill_drawable: None,
            fill_baseline: None,
            circles_enabled: true,
            circle_radius: 8.0,
            circle_colors: vec![default_color],
            circle_hole_enabled: true,
            circle_hole_color: Color::rgb(1.0, 1.0, 1.0),
            values_enabled: true,
            value_text_size: 17.0,
            value_text_colors: vec![Color::rgb(0.0, 0.0, 0.0)],
            value_formatter: None,
            highlight_enabled: true,
            highlight_color: Color::from_rgb8(
                DEFAULT_HIGHLIGHT_COLOR.0,
                DEFAULT_HIGHLIGHT_COLOR.1,
                DEFAULT_HIGHLIGHT_COLOR.2,
            ),
            highlight_line_width: 0.5,
            highlight_dash: None,
            highlight_vertical: true,
            highlight_horizontal: true,
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisDependency) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Curvature of the quadratic and cubic modes, clamped to `[0.05, 1.0]`.
    #[must_use]
    pub fn with_cubic_intensity(mut self, intensity: f64) -> Self {
        if intensity.is_finite() {
            self.cubic_intensity = intensity.clamp(MIN_CUBIC_INTENSITY, MAX_CUBIC_INTENSITY);
        }
        self
    }

    #[must_use]
    pub fn with_draw_style(mut self, draw_style: DrawStyle) -> Self {
        self.draw_style = draw_style;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        self.with_colors(vec![color])
    }

    /// Per-segment stroke colors; segment `i` uses `colors[i % len]`.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            warn!(series = %self.label, "ignoring empty stroke color list");
        } else {
            self.colors = colors;
        }
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, enabled: bool) -> Self {
        self.fill_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    #[must_use]
    pub fn with_fill_alpha(mut self, alpha: f64) -> Self {
        if alpha.is_finite() {
            self.fill_alpha = alpha.clamp(0.0, 1.0);
        }
        self
    }

    #[must_use]
    pub fn with_fill_drawable(mut self, drawable: Option<DrawableId>) -> Self {
        self.fill_drawable = drawable;
        self
    }

    #[must_use]
    pub fn with_fill_baseline(mut self, resolver: FillBaselineFn) -> Self {
        self.fill_baseline = Some(resolver);
        self
    }

    #[must_use]
    pub fn with_circles(mut self, enabled: bool) -> Self {
        self.circles_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_circle_radius(mut self, radius: f64) -> Self {
        self.circle_radius = radius;
        self
    }

    #[must_use]
    pub fn with_circle_colors(mut self, colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            warn!(series = %self.label, "ignoring empty circle color list");
        } else {
            self.circle_colors = colors;
        }
        self
    }

    #[must_use]
    pub fn with_circle_hole(mut self, enabled: bool) -> Self {
        self.circle_hole_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_circle_hole_color(mut self, color: Color) -> Self {
        self.circle_hole_color = color;
        self
    }

    #[must_use]
    pub fn with_values(mut self, enabled: bool) -> Self {
        self.values_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_value_text_size(mut self, size: f64) -> Self {
        self.value_text_size = size;
        self
    }

    #[must_use]
    pub fn with_value_text_colors(mut self, colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            warn!(series = %self.label, "ignoring empty value text color list");
        } else {
            self.value_text_colors = colors;
        }
        self
    }

    #[must_use]
    pub fn with_value_formatter(mut self, formatter: ValueFormatterFn) -> Self {
        self.value_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    #[must_use]
    pub fn with_highlight_line_width(mut self, width: f64) -> Self {
        self.highlight_line_width = width;
        self
    }

    #[must_use]
    pub fn with_highlight_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.highlight_dash = dash;
        self
    }

    #[must_use]
    pub fn with_highlight_indicators(mut self, vertical: bool, horizontal: bool) -> Self {
        self.highlight_vertical = vertical;
        self.highlight_horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at the given array position.
    ///
    /// Panics when `position` is out of range; callers derive positions from
    /// a resolved visible range and an out-of-range position is a logic bug.
    #[must_use]
    pub fn sample_at(&self, position: usize) -> Sample {
        self.samples[position]
    }

    #[must_use]
    pub fn value_min(&self) -> f64 {
        self.value_min
    }

    #[must_use]
    pub fn value_max(&self) -> f64 {
        self.value_max
    }

    #[must_use]
    pub fn axis_dependency(&self) -> AxisDependency {
        self.axis
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    #[must_use]
    pub fn cubic_intensity(&self) -> f64 {
        self.cubic_intensity
    }

    #[must_use]
    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    #[must_use]
    pub fn is_first_end(&self) -> bool {
        self.draw_style.contains(DrawStyleFlag::FirstEnd)
    }

    #[must_use]
    pub fn is_from_zero(&self) -> bool {
        self.draw_style.contains(DrawStyleFlag::FromZero)
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Stroke color for the sample at the given absolute array position,
    /// wrapping around the color list.
    #[must_use]
    pub fn color_at(&self, position: usize) -> Color {
        self.colors[position % self.colors.len()]
    }

    #[must_use]
    pub fn primary_color(&self) -> Color {
        self.colors[0]
    }

    #[must_use]
    pub fn dash(&self) -> Option<&DashPattern> {
        self.dash.as_ref()
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }

    #[must_use]
    pub fn is_fill_enabled(&self) -> bool {
        self.fill_enabled
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn fill_alpha(&self) -> f64 {
        self.fill_alpha
    }

    #[must_use]
    pub fn fill_drawable(&self) -> Option<DrawableId> {
        self.fill_drawable
    }

    /// Value-space baseline the fill region closes against, from the
    /// configured resolver or the sign-based default policy.
    #[must_use]
    pub fn fill_baseline(&self, axis_range: AxisRange) -> f64 {
        match &self.fill_baseline {
            Some(resolver) => resolver(self, axis_range),
            None => crate::core::fill::default_fill_baseline(self, axis_range),
        }
    }

    #[must_use]
    pub fn circles_enabled(&self) -> bool {
        self.circles_enabled
    }

    #[must_use]
    pub fn circle_radius(&self) -> f64 {
        self.circle_radius
    }

    #[must_use]
    pub fn circle_color_at(&self, position: usize) -> Color {
        self.circle_colors[position % self.circle_colors.len()]
    }

    #[must_use]
    pub fn circle_hole_enabled(&self) -> bool {
        self.circle_hole_enabled
    }

    #[must_use]
    pub fn circle_hole_color(&self) -> Color {
        self.circle_hole_color
    }

    #[must_use]
    pub fn values_enabled(&self) -> bool {
        self.values_enabled
    }

    #[must_use]
    pub fn value_text_size(&self) -> f64 {
        self.value_text_size
    }

    #[must_use]
    pub fn value_text_color_at(&self, position: usize) -> Color {
        self.value_text_colors[position % self.value_text_colors.len()]
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match &self.value_formatter {
            Some(formatter) => formatter(value),
            None => default_format_value(value),
        }
    }

    #[must_use]
    pub fn is_highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    #[must_use]
    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    #[must_use]
    pub fn highlight_line_width(&self) -> f64 {
        self.highlight_line_width
    }

    #[must_use]
    pub fn highlight_dash(&self) -> Option<&DashPattern> {
        self.highlight_dash.as_ref()
    }

    #[must_use]
    pub fn highlight_vertical(&self) -> bool {
        self.highlight_vertical
    }

    #[must_use]
    pub fn highlight_horizontal(&self) -> bool {
        self.highlight_horizontal
    }

    /// Array position of the sample nearest to `x` under the given rounding.
    ///
    /// Returns `None` for an empty series or a non-finite query.
    #[must_use]
    pub fn nearest_sample_index(&self, x: f64, rounding: Rounding) -> Option<usize> {
        if self.samples.is_empty() || !x.is_finite() {
            return None;
        }

        let split = self.samples.partition_point(|sample| sample.x() < x);
        let position = match rounding {
            Rounding::Up => split.min(self.samples.len() - 1),
            Rounding::Down => {
                if split < self.samples.len() && self.samples[split].x() == x {
                    split
                } else {
                    split.saturating_sub(1)
                }
            }
            Rounding::Closest => self
                .samples
                .iter()
                .enumerate()
                .min_by_key(|(_, sample)| OrderedFloat((sample.x() - x).abs()))
                .map(|(position, _)| position)?,
        };
        Some(position)
    }

    /// Array position of the sample stored exactly at `x_index`, if any.
    #[must_use]
    pub fn position_for_x_index(&self, x_index: usize) -> Option<usize> {
        self.samples
            .binary_search_by(|sample| sample.index.cmp(&x_index))
            .ok()
    }

    /// Value stored exactly at `x_index`; `None` when the index holds no sample.
    #[must_use]
    pub fn value_for_index(&self, x_index: usize) -> Option<f64> {
        self.position_for_x_index(x_index)
            .map(|position| self.samples[position].value)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "series label must not be empty".to_owned(),
            ));
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("circle_radius", self.circle_radius),
            ("value_text_size", self.value_text_size),
            ("highlight_line_width", self.highlight_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` {name} must be finite and > 0",
                    self.label
                )));
            }
        }
        for color in self
            .colors
            .iter()
            .chain(&self.circle_colors)
            .chain(&self.value_text_colors)
            .chain([&self.fill_color, &self.circle_hole_color, &self.highlight_color])
        {
            color.validate()?;
        }
        Ok(())
    }
}

/// Ordered collection of the series rendered into one chart.
#[derive(Clone, Default)]
pub struct LineData {
    series: Vec<LineSeries>,
}

impl LineData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_series(series: Vec<LineSeries>) -> ChartResult<Self> {
        let mut data = Self::new();
        for entry in series {
            data.add_series(entry)?;
        }
        Ok(data)
    }

    /// Validates and appends a series, returning its position.
    pub fn add_series(&mut self, series: LineSeries) -> ChartResult<usize> {
        series.validate()?;
        debug!(series = %series.label(), samples = series.len(), "series added");
        self.series.push(series);
        Ok(self.series.len() - 1)
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    #[must_use]
    pub fn series_at(&self, position: usize) -> Option<&LineSeries> {
        self.series.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total sample count across all series; gates the value-label pass.
    #[must_use]
    pub fn total_sample_count(&self) -> usize {
        self.series.iter().map(LineSeries::len).sum()
    }

    /// Greatest logical x index held by any series.
    #[must_use]
    pub fn max_x_index(&self) -> Option<usize> {
        self.series
            .iter()
            .filter_map(|series| series.samples().last())
            .map(|sample| sample.index)
            .max()
    }
}

fn canonicalize_samples(label: &str, mut samples: Vec<Sample>) -> Vec<Sample> {
    let initial = samples.len();
    samples.retain(|sample| sample.value.is_finite());
    let filtered = initial - samples.len();

    samples.sort_by_key(|sample| sample.index);

    // Stable sort keeps insertion order inside a run of equal indices; keep
    // the most recently supplied sample for each index.
    let before_dedup = samples.len();
    samples.reverse();
    samples.dedup_by_key(|sample| sample.index);
    samples.reverse();
    let duplicates = before_dedup - samples.len();

    if filtered > 0 || duplicates > 0 {
        warn!(
            series = %label,
            filtered,
            duplicates,
            "dropped non-finite or duplicate samples during canonicalization"
        );
    }
    samples
}

fn value_bounds(samples: &[Sample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.value);
        max = max.max(sample.value);
    }
    if samples.is_empty() {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

fn default_format_value(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_owned(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawStyle, DrawStyleFlag, LineData, LineSeries, Rounding};
    use crate::core::types::Sample;
    use crate::render::Color;

    fn series(values: &[(usize, f64)]) -> LineSeries {
        LineSeries::new(
            "test",
            values
                .iter()
                .map(|&(index, value)| Sample::new(index, value))
                .collect(),
        )
    }

    #[test]
    fn canonicalization_sorts_filters_and_keeps_last_duplicate() {
        let series = series(&[(3, 5.0), (0, 1.0), (1, f64::NAN), (0, 7.0), (2, 2.0)]);

        let indices: Vec<usize> = series.samples().iter().map(|sample| sample.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(series.value_for_index(0), Some(7.0));
        assert_eq!(series.value_for_index(1), None);
    }

    #[test]
    fn value_bounds_follow_canonical_samples() {
        let series = series(&[(0, -2.0), (1, 4.0), (2, f64::INFINITY)]);
        assert_eq!(series.value_min(), -2.0);
        assert_eq!(series.value_max(), 4.0);
    }

    #[test]
    fn nearest_sample_index_rounds_and_clamps() {
        let series = series(&[(1, 1.0), (3, 3.0), (5, 5.0)]);

        assert_eq!(series.nearest_sample_index(3.0, Rounding::Down), Some(1));
        assert_eq!(series.nearest_sample_index(4.0, Rounding::Down), Some(1));
        assert_eq!(series.nearest_sample_index(4.0, Rounding::Up), Some(2));
        assert_eq!(series.nearest_sample_index(0.0, Rounding::Down), Some(0));
        assert_eq!(series.nearest_sample_index(9.0, Rounding::Up), Some(2));
    }

    #[test]
    fn nearest_sample_index_closest_breaks_ties_low() {
        let series = series(&[(0, 0.0), (2, 2.0)]);
        assert_eq!(series.nearest_sample_index(1.0, Rounding::Closest), Some(0));
        assert_eq!(series.nearest_sample_index(1.5, Rounding::Closest), Some(1));
    }

    #[test]
    fn nearest_sample_index_rejects_empty_and_non_finite() {
        let empty = series(&[]);
        assert_eq!(empty.nearest_sample_index(1.0, Rounding::Closest), None);

        let filled = series(&[(0, 1.0)]);
        assert_eq!(filled.nearest_sample_index(f64::NAN, Rounding::Down), None);
    }

    #[test]
    fn color_lookup_wraps_around_the_palette() {
        let palette = vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)];
        let series = series(&[(0, 1.0), (1, 2.0), (2, 3.0)]).with_colors(palette.clone());

        assert_eq!(series.color_at(0), palette[0]);
        assert_eq!(series.color_at(1), palette[1]);
        assert_eq!(series.color_at(2), palette[0]);
        assert_eq!(series.color_at(5), palette[1]);
    }

    #[test]
    fn empty_color_list_keeps_previous_palette() {
        let series = series(&[(0, 1.0)]).with_colors(Vec::new());
        assert_eq!(series.colors().len(), 1);
    }

    #[test]
    fn cubic_intensity_is_clamped() {
        let series = series(&[(0, 1.0)]);
        assert_eq!(series.clone().with_cubic_intensity(3.0).cubic_intensity(), 1.0);
        assert_eq!(
            series.clone().with_cubic_intensity(0.0).cubic_intensity(),
            0.05
        );
        assert_eq!(
            series.with_cubic_intensity(f64::NAN).cubic_intensity(),
            0.2
        );
    }

    #[test]
    fn draw_style_flags_combine() {
        let style = DrawStyle::from_flag(DrawStyleFlag::FirstEnd)
            .with_flag(DrawStyleFlag::FromZero);

        assert!(style.contains(DrawStyleFlag::FirstEnd));
        assert!(style.contains(DrawStyleFlag::FromZero));
        assert!(!style.contains(DrawStyleFlag::All));
        assert!(DrawStyle::none().is_none());
    }

    #[test]
    fn default_formatting_trims_whole_numbers() {
        let series = series(&[(0, 1.0)]);
        assert_eq!(series.format_value(3.0), "3");
        assert_eq!(series.format_value(2.5), "2.5");
        assert_eq!(series.format_value(-4.0), "-4");
    }

    #[test]
    fn line_data_rejects_invalid_series() {
        let mut data = LineData::new();
        let bad = series(&[(0, 1.0)]).with_line_width(0.0);
        assert!(data.add_series(bad).is_err());

        let good = series(&[(0, 1.0)]);
        assert_eq!(data.add_series(good).unwrap(), 0);
        assert_eq!(data.total_sample_count(), 1);
    }
}
