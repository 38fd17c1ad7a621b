use std::sync::Arc;

use linechart_rs::api::{ChartContext, LineChartRenderer, RendererConfig};
use linechart_rs::core::{
    AxisRange, DrawStyle, DrawStyleFlag, LineData, LineSeries, RenderPhase, Sample, Viewport,
};
use linechart_rs::render::{DrawOp, RecordingSurface};

fn context_for(series: LineSeries, x_max: f64) -> ChartContext {
    let mut data = LineData::new();
    data.add_series(series).expect("series");
    ChartContext::new(
        data,
        Viewport::new(400, 300),
        0.0,
        x_max,
        AxisRange::new(0.0, 10.0).expect("left range"),
        AxisRange::new(0.0, 10.0).expect("right range"),
    )
    .expect("context")
}

fn renderer() -> LineChartRenderer<RecordingSurface> {
    LineChartRenderer::new(RendererConfig::default()).expect("renderer")
}

fn text_ops(ops: &[DrawOp]) -> Vec<(String, f64, f64)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
            _ => None,
        })
        .collect()
}

#[test]
fn default_formatter_trims_trailing_zero_decimals() {
    let series = LineSeries::new(
        "s",
        vec![Sample::new(0, 3.0), Sample::new(1, 2.5)],
    );
    let context = context_for(series, 1.0);

    let mut renderer = renderer();
    let mut target = RecordingSurface::new(400, 300);
    renderer
        .draw_values(&context, RenderPhase::FULL, None, &mut target)
        .expect("draw");

    let texts: Vec<String> = text_ops(target.ops())
        .into_iter()
        .map(|(text, ..)| text)
        .collect();
    assert_eq!(texts, vec!["3".to_owned(), "2.5".to_owned()]);
}

#[test]
fn custom_formatter_flows_into_drawn_labels() {
    let series = LineSeries::new("s", vec![Sample::new(0, 3.0), Sample::new(1, 2.0)])
        .with_value_formatter(Arc::new(|value| format!("{value:.2} V")));
    let context = context_for(series, 1.0);

    let mut renderer = renderer();
    let mut target = RecordingSurface::new(400, 300);
    renderer
        .draw_values(&context, RenderPhase::FULL, None, &mut target)
        .expect("draw");

    let texts: Vec<String> = text_ops(target.ops())
        .into_iter()
        .map(|(text, ..)| text)
        .collect();
    assert_eq!(texts, vec!["3.00 V".to_owned(), "2.00 V".to_owned()]);
}

#[test]
fn highlight_filter_matches_sample_x_indices_not_positions() {
    // Sparse series: array positions 0..3 carry x indices 0, 5, 10.
    let series = LineSeries::new(
        "sparse",
        vec![
            Sample::new(0, 1.0),
            Sample::new(5, 2.0),
            Sample::new(10, 3.0),
        ],
    );
    let context = context_for(series, 10.0);

    let mut renderer = renderer();
    let mut target = RecordingSurface::new(400, 300);
    renderer
        .draw_values(&context, RenderPhase::FULL, Some(&[5]), &mut target)
        .expect("draw");

    // Only the x-index-5 sample labels: value 2 at x = 200, lifted above
    // its point by the marker clearance of 14.
    assert_eq!(
        text_ops(target.ops()),
        vec![("2".to_owned(), 200.0, 226.0)]
    );
}

#[test]
fn first_end_label_offsets_use_the_surface_text_measure() {
    let series = LineSeries::new(
        "s",
        vec![
            Sample::new(0, 1.0),
            Sample::new(1, 3.0),
            Sample::new(2, 2.0),
        ],
    )
    .with_draw_style(DrawStyle::from_flag(DrawStyleFlag::FirstEnd))
    .with_value_text_size(12.0);
    let context = context_for(series, 2.0);

    let mut renderer = renderer();
    // The recording surface measures 7px per character.
    let mut target = RecordingSurface::new(400, 300);
    renderer
        .draw_values(&context, RenderPhase::FULL, None, &mut target)
        .expect("draw");

    let texts = text_ops(target.ops());
    assert_eq!(texts.len(), 2);

    // First label pushes right of its point: 14 clearance + 3.5 half
    // width + 3 padding; the last label mirrors to the left of x = 400.
    let (_, first_x, first_y) = &texts[0];
    assert!((first_x - 20.5).abs() <= 1e-9);
    assert!((first_y - 274.0).abs() <= 1e-9);
    let (_, last_x, _) = &texts[1];
    assert!((last_x - 379.5).abs() <= 1e-9);

    // Each label drew its rounded backing plate first.
    let kinds: Vec<&'static str> = target
        .ops()
        .iter()
        .map(|op| match op {
            DrawOp::RoundRect { .. } => "rect",
            DrawOp::Text { .. } => "text",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["rect", "text", "rect", "text"]);
}

#[test]
fn from_zero_first_circle_sits_on_the_zero_line() {
    let series = LineSeries::new("s", vec![Sample::new(0, 2.0), Sample::new(1, 3.0)])
        .with_draw_style(DrawStyle::from_flag(DrawStyleFlag::All).with_flag(DrawStyleFlag::FromZero))
        .with_values(false);
    let context = context_for(series, 1.0);

    let mut renderer = renderer();
    let mut target = RecordingSurface::new(400, 300);
    renderer
        .draw_circles(&context, RenderPhase::FULL, None, &mut target)
        .expect("draw");

    let centers: Vec<(f64, f64)> = target
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokeCircle { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    // Value 0 maps to the bottom edge at y = 300; the second marker keeps
    // its own y of 210.
    assert_eq!(centers, vec![(0.0, 300.0), (400.0, 210.0)]);
}

#[test]
fn label_backgrounds_use_the_configured_plate_color() {
    use linechart_rs::render::Color;

    let plate = Color::from_rgba8(10, 20, 30, 255);
    let config = RendererConfig::new().with_label_background(plate);
    let series = LineSeries::new("s", vec![Sample::new(0, 1.0), Sample::new(1, 2.0)])
        .with_draw_style(DrawStyle::from_flag(DrawStyleFlag::FirstEnd));
    let context = context_for(series, 1.0);

    let mut renderer = LineChartRenderer::<RecordingSurface>::new(config).expect("renderer");
    let mut target = RecordingSurface::new(400, 300);
    renderer
        .draw_values(&context, RenderPhase::FULL, None, &mut target)
        .expect("draw");

    let colors: Vec<Color> = target
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::RoundRect { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec![plate, plate]);
}
