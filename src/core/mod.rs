pub mod bounds;
pub mod curve;
pub mod fill;
pub mod markers;
pub mod path;
pub mod range;
pub mod series;
pub mod transform;
pub mod types;

pub use bounds::ViewBounds;
pub use curve::build_curve_path;
pub use fill::{close_fill_path, default_fill_baseline};
pub use markers::{
    CircleHole, CircleMarker, ValueLabel, layout_circle_markers, layout_value_labels,
};
pub use path::{Path, PathCommand};
pub use range::{VisibleRange, resolve_visible_range};
pub use series::{
    DrawStyle, DrawStyleFlag, FillBaselineFn, Interpolation, LineData, LineSeries, Rounding,
    ValueFormatterFn,
};
pub use transform::{AxisDependency, Transformer};
pub use types::{AxisRange, RenderPhase, Sample, Viewport, decimal_to_f64};
