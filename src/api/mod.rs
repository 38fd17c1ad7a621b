mod config;
mod context;
mod highlight;
mod renderer;
mod renderer_circle_pass;
mod renderer_data_pass;
mod renderer_highlight_pass;
mod renderer_value_pass;

pub use config::RendererConfig;
pub use context::ChartContext;
pub use highlight::Highlight;
pub use renderer::LineChartRenderer;
