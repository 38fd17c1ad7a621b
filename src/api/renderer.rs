use crate::api::config::RendererConfig;
use crate::api::context::ChartContext;
use crate::api::highlight::Highlight;
use crate::core::{LineData, RenderPhase};
use crate::error::ChartResult;
use crate::render::{CircleBuffer, ComposeSurface, Compositor, LineBuffer};

/// Draws line series with their fills, circle markers, value labels and
/// highlight indicators onto a compose surface.
///
/// Layered work (curved and dashed strokes, their fills) renders into an
/// off-screen compositor layer that is blitted once per frame; per-series
/// coordinate buffers persist across frames for allocation-stable reuse.
pub struct LineChartRenderer<S: ComposeSurface> {
    pub(super) config: RendererConfig,
    pub(super) compositor: Compositor<S>,
    pub(super) line_buffers: Vec<LineBuffer>,
    pub(super) circle_buffers: Vec<CircleBuffer>,
}

impl<S: ComposeSurface> LineChartRenderer<S> {
    pub fn new(config: RendererConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            compositor: Compositor::new(),
            line_buffers: Vec::new(),
            circle_buffers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> RendererConfig {
        self.config
    }

    /// Sizes one line-buffer and one circle-buffer slot per series position.
    ///
    /// Existing slots keep their storage; the draw passes call this on each
    /// frame so the arena tracks series-count changes automatically.
    pub fn init_buffers(&mut self, data: &LineData) {
        self.line_buffers.resize_with(data.len(), LineBuffer::default);
        self.circle_buffers
            .resize_with(data.len(), CircleBuffer::default);
    }

    /// Off-screen layer for diagnostics, present once a frame has begun.
    #[must_use]
    pub fn layer(&self) -> Option<&S> {
        self.compositor.layer_ref()
    }

    /// Runs the canonical frame order: series geometry (with its single
    /// blit), highlight indicators, circle markers, value labels.
    pub fn render_frame(
        &mut self,
        context: &ChartContext,
        phase: RenderPhase,
        highlights: &[Highlight],
        target: &mut S,
    ) -> ChartResult<()> {
        self.draw_data(context, phase, target)?;
        if !highlights.is_empty() {
            self.draw_highlighted(context, phase, highlights, target)?;
        }
        self.draw_circles(context, phase, None, target)?;
        self.draw_values(context, phase, None, target)?;
        Ok(())
    }

    /// Releases the off-screen layer and the per-series buffer arena.
    ///
    /// Called when the renderer detaches from its host; safe to call
    /// repeatedly or before any frame was drawn.
    pub fn release_buffers(&mut self) {
        self.compositor.release();
        self.line_buffers.clear();
        self.circle_buffers.clear();
    }
}
