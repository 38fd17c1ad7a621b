use tracing::debug;

use crate::core::types::Viewport;
use crate::error::ChartResult;
use crate::render::surface::ComposeSurface;

/// Off-screen layer that line geometry is drawn into before a single blit
/// onto the frame target.
///
/// The layer starts unallocated. Each frame, [`Compositor::begin_frame`]
/// allocates or reallocates it to match the viewport and clears it to
/// transparent; a zero-sized viewport defers the frame instead. Releasing is
/// idempotent and returns to the unallocated state.
#[derive(Debug)]
pub struct Compositor<S: ComposeSurface> {
    layer: Option<S>,
}

impl<S: ComposeSurface> Default for Compositor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ComposeSurface> Compositor<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { layer: None }
    }

    /// Prepares the layer for a frame. Returns `false` when the viewport has
    /// a zero dimension and drawing must be deferred.
    pub fn begin_frame(&mut self, viewport: Viewport) -> ChartResult<bool> {
        if !viewport.is_valid() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "deferring frame for zero-sized viewport"
            );
            return Ok(false);
        }

        let matches = self
            .layer
            .as_ref()
            .is_some_and(|layer| {
                layer.width() == viewport.width && layer.height() == viewport.height
            });
        if !matches {
            debug!(
                width = viewport.width,
                height = viewport.height,
                reallocated = self.layer.is_some(),
                "allocating compositor layer"
            );
            self.layer = Some(S::create(viewport.width, viewport.height)?);
        }

        if let Some(layer) = &mut self.layer {
            layer.clear_transparent()?;
        }
        Ok(true)
    }

    /// The off-screen layer, available between a successful `begin_frame`
    /// and `release`.
    #[must_use]
    pub fn layer(&mut self) -> Option<&mut S> {
        self.layer.as_mut()
    }

    #[must_use]
    pub fn layer_ref(&self) -> Option<&S> {
        self.layer.as_ref()
    }

    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.layer.is_some()
    }

    /// Blits the layer onto `target` in one draw.
    pub fn composite(&self, target: &mut S) -> ChartResult<()> {
        if let Some(layer) = &self.layer {
            target.draw_surface(layer, 0.0, 0.0)?;
        }
        Ok(())
    }

    /// Drops the layer. Safe to call repeatedly or before any allocation.
    pub fn release(&mut self) {
        if self.layer.take().is_some() {
            debug!("released compositor layer");
        }
    }
}
