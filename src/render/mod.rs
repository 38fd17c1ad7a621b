mod buffer;
mod compositor;
mod paint;
mod recording;
mod surface;

pub use buffer::{CircleBuffer, LineBuffer};
pub use compositor::Compositor;
pub use paint::{Color, DashPattern, DrawableId, Paint, RoundedRect, TextStyle};
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{ComposeSurface, RenderSurface};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
