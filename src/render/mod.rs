mod frame;
mod layer_stack;
mod metrics;
mod null_renderer;
mod primitives;

pub use frame::{DrawItem, LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use metrics::{MonospaceMetrics, TextMetrics};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::GridResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from timeline layout. They also measure text
/// with the font they draw with, which the layout needs before painting.
pub trait Renderer: TextMetrics {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
