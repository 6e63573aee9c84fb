use crate::core::Viewport;
use crate::render::RenderFrame;

/// Capability interface a toolkit adapter drives: size negotiation, resize
/// notification and immediate-mode painting.
pub trait TimelineWidget {
    /// Preferred size; a zero width means "take what the layout offers".
    fn size_hint(&self) -> Viewport;

    /// Current surface size.
    fn viewport(&self) -> Viewport;

    /// Resize notification from the host window.
    fn resize(&mut self, viewport: Viewport);

    /// Builds the scene for one redraw without mutating widget state.
    fn paint(&self) -> RenderFrame;
}
