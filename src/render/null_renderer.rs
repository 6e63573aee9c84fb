use crate::error::GridResult;
use crate::render::{MonospaceMetrics, RenderFrame, Renderer, TextMetrics};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry, and
/// measures text with deterministic monospace metrics.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub metrics: MonospaceMetrics,
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn with_metrics(metrics: MonospaceMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }
}

impl TextMetrics for NullRenderer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        self.metrics.text_width(text, font_size_px)
    }

    fn line_spacing(&self, font_size_px: f64) -> f64 {
        self.metrics.line_spacing(font_size_px)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
