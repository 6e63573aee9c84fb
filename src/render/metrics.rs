/// Text measurement service supplied by the drawing backend.
pub trait TextMetrics {
    /// Pixel width of `text` rendered at `font_size_px`.
    fn text_width(&self, text: &str, font_size_px: f64) -> f64;

    /// Distance between two baselines at `font_size_px`.
    fn line_spacing(&self, font_size_px: f64) -> f64;

    /// Text width rounded up to whole pixels.
    fn text_width_px(&self, text: &str, font_size_px: f64) -> i32 {
        to_whole_px(self.text_width(text, font_size_px))
    }

    /// Line spacing rounded up to whole pixels.
    fn line_spacing_px(&self, font_size_px: f64) -> i32 {
        to_whole_px(self.line_spacing(font_size_px))
    }
}

fn to_whole_px(value: f64) -> i32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.ceil().min(f64::from(i32::MAX)) as i32
}

/// Deterministic fixed-advance metrics for headless rendering and tests.
///
/// Font size is ignored: every character advances `char_width_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width_px: f64,
    pub line_spacing_px: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            char_width_px: 7.0,
            line_spacing_px: 14.0,
        }
    }
}

impl MonospaceMetrics {
    #[must_use]
    pub const fn new(char_width_px: f64, line_spacing_px: f64) -> Self {
        Self {
            char_width_px,
            line_spacing_px,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, _font_size_px: f64) -> f64 {
        text.chars().count() as f64 * self.char_width_px
    }

    fn line_spacing(&self, _font_size_px: f64) -> f64 {
        self.line_spacing_px
    }
}
