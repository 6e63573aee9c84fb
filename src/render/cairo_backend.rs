use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{GridError, GridResult};
use crate::render::{
    Color, DrawItem, LayerPrimitives, RenderFrame, Renderer, TextHAlign, TextMetrics,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GridResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// Text is measured with a Pango layout on the offscreen surface, using the
/// same font description as drawing.
///
/// The offscreen surface is cleared to white before each frame. External
/// contexts are left as the host painted them unless a context clear color
/// is set.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    context_clear_color: Option<Color>,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GridResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            context_clear_color: None,
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Sets the color painted on the offscreen surface before each frame.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> GridResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn context_clear_color(&self) -> Option<Color> {
        self.context_clear_color
    }

    /// Sets the color painted on external contexts before each frame.
    /// `None` keeps the host's background.
    pub fn set_context_clear_color(&mut self, color: Option<Color>) -> GridResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.context_clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn font_description(&self, font_size_px: f64) -> FontDescription {
        FontDescription::from_string(&format!("{} {}px", self.font_family, font_size_px))
    }

    fn measure(&self, text: &str, font_size_px: f64) -> Option<(f64, f64)> {
        let context = Context::new(&self.surface).ok()?;
        let layout = pangocairo::functions::create_layout(&context);
        layout.set_font_description(Some(&self.font_description(font_size_px)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        Some((f64::from(width), f64::from(height)))
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        clear_color: Option<Color>,
    ) -> GridResult<()> {
        frame.validate()?;

        if let Some(clear_color) = clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            self.render_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn render_layer(
        &self,
        context: &Context,
        layer: &LayerPrimitives,
        stats: &mut CairoRenderStats,
    ) -> GridResult<()> {
        for item in layer.draw_items() {
            match item {
                DrawItem::Rect(rect) => {
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    apply_color(context, rect.fill_color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.rects_drawn += 1;
                }
                DrawItem::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    // Half-pixel offset keeps 1px strokes on a single device column.
                    context.move_to(line.x1 + 0.5, line.y1 + 0.5);
                    context.line_to(line.x2 + 0.5, line.y2 + 0.5);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawItem::Text(text) => {
                    let layout = pangocairo::functions::create_layout(context);
                    layout.set_font_description(Some(&self.font_description(text.font_size_px)));
                    layout.set_text(&text.text);

                    let (text_width, _text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };

                    apply_color(context, text.color);
                    context.move_to(x, text.y);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_drawn += 1;
                }
            }
        }

        Ok(())
    }
}

impl TextMetrics for CairoRenderer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        self.measure(text, font_size_px)
            .map_or(0.0, |(width, _)| width)
    }

    fn line_spacing(&self, font_size_px: f64) -> f64 {
        self.measure("0", font_size_px)
            .map_or(font_size_px, |(_, height)| height)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame, self.clear_color)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GridResult<()> {
        self.render_with_context(context, frame, self.context_clear_color)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GridError {
    GridError::Backend(format!("{prefix}: {err}"))
}
