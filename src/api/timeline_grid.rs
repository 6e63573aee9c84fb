use tracing::{debug, trace};

use crate::core::{MarkerSet, TimeRangeState, ValueFormatter, Viewport};
use crate::error::GridResult;
use crate::render::{RenderFrame, Renderer};

use super::grid_layout::{GridLayout, LABEL_WIDTH_BUFFER};
use super::validation::{validate_config, validate_grid_style};
use super::{GridStyle, TimelineGridConfig, TimelineWidget};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Preferred widget height when the host asks for a size hint.
pub const PREFERRED_HEIGHT_PX: u32 = 50;

/// Timeline ruler widget facade consumed by host applications.
///
/// `TimelineGrid` owns the time window, selection, markers and derived pixel
/// layout, and hands each painted frame to its renderer. The renderer also
/// provides text measurement for label widths.
pub struct TimelineGrid<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) range: TimeRangeState,
    pub(super) markers: MarkerSet,
    pub(super) formatter: ValueFormatter,
    pub(super) layout: GridLayout,
    pub(super) style: GridStyle,
    pub(super) grid_label: String,
    pub(super) duration_hint_label: String,
    pub(super) show_time_hint: bool,
}

impl<R: Renderer> TimelineGrid<R> {
    pub fn new(renderer: R, config: TimelineGridConfig) -> GridResult<Self> {
        validate_config(&config)?;

        let mut grid = Self {
            renderer,
            viewport: config.viewport,
            range: TimeRangeState::new(),
            markers: MarkerSet::new(),
            formatter: ValueFormatter::new(config.precision, config.scaling_factor),
            layout: GridLayout::new(
                config.grid_label_space,
                config.right_margin,
                config.large_division_count,
                config.small_division_count,
            ),
            style: config.style,
            grid_label: config.grid_label,
            duration_hint_label: config.duration_hint_label,
            show_time_hint: config.show_time_hint,
        };
        grid.refresh_label_metrics();
        grid.recalculate_divisions();
        debug!(
            width = grid.viewport.width,
            height = grid.viewport.height,
            "timeline grid created"
        );
        Ok(grid)
    }

    #[must_use]
    pub fn range(&self) -> &TimeRangeState {
        &self.range
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    #[must_use]
    pub fn style(&self) -> GridStyle {
        self.style
    }

    pub fn set_style(&mut self, style: GridStyle) -> GridResult<()> {
        validate_grid_style(style)?;
        self.style = style;
        self.refresh_label_metrics();
        self.recalculate_divisions();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Resize notification: recomputes line heights and the division count.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout.update_line_heights(viewport.height_px());
        self.layout.recalculate_divisions(viewport.width_px());
        trace!(
            width = viewport.width,
            height = viewport.height,
            long_line_height = self.layout.long_line_height(),
            "timeline grid resized"
        );
    }

    #[must_use]
    pub fn size_hint(&self) -> Viewport {
        Viewport::new(0, PREFERRED_HEIGHT_PX)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Paints the current state and hands the frame to the renderer.
    ///
    /// A zero-sized surface has nothing to show and is skipped.
    pub fn render(&mut self) -> GridResult<()> {
        if !self.viewport.is_valid() {
            trace!("skipping render of zero-sized timeline grid");
            return Ok(());
        }
        let frame = self.paint();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> GridResult<()>
    where
        R: CairoContextRenderer,
    {
        if !self.viewport.is_valid() {
            return Ok(());
        }
        let frame = self.paint();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Maps a pointer X coordinate to a time inside the visible window.
    ///
    /// Returns `None` outside the plot area or when the plot has no width.
    #[must_use]
    pub fn time_at_x(&self, x: f64) -> Option<u64> {
        let grid_space = self.layout.grid_space();
        if grid_space <= 0 || !x.is_finite() {
            return None;
        }
        let offset = x - f64::from(self.layout.grid_label_space());
        if offset < 0.0 || offset > f64::from(grid_space) {
            return None;
        }
        let fraction = offset / f64::from(grid_space);
        let delta = (fraction * self.range.visible_range() as f64).round() as u64;
        Some(
            self.range
                .visible_start_time()
                .saturating_add(delta)
                .min(self.range.visible_end_time()),
        )
    }

    /// Re-measures the widest expected tick label and the label row height.
    pub(super) fn refresh_label_metrics(&mut self) {
        let font_size_px = self.style.font_size_px;
        let end_label = self.formatter.format_time(self.range.full_end_time());
        let end_width = self.renderer.text_width(&end_label, font_size_px);
        self.layout.max_text_width = end_width * LABEL_WIDTH_BUFFER;
        self.layout.num_text_height = self.renderer.line_spacing_px(font_size_px);
        self.layout.update_line_heights(self.viewport.height_px());
    }

    pub(super) fn recalculate_divisions(&mut self) {
        self.layout.recalculate_divisions(self.viewport.width_px());
    }
}

impl<R: Renderer> TimelineWidget for TimelineGrid<R> {
    fn size_hint(&self) -> Viewport {
        TimelineGrid::size_hint(self)
    }

    fn viewport(&self) -> Viewport {
        TimelineGrid::viewport(self)
    }

    fn resize(&mut self, viewport: Viewport) {
        TimelineGrid::resize(self, viewport);
    }

    fn paint(&self) -> RenderFrame {
        TimelineGrid::paint(self)
    }
}
