use tracing::debug;

use super::grid_config::DEFAULT_LARGE_DIVISION_COUNT;

/// Vertical gap above the tick lines and below the label row.
pub const GRID_MARGIN: i32 = 2;

/// Extra room applied to the measured end label so adjacent labels keep a gap.
pub const LABEL_WIDTH_BUFFER: f64 = 1.75;

/// Derived pixel layout of the grid.
///
/// Recomputed on resize, full-range change and label-space change; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub(crate) grid_label_space: i32,
    pub(crate) right_margin: i32,
    /// Usable plot width between the label column and the right margin.
    pub(crate) grid_space: i32,
    pub(crate) long_line_height: i32,
    pub(crate) short_line_height: i32,
    /// Height of the tick-label row (font line spacing).
    pub(crate) num_text_height: i32,
    /// Buffered width of the widest expected tick label.
    pub(crate) max_text_width: f64,
    pub(crate) large_division_count: u32,
    pub(crate) small_division_count: u32,
    pub(crate) auto_large_division_count: bool,
    pub(crate) paint_end_time: bool,
}

impl GridLayout {
    #[must_use]
    pub fn new(
        grid_label_space: i32,
        right_margin: i32,
        large_division_count: Option<u32>,
        small_division_count: u32,
    ) -> Self {
        Self {
            grid_label_space,
            right_margin,
            grid_space: 0,
            long_line_height: 0,
            short_line_height: 0,
            num_text_height: 0,
            max_text_width: 0.0,
            large_division_count: large_division_count.unwrap_or(DEFAULT_LARGE_DIVISION_COUNT),
            small_division_count,
            auto_large_division_count: large_division_count.is_none(),
            paint_end_time: true,
        }
    }

    #[must_use]
    pub fn grid_label_space(&self) -> i32 {
        self.grid_label_space
    }

    #[must_use]
    pub fn right_margin(&self) -> i32 {
        self.right_margin
    }

    #[must_use]
    pub fn grid_space(&self) -> i32 {
        self.grid_space
    }

    #[must_use]
    pub fn long_line_height(&self) -> i32 {
        self.long_line_height
    }

    #[must_use]
    pub fn short_line_height(&self) -> i32 {
        self.short_line_height
    }

    #[must_use]
    pub fn num_text_height(&self) -> i32 {
        self.num_text_height
    }

    #[must_use]
    pub fn max_text_width(&self) -> f64 {
        self.max_text_width
    }

    #[must_use]
    pub fn large_division_count(&self) -> u32 {
        self.large_division_count
    }

    #[must_use]
    pub fn small_division_count(&self) -> u32 {
        self.small_division_count
    }

    #[must_use]
    pub fn is_auto_large_division_count(&self) -> bool {
        self.auto_large_division_count
    }

    #[must_use]
    pub fn paints_end_time(&self) -> bool {
        self.paint_end_time
    }

    /// Right edge of the plot area (exclusive).
    #[must_use]
    pub fn plot_right(&self) -> i32 {
        self.grid_label_space + self.grid_space
    }

    /// Top of hint boxes, centered within the tick-label row band.
    #[must_use]
    pub fn hint_top(&self) -> i32 {
        (self.long_line_height - self.num_text_height
            + self.short_line_height
            + self.num_text_height)
            / 2
    }

    /// Recomputes line heights for a new widget height.
    pub fn update_line_heights(&mut self, height: i32) {
        self.long_line_height = (height - self.num_text_height - GRID_MARGIN * 2).max(0);
        self.short_line_height = self.long_line_height / 3;
    }

    /// Recomputes the usable span and, in auto mode, the primary division count.
    pub fn recalculate_divisions(&mut self, widget_width: i32) {
        let grid_space = widget_width - self.grid_label_space - self.right_margin;

        if grid_space >= 0 {
            self.grid_space = grid_space;
            self.paint_end_time = true;

            if self.auto_large_division_count && self.max_text_width > 0.0 {
                let fitted = (f64::from(grid_space) / self.max_text_width) as u32;
                self.paint_end_time = fitted > 0;
                self.large_division_count = fitted.max(1);
            }
        } else {
            self.grid_space = 0;
            self.large_division_count = 1;
            self.paint_end_time = false;
        }

        debug!(
            widget_width,
            grid_space = self.grid_space,
            large_division_count = self.large_division_count,
            paint_end_time = self.paint_end_time,
            "recalculate timeline divisions"
        );
    }
}
