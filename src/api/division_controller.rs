use tracing::{trace, warn};

use crate::render::Renderer;

use super::TimelineGrid;

impl<R: Renderer> TimelineGrid<R> {
    /// Pins the primary division count and disables auto-calculation.
    ///
    /// A count of zero is accepted; paint then produces an empty frame.
    pub fn set_large_division_count(&mut self, count: u32) {
        if count == 0 {
            warn!("manual large division count of 0 suppresses all ticks");
        }
        self.layout.auto_large_division_count = false;
        self.layout.large_division_count = count;
        self.recalculate_divisions();
        trace!(count, "set large division count");
    }

    pub fn set_small_division_count(&mut self, count: u32) {
        self.layout.small_division_count = count;
        trace!(count, "set small division count");
    }

    /// Sets the display divisor; zero is replaced by one.
    pub fn set_scaling_factor(&mut self, scaling_factor: u64) {
        if !self.formatter.set_scaling_factor(scaling_factor) {
            warn!("scaling factor 0 replaced by 1");
        }
        self.refresh_label_metrics();
        self.recalculate_divisions();
        trace!(
            scaling_factor = self.formatter.scaling_factor(),
            "set scaling factor"
        );
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.formatter.set_precision(precision);
        self.refresh_label_metrics();
        self.recalculate_divisions();
        trace!(precision, "set label precision");
    }

    /// Sets the reserved label column width; negative values clamp to zero.
    pub fn set_grid_label_space(&mut self, px: i32) {
        if px < 0 {
            warn!(px, "negative grid label space clamped to 0");
        }
        self.layout.grid_label_space = px.max(0);
        self.recalculate_divisions();
        trace!(px = self.layout.grid_label_space, "set grid label space");
    }

    pub fn set_right_margin(&mut self, px: i32) {
        if px < 0 {
            warn!(px, "negative right margin clamped to 0");
        }
        self.layout.right_margin = px.max(0);
        self.recalculate_divisions();
        trace!(px = self.layout.right_margin, "set right margin");
    }

    pub fn set_grid_label(&mut self, label: impl Into<String>) {
        self.grid_label = label.into();
        trace!(label = %self.grid_label, "set grid caption");
    }

    /// Sets the duration template; `{}` is replaced by the formatted value.
    pub fn set_duration_hint_label(&mut self, template: impl Into<String>) {
        self.duration_hint_label = template.into();
        trace!(template = %self.duration_hint_label, "set duration hint template");
    }

    pub fn set_show_time_hint(&mut self, show: bool) {
        self.show_time_hint = show;
        trace!(show, "set show time hint");
    }

    #[must_use]
    pub fn large_division_count(&self) -> u32 {
        self.layout.large_division_count()
    }

    #[must_use]
    pub fn small_division_count(&self) -> u32 {
        self.layout.small_division_count()
    }

    #[must_use]
    pub fn is_auto_large_division_count(&self) -> bool {
        self.layout.is_auto_large_division_count()
    }

    #[must_use]
    pub fn paints_end_time(&self) -> bool {
        self.layout.paints_end_time()
    }

    #[must_use]
    pub fn scaling_factor(&self) -> u64 {
        self.formatter.scaling_factor()
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.formatter.precision()
    }

    #[must_use]
    pub fn grid_label_space(&self) -> i32 {
        self.layout.grid_label_space()
    }

    #[must_use]
    pub fn right_margin(&self) -> i32 {
        self.layout.right_margin()
    }

    #[must_use]
    pub fn grid_label(&self) -> &str {
        &self.grid_label
    }

    #[must_use]
    pub fn duration_hint_label(&self) -> &str {
        &self.duration_hint_label
    }

    #[must_use]
    pub fn show_time_hint(&self) -> bool {
        self.show_time_hint
    }
}
