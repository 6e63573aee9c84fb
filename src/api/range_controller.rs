use tracing::{debug, trace};

use crate::render::Renderer;

use super::TimelineGrid;

impl<R: Renderer> TimelineGrid<R> {
    pub fn set_start_time(&mut self, start_time: u64) {
        self.range.set_start_time(start_time);
        trace!(start_time, "set timeline start time");
    }

    /// Replaces the full range and re-derives label metrics and divisions,
    /// since the widest tick label depends on the full end time.
    pub fn set_full_range(&mut self, full_range: u64) {
        self.range.set_full_range(full_range);
        self.refresh_label_metrics();
        self.recalculate_divisions();
        debug!(
            full_range,
            max_text_width = self.layout.max_text_width(),
            large_division_count = self.layout.large_division_count(),
            "set timeline full range"
        );
    }

    pub fn set_visible_start_time(&mut self, visible_start_time: u64) {
        self.range.set_visible_start_time(visible_start_time);
        trace!(
            requested = visible_start_time,
            applied = self.range.visible_start_time(),
            "set visible start time"
        );
    }

    pub fn set_visible_range(&mut self, visible_range: u64) {
        self.range.set_visible_range(visible_range);
        trace!(
            requested = visible_range,
            applied = self.range.visible_range(),
            "set visible range"
        );
    }

    pub fn set_selected_time(&mut self, selected_time: u64) {
        self.range.set_selected_time(selected_time);
        trace!(selected_time = self.range.selected_time(), "set selected time");
    }

    pub fn set_end_selected_time(&mut self, end_selected_time: u64) {
        self.range.set_end_selected_time(end_selected_time);
        trace!(
            end_selected_time = self.range.end_selected_time(),
            "set end selected time"
        );
    }

    #[must_use]
    pub fn start_time(&self) -> u64 {
        self.range.start_time()
    }

    #[must_use]
    pub fn full_range(&self) -> u64 {
        self.range.full_range()
    }

    #[must_use]
    pub fn visible_start_time(&self) -> u64 {
        self.range.visible_start_time()
    }

    #[must_use]
    pub fn visible_range(&self) -> u64 {
        self.range.visible_range()
    }

    #[must_use]
    pub fn selected_time(&self) -> u64 {
        self.range.selected_time()
    }

    #[must_use]
    pub fn end_selected_time(&self) -> u64 {
        self.range.end_selected_time()
    }

    /// Adds a marker; duplicates and out-of-window times are kept.
    pub fn add_marker(&mut self, time: u64) {
        self.markers.add(time);
        trace!(time, count = self.markers.len(), "add timeline marker");
    }

    /// Removes the first marker equal to `time`.
    pub fn remove_marker(&mut self, time: u64) -> bool {
        let removed = self.markers.remove(time);
        trace!(time, removed, count = self.markers.len(), "remove timeline marker");
        removed
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
        trace!("clear timeline markers");
    }

    #[must_use]
    pub fn markers(&self) -> &[u64] {
        self.markers.as_slice()
    }
}
