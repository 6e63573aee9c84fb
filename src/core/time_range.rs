use serde::{Deserialize, Serialize};

/// Full/visible time window plus the selection bounds of a timeline.
///
/// Every setter re-runs [`TimeRangeState::ensure_valid`], so after any call:
/// - `visible_start_time` lies in `[start_time, full_end_time]`
/// - `visible_end_time` never exceeds `full_end_time`
/// - both selection bounds lie in `[start_time, full_end_time]`
///
/// Sums saturate at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRangeState {
    start_time: u64,
    full_range: u64,
    visible_start_time: u64,
    visible_range: u64,
    selected_time: u64,
    end_selected_time: u64,
}

impl TimeRangeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    #[must_use]
    pub fn full_range(&self) -> u64 {
        self.full_range
    }

    #[must_use]
    pub fn full_end_time(&self) -> u64 {
        self.start_time.saturating_add(self.full_range)
    }

    #[must_use]
    pub fn visible_start_time(&self) -> u64 {
        self.visible_start_time
    }

    #[must_use]
    pub fn visible_range(&self) -> u64 {
        self.visible_range
    }

    #[must_use]
    pub fn visible_end_time(&self) -> u64 {
        self.visible_start_time.saturating_add(self.visible_range)
    }

    #[must_use]
    pub fn selected_time(&self) -> u64 {
        self.selected_time
    }

    #[must_use]
    pub fn end_selected_time(&self) -> u64 {
        self.end_selected_time
    }

    /// Whether the visible window starts at the beginning of the full range.
    #[must_use]
    pub fn shows_full_start(&self) -> bool {
        self.visible_start_time == self.start_time
    }

    /// Whether the visible window ends at the end of the full range.
    #[must_use]
    pub fn shows_full_end(&self) -> bool {
        self.visible_end_time() == self.full_end_time()
    }

    /// Whether `time` lies strictly inside the visible window.
    #[must_use]
    pub fn strictly_inside_visible(&self, time: u64) -> bool {
        time > self.visible_start_time && time < self.visible_end_time()
    }

    pub fn set_start_time(&mut self, start_time: u64) {
        self.start_time = start_time;
        self.ensure_valid();
    }

    pub fn set_full_range(&mut self, full_range: u64) {
        self.full_range = full_range;
        self.ensure_valid();
    }

    pub fn set_visible_start_time(&mut self, visible_start_time: u64) {
        self.visible_start_time = visible_start_time;
        self.ensure_valid();
    }

    pub fn set_visible_range(&mut self, visible_range: u64) {
        self.visible_range = visible_range;
        self.ensure_valid();
    }

    pub fn set_selected_time(&mut self, selected_time: u64) {
        self.selected_time = selected_time;
        self.ensure_valid();
    }

    pub fn set_end_selected_time(&mut self, end_selected_time: u64) {
        self.end_selected_time = end_selected_time;
        self.ensure_valid();
    }

    /// Re-clamps visible window and selection into the full range.
    pub fn ensure_valid(&mut self) {
        let full_end = self.full_end_time();

        self.visible_start_time = self.visible_start_time.clamp(self.start_time, full_end);
        self.selected_time = self.selected_time.clamp(self.start_time, full_end);
        self.end_selected_time = self.end_selected_time.clamp(self.start_time, full_end);

        if self.visible_end_time() > full_end {
            self.visible_range = full_end - self.visible_start_time;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeRangeState;

    fn state(start: u64, full: u64) -> TimeRangeState {
        let mut state = TimeRangeState::new();
        state.set_start_time(start);
        state.set_full_range(full);
        state
    }

    #[test]
    fn visible_start_is_raised_to_full_start() {
        let mut state = state(100, 1_000);
        state.set_visible_start_time(10);
        assert_eq!(state.visible_start_time(), 100);
    }

    #[test]
    fn visible_start_is_capped_at_full_end() {
        let mut state = state(100, 1_000);
        state.set_visible_start_time(5_000);
        assert_eq!(state.visible_start_time(), 1_100);
        assert_eq!(state.visible_range(), 0);
    }

    #[test]
    fn visible_range_shrinks_to_fit() {
        let mut state = state(0, 100);
        state.set_visible_start_time(40);
        state.set_visible_range(500);
        assert_eq!(state.visible_range(), 60);
        assert!(state.shows_full_end());
    }

    #[test]
    fn shrinking_full_range_reclamps_window() {
        let mut state = state(0, 1_000);
        state.set_visible_start_time(800);
        state.set_visible_range(150);
        state.set_full_range(500);
        assert_eq!(state.visible_start_time(), 500);
        assert_eq!(state.visible_range(), 0);
    }

    #[test]
    fn selection_is_clamped_on_both_sides() {
        let mut state = state(50, 100);
        state.set_selected_time(10);
        state.set_end_selected_time(900);
        assert_eq!(state.selected_time(), 50);
        assert_eq!(state.end_selected_time(), 150);
    }

    #[test]
    fn full_end_saturates() {
        let state = state(u64::MAX - 5, 100);
        assert_eq!(state.full_end_time(), u64::MAX);
    }

    #[test]
    fn strict_visibility_excludes_both_edges() {
        let mut state = state(0, 100);
        state.set_visible_range(100);
        assert!(!state.strictly_inside_visible(0));
        assert!(state.strictly_inside_visible(1));
        assert!(state.strictly_inside_visible(99));
        assert!(!state.strictly_inside_visible(100));
    }
}
