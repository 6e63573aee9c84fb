use serde::{Deserialize, Serialize};

use crate::core::TimeRangeState;

/// Ordered collection of discrete marker times. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkerSet {
    times: Vec<u64>,
}

impl MarkerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, time: u64) {
        self.times.push(time);
    }

    /// Removes the first marker equal to `time`.
    ///
    /// Returns `true` when one occurrence was removed.
    pub fn remove(&mut self, time: u64) -> bool {
        match self.times.iter().position(|marker| *marker == time) {
            Some(index) => {
                self.times.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.times.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Markers in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.times
    }

    /// Markers strictly inside the visible window, in increasing time order.
    #[must_use]
    pub fn visible_sorted(&self, range: &TimeRangeState) -> Vec<u64> {
        let mut visible: Vec<u64> = self
            .times
            .iter()
            .copied()
            .filter(|time| range.strictly_inside_visible(*time))
            .collect();
        visible.sort_unstable();
        visible
    }

    /// Adjacent pairs of visible markers.
    ///
    /// A single visible marker yields one degenerate `(t, t)` pair.
    #[must_use]
    pub fn visible_hint_pairs(&self, range: &TimeRangeState) -> Vec<(u64, u64)> {
        let visible = self.visible_sorted(range);
        match visible.as_slice() {
            [] => Vec::new(),
            [only] => vec![(*only, *only)],
            many => many.windows(2).map(|pair| (pair[0], pair[1])).collect(),
        }
    }
}
