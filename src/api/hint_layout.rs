use smallvec::{SmallVec, smallvec};

use crate::core::{PixelRect, TimeRangeState, ValueFormatter};
use crate::render::TextMetrics;

use super::grid_layout::GridLayout;

/// Glyph prefixed to values before the visible window.
pub const BEFORE_WINDOW_GLYPH: char = '\u{25C4}';
/// Glyph appended to values after the visible window.
pub const AFTER_WINDOW_GLYPH: char = '\u{25BA}';

/// Arrow head size of the connector between separate start/end boxes.
pub const ARROW_HEAD_PX: i32 = 3;

/// One labeled overlay box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintBox {
    pub rect: PixelRect,
    pub text: String,
}

/// Resolved placement for one `(start, end)` hint pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintPlacement {
    /// Degenerate pair: one value, one box.
    Single(HintBox),
    /// Overlapping boxes collapsed to `"<a> - <b> (<duration>)"`.
    Combined(HintBox),
    /// Three boxes joined by a double-headed arrow from `start` to `end`.
    Separate {
        start: HintBox,
        end: HintBox,
        duration: HintBox,
    },
}

impl HintPlacement {
    /// Boxes in fill order.
    #[must_use]
    pub fn boxes(&self) -> SmallVec<[&HintBox; 3]> {
        match self {
            Self::Single(hint) | Self::Combined(hint) => smallvec![hint],
            Self::Separate {
                start,
                end,
                duration,
            } => smallvec![end, duration, start],
        }
    }

    /// Area cleared under separate boxes, from the start box's top-left to
    /// the end box's bottom-right, normalized for reversed pairs.
    #[must_use]
    pub fn clear_rect(&self) -> Option<PixelRect> {
        match self {
            Self::Separate { start, end, .. } => {
                let left = start.rect.left().min(end.rect.left());
                let right = start.rect.right().max(end.rect.right());
                let spanning = start.rect.spanning_to(end.rect);
                Some(PixelRect::new(
                    left,
                    spanning.top(),
                    right - left + 1,
                    spanning.height.max(0),
                ))
            }
            _ => None,
        }
    }

    /// Connector segments as `(x1, y1, x2, y2)`: shaft then four head strokes.
    #[must_use]
    pub fn arrow_segments(&self) -> Option<[(i32, i32, i32, i32); 5]> {
        match self {
            Self::Separate { start, end, .. } => {
                let middle = start.rect.vertical_middle();
                Some(double_arrow_segments(
                    start.rect.right() + 1,
                    middle,
                    end.rect.left() - 1,
                    middle,
                    ARROW_HEAD_PX,
                ))
            }
            _ => None,
        }
    }
}

/// Inputs shared by every hint placement in one paint pass.
pub struct HintContext<'a, M: TextMetrics + ?Sized> {
    pub layout: &'a GridLayout,
    pub range: &'a TimeRangeState,
    pub formatter: &'a ValueFormatter,
    pub metrics: &'a M,
    pub font_size_px: f64,
    pub duration_template: &'a str,
}

impl<M: TextMetrics + ?Sized> HintContext<'_, M> {
    /// Places the hint boxes for `(start, end)`.
    #[must_use]
    pub fn place(&self, start: u64, end: u64) -> HintPlacement {
        let start_text = self.decorated_time(start);
        let start_hint = self.hint_box(start_text, start);

        if start == end {
            return HintPlacement::Single(start_hint);
        }

        let end_text = self.decorated_time(end);
        let end_hint = self.hint_box(end_text, end);

        let (diff, mut middle) = if end > start {
            (end - start, start + (end - start) / 2)
        } else {
            (start - end, end + (start - end) / 2)
        };

        let plot_left = self.layout.grid_label_space();
        let plot_last = self.layout.plot_right() - 1;
        let spans_whole_plot = (start_hint.rect.left() == plot_left
            && end_hint.rect.right() == plot_last)
            || (end_hint.rect.left() == plot_left && start_hint.rect.right() == plot_last);
        if spans_whole_plot {
            middle = self.range.visible_start_time() + self.range.visible_range() / 2;
        }

        let duration_text = self
            .formatter
            .format_duration(self.duration_template, diff);
        let duration_hint = self.hint_box(duration_text, middle);

        let overlaps = start_hint.rect.intersects(end_hint.rect)
            || start_hint.rect.intersects(duration_hint.rect)
            || end_hint.rect.intersects(duration_hint.rect);

        if overlaps {
            let (earlier, later) = if end > start {
                (&start_hint.text, &end_hint.text)
            } else {
                (&end_hint.text, &start_hint.text)
            };
            let combined = format!("{earlier} - {later} ({})", duration_hint.text);
            return HintPlacement::Combined(self.hint_box(combined, start));
        }

        HintPlacement::Separate {
            start: start_hint,
            end: end_hint,
            duration: duration_hint,
        }
    }

    /// Formats `time` and marks values outside the visible window.
    #[must_use]
    pub fn decorated_time(&self, time: u64) -> String {
        let text = self.formatter.format_time(time);
        if time < self.range.visible_start_time() {
            format!("{BEFORE_WINDOW_GLYPH} {text}")
        } else if time > self.range.visible_end_time() {
            format!("{text} {AFTER_WINDOW_GLYPH}")
        } else {
            text
        }
    }

    /// Hint rect for a label of `text_width` pixels anchored at `time`.
    #[must_use]
    pub fn hint_rect(&self, text_width: i32, time: u64) -> PixelRect {
        let plot_left = self.layout.grid_label_space();
        let plot_right = self.layout.plot_right();
        let visible_start = self.range.visible_start_time();

        let x = if time < visible_start {
            plot_left
        } else if time > self.range.visible_end_time() {
            plot_right - text_width
        } else {
            let visible_range = self.range.visible_range();
            let fraction = if visible_range == 0 {
                0.0
            } else {
                (time - visible_start) as f64 / visible_range as f64
            };
            let x = plot_left + (f64::from(self.layout.grid_space()) * fraction) as i32
                - text_width / 2;
            if x < plot_left {
                plot_left
            } else if x + text_width > plot_right {
                plot_right - text_width
            } else {
                x
            }
        };

        PixelRect::new(
            x,
            self.layout.hint_top(),
            text_width,
            self.layout.num_text_height(),
        )
    }

    fn hint_box(&self, text: String, time: u64) -> HintBox {
        let width = self.metrics.text_width_px(&text, self.font_size_px);
        HintBox {
            rect: self.hint_rect(width, time),
            text,
        }
    }
}

fn double_arrow_segments(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    size: i32,
) -> [(i32, i32, i32, i32); 5] {
    [
        (x1, y1, x2, y2),
        (x1, y1, x1 + size, y1 - size),
        (x1, y1, x1 + size, y1 + size),
        (x2, y2, x2 - size, y2 - size),
        (x2, y2, x2 - size, y2 + size),
    ]
}

#[cfg(test)]
mod tests {
    use super::{HintContext, HintPlacement};
    use crate::api::grid_layout::GridLayout;
    use crate::core::{PixelRect, TimeRangeState, ValueFormatter};
    use crate::render::MonospaceMetrics;

    struct Fixture {
        layout: GridLayout,
        range: TimeRangeState,
        formatter: ValueFormatter,
        metrics: MonospaceMetrics,
    }

    impl Fixture {
        fn new(width: i32, visible_start: u64, visible_range: u64) -> Self {
            let mut layout = GridLayout::new(50, 0, Some(4), 0);
            layout.num_text_height = 14;
            layout.update_line_heights(50);
            layout.recalculate_divisions(width);

            let mut range = TimeRangeState::new();
            range.set_full_range(1_000);
            range.set_visible_start_time(visible_start);
            range.set_visible_range(visible_range);

            Self {
                layout,
                range,
                formatter: ValueFormatter::new(0, 1),
                metrics: MonospaceMetrics::new(7.0, 14.0),
            }
        }

        fn context(&self) -> HintContext<'_, MonospaceMetrics> {
            HintContext {
                layout: &self.layout,
                range: &self.range,
                formatter: &self.formatter,
                metrics: &self.metrics,
                font_size_px: 11.0,
                duration_template: "{} units",
            }
        }
    }

    #[test]
    fn inside_value_centers_on_its_pixel() {
        let fixture = Fixture::new(450, 0, 100);
        let rect = fixture.context().hint_rect(20, 50);
        assert_eq!(rect.x, 50 + 200 - 10);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 14);
    }

    #[test]
    fn values_pin_to_plot_edges() {
        let fixture = Fixture::new(450, 100, 100);
        let context = fixture.context();
        assert_eq!(context.hint_rect(30, 10).x, 50);
        assert_eq!(context.hint_rect(30, 900).x, 450 - 30);
        assert_eq!(context.hint_rect(30, 100).x, 50);
        assert_eq!(context.hint_rect(30, 200).x, 450 - 30);
    }

    #[test]
    fn zero_visible_range_pins_left() {
        let fixture = Fixture::new(450, 300, 0);
        assert_eq!(fixture.context().hint_rect(20, 300).x, 50);
    }

    #[test]
    fn out_of_window_values_carry_direction_glyphs() {
        let fixture = Fixture::new(450, 100, 100);
        let context = fixture.context();
        assert_eq!(context.decorated_time(50), "\u{25C4} 50");
        assert_eq!(context.decorated_time(250), "250 \u{25BA}");
        assert_eq!(context.decorated_time(150), "150");
    }

    #[test]
    fn wide_plot_keeps_boxes_separate() {
        let fixture = Fixture::new(850, 0, 100);
        match fixture.context().place(10, 90) {
            HintPlacement::Separate {
                start,
                end,
                duration,
            } => {
                assert_eq!(start.text, "10");
                assert_eq!(end.text, "90");
                assert_eq!(duration.text, "80 units");
                assert!(!start.rect.intersects(end.rect));
                assert!(start.rect.x < duration.rect.x && duration.rect.x < end.rect.x);
            }
            other => panic!("expected separate hints, got {other:?}"),
        }
    }

    #[test]
    fn narrow_plot_collapses_to_combined_label() {
        let fixture = Fixture::new(110, 0, 100);
        match fixture.context().place(90, 10) {
            HintPlacement::Combined(hint) => {
                assert_eq!(hint.text, "10 - 90 (80 units)");
                assert_eq!(hint.rect.width, 18 * 7);
            }
            other => panic!("expected combined hint, got {other:?}"),
        }
    }

    #[test]
    fn edge_to_edge_pair_moves_duration_to_window_middle() {
        let fixture = Fixture::new(850, 100, 100);
        match fixture.context().place(10, 900) {
            HintPlacement::Separate { duration, .. } => {
                let width = duration.rect.width;
                assert_eq!(duration.rect.x, 50 + 400 - width / 2);
            }
            other => panic!("expected separate hints, got {other:?}"),
        }
    }

    #[test]
    fn arrow_joins_inner_edges_of_start_and_end() {
        let fixture = Fixture::new(850, 0, 100);
        let placement = fixture.context().place(10, 90);
        let segments = placement.arrow_segments().expect("arrow");
        let HintPlacement::Separate { start, end, .. } = &placement else {
            panic!("expected separate hints");
        };
        let middle = start.rect.vertical_middle();
        assert_eq!(
            segments[0],
            (start.rect.right() + 1, middle, end.rect.left() - 1, middle)
        );
        assert_eq!(
            segments[1],
            (start.rect.right() + 1, middle, start.rect.right() + 4, middle - 3)
        );
    }

    #[test]
    fn clear_rect_spans_both_boxes() {
        let fixture = Fixture::new(850, 0, 100);
        let placement = fixture.context().place(10, 90);
        let clear = placement.clear_rect().expect("clear rect");
        let HintPlacement::Separate { start, end, .. } = &placement else {
            panic!("expected separate hints");
        };
        assert_eq!(clear.left(), start.rect.left());
        assert_eq!(clear.right(), end.rect.right());
        let width = end.rect.right() - start.rect.x + 1;
        assert_eq!(clear, PixelRect::new(start.rect.x, start.rect.y, width, 14));
    }

    #[test]
    fn single_point_has_no_arrow() {
        let fixture = Fixture::new(850, 0, 100);
        let placement = fixture.context().place(40, 40);
        assert!(matches!(placement, HintPlacement::Single(_)));
        assert!(placement.arrow_segments().is_none());
        assert!(placement.clear_rect().is_none());
        assert_eq!(placement.boxes().len(), 1);
    }
}
