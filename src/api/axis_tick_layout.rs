use crate::core::{TimeRangeState, ValueFormatter};
use crate::render::TextHAlign;

use super::grid_layout::{GRID_MARGIN, GridLayout};

/// Horizontal gap between an edge tick and its label.
const EDGE_LABEL_GAP_PX: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Anchor X interpreted through `align`.
    pub x: i32,
    pub y: i32,
    pub align: TextHAlign,
}

/// One primary division: a long line plus an optional value label.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryTick {
    pub index: u32,
    pub x: i32,
    /// Unscaled time at this division.
    pub time: f64,
    pub top: i32,
    pub bottom: i32,
    /// Whether the line is lengthened to anchor a full-range boundary.
    pub extended: bool,
    pub label: Option<TickLabel>,
}

/// Tick geometry for one paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLayout {
    pub primary: Vec<PrimaryTick>,
    /// X positions of secondary (unlabeled) divisions.
    pub secondary_x: Vec<i32>,
    pub secondary_top: i32,
    pub secondary_bottom: i32,
    /// Exact X of the final primary tick, reused for the border and caption.
    pub right_x: i32,
}

/// Lays out primary and secondary ticks across the usable span.
///
/// Returns `None` when the primary division count is zero.
#[must_use]
pub fn build_tick_layout(
    layout: &GridLayout,
    range: &TimeRangeState,
    formatter: &ValueFormatter,
    widget_width: i32,
) -> Option<TickLayout> {
    let large = layout.large_division_count();
    if large == 0 {
        return None;
    }
    // No more divisions than plot pixels.
    let max_divisions = u32::try_from(layout.grid_space().max(1)).unwrap_or(1);
    let large = large.min(max_divisions);

    let unit_width = f64::from(layout.grid_space()) / f64::from(large);
    let unit_range = range.visible_range() as f64 / f64::from(large);
    let small = layout.small_division_count();
    let short_step = if small > 0 {
        (unit_width / f64::from(small)) as i32
    } else {
        0
    };
    // Secondary ticks need at least one pixel between them.
    let small = if short_step > 0 { small } else { 0 };

    let long_top = GRID_MARGIN;
    let long_bottom = GRID_MARGIN + layout.long_line_height();
    let label_y = layout.long_line_height() + GRID_MARGIN;

    let mut primary = Vec::with_capacity(large as usize + 1);
    let mut secondary_x = Vec::with_capacity((large as usize).saturating_mul(small as usize));
    let mut right_x = 0;

    for index in 0..=large {
        let offset = (f64::from(index) * unit_width).round() as i32;
        let is_last = index == large;

        let (x, time, extended) = if is_last {
            right_x = widget_width - 1 - layout.right_margin();
            (
                right_x,
                range.visible_end_time() as f64,
                range.shows_full_end(),
            )
        } else {
            (
                layout.grid_label_space() + offset,
                range.visible_start_time() as f64 + unit_range * f64::from(index),
                index == 0 && range.shows_full_start(),
            )
        };

        let bottom = if extended {
            long_bottom + layout.num_text_height()
        } else {
            long_bottom
        };

        let label = if is_last && !layout.paints_end_time() {
            None
        } else {
            let (anchor_x, align) = if index == 0 {
                (x + EDGE_LABEL_GAP_PX, TextHAlign::Left)
            } else if is_last {
                (x - EDGE_LABEL_GAP_PX, TextHAlign::Right)
            } else {
                (x, TextHAlign::Center)
            };
            Some(TickLabel {
                text: formatter.format_value(time),
                x: anchor_x,
                y: label_y,
                align,
            })
        };

        primary.push(PrimaryTick {
            index,
            x,
            time,
            top: long_top,
            bottom,
            extended,
            label,
        });

        if !is_last {
            let base = layout.grid_label_space() + offset;
            secondary_x.extend((0..small).map(|step| base + step as i32 * short_step));
        }
    }

    Some(TickLayout {
        primary,
        secondary_x,
        secondary_top: long_top,
        secondary_bottom: GRID_MARGIN + layout.short_line_height(),
        right_x,
    })
}

#[cfg(test)]
mod tests {
    use super::build_tick_layout;
    use crate::api::grid_layout::GridLayout;
    use crate::core::{TimeRangeState, ValueFormatter};
    use crate::render::TextHAlign;

    fn range(full: u64, visible_start: u64, visible: u64) -> TimeRangeState {
        let mut range = TimeRangeState::new();
        range.set_full_range(full);
        range.set_visible_start_time(visible_start);
        range.set_visible_range(visible);
        range
    }

    fn layout(width: i32, large: u32, small: u32) -> GridLayout {
        let mut layout = GridLayout::new(50, 0, Some(large), small);
        layout.num_text_height = 14;
        layout.update_line_heights(50);
        layout.recalculate_divisions(width);
        layout
    }

    #[test]
    fn zero_divisions_yield_no_layout() {
        let layout = layout(450, 0, 5);
        let ticks =
            build_tick_layout(&layout, &range(100, 0, 100), &ValueFormatter::default(), 450);
        assert!(ticks.is_none());
    }

    #[test]
    fn labels_align_left_center_right() {
        let layout = layout(450, 4, 0);
        let ticks = build_tick_layout(&layout, &range(100, 0, 100), &ValueFormatter::default(), 450)
            .expect("ticks");
        let aligns: Vec<TextHAlign> = ticks
            .primary
            .iter()
            .filter_map(|tick| tick.label.as_ref().map(|label| label.align))
            .collect();
        assert_eq!(
            aligns,
            vec![
                TextHAlign::Left,
                TextHAlign::Center,
                TextHAlign::Center,
                TextHAlign::Center,
                TextHAlign::Right,
            ]
        );
        assert_eq!(ticks.primary[0].label.as_ref().map(|l| l.x), Some(52));
        assert_eq!(ticks.primary[4].label.as_ref().map(|l| l.x), Some(447));
    }

    #[test]
    fn boundary_ticks_extend_only_at_full_range_edges() {
        let layout = layout(450, 4, 0);
        let full = build_tick_layout(&layout, &range(100, 0, 100), &ValueFormatter::default(), 450)
            .expect("ticks");
        assert!(full.primary[0].extended);
        assert!(full.primary[4].extended);
        assert!(!full.primary[2].extended);
        assert_eq!(full.primary[0].bottom - full.primary[2].bottom, 14);

        let zoomed =
            build_tick_layout(&layout, &range(1_000, 100, 100), &ValueFormatter::default(), 450)
                .expect("ticks");
        assert!(!zoomed.primary[0].extended);
        assert!(!zoomed.primary[4].extended);
    }

    #[test]
    fn secondary_ticks_fill_every_gap_but_the_last() {
        let layout = layout(450, 4, 5);
        let ticks = build_tick_layout(&layout, &range(100, 0, 100), &ValueFormatter::default(), 450)
            .expect("ticks");
        assert_eq!(ticks.secondary_x.len(), 20);
        assert_eq!(&ticks.secondary_x[..5], &[50, 70, 90, 110, 130]);
        assert!(ticks.secondary_x.iter().all(|x| *x < 449));
    }

    #[test]
    fn primary_count_is_capped_at_plot_width() {
        let layout = layout(450, u32::MAX, 0);
        let ticks = build_tick_layout(&layout, &range(100, 0, 100), &ValueFormatter::default(), 450)
            .expect("ticks");
        assert_eq!(ticks.primary.len(), 401);
        assert_eq!(ticks.primary[1].x, 51);
        assert_eq!(ticks.right_x, 449);
    }

    #[test]
    fn sub_pixel_secondary_steps_are_skipped() {
        let dense = layout(450, 4, u32::MAX);
        let ticks = build_tick_layout(&dense, &range(100, 0, 100), &ValueFormatter::default(), 450)
            .expect("ticks");
        assert_eq!(ticks.primary.len(), 5);
        assert!(ticks.secondary_x.is_empty());

        let both = layout(450, u32::MAX, u32::MAX);
        let ticks = build_tick_layout(&both, &range(100, 0, 100), &ValueFormatter::default(), 450)
            .expect("ticks");
        assert_eq!(ticks.primary.len(), 401);
        assert!(ticks.secondary_x.is_empty());
    }
}
