use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::axis_tick_layout::{TickLayout, build_tick_layout};
use super::grid_layout::GRID_MARGIN;
use super::hint_layout::{HintContext, HintPlacement};
use super::TimelineGrid;

/// Width of the column the caption is centered in.
const CAPTION_COLUMN_PX: i32 = 20;

impl<R: Renderer> TimelineGrid<R> {
    /// Builds the backend-agnostic scene for the current state.
    ///
    /// Pure with respect to widget state. A manual division count of zero
    /// yields an empty frame.
    #[must_use]
    pub fn paint(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);

        let Some(ticks) = build_tick_layout(
            &self.layout,
            &self.range,
            &self.formatter,
            self.viewport.width_px(),
        ) else {
            return frame;
        };

        self.push_ticks(&mut frame, &ticks);

        if self.show_time_hint {
            let context = self.hint_context();
            for (start, end) in self.markers.visible_hint_pairs(&self.range) {
                let placement = context.place(start, end);
                self.push_hint(&mut frame, CanvasLayerKind::MarkerHints, &placement, false);
            }
            let selection =
                context.place(self.range.selected_time(), self.range.end_selected_time());
            self.push_hint(&mut frame, CanvasLayerKind::SelectionHints, &selection, true);
        }

        self.push_border_and_caption(&mut frame, ticks.right_x);
        frame
    }

    fn hint_context(&self) -> HintContext<'_, R> {
        HintContext {
            layout: &self.layout,
            range: &self.range,
            formatter: &self.formatter,
            metrics: &self.renderer,
            font_size_px: self.style.font_size_px,
            duration_template: &self.duration_hint_label,
        }
    }

    fn push_ticks(&self, frame: &mut RenderFrame, ticks: &TickLayout) {
        let color = self.style.foreground_color;
        let stroke = self.style.stroke_width;
        let font = self.style.font_size_px;

        for tick in &ticks.primary {
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::from_px(tick.x, tick.top, tick.x, tick.bottom, stroke, color),
            );
            if let Some(label) = &tick.label {
                frame.push_text(
                    CanvasLayerKind::Grid,
                    TextPrimitive::new(
                        label.text.clone(),
                        f64::from(label.x),
                        f64::from(label.y),
                        font,
                        color,
                        label.align,
                    ),
                );
            }
        }

        for x in &ticks.secondary_x {
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::from_px(
                    *x,
                    ticks.secondary_top,
                    *x,
                    ticks.secondary_bottom,
                    stroke,
                    color,
                ),
            );
        }
    }

    fn push_hint(
        &self,
        frame: &mut RenderFrame,
        kind: CanvasLayerKind,
        placement: &HintPlacement,
        clear_background: bool,
    ) {
        let style = self.style;

        if clear_background {
            if let Some(clear) = placement.clear_rect() {
                frame.push_backdrop(
                    kind,
                    RectPrimitive::from_pixel_rect(clear, style.background_color),
                );
            }
        }

        // The arrow runs under the boxes it connects.
        if let Some(segments) = placement.arrow_segments() {
            for (x1, y1, x2, y2) in segments {
                frame.push_connector(
                    kind,
                    LinePrimitive::from_px(
                        x1,
                        y1,
                        x2,
                        y2,
                        style.stroke_width,
                        style.foreground_color,
                    ),
                );
            }
        }

        for hint in placement.boxes() {
            frame.push_rect(
                kind,
                RectPrimitive::from_pixel_rect(hint.rect, style.tooltip_background_color),
            );
            if !hint.text.is_empty() {
                frame.push_text(
                    kind,
                    TextPrimitive::centered_in(
                        hint.text.clone(),
                        hint.rect,
                        style.font_size_px,
                        style.foreground_color,
                    ),
                );
            }
        }
    }

    fn push_border_and_caption(&self, frame: &mut RenderFrame, right_x: i32) {
        let color = self.style.foreground_color;

        if right_x > 0 {
            frame.push_line(
                CanvasLayerKind::Axis,
                LinePrimitive::from_px(
                    self.layout.grid_label_space(),
                    GRID_MARGIN,
                    right_x,
                    GRID_MARGIN,
                    self.style.stroke_width,
                    color,
                ),
            );
        }

        if self.grid_label.is_empty() {
            return;
        }
        let column_left = right_x - self.layout.right_margin();
        let top = (self.viewport.height_px() - self.layout.num_text_height()) / 2;
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                self.grid_label.clone(),
                f64::from(column_left) + f64::from(CAPTION_COLUMN_PX) / 2.0,
                f64::from(top),
                self.style.font_size_px,
                color,
                TextHAlign::Center,
            ),
        );
    }
}
