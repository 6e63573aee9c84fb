use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::TimelineGrid;
use crate::core::Viewport;
use crate::error::{GridError, GridResult};
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a [`TimelineGrid`] inside a GTK4 `DrawingArea`.
///
/// The grid is shared with the draw callback through `Rc<RefCell<_>>`, so all
/// access stays on the GTK main thread. The widget's own background shows
/// through wherever the grid paints nothing.
pub struct GtkTimelineAdapter<R: Renderer + CairoContextRenderer + 'static> {
    grid: Rc<RefCell<TimelineGrid<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkTimelineAdapter<R> {
    #[must_use]
    pub fn new(grid: TimelineGrid<R>) -> Self {
        let preferred = grid.size_hint();
        let grid = Rc::new(RefCell::new(grid));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_content_height(preferred.height_px());

        drawing_area.set_draw_func({
            let grid = Rc::clone(&grid);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut grid) = grid.try_borrow_mut() else {
                    return;
                };

                let viewport = Viewport::new(width.unsigned_abs(), height.unsigned_abs());
                if grid.viewport() != viewport {
                    grid.resize(viewport);
                }
                if let Err(err) = grid.render_on_cairo_context(context) {
                    warn!(error = %err, "timeline grid draw failed");
                }
            }
        });

        Self { grid, drawing_area }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn grid(&self) -> Rc<RefCell<TimelineGrid<R>>> {
        Rc::clone(&self.grid)
    }

    /// Applies `update` to the grid and schedules a redraw.
    pub fn update_grid<F>(&self, update: F) -> GridResult<()>
    where
        F: FnOnce(&mut TimelineGrid<R>) -> GridResult<()>,
    {
        let mut grid = self
            .grid
            .try_borrow_mut()
            .map_err(|_| GridError::Backend("timeline grid is already borrowed".to_owned()))?;
        update(&mut grid)?;
        drop(grid);
        self.drawing_area.queue_draw();
        Ok(())
    }

    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }

    /// Calls `handler` with the time under every primary-button press inside
    /// the plot area.
    pub fn connect_pointer_time<F>(&self, handler: F)
    where
        F: Fn(u64) + 'static,
    {
        let click = gtk::GestureClick::new();
        let grid = Rc::clone(&self.grid);
        click.connect_pressed(move |_, _n_press, x, _y| {
            let time = match grid.try_borrow() {
                Ok(grid) => grid.time_at_x(x),
                Err(_) => None,
            };
            if let Some(time) = time {
                handler(time);
            }
        });
        self.drawing_area.add_controller(click);
    }
}
