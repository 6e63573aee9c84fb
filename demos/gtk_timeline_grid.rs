#[cfg(feature = "gtk4-adapter")]
fn main() {
    use std::cell::Cell;
    use std::rc::Rc;

    use gtk4 as gtk;
    use gtk4::prelude::*;

    use timeline_grid::api::{TimelineGrid, TimelineGridConfig};
    use timeline_grid::core::Viewport;
    use timeline_grid::platform_gtk::GtkTimelineAdapter;
    use timeline_grid::render::CairoRenderer;

    let _ = timeline_grid::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.timeline_grid.demos.basic")
        .build();

    app.connect_activate(|app| {
        let renderer = match CairoRenderer::new(960, 50) {
            Ok(renderer) => renderer,
            Err(err) => {
                eprintln!("failed to create renderer: {err}");
                return;
            }
        };
        let config = TimelineGridConfig::new(Viewport::new(960, 50))
            .with_grid_label("ms")
            .with_duration_hint_label("{} ms")
            .with_precision(1)
            .with_right_margin(24);
        let mut grid = match TimelineGrid::new(renderer, config) {
            Ok(grid) => grid,
            Err(err) => {
                eprintln!("failed to initialize timeline grid: {err}");
                return;
            }
        };
        grid.set_full_range(12_000);
        grid.set_visible_start_time(2_000);
        grid.set_visible_range(6_000);
        for marker in [2_500, 3_100, 5_800] {
            grid.add_marker(marker);
        }

        let adapter = Rc::new(GtkTimelineAdapter::new(grid));

        // Alternate clicks set the selection start and end.
        let pick_end = Rc::new(Cell::new(false));
        adapter.connect_pointer_time({
            let adapter = Rc::clone(&adapter);
            move |time| {
                let end = pick_end.get();
                pick_end.set(!end);
                let result = adapter.update_grid(|grid| {
                    if end {
                        grid.set_end_selected_time(time);
                    } else {
                        grid.set_selected_time(time);
                        grid.set_end_selected_time(time);
                    }
                    Ok(())
                });
                if let Err(err) = result {
                    eprintln!("selection update failed: {err}");
                }
            }
        });

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("timeline-grid | demo")
            .default_width(960)
            .default_height(80)
            .build();
        window.set_child(Some(adapter.drawing_area()));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_timeline_grid");
}
