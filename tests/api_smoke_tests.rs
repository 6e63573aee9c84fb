use approx::assert_relative_eq;
use timeline_grid::api::{GridStyle, TimelineGrid, TimelineGridConfig, TimelineWidget};
use timeline_grid::core::Viewport;
use timeline_grid::render::{MonospaceMetrics, NullRenderer};
use timeline_grid::GridError;

fn quarter_grid() -> TimelineGrid<NullRenderer> {
    let config = TimelineGridConfig::new(Viewport::new(450, 50)).with_large_division_count(4);
    let mut grid = TimelineGrid::new(NullRenderer::default(), config).expect("grid init");
    grid.set_full_range(100);
    grid.set_visible_range(100);
    grid
}

#[test]
fn grid_smoke_flow() {
    let mut grid = quarter_grid();
    grid.set_start_time(0);
    grid.set_visible_start_time(0);
    grid.render().expect("render should succeed");

    let renderer = grid.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    // 5 primary, 20 secondary, 1 border.
    assert_eq!(renderer.last_line_count, 26);
    // Single selection box.
    assert_eq!(renderer.last_rect_count, 1);
    // 5 tick labels, selection text, caption.
    assert_eq!(renderer.last_text_count, 7);
}

#[test]
fn zero_sized_widget_skips_rendering() {
    let mut grid = quarter_grid();
    grid.resize(Viewport::new(0, 0));
    grid.render().expect("zero-size render is a no-op");
    assert_eq!(grid.renderer().frames_rendered, 0);
}

#[test]
fn pointer_x_maps_into_visible_window() {
    let grid = quarter_grid();
    assert_eq!(grid.time_at_x(50.0), Some(0));
    assert_eq!(grid.time_at_x(250.0), Some(50));
    assert_eq!(grid.time_at_x(450.0), Some(100));
    assert_eq!(grid.time_at_x(49.5), None);
    assert_eq!(grid.time_at_x(450.5), None);
    assert_eq!(grid.time_at_x(f64::NAN), None);
}

#[test]
fn widget_trait_drives_resize_and_paint() {
    let mut grid = quarter_grid();
    let widget: &mut dyn TimelineWidget = &mut grid;
    assert_eq!(widget.size_hint(), Viewport::new(0, 50));

    widget.resize(Viewport::new(850, 60));
    assert_eq!(widget.viewport(), Viewport::new(850, 60));
    assert!(!widget.paint().is_empty());

    assert_eq!(grid.layout().grid_space(), 800);
    assert_eq!(grid.layout().long_line_height(), 60 - 14 - 4);
}

#[test]
fn invalid_config_is_rejected_on_construction() {
    let config = TimelineGridConfig::new(Viewport::new(450, 50)).with_precision(40);
    let err = TimelineGrid::new(NullRenderer::default(), config)
        .err()
        .expect("precision must be bounded");
    assert!(matches!(err, GridError::InvalidConfig(_)));
}

#[test]
fn invalid_style_is_rejected_and_previous_kept() {
    let mut grid = quarter_grid();
    let before = grid.style();
    let err = grid
        .set_style(GridStyle {
            font_size_px: 0.0,
            ..before
        })
        .expect_err("zero font size must fail");
    assert!(matches!(err, GridError::InvalidConfig(_)));
    assert_eq!(grid.style(), before);
}

#[test]
fn config_json_round_trip_builds_equivalent_grid() {
    let config = TimelineGridConfig::new(Viewport::new(640, 48))
        .with_grid_label("frames")
        .with_duration_hint_label("{} frames")
        .with_precision(1)
        .with_scaling_factor(25)
        .with_small_division_count(2);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = TimelineGridConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);

    let grid = TimelineGrid::new(NullRenderer::default(), parsed).expect("grid init");
    assert_eq!(grid.grid_label(), "frames");
    assert_eq!(grid.duration_hint_label(), "{} frames");
    assert_eq!(grid.scaling_factor(), 25);
    assert_eq!(grid.precision(), 1);
    assert_eq!(grid.small_division_count(), 2);
}

#[test]
fn label_width_tracks_precision_and_metrics() {
    let config = TimelineGridConfig::new(Viewport::new(450, 50)).with_precision(0);
    let renderer = NullRenderer::with_metrics(MonospaceMetrics::new(10.0, 16.0));
    let mut grid = TimelineGrid::new(renderer, config).expect("grid init");
    grid.set_full_range(1_000);
    assert_relative_eq!(grid.layout().max_text_width(), 4.0 * 10.0 * 1.75);
    assert_eq!(grid.layout().num_text_height(), 16);

    grid.set_precision(2);
    assert_relative_eq!(grid.layout().max_text_width(), 7.0 * 10.0 * 1.75);
}

#[test]
fn negative_spacing_setters_clamp_to_zero() {
    let mut grid = quarter_grid();
    grid.set_grid_label_space(-20);
    grid.set_right_margin(-5);
    assert_eq!(grid.grid_label_space(), 0);
    assert_eq!(grid.right_margin(), 0);
    assert_eq!(grid.layout().grid_space(), 450);
}
