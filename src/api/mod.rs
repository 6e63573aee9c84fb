mod axis_tick_layout;
mod division_controller;
mod grid_config;
mod grid_layout;
mod hint_layout;
mod range_controller;
mod render_frame_builder;
mod timeline_grid;
mod validation;
mod widget;

pub use axis_tick_layout::{PrimaryTick, TickLabel, TickLayout, build_tick_layout};
pub use grid_config::{
    DEFAULT_GRID_LABEL_SPACE, DEFAULT_LARGE_DIVISION_COUNT, DEFAULT_SMALL_DIVISION_COUNT,
    GridStyle, TimelineGridConfig,
};
pub use grid_layout::{GRID_MARGIN, GridLayout, LABEL_WIDTH_BUFFER};
pub use hint_layout::{
    AFTER_WINDOW_GLYPH, ARROW_HEAD_PX, BEFORE_WINDOW_GLYPH, HintBox, HintContext, HintPlacement,
};
pub use timeline_grid::{PREFERRED_HEIGHT_PX, TimelineGrid};
pub use validation::MAX_LABEL_PRECISION;
pub use widget::TimelineWidget;
