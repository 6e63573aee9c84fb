pub mod format;
pub mod geometry;
pub mod markers;
pub mod time_range;
pub mod types;

pub use format::{DEFAULT_LABEL_PRECISION, DURATION_PLACEHOLDER, ValueFormatter};
pub use geometry::PixelRect;
pub use markers::MarkerSet;
pub use time_range::TimeRangeState;
pub use types::Viewport;
