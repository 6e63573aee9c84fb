use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LABEL_PRECISION, Viewport};
use crate::error::{GridError, GridResult};
use crate::render::Color;

/// Width in pixels reserved left of the plot when no explicit space is set.
pub const DEFAULT_GRID_LABEL_SPACE: i32 = 50;
pub const DEFAULT_LARGE_DIVISION_COUNT: u32 = 10;
pub const DEFAULT_SMALL_DIVISION_COUNT: u32 = 5;

/// Colors and font used by one timeline paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    /// Tick lines, labels, arrow and caption.
    pub foreground_color: Color,
    /// Fill behind every hint box.
    pub tooltip_background_color: Color,
    /// Fill used to clear the area under selection hints.
    pub background_color: Color,
    pub font_size_px: f64,
    pub stroke_width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            foreground_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_background_color: Color::rgb(1.0, 1.0, 0.86),
            background_color: Color::rgb(0.94, 0.94, 0.94),
            font_size_px: 11.0,
            stroke_width: 1.0,
        }
    }
}

/// Public widget bootstrap configuration.
///
/// The type is serializable so hosts can persist/load grid setup without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineGridConfig {
    pub viewport: Viewport,
    #[serde(default = "default_grid_label")]
    pub grid_label: String,
    #[serde(default = "default_duration_hint_label")]
    pub duration_hint_label: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: u64,
    #[serde(default = "default_grid_label_space")]
    pub grid_label_space: i32,
    #[serde(default)]
    pub right_margin: i32,
    /// `None` lets the widget derive the count from the available width.
    #[serde(default)]
    pub large_division_count: Option<u32>,
    #[serde(default = "default_small_division_count")]
    pub small_division_count: u32,
    #[serde(default = "default_show_time_hint")]
    pub show_time_hint: bool,
    #[serde(default)]
    pub style: GridStyle,
}

impl Default for TimelineGridConfig {
    fn default() -> Self {
        Self::new(Viewport::new(0, 50))
    }
}

impl TimelineGridConfig {
    /// Creates a config with default captions, precision and auto divisions.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grid_label: default_grid_label(),
            duration_hint_label: default_duration_hint_label(),
            precision: default_precision(),
            scaling_factor: default_scaling_factor(),
            grid_label_space: default_grid_label_space(),
            right_margin: 0,
            large_division_count: None,
            small_division_count: default_small_division_count(),
            show_time_hint: default_show_time_hint(),
            style: GridStyle::default(),
        }
    }

    #[must_use]
    pub fn with_grid_label(mut self, label: impl Into<String>) -> Self {
        self.grid_label = label.into();
        self
    }

    /// Sets the duration template; `{}` is replaced by the formatted value.
    #[must_use]
    pub fn with_duration_hint_label(mut self, template: impl Into<String>) -> Self {
        self.duration_hint_label = template.into();
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_scaling_factor(mut self, scaling_factor: u64) -> Self {
        self.scaling_factor = scaling_factor;
        self
    }

    #[must_use]
    pub fn with_grid_label_space(mut self, px: i32) -> Self {
        self.grid_label_space = px;
        self
    }

    #[must_use]
    pub fn with_right_margin(mut self, px: i32) -> Self {
        self.right_margin = px;
        self
    }

    /// Pins the primary division count and disables auto-calculation.
    #[must_use]
    pub fn with_large_division_count(mut self, count: u32) -> Self {
        self.large_division_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_small_division_count(mut self, count: u32) -> Self {
        self.small_division_count = count;
        self
    }

    #[must_use]
    pub fn with_show_time_hint(mut self, show: bool) -> Self {
        self.show_time_hint = show;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    pub fn from_json_str(input: &str) -> GridResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| GridError::InvalidConfig(format!("failed to parse config: {err}")))
    }

    pub fn to_json_pretty(&self) -> GridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| GridError::InvalidConfig(format!("failed to serialize config: {err}")))
    }
}

fn default_grid_label() -> String {
    "Scale".to_owned()
}

fn default_duration_hint_label() -> String {
    "{} units".to_owned()
}

fn default_precision() -> usize {
    DEFAULT_LABEL_PRECISION
}

fn default_scaling_factor() -> u64 {
    1
}

fn default_grid_label_space() -> i32 {
    DEFAULT_GRID_LABEL_SPACE
}

fn default_small_division_count() -> u32 {
    DEFAULT_SMALL_DIVISION_COUNT
}

fn default_show_time_hint() -> bool {
    true
}
