use crate::error::{GridError, GridResult};

use super::{GridStyle, TimelineGridConfig};

/// Largest fractional digit count accepted for displayed values.
pub const MAX_LABEL_PRECISION: usize = 17;

pub(super) fn validate_grid_style(style: GridStyle) -> GridResult<()> {
    style.foreground_color.validate()?;
    style.tooltip_background_color.validate()?;
    style.background_color.validate()?;

    if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
        return Err(GridError::InvalidConfig(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
        return Err(GridError::InvalidConfig(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_config(config: &TimelineGridConfig) -> GridResult<()> {
    if config.grid_label_space < 0 {
        return Err(GridError::InvalidConfig(format!(
            "grid label space must be >= 0, got {}",
            config.grid_label_space
        )));
    }
    if config.right_margin < 0 {
        return Err(GridError::InvalidConfig(format!(
            "right margin must be >= 0, got {}",
            config.right_margin
        )));
    }
    if config.precision > MAX_LABEL_PRECISION {
        return Err(GridError::InvalidConfig(format!(
            "precision must be <= {MAX_LABEL_PRECISION}, got {}",
            config.precision
        )));
    }
    validate_grid_style(config.style)
}
