use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL_PRECISION: usize = 3;

/// Placeholder replaced by the formatted duration inside a duration template.
pub const DURATION_PLACEHOLDER: &str = "{}";

/// Fixed-point formatter for displayed time values.
///
/// Values are divided by the scaling factor for display only. A factor of
/// `0` is normalized to `1`; the inverse is cached so formatting multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueFormatter {
    precision: usize,
    scaling_factor: u64,
    inverse_scaling_factor: f64,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_PRECISION, 1)
    }
}

impl ValueFormatter {
    #[must_use]
    pub fn new(precision: usize, scaling_factor: u64) -> Self {
        let mut formatter = Self {
            precision,
            scaling_factor: 1,
            inverse_scaling_factor: 1.0,
        };
        formatter.set_scaling_factor(scaling_factor);
        formatter
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    #[must_use]
    pub fn scaling_factor(&self) -> u64 {
        self.scaling_factor
    }

    #[must_use]
    pub fn inverse_scaling_factor(&self) -> f64 {
        self.inverse_scaling_factor
    }

    /// Sets the display divisor. Returns `false` when `0` had to be replaced.
    pub fn set_scaling_factor(&mut self, scaling_factor: u64) -> bool {
        let accepted = scaling_factor != 0;
        self.scaling_factor = scaling_factor.max(1);
        self.inverse_scaling_factor = 1.0 / self.scaling_factor as f64;
        accepted
    }

    /// Formats a stored time value.
    #[must_use]
    pub fn format_time(&self, time: u64) -> String {
        self.format_value(time as f64)
    }

    /// Formats an unscaled fractional time, such as an interpolated tick value.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        format!(
            "{:.*}",
            self.precision,
            value * self.inverse_scaling_factor
        )
    }

    /// Formats `duration` and substitutes it into `template`.
    ///
    /// Only the first placeholder is replaced. A template without one is
    /// returned with the value appended after a space.
    #[must_use]
    pub fn format_duration(&self, template: &str, duration: u64) -> String {
        let value = self.format_time(duration);
        if template.contains(DURATION_PLACEHOLDER) {
            template.replacen(DURATION_PLACEHOLDER, &value, 1)
        } else if template.is_empty() {
            value
        } else {
            format!("{template} {value}")
        }
    }
}
