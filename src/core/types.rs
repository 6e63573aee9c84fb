use serde::{Deserialize, Serialize};

/// Pixel size of the widget surface as reported by the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width as signed pixels, saturating for surfaces wider than `i32::MAX`.
    #[must_use]
    pub fn width_px(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn height_px(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }
}
