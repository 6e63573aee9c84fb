use serde::{Deserialize, Serialize};

/// Integer pixel rectangle with inclusive right/bottom edges.
///
/// Hint-box overlap decisions run on whole pixels, so `right()` is
/// `x + width - 1` and two rects that share a column intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn left(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn top(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn right(self) -> i32 {
        self.x + self.width - 1
    }

    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.y + self.height - 1
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[must_use]
    pub const fn vertical_middle(self) -> i32 {
        self.top() + (self.bottom() - self.top()) / 2
    }

    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Smallest rect spanning from `self`'s top-left corner to `other`'s
    /// bottom-right corner.
    #[must_use]
    pub fn spanning_to(self, other: Self) -> Self {
        Self::new(
            self.left(),
            self.top(),
            other.right() - self.left() + 1,
            other.bottom() - self.top() + 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PixelRect;

    #[test]
    fn edges_are_inclusive() {
        let rect = PixelRect::new(10, 4, 20, 8);
        assert_eq!(rect.right(), 29);
        assert_eq!(rect.bottom(), 11);
        assert_eq!(rect.vertical_middle(), 7);
    }

    #[test]
    fn touching_columns_intersect() {
        let left = PixelRect::new(0, 0, 10, 10);
        let right = PixelRect::new(9, 0, 10, 10);
        let apart = PixelRect::new(10, 0, 10, 10);
        assert!(left.intersects(right));
        assert!(!left.intersects(apart));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let empty = PixelRect::new(5, 5, 0, 10);
        assert!(!empty.intersects(PixelRect::new(0, 0, 20, 20)));
    }

    #[test]
    fn spanning_rect_covers_both_corners() {
        let start = PixelRect::new(10, 5, 20, 10);
        let end = PixelRect::new(60, 5, 30, 10);
        let span = start.spanning_to(end);
        assert_eq!(span, PixelRect::new(10, 5, 80, 10));
    }
}
