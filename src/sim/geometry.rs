//! Axis-aligned rectangle geometry
//!
//! Everything in the world is a rectangle in screen space: x grows right,
//! y grows down, (x, y) is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Square of side `size` centered on `center`
    pub fn centered_square(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if the horizontal spans share a positive-length interval
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// True if the rectangles intersect with positive area
    ///
    /// Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// Free-function form of [`Rect::overlaps`]
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Shares a corner
        assert!(!overlaps(&a, &Rect::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
    }

    #[test]
    fn test_centered_square() {
        let coin = Rect::centered_square(Vec2::new(220.0, 180.0), 14.0);
        assert_eq!(coin, Rect::new(213.0, 173.0, 14.0, 14.0));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_commutative(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn rect_overlaps_itself(a in rect_strategy()) {
            prop_assert!(overlaps(&a, &a));
        }

        #[test]
        fn adjacent_rects_never_overlap(a in rect_strategy(), w in 0.5f32..100.0) {
            let right_neighbour = Rect::new(a.right(), a.y, w, a.height);
            prop_assert!(!overlaps(&a, &right_neighbour));
        }
    }
}
