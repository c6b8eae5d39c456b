//! Rectangle math shared by every layout strategy.
//!
//! [`Rect`] uses half-open pixel bounds: the pixel column `x2` and row `y2`
//! are outside the rectangle. Two rectangles that share an edge therefore do
//! not overlap.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::size::SizeCategory;
use crate::style::Edges;

/// Integer pixel bounds `(x1, y1, x2, y2)` with `x1 <= x2` and `y1 <= y2`.
///
/// # Examples
///
/// ```
/// use display_layout::geometry::Rect;
///
/// let r = Rect::from_origin_size(8, 8, 108, 108);
/// assert_eq!(r, Rect::new(8, 8, 116, 116));
/// assert_eq!(r.width(), 108);
///
/// let right = Rect::new(116, 8, 232, 116);
/// assert!(!r.overlaps(&right));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x1: i32,
    /// Top edge (inclusive).
    pub y1: i32,
    /// Right edge (exclusive).
    pub x2: i32,
    /// Bottom edge (exclusive).
    pub y2: i32,
}

impl Rect {
    /// Creates a rect from its corner coordinates.
    ///
    /// Inverted bounds are normalized so the invariant `x1 <= x2`, `y1 <= y2`
    /// always holds.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Creates a rect from its top-left corner and size. Negative sizes
    /// collapse to zero.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x.saturating_add(width.max(0)),
            y2: y.saturating_add(height.max(0)),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Returns `true` when the rect covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Center point, rounded toward the top-left.
    pub fn center(&self) -> Point {
        Point::new(self.x1 + self.width() / 2, self.y1 + self.height() / 2)
    }

    /// Size as unsigned dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width().unsigned_abs(), self.height().unsigned_abs())
    }

    /// Adaptive size bucket for content placed in this rect.
    pub fn size_category(&self) -> SizeCategory {
        SizeCategory::from_height(self.height())
    }

    /// Returns `true` when `point` lies inside the rect.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x < self.x2 && point.y >= self.y1 && point.y < self.y2
    }

    /// Returns `true` when `other` lies entirely inside this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.y1 >= self.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }

    /// Returns `true` when the interiors of both rects share at least one pixel.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    /// Shrinks the rect by the given insets. Over-large insets collapse it to
    /// an empty rect anchored inside the original bounds.
    pub fn inset(&self, edges: Edges) -> Rect {
        let x1 = self.x1.saturating_add(to_i32(edges.left)).min(self.x2);
        let y1 = self.y1.saturating_add(to_i32(edges.top)).min(self.y2);
        let x2 = self.x2.saturating_sub(to_i32(edges.right)).max(x1);
        let y2 = self.y2.saturating_sub(to_i32(edges.bottom)).max(y1);
        Rect { x1, y1, x2, y2 }
    }

    /// Converts to an `embedded-graphics` rectangle.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.top_left(), self.size())
    }
}

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        let w = i32::try_from(r.size.width).unwrap_or(i32::MAX);
        let h = i32::try_from(r.size.height).unwrap_or(i32::MAX);
        Rect::from_origin_size(r.top_left.x, r.top_left.y, w, h)
    }
}

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        r.to_rectangle()
    }
}

/// A rectangular region assigned to exactly one widget.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Ordinal position, stable across re-layout.
    pub index: usize,
    /// Pixel bounds.
    pub rect: Rect,
}

impl Slot {
    /// Creates a slot.
    pub const fn new(index: usize, rect: Rect) -> Self {
        Self { index, rect }
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_inverted_bounds() {
        let r = Rect::new(10, 20, 0, 5);
        assert_eq!(r, Rect::new(0, 5, 10, 20));
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 15);
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 20, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 20)));
        assert!(a.overlaps(&Rect::new(9, 9, 20, 20)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0, 0, 4, 4);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(4, 3)));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(0, 0, 100, 50).inset(Edges::new(5, 10, 5, 10));
        assert_eq!(r, Rect::new(10, 5, 90, 45));
    }

    #[test]
    fn test_inset_collapses() {
        let r = Rect::new(0, 0, 10, 10).inset(Edges::all(20));
        assert!(r.is_empty());
        assert!(Rect::new(0, 0, 10, 10).contains_rect(&r));
    }

    #[test]
    fn test_rectangle_conversion() {
        let r = Rect::new(8, 16, 116, 124);
        let rect: Rectangle = r.into();
        assert_eq!(rect.top_left, Point::new(8, 16));
        assert_eq!(rect.size, Size::new(108, 108));
        assert_eq!(Rect::from(rect), r);
    }

    #[test]
    fn test_center() {
        assert_eq!(Rect::new(0, 0, 240, 240).center(), Point::new(120, 120));
        assert_eq!(Rect::new(10, 10, 15, 15).center(), Point::new(12, 12));
    }
}
