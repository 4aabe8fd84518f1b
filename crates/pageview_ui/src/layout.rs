//! Geometry primitives shared by every widget.

use serde::{Deserialize, Serialize};

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle by the given offset, keeping its size.
    pub fn translate(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Compute the intersection of two rectangles.
    /// If there's no overlap, the result has zero width and/or height.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        Rectangle::new(x1, y1, (x2 - x1).max(0.0), (y2 - y1).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let r = Rectangle::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 20.0)));
        assert!(!r.contains(Point::new(30.1, 15.0)));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(20.0, 0.0, 10.0, 10.0);
        let i = a.intersect(&b);
        assert_eq!(i.width, 0.0);
    }

    #[test]
    fn translate_keeps_size() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0).translate(-1.0, 1.0);
        assert_eq!(r, Rectangle::new(0.0, 3.0, 3.0, 4.0));
        assert_eq!(r.right(), 3.0);
        assert_eq!(r.bottom(), 7.0);
    }
}
