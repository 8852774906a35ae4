//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin at the top-left, y grows downward. A rectangle
//! is its top-left corner plus a width and height (both > 0).

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (x + w)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (y + h)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Overlap test on both axes; rectangles that only touch along an edge
    /// do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if a point lies inside the rectangle
    /// (left/top edges inclusive, right/bottom exclusive)
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}
