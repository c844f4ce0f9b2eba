//! Integer axis-aligned rectangles for hit testing
//!
//! Coordinates are screen pixels with y growing downward. A rectangle covers
//! `[x, x + width)` by `[y, y + height)`.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at a float position, truncated toward zero
    pub fn at(pos: Vec2, width: i32, height: i32) -> Self {
        Self::new(pos.x as i32, pos.y as i32, width, height)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn location(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Strict overlap test on the four edges. Shared edges do not count, but
    /// a zero-sized rectangle lying inside the other one does.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Check if a pixel lies inside the rectangle
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}
