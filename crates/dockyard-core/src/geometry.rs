//! Pixel geometry primitives.
//!
//! Rectangles are half-open: a rect covers `x..x + width` horizontally and
//! `y..y + height` vertically. A rect with a non-positive extent is invalid
//! and contains no points.

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// The canonical invalid rect, used as "no geometry".
    pub const INVALID: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: IVec2, size: Size) -> Self {
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn contains(&self, point: IVec2) -> bool {
        self.is_valid()
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grow or shrink each edge independently; positive `dx2`/`dy2` grow the
    /// right/bottom edges, negative `dx1`/`dy1` grow the left/top edges.
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Rect {
        Rect::new(
            self.x + dx1,
            self.y + dy1,
            self.width - dx1 + dx2,
            self.height - dy1 + dy2,
        )
    }

    /// Shrink every edge by `margin`.
    pub fn inset(&self, margin: i32) -> Rect {
        self.adjusted(margin, margin, -margin, -margin)
    }

    pub fn translated(&self, delta: IVec2) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    pub fn moved_to(&self, origin: IVec2) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    /// Linear interpolation of every component, rounded to the pixel grid.
    pub fn lerp(&self, other: &Rect, t: f32) -> Rect {
        let mix = |a: i32, b: i32| a + ((b - a) as f32 * t).round() as i32;
        Rect::new(
            mix(self.x, other.x),
            mix(self.y, other.y),
            mix(self.width, other.width),
            mix(self.height, other.height),
        )
    }
}
