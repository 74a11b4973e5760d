//! Plane geometry shared by layout, hit testing and rendering.
//!
//! Coordinates are in the host's canvas space: origin at the top-left,
//! `y` growing downward.

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a card cell or canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Check whether a point lies inside this rectangle.
    ///
    /// Edges are inclusive on both sides, so a point on the border shared
    /// by two neighbouring cells hits both of them.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.origin.x
            && px <= self.origin.x + self.size.width
            && py >= self.origin.y
            && py <= self.origin.y + self.size.height
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }
}
