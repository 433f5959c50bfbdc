//! Integer geometry primitives: points, sizes and rectangles.
//!
//! Window managers speak in whole pixels, so every type here is integral:
//! coordinates are `i32` (monitors may sit left of or above the origin) and
//! dimensions are `u32`.

use serde::{Deserialize, Serialize};

/// A point with `i32` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new `Point`.
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns this point moved by `(dx, dy)`, saturating on overflow.
    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        Point::new(clamp(self.x as i64 + dx), clamp(self.y as i64 + dy))
    }
}

/// A size with `u32` dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Creates a new `Size`.
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// Checks if the area is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle with an `i32` origin and a `u32` size.
///
/// Used both for monitor bounds and for the sentinel-free representation of a
/// window's current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// The origin point (top-left corner) of the rectangle.
    pub origin: Point,
    /// The size (width and height) of the rectangle.
    pub size: Size,
}

impl Rect {
    /// Creates a new `Rect` from an origin point and a size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    /// Creates a new `Rect` from individual coordinate and dimension values.
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> i32 { self.origin.x }
    pub fn y(&self) -> i32 { self.origin.y }
    pub fn width(&self) -> u32 { self.size.width }
    pub fn height(&self) -> u32 { self.size.height }

    /// The x-coordinate just past the right edge, computed in `i64` so that
    /// wide rectangles near `i32::MAX` do not wrap.
    pub fn right(&self) -> i64 {
        self.origin.x as i64 + self.size.width as i64
    }

    /// The y-coordinate just past the bottom edge.
    pub fn bottom(&self) -> i64 {
        self.origin.y as i64 + self.size.height as i64
    }

    /// Checks if a point is contained within the rectangle.
    /// Edges are inclusive for left/top, exclusive for right/bottom.
    pub fn contains_point(&self, point: Point) -> bool {
        let (x, y) = (point.x as i64, point.y as i64);
        x >= self.origin.x as i64 && x < self.right() && y >= self.origin.y as i64 && y < self.bottom()
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Origin of a rectangle placed directly below this one.
    pub fn below_origin(&self) -> Point {
        self.origin.offset(0, self.size.height as i64)
    }

    /// Origin of a rectangle placed directly to the right of this one.
    pub fn right_origin(&self) -> Point {
        self.origin.offset(self.size.width as i64, 0)
    }
}
