//! Geometry and color values shared by every layout node.
//!
//! Coordinates follow the y-up convention: a positive descent extends below
//! the reference point, and `Bbox::y0` is the bottom edge.

use std::ops::{Add, Sub};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Footprint of a box around its reference point.
///
/// ```text
///            width
///   ←──────────────────→
///   ┌──────────────────┐  ↑
///   │                  │  │
///   │     × reference  │  │ height
///   │     ↑ ydescent   │  │
///   └──────────────────┘  ↓
///   ←─────→ xdescent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
    pub xdescent: f32,
    pub ydescent: f32,
}

impl Extent {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
        xdescent: 0.0,
        ydescent: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32, xdescent: f32, ydescent: f32) -> Self {
        Self {
            width,
            height,
            xdescent,
            ydescent,
        }
    }

    /// Grow the extent by `pad` on every side.
    #[inline]
    pub fn padded(self, pad: f32) -> Self {
        Self {
            width: self.width + 2.0 * pad,
            height: self.height + 2.0 * pad,
            xdescent: self.xdescent + pad,
            ydescent: self.ydescent + pad,
        }
    }
}

/// An axis-aligned bounding box in display space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bbox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bbox {
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Build a box from its lower-left corner and its size.
    #[inline]
    pub fn from_bounds(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// RGBA color with components in 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color from RGB values (0.0-1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}
