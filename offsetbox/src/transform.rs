//! 2D affine transform used to place children of leaf boxes.

use crate::primitives::Point;

/// A 2D affine transform stored as the top two rows of a 3x3 matrix:
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2D {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Reset to the identity transform.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Post-compose a translation.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.e += dx;
        self.f += dy;
        self
    }

    /// The translation component.
    #[inline]
    pub fn translation(&self) -> Point {
        Point::new(self.e, self.f)
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}
