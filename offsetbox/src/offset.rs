//! Placement of a box inside its parent.

use std::fmt;

use crate::primitives::{Extent, Point};

/// Function computing a placement from the box's freshly measured extent.
pub type OffsetFn = Box<dyn Fn(&Extent) -> Point>;

/// Where a box sits in its parent's coordinate space.
pub enum Offset {
    /// A static point.
    Fixed(Point),
    /// A point derived from the box's extent on every layout pass.
    Computed(OffsetFn),
}

impl Offset {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Extent) -> Point + 'static,
    {
        Offset::Computed(Box::new(f))
    }

    /// Resolve the placement for a box with the given extent.
    pub fn resolve(&self, extent: &Extent) -> Point {
        match self {
            Offset::Fixed(point) => *point,
            Offset::Computed(f) => f(extent),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Fixed(Point::ORIGIN)
    }
}

impl From<Point> for Offset {
    fn from(point: Point) -> Self {
        Offset::Fixed(point)
    }
}

impl From<(f32, f32)> for Offset {
    fn from(xy: (f32, f32)) -> Self {
        Offset::Fixed(xy.into())
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Fixed(point) => f.debug_tuple("Fixed").field(point).finish(),
            Offset::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
