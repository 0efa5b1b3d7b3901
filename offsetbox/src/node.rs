//! The box contract every layout node implements.
//!
//! A box reports its extent around a reference point and, for containers,
//! where each child's reference point sits relative to its own. Drawing is a
//! separate pass that recomputes the layout and pushes absolute offsets down
//! the tree before delegating to each child.

use crate::error::{LayoutError, Result};
use crate::offset::Offset;
use crate::primitives::{Bbox, Extent, Point};
use crate::renderer::Renderer;

/// An owned child of a container box.
pub type BoxChild = Box<dyn OffsetBox>;

pub trait OffsetBox {
    /// Compute this box's extent and the offset of every child relative to
    /// this box's reference point.
    ///
    /// Nothing is cached: every call measures the children again.
    fn extent_offsets(&self, _renderer: &dyn Renderer) -> Result<(Extent, Vec<Point>)> {
        Err(LayoutError::MissingLayout(std::any::type_name::<Self>()))
    }

    fn extent(&self, renderer: &dyn Renderer) -> Result<Extent> {
        self.extent_offsets(renderer).map(|(extent, _)| extent)
    }

    fn set_offset(&mut self, offset: Offset);

    /// Resolve this box's placement given its just-computed extent.
    fn offset(&self, extent: &Extent) -> Point;

    fn children(&self) -> &[BoxChild] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [BoxChild] {
        &mut []
    }

    /// Bounding box in display space.
    fn window_extent(&self, renderer: &dyn Renderer) -> Result<Bbox> {
        let (extent, _) = self.extent_offsets(renderer)?;
        let origin = self.offset(&extent);
        Ok(Bbox::from_bounds(
            origin.x - extent.xdescent,
            origin.y - extent.ydescent,
            extent.width,
            extent.height,
        ))
    }

    /// Lay out, move every child to its absolute offset, then draw the
    /// children in order.
    fn draw(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let (extent, offsets) = self.extent_offsets(&*renderer)?;
        let origin = self.offset(&extent);
        for (child, relative) in self.children_mut().iter_mut().zip(offsets) {
            child.set_offset(Offset::Fixed(origin + relative));
            child.draw(renderer)?;
        }
        Ok(())
    }
}
