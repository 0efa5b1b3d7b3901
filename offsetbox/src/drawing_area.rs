//! DrawingArea - a fixed-size canvas holding free-form artists.
//!
//! The extent never depends on the children. Every artist is drawn through
//! the area's own translation, so moving the area moves all of its artists
//! together.

use crate::artist::Artist;
use crate::error::Result;
use crate::node::OffsetBox;
use crate::offset::Offset;
use crate::primitives::{Bbox, Extent, Point};
use crate::renderer::Renderer;
use crate::transform::Affine2D;

pub struct DrawingArea {
    extent: Extent,
    /// Whether the backend should clip artists to the area's bounds.
    clip: bool,
    artists: Vec<Box<dyn Artist>>,
    offset: Offset,
    offset_transform: Affine2D,
}

impl DrawingArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            extent: Extent::new(width, height, 0.0, 0.0),
            clip: true,
            artists: Vec::new(),
            offset: Offset::default(),
            offset_transform: Affine2D::new(),
        }
    }

    /// Set the descent of the area in the x and y directions.
    pub fn descent(mut self, xdescent: f32, ydescent: f32) -> Self {
        self.extent.xdescent = xdescent;
        self.extent.ydescent = ydescent;
        self
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn is_clipped(&self) -> bool {
        self.clip
    }

    /// Add an artist positioned in the area's local coordinates.
    pub fn add_artist(&mut self, artist: impl Artist + 'static) {
        self.artists.push(Box::new(artist));
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// The translation applied to every artist.
    pub fn transform(&self) -> &Affine2D {
        &self.offset_transform
    }

    fn update_transform(&mut self, origin: Point) {
        self.offset_transform.clear().translate(origin.x, origin.y);
    }
}

impl OffsetBox for DrawingArea {
    fn extent_offsets(&self, _renderer: &dyn Renderer) -> Result<(Extent, Vec<Point>)> {
        Ok((self.extent, Vec::new()))
    }

    fn extent(&self, _renderer: &dyn Renderer) -> Result<Extent> {
        Ok(self.extent)
    }

    fn set_offset(&mut self, offset: Offset) {
        if let Offset::Fixed(origin) = offset {
            self.update_transform(origin);
        }
        self.offset = offset;
    }

    fn offset(&self, extent: &Extent) -> Point {
        self.offset.resolve(extent)
    }

    fn window_extent(&self, _renderer: &dyn Renderer) -> Result<Bbox> {
        let origin = self.offset.resolve(&self.extent);
        Ok(Bbox::from_bounds(
            origin.x - self.extent.xdescent,
            origin.y - self.extent.ydescent,
            self.extent.width,
            self.extent.height,
        ))
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let origin = self.offset.resolve(&self.extent);
        self.update_transform(origin);
        for artist in &self.artists {
            artist.draw(renderer, &self.offset_transform);
        }
        Ok(())
    }
}
