//! TextArea - a box around a single text element.
//!
//! The text sits at the box's reference point with baseline-left alignment.
//! Width and height come from the measured text on every layout pass.

use crate::error::Result;
use crate::node::OffsetBox;
use crate::offset::Offset;
use crate::primitives::{Bbox, Extent, Point};
use crate::renderer::{FontProperties, Renderer};
use crate::text::{PROBE, Text};
use crate::transform::Affine2D;

pub struct TextArea {
    text: Text,
    offset: Offset,
    offset_transform: Affine2D,
}

impl TextArea {
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_text(Text::new(text))
    }

    pub fn from_text(text: Text) -> Self {
        Self {
            text,
            offset: Offset::default(),
            offset_transform: Affine2D::new(),
        }
    }

    pub fn font(mut self, font: FontProperties) -> Self {
        self.text = self.text.font(font);
        self
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut Text {
        &mut self.text
    }

    pub fn transform(&self) -> &Affine2D {
        &self.offset_transform
    }

    fn update_transform(&mut self, origin: Point) {
        self.offset_transform.clear().translate(origin.x, origin.y);
    }

    /// Measure the text, reconciling its baseline with the font's probe
    /// metrics so sibling text boxes share one baseline regardless of which
    /// glyphs they contain.
    fn measure(&self, renderer: &dyn Renderer) -> Extent {
        let font = self.text.font_properties();
        let (_, probe_height, probe_descent) = renderer.text_width_height_descent(PROBE, font, false);

        let layout = self.text.layout(renderer);
        let (width, height) = (layout.width, layout.height);
        let first_line = layout.first_line().map_or("", |line| line.text.as_str());
        let (_, line_height, line_descent) =
            renderer.text_width_height_descent(first_line, font, self.text.is_math());

        // Baseline of the first line, measured from the bottom.
        let descent = height - (line_height - line_descent);

        let above = (probe_height - probe_descent).max(height - descent);
        let descent = descent.max(probe_descent);

        Extent::new(width, above + descent, 0.0, descent)
    }
}

impl OffsetBox for TextArea {
    fn extent_offsets(&self, renderer: &dyn Renderer) -> Result<(Extent, Vec<Point>)> {
        Ok((self.measure(renderer), Vec::new()))
    }

    fn extent(&self, renderer: &dyn Renderer) -> Result<Extent> {
        Ok(self.measure(renderer))
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

    fn window_extent(&self, renderer: &dyn Renderer) -> Result<Bbox> {
        let extent = self.measure(renderer);
        let origin = self.offset.resolve(&extent);
        Ok(Bbox::from_bounds(
            origin.x - extent.xdescent,
            origin.y - extent.ydescent,
            extent.width,
            extent.height,
        ))
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        if let Offset::Computed(_) = self.offset {
            let extent = self.measure(&*renderer);
            let origin = self.offset.resolve(&extent);
            self.update_transform(origin);
        }
        self.text.draw(renderer, &self.offset_transform);
        Ok(())
    }
}
