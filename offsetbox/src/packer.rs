//! VPacker / HPacker - containers that pack their children along one axis and
//! align them on the other.
//!
//! Children positions are recomputed on every layout pass, so adding or
//! reconfiguring children never needs explicit invalidation.

use crate::distribute::{aligned_offsets, pack_offsets};
use crate::error::Result;
use crate::node::{BoxChild, OffsetBox};
use crate::offset::Offset;
use crate::policy::{Align, PackMode, PackerConfig};
use crate::primitives::{Extent, Point};
use crate::renderer::Renderer;

fn child_extents(children: &[BoxChild], renderer: &dyn Renderer) -> Result<Vec<Extent>> {
    children.iter().map(|child| child.extent(renderer)).collect()
}

macro_rules! packer_builders {
    ($name:ident) => {
        impl $name {
            pub fn new(config: PackerConfig) -> Self {
                Self {
                    config,
                    children: Vec::new(),
                    offset: Offset::default(),
                }
            }

            pub fn with_children(config: PackerConfig, children: Vec<BoxChild>) -> Self {
                Self {
                    config,
                    children,
                    offset: Offset::default(),
                }
            }

            /// Append a child box.
            pub fn push(mut self, child: impl OffsetBox + 'static) -> Self {
                self.children.push(Box::new(child));
                self
            }

            /// Append an already boxed child.
            pub fn add_child(&mut self, child: BoxChild) {
                self.children.push(child);
            }

            pub fn config(&self) -> &PackerConfig {
                &self.config
            }

            pub fn config_mut(&mut self) -> &mut PackerConfig {
                &mut self.config
            }

            pub fn set_width(&mut self, width: Option<f32>) {
                self.config.width = width;
            }

            pub fn set_height(&mut self, height: Option<f32>) {
                self.config.height = height;
            }

            pub fn set_align(&mut self, align: Align) {
                self.config.align = align;
            }

            pub fn set_mode(&mut self, mode: PackMode) {
                self.config.mode = mode;
            }
        }
    };
}

// =========================================================================
// VPacker
// =========================================================================

/// Packs children top to bottom.
pub struct VPacker {
    config: PackerConfig,
    children: Vec<BoxChild>,
    offset: Offset,
}

packer_builders!(VPacker);

impl OffsetBox for VPacker {
    fn extent_offsets(&self, renderer: &dyn Renderer) -> Result<(Extent, Vec<Point>)> {
        let config = &self.config;
        let extents = child_extents(&self.children, renderer)?;

        // Measure descents from each child's top edge.
        let flipped: Vec<f32> = extents.iter().map(|e| e.height - e.ydescent).collect();

        let cross: Vec<(f32, f32)> = extents.iter().map(|e| (e.width, e.xdescent)).collect();
        let aligned = aligned_offsets(&cross, config.width, config.align);

        let main: Vec<(f32, f32)> = extents
            .iter()
            .zip(&flipped)
            .map(|(e, &descent)| (e.height, descent))
            .collect();
        let packed = pack_offsets(&main, config.height, config.sep, config.mode)?;
        let height = packed.total;

        let tops: Vec<f32> = packed
            .offsets
            .iter()
            .zip(&flipped)
            .map(|(offset, descent)| offset + descent)
            .collect();
        let ydescent = tops.first().map_or(0.0, |first| height - first);

        let offsets: Vec<Point> = aligned
            .offsets
            .iter()
            .zip(&tops)
            .map(|(&x, &top)| Point::new(x, height - top - ydescent))
            .collect();

        let extent = Extent::new(aligned.size, height, aligned.descent, ydescent).padded(config.pad);
        tracing::trace!("VPacker: {} children -> {:?}", self.children.len(), extent);
        Ok((extent, offsets))
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    fn offset(&self, extent: &Extent) -> Point {
        self.offset.resolve(extent)
    }

    fn children(&self) -> &[BoxChild] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxChild] {
        &mut self.children
    }
}

// =========================================================================
// HPacker
// =========================================================================

/// Packs children left to right.
pub struct HPacker {
    config: PackerConfig,
    children: Vec<BoxChild>,
    offset: Offset,
}

packer_builders!(HPacker);

impl OffsetBox for HPacker {
    fn extent_offsets(&self, renderer: &dyn Renderer) -> Result<(Extent, Vec<Point>)> {
        let config = &self.config;
        let extents = child_extents(&self.children, renderer)?;

        let cross: Vec<(f32, f32)> = extents.iter().map(|e| (e.height, e.ydescent)).collect();
        let aligned = aligned_offsets(&cross, config.height, config.align);

        let main: Vec<(f32, f32)> = extents.iter().map(|e| (e.width, e.xdescent)).collect();
        let packed = pack_offsets(&main, config.width, config.sep, config.mode)?;

        let xdescent = extents.first().map_or(0.0, |e| e.xdescent);
        let offsets: Vec<Point> = packed
            .offsets
            .iter()
            .zip(&extents)
            .zip(&aligned.offsets)
            .map(|((&x, e), &y)| Point::new(x + e.xdescent - xdescent, y))
            .collect();

        let extent = Extent::new(packed.total, aligned.size, xdescent, aligned.descent).padded(config.pad);
        tracing::trace!("HPacker: {} children -> {:?}", self.children.len(), extent);
        Ok((extent, offsets))
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    fn offset(&self, extent: &Extent) -> Point {
        self.offset.resolve(extent)
    }

    fn children(&self) -> &[BoxChild] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxChild] {
        &mut self.children
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Rectangle;
    use crate::drawing_area::DrawingArea;
    use crate::error::LayoutError;
    use crate::primitives::{Bbox, Color};
    use crate::renderer::{Primitive, RecordingRenderer};

    fn area(width: f32, height: f32) -> DrawingArea {
        DrawingArea::new(width, height)
    }

    #[test]
    fn test_vpacker_fixed_stacks_top_to_bottom() {
        let renderer = RecordingRenderer::new();
        let packer = VPacker::new(PackerConfig::new().sep(5.0))
            .push(area(10.0, 10.0))
            .push(area(10.0, 20.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent.height, 35.0);
        assert_eq!(extent.ydescent, 25.0);
        assert_eq!(offsets, vec![Point::new(0.0, 0.0), Point::new(0.0, -25.0)]);

        let top_first = offsets[0].y + 10.0;
        let top_second = offsets[1].y + 20.0;
        assert_eq!(top_first - top_second, 15.0);
    }

    #[test]
    fn test_vpacker_padding() {
        let renderer = RecordingRenderer::new();
        let packer = VPacker::new(PackerConfig::new().sep(5.0).pad(2.0))
            .push(area(10.0, 10.0))
            .push(area(8.0, 20.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::new(14.0, 39.0, 2.0, 27.0));
        assert_eq!(offsets[1], Point::new(0.0, -25.0));
    }

    #[test]
    fn test_vpacker_right_alignment() {
        let renderer = RecordingRenderer::new();
        let packer = VPacker::new(PackerConfig::new().align(Align::Right))
            .push(area(10.0, 5.0))
            .push(area(30.0, 5.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent.width, 30.0);
        assert_eq!(offsets[0].x, 20.0);
        assert_eq!(offsets[1].x, 0.0);
    }

    #[test]
    fn test_vpacker_expand_requires_height() {
        let renderer = RecordingRenderer::new();
        let packer = VPacker::new(PackerConfig::new().mode(PackMode::Expand))
            .push(area(10.0, 5.0))
            .push(area(10.0, 5.0));
        assert_eq!(
            packer.extent(&renderer).unwrap_err(),
            LayoutError::ExpandWithoutTotal
        );
    }

    #[test]
    fn test_hpacker_baseline() {
        let renderer = RecordingRenderer::new();
        let packer = HPacker::new(PackerConfig::new().sep(4.0))
            .push(DrawingArea::new(10.0, 20.0).descent(0.0, 5.0))
            .push(DrawingArea::new(30.0, 10.0).descent(2.0, 0.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::new(44.0, 20.0, 0.0, 5.0));
        assert_eq!(offsets, vec![Point::new(0.0, 0.0), Point::new(16.0, 0.0)]);
    }

    #[test]
    fn test_hpacker_center_without_height() {
        let renderer = RecordingRenderer::new();
        let packer = HPacker::new(PackerConfig::new().align(Align::Center))
            .push(DrawingArea::new(10.0, 20.0).descent(0.0, 5.0))
            .push(DrawingArea::new(10.0, 10.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        // Defaults to the tallest child.
        assert_eq!(extent.height, 20.0);
        assert_eq!(extent.ydescent, 0.0);
        assert_eq!(offsets[0].y, offsets[1].y);
    }

    #[test]
    fn test_hpacker_unequal_descents_without_height() {
        let renderer = RecordingRenderer::new();
        for (align, expected) in [(Align::Center, [5.0, 0.0]), (Align::Bottom, [5.0, 0.0]), (Align::Top, [5.0, 0.0])] {
            let packer = HPacker::new(PackerConfig::new().align(align))
                .push(DrawingArea::new(10.0, 10.0).descent(0.0, 5.0))
                .push(DrawingArea::new(10.0, 10.0));

            let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
            assert_eq!(extent.height, 10.0, "{align}");
            assert_eq!(extent.ydescent, 0.0, "{align}");
            assert_eq!([offsets[0].y, offsets[1].y], expected, "{align}");
        }
    }

    #[test]
    fn test_hpacker_configured_height() {
        let renderer = RecordingRenderer::new();
        let packer = |align| {
            HPacker::new(PackerConfig::new().height(30.0).align(align))
                .push(area(10.0, 10.0))
                .push(DrawingArea::new(10.0, 20.0).descent(0.0, 5.0))
        };

        let (extent, offsets) = packer(Align::Top).extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::new(20.0, 30.0, 0.0, 0.0));
        assert_eq!(offsets, vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);

        let (extent, offsets) = packer(Align::Center).extent_offsets(&renderer).unwrap();
        assert_eq!(extent.height, 30.0);
        assert_eq!(offsets, vec![Point::new(0.0, 10.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn test_vpacker_configured_height_fixed() {
        let renderer = RecordingRenderer::new();
        let packer = VPacker::new(PackerConfig::new().height(100.0).sep(5.0))
            .push(area(10.0, 10.0))
            .push(area(10.0, 20.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::new(10.0, 100.0, 0.0, 90.0));
        assert_eq!(offsets, vec![Point::new(0.0, 0.0), Point::new(0.0, -25.0)]);
    }

    #[test]
    fn test_vpacker_configured_height_equal() {
        let renderer = RecordingRenderer::new();
        let packer = VPacker::new(PackerConfig::new().height(100.0).mode(PackMode::Equal))
            .push(area(10.0, 10.0))
            .push(area(10.0, 20.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::new(10.0, 100.0, 0.0, 90.0));
        // 50-unit slots: tops sit at 10 and -40 relative to the reference.
        assert_eq!(offsets, vec![Point::new(0.0, 0.0), Point::new(0.0, -60.0)]);
    }

    #[test]
    fn test_hpacker_expand() {
        let renderer = RecordingRenderer::new();
        let packer = HPacker::new(PackerConfig::new().width(100.0).mode(PackMode::Expand))
            .push(area(10.0, 10.0))
            .push(area(10.0, 10.0));

        let (extent, offsets) = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(extent.width, 100.0);
        assert_eq!(offsets[1].x, 90.0);
    }

    #[test]
    fn test_hpacker_expand_single_child_fails() {
        let renderer = RecordingRenderer::new();
        let packer = HPacker::new(PackerConfig::new().width(100.0).mode(PackMode::Expand)).push(area(10.0, 10.0));
        assert_eq!(
            packer.extent(&renderer).unwrap_err(),
            LayoutError::ExpandNeedsTwoItems(1)
        );
    }

    #[test]
    fn test_empty_packers() {
        let renderer = RecordingRenderer::new();
        let vpacker = VPacker::new(PackerConfig::new().pad(1.0));
        let (extent, offsets) = vpacker.extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::new(2.0, 2.0, 1.0, 1.0));
        assert!(offsets.is_empty());

        let hpacker = HPacker::new(PackerConfig::new().mode(PackMode::Equal));
        let (extent, offsets) = hpacker.extent_offsets(&renderer).unwrap();
        assert_eq!(extent, Extent::ZERO);
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_extent_offsets_is_idempotent() {
        let renderer = RecordingRenderer::new();
        let packer = HPacker::new(PackerConfig::new().sep(3.0).mode(PackMode::Equal))
            .push(area(10.0, 10.0))
            .push(VPacker::new(PackerConfig::new()).push(area(4.0, 4.0)).push(area(6.0, 2.0)));

        let first = packer.extent_offsets(&renderer).unwrap();
        let second = packer.extent_offsets(&renderer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_positions_children() {
        let mut renderer = RecordingRenderer::new();
        let mut first = area(10.0, 10.0);
        first.add_artist(Rectangle::new(0.0, 0.0, 10.0, 10.0));
        let mut second = area(10.0, 20.0);
        second.add_artist(Rectangle::new(0.0, 0.0, 10.0, 20.0));

        let mut packer = VPacker::new(PackerConfig::new().sep(5.0)).push(first).push(second);
        packer.set_offset((100.0, 100.0).into());
        packer.draw(&mut renderer).unwrap();

        assert_eq!(
            renderer.primitives(),
            &[
                Primitive::Rect {
                    bbox: Bbox::new(100.0, 100.0, 110.0, 110.0),
                    color: Color::BLACK,
                    fill: true,
                },
                Primitive::Rect {
                    bbox: Bbox::new(100.0, 75.0, 110.0, 95.0),
                    color: Color::BLACK,
                    fill: true,
                },
            ]
        );
    }

    #[test]
    fn test_window_extent_follows_offset() {
        let renderer = RecordingRenderer::new();
        let mut packer = VPacker::new(PackerConfig::new().sep(5.0))
            .push(area(10.0, 10.0))
            .push(area(10.0, 20.0));
        packer.set_offset((50.0, 50.0).into());

        let bbox = packer.window_extent(&renderer).unwrap();
        assert_eq!(bbox, Bbox::from_bounds(50.0, 25.0, 10.0, 35.0));
    }
}
