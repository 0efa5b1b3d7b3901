//! Legend assembly on top of the offset boxes.
//!
//! Each entry becomes `HPacker[DrawingArea(handle), TextArea(label)]`; entries
//! are split into columns of `VPacker`s, and the columns are packed by an
//! `HPacker` honouring the legend's packing mode.

use serde::{Deserialize, Serialize};

use crate::artist::{Artist, Line2D, Rectangle};
use crate::drawing_area::DrawingArea;
use crate::error::Result;
use crate::node::{BoxChild, OffsetBox};
use crate::offset::Offset;
use crate::packer::{HPacker, VPacker};
use crate::policy::{Align, PackMode, PackerConfig};
use crate::primitives::{Bbox, Color, Extent, Point};
use crate::renderer::{FontProperties, Renderer};
use crate::text_area::TextArea;

/// Legend geometry, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Number of columns.
    pub ncol: usize,
    /// Packing of the columns. `Expand` needs `width`.
    pub mode: PackMode,
    /// Target width of the column block.
    pub width: Option<f32>,
    pub handle_length: f32,
    pub handle_height: f32,
    /// Part of the handle box below the baseline.
    pub handle_descent: f32,
    /// Gap between a handle and its label.
    pub handle_text_pad: f32,
    /// Vertical gap between entries of a column.
    pub label_sep: f32,
    pub column_sep: f32,
    pub border_pad: f32,
    pub font: FontProperties,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            ncol: 1,
            mode: PackMode::Fixed,
            width: None,
            handle_length: 20.0,
            handle_height: 7.0,
            handle_descent: 3.5,
            handle_text_pad: 8.0,
            label_sep: 5.0,
            column_sep: 20.0,
            border_pad: 4.0,
            font: FontProperties::sized(10.0),
        }
    }
}

/// Corner of the legend pinned to an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

enum Handle {
    Line(Color),
    Patch(Color),
    Custom(Box<dyn Artist>),
}

/// One legend row: a handle and its label.
pub struct LegendEntry {
    handle: Handle,
    label: String,
}

impl LegendEntry {
    /// A line sample through the middle of the handle box.
    pub fn line(label: impl Into<String>, color: Color) -> Self {
        Self {
            handle: Handle::Line(color),
            label: label.into(),
        }
    }

    /// A filled patch covering the handle box.
    pub fn patch(label: impl Into<String>, color: Color) -> Self {
        Self {
            handle: Handle::Patch(color),
            label: label.into(),
        }
    }

    /// Any artist, in the handle box's local coordinates.
    pub fn custom(label: impl Into<String>, artist: impl Artist + 'static) -> Self {
        Self {
            handle: Handle::Custom(Box::new(artist)),
            label: label.into(),
        }
    }

    fn into_box(self, config: &LegendConfig) -> HPacker {
        let mut handle_box = DrawingArea::new(config.handle_length, config.handle_height)
            .descent(0.0, config.handle_descent);
        let bottom = -config.handle_descent;
        match self.handle {
            Handle::Line(color) => {
                let y = bottom + config.handle_height * 0.5;
                handle_box.add_artist(Line2D::horizontal(0.0, config.handle_length, y).color(color));
            }
            Handle::Patch(color) => {
                handle_box.add_artist(
                    Rectangle::new(0.0, bottom, config.handle_length, config.handle_height).color(color),
                );
            }
            Handle::Custom(artist) => handle_box.add_artist(artist),
        }

        let label = TextArea::new(self.label).font(config.font.clone());

        HPacker::new(
            PackerConfig::new()
                .sep(config.handle_text_pad)
                .align(Align::Baseline),
        )
        .push(handle_box)
        .push(label)
    }
}

/// A laid-out legend. Behaves as a single box.
pub struct Legend {
    root: HPacker,
}

impl Legend {
    pub fn new(entries: Vec<LegendEntry>, config: &LegendConfig) -> Self {
        let ncol = config.ncol.max(1);
        let rows = entries.len().div_ceil(ncol).max(1);

        let mut columns: Vec<BoxChild> = Vec::with_capacity(ncol);
        let mut column: Vec<BoxChild> = Vec::with_capacity(rows);
        for entry in entries {
            column.push(Box::new(entry.into_box(config)));
            if column.len() == rows {
                columns.push(Box::new(Self::column(std::mem::take(&mut column), config)));
            }
        }
        if !column.is_empty() {
            columns.push(Box::new(Self::column(column, config)));
        }
        tracing::debug!("legend: {} columns of up to {} rows", columns.len(), rows);

        let mut column_config = PackerConfig::new()
            .sep(config.column_sep)
            .align(Align::Baseline)
            .mode(config.mode);
        column_config.width = config.width;
        let block = HPacker::with_children(column_config, columns);

        let root = HPacker::new(PackerConfig::new().pad(config.border_pad)).push(block);
        Self { root }
    }

    fn column(entries: Vec<BoxChild>, config: &LegendConfig) -> VPacker {
        VPacker::with_children(
            PackerConfig::new().sep(config.label_sep).align(Align::Left),
            entries,
        )
    }

    /// Pin `corner` of the legend to `anchor`, whatever size it ends up.
    pub fn anchor(&mut self, corner: Corner, anchor: Point) {
        self.root.set_offset(Offset::computed(move |e: &Extent| {
            let left = anchor.x + e.xdescent;
            let right = anchor.x - e.width + e.xdescent;
            let bottom = anchor.y + e.ydescent;
            let top = anchor.y - e.height + e.ydescent;
            match corner {
                Corner::UpperRight => Point::new(right, top),
                Corner::UpperLeft => Point::new(left, top),
                Corner::LowerLeft => Point::new(left, bottom),
                Corner::LowerRight => Point::new(right, bottom),
            }
        }));
    }

    pub fn column_count(&self) -> usize {
        self.root.children().first().map_or(0, |block| block.children().len())
    }
}

impl OffsetBox for Legend {
    fn extent_offsets(&self, renderer: &dyn Renderer) -> Result<(Extent, Vec<Point>)> {
        self.root.extent_offsets(renderer)
    }

    fn set_offset(&mut self, offset: Offset) {
        self.root.set_offset(offset);
    }

    fn offset(&self, extent: &Extent) -> Point {
        self.root.offset(extent)
    }

    fn children(&self) -> &[BoxChild] {
        self.root.children()
    }

    fn children_mut(&mut self) -> &mut [BoxChild] {
        self.root.children_mut()
    }

    fn window_extent(&self, renderer: &dyn Renderer) -> Result<Bbox> {
        self.root.window_extent(renderer)
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        self.root.draw(renderer)
    }
}
