//! Offsetbox: relative layout of nested boxes.
//!
//! An offset box is a container whose children are drawn at a position
//! relative to it. Boxes only compute extents and offsets; a [`Renderer`]
//! measures text and receives the positioned primitives.
//!
//! - [`VPacker`] / [`HPacker`] pack child boxes along one axis and align them
//!   on the other.
//! - [`DrawingArea`] has a fixed size and holds free-form [`Artist`]s at
//!   fixed positions.
//! - [`TextArea`] wraps a single [`Text`] and takes its size from it.
//!
//! # Usage
//!
//! ```
//! use offsetbox::{DrawingArea, OffsetBox, PackerConfig, RecordingRenderer, TextArea, VPacker};
//!
//! let mut renderer = RecordingRenderer::new();
//! let mut column = VPacker::new(PackerConfig::new().sep(5.0).pad(2.0))
//!     .push(TextArea::new("title"))
//!     .push(DrawingArea::new(40.0, 10.0));
//! column.set_offset((100.0, 100.0).into());
//!
//! let bbox = column.window_extent(&renderer)?;
//! assert_eq!(bbox.width(), 44.0);
//! column.draw(&mut renderer)?;
//! # Ok::<(), offsetbox::LayoutError>(())
//! ```

// Values and seams
pub mod error;
pub mod primitives;
pub mod transform;
pub mod renderer;
pub mod text;
pub mod artist;

// Layout policies
pub mod policy;
pub mod distribute;

// Boxes
pub mod offset;
pub mod node;
pub mod packer;
pub mod drawing_area;
pub mod text_area;

// Clients
pub mod legend;

pub use error::{LayoutError, Result};
pub use primitives::{Bbox, Color, Extent, Point};
pub use transform::Affine2D;
pub use renderer::{FontProperties, Primitive, RecordingRenderer, Renderer};
pub use text::{Text, TextLayout, is_math_text};
pub use artist::{Artist, Line2D, Rectangle};
pub use policy::{Align, PackMode, PackerConfig};
pub use distribute::{Aligned, Packed, aligned_offsets, pack_offsets};
pub use offset::Offset;
pub use node::{BoxChild, OffsetBox};
pub use packer::{HPacker, VPacker};
pub use drawing_area::DrawingArea;
pub use text_area::TextArea;
pub use legend::{Corner, Legend, LegendConfig, LegendEntry};
