//! Renderer seam.
//!
//! Boxes never rasterize. They ask a [`Renderer`] for text metrics during
//! layout and hand it positioned [`Primitive`]s during draw.

use serde::{Deserialize, Serialize};

use crate::primitives::{Bbox, Color, Point};

/// Font description passed through to the renderer for measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontProperties {
    pub family: String,
    /// Size in points.
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontProperties {
    fn default() -> Self {
        Self {
            family: String::from("sans-serif"),
            size: 12.0,
            bold: false,
            italic: false,
        }
    }
}

impl FontProperties {
    pub fn sized(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// A positioned drawing primitive, already in display coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single line of text with its baseline-left corner at `origin`.
    Text {
        origin: Point,
        text: String,
        font: FontProperties,
        color: Color,
    },
    /// Connected line segments.
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f32,
    },
    /// An axis-aligned rectangle.
    Rect { bbox: Bbox, color: Color, fill: bool },
}

/// Backend capability consumed by the layout boxes.
pub trait Renderer {
    /// Measure `text` and return `(width, height, descent)`.
    fn text_width_height_descent(&self, text: &str, font: &FontProperties, is_math: bool) -> (f32, f32, f32);

    /// Draw one primitive.
    fn draw(&mut self, primitive: Primitive);
}

// Fractions of the font size used by the recording renderer's metrics.
const ADVANCE: f32 = 0.5;
const ASCENT: f32 = 0.75;
const X_HEIGHT: f32 = 0.5;
const DESCENT: f32 = 0.25;

/// Glyphs whose top sits at the x-height.
const SHORT_GLYPHS: &str = "acegmnopqrsuvwxyz";
/// Glyphs reaching below the baseline.
const DESCENDING_GLYPHS: &str = "gjpqy,;";

/// A renderer with deterministic monospace metrics that records every
/// primitive it is asked to draw.
///
/// Each glyph advances half the font size. Lines containing only x-height
/// glyphs rise half the font size above the baseline, anything taller rises
/// three quarters; descending glyphs add a quarter below.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    primitives: Vec<Primitive>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives drawn so far, in draw order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Remove and return the recorded primitives.
    pub fn take(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }

    /// Recorded text primitives as `(origin, text)` pairs.
    pub fn texts(&self) -> Vec<(Point, &str)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { origin, text, .. } => Some((*origin, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn text_width_height_descent(&self, text: &str, font: &FontProperties, is_math: bool) -> (f32, f32, f32) {
        let glyphs: Vec<char> = text
            .chars()
            .filter(|&c| !(is_math && c == '$'))
            .collect();

        let width = glyphs.len() as f32 * ADVANCE * font.size;

        let visible = glyphs.iter().filter(|c| !c.is_whitespace());
        let ascent = if visible.clone().next().is_none() {
            0.0
        } else if visible.clone().all(|&c| SHORT_GLYPHS.contains(c)) {
            X_HEIGHT * font.size
        } else {
            ASCENT * font.size
        };
        let descent = if glyphs.iter().any(|&c| DESCENDING_GLYPHS.contains(c)) {
            DESCENT * font.size
        } else {
            0.0
        };

        (width, ascent + descent, descent)
    }

    fn draw(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}
