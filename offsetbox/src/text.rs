//! Text element measured through the renderer.

use crate::primitives::{Color, Point};
use crate::renderer::{FontProperties, Primitive, Renderer};
use crate::transform::Affine2D;

/// String used to measure a font's reference ascent and descent.
pub const PROBE: &str = "lp";

/// Default baseline-to-baseline distance, as a multiple of the probe height.
pub const DEFAULT_LINESPACING: f32 = 1.2;

/// Whether `s` contains mathtext: an even, non-zero number of unescaped `$`.
pub fn is_math_text(s: &str) -> bool {
    let dollars = s.matches('$').count() - s.matches("\\$").count();
    dollars > 0 && dollars % 2 == 0
}

/// Metrics of one laid-out line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMetrics {
    pub text: String,
    pub width: f32,
    pub height: f32,
    pub descent: f32,
    /// Baseline position relative to the first line's baseline (≤ 0).
    pub baseline: f32,
}

/// Multi-line layout of a [`Text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub width: f32,
    pub height: f32,
    /// Distance from the first line's baseline to the bottom of the block.
    pub descent: f32,
    pub lines: Vec<LineMetrics>,
}

impl TextLayout {
    /// The first line, which carries the block's reference baseline.
    pub fn first_line(&self) -> Option<&LineMetrics> {
        self.lines.first()
    }
}

/// A text element, anchored at its first baseline, left aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: String,
    font: FontProperties,
    color: Color,
    linespacing: f32,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontProperties::default(),
            color: Color::BLACK,
            linespacing: DEFAULT_LINESPACING,
        }
    }

    pub fn font(mut self, font: FontProperties) -> Self {
        self.font = font;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn linespacing(mut self, linespacing: f32) -> Self {
        self.linespacing = linespacing;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font_properties(&self) -> &FontProperties {
        &self.font
    }

    pub fn is_math(&self) -> bool {
        is_math_text(&self.text)
    }

    /// Measure every line and stack them below the first baseline.
    pub fn layout(&self, renderer: &dyn Renderer) -> TextLayout {
        let is_math = self.is_math();
        let (_, probe_height, _) = renderer.text_width_height_descent(PROBE, &self.font, false);
        let gap = self.linespacing * probe_height;

        let lines: Vec<LineMetrics> = self
            .text
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let (width, height, descent) = renderer.text_width_height_descent(line, &self.font, is_math);
                LineMetrics {
                    text: line.to_string(),
                    width,
                    height,
                    descent,
                    baseline: -gap * i as f32,
                }
            })
            .collect();

        let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
        let (ascent, descent) = match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => (first.height - first.descent, last.descent - last.baseline),
            _ => (0.0, 0.0),
        };

        TextLayout {
            width,
            height: ascent + descent,
            descent,
            lines,
        }
    }

    /// Emit one text primitive per line, placed through `transform`.
    pub fn draw(&self, renderer: &mut dyn Renderer, transform: &Affine2D) {
        let layout = self.layout(&*renderer);
        for line in layout.lines {
            let origin = transform.transform_point(Point::new(0.0, line.baseline));
            renderer.draw(Primitive::Text {
                origin,
                text: line.text,
                font: self.font.clone(),
                color: self.color,
            });
        }
    }
}
