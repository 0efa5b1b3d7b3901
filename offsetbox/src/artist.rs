//! Free-form artists that a [`DrawingArea`](crate::DrawingArea) can hold.
//!
//! Artists are defined in the drawing area's local coordinates; the area
//! passes its offset transform in at draw time.

use crate::primitives::{Bbox, Color, Point};
use crate::renderer::{Primitive, Renderer};
use crate::text::Text;
use crate::transform::Affine2D;

/// Anything that can draw itself through a parent-owned transform.
pub trait Artist {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Affine2D);
}

/// A polyline in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    points: Vec<Point>,
    color: Color,
    width: f32,
}

impl Line2D {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            color: Color::BLACK,
            width: 1.0,
        }
    }

    /// A horizontal segment from `(x0, y)` to `(x1, y)`.
    pub fn horizontal(x0: f32, x1: f32, y: f32) -> Self {
        Self::new([Point::new(x0, y), Point::new(x1, y)])
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Artist for Line2D {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Affine2D) {
        renderer.draw(Primitive::Polyline {
            points: self.points.iter().map(|&p| transform.transform_point(p)).collect(),
            color: self.color,
            width: self.width,
        });
    }
}

/// An axis-aligned rectangle patch in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    bbox: Bbox,
    color: Color,
    fill: bool,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bbox: Bbox::from_bounds(x, y, width, height),
            color: Color::BLACK,
            fill: true,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Draw only the outline.
    pub fn outline(mut self) -> Self {
        self.fill = false;
        self
    }
}

impl Artist for Rectangle {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Affine2D) {
        let lower = transform.transform_point(Point::new(self.bbox.x0, self.bbox.y0));
        let upper = transform.transform_point(Point::new(self.bbox.x1, self.bbox.y1));
        renderer.draw(Primitive::Rect {
            bbox: Bbox::new(lower.x, lower.y, upper.x, upper.y),
            color: self.color,
            fill: self.fill,
        });
    }
}

impl<A: Artist + ?Sized> Artist for Box<A> {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Affine2D) {
        (**self).draw(renderer, transform);
    }
}

impl Artist for Text {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Affine2D) {
        Text::draw(self, renderer, transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingRenderer;

    #[test]
    fn test_line_is_translated() {
        let mut renderer = RecordingRenderer::new();
        let mut transform = Affine2D::new();
        transform.translate(10.0, 20.0);
        Line2D::horizontal(0.0, 5.0, 1.0).draw(&mut renderer, &transform);
        assert_eq!(
            renderer.primitives(),
            &[Primitive::Polyline {
                points: vec![Point::new(10.0, 21.0), Point::new(15.0, 21.0)],
                color: Color::BLACK,
                width: 1.0,
            }]
        );
    }

    #[test]
    fn test_rectangle_is_translated() {
        let mut renderer = RecordingRenderer::new();
        let mut transform = Affine2D::new();
        transform.translate(-1.0, 2.0);
        Rectangle::new(0.0, 0.0, 4.0, 3.0).outline().draw(&mut renderer, &transform);
        assert_eq!(
            renderer.primitives(),
            &[Primitive::Rect {
                bbox: Bbox::new(-1.0, 2.0, 3.0, 5.0),
                color: Color::BLACK,
                fill: false,
            }]
        );
    }

    #[test]
    fn test_boxed_artist_delegates() {
        let mut renderer = RecordingRenderer::new();
        let mut transform = Affine2D::new();
        transform.translate(3.0, 3.0);
        let boxed: Box<dyn Artist> = Box::new(Rectangle::new(0.0, 0.0, 2.0, 2.0));
        Box::new(boxed).draw(&mut renderer, &transform);
        assert_eq!(
            renderer.primitives(),
            &[Primitive::Rect {
                bbox: Bbox::new(3.0, 3.0, 5.0, 5.0),
                color: Color::BLACK,
                fill: true,
            }]
        );
    }
}
