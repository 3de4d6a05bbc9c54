//! Drawable output of the renderer.

use crate::colors::Rgb;
use crate::math::vec2::Vec2;

/// A screen-space shape the harness draws in the order it was emitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A filled circle.
    Point { center: Vec2, radius: f64, color: Rgb },
    /// A one pixel wide segment.
    Line { start: Vec2, end: Vec2, color: Rgb },
    /// A filled polygon with vertices in winding order.
    Polygon { points: Vec<Vec2>, color: Rgb },
}

impl Primitive {
    pub fn color(&self) -> Rgb {
        match self {
            Primitive::Point { color, .. }
            | Primitive::Line { color, .. }
            | Primitive::Polygon { color, .. } => *color,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Primitive::Point { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Primitive::Line { .. })
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Primitive::Polygon { .. })
    }
}
