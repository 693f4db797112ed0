use crate::mesh::Geometry;

use super::{circle, cube, pyramid, quad, triangle};

/// A named primitive together with its parameters.
///
/// The associated constructors carry the default parameters used when a caller
/// does not specify any (unit quad, half-unit circle, unit cube and pyramid).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Triangle,
    Quad { width: f32, height: f32 },
    Circle { radius: f32, segments: u32 },
    Cube { size: f32 },
    Pyramid { base: f32, height: f32 },
}

impl Shape {
    pub const DEFAULT_CIRCLE_RADIUS: f32 = 0.5;
    pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 36;

    pub const fn triangle() -> Self {
        Shape::Triangle
    }

    pub const fn quad() -> Self {
        Shape::Quad { width: 1.0, height: 1.0 }
    }

    pub const fn circle() -> Self {
        Shape::Circle {
            radius: Self::DEFAULT_CIRCLE_RADIUS,
            segments: Self::DEFAULT_CIRCLE_SEGMENTS,
        }
    }

    pub const fn cube() -> Self {
        Shape::Cube { size: 1.0 }
    }

    pub const fn pyramid() -> Self {
        Shape::Pyramid { base: 1.0, height: 1.0 }
    }

    /// Lowercase label, used for device buffer labels and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Quad { .. } => "quad",
            Shape::Circle { .. } => "circle",
            Shape::Cube { .. } => "cube",
            Shape::Pyramid { .. } => "pyramid",
        }
    }

    /// Builds the CPU-side geometry for this shape.
    pub fn geometry(&self) -> Geometry {
        match *self {
            Shape::Triangle => triangle(),
            Shape::Quad { width, height } => quad(width, height),
            Shape::Circle { radius, segments } => circle(radius, segments),
            Shape::Cube { size } => cube(size),
            Shape::Pyramid { base, height } => pyramid(base, height),
        }
    }
}
