use crate::mesh::{Geometry, Vertex};

use super::{BLUE, GREEN, RED, YELLOW};

/// Axis-aligned rectangle centered at the origin in the XY plane.
///
/// Corners are emitted top-right, bottom-right, bottom-left, top-left. The two
/// triangles share the 1–3 diagonal and are both counter-clockwise seen from +Z.
pub fn quad(width: f32, height: f32) -> Geometry {
    let hw = width * 0.5;
    let hh = height * 0.5;

    let vertices = vec![
        Vertex::new([hw, hh, 0.0], RED, [1.0, 1.0]),
        Vertex::new([hw, -hh, 0.0], GREEN, [1.0, 0.0]),
        Vertex::new([-hw, -hh, 0.0], BLUE, [0.0, 0.0]),
        Vertex::new([-hw, hh, 0.0], YELLOW, [0.0, 1.0]),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 3, 1,
        1, 3, 2,
    ];

    Geometry::from_parts(vertices, indices)
}
