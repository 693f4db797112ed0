use crate::mesh::{Geometry, Vertex};

use super::{BLUE, GREEN, RED};

/// Single triangle in the XY plane, one primary color per corner.
pub fn triangle() -> Geometry {
    let vertices = vec![
        Vertex::new([0.0, 0.5, 0.0], RED, [0.5, 1.0]),
        Vertex::new([0.5, -0.5, 0.0], GREEN, [1.0, 0.0]),
        Vertex::new([-0.5, -0.5, 0.0], BLUE, [0.0, 0.0]),
    ];

    Geometry::from_parts(vertices, vec![0, 1, 2])
}
