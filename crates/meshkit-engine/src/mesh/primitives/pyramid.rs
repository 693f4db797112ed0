use crate::mesh::{Geometry, Vertex};

use super::{BLUE, GREEN, RED, WHITE, YELLOW};

/// Square pyramid standing on the XZ plane with its apex at `(0, height, 0)`.
///
/// The base is two triangles facing -Y. Each side connects one base edge to the
/// apex and is counter-clockwise seen from outside.
pub fn pyramid(base: f32, height: f32) -> Geometry {
    let h = base * 0.5;

    #[rustfmt::skip]
    let vertices = vec![
        Vertex::new([-h, 0.0, -h], RED,    [0.0, 0.0]),
        Vertex::new([ h, 0.0, -h], GREEN,  [1.0, 0.0]),
        Vertex::new([ h, 0.0,  h], BLUE,   [1.0, 1.0]),
        Vertex::new([-h, 0.0,  h], YELLOW, [0.0, 1.0]),
        // apex
        Vertex::new([0.0, height, 0.0], WHITE, [0.5, 0.5]),
    ];

    #[rustfmt::skip]
    let indices = vec![
        // base
        0, 1, 2,
        2, 3, 0,
        // sides: -Z, +X, +Z, -X
        1, 0, 4,
        2, 1, 4,
        3, 2, 4,
        0, 3, 4,
    ];

    Geometry::from_parts(vertices, indices)
}
