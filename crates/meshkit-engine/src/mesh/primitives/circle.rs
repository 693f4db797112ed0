use std::f32::consts::TAU;

use crate::mesh::{Geometry, Vertex};

use super::{RED, YELLOW};

/// Triangle fan in the XY plane.
///
/// Vertex 0 is the center. Rim vertices `1..=segments + 1` sit at angles
/// `τ·i/segments` for `i` in `0..=segments`; the last one coincides with the
/// first and closes the fan, so triangle `(0, segments, segments + 1)` is valid.
///
/// UVs map the disk into the unit square: `(x / 2r + 0.5, y / 2r + 0.5)`.
/// A zero radius maps every UV to the center `(0.5, 0.5)`.
///
/// Fewer than 3 segments yield a degenerate fan with the same counts
/// (`segments + 2` vertices, `3 * segments` indices). Zero segments give the
/// center and a single rim point, with no triangles.
pub fn circle(radius: f32, segments: u32) -> Geometry {
    if segments < 3 {
        log::debug!("circle: {segments} segments, fan is degenerate");
    }

    let mut vertices = Vec::with_capacity(segments as usize + 2);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex::new([0.0, 0.0, 0.0], RED, [0.5, 0.5]));

    let diameter = radius * 2.0;
    for i in 0..=segments {
        let angle = if segments == 0 {
            0.0
        } else {
            TAU * i as f32 / segments as f32
        };
        let x = radius * angle.cos();
        let y = radius * angle.sin();

        let (u, v) = if diameter == 0.0 {
            (0.5, 0.5)
        } else {
            (x / diameter + 0.5, y / diameter + 0.5)
        };

        vertices.push(Vertex::new([x, y, 0.0], YELLOW, [u, v]));
    }

    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    Geometry::from_parts(vertices, indices)
}
