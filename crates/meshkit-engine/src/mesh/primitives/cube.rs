use crate::mesh::{Geometry, Vertex};

use super::{BLUE, CYAN, GREEN, GREY, MAGENTA, RED, WHITE, YELLOW};

/// Axis-aligned cube centered at the origin, one vertex per corner.
///
/// Corners 0–3 lie on the +Z face, 4–7 on the -Z face, each with its own
/// color. Faces share corners, so UVs are per corner rather than per face.
/// All twelve triangles are counter-clockwise seen from outside.
pub fn cube(size: f32) -> Geometry {
    let h = size * 0.5;

    #[rustfmt::skip]
    let vertices = vec![
        // +Z
        Vertex::new([-h, -h,  h], RED,     [0.0, 0.0]),
        Vertex::new([ h, -h,  h], GREEN,   [1.0, 0.0]),
        Vertex::new([ h,  h,  h], BLUE,    [1.0, 1.0]),
        Vertex::new([-h,  h,  h], YELLOW,  [0.0, 1.0]),
        // -Z
        Vertex::new([-h, -h, -h], MAGENTA, [1.0, 0.0]),
        Vertex::new([ h, -h, -h], CYAN,    [0.0, 0.0]),
        Vertex::new([ h,  h, -h], WHITE,   [0.0, 1.0]),
        Vertex::new([-h,  h, -h], GREY,    [1.0, 1.0]),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,  2, 3, 0, // front  (+Z)
        1, 5, 6,  6, 2, 1, // right  (+X)
        5, 4, 7,  7, 6, 5, // back   (-Z)
        4, 0, 3,  3, 7, 4, // left   (-X)
        3, 2, 6,  6, 7, 3, // top    (+Y)
        4, 5, 1,  1, 0, 4, // bottom (-Y)
    ];

    Geometry::from_parts(vertices, indices)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::mesh::primitives::test_support::{assert_well_formed, faces_outward, normal};

    #[test]
    fn eight_corners_twelve_triangles() {
        let g = cube(1.0);
        assert_well_formed(&g);
        assert_eq!(g.vertex_count(), 8);
        assert_eq!(g.index_count(), 36);
        assert_eq!(g.triangle_count(), 12);
    }

    #[test]
    fn every_coordinate_is_half_size() {
        let g = cube(3.0);
        for v in g.vertices() {
            for c in v.position {
                assert_eq!(c.abs(), 1.5);
            }
        }
        let corners: HashSet<_> = g
            .vertices()
            .iter()
            .map(|v| v.position.map(|c| c > 0.0))
            .collect();
        assert_eq!(corners.len(), 8);
    }

    #[test]
    fn indices_cover_all_corners() {
        let used: HashSet<u32> = cube(1.0).indices().iter().copied().collect();
        assert_eq!(used, (0..8).collect());
    }

    #[test]
    fn corner_colors_are_distinct() {
        let g = cube(1.0);
        let colors: HashSet<_> = g
            .vertices()
            .iter()
            .map(|v| v.color.map(f32::to_bits))
            .collect();
        assert_eq!(colors.len(), 8);
    }

    #[test]
    fn every_triangle_faces_outward() {
        let g = cube(2.0);
        for t in g.triangles() {
            assert!(faces_outward(&g, t, [0.0; 3]), "triangle {t:?} faces inward");
        }
    }

    #[test]
    fn faces_in_front_right_back_left_top_bottom_order() {
        let g = cube(2.0);
        let expected_axes = [
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ];
        let tris: Vec<_> = g.triangles().collect();
        for (face, axis) in expected_axes.iter().enumerate() {
            for t in &tris[face * 2..face * 2 + 2] {
                let n = normal(&g, *t);
                let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
                for k in 0..3 {
                    assert!((n[k] / len - axis[k]).abs() < 1e-5, "face {face}: {n:?}");
                }
            }
        }
    }
}
