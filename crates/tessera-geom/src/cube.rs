//! Axis-aligned cube with flat-shaded faces.

use crate::{tangents_from_triangles, GeomResult, ShapeData};
use tessera_math::{Vec2, Vec3};
use tracing::trace;

/// A cube of edge length `side` centered on the origin.
///
/// Each face has its own four vertices so normals stay flat, giving 24
/// vertices and 12 triangles. Every face maps the full `[0, 1]` UV square.
///
/// # Errors
///
/// Never fails in practice; the `Result` matches the other generators.
pub fn cube(side: f32) -> GeomResult<ShapeData> {
    trace!(side, "cube");

    let corner = |x: f32, y: f32, z: f32| Vec3::new(x, y, z) * (side / 2.0);
    let (f_tl, f_tr, f_bl, f_br) = (
        corner(-1.0, 1.0, 1.0),
        corner(1.0, 1.0, 1.0),
        corner(-1.0, -1.0, 1.0),
        corner(1.0, -1.0, 1.0),
    );
    let (b_tl, b_tr, b_bl, b_br) = (
        corner(-1.0, 1.0, -1.0),
        corner(1.0, 1.0, -1.0),
        corner(-1.0, -1.0, -1.0),
        corner(1.0, -1.0, -1.0),
    );

    // Per face: corners in quad order (0-3 is the diagonal, 0-1-2 counter-
    // clockwise seen from outside) and the normal
    let faces = [
        ([f_tl, f_bl, f_tr, f_br], Vec3::Z),
        ([b_tr, b_br, b_tl, b_bl], -Vec3::Z),
        ([b_tl, b_bl, f_tl, f_bl], -Vec3::X),
        ([f_tr, f_br, b_tr, b_br], Vec3::X),
        ([f_tl, f_tr, b_tl, b_tr], Vec3::Y),
        ([b_bl, b_br, f_bl, f_br], -Vec3::Y),
    ];
    let face_uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);

    for (i, (corners, normal)) in faces.into_iter().enumerate() {
        let b = (i * 4) as u32;
        vertices.extend(corners);
        uvs.extend(face_uvs);
        normals.extend([normal; 4]);
        triangles.push([b, b + 1, b + 2]);
        triangles.push([b + 2, b + 1, b + 3]);
    }

    let tangents = tangents_from_triangles(&vertices, &uvs, &triangles);
    ShapeData::new(vertices, uvs, normals, tangents, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let c = cube(2.0).unwrap();
        assert_eq!(c.num_vertices(), 24);
        assert_eq!(c.num_triangles(), 12);
        assert_eq!(c.triangles[1], [2, 1, 3]);
        assert_eq!(c.triangles[11], [22, 21, 23]);
        // 4 face edges + 1 diagonal, per face
        assert_eq!(c.num_lines(), 30);
    }

    #[test]
    fn test_side_scales_vertices() {
        let c = cube(3.0).unwrap();
        assert!(c.vertices.iter().all(|v| v.as_slice().iter().all(|x| x.abs() == 1.5)));
    }

    #[test]
    fn test_normals_point_outward() {
        let c = cube(1.0).unwrap();
        for (v, n) in c.vertices.iter().zip(&c.normals) {
            // the vertex lies on the face plane the normal points to
            assert_eq!(v.dot(*n), 0.5);
        }
    }

    #[test]
    fn test_face_normal_is_triangle_cross() {
        let c = cube(2.0).unwrap();
        for &[a, b, d] in &c.triangles {
            let [a, b, d] = [a, b, d].map(usize::from);
            let edge1 = c.vertices[b] - c.vertices[a];
            let edge2 = c.vertices[d] - c.vertices[a];
            assert_eq!(edge1.cross(edge2).normalize(), c.normals[a]);
        }
        crate::utils::assert_counter_clockwise(&c);
    }

    #[test]
    fn test_tangents_unit_and_perpendicular() {
        let c = cube(1.0).unwrap();
        for (t, n) in c.tangents.iter().zip(&c.normals) {
            assert!((t.magnitude() - 1.0).abs() < 1e-5);
            assert!(t.dot(*n).abs() < 1e-5);
        }
    }
}
