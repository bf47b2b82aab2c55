//! Topology helpers shared by the generators.

use std::collections::HashSet;
use tessera_math::{Vec2, Vec3};

/// Unique undirected edges of a triangle list, in first-seen order.
///
/// Each triangle `(a, b, c)` contributes `a-b`, `b-c`, `c-a`; an edge shared
/// by two triangles is emitted once, oriented as first encountered.
pub fn lines_from_triangles(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen = HashSet::with_capacity(triangles.len() * 3 / 2);
    let mut lines = Vec::with_capacity(triangles.len() * 3 / 2);

    for &[a, b, c] in triangles {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            if seen.insert((p.max(q), p.min(q))) {
                lines.push([p, q]);
            }
        }
    }
    lines
}

/// Per-vertex tangents from positions and texture coordinates.
///
/// The tangent of each triangle (the direction of increasing `u` in object
/// space) is added to its three vertices, and the sums are normalized.
/// Triangles with a degenerate UV mapping contribute nothing; vertices that
/// receive no contribution keep a zero tangent.
pub fn tangents_from_triangles(
    vertices: &[Vec3],
    uvs: &[Vec2],
    triangles: &[[u32; 3]],
) -> Vec<Vec3> {
    let mut tangents = vec![Vec3::ZERO; vertices.len()];

    for &[i0, i1, i2] in triangles {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);

        let edge1 = vertices[i1] - vertices[i0];
        let edge2 = vertices[i2] - vertices[i0];
        let duv1 = uvs[i1] - uvs[i0];
        let duv2 = uvs[i2] - uvs[i0];

        let det = duv1.u() * duv2.v() - duv2.u() * duv1.v();
        if det == 0.0 {
            continue;
        }
        let tangent = (edge1 * duv2.v() - edge2 * duv1.v()) / det;

        tangents[i0] += tangent;
        tangents[i1] += tangent;
        tangents[i2] += tangent;
    }

    tangents
        .into_iter()
        .map(|t| t.try_normalize().unwrap_or(Vec3::ZERO))
        .collect()
}

/// Asserts that every non-degenerate triangle winds counter-clockwise seen
/// from the side its vertex normals point to.
#[cfg(test)]
pub(crate) fn assert_counter_clockwise(data: &crate::ShapeData) {
    for (i, tri) in data.triangles.iter().enumerate() {
        let [a, b, c] = tri.map(usize::from);
        let face = (data.vertices[b] - data.vertices[a]).cross(data.vertices[c] - data.vertices[a]);
        if face.magnitude_squared() < 1e-12 {
            continue;
        }
        let normal = data.normals[a] + data.normals[b] + data.normals[c];
        assert!(face.dot(normal) > 0.0, "triangle {i} {tri:?} winds inward");
    }
}
