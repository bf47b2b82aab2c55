//! Icosphere: a subdivided icosahedron projected onto the sphere.

use crate::{GeomError, GeomResult, ShapeData, MAX_VERTICES};
use std::collections::HashMap;
use tessera_math::Vec3;
use tracing::{debug, trace};

// Base icosahedron on the unit sphere
const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

const BASE_VERTICES: [[f32; 3]; 12] = [
    [-X, 0.0, Z],
    [X, 0.0, Z],
    [-X, 0.0, -Z],
    [X, 0.0, -Z],
    [0.0, Z, X],
    [0.0, Z, -X],
    [0.0, -Z, X],
    [0.0, -Z, -X],
    [Z, X, 0.0],
    [-Z, X, 0.0],
    [Z, -X, 0.0],
    [-Z, -X, 0.0],
];

const BASE_TRIANGLES: [[u32; 3]; 20] = [
    [0, 1, 4],
    [0, 4, 9],
    [9, 4, 5],
    [4, 8, 5],
    [4, 1, 8],
    [8, 1, 10],
    [8, 10, 3],
    [5, 8, 3],
    [5, 3, 2],
    [2, 3, 7],
    [7, 3, 10],
    [7, 10, 6],
    [7, 6, 11],
    [11, 6, 0],
    [0, 6, 1],
    [6, 10, 1],
    [9, 11, 0],
    [9, 2, 11],
    [9, 5, 2],
    [7, 11, 2],
];

/// Vertex count after `precision` subdivisions: `10 * 4^p + 2`.
fn vertex_count(precision: u32) -> Option<usize> {
    4usize
        .checked_pow(precision)
        .and_then(|p| p.checked_mul(10))
        .map(|n| n + 2)
}

/// Splits every edge once, caching midpoints so shared edges share vertices.
struct Subdivider {
    vertices: Vec<Vec3>,
    midpoints: HashMap<(u32, u32), u32>,
}

impl Subdivider {
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = (a.max(b), a.min(b));
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }
        let mid = (self.vertices[a as usize] + self.vertices[b as usize]).normalize();
        let index = self.vertices.len() as u32;
        self.vertices.push(mid);
        self.midpoints.insert(key, index);
        index
    }

    fn split(&mut self, triangles: &[[u32; 3]]) -> Vec<[u32; 3]> {
        let mut out = Vec::with_capacity(triangles.len() * 4);
        for &[x, y, z] in triangles {
            let a = self.midpoint(x, y);
            let b = self.midpoint(y, z);
            let c = self.midpoint(z, x);
            out.extend([[x, a, c], [y, b, a], [z, c, b], [a, b, c]]);
        }
        out
    }
}

/// An icosphere of diameter 1 centered on the origin.
///
/// Each level of `precision` splits every triangle into four and pushes
/// the new vertices out to the sphere. Level 0 is the plain icosahedron
/// (12 vertices, 20 triangles). UVs are the equirectangular projection of
/// each vertex direction; tangents are left at zero.
///
/// # Errors
///
/// [`GeomError::TooManyVertices`] if `10 * 4^precision + 2` exceeds
/// [`MAX_VERTICES`] (any precision above 6).
pub fn icosahedron(precision: u32) -> GeomResult<ShapeData> {
    let count = vertex_count(precision).unwrap_or(usize::MAX);
    if count > MAX_VERTICES {
        return Err(GeomError::TooManyVertices { count });
    }
    trace!(precision, count, "icosahedron");

    let mut subdivider = Subdivider {
        vertices: Vec::with_capacity(count),
        midpoints: HashMap::new(),
    };
    subdivider
        .vertices
        .extend(BASE_VERTICES.iter().map(|&v| Vec3::from_array(v)));

    let mut triangles = BASE_TRIANGLES.to_vec();
    for level in 0..precision {
        triangles = subdivider.split(&triangles);
        debug!(level, vertices = subdivider.vertices.len(), "icosahedron subdivided");
    }

    let normals: Vec<Vec3> = subdivider.vertices.iter().map(|v| v.normalize()).collect();
    let uvs = normals.iter().map(|n| n.to_uv_of_sphere()).collect();
    let tangents = vec![Vec3::ZERO; normals.len()];
    let vertices = normals.iter().map(|&n| n / 2.0).collect();

    ShapeData::new(vertices, uvs, normals, tangents, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_base() {
        let s = icosahedron(0).unwrap();
        assert_eq!(s.num_vertices(), 12);
        assert_eq!(s.num_triangles(), 20);
        assert_eq!(s.num_lines(), 30);
    }

    #[test]
    fn test_subdivision_counts() {
        for p in 0..4 {
            let s = icosahedron(p).unwrap();
            assert_eq!(s.num_vertices(), vertex_count(p).unwrap());
            assert_eq!(s.num_triangles(), 20 * 4usize.pow(p));
            // Euler characteristic of a sphere
            let v = s.num_vertices() as i64;
            let e = s.num_lines() as i64;
            let f = s.num_triangles() as i64;
            assert_eq!(v - e + f, 2);
        }
    }

    #[test]
    fn test_on_sphere() {
        let s = icosahedron(2).unwrap();
        for v in &s.vertices {
            assert_abs_diff_eq!(v.magnitude(), 0.5, epsilon = 1e-5);
        }
        for (uv, n) in s.uvs.iter().zip(&s.normals) {
            assert!((0.0..=1.0).contains(&uv.u()) && (0.0..=1.0).contains(&uv.v()));
            assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        for p in 0..3 {
            crate::utils::assert_counter_clockwise(&icosahedron(p).unwrap());
        }
    }

    #[test]
    fn test_limit() {
        assert!(icosahedron(6).is_ok());
        assert!(icosahedron(7).unwrap_err().is_too_many_vertices());
        assert!(icosahedron(40).unwrap_err().is_too_many_vertices());
    }
}
