//! UV sphere.

use crate::{tangents_from_triangles, GeomError, GeomResult, ShapeData, MAX_VERTICES};
use std::f32::consts::PI;
use tessera_math::{Vec2, Vec3};
use tracing::trace;

/// Minimum number of slices in either direction.
pub const MIN_SPHERE_SLICES: u32 = 3;

/// A UV sphere of diameter 1 centered on the origin.
///
/// `precision_x` is the number of latitude bands (pole to pole) and
/// `precision_y` the number of longitude segments. Both are raised to at
/// least [`MIN_SPHERE_SLICES`]. A seam column of duplicate vertices gives
/// each longitude its own `u` in `[0, 1]`.
///
/// # Errors
///
/// [`GeomError::TooManyVertices`] if `(precision_x + 1) * (precision_y + 1)`
/// exceeds [`MAX_VERTICES`].
pub fn sphere(precision_x: u32, precision_y: u32) -> GeomResult<ShapeData> {
    let nv = precision_x.max(MIN_SPHERE_SLICES) as usize;
    let nh = precision_y.max(MIN_SPHERE_SLICES) as usize;

    let count = (nv + 1).saturating_mul(nh + 1);
    if count > MAX_VERTICES {
        return Err(GeomError::TooManyVertices { count });
    }
    trace!(nv, nh, count, "sphere");

    let mut vertices = Vec::with_capacity(count);
    let mut uvs = Vec::with_capacity(count);

    for x in 0..=nv {
        let polar = PI * x as f32 / nv as f32;
        for y in 0..=nh {
            let azimuth = 2.0 * PI * y as f32 / nh as f32;
            vertices.push(Vec3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            ));
            uvs.push(Vec2::new(y as f32 / nh as f32, x as f32 / nv as f32));
        }
    }

    // Row stride
    let l = (nh + 1) as u32;
    let mut triangles = Vec::with_capacity(2 * nv * nh);
    for x in 0..nv as u32 {
        for y in 0..nh as u32 {
            let i0 = x * l + y;
            let i1 = i0 + 1;
            let i2 = i0 + l;
            let i3 = i1 + l;

            // the first band touches the north pole, the last the south pole
            if x != nv as u32 - 1 {
                triangles.push([i0, i3, i2]);
            }
            if x != 0 {
                triangles.push([i0, i1, i3]);
            }
        }
    }

    let normals = vertices.clone();
    let tangents = tangents_from_triangles(&vertices, &uvs, &triangles);
    let vertices = vertices.into_iter().map(|v| v / 2.0).collect();

    ShapeData::new(vertices, uvs, normals, tangents, triangles)
}
