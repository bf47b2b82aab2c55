//! Capped cylinder around the Y axis.

use crate::{tangents_from_triangles, GeomError, GeomResult, ShapeData, MAX_VERTICES};
use tessera_math::{to_rad, Vec2, Vec3};
use tracing::trace;

/// Minimum number of slices.
pub const MIN_CYLINDER_SLICES: u32 = 5;

/// Vertices per slice: top center, top rim (cap), top rim (side), bottom
/// rim (side), bottom rim (cap), bottom center.
const SLICE: u32 = 6;

/// A cylinder of height 1 and diameter 1 centered on the origin.
///
/// `precision` slices (at least [`MIN_CYLINDER_SLICES`]) are spaced
/// `360 / (precision - 1)` degrees apart, so the last slice closes the seam
/// on top of the first one. Rim vertices are duplicated between the caps
/// and the side so each keeps its own normal. The side wraps the full UV
/// width; caps use a planar projection.
///
/// # Errors
///
/// [`GeomError::TooManyVertices`] if `6 * precision` exceeds
/// [`MAX_VERTICES`].
pub fn cylinder(precision: u32) -> GeomResult<ShapeData> {
    let precision = precision.max(MIN_CYLINDER_SLICES);
    let count = (precision as usize).saturating_mul(SLICE as usize);
    if count > MAX_VERTICES {
        return Err(GeomError::TooManyVertices { count });
    }
    trace!(precision, count, "cylinder");

    let step = to_rad(360.0 / (precision - 1) as f32);

    let mut vertices = Vec::with_capacity(count);
    let mut uvs = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    for i in 0..precision {
        let (sin, cos) = (i as f32 * step).sin_cos();
        let u = i as f32 / (precision - 1) as f32;
        let side = Vec3::new(cos, 0.0, sin);
        let cap_uv = Vec2::new(0.5 + cos / 2.0, 0.5 + sin / 2.0);

        vertices.extend([
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(cos, 1.0, sin),
            Vec3::new(cos, 1.0, sin),
            Vec3::new(cos, -1.0, sin),
            Vec3::new(cos, -1.0, sin),
            Vec3::new(0.0, -1.0, 0.0),
        ]);
        normals.extend([Vec3::Y, Vec3::Y, side, side, -Vec3::Y, -Vec3::Y]);
        uvs.extend([
            Vec2::new(0.5, 0.5),
            cap_uv,
            Vec2::new(u, 0.0),
            Vec2::new(u, 1.0),
            cap_uv,
            Vec2::new(0.5, 0.5),
        ]);
    }

    let mut triangles = Vec::with_capacity(4 * precision as usize);
    for i in 0..precision {
        let b = i * SLICE;
        let n = ((i + 1) % precision) * SLICE;
        triangles.extend([
            [b, n + 1, b + 1],     // top cap
            [b + 2, n + 2, b + 3], // side
            [b + 3, n + 2, n + 3], // side
            [b + 4, n + 4, b + 5], // bottom cap
        ]);
    }

    let tangents = tangents_from_triangles(&vertices, &uvs, &triangles);
    let vertices = vertices.into_iter().map(|v| v / 2.0).collect();

    ShapeData::new(vertices, uvs, normals, tangents, triangles)
}
