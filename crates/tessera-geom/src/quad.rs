//! Unit quad in the XY plane.

use crate::{GeomResult, ShapeData};
use tessera_math::{Vec2, Vec3};
use tracing::trace;

/// A unit square centered on the origin, facing `-Z`.
///
/// UV `(0, 0)` is the top-left corner.
///
/// # Errors
///
/// Never fails in practice; the `Result` matches the other generators.
pub fn quad() -> GeomResult<ShapeData> {
    trace!("quad");
    let h = 0.5;

    let vertices = vec![
        Vec3::new(-h, h, 0.0),
        Vec3::new(-h, -h, 0.0),
        Vec3::new(h, -h, 0.0),
        Vec3::new(h, h, 0.0),
    ];
    let uvs = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    ];

    ShapeData::new(
        vertices,
        uvs,
        vec![Vec3::new(0.0, 0.0, -1.0); 4],
        vec![Vec3::X; 4],
        vec![[0, 2, 1], [0, 3, 2]],
    )
}
