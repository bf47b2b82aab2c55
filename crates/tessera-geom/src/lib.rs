//! # tessera-geom
//!
//! Procedural meshes ready for upload as vertex and element buffers.
//!
//! Generators return a [`ShapeData`] with one array per attribute:
//!
//! - [`quad`] - Unit square facing `-Z`
//! - [`cube`] - Flat-shaded cube with per-face UVs
//! - [`sphere`] - Latitude/longitude sphere
//! - [`icosahedron`] - Subdivided icosphere
//! - [`cylinder`] - Capped cylinder around Y
//!
//! The [`Shape`] implementations ([`BasicShape`], [`TexturedShape`],
//! [`DebugShape`]) interleave the attributes into a single `f32` buffer.
//!
//! # Usage
//!
//! ```rust
//! use tessera_geom::{sphere, DebugShape, Shape};
//!
//! let data = sphere(16, 32)?;
//! let mesh = DebugShape::from(&data);
//!
//! // gl.bufferData(ARRAY_BUFFER, mesh.vertex_bytes(), ...)
//! // gl.bufferData(ELEMENT_ARRAY_BUFFER, mesh.index_bytes(), ...)
//! assert_eq!(mesh.vertex_size(), 8);
//! assert_eq!(mesh.num_triangles(), data.num_triangles());
//! # Ok::<(), tessera_geom::GeomError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`tessera_math`] - Vector types
//! - [`bytemuck`] - Byte views of vertex and index buffers
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Generation diagnostics
//!
//! # Used By
//!
//! - `tessera-tests` - Integration tests
//! - `tessera-bench` - Generation benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cube;
mod cylinder;
mod error;
mod icosahedron;
mod quad;
mod shape;
mod sphere;
mod utils;

pub use cube::cube;
pub use cylinder::{cylinder, MIN_CYLINDER_SLICES};
pub use error::{GeomError, GeomResult};
pub use icosahedron::icosahedron;
pub use quad::quad;
pub use shape::{BasicShape, DebugShape, Shape, ShapeData, TexturedShape, MAX_VERTICES};
pub use sphere::{sphere, MIN_SPHERE_SLICES};
pub use utils::{lines_from_triangles, tangents_from_triangles};
