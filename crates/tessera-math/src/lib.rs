//! # tessera-math
//!
//! Transformation algebra for real-time 3D rendering.
//!
//! This crate provides the fixed-size linear algebra the renderer is built on:
//!
//! - [`Vector<N>`] with the [`Vec2`], [`Vec3`] and [`Vec4`] aliases
//! - [`Matrix<N>`] with the [`Mat2`], [`Mat3`] and [`Mat4`] aliases
//! - Camera factories ([`Mat4::look_at`], [`Mat4::perspective`], [`Mat4::orthogonal`])
//! - Angle helpers ([`to_rad`], [`to_deg`])
//!
//! # Design
//!
//! Matrices are stored **column-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! All types are `Copy` and every builder consumes `self` and returns the
//! result, so transforms read as chains. A chain composes by
//! right-multiplication: the call written last is applied to points first.
//!
//! Both types are `bytemuck::Pod`, so matrices and vertex slices can be
//! uploaded to the GPU without copying.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{to_rad, Mat4, Vec3};
//!
//! let model = Mat4::IDENTITY
//!     .translate(Vec3::new(1.0, 0.0, 0.0))
//!     .rotate(to_rad(90.0), Vec3::Z);
//!
//! let p = model.transform_point(Vec3::new(1.0, 0.0, 0.0));
//! assert!((p - Vec3::new(1.0, 1.0, 0.0)).magnitude() < 1e-6);
//!
//! // Column-major upload buffer
//! let uniform: &[f32] = model.as_slice();
//! assert_eq!(uniform.len(), 16);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop and cross-checking against a SIMD math library
//! - [`bytemuck`] - Zero-copy byte views for GPU upload
//! - [`approx`] - Tolerance comparisons for vectors and matrices
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Diagnostics on singular and degenerate inputs
//!
//! # Used By
//!
//! - `tessera-scene` - Matrix stack, scene nodes, camera
//! - `tessera-color` - HSV triplets as [`Vec3`]
//! - `tessera-geom` - Vertex and index buffers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod mat2;
mod mat3;
mod mat4;
mod matrix;
mod utils;
mod vector;

pub use error::{MathError, MathResult};
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use matrix::{Matrix, SINGULAR_THRESHOLD};
pub use utils::{to_deg, to_rad, DEG_TO_RAD, RAD_TO_DEG};
pub use vector::{Vec2, Vec3, Vec4, Vector};
