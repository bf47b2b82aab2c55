//! # tessera-scene
//!
//! Scene composition on top of [`tessera_math`].
//!
//! - [`MatrixStack`] - Bounded push/pop stack of composed world transforms
//! - [`SceneNode`] - Transform hierarchy with depth-first traversal
//! - [`Camera`] - Perspective camera with a cached view-projection matrix
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{Mat4, Vec3};
//! use tessera_scene::{Camera, MatrixStack};
//!
//! let mut camera = Camera::default();
//! let view_proj = camera.matrix();
//!
//! let mut stack = MatrixStack::new();
//! stack.push(&view_proj)?;
//! let mvp = stack.push(&Mat4::IDENTITY.translate(Vec3::new(0.0, 0.5, 0.0)))?;
//! // upload mvp.as_slice() as a uniform
//! stack.pop();
//! stack.pop();
//! # let _ = mvp;
//! # Ok::<(), tessera_scene::SceneError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`tessera_math`] - Matrices and vectors
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Stack and camera diagnostics
//!
//! # Used By
//!
//! - `tessera-tests` - Integration tests
//! - `tessera-bench` - Stack benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod camera;
mod error;
mod node;
mod stack;

pub use camera::{Camera, CameraConfig};
pub use error::{SceneError, SceneResult};
pub use node::SceneNode;
pub use stack::{MatrixStack, DEFAULT_DEPTH_LIMIT};
