//! # tessera-color
//!
//! Color utilities for scene materials and UI.
//!
//! - [`rgb_to_hsv`] / [`hsv_to_rgb`] - Conversions with every channel in `[0, 1]`
//! - [`hex_to_rgb`] / [`hex_to_rgba`] - `#RRGGBB[AA]` parsing
//! - [`rgb_to_hex`] / [`rgba_to_hex`] - Formatting back to hex
//!
//! Colors are plain [`tessera_math::Vec3`] / [`tessera_math::Vec4`] values,
//! read through the `r/g/b/a` and `h/s/v` accessors.
//!
//! # Usage
//!
//! ```rust
//! use tessera_color::{hex_to_rgb, HsvConvert};
//!
//! let base = hex_to_rgb("#3D2F36")?;
//! let mut hsv = base.to_hsv();
//! hsv.set_z(hsv.v() * 1.5);
//! let lighter = hsv.to_rgb();
//! assert!(lighter.r() > base.r());
//! # Ok::<(), tessera_color::ColorError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`tessera_math`] - Vector types
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Debug events on rejected input
//!
//! # Used By
//!
//! - `tessera-tests` - Integration tests
//! - `tessera-bench` - Benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod hex;
mod hsv;

pub use error::{ColorError, ColorResult};
pub use hex::{hex_to_rgb, hex_to_rgba, rgb_to_hex, rgba_to_hex};
pub use hsv::{hsv_degrees_to_unit, hsv_to_rgb, hsv_unit_to_degrees, rgb_to_hsv, HsvConvert};
