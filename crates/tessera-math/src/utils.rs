//! Angle conversions.
//!
//! Every rotation and camera factory in this crate takes radians. Camera
//! configuration and user input usually arrive in degrees.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{to_deg, to_rad};
//!
//! assert!((to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
//! assert!((to_deg(to_rad(45.0)) - 45.0).abs() < 1e-4);
//! ```

/// Multiplier from degrees to radians (`PI / 180`).
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Multiplier from radians to degrees (`180 / PI`).
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Converts degrees to radians.
#[inline]
pub fn to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees.
#[inline]
pub fn to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}
