//! Error types for tessera-math operations.
//!
//! Almost everything in this crate is total: vector and matrix arithmetic
//! follows IEEE-754 and propagates `inf`/`NaN` instead of failing. The two
//! exceptions are inverting a singular matrix and the strict camera
//! constructor [`Mat4::try_look_at`](crate::Mat4::try_look_at).
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{Mat2, MathError};
//!
//! let singular = Mat2::new(1.0, 2.0, 2.0, 4.0);
//! match singular.inverse() {
//!     Err(MathError::Singular { det }) => assert_eq!(det, 0.0),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::Matrix`] - `inverse()` on every concrete size
//! - `tessera-scene` - wrapped by `SceneError::Math`

use thiserror::Error;

/// Result type alias using [`MathError`] as the error type.
pub type MathResult<T> = std::result::Result<T, MathError>;

/// Errors raised by matrix and camera construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// The matrix determinant is too close to zero to invert.
    ///
    /// Returned when `|det| <= SINGULAR_THRESHOLD`. The offending
    /// determinant is carried so callers can log how close it was.
    #[error("matrix is singular (det = {det}), cannot invert")]
    Singular {
        /// Determinant that failed the check
        det: f32,
    },

    /// `eye` and `target` coincide, so no view direction exists.
    #[error("degenerate view: eye and target are the same point")]
    DegenerateView,
}

impl MathError {
    /// Creates a [`MathError::Singular`] error.
    #[inline]
    pub fn singular(det: f32) -> Self {
        Self::Singular { det }
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_message() {
        let err = MathError::singular(0.0);
        assert!(err.to_string().contains("singular"));
        assert!(err.is_singular());
    }

    #[test]
    fn test_degenerate_view() {
        let err = MathError::DegenerateView;
        assert!(!err.is_singular());
        assert!(err.to_string().contains("eye"));
    }
}
