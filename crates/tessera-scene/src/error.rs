//! Error types for scene composition.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::MatrixStack`] - Depth guard on `push`
//! - [`crate::SceneNode`] - Propagated out of traversal visitors

use tessera_math::MathError;
use thiserror::Error;

/// Result type alias using [`SceneError`] as the error type.
pub type SceneResult<T> = std::result::Result<T, SceneError>;

/// Scene composition error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Pushing would grow the matrix stack past its depth limit.
    ///
    /// Almost always a missing `pop()` in recursive traversal code.
    #[error("matrix stack depth limit ({limit}) reached, check push/pop balance")]
    DepthLimit {
        /// Configured limit that was hit
        limit: usize,
    },

    /// A matrix operation failed inside the scene.
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

impl SceneError {
    /// Creates a [`SceneError::DepthLimit`] error.
    #[inline]
    pub fn depth_limit(limit: usize) -> Self {
        Self::DepthLimit { limit }
    }

    /// Returns `true` if the stack depth guard tripped.
    #[inline]
    pub fn is_depth_limit(&self) -> bool {
        matches!(self, Self::DepthLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit() {
        let err = SceneError::depth_limit(128);
        assert!(err.is_depth_limit());
        assert!(err.to_string().contains("128"));
    }

    #[test]
    fn test_from_math() {
        let err: SceneError = MathError::DegenerateView.into();
        assert!(!err.is_depth_limit());
        assert_eq!(err, SceneError::Math(MathError::DegenerateView));
    }
}
