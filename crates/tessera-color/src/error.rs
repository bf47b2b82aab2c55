//! Error types for color operations.
//!
//! Conversions between RGB and HSV are total; only parsing text can fail.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHex {
        /// The string as given.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl ColorError {
    /// Creates a [`ColorError::InvalidHex`] error.
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a hex parsing error.
    #[inline]
    pub fn is_invalid_hex(&self) -> bool {
        matches!(self, Self::InvalidHex { .. })
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = ColorError::invalid_hex("#12", "expected 6 hex digits, got 2");
        assert!(err.is_invalid_hex());
        assert_eq!(
            err.to_string(),
            "invalid hex color \"#12\": expected 6 hex digits, got 2"
        );
    }
}
