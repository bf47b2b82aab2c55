//! Error types for shape generation.

use thiserror::Error;

/// Result type alias using [`GeomError`] as the error type.
pub type GeomResult<T> = std::result::Result<T, GeomError>;

/// Shape generation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The shape has more vertices than 16-bit indices can address.
    #[error("shape has {count} vertices, 16-bit indices address at most {}", crate::MAX_VERTICES)]
    TooManyVertices {
        /// Vertex count of the rejected shape
        count: usize,
    },

    /// Per-vertex attribute arrays disagree in length.
    #[error("attribute {attribute} has {len} entries, expected {expected}")]
    AttributeMismatch {
        /// Attribute name
        attribute: &'static str,
        /// Actual length
        len: usize,
        /// Vertex count
        expected: usize,
    },

    /// A triangle or line refers to a vertex that does not exist.
    #[error("index {index} out of range for {count} vertices")]
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Vertex count
        count: usize,
    },
}

impl GeomError {
    /// Returns `true` if the vertex count exceeded the index range.
    #[inline]
    pub fn is_too_many_vertices(&self) -> bool {
        matches!(self, Self::TooManyVertices { .. })
    }
}
