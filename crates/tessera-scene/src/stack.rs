//! Bounded stack of composed world transforms.
//!
//! [`MatrixStack`] mirrors the push/pop discipline of immediate-mode 3D APIs.
//! It always holds an identity base; every [`push`](MatrixStack::push)
//! composes the new local transform with the current top, so the top is the
//! world matrix of whatever is being drawn.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{Mat4, Vec3};
//! use tessera_scene::MatrixStack;
//!
//! let mut stack = MatrixStack::new();
//! let body = Mat4::IDENTITY.translate(Vec3::new(0.0, 1.0, 0.0));
//! let arm = Mat4::IDENTITY.translate(Vec3::new(1.0, 0.0, 0.0));
//!
//! stack.push(&body)?;
//! let world = stack.push(&arm)?;
//! assert_eq!(world.transform_point(Vec3::ZERO), Vec3::new(1.0, 1.0, 0.0));
//!
//! stack.pop();
//! stack.pop();
//! assert!(stack.is_empty());
//! # Ok::<(), tessera_scene::SceneError>(())
//! ```

use crate::{SceneError, SceneResult};
use tessera_math::Mat4;
use tracing::{trace, warn};

/// Default maximum number of matrices above the identity base.
pub const DEFAULT_DEPTH_LIMIT: usize = 128;

/// Stack of composed [`Mat4`] transforms over a permanent identity base.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    /// `stack[0]` is the identity base and is never removed.
    stack: Vec<Mat4>,
    depth_limit: usize,
}

impl MatrixStack {
    /// Creates a stack holding only the identity base, with
    /// [`DEFAULT_DEPTH_LIMIT`].
    pub fn new() -> Self {
        Self::with_depth_limit(DEFAULT_DEPTH_LIMIT)
    }

    /// Creates an empty stack with a custom depth limit.
    pub fn with_depth_limit(depth_limit: usize) -> Self {
        let mut stack = Vec::with_capacity(depth_limit.min(DEFAULT_DEPTH_LIMIT) + 1);
        stack.push(Mat4::IDENTITY);
        Self { stack, depth_limit }
    }

    /// Maximum number of matrices that may be pushed.
    #[inline]
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Changes the depth limit.
    ///
    /// Matrices already on the stack are kept even if the new limit is lower;
    /// further pushes fail until enough have been popped.
    pub fn set_depth_limit(&mut self, depth_limit: usize) {
        self.depth_limit = depth_limit;
    }

    /// Current world matrix. The identity base when nothing is pushed.
    #[inline]
    pub fn head(&self) -> &Mat4 {
        // stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    /// Composes `local` with the current top and pushes the result.
    ///
    /// Returns the new top, `head · local`.
    ///
    /// # Errors
    ///
    /// [`SceneError::DepthLimit`] if [`depth_limit`](Self::depth_limit)
    /// matrices are already pushed. The stack is left unchanged.
    pub fn push(&mut self, local: &Mat4) -> SceneResult<Mat4> {
        if self.size() >= self.depth_limit {
            warn!(limit = self.depth_limit, "matrix stack depth limit reached");
            return Err(SceneError::depth_limit(self.depth_limit));
        }

        let top = self.head().apply(local);
        self.stack.push(top);
        trace!(size = self.size(), "stack::push");
        Ok(top)
    }

    /// Removes and returns the top matrix.
    ///
    /// Returns `None` when only the identity base remains; the base itself is
    /// never removed.
    pub fn pop(&mut self) -> Option<Mat4> {
        if self.stack.len() <= 1 {
            trace!("stack::pop on empty stack");
            return None;
        }
        let top = self.stack.pop();
        trace!(size = self.size(), "stack::pop");
        top
    }

    /// Number of pushed matrices, not counting the identity base.
    #[inline]
    pub fn size(&self) -> usize {
        self.stack.len() - 1
    }

    /// Returns `true` if nothing is pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Pops everything down to the identity base.
    pub fn clear(&mut self) {
        self.stack.truncate(1);
    }

    /// Pushes `local`, runs `f`, then pops.
    ///
    /// The pop happens whether `f` succeeds or fails, so a failing subtree
    /// cannot unbalance the stack.
    ///
    /// # Errors
    ///
    /// The push error converted into `E`, or whatever `f` returns.
    pub fn scoped<T, E, F>(&mut self, local: &Mat4, f: F) -> Result<T, E>
    where
        E: From<SceneError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        let depth = self.size();
        self.push(local)?;
        let result = f(self);
        self.stack.truncate(depth + 1);
        result
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
