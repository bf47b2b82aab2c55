//! Scene-graph nodes and depth-first traversal.
//!
//! A [`SceneNode`] owns a local transform, an optional payload (a mesh
//! handle, a draw call, anything) and its children. [`SceneNode::walk`]
//! drives a [`MatrixStack`] so that each payload is visited with the product
//! of every ancestor's local transform and its own.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{Mat4, Vec3};
//! use tessera_scene::{MatrixStack, SceneError, SceneNode};
//!
//! let sun = SceneNode::new(Mat4::IDENTITY)
//!     .with_payload("sun")
//!     .with_child(
//!         SceneNode::new(Mat4::IDENTITY.translate(Vec3::new(10.0, 0.0, 0.0)))
//!             .with_payload("earth"),
//!     );
//!
//! let mut stack = MatrixStack::new();
//! let mut seen = Vec::new();
//! sun.walk(&mut stack, &mut |name, world| {
//!     seen.push((*name, world.transform_point(Vec3::ZERO).x()));
//!     Ok::<_, SceneError>(())
//! })?;
//!
//! assert_eq!(seen, [("sun", 0.0_f32), ("earth", 10.0_f32)]);
//! # Ok::<(), SceneError>(())
//! ```

use crate::{MatrixStack, SceneError};
use tessera_math::Mat4;

/// A node in a transform hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode<T> {
    local: Mat4,
    payload: Option<T>,
    children: Vec<SceneNode<T>>,
}

impl<T> SceneNode<T> {
    /// Creates a node with no payload and no children.
    pub fn new(local: Mat4) -> Self {
        Self {
            local,
            payload: None,
            children: Vec::new(),
        }
    }

    /// Sets the payload.
    pub fn with_payload(mut self, payload: T) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Appends a child.
    pub fn with_child(mut self, child: SceneNode<T>) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child in place.
    pub fn add_child(&mut self, child: SceneNode<T>) {
        self.children.push(child);
    }

    /// Local transform relative to the parent.
    #[inline]
    pub fn local(&self) -> &Mat4 {
        &self.local
    }

    /// Replaces the local transform.
    #[inline]
    pub fn set_local(&mut self, local: Mat4) {
        self.local = local;
    }

    /// The payload, if any.
    #[inline]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Mutable payload, if any.
    #[inline]
    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    /// Direct children.
    #[inline]
    pub fn children(&self) -> &[SceneNode<T>] {
        &self.children
    }

    /// Mutable direct children.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [SceneNode<T>] {
        &mut self.children
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Depth-first traversal: push, visit, recurse, pop.
    ///
    /// `visitor` is called once per node that carries a payload, in
    /// pre-order, with the node's world matrix. The stack is returned to its
    /// prior depth even when the visitor fails.
    ///
    /// # Errors
    ///
    /// [`SceneError::DepthLimit`] (converted into `E`) if the tree is deeper
    /// than the stack allows, or the first error returned by `visitor`.
    pub fn walk<E, F>(&self, stack: &mut MatrixStack, visitor: &mut F) -> Result<(), E>
    where
        E: From<SceneError>,
        F: FnMut(&T, &Mat4) -> Result<(), E>,
    {
        stack.scoped(&self.local, |stack| {
            if let Some(payload) = &self.payload {
                visitor(payload, stack.head())?;
            }
            for child in &self.children {
                child.walk(stack, visitor)?;
            }
            Ok(())
        })
    }
}
