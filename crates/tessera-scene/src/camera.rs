//! Perspective camera with a cached view-projection matrix.
//!
//! [`Camera`] combines [`Mat4::perspective`] and [`Mat4::look_at`] into a
//! single `projection · view` matrix. The product is rebuilt lazily: setters
//! only mark the camera dirty, and [`Camera::matrix`] recomputes on the next
//! read.
//!
//! The `direction` vector has two meanings, chosen by
//! [`CameraConfig::target_fixed`]:
//!
//! - `true`: `direction` is an absolute target point the camera keeps
//!   looking at while it moves (orbit style).
//! - `false`: `direction` is relative to the position, so the camera looks
//!   at `position + direction` (fly-through style).
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::Vec3;
//! use tessera_scene::{Camera, CameraConfig};
//!
//! let mut camera = Camera::new(CameraConfig {
//!     ratio: 16.0 / 9.0,
//!     ..Default::default()
//! });
//!
//! let before = camera.matrix();
//! camera.move_position(Vec3::new(0.0, 1.0, 0.0));
//! assert!(camera.is_dirty());
//! assert_ne!(camera.matrix(), before);
//! ```

use tessera_math::{to_rad, Mat4, Vec3};
use tracing::trace;

/// Camera construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub ratio: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance. May be `f32::INFINITY`.
    pub far: f32,
    /// Eye position.
    pub position: Vec3,
    /// Target point, or direction relative to `position` when
    /// `target_fixed` is false.
    pub direction: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Whether `direction` is an absolute target.
    pub target_fixed: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            ratio: 1.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::ZERO,
            up: Vec3::Y,
            target_fixed: true,
        }
    }
}

/// A perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    matrix: Mat4,
    dirty: bool,
}

impl Camera {
    /// Creates a camera. The matrix is built on first read.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            matrix: Mat4::IDENTITY,
            dirty: true,
        }
    }

    /// Current parameters.
    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Projection matrix from the frustum parameters.
    pub fn perspective_matrix(&self) -> Mat4 {
        let c = &self.config;
        Mat4::perspective(to_rad(c.fovy), c.ratio, c.near, c.far)
    }

    /// Point the camera looks at.
    pub fn target(&self) -> Vec3 {
        if self.config.target_fixed {
            self.config.direction
        } else {
            self.config.position + self.config.direction
        }
    }

    /// View matrix. Identity if the camera sits on its own target.
    pub fn look_at_matrix(&self) -> Mat4 {
        Mat4::look_at(self.config.position, self.target(), self.config.up)
    }

    /// Combined `perspective · look_at` matrix, rebuilt if dirty.
    pub fn matrix(&mut self) -> Mat4 {
        self.update();
        self.matrix
    }

    /// Returns `true` if a setter ran since the matrix was last built.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuilds the cached matrix if dirty.
    pub fn update(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.matrix = Mat4::IDENTITY
            .apply(&self.perspective_matrix())
            .apply(&self.look_at_matrix());
        trace!(position = %self.config.position, target = %self.target(), "camera::update");
    }

    /// Eye position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.config.position
    }

    /// Target point or relative direction, see [`CameraConfig::direction`].
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.config.direction
    }

    /// Moves the eye to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.config.position = position;
        self.dirty = true;
    }

    /// Replaces the target (or relative direction).
    pub fn set_target(&mut self, target: Vec3) {
        self.config.direction = target;
        self.dirty = true;
    }

    /// Changes the aspect ratio, typically after a viewport resize.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.config.ratio = ratio;
        self.dirty = true;
    }

    /// Changes the vertical field of view, in degrees.
    pub fn set_fovy(&mut self, fovy: f32) {
        self.config.fovy = fovy;
        self.dirty = true;
    }

    /// Offsets the eye position by `delta`.
    pub fn move_position(&mut self, delta: Vec3) {
        self.config.position += delta;
        self.dirty = true;
    }

    /// Offsets the target (or relative direction) by `delta`.
    pub fn move_direction(&mut self, delta: Vec3) {
        self.config.direction += delta;
        self.dirty = true;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
