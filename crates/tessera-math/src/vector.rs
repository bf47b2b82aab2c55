//! Fixed-arity float vectors.
//!
//! [`Vector<N>`] is an ordered tuple of `N` single-precision floats backed by
//! one `[f32; N]` array. [`Vec2`], [`Vec3`] and [`Vec4`] are aliases for the
//! three arities used by the renderer.
//!
//! # Storage
//!
//! Named accessors (`x/y/z/w`, `r/g/b/a`, `w/h`, `u/v`, `h/s/v`) read and
//! write fixed offsets of the backing array. There are no separate fields, so
//! the slice handed to a vertex buffer or uniform upload is always the same
//! data the accessors see.
//!
//! # Semantics
//!
//! All arithmetic follows IEEE-754. [`Vector::normalize`] on a zero vector
//! and [`Vector::inverse`] on a zero component produce `NaN`/`inf` rather
//! than failing; use [`Vector::try_normalize`] for a checked variant.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::Vec3;
//!
//! let a = Vec3::new(2.0, 3.0, 4.0);
//! let b = Vec3::new(5.0, 6.0, 7.0);
//! assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
//!
//! let n = (a + b).normalize();
//! assert!((n.magnitude() - 1.0).abs() < 1e-6);
//! ```

use crate::Matrix;
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A vector of `N` `f32` components.
///
/// `#[repr(transparent)]` over `[f32; N]`, so a `&[Vector<N>]` can be cast
/// to a flat `&[f32]` with [`bytemuck`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub(crate) [f32; N]);

/// 2-component vector (points in the plane, sizes, texture coordinates).
pub type Vec2 = Vector<2>;

/// 3-component vector (positions, directions, RGB/HSV colors, index triples).
pub type Vec3 = Vector<3>;

/// 4-component vector (homogeneous points, RGBA colors).
pub type Vec4 = Vector<4>;

// SAFETY: `Vector<N>` is `repr(transparent)` over `[f32; N]`, which has no
// padding and for which every bit pattern is valid.
unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
// SAFETY: see above; the type is also `Copy + 'static`.
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// Number of components.
    pub const COUNT: usize = N;

    /// All components zero.
    pub const ZERO: Self = Self([0.0; N]);

    /// All components one.
    pub const ONE: Self = Self([1.0; N]);

    /// Creates a vector from an array of components.
    #[inline]
    pub const fn from_array(a: [f32; N]) -> Self {
        Self(a)
    }

    /// Converts to an array of components.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.0
    }

    /// Creates a vector with every component set to `v`.
    #[inline]
    pub const fn all(v: f32) -> Self {
        Self([v; N])
    }

    /// Zero vector.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Vector of ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::ONE
    }

    /// Components as a flat slice, in order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Components as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Raw bytes of the components, native endian, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0[..])
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    #[inline]
    fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Dot product: sum of elementwise products.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Squared length (avoids the square root).
    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Divides by the magnitude.
    ///
    /// A zero vector yields `NaN` components. Callers that cannot rule out a
    /// zero input should use [`try_normalize`](Self::try_normalize).
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Normalizes, returning `None` when the magnitude is zero or not finite.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.magnitude();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Flips the sign of every component.
    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// Elementwise reciprocal. Zero components become `inf`.
    #[inline]
    pub fn inverse(self) -> Self {
        self.map(|x| 1.0 / x)
    }

    /// Rounds every component to `decimals` decimal places.
    ///
    /// Meant for deterministic comparisons in tests and debug output.
    #[inline]
    pub fn round(self, decimals: u32) -> Self {
        let factor = 10f32.powi(decimals as i32);
        self.map(|x| (x * factor).round() / factor)
    }

    /// Multiplies by `m` treating `self` as a column vector (`m * self`).
    #[inline]
    pub fn transform(self, m: &Matrix<N>) -> Self {
        *m * self
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Vec2
// ============================================================================

impl Vector<2> {
    /// Creates a new 2-vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    /// X component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    /// Y component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// Width (alias of `x` for sizes).
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[0]
    }

    /// Height (alias of `y` for sizes).
    #[inline]
    pub const fn h(&self) -> f32 {
        self.0[1]
    }

    /// Texture U (alias of `x`).
    #[inline]
    pub const fn u(&self) -> f32 {
        self.0[0]
    }

    /// Texture V (alias of `y`).
    #[inline]
    pub const fn v(&self) -> f32 {
        self.0[1]
    }

    /// Sets the X component.
    #[inline]
    pub fn set_x(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the Y component.
    #[inline]
    pub fn set_y(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the width (X component).
    #[inline]
    pub fn set_w(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the height (Y component).
    #[inline]
    pub fn set_h(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the U texture coordinate (X component).
    #[inline]
    pub fn set_u(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the V texture coordinate (Y component).
    #[inline]
    pub fn set_v(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Extends to a 3-vector with the given `z`.
    #[inline]
    pub const fn to_vec3(self, z: f32) -> Vec3 {
        Vector([self.0[0], self.0[1], z])
    }

    /// Extends to a 4-vector with the given `z` and `w`.
    #[inline]
    pub const fn to_vec4(self, z: f32, w: f32) -> Vec4 {
        Vector([self.0[0], self.0[1], z, w])
    }

    /// Converts to glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::from_array(self.0)
    }

    /// Creates from glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self(v.to_array())
    }
}

// ============================================================================
// Vec3
// ============================================================================

impl Vector<3> {
    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self([1.0, 0.0, 0.0]);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self([0.0, 1.0, 0.0]);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Creates a new 3-vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    /// X component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    /// Y component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// Z component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Red channel (alias of `x`).
    #[inline]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    /// Green channel (alias of `y`).
    #[inline]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    /// Blue channel (alias of `z`).
    #[inline]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    /// Hue (alias of `x` for HSV triplets).
    #[inline]
    pub const fn h(&self) -> f32 {
        self.0[0]
    }

    /// Saturation (alias of `y` for HSV triplets).
    #[inline]
    pub const fn s(&self) -> f32 {
        self.0[1]
    }

    /// Value (alias of `z` for HSV triplets).
    #[inline]
    pub const fn v(&self) -> f32 {
        self.0[2]
    }

    /// Sets the X component.
    #[inline]
    pub fn set_x(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the Y component.
    #[inline]
    pub fn set_y(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the Z component.
    #[inline]
    pub fn set_z(&mut self, value: f32) {
        self.0[2] = value;
    }

    /// Sets the red channel.
    #[inline]
    pub fn set_r(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the green channel.
    #[inline]
    pub fn set_g(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the blue channel.
    #[inline]
    pub fn set_b(&mut self, value: f32) {
        self.0[2] = value;
    }

    /// Sets the hue (X component).
    #[inline]
    pub fn set_h(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the saturation (Y component).
    #[inline]
    pub fn set_s(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the value (Z component).
    #[inline]
    pub fn set_v(&mut self, value: f32) {
        self.0[2] = value;
    }

    /// Cross product, right-handed.
    ///
    /// `(a.y*b.z - a.z*b.y, a.z*b.x - a.x*b.z, a.x*b.y - a.y*b.x)`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Drops `z`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vector([self.0[0], self.0[1]])
    }

    /// Extends to a 4-vector with the given `w`.
    #[inline]
    pub const fn to_vec4(self, w: f32) -> Vec4 {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }

    /// Equirectangular texture coordinate of a direction on the unit sphere.
    ///
    /// `u` wraps around the Y axis starting at +X, `v` runs from 0 at the
    /// north pole (+Y) to 1 at the south pole. The input is expected to be
    /// normalized.
    pub fn to_uv_of_sphere(self) -> Vec2 {
        let [x, y, z] = self.0;
        let u = 0.5 + z.atan2(x) / std::f32::consts::TAU;
        let v = 0.5 - y.clamp(-1.0, 1.0).asin() / std::f32::consts::PI;
        Vector([u, v])
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::from_array(self.0)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self(v.to_array())
    }
}

// ============================================================================
// Vec4
// ============================================================================

impl Vector<4> {
    /// Creates a new 4-vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// X component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    /// Y component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// Z component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// W component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(&self) -> f32 {
        self.0[3]
    }

    /// Sets the X component.
    #[inline]
    pub fn set_x(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the Y component.
    #[inline]
    pub fn set_y(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the Z component.
    #[inline]
    pub fn set_z(&mut self, value: f32) {
        self.0[2] = value;
    }

    /// Sets the W component.
    #[inline]
    pub fn set_w(&mut self, value: f32) {
        self.0[3] = value;
    }

    /// Sets the red channel.
    #[inline]
    pub fn set_r(&mut self, value: f32) {
        self.0[0] = value;
    }

    /// Sets the green channel.
    #[inline]
    pub fn set_g(&mut self, value: f32) {
        self.0[1] = value;
    }

    /// Sets the blue channel.
    #[inline]
    pub fn set_b(&mut self, value: f32) {
        self.0[2] = value;
    }

    /// Sets the alpha channel.
    #[inline]
    pub fn set_a(&mut self, value: f32) {
        self.0[3] = value;
    }

    /// Drops `z` and `w`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vector([self.0[0], self.0[1]])
    }

    /// Drops `w`.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vector([self.0[0], self.0[1], self.0[2]])
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::from_array(self.0)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self(v.to_array())
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

// Vector * f32
impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|x| x * rhs)
    }
}

// f32 * Vector
impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

// Vector / f32
impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|x| x / rhs)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const N: usize> DivAssign<f32> for Vector<N> {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Conversions & formatting
// ============================================================================

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(a: [f32; N]) -> Self {
        Self(a)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(v: Vector<N>) -> [f32; N] {
        v.0
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

impl<const N: usize> AbsDiffEq for Vector<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Vector<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mat3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec_new_and_accessors() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_accessors_alias_storage() {
        let mut size = Vec2::new(640.0, 480.0);
        size.set_w(800.0);
        assert_eq!(size.x(), 800.0);
        assert_eq!(size.as_slice()[0], 800.0);

        let mut color = Vec3::new(0.1, 0.2, 0.3);
        color.set_g(0.9);
        assert_eq!(color.y(), 0.9);
        assert_eq!(color[1], 0.9);

        let mut uv = Vec2::new(0.25, 0.75);
        uv.set_u(0.5);
        uv.set_v(1.0);
        assert_eq!(uv.to_array(), [0.5, 1.0]);

        let mut hsv = Vec3::new(0.0, 0.5, 0.5);
        hsv.set_h(0.25);
        hsv.set_s(1.0);
        hsv.set_v(0.75);
        assert_eq!(hsv.to_array(), [0.25, 1.0, 0.75]);
        assert_eq!((hsv.x(), hsv.y(), hsv.z()), (0.25, 1.0, 0.75));

        let mut rgba = Vec4::new(0.0, 0.0, 0.0, 1.0);
        rgba.set_r(0.1);
        rgba.set_g(0.2);
        rgba.set_b(0.3);
        rgba.set_a(0.4);
        assert_eq!(rgba.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(rgba.w(), 0.4);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c *= 2.0;
        assert_eq!(c, Vec3::new(10.0, 14.0, 18.0));
    }

    #[test]
    fn test_dot_and_magnitude() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(a.magnitude_squared(), 14.0);
        assert_abs_diff_eq!(a.magnitude(), 14f32.sqrt());
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).normalize(), Vec3::X);
        let n = Vec3::new(1.0, 2.0, 3.0).normalize().round(2);
        assert_abs_diff_eq!(n, Vec3::new(0.27, 0.53, 0.80), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x().is_nan());
        assert!(Vec3::ZERO.try_normalize().is_none());
        assert!(Vec3::Y.try_normalize().is_some());
    }

    #[test]
    fn test_inverse_elementwise() {
        let a = Vec3::new(1.0, 0.0, 0.0).inverse();
        assert_eq!(a.x(), 1.0);
        assert_eq!(a.y(), f32::INFINITY);
        let b = Vec3::new(1.0, 2.0, 3.0).inverse().round(2);
        assert_abs_diff_eq!(b, Vec3::new(1.0, 0.5, 0.33), epsilon = 1e-6);
    }

    #[test]
    fn test_round() {
        let a = Vec3::new(1.3456, 2.3456, 3.3456);
        assert_eq!(a.round(0), Vec3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(a.round(1), Vec3::new(1.3, 2.3, 3.3), epsilon = 1e-6);
        assert_abs_diff_eq!(a.round(3), Vec3::new(1.346, 2.346, 3.346), epsilon = 1e-6);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a, a / 4.0 * 4.0);
        assert_ne!(a, Vec3::ZERO);
        assert_ne!(Vec3::new(0.1, 0.0, 0.0), Vec3::new(0.1 + 1e-7, 0.0, 0.0));
    }

    #[test]
    fn test_cross() {
        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(5.0, 6.0, 7.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(b.cross(a), Vec3::new(3.0, -6.0, 3.0));
        assert_eq!(Vec3::Y.cross(Vec3::X), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(a.cross(a), Vec3::ZERO);
    }

    #[test]
    fn test_conversions_pad_explicitly() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.to_vec4(4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(a.to_vec2(), Vec2::new(1.0, 2.0));
        assert_eq!(Vec2::new(1.0, 2.0).to_vec4(0.0, 1.0), Vec4::new(1.0, 2.0, 0.0, 1.0));
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).to_vec3(), a);
    }

    #[test]
    fn test_transform() {
        let m = Mat3::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        let v = Vec3::new(1.0, 2.0, 3.0).transform(&m);
        assert_eq!(v, Vec3::new(8.0, 26.0, 44.0));
    }

    #[test]
    fn test_uv_of_sphere() {
        let north = Vec3::Y.to_uv_of_sphere();
        assert_abs_diff_eq!(north.v(), 0.0);
        let south = (-Vec3::Y).to_uv_of_sphere();
        assert_abs_diff_eq!(south.v(), 1.0);
        let equator = Vec3::X.to_uv_of_sphere();
        assert_abs_diff_eq!(equator, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_bytes_layout() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.as_bytes().len(), 8);
        let verts = [Vec3::X, Vec3::Y];
        let flat: &[f32] = bytemuck::cast_slice(&verts[..]);
        assert_eq!(flat, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, 2.5, -3.0).to_string(), "[1,2.5,-3]");
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g), v);
    }
}
