//! 4x4 matrices: affine transforms in homogeneous coordinates and camera
//! factories.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{to_rad, Mat4, Vec3};
//!
//! let model = Mat4::IDENTITY
//!     .translate(Vec3::new(0.0, 1.0, 0.0))
//!     .rotate(to_rad(90.0), Vec3::Y)
//!     .scale(Vec3::new(2.0, 2.0, 2.0));
//!
//! let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(to_rad(45.0), 16.0 / 9.0, 0.1, 100.0);
//!
//! let mvp = proj * view * model;
//! assert_eq!(mvp.as_slice().len(), 16);
//! ```
//!
//! # Camera conventions
//!
//! View matrices are right-handed with the camera looking down `-Z`.
//! Projections map view-space depth to NDC `z` in `[-1, 1]`.

use crate::matrix::check_invertible;
use crate::{MathError, MathResult, Mat3, Matrix, Vec3, Vec4};
use tracing::trace;

/// A 4x4 matrix.
pub type Mat4 = Matrix<4>;

impl Matrix<4> {
    /// Creates a matrix from elements written row by row.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self([
            [m00, m10, m20, m30],
            [m01, m11, m21, m31],
            [m02, m12, m22, m32],
            [m03, m13, m23, m33],
        ])
    }

    /// Creates a matrix from a column-major array.
    #[inline]
    pub fn from_cols_array(a: [f32; 16]) -> Self {
        Self(std::array::from_fn(|c| std::array::from_fn(|r| a[c * 4 + r])))
    }

    /// Creates a matrix from a row-major array.
    #[inline]
    pub fn from_rows_array(a: [f32; 16]) -> Self {
        Self(std::array::from_fn(|c| std::array::from_fn(|r| a[r * 4 + c])))
    }

    /// Returns the elements as a column-major array.
    #[inline]
    pub fn to_cols_array(self) -> [f32; 16] {
        std::array::from_fn(|i| self.0[i / 4][i % 4])
    }

    /// Upper-left 3x3 block (the linear part of an affine transform).
    #[inline]
    pub fn to_mat3(self) -> Mat3 {
        Matrix(std::array::from_fn(|c| std::array::from_fn(|r| self.0[c][r])))
    }

    // ========================================================================
    // Affine builders
    // ========================================================================

    /// Translates by `v`: `self · T(v)`.
    #[inline]
    pub fn translate(mut self, v: Vec3) -> Self {
        let [x, y, z] = v.0;
        for r in 0..4 {
            self.0[3][r] += self.0[0][r] * x + self.0[1][r] * y + self.0[2][r] * z;
        }
        self
    }

    /// Scales the X, Y and Z basis columns by the components of `v`.
    #[inline]
    pub fn scale(mut self, v: Vec3) -> Self {
        for (col, s) in self.0.iter_mut().zip(v.0) {
            col.iter_mut().for_each(|e| *e *= s);
        }
        self
    }

    /// Rotates by `angle` radians around `axis`: `self · R(angle, axis)`.
    ///
    /// `axis` must already be unit length; it is not normalized here and a
    /// non-unit axis produces a skewed, non-orthogonal result.
    pub fn rotate(mut self, angle: f32, axis: Vec3) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let [x, y, z] = axis.0;

        // Rodrigues rotation, rRC = row R, column C
        let r00 = x * x * t + c;
        let r01 = y * x * t + z * s;
        let r02 = z * x * t - y * s;
        let r10 = x * y * t - z * s;
        let r11 = y * y * t + c;
        let r12 = z * y * t + x * s;
        let r20 = x * z * t + y * s;
        let r21 = y * z * t - x * s;
        let r22 = z * z * t + c;

        let [c0, c1, c2, _] = self.0;
        for r in 0..4 {
            self.0[0][r] = c0[r] * r00 + c1[r] * r01 + c2[r] * r02;
            self.0[1][r] = c0[r] * r10 + c1[r] * r11 + c2[r] * r12;
            self.0[2][r] = c0[r] * r20 + c1[r] * r21 + c2[r] * r22;
        }
        self
    }

    // ========================================================================
    // Determinant / inverse
    // ========================================================================

    /// The twelve 2x2 minors shared by [`det`](Self::det) and
    /// [`inverse`](Self::inverse): six from columns 0-1, six from columns 2-3.
    #[inline]
    fn minors(&self) -> [f32; 12] {
        let [
            [v00, v10, v20, v30],
            [v01, v11, v21, v31],
            [v02, v12, v22, v32],
            [v03, v13, v23, v33],
        ] = self.0;

        [
            v00 * v11 - v10 * v01,
            v00 * v21 - v20 * v01,
            v00 * v31 - v30 * v01,
            v10 * v21 - v20 * v11,
            v10 * v31 - v30 * v11,
            v20 * v31 - v30 * v21,
            v02 * v13 - v12 * v03,
            v02 * v23 - v22 * v03,
            v02 * v33 - v32 * v03,
            v12 * v23 - v22 * v13,
            v12 * v33 - v32 * v13,
            v22 * v33 - v32 * v23,
        ]
    }

    /// Determinant via Laplace expansion over the first two columns.
    pub fn det(&self) -> f32 {
        let [t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11] = self.minors();
        t0 * t11 - t1 * t10 + t2 * t9 + t3 * t8 - t4 * t7 + t5 * t6
    }

    /// Inverts the matrix.
    ///
    /// # Errors
    ///
    /// [`MathError::Singular`] if the determinant is within
    /// [`SINGULAR_THRESHOLD`](crate::SINGULAR_THRESHOLD) of zero. The check is
    /// absolute, so a uniform scale below about `4.6e-4` is refused as well.
    pub fn inverse(self) -> MathResult<Self> {
        let [t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11] = self.minors();
        let det = check_invertible(t0 * t11 - t1 * t10 + t2 * t9 + t3 * t8 - t4 * t7 + t5 * t6)?;
        let d = 1.0 / det;

        let [
            [v00, v10, v20, v30],
            [v01, v11, v21, v31],
            [v02, v12, v22, v32],
            [v03, v13, v23, v33],
        ] = self.0;

        Ok(Self([
            [
                (v11 * t11 - v21 * t10 + v31 * t9) * d,
                (v20 * t10 - v10 * t11 - v30 * t9) * d,
                (v13 * t5 - v23 * t4 + v33 * t3) * d,
                (v22 * t4 - v12 * t5 - v32 * t3) * d,
            ],
            [
                (v21 * t8 - v01 * t11 - v31 * t7) * d,
                (v00 * t11 - v20 * t8 + v30 * t7) * d,
                (v23 * t2 - v03 * t5 - v33 * t1) * d,
                (v02 * t5 - v22 * t2 + v32 * t1) * d,
            ],
            [
                (v01 * t10 - v11 * t8 + v31 * t6) * d,
                (v10 * t8 - v00 * t10 - v30 * t6) * d,
                (v03 * t4 - v13 * t2 + v33 * t0) * d,
                (v12 * t2 - v02 * t4 - v32 * t0) * d,
            ],
            [
                (v11 * t7 - v01 * t9 - v21 * t6) * d,
                (v00 * t9 - v10 * t7 + v20 * t6) * d,
                (v13 * t1 - v03 * t3 - v23 * t0) * d,
                (v02 * t3 - v12 * t1 + v22 * t0) * d,
            ],
        ]))
    }

    // ========================================================================
    // Camera factories
    // ========================================================================

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// If `eye == target` there is no view direction and the identity matrix
    /// is returned. Use [`try_look_at`](Self::try_look_at) to get an error
    /// instead.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::try_look_at(eye, target, up).unwrap_or_else(|_| {
            trace!("look_at: eye == target, falling back to identity");
            Self::IDENTITY
        })
    }

    /// Strict variant of [`look_at`](Self::look_at).
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateView`] if `eye` and `target` are equal.
    pub fn try_look_at(eye: Vec3, target: Vec3, up: Vec3) -> MathResult<Self> {
        if eye == target {
            return Err(MathError::DegenerateView);
        }

        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Ok(Self([
            [x.x(), y.x(), z.x(), 0.0],
            [x.y(), y.y(), z.y(), 0.0],
            [x.z(), y.z(), z.z(), 0.0],
            [-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0],
        ]))
    }

    /// Symmetric perspective projection.
    ///
    /// `fovy` is the vertical field of view in radians. An infinite `far`
    /// yields the limit matrix with `-1` and `-2 * near` in the depth terms.
    pub fn perspective(fovy: f32, ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy / 2.0).tan();

        let (zz, zw) = if far.is_finite() {
            let nf = 1.0 / (near - far);
            ((far + near) * nf, 2.0 * far * near * nf)
        } else {
            (-1.0, -2.0 * near)
        };

        Self([
            [f / ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, zz, -1.0],
            [0.0, 0.0, zw, 0.0],
        ])
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`.
    pub fn orthogonal(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);

        Self([
            [-2.0 * lr, 0.0, 0.0, 0.0],
            [0.0, -2.0 * bt, 0.0, 0.0],
            [0.0, 0.0, 2.0 * nf, 0.0],
            [(left + right) * lr, (top + bottom) * bt, (far + near) * nf, 1.0],
        ])
    }

    // ========================================================================
    // Point transforms / glam interop
    // ========================================================================

    /// Transforms a point (`w = 1`) with homogeneous divide when `w != 0`.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let out: Vec4 = *self * p.to_vec4(1.0);
        let w = out.w();
        if w != 0.0 && w != 1.0 {
            out.to_vec3() / w
        } else {
            out.to_vec3()
        }
    }

    /// Converts to glam Mat4.
    #[inline]
    pub fn to_glam(self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.to_cols_array())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_rad;
    use approx::assert_abs_diff_eq;

    fn sequential() -> Mat4 {
        Mat4::from_rows_array(std::array::from_fn(|i| i as f32))
    }

    fn assert_cols(m: Mat4, expected: [f32; 16]) {
        assert_abs_diff_eq!(m, Mat4::from_cols_array(expected), epsilon = 0.01);
    }

    #[test]
    fn test_translate() {
        assert_cols(
            sequential().translate(Vec3::ONE),
            [0., 4., 8., 12., 1., 5., 9., 13., 2., 6., 10., 14., 6., 22., 38., 54.],
        );
    }

    #[test]
    fn test_translate_moves_origin() {
        let m = Mat4::IDENTITY.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
        // directions (w = 0) are not translated
        assert_eq!(m * Vec4::new(1.0, 0.0, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_inverse_tiny_uniform_scale() {
        // det = s^3: 1e-12 is under the cutoff, 1e-9 is not
        let tiny = Mat4::IDENTITY.scale(Vec3::all(1e-4));
        assert!(tiny.inverse().unwrap_err().is_singular());

        let small = Mat4::IDENTITY.scale(Vec3::all(1e-3));
        let inv = small.inverse().unwrap();
        assert_abs_diff_eq!(inv, Mat4::IDENTITY.scale(Vec3::all(1e3)), epsilon = 1e-1);
    }

    #[test]
    fn test_det_identity_and_zero() {
        assert_eq!(Mat4::IDENTITY.det(), 1.0);
        assert_eq!(Mat4::ZERO.det(), 0.0);
        assert_eq!(Mat4::IDENTITY.inverse().unwrap(), Mat4::IDENTITY);
        assert!(Mat4::ZERO.inverse().unwrap_err().is_singular());
    }

    #[test]
    fn test_scale() {
        assert_cols(
            sequential().scale(Vec3::new(2.0, 3.0, 4.0)),
            [0., 8., 16., 24., 3., 15., 27., 39., 8., 24., 40., 56., 3., 7., 11., 15.],
        );
    }

    #[test]
    fn test_rotate() {
        let axis = Vec3::new(2.0, 3.0, 4.0).normalize();
        assert_cols(
            sequential().rotate(to_rad(90.0), axis),
            [
                0.39, 3.61, 6.84, 10.06, 1.88, 4.12, 6.36, 8.60, 1.15, 6.85, 12.56, 18.27, 3.0,
                7.0, 11.0, 15.0,
            ],
        );
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let m = Mat4::IDENTITY.rotate(to_rad(90.0), Vec3::Z);
        assert_abs_diff_eq!(m.transform_point(Vec3::X), Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn test_compose_order() {
        // scale, then rotate, then translate
        let m = Mat4::IDENTITY
            .translate(Vec3::new(10.0, 0.0, 0.0))
            .rotate(to_rad(90.0), Vec3::Z)
            .scale(Vec3::new(2.0, 2.0, 2.0));
        assert_abs_diff_eq!(
            m.transform_point(Vec3::X),
            Vec3::new(10.0, 2.0, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_det_and_inverse() {
        let m = Mat4::new(
            1.0, 2.0, 3.0, 4.0, //
            2.0, 3.0, 5.0, 6.0, //
            1.0, 4.0, 5.0, 6.0, //
            2.0, 5.0, 6.0, 7.0,
        );
        assert_abs_diff_eq!(m.det(), 2.0, epsilon = 1e-4);

        let inv = m.inverse().unwrap();
        assert_cols(
            inv,
            [0.5, 0.5, -3.5, 2.5, 0.0, -1.0, 2.0, -1.0, -1.5, -0.5, 1.5, -0.5, 1.0, 1.0, -1.0, 0.0],
        );
        assert_abs_diff_eq!(m * inv, Mat4::IDENTITY, epsilon = 1e-4);
    }

    #[test]
    fn test_inverse_singular() {
        assert_eq!(sequential().det(), 0.0);
        assert!(sequential().inverse().unwrap_err().is_singular());
    }

    #[test]
    fn test_det_matches_glam() {
        let m = Mat4::IDENTITY
            .translate(Vec3::new(1.0, -2.0, 3.0))
            .rotate(0.7, Vec3::new(1.0, 1.0, 0.0).normalize())
            .scale(Vec3::new(2.0, 0.5, 1.5));
        assert_abs_diff_eq!(m.det(), m.to_glam().determinant(), epsilon = 1e-4);
        assert_abs_diff_eq!(
            m.inverse().unwrap(),
            Mat4::from_glam(m.to_glam().inverse()),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_look_at() {
        let m = Mat4::look_at(Vec3::new(0.0, 0.0, 2.0), Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
        assert_cols(
            m,
            [
                -0.71, -0.58, -0.41, 0.0, 0.0, 0.58, -0.82, 0.0, 0.71, -0.58, -0.41, 0.0, -1.41,
                1.15, 0.82, 1.0,
            ],
        );
    }

    #[test]
    fn test_look_at_matches_glam() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let target = Vec3::new(-1.0, 0.5, 0.0);
        let m = Mat4::look_at(eye, target, Vec3::Y);
        let g = glam::Mat4::look_at_rh(eye.to_glam(), target.to_glam(), glam::Vec3::Y);
        assert_abs_diff_eq!(m, Mat4::from_glam(g), epsilon = 1e-5);
    }

    #[test]
    fn test_look_at_degenerate() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::look_at(p, p, Vec3::Y), Mat4::IDENTITY);
        assert_eq!(Mat4::try_look_at(p, p, Vec3::Y), Err(MathError::DegenerateView));
    }

    #[test]
    fn test_perspective() {
        assert_cols(
            Mat4::perspective(to_rad(45.0), 1.0, 0.1, 100.0),
            [2.41, 0., 0., 0., 0., 2.41, 0., 0., 0., 0., -1., -1., 0., 0., -0.20, 0.],
        );
        let g = glam::Mat4::perspective_rh_gl(to_rad(60.0), 1.5, 0.5, 50.0);
        assert_abs_diff_eq!(
            Mat4::perspective(to_rad(60.0), 1.5, 0.5, 50.0),
            Mat4::from_glam(g),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_perspective_infinite_far() {
        let m = Mat4::perspective(to_rad(90.0), 2.0, 0.5, f32::INFINITY);
        assert!(m.is_finite());
        assert_abs_diff_eq!(m.get(2, 2), -1.0);
        assert_abs_diff_eq!(m.get(2, 3), -1.0);
        assert_abs_diff_eq!(m.get(3, 2), -1.0);
        assert_abs_diff_eq!(m.get(0, 0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_orthogonal() {
        let m = Mat4::orthogonal(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
        let g = glam::Mat4::orthographic_rh_gl(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
        assert_abs_diff_eq!(m, Mat4::from_glam(g), epsilon = 1e-6);
        assert_abs_diff_eq!(
            m.transform_point(Vec3::new(2.0, 1.0, -10.0)),
            Vec3::new(1.0, 1.0, 1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_to_mat3() {
        let m = sequential().to_mat3();
        assert_eq!(m, Mat3::new(0.0, 1.0, 2.0, 4.0, 5.0, 6.0, 8.0, 9.0, 10.0));
    }

    #[test]
    fn test_transform_point_divides_w() {
        let m = Mat4::perspective(to_rad(90.0), 1.0, 1.0, 100.0);
        let p = m.transform_point(Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(p.z(), -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_array_layouts() {
        let m = sequential();
        assert_eq!(m.to_cols_array(), <[f32; 16]>::try_from(m.as_slice()).unwrap());
        assert_eq!(Mat4::from_cols_array(m.to_cols_array()), m);
        assert_eq!(m.row(2), Vec4::new(8.0, 9.0, 10.0, 11.0));
    }
}
