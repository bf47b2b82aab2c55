//! 2x2 matrices for planar linear transforms.

use crate::matrix::check_invertible;
use crate::{MathResult, Matrix, Vec2};

/// A 2x2 matrix.
pub type Mat2 = Matrix<2>;

impl Matrix<2> {
    /// Creates a matrix from elements written row by row.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self([[m00, m10], [m01, m11]])
    }

    /// Creates a matrix from a column-major array.
    #[inline]
    pub const fn from_cols_array(a: [f32; 4]) -> Self {
        Self([[a[0], a[1]], [a[2], a[3]]])
    }

    /// Creates a matrix from a row-major array.
    #[inline]
    pub const fn from_rows_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Returns the elements as a column-major array.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 4] {
        let [[a, b], [c, d]] = self.0;
        [a, b, c, d]
    }

    /// Scales the basis columns: `self · diag(v)`.
    #[inline]
    pub fn scale(mut self, v: Vec2) -> Self {
        for (col, s) in self.0.iter_mut().zip(v.0) {
            col.iter_mut().for_each(|x| *x *= s);
        }
        self
    }

    /// Rotates counter-clockwise by `angle` radians: `self · R(angle)`.
    pub fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let [c0, c1] = self.0;
        Self([
            [c * c0[0] + s * c1[0], c * c0[1] + s * c1[1]],
            [c * c1[0] - s * c0[0], c * c1[1] - s * c0[1]],
        ])
    }

    /// Determinant `ad - bc`.
    #[inline]
    pub fn det(&self) -> f32 {
        let [[m00, m10], [m01, m11]] = self.0;
        m00 * m11 - m01 * m10
    }

    /// Inverts the matrix.
    ///
    /// # Errors
    ///
    /// [`MathError::Singular`](crate::MathError::Singular) if the determinant
    /// is within [`SINGULAR_THRESHOLD`](crate::SINGULAR_THRESHOLD) of zero.
    pub fn inverse(self) -> MathResult<Self> {
        let det = check_invertible(self.det())?;
        let inv_det = 1.0 / det;
        let [[m00, m10], [m01, m11]] = self.0;
        Ok(Self([
            [m11 * inv_det, -m10 * inv_det],
            [-m01 * inv_det, m00 * inv_det],
        ]))
    }

    /// Converts to glam Mat2.
    #[inline]
    pub fn to_glam(self) -> glam::Mat2 {
        glam::Mat2::from_cols_array(&self.to_cols_array())
    }

    /// Creates from glam Mat2.
    #[inline]
    pub fn from_glam(m: glam::Mat2) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MathError;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_det() {
        assert_eq!(Mat2::new(0.0, 1.0, 2.0, 3.0).det(), -2.0);
        assert_eq!(Mat2::IDENTITY.det(), 1.0);
        assert_eq!(Mat2::ZERO.det(), 0.0);
    }

    #[test]
    fn test_inverse() {
        let inv = Mat2::new(0.0, 1.0, 2.0, 3.0).inverse().unwrap().round(2);
        assert_eq!(inv.to_cols_array(), [-1.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_inverse_singular() {
        let err = Mat2::new(1.0, 2.0, 2.0, 4.0).inverse().unwrap_err();
        assert_eq!(err, MathError::Singular { det: 0.0 });
    }

    #[test]
    fn test_scale() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0).scale(Vec2::new(2.0, 3.0));
        assert_eq!(m, Mat2::new(2.0, 6.0, 6.0, 12.0));
    }

    #[test]
    fn test_rotate() {
        let m = Mat2::IDENTITY.rotate(FRAC_PI_2);
        assert_abs_diff_eq!(m * Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_array_roundtrip() {
        let m = Mat2::from_rows_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Mat2::from_cols_array(m.to_cols_array()), m);
        assert_eq!(m.to_cols_array(), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(Mat2::from_glam(m.to_glam()), m);
    }
}
