//! 3x3 matrices.
//!
//! A [`Mat3`] doubles as a 2-D affine transform in homogeneous coordinates:
//! [`translate`](Matrix::translate), [`scale`](Matrix::scale) and
//! [`rotate`](Matrix::rotate) act on points `(x, y, 1)`, with the rotation
//! about the implicit Z axis.
//!
//! # Usage
//!
//! ```rust
//! use tessera_math::{Mat3, Vec2, Vec3};
//!
//! let m = Mat3::IDENTITY.translate(Vec2::new(2.0, 3.0)).scale(Vec2::new(2.0, 2.0));
//! assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(4.0, 5.0, 1.0));
//! ```

use crate::matrix::check_invertible;
use crate::{MathResult, Matrix, Vec2};

/// A 3x3 matrix.
pub type Mat3 = Matrix<3>;

impl Matrix<3> {
    /// Creates a matrix from elements written row by row.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self([[m00, m10, m20], [m01, m11, m21], [m02, m12, m22]])
    }

    /// Creates a matrix from a column-major array.
    #[inline]
    pub const fn from_cols_array(a: [f32; 9]) -> Self {
        Self([[a[0], a[1], a[2]], [a[3], a[4], a[5]], [a[6], a[7], a[8]]])
    }

    /// Creates a matrix from a row-major array.
    #[inline]
    pub const fn from_rows_array(a: [f32; 9]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8])
    }

    /// Returns the elements as a column-major array.
    #[inline]
    pub fn to_cols_array(self) -> [f32; 9] {
        std::array::from_fn(|i| self.0[i / 3][i % 3])
    }

    /// Translates 2-D points: `self · T(v)`.
    ///
    /// Adds the basis columns weighted by `v` into the translation column.
    #[inline]
    pub fn translate(mut self, v: Vec2) -> Self {
        let [x, y] = v.0;
        for r in 0..3 {
            self.0[2][r] += x * self.0[0][r] + y * self.0[1][r];
        }
        self
    }

    /// Scales 2-D points: multiplies the X and Y basis columns.
    #[inline]
    pub fn scale(mut self, v: Vec2) -> Self {
        let [x, y] = v.0;
        self.0[0].iter_mut().for_each(|e| *e *= x);
        self.0[1].iter_mut().for_each(|e| *e *= y);
        self
    }

    /// Rotates 2-D points counter-clockwise by `angle` radians around Z.
    pub fn rotate(mut self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let c0 = self.0[0];
        let c1 = self.0[1];
        for r in 0..3 {
            self.0[0][r] = c * c0[r] + s * c1[r];
            self.0[1][r] = c * c1[r] - s * c0[r];
        }
        self
    }

    /// Determinant by cofactor expansion along the first row.
    #[inline]
    pub fn det(&self) -> f32 {
        let [[m00, m10, m20], [m01, m11, m21], [m02, m12, m22]] = self.0;
        m00 * (m11 * m22 - m12 * m21) - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }

    /// Inverts the matrix using the adjugate.
    ///
    /// # Errors
    ///
    /// [`MathError::Singular`](crate::MathError::Singular) if the determinant
    /// is within [`SINGULAR_THRESHOLD`](crate::SINGULAR_THRESHOLD) of zero.
    pub fn inverse(self) -> MathResult<Self> {
        let [[m00, m10, m20], [m01, m11, m21], [m02, m12, m22]] = self.0;

        // Cofactors of the first row
        let c00 = m11 * m22 - m12 * m21;
        let c01 = m12 * m20 - m10 * m22;
        let c02 = m10 * m21 - m11 * m20;

        let det = check_invertible(m00 * c00 + m01 * c01 + m02 * c02)?;
        let inv_det = 1.0 / det;

        Ok(Self::new(
            c00 * inv_det,
            (m02 * m21 - m01 * m22) * inv_det,
            (m01 * m12 - m02 * m11) * inv_det,
            c01 * inv_det,
            (m00 * m22 - m02 * m20) * inv_det,
            (m02 * m10 - m00 * m12) * inv_det,
            c02 * inv_det,
            (m01 * m20 - m00 * m21) * inv_det,
            (m00 * m11 - m01 * m10) * inv_det,
        ))
    }

    /// Converts to glam Mat3.
    #[inline]
    pub fn to_glam(self) -> glam::Mat3 {
        glam::Mat3::from_cols_array(&self.to_cols_array())
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}
