//! Square matrix base type.
//!
//! [`Matrix<N>`] is an `N`x`N` float matrix stored as `N` columns of `N`
//! floats. The flat view returned by [`Matrix::as_slice`] is therefore
//! **column-major**: row `r`, column `c` lives at index `c * N + r`, which is
//! the layout GL-style uniform uploads expect.
//!
//! # Composition order
//!
//! [`Matrix::apply`] right-multiplies: `m.apply(&t)` is `m · t`. Every
//! builder (`translate`, `scale`, `rotate`) composes the same way, so in
//!
//! ```text
//! Mat4::IDENTITY.translate(t).rotate(a, axis).scale(s)
//! ```
//!
//! a point is scaled first, then rotated, then translated.
//!
//! Size-specific operations (determinant, inverse, transforms, cameras) live
//! in the `Mat2`, `Mat3` and `Mat4` impl blocks.

use crate::{MathError, MathResult, Vector};
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::Mul;
use tracing::warn;

/// Determinants with an absolute value at or below this are treated as zero.
///
/// Exact `det == 0` misses matrices that are singular up to float rounding
/// and would return `inf`/`NaN` entries; this threshold refuses them.
///
/// The cutoff is absolute, not relative to the magnitude of the matrix. The
/// determinant of a 3-D transform with uniform scale `s` is `s^3`, so a `Mat4`
/// or `Mat3` scaled below roughly `4.6e-4` per axis is refused even though it
/// is well conditioned. For 2-D transforms the limit is `s < 1e-5`. Scenes at
/// such scales should invert the unscaled transform and apply the reciprocal
/// scale separately.
pub const SINGULAR_THRESHOLD: f32 = 1e-10;

/// Checks a determinant against [`SINGULAR_THRESHOLD`].
///
/// Returns the determinant unchanged when the matrix may be inverted.
#[inline]
pub(crate) fn check_invertible(det: f32) -> MathResult<f32> {
    if det.abs() <= SINGULAR_THRESHOLD || !det.is_finite() {
        warn!(det, "refusing to invert singular matrix");
        return Err(MathError::singular(det));
    }
    Ok(det)
}

/// An `N`x`N` matrix in column-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize>(pub(crate) [[f32; N]; N]);

// SAFETY: `[[f32; N]; N]` has no padding and every bit pattern is valid.
unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
// SAFETY: see above; the type is also `Copy + 'static`.
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// Side length.
    pub const SIDE: usize = N;

    /// Number of elements (`N * N`).
    pub const COUNT: usize = N * N;

    /// All elements zero.
    pub const ZERO: Self = Self([[0.0; N]; N]);

    /// Identity matrix.
    pub const IDENTITY: Self = {
        let mut cols = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            cols[i][i] = 1.0;
            i += 1;
        }
        Self(cols)
    };

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; N]; N]) -> Self {
        Self(cols)
    }

    /// Creates a matrix from row arrays (transposes into column storage).
    #[inline]
    pub fn from_rows(rows: [[f32; N]; N]) -> Self {
        Self(rows).transpose()
    }

    /// Creates a matrix from column vectors.
    #[inline]
    pub fn from_col_vecs(cols: [Vector<N>; N]) -> Self {
        Self(cols.map(Vector::to_array))
    }

    /// Builds a matrix by evaluating `f(row, col)` for every element.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
        Self(std::array::from_fn(|c| std::array::from_fn(|r| f(r, c))))
    }

    /// Returns the column arrays.
    #[inline]
    pub const fn to_cols(self) -> [[f32; N]; N] {
        self.0
    }

    /// Identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Matrix with every element set to `v`.
    #[inline]
    pub const fn all(v: f32) -> Self {
        Self([[v; N]; N])
    }

    /// Zero matrix.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Matrix of ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::all(1.0)
    }

    /// Flat column-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_flattened()
    }

    /// Raw bytes of the column-major elements, ready for a uniform upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Flat column-major index of `(row, col)`.
    #[inline]
    pub const fn index_of(row: usize, col: usize) -> usize {
        col * N + row
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below `N`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col][row]
    }

    /// Sets the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below `N`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.0[col][row] = value;
    }

    /// Row `i` as a vector (strided read across columns).
    #[inline]
    pub fn row(&self, i: usize) -> Vector<N> {
        Vector(std::array::from_fn(|c| self.0[c][i]))
    }

    /// Column `i` as a vector (contiguous read).
    #[inline]
    pub fn col(&self, i: usize) -> Vector<N> {
        Vector(self.0[i])
    }

    /// Transposes, swapping `(r, c)` with `(c, r)` above the diagonal.
    #[inline]
    pub fn transpose(mut self) -> Self {
        for r in 0..N {
            for c in (r + 1)..N {
                let tmp = self.0[c][r];
                self.0[c][r] = self.0[r][c];
                self.0[r][c] = tmp;
            }
        }
        self
    }

    /// Rounds every element to `decimals` decimal places.
    #[inline]
    pub fn round(self, decimals: u32) -> Self {
        let factor = 10f32.powi(decimals as i32);
        Self(self.0.map(|col| col.map(|x| (x * factor).round() / factor)))
    }

    /// Right-multiplies by `m`: `self · m`.
    ///
    /// Column `i` of the result is `self` applied to column `i` of `m`.
    pub fn apply(self, m: &Self) -> Self {
        let mut out = [[0.0; N]; N];
        for (c, out_col) in out.iter_mut().enumerate() {
            for (k, &weight) in m.0[c].iter().enumerate() {
                for (r, value) in out_col.iter_mut().enumerate() {
                    *value += self.0[k][r] * weight;
                }
            }
        }
        Self(out)
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|x| x.is_finite())
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix * Matrix
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.apply(&rhs)
    }
}

// Matrix * Vector (column vector)
impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        let mut out = [0.0; N];
        for (c, col) in self.0.iter().enumerate() {
            for (r, value) in out.iter_mut().enumerate() {
                *value += col[r] * rhs.0[c];
            }
        }
        Vector(out)
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for r in 0..N {
            let sep = if r + 1 < N { "," } else { "" };
            writeln!(f, "\t{}{sep}", self.row(r))?;
        }
        write!(f, "]")
    }
}

impl<const N: usize> AbsDiffEq for Matrix<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Matrix<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
