use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign};

use crate::number_traits::{Float, NumericOps, One, Zero};
use crate::vector::{Vector3, Vector4};

pub type Matrix4f = Matrix4<f32>;

/// A 4x4 matrix stored in column-major order: `values[i + j * 4]` is the
/// element at row `i`, column `j`.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix4<T = f32> {
    values: [T; 16],
}

impl<T> Debug for Matrix4<T>
where
    T: Copy + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for row in 0..Self::ROWS {
            writeln!(f, "\t{},", self.row(row))?;
        }
        writeln!(f, "]")
    }
}

/// Renders the four rows on separate lines. Meant for diagnostics only.
impl<T> Display for Matrix4<T>
where
    T: Copy + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.row(0),
            self.row(1),
            self.row(2),
            self.row(3)
        )
    }
}

impl<T> Matrix4<T> {
    const COLS: usize = 4;
    const ROWS: usize = 4;

    /// Builds a matrix from column-major values.
    pub const fn with_values(values: [T; 16]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[T; 16] {
        &self.values
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    /// Row `n`, gathered with a stride of four across the columns.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in `0..4`.
    pub fn row(&self, n: usize) -> Vector4<T> {
        Vector4::new(
            self.values[n],
            self.values[Self::ROWS + n],
            self.values[Self::ROWS * 2 + n],
            self.values[Self::ROWS * 3 + n],
        )
    }

    /// Column `n`, stored contiguously.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in `0..4`.
    pub fn column(&self, n: usize) -> Vector4<T> {
        let start = n * Self::ROWS;
        Vector4::new(
            self.values[start],
            self.values[start + 1],
            self.values[start + 2],
            self.values[start + 3],
        )
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero + One,
{
    /// Identity with the translation in the last column (slots 12, 13 and 14).
    #[rustfmt::skip]
    pub fn new_translation(translation: &Vector3<T>) -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(), T::zero(),
                T::zero(), T::zero(), T::one(), T::zero(),
                translation.x, translation.y, translation.z, T::one(),
            ]
        }
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: &Vector3<T>) -> Self {
        Self {
            values: [
                scale.x, T::zero(), T::zero(), T::zero(),
                T::zero(), scale.y, T::zero(), T::zero(),
                T::zero(), T::zero(), scale.z, T::zero(),
                T::zero(), T::zero(), T::zero(), T::one(),
            ]
        }
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// Right-handed perspective projection. `fov_y` is in radians.
    ///
    /// Degenerate parameters (`near == far`, a field of view that is a
    /// multiple of pi) produce infinite or NaN elements.
    #[rustfmt::skip]
    pub fn new_perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let f = T::one() / T::narrow(fov_y.half().widen().tan());
        let depth_scale = (near + far) / (near - far);
        let depth_offset = (T::two() * near * far) / (near - far);

        Self {
            values: [
                f / aspect, T::zero(), T::zero(), T::zero(),
                T::zero(), f, T::zero(), T::zero(),
                T::zero(), T::zero(), depth_scale, -T::one(),
                T::zero(), T::zero(), depth_offset, T::one(),
            ]
        }
    }
}

impl<T> Matrix4<T>
where
    T: Copy + NumericOps,
{
    /// Full cofactor expansion of the determinant.
    pub fn determinant(&self) -> T {
        // mCR: column C, row R
        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            self.values;

        m03 * m12 * m21 * m30 - m02 * m13 * m21 * m30 - m03 * m11 * m22 * m30
            + m01 * m13 * m22 * m30
            + m02 * m11 * m23 * m30
            - m01 * m12 * m23 * m30
            - m03 * m12 * m20 * m31
            + m02 * m13 * m20 * m31
            + m03 * m10 * m22 * m31
            - m00 * m13 * m22 * m31
            - m02 * m10 * m23 * m31
            + m00 * m12 * m23 * m31
            + m03 * m11 * m20 * m32
            - m01 * m13 * m20 * m32
            - m03 * m10 * m21 * m32
            + m00 * m13 * m21 * m32
            + m01 * m10 * m23 * m32
            - m00 * m11 * m23 * m32
            - m02 * m11 * m20 * m33
            + m01 * m12 * m20 * m33
            + m02 * m10 * m21 * m33
            - m00 * m12 * m21 * m33
            - m01 * m10 * m22 * m33
            + m00 * m11 * m22 * m33
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    /// Computes `self * vec`, treating `vec` as a column vector.
    pub fn transform_vec(&self, vec: &Vector4<T>) -> Vector4<T> {
        Vector4::new(
            self.row(0).dot(vec),
            self.row(1).dot(vec),
            self.row(2).dot(vec),
            self.row(3).dot(vec),
        )
    }
}

/// `a * b` applies `b` first, then `a`.
impl<T> Mul<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 16];

        for col in 0..Self::COLS {
            let column = rhs.column(col);
            for row in 0..Self::ROWS {
                values[col * Self::ROWS + row] = self.row(row).dot(&column);
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `matrix[col][row]`
impl<T> Index<usize> for Matrix4<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::ROWS..index * Self::ROWS + Self::ROWS]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::ROWS..index * Self::ROWS + Self::ROWS]
    }
}

/// Column arrays, the layout expected by GPU uniform buffers.
impl<T> From<Matrix4<T>> for [[T; 4]; 4]
where
    T: Copy,
{
    fn from(matrix: Matrix4<T>) -> Self {
        let v = matrix.values;
        [
            [v[0], v[1], v[2], v[3]],
            [v[4], v[5], v[6], v[7]],
            [v[8], v[9], v[10], v[11]],
            [v[12], v[13], v[14], v[15]],
        ]
    }
}

pub trait Identity {
    fn identity() -> Self;
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(), T::zero(),
                T::zero(), T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::zero(), T::one()
            ]
        }
    }
}
