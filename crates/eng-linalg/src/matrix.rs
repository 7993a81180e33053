use std::{array, fmt};

use crate::{One, Vector, Zero};

mod ops;
mod transform;

macro_rules! aliases {
    ($($n:literal: $generic:ident, $f32:ident, $f64:ident;)+) => {
        $(
            #[doc = concat!("A ", $n, "x", $n, " matrix.")]
            pub type $generic<T> = Matrix<T, $n>;
            #[doc = concat!("A ", $n, "x", $n, " matrix of [`f32`]s.")]
            pub type $f32 = $generic<f32>;
            #[doc = concat!("A ", $n, "x", $n, " matrix of [`f64`]s.")]
            pub type $f64 = $generic<f64>;
        )+
    };
}

aliases! {
    2: Mat2, Mat2f, Mat2d;
    3: Mat3, Mat3f, Mat3d;
    4: Mat4, Mat4f, Mat4d;
}

/// A square `N`x`N` matrix of scalars of type `T`, stored column by column.
///
/// Matrices transform column vectors: `m * v` applies `m` to `v`, and `a * b` is the transform
/// that applies `b` first and `a` second. A chain like `proj * view * model` therefore reads
/// right to left.
///
/// # Creating matrices
///
/// - [`Matrix::identity`] and [`Matrix::from_scalar`] build `I` and `s·I`.
/// - [`Matrix::ZERO`] has every element set to 0.
/// - [`Matrix::from_rows`] takes the elements in reading order; [`Matrix::from_columns`] takes
///   them in storage order.
/// - [`Matrix::from_fn`] and [`Matrix::from_diagonal`] cover the remaining cases.
/// - 4x4 matrices come with factories for the transforms of a rendering pipeline:
///   [`Matrix::translation`], [`Matrix::scale`], [`Matrix::rotation_x`], [`Matrix::rotation_y`],
///   [`Matrix::rotation_z`], [`Matrix::rotation`], [`Matrix::view`] and
///   [`Matrix::perspective`].
///
/// # Indexing
///
/// `m[c]` is column `c` as an array, so `m[c][r]` is the element in column `c`, row `r`. The
/// transform factories are written in this form. `m[(r, c)]` addresses the same element in the
/// usual row-first math notation:
///
/// ```
/// # use eng_linalg::*;
/// let mut m = Matrix::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// assert_eq!(m[1], [2, 4]);
/// assert_eq!(m[(1, 0)], 3);
/// m[0][1] = 7;
/// assert_eq!(m[(1, 0)], 7);
/// ```
///
/// Out-of-bounds indices panic. Use [`Matrix::get`] for a checked lookup.
///
/// # Layout
///
/// The `N * N` elements are contiguous and column-major, with no padding. [`Matrix::as_slice`]
/// hands them out in that order, ready for `glUniformMatrix4fv` with `transpose` set to
/// `GL_FALSE`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// The matrix whose elements are all 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);

    /// Returns `value·I`: `value` on the diagonal, 0 elsewhere.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(Mat2::from_scalar(3), Mat2::from_rows([[3, 0], [0, 3]]));
    /// ```
    pub fn from_scalar(value: T) -> Self {
        Self::from_diagonal(Vector::splat(value))
    }

    /// Returns the matrix with `diag` on its diagonal and 0 elsewhere.
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        let mut m = Self::ZERO;
        for i in 0..N {
            m.0[i][i] = diag[i];
        }
        m
    }

    /// Returns the identity matrix `I`.
    pub fn identity() -> Self
    where
        T: One,
    {
        Self::from_scalar(T::ONE)
    }
}

impl<T, const N: usize> Matrix<T, N> {
    /// Builds a matrix from its rows, given in reading order.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(m, Matrix::from_columns([[1, 3], [2, 4]]));
    /// ```
    pub fn from_rows<R: Into<Vector<T, N>>>(rows: [R; N]) -> Self
    where
        T: Copy,
    {
        let rows: [Vector<T, N>; N] = rows.map(Into::into);
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Builds a matrix from its columns, which is the order the elements are stored in.
    pub fn from_columns<C: Into<Vector<T, N>>>(columns: [C; N]) -> Self {
        Self(columns.map(|c| c.into().into_array()))
    }

    /// Builds a matrix by calling `f(row, col)` for every element.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let m = Mat3::from_fn(|row, col| if row <= col { 1 } else { 0 });
    /// assert_eq!(m.row(0), vec3(1, 1, 1));
    /// assert_eq!(m.row(2), vec3(0, 0, 1));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    /// Transforms every element with `f`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns column `col`.
    ///
    /// # Panics
    ///
    /// If `col >= N`.
    pub fn column(&self, col: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from(self.0[col])
    }

    pub fn columns(&self) -> [Vector<T, N>; N]
    where
        T: Copy,
    {
        self.0.map(Vector::from)
    }

    /// Returns row `row`.
    ///
    /// # Panics
    ///
    /// If `row >= N`.
    pub fn row(&self, row: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns the element in row `row` and column `col`, or [`None`] if either is out of range.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let m = Mat2::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(1, 0), Some(&3));
    /// assert_eq!(m.get(0, 2), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < N && col < N {
            Some(&self.0[col][row])
        } else {
            None
        }
    }

    /// Mutable version of [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < N && col < N {
            Some(&mut self.0[col][row])
        } else {
            None
        }
    }

    /// Returns the `N * N` elements in column-major order.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let t = Mat4f::translation(1.0, 2.0, 3.0);
    /// assert_eq!(&t.as_slice()[12..], &[1.0, 2.0, 3.0, 1.0]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    pub fn into_columns(self) -> [[T; N]; N] {
        self.0
    }
}

impl<T: Default, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Prints the rows of the matrix, in reading order.
impl<T: fmt::Debug + Copy, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..N).map(|row| self.row(row)))
            .finish()
    }
}

/// Prints one line `[ m[c][0], ..., m[c][N-1] ]` per column `c`, in storage order.
///
/// Lines are separated by `\n`, without a trailing newline.
impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, column) in self.0.iter().enumerate() {
            if c > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[ ")?;
            for (r, elem) in column.iter().enumerate() {
                if r > 0 {
                    f.write_str(", ")?;
                }
                elem.fmt(f)?;
            }
            f.write_str(" ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]),
            Mat3::from_columns([[1, 4, 7], [2, 5, 8], [3, 6, 9]]),
        );
    }

    #[test]
    fn scalar_constructor() {
        #[rustfmt::skip]
        assert_eq!(Matrix::from_scalar(5), Matrix::from_rows([
            [5, 0, 0],
            [0, 5, 0],
            [0, 0, 5],
        ]));
        assert_eq!(Mat4f::from_scalar(1.0), Mat4f::identity());
        assert_eq!(Mat2f::from_scalar(0.0), Mat2f::ZERO);
    }

    #[test]
    fn index_conventions() {
        let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat[0], [1, 3]);
        assert_eq!(mat[1], [2, 4]);
        assert_eq!(mat[(1, 0)], mat[0][1]);
        mat[0][0] = 6;
        assert_eq!(mat[(0, 0)], 6);
        assert_eq!(mat.column(1), vec2(2, 4));
        assert_eq!(mat.row(1), vec2(3, 4));
        assert_eq!(mat.columns(), [vec2(6, 3), vec2(2, 4)]);
        assert_eq!(mat.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Mat2f::identity();
        let _elem = mat[(0, 2)];
    }

    #[test]
    fn flat_layout() {
        let mat = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.as_slice(), &[1, 3, 2, 4]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // Storage order (column-wise) for display output.
        assert_eq!(format!("{}", mat), "[ 0, 2 ]\n[ 1, 3 ]");

        assert_eq!(
            Mat2f::identity().to_string(),
            "
[ 1, 0 ]
[ 0, 1 ]
"
            .trim()
        );
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
            [15, 16, 17],
        ]);
        let c = a * b;
        assert_eq!(
            c[(0, 1)],
            a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)] + a[(0, 2)] * b[(2, 1)]
        );
        assert_eq!(
            c[(2, 2)],
            a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)] + a[(2, 2)] * b[(2, 2)]
        );

        // Storage-order formula: `c[j][i] = Σ_k b[j][k] * a[k][i]`.
        for i in 0..3 {
            for j in 0..3 {
                let expected: i32 = (0..3).map(|k| b[j][k] * a[k][i]).sum();
                assert_eq!(c[j][i], expected);
            }
        }
    }

    #[test]
    fn mat3_product() {
        // Filled in storage order, the way the 9-value initializer lists of the demo program
        // are laid out.
        let mat3 = Mat3f::from_columns([[4.0, 0.0, 0.0], [2.0, 8.0, 1.0], [0.0, 1.0, 0.0]]);
        let mat4 = Mat3f::from_columns([[4.0, 2.0, 9.0], [2.0, 0.0, 4.0], [1.0, 4.0, 2.0]]);
        let mat5 = mat3 * mat4;
        assert_eq!(
            mat5,
            Mat3f::from_columns([[20.0, 25.0, 2.0], [8.0, 4.0, 0.0], [12.0, 34.0, 4.0]])
        );
    }

    #[test]
    fn associativity() {
        let a = Mat3d::from_fn(|r, c| (r * 3 + c) as f64 * 0.5 - 1.0);
        let b = Mat3d::from_fn(|r, c| if r == c { 2.0 } else { (r + c) as f64 });
        let v = vec3(1.0, -2.0, 0.25);
        assert_relative_eq!((a * b) * v, a * (b * v), epsilon = 1e-12);
        assert_relative_eq!((a * b) * a, a * (b * a), epsilon = 1e-12);
    }

    #[test]
    fn diagonal() {
        let diag = Matrix::from_diagonal([1, 2, 3]);
        assert_eq!(diag.row(1), vec3(0, 2, 0));
        assert_eq!(diag * 2, Matrix::from_diagonal([2, 4, 6]));
        assert_eq!(diag * vec3(1, 1, 1), vec3(1, 2, 3));
    }

    #[test]
    fn map_default() {
        assert_eq!(Mat2f::default(), Mat2f::ZERO);
        assert_eq!(Mat2::from_scalar(3).map(|e| e * 2), Mat2::from_scalar(6));
    }
}
