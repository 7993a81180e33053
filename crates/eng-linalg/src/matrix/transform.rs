//! Factories for 4x4 transformation matrices.
//!
//! All transforms act on column vectors in homogeneous coordinates and follow the right-handed
//! OpenGL conventions. The element assignments below use `m[col][row]` indexing.

use crate::{Matrix, Number, Quat, Trig};

impl<T: Number> Matrix<T, 4> {
    /// Creates a matrix that translates points by `(x, y, z)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let t = Mat4f::translation(1.0, 2.0, 3.0);
    /// assert_eq!(t * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    ///
    /// // Directions (w = 0) are unaffected.
    /// assert_eq!(t * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m[3][0] = x;
        m[3][1] = y;
        m[3][2] = z;
        m
    }

    /// Creates a matrix that scales along the X, Y and Z axes.
    ///
    /// `[3][3]` is 1 rather than 0, so the homogeneous `w` coordinate is preserved.
    pub fn scale(x: T, y: T, z: T) -> Self {
        Self::from_diagonal([x, y, z, T::ONE])
    }

    /// Creates the rotation matrix corresponding to the unit quaternion `q`.
    ///
    /// `q` is not normalized; a non-unit quaternion produces a matrix that also scales.
    ///
    /// The terms fill the matrix row by row and `[2][2]` is `1 - 2(i² + j²)`. This is the
    /// standard rotation matrix and agrees with [`Quat::rotate_vector`]. See
    /// [`Matrix::rotation_legacy`] for the older variant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(Mat4f::rotation(Quat::IDENTITY), Mat4f::identity());
    /// ```
    pub fn rotation(q: Quat<T>) -> Self {
        Self::from_rows(rotation_terms(q, false))
    }

    /// The legacy quaternion-to-matrix conversion, kept for output that depends on it.
    ///
    /// It differs from [`Matrix::rotation`] in two ways:
    ///
    /// - The 16 values are stored in storage order (column by column), which yields the transpose
    ///   of [`Matrix::rotation`]. For unit quaternions that is the inverse rotation.
    /// - `[2][2]` is `1 - 2(i²·j²)`, a product where the standard formula has a sum.
    ///
    /// For rotations around the Z axis only the transposition remains.
    pub fn rotation_legacy(q: Quat<T>) -> Self {
        Self::from_columns(rotation_terms(q, true))
    }

    /// Creates a view matrix for a camera located at `(x, y, z)` with orientation `q`.
    ///
    /// This is the inverse of the camera's own transform: it translates the world by the negated
    /// camera position, then applies the inverse (conjugate) of the camera rotation.
    pub fn view(x: T, y: T, z: T, q: Quat<T>) -> Self {
        Self::rotation(q.conjugate()) * Self::translation(-x, -y, -z)
    }
}

impl<T: Number + Trig> Matrix<T, 4> {
    /// Creates a matrix rotating counterclockwise around the X axis by `radians`.
    pub fn rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        let mut m = Self::identity();
        m[1][1] = cos;
        m[2][1] = -sin;
        m[1][2] = sin;
        m[2][2] = cos;
        m
    }

    /// Creates a matrix rotating counterclockwise around the Y axis by `radians`.
    pub fn rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        let mut m = Self::identity();
        m[0][0] = cos;
        m[2][0] = sin;
        m[0][2] = -sin;
        m[2][2] = cos;
        m
    }

    /// Creates a matrix rotating counterclockwise around the Z axis by `radians`.
    pub fn rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        let mut m = Self::identity();
        m[0][0] = cos;
        m[1][0] = -sin;
        m[0][1] = sin;
        m[1][1] = cos;
        m
    }

    /// Creates an OpenGL-style perspective projection matrix.
    ///
    /// - `fov` is the field of view in **degrees**.
    /// - `width` and `height` are the viewport dimensions; their ratio is the aspect ratio.
    /// - `near` and `far` are the (positive) distances of the clipping planes.
    ///
    /// `[3][3]` is 0 rather than 1, so the clip-space `w` is exactly `-z`. Points on the near plane
    /// are mapped to a normalized device depth of -1, points on the far plane to +1. The vertical scale is `aspect / tan(fov / 2)` and the horizontal scale is the
    /// vertical scale divided by `aspect`.
    ///
    /// Degenerate parameters (`near == far`, `height == 0`, `fov == 0`) are not rejected and yield
    /// infinite or NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let proj = Mat4d::perspective(90.0, 800.0, 600.0, 0.1, 100.0);
    /// let clip = proj * vec4(0.0, 0.0, -100.0, 1.0);
    /// assert!((clip.z / clip.w - 1.0).abs() < 1e-9);
    /// ```
    pub fn perspective(fov: T, width: T, height: T, near: T, far: T) -> Self {
        let two = T::two();
        let aspect = width / height;
        let y_scale = T::ONE / (fov / two).to_radians().tan() * aspect;
        let x_scale = y_scale / aspect;
        let frustum_length = far - near;

        let mut m = Self::ZERO;
        m[0][0] = x_scale;
        m[1][1] = y_scale;
        m[2][2] = -((far + near) / frustum_length);
        m[2][3] = -T::ONE;
        m[3][2] = -((two * near * far) / frustum_length);
        m
    }
}

/// The 4x4 terms of the rotation matrix of `q`, as rows.
///
/// With `legacy_z` set, the bottom-right term of the 3x3 block is `1 - 2(i²·j²)`.
fn rotation_terms<T: Number>(q: Quat<T>, legacy_z: bool) -> [[T; 4]; 4] {
    let two = T::two();
    let (ii, jj, kk) = (q.i * q.i, q.j * q.j, q.k * q.k);
    let (ij, ik, jk) = (q.i * q.j, q.i * q.k, q.j * q.k);
    let (ir, jr, kr) = (q.i * q.r, q.j * q.r, q.k * q.r);
    let (zero, one) = (T::ZERO, T::ONE);
    let zz = if legacy_z { ii * jj } else { ii + jj };

    #[rustfmt::skip]
    let terms = [
        [one - two * (jj + kk), two * (ij - kr),       two * (ik + jr),       zero],
        [two * (ij + kr),       one - two * (ii + kk), two * (jk - ir),       zero],
        [two * (ik - jr),       two * (jk + ir),       one - two * zz,        zero],
        [zero,                  zero,                  zero,                  one ],
    ];
    terms
}
