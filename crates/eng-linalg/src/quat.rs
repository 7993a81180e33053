mod ops;
mod view;

use std::{fmt, ops::Neg};

pub use view::RIJK;

use crate::{complex::fmt_imaginary, vec3, vec4, Number, One, Sqrt, Trig, Vec3, Vector, Zero};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion `r + i·𝐢 + j·𝐣 + k·𝐤` consisting of a real part and 3 imaginary parts.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Arithmetic never normalizes automatically: a quaternion that is meant to be used as a rotation
/// has to be [normalized][Quat::normalize] by the caller.
///
/// The components are accessible as the fields `r`, `i`, `j` and `k`.
///
/// # Arithmetic
///
/// - `+` and `-` operate component-wise.
/// - `quat * quat` is the Hamilton product. It is not commutative.
/// - `quat * complex` uses a reduced product, see the `Mul<Complex<T>>` impl for details.
/// - `quat * scalar` scales every component.
///
/// There is no division operator.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity `1 + 0𝐢 + 0𝐣 + 0𝐤`.
    ///
    /// This is a unit quaternion representing no rotation at all.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
}

impl<T: Zero> Quat<T> {
    /// The quaternion with all components set to zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `r` and its imaginary parts `i`, `j` and `k`.
    #[inline]
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self {
            vec: vec4(r, i, j, k),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] holding `r`, `i`, `j` and `k` in
    /// that order.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components `r`, `i`, `j` and `k` as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Creates a quaternion representing a rotation of `radians` around `axis`.
    ///
    /// The result is `cos(radians / 2) + axis · sin(radians / 2)`. `axis` has to be of unit
    /// length for the result to be a unit quaternion; this is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let q = Quat::from_axis_angle(0.0, Vec3f::Y);
    /// assert_eq!(q, Quat::IDENTITY);
    /// ```
    pub fn from_axis_angle(radians: T, axis: Vec3<T>) -> Self
    where
        T: Number + Trig,
    {
        let half = radians / T::two();
        let sin = half.sin();
        Self::new(half.cos(), axis.x * sin, axis.y * sin, axis.z * sin)
    }

    /// Creates a quaternion representing a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_axis_angle(radians, Vec3::X)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_axis_angle(radians, Vec3::Y)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_axis_angle(radians, Vec3::Z)
    }

    /// Returns the conjugate `r - i·𝐢 - j·𝐣 - k·𝐤`.
    ///
    /// For unit quaternions, the conjugate is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [r, i, j, k] = self.vec.into_array();
        Self::new(r, -i, -j, -k)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, rotating a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns this quaternion scaled by the reciprocal of its length.
    ///
    /// Normalizing the zero quaternion yields NaN components.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self * (T::ONE / self.length())
    }

    /// Rotates `v` by computing `self · v · self*`, treating `v` as a pure imaginary quaternion.
    ///
    /// `self` should be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_rotation_z(FRAC_PI_2);
    /// let v = q.rotate_vector(Vec3d::X);
    /// assert!((v - Vec3d::Y).length() < 1e-12);
    /// ```
    pub fn rotate_vector(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let p = Self::new(T::ZERO, v.x, v.y, v.z);
        let [_, i, j, k] = (self * p * self.conjugate()).vec.into_array();
        vec3(i, j, k)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("r", &self.r)
            .field("i", &self.i)
            .field("j", &self.j)
            .field("k", &self.k)
            .finish()
    }
}

/// Formats the quaternion as `r ± |i|i ± |j|j ± |k|k`.
impl<T> fmt::Display for Quat<T>
where
    T: fmt::Display + Number + PartialOrd,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.r, f)?;
        fmt_imaginary(f, self.i, 'i')?;
        fmt_imaginary(f, self.j, 'j')?;
        fmt_imaginary(f, self.k, 'k')
    }
}
