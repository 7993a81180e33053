use std::{array, fmt};

use crate::{DimensionMismatch, Number, One, Sqrt, Zero};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

macro_rules! aliases {
    ($($n:literal: $generic:ident, $f32:ident, $f64:ident;)+) => {
        $(
            #[doc = concat!("A ", $n, "-dimensional vector.")]
            pub type $generic<T> = Vector<T, $n>;
            #[doc = concat!("A ", $n, "-dimensional vector of [`f32`]s.")]
            pub type $f32 = $generic<f32>;
            #[doc = concat!("A ", $n, "-dimensional vector of [`f64`]s.")]
            pub type $f64 = $generic<f64>;
        )+
    };
}

aliases! {
    2: Vec2, Vec2f, Vec2d;
    3: Vec3, Vec3f, Vec3d;
    4: Vec4, Vec4f, Vec4d;
}

/// A fixed-size vector of `N` scalars of type `T`.
///
/// `N` is a const generic parameter: adding a [`Vec2`] to a [`Vec3`] does not compile, and a
/// vector can never change its dimension. Vectors are plain values; every operation returns a new
/// vector and leaves its operands untouched.
///
/// Vectors are *column* vectors when multiplied with a [`Matrix`][crate::Matrix].
///
/// # Creating vectors
///
/// ```
/// # use eng_linalg::*;
/// let a = vec3(1.0, 2.0, 3.0);
/// let b = Vector::from([1.0, 2.0, 3.0]);
/// let c = Vector::from_fn(|i| (i + 1) as f64);
/// let d = Vec3d::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
/// assert!(a == b && b == c && c == d);
///
/// assert_eq!(Vec3f::splat(0.0), Vec3f::ZERO);
/// assert_eq!(Vec4f::W, vec4(0.0, 0.0, 0.0, 1.0));
/// ```
///
/// The unit vectors `X`, `Y`, `Z` and `W` exist for vectors of up to 4 dimensions. Converting a
/// slice of the wrong length fails with a [`DimensionMismatch`].
///
/// # Reading and writing elements
///
/// Vectors are indexed like arrays, and panic on out-of-bounds indices. [`Vector::get`] and
/// [`Vector::get_mut`] are the non-panicking alternatives. Vectors with 2 to 4 elements also
/// expose them as the fields `x`, `y`, `z` and `w`:
///
/// ```
/// # use eng_linalg::*;
/// let mut v = vec3(1, 2, 3);
/// v.z = 7;
/// v[0] = 5;
/// assert_eq!(v, [5, 2, 7]);
/// ```
///
/// # Operators
///
/// - `a + b` and `a - b` work element by element.
/// - `a * b` is the dot product, producing a scalar.
/// - `v * s` and `v / s` scale every element by the scalar `s`.
/// - `-v` negates every element.
///
/// The compound assignment forms (`+=`, `-=`, `*=`, `/=`) are supported as well.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector whose elements are all 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

macro_rules! unit_vectors {
    ($n:literal: $($name:ident = [$($e:ident),+]),+) => {
        impl<T: Zero + One> Vector<T, $n> {
            $(
                #[doc = concat!("The unit vector along the ", stringify!($name), " axis.")]
                pub const $name: Self = Self([$(T::$e),+]);
            )+
        }
    };
}

unit_vectors!(2: X = [ONE, ZERO], Y = [ZERO, ONE]);
unit_vectors!(3: X = [ONE, ZERO, ZERO], Y = [ZERO, ONE, ZERO], Z = [ZERO, ZERO, ONE]);
unit_vectors!(
    4: X = [ONE, ZERO, ZERO, ZERO],
    Y = [ZERO, ONE, ZERO, ZERO],
    Z = [ZERO, ZERO, ONE, ZERO],
    W = [ZERO, ZERO, ZERO, ONE]
);

impl<T, const N: usize> Vector<T, N> {
    /// The dimension of this vector type.
    pub const DIMENSION: usize = N;

    /// Returns a vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Builds a vector by calling `f` with the index of each element, in order.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Transforms every element with `f`.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(vec2(1.5, -2.0).map(|e| e * 2.0), vec2(3.0, -4.0));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let a = vec2(1.0, 2.0);
    /// let b = vec2(true, false);
    /// assert_eq!(a.zip(b), vec2((1.0, true), (2.0, false)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        // Both sides have exactly `N` elements, so the iterator never runs dry.
        let mut pairs = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| pairs.next().unwrap())
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the element at `index`, or [`None`] if `index >= N`.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// let v = vec2(7, 8);
    /// assert_eq!(v.get(1), Some(&8));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Mutable version of [`Vector::get`].
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Computes the dot product `Σ self[i] · other[i]`.
    ///
    /// `self * other` is equivalent.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        let mut sum = T::ZERO;
        for (a, b) in self.0.into_iter().zip(other.0) {
            sum = sum + a * b;
        }
        sum
    }

    /// Returns the squared Euclidean length, `self · self`.
    ///
    /// Unlike [`Vector::length`], this works for integer vectors.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length `sqrt(Σ self[i]²)`.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the unit vector pointing in the same direction, `self * (1 / length)`.
    ///
    /// The zero vector has no direction. Normalizing it divides by zero and yields NaN elements.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(vec3(0.0, -4.0, 0.0).normalize(), -Vec3f::Y);
    /// assert!(Vec2f::ZERO.normalize().x.is_nan());
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self * (T::ONE / self.length())
    }
}

impl<T> Vector<T, 2> {
    /// Appends `z`, producing a [`Vec3`].
    pub fn extend(self, z: T) -> Vec3<T> {
        let [x, y] = self.0;
        vec3(x, y, z)
    }
}

impl<T> Vector<T, 3> {
    /// Drops the `z` element, producing a [`Vec2`].
    pub fn truncate(self) -> Vec2<T> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends `w`, producing a [`Vec4`].
    ///
    /// A `w` of `1` turns a point into homogeneous coordinates so that it is affected by
    /// translations; a `w` of `0` does the same for a direction, which translations leave alone.
    pub fn extend(self, w: T) -> Vec4<T> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Returns the cross product `self × other`.
    ///
    /// The result is orthogonal to both inputs, and `a.cross(b) == -b.cross(a)`.
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Drops the `w` element, producing a [`Vec3`].
    pub fn truncate(self) -> Vec3<T> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Copies the elements of a slice of length `N`.
///
/// ```
/// # use eng_linalg::*;
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(Vec3f::try_from(&data[..3]), Ok(vec3(1.0, 2.0, 3.0)));
/// assert_eq!(
///     Vec3f::try_from(&data[..]),
///     Err(DimensionMismatch { expected: 3, actual: 4 }),
/// );
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = DimensionMismatch;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match <[T; N]>::try_from(slice) {
            Ok(elems) => Ok(Self(elems)),
            Err(_) => Err(DimensionMismatch {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

/// Formats the vector as `[ v0, v1, ..., vN-1 ]`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(" ]")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Shorthand for `Vec2::from([x, y])`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for `Vec3::from([x, y, z])`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for `Vec4::from([x, y, z, w])`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
