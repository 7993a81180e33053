use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Complex, Number, Quat};

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.vec)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec - rhs.vec)
    }
}

/// The Hamilton product.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let [r, i, j, k] = self.vec.into_array();

        #[rustfmt::skip]
        let product = Self::new(
            r * b.r - i * b.i - j * b.j - k * b.k,
            r * b.i + i * b.r + j * b.k - k * b.j,
            r * b.j - i * b.k + j * b.r + k * b.i,
            r * b.k + i * b.j - j * b.i + k * b.r,
        );
        product
    }
}

/// Quaternion-Complex multiplication.
///
/// This is a reduced product that does *not* match the Hamilton product with the quaternion
/// `br + bi·𝐢 + 0𝐣 + 0𝐤`: the `j·bi` term enters the `k` component with a positive sign instead
/// of a negative one.
///
/// ```text
/// r' = r·br − i·bi
/// i' = r·bi + i·br
/// j' = j·br + k·bi
/// k' = j·bi + k·br
/// ```
impl<T: Number> Mul<Complex<T>> for Quat<T> {
    type Output = Self;

    fn mul(self, b: Complex<T>) -> Self {
        let [r, i, j, k] = self.vec.into_array();

        #[rustfmt::skip]
        let product = Self::new(
            r * b.r - i * b.i,
            r * b.i + i * b.r,
            j * b.r + k * b.i,
            j * b.i + k * b.r,
        );
        product
    }
}

/// Quaternion-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_vec(self.vec * rhs)
    }
}
