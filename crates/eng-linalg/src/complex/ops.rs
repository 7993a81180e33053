use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Complex, Number};

impl<T: PartialEq> PartialEq for Complex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Complex<T> {}

impl<T> AbsDiffEq for Complex<T>
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

impl<T> RelativeEq for Complex<T>
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

impl<T> UlpsEq for Complex<T>
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

impl<T: Number> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from(-self.vec)
    }
}

impl<T: Number> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from(self.vec + rhs.vec)
    }
}

/// Adds a real number to the real part.
impl<T: Number> Add<T> for Complex<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::new(self.r + rhs, self.i)
    }
}

impl<T: Number> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from(self.vec - rhs.vec)
    }
}

/// Subtracts a real number from the real part.
impl<T: Number> Sub<T> for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::new(self.r - rhs, self.i)
    }
}

impl<T: Number> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (r, i) = (self.r, self.i);
        let (br, bi) = (rhs.r, rhs.i);
        Self::new(r * br - i * bi, r * bi + i * br)
    }
}

/// Complex-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from(self.vec * rhs)
    }
}

/// Division via the conjugate of the divisor.
impl<T: Number> Div for Complex<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let (r, i) = (self.r, self.i);
        let (br, bi) = (rhs.r, rhs.i);
        let d = br * br + bi * bi;
        Self::new((r * br + i * bi) / d, (i * br - r * bi) / d)
    }
}

/// Complex-Scalar division.
///
/// This computes `(r * b) / b²` for each part. For a finite, non-zero `b` that equals `r / b`;
/// dividing by zero yields NaN in both parts.
impl<T: Number> Div<T> for Complex<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let d = rhs * rhs;
        Self::new((self.r * rhs) / d, (self.i * rhs) / d)
    }
}
