//! Scalar abstractions the vector, matrix and hypercomplex types are generic over.

use std::ops;

/// Trigonometry for angles given in radians, plus degree conversion.
///
/// Implemented for [`f32`] and [`f64`] by forwarding to their inherent methods.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    /// Arctangent, in radians, of the ratio `self`.
    fn atan(self) -> Self;
    /// Interprets `self` as degrees and returns the same angle in radians.
    fn to_radians(self) -> Self;
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Scalars with an additive identity, usable in `const` contexts.
pub trait Zero {
    const ZERO: Self;
}

/// Scalars with a multiplicative identity, usable in `const` contexts.
pub trait One {
    const ONE: Self;
}

/// The scalar requirements of most operations in this crate.
///
/// Formulas are written for a field: they assume division works and ignore overflow. With [`f32`]
/// and [`f64`], dividing by zero and similar degenerate cases produce infinities or NaN following
/// IEEE-754, and are never reported as errors.
///
/// This trait is implemented automatically for every type meeting its bounds.
pub trait Number:
    Zero
    + One
    + Copy
    + PartialEq
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Neg<Output = Self>
{
    /// Returns `1 + 1`.
    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }
}

impl<T> Number for T where
    T: Zero
        + One
        + Copy
        + PartialEq
        + ops::Add<Output = T>
        + ops::Sub<Output = T>
        + ops::Mul<Output = T>
        + ops::Div<Output = T>
        + ops::Neg<Output = T>
{
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0.0, 1.0: f32, f64);
zero_one!(0, 1: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn to_radians(self) -> Self {
                    self.to_radians()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }
        )+
    };
}
float_impls!(f32, f64);
