mod ops;

use std::{
    fmt, mem,
    ops::{Deref, DerefMut, Neg},
};

use crate::{vec2, Number, One, Sqrt, Trig, Vector, Zero};

/// A complex number with [`f32`] components.
pub type Complexf = Complex<f32>;
/// A complex number with [`f64`] components.
pub type Complexd = Complex<f64>;

/// A complex number `r + i·𝐢` consisting of a real part `r` and an imaginary part `i`.
///
/// The parts are accessible as the fields `r` and `i`.
///
/// # Arithmetic
///
/// Complex numbers support `+`, `-`, `*` and `/` with other complex numbers and with scalars.
/// Adding or subtracting a scalar only affects the real part, while multiplying or dividing by a
/// scalar affects both parts.
///
/// Dividing by zero (either a zero scalar or a complex number with zero modulus) does not panic,
/// it produces NaN or infinite components.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Complex<T> {
    vec: Vector<T, 2>,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T: Zero> Complex<T> {
    /// The complex number `0 + 0i`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
}

impl<T: Zero + One> Complex<T> {
    /// The complex number `1 + 0i` (the multiplicative identity).
    pub const ONE: Self = Self::new(T::ONE, T::ZERO);
    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self::new(T::ZERO, T::ONE);
}

impl<T> Complex<T> {
    /// Creates a complex number from its real part `r` and imaginary part `i`.
    #[inline]
    pub const fn new(r: T, i: T) -> Self {
        Self { vec: vec2(r, i) }
    }

    /// Returns the real and imaginary part as a 2-dimensional [`Vector`].
    #[inline]
    pub fn into_vec(self) -> Vector<T, 2> {
        self.vec
    }

    /// Returns the complex conjugate `r - i·𝐢`.
    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [r, i] = self.vec.into_array();
        Self::new(r, -i)
    }

    /// Returns the squared modulus of this complex number.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the modulus (absolute value) of this complex number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// assert_eq!(Complex::new(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "abs", alias = "modulus")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns this complex number scaled by the reciprocal of its length.
    ///
    /// The result of normalizing `0 + 0i` is NaN.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self * (T::ONE / self.length())
    }

    /// Returns the argument of this complex number, computed as `atan(i / r)`.
    ///
    /// This does not take the quadrant into account: `-1 - 1i` and `1 + 1i` have the same angle.
    /// If `r` is zero the division yields an infinity (so the angle is ±π/2), or NaN if both
    /// parts are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eng_linalg::*;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// assert!((Complex::new(1.0, 1.0).angle() - FRAC_PI_4).abs() < 1e-12);
    /// assert!((Complex::new(-1.0, -1.0).angle() - FRAC_PI_4).abs() < 1e-12);
    /// ```
    #[doc(alias = "arg")]
    pub fn angle(&self) -> T
    where
        T: Number + Trig,
    {
        (self.i / self.r).atan()
    }
}

#[repr(C)]
pub struct RI<T> {
    pub r: T,
    pub i: T,
}

impl<T> Deref for Complex<T> {
    type Target = RI<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Complex<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> From<Vector<T, 2>> for Complex<T> {
    fn from(vec: Vector<T, 2>) -> Self {
        Self { vec }
    }
}

impl<T: fmt::Debug> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Complex")
            .field("r", &self.r)
            .field("i", &self.i)
            .finish()
    }
}

/// Formats the number as `r + |i|i` or `r - |i|i`.
impl<T> fmt::Display for Complex<T>
where
    T: fmt::Display + Number + PartialOrd,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.r, f)?;
        fmt_imaginary(f, self.i, 'i')
    }
}

/// Writes one imaginary term of a hypercomplex number, with its sign as the separator.
pub(crate) fn fmt_imaginary<T>(f: &mut fmt::Formatter<'_>, value: T, unit: char) -> fmt::Result
where
    T: fmt::Display + Number + PartialOrd,
{
    let magnitude = if value >= T::ZERO {
        f.write_str(" + ")?;
        // `-0.0 + 0.0` is `+0.0`
        value + T::ZERO
    } else {
        f.write_str(" - ")?;
        -value
    };
    fmt::Display::fmt(&magnitude, f)?;
    write!(f, "{unit}")
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn access() {
        let mut c = Complex::new(1.0, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.i, 2.0);
        c.i = -7.5;
        assert_eq!(c, Complex::new(1.0, -7.5));
        assert_eq!(c.into_vec(), vec2(1.0, -7.5));
    }

    #[test]
    fn fmt() {
        assert_eq!(Complex::new(1.3, 0.5).to_string(), "1.3 + 0.5i");
        assert_eq!(Complex::new(3.0, -5.0).to_string(), "3 - 5i");
        assert_eq!(Complex::new(-2.0, -0.0).to_string(), "-2 + 0i");
        assert_eq!(Complex::new(4, 0).to_string(), "4 + 0i");
        assert_eq!(format!("{:.2}", Complex::new(1.0, -1.0 / 3.0)), "1.00 - 0.33i");
    }

    #[test]
    fn scalar_mul_then_div_restores_value() {
        let num1 = Complex::new(1.3, 0.5);
        let num2 = num1 * 4.0;
        assert_relative_eq!(num2, Complex::new(5.2, 2.0));

        // Scalar division computes `(r * b) / b²`, which restores the original value.
        let num3 = num2 / 4.0;
        assert_relative_eq!(num3, num1);
    }

    #[test]
    fn scalar_div_by_zero_is_nan() {
        // `(r * 0) / 0²` is `0 / 0`, not `r / 0`.
        let c = Complex::new(1.0f32, -1.0) / 0.0;
        assert!(c.r.is_nan());
        assert!(c.i.is_nan());
    }

    #[test]
    fn complex_div() {
        let a = Complex::new(3.0, 5.0);
        let b = Complex::new(1.0, 2.0);
        assert_relative_eq!(a / b, Complex::new(2.6, -0.2));
        assert_relative_eq!(a / b * b, a, epsilon = 1e-12);

        let zero = Complex::new(1.0f64, 1.0) / Complex::ZERO;
        assert!(zero.r.is_nan() && zero.i.is_nan());
    }

    #[test]
    fn mul() {
        assert_eq!(Complex::<i32>::I * Complex::I, Complex::new(-1, 0));
        assert_eq!(Complex::new(1, 2) * Complex::new(3, -4), Complex::new(11, 2));
        assert_eq!(Complex::new(1, 2) * 3, Complex::new(3, 6));
    }

    #[test]
    fn add_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(0.5, -1.0);
        assert_eq!(a + b, Complex::new(1.5, 1.0));
        assert_eq!(a - b, Complex::new(0.5, 3.0));
        // Scalars only touch the real part.
        assert_eq!(a + 2.0, Complex::new(3.0, 2.0));
        assert_eq!(a - 2.0, Complex::new(-1.0, 2.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(a.conjugate(), Complex::new(1.0, -2.0));
    }

    #[test]
    fn length_normalize() {
        let num4 = Complex::new(3.0, 5.0);
        assert_eq!(num4.length(), 34.0f64.sqrt());
        assert_relative_eq!(num4.normalize().length(), 1.0);
        assert_relative_eq!(
            num4.normalize(),
            Complex::new(3.0 / 34.0f64.sqrt(), 5.0 / 34.0f64.sqrt())
        );

        let nan = Complexf::ZERO.normalize();
        assert!(nan.r.is_nan() && nan.i.is_nan());
    }

    #[test]
    fn angle() {
        assert_relative_eq!(Complex::new(0.0, 1.0).angle(), FRAC_PI_2);
        assert_relative_eq!(Complex::new(0.0, -1.0).angle(), -FRAC_PI_2);
        assert!(Complexd::ZERO.angle().is_nan());
        assert_eq!(Complex::new(2.0, 0.0).angle(), 0.0);
    }
}
