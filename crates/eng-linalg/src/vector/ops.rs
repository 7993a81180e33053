use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_array()[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_array()[i]
    }
}

// Allows comparing vectors with different (but comparable) element types.
impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.as_array() == other.as_array()
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_array() == other
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(|e| -e)
    }
}

/// Element-wise `+` and `-` between vectors, and their assigning forms.
macro_rules! elementwise {
    ($($op:ident::$f:ident, $assign:ident::$assign_f:ident;)+) => {
        $(
            impl<T: $op<Output = T> + Copy, const N: usize> $op for Vector<T, N> {
                type Output = Self;

                fn $f(self, rhs: Self) -> Self {
                    Self::from_fn(|i| self[i].$f(rhs[i]))
                }
            }

            impl<T: $assign + Copy, const N: usize> $assign for Vector<T, N> {
                fn $assign_f(&mut self, rhs: Self) {
                    for i in 0..N {
                        self[i].$assign_f(rhs[i]);
                    }
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

/// Applies a scalar to every element (`v * s`, `v / s` and their assigning forms).
macro_rules! scalar {
    ($($op:ident::$f:ident, $assign:ident::$assign_f:ident;)+) => {
        $(
            impl<T: $op<Output = T> + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Self;

                fn $f(self, s: T) -> Self {
                    self.map(|e| e.$f(s))
                }
            }

            impl<T: $assign + Copy, const N: usize> $assign<T> for Vector<T, N> {
                fn $assign_f(&mut self, s: T) {
                    for e in self.as_mut_slice() {
                        e.$assign_f(s);
                    }
                }
            }
        )+
    };
}

scalar! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

/// `a * b` between two vectors is their dot product.
///
/// There is no element-wise vector product; use [`Vector::zip`] and [`Vector::map`] for that.
impl<T: Number, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.dot(rhs)
    }
}
