use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::Float;

use crate::Vector;

/// A complex number in cartesian coordinates
#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Complex<T>(
    /// Real and imaginary parts
    pub [T; 2],
);

impl<T: Copy> Complex<T> {
    /// Create a new `Complex<T>`
    pub const fn new(re: T, im: T) -> Self {
        Self([re, im])
    }

    /// The real part
    pub fn re(&self) -> T {
        self.0[0]
    }

    /// The imaginary part
    pub fn im(&self) -> T {
        self.0[1]
    }
}

impl<T: Float> Complex<T> {
    /// A purely real value
    pub fn real(re: T) -> Self {
        Self::new(re, T::zero())
    }

    /// Unit
    pub fn one() -> Self {
        Self::real(T::one())
    }

    /// Conjugate
    pub fn conj(self) -> Self {
        Self::new(self.re(), -self.im())
    }

    /// Squared magnitude `re² + im²`
    pub fn norm_sqr(&self) -> T {
        self.re() * self.re() + self.im() * self.im()
    }

    /// Magnitude
    pub fn abs(&self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Whether the imaginary part is exactly zero
    pub fn is_real(&self) -> bool {
        self.im() == T::zero()
    }

    /// Complex exponential `exp(re)*(cos(im) + i sin(im))`
    pub fn exp(self) -> Self {
        let (s, c) = self.im().sin_cos();
        Self::new(c, s) * self.re().exp()
    }

    /// Multiplicative inverse
    pub fn recip(self) -> Self {
        Self::one() / self
    }
}

macro_rules! fwd_binop {
    ($tr:ident::$meth:ident) => {
        impl<T: Copy + $tr<Output = T>> $tr for Complex<T> {
            type Output = Self;
            fn $meth(self, rhs: Self) -> Self {
                Self([self.0[0].$meth(rhs.0[0]), self.0[1].$meth(rhs.0[1])])
            }
        }
    };
}
fwd_binop!(Add::add);
fwd_binop!(Sub::sub);

macro_rules! fwd_binop_inner {
    ($tr:ident::$meth:ident) => {
        impl<T: Copy + $tr<Output = T>> $tr<T> for Complex<T> {
            type Output = Self;
            fn $meth(self, rhs: T) -> Self {
                Self([self.0[0].$meth(rhs), self.0[1].$meth(rhs)])
            }
        }
    };
}
fwd_binop_inner!(Mul::mul);
fwd_binop_inner!(Div::div);

impl<T: Copy + Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1]])
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re() * rhs.re() - self.im() * rhs.im(),
            self.re() * rhs.im() + self.im() * rhs.re(),
        )
    }
}

impl<T: Float> Div for Complex<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.re() * rhs.re() + self.im() * rhs.im(),
            self.im() * rhs.re() - self.re() * rhs.im(),
        ) * rhs.norm_sqr().recip()
    }
}

impl<T: Float> core::iter::Sum for Complex<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(T::zero(), T::zero()), |c, i| c + i)
    }
}

impl<T: Float> core::iter::Product for Complex<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |c, i| c * i)
    }
}

impl<T> From<num_complex::Complex<T>> for Complex<T> {
    fn from(value: num_complex::Complex<T>) -> Self {
        Self([value.re, value.im])
    }
}

impl<T> From<Complex<T>> for num_complex::Complex<T> {
    fn from(value: Complex<T>) -> Self {
        let [re, im] = value.0;
        Self { re, im }
    }
}

/// Real parts
pub fn real<T: Float, const N: usize>(v: &Vector<Complex<T>, N>) -> Vector<T, N> {
    v.transform(|c| c.re())
}

/// Imaginary parts
pub fn imag<T: Float, const N: usize>(v: &Vector<Complex<T>, N>) -> Vector<T, N> {
    v.transform(|c| c.im())
}

/// Squared magnitudes
pub fn norm<T: Float, const N: usize>(v: &Vector<Complex<T>, N>) -> Vector<T, N> {
    v.transform(|c| c.norm_sqr())
}

/// Magnitudes
pub fn abs<T: Float, const N: usize>(v: &Vector<Complex<T>, N>) -> Vector<T, N> {
    v.transform(|c| c.abs())
}

/// Product of all elements, unity if empty
pub fn product<T: Float>(v: &[Complex<T>]) -> Complex<T> {
    v.iter().copied().product()
}
