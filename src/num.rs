use core::{
    fmt::Debug,
    ops::{Add, Neg, Sub},
};
use num_traits::{AsPrimitive, Float, FloatConst};

/// Helper trait unifying fixed point and floating point coefficients/samples
///
/// This is the arithmetic contract of the runtime filter recurrences.
pub trait FilterNum:
    Copy
    + Debug
    + Default
    + PartialEq
    + Neg<Output = Self>
    + Sub<Self, Output = Self>
    + Add<Self, Output = Self>
where
    Self: 'static,
{
    /// Multiplicative identity
    const ONE: Self;
    /// Additive identity
    const ZERO: Self;
    /// Multiplication (scaled)
    fn mul(self, other: Self) -> Self;
    /// Scale and quantize a floating point value.
    fn quantize<C>(value: C) -> Self
    where
        Self: AsPrimitive<C>,
        C: Float + AsPrimitive<Self>;
}

macro_rules! impl_float {
    ($T:ty) => {
        impl FilterNum for $T {
            const ONE: Self = 1.0;
            const ZERO: Self = 0.0;
            fn mul(self, other: Self) -> Self {
                self * other
            }
            fn quantize<C: Float + AsPrimitive<Self>>(value: C) -> Self {
                value.as_()
            }
        }
    };
}
impl_float!(f32);
impl_float!(f64);

macro_rules! impl_int {
    ($T:ty, $A:ty, $Q:literal) => {
        impl FilterNum for $T {
            const ONE: Self = 1 << $Q;
            const ZERO: Self = 0;
            fn mul(self, other: Self) -> Self {
                (((1 << ($Q - 1)) + self as $A * other as $A) >> $Q) as Self
            }
            fn quantize<C>(value: C) -> Self
            where
                Self: AsPrimitive<C>,
                C: Float + AsPrimitive<Self>,
            {
                (value * Self::ONE.as_()).round().as_()
            }
        }
    };
}
// Q2.X to represent the `a1` coefficient range `(-2, 2)` of stable sections
impl_int!(i16, i32, 14);
impl_int!(i32, i64, 30);
impl_int!(i64, i128, 62);

/// Floating point type used for filter design
pub trait DesignFloat: FilterNum + Float + FloatConst {
    /// Convert a design constant
    fn cast(value: f64) -> Self;
}

impl DesignFloat for f32 {
    fn cast(value: f64) -> Self {
        value as _
    }
}

impl DesignFloat for f64 {
    fn cast(value: f64) -> Self {
        value
    }
}
