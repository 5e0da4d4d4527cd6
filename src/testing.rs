//! Tools to test filter designs
#![allow(dead_code)]
use super::Complex;
use num_complex::Complex64;
use num_traits::Float;

/// Maximum acceptable error between a computed and actual value given fixed and relative
/// tolerances.
///
/// The relative tolerance is with respect to the larger magnitude of `a` and `b`.
pub fn max_error<T: Float>(a: T, b: T, rtol: T, atol: T) -> T {
    rtol * a.abs().max(b.abs()) + atol
}

/// Return whether two numbers are within absolute plus relative tolerance
pub fn isclose<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    (a - b).abs() <= max_error(a, b, rtol, atol)
}

/// Return whether all values are close
pub fn allclose<T: Float>(a: &[T], b: &[T], rtol: T, atol: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| isclose(*a, *b, rtol, atol))
}

/// Return whether both real and imaginary component are close
pub fn complex_isclose<T: Float>(a: Complex<T>, b: Complex<T>, rtol: T, atol: T) -> bool {
    isclose(a.re(), b.re(), rtol, atol) && isclose(a.im(), b.im(), rtol, atol)
}

/// Return whether all complex values are close
pub fn complex_allclose<T: Float>(a: &[Complex<T>], b: &[Complex<T>], rtol: T, atol: T) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(a, b)| complex_isclose(*a, *b, rtol, atol))
}

/// Evaluate a polynomial with coefficients of `z^0, z^-1, ...`
pub fn polyval(p: &[f64], z: Complex64) -> Complex64 {
    p.iter()
        .fold(
            (Complex64::default(), Complex64::new(1.0, 0.0)),
            |(a, zi), pi| (a + zi * *pi, zi * z),
        )
        .0
}

/// Transfer function at frequency `f` in units of the sample rate
pub fn freqz(b: &[f64], a: &[f64], f: f64) -> Complex64 {
    let z = Complex64::new(0.0, -core::f64::consts::TAU * f).exp();
    polyval(b, z) / polyval(a, z)
}

/// Gain in dB of a `[b, a]` transfer function at `f`
pub fn gain_db(b: &[f64], a: &[f64], f: f64) -> f64 {
    10.0 * freqz(b, a, f).norm_sqr().log10()
}
