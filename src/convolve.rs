//! Convolution and polynomials from roots
use core::ops::{Add, Mul, Neg};
use num_traits::One;

use crate::Vector;

/// Full discrete convolution
///
/// `c[n] = sum(a[m]*b[n - m])` over the valid index range.
/// `L` must equal `N + M - 1`.
///
/// ```
/// use embedded_iir::{Vector, convolve_full};
/// let c: Vector<_, 5> = convolve_full(&Vector([1.0, 2.0, 3.0]), &Vector([0.0, 1.0, 0.5]));
/// assert_eq!(c, Vector([0.0, 1.0, 2.5, 4.0, 1.5]));
/// ```
pub fn convolve_full<T, const N: usize, const M: usize, const L: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, M>,
) -> Vector<T, L>
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T>,
{
    const { assert!(N > 0 && M > 0 && N + M - 1 == L, "output length must be N + M - 1") };
    Vector::from_fn(|n| {
        let lo = n.saturating_sub(M - 1);
        let hi = n.min(N - 1);
        (lo..=hi).fold(T::default(), |c, m| c + a[m] * b[n - m])
    })
}

/// Non-leading coefficients of the monic polynomial with the given roots
///
/// Returns `[c1, ..., cN]` of `x^N + c1 x^(N - 1) + ... + cN`.
/// The degree-1 factors `(1, -root)` are multiplied in in root order.
pub fn poly_monic<T, const N: usize>(roots: &[T; N]) -> [T; N]
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    let mut c = [T::default(); N];
    for (k, r) in roots.iter().enumerate() {
        // Convolve [1, c1, .., ck] with [1, -r] in place
        for i in (1..=k).rev() {
            c[i] = c[i] + c[i - 1] * -*r;
        }
        c[0] = c[0] + -*r;
    }
    c
}

/// Coefficients of `prod(x - root)`, leading coefficient one
///
/// `L` must equal `N + 1`.
///
/// ```
/// use embedded_iir::{Vector, poly};
/// let p: Vector<_, 3> = poly(&Vector([1.0, 2.0]));
/// assert_eq!(p, Vector([1.0, -3.0, 2.0]));
/// ```
pub fn poly<T, const N: usize, const L: usize>(roots: &Vector<T, N>) -> Vector<T, L>
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T> + Neg<Output = T> + One,
{
    const { assert!(N + 1 == L, "output length must be N + 1") };
    let c = poly_monic(&roots.0);
    Vector::from_fn(|i| if i == 0 { T::one() } else { c[i - 1] })
}
