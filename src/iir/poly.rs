use num_traits::AsPrimitive;

use super::Zpk;
use crate::{DesignFloat, FilterNum, Split, SplitInplace, SplitProcess, Vector, poly_monic};

/// Transfer function polynomial filter of order `N`
///
/// `H(z) = (b0 + b1 z^-1 + ... + bN z^-N)/(1 + a1 z^-1 + ... + aN z^-N)`
///
/// Executed in transposed direct form II.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolyDesign<T, const N: usize> {
    b0: T,
    b: [T; N],
    a: [T; N],
}

/// Running polynomial filter
pub type PolyInstance<'a, T, const N: usize> = Split<&'a PolyDesign<T, N>, Vector<T, N>>;

impl<T: FilterNum, const N: usize> PolyDesign<T, N> {
    /// Design from a discrete ZPK
    pub fn new<F: DesignFloat>(zpk: &Zpk<F, N>) -> Self
    where
        T: AsPrimitive<F>,
        F: AsPrimitive<T>,
    {
        const { assert!(N > 0, "order must be positive") };
        let k = zpk.gain();
        let b = poly_monic(&zpk.padded_zeros().0);
        let a = poly_monic(&zpk.poles().0);
        Self {
            b0: T::quantize(k),
            b: b.map(|b| T::quantize(k * b.re())),
            a: a.map(|a| T::quantize(a.re())),
        }
    }

    /// Leading numerator coefficient
    pub fn b0(&self) -> T {
        self.b0
    }

    /// Numerator coefficients `[b1, ..., bN]`
    pub fn b(&self) -> &[T; N] {
        &self.b
    }

    /// Denominator coefficients `[a1, ..., aN]`, `a0 = 1`
    pub fn a(&self) -> &[T; N] {
        &self.a
    }

    /// Full numerator and denominator `([b0, .., bN], [1, a1, .., aN])`
    ///
    /// `L` must be `N + 1`.
    pub fn ba<const L: usize>(&self) -> ([T; L], [T; L]) {
        const { assert!(L == N + 1, "length must be N + 1") };
        (
            core::array::from_fn(|i| if i == 0 { self.b0 } else { self.b[i - 1] }),
            core::array::from_fn(|i| if i == 0 { T::ONE } else { self.a[i - 1] }),
        )
    }

    /// Filter order
    pub const fn order(&self) -> usize {
        N
    }

    /// A new zero state instance
    pub fn instance(&self) -> PolyInstance<'_, T, N> {
        Split::new(self, Vector::default())
    }
}

impl<T: FilterNum, const N: usize> SplitProcess<T, T, Vector<T, N>> for PolyDesign<T, N> {
    fn process(&self, state: &mut Vector<T, N>, x: T) -> T {
        let s = &mut state.0;
        let y = self.b0.mul(x) + s[0];
        for i in 0..N - 1 {
            s[i] = self.b[i].mul(x) - self.a[i].mul(y) + s[i + 1];
        }
        s[N - 1] = self.b[N - 1].mul(x) - self.a[N - 1].mul(y);
        y
    }
}

impl<T: FilterNum, const N: usize> SplitInplace<T, Vector<T, N>> for PolyDesign<T, N> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        Inplace, Process,
        iir::{Bessel, Butterworth, Chebyshev1, Chebyshev2, IirFilter, SosDesign, SosGain},
        testing::{allclose, isclose},
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rustfft::{FftPlanner, num_complex::Complex64};

    #[test]
    fn butterworth_reference() {
        let design: PolyDesign<f64, 2> = IirFilter::new(1000.0)
            .lowpass(&Butterworth::<2>::new(), 100.0)
            .unwrap()
            .poly();
        let (b, a): ([f64; 3], [f64; 3]) = design.ba();
        assert!(allclose(
            &b,
            &[0.06745527388907191, 0.13491054777814382, 0.06745527388907191],
            1e-9,
            0.0
        ));
        assert!(allclose(
            &a,
            &[1.0, -1.1429805025399011, 0.41280159809618866],
            1e-9,
            0.0
        ));
        assert_eq!(design.order(), 2);
    }

    #[test]
    fn zero_input() {
        let design: PolyDesign<f64, 5> = IirFilter::new(1.0)
            .highpass(&Chebyshev2::<5>::new(50.0), 0.1)
            .unwrap()
            .poly();
        let mut filter = design.instance();
        let mut xy = [0.0; 64];
        filter.inplace(&mut xy);
        assert!(xy.iter().all(|y| *y == 0.0));
        assert!(filter.state().iter().all(|s| *s == 0.0));

        let fixed: PolyDesign<i32, 2> = IirFilter::new(1.0)
            .lowpass(&Butterworth::<2>::new(), 0.2)
            .unwrap()
            .poly();
        let mut filter = fixed.instance();
        assert!((0..64).all(|_| filter.process(0) == 0));
        assert_eq!(filter.state(), &Vector([0; 2]));
    }

    #[test]
    fn impulse() {
        let d = IirFilter::new(1000.0)
            .lowpass(&Butterworth::<2>::new(), 100.0)
            .unwrap();
        let poly: PolyDesign<f64, 2> = d.poly();
        let sos: SosDesign<f64, 1> = d.sos(SosGain::FirstSection);
        let (b, a): ([f64; 3], [f64; 3]) = poly.ba();
        let (mut p, mut s) = (poly.instance(), sos.instance());
        let (mut y1, mut y2) = (0.0, 0.0);
        for n in 0..50 {
            let x = if n == 0 { 1.0 } else { 0.0 };
            // reference recurrence
            let y = b[0] * x + y1;
            y1 = b[1] * x - a[1] * y + y2;
            y2 = b[2] * x - a[2] * y;
            assert!(isclose(p.process(x), y, 1e-12, 1e-15));
            assert!(isclose(s.process(x), y, 1e-12, 1e-15));
        }
    }

    #[test]
    fn sos_equivalence() {
        let mut rng = StdRng::seed_from_u64(42);
        let x: [f64; 1000] = core::array::from_fn(|_| rng.random_range(-1.0..1.0));
        let d = IirFilter::new(48e3)
            .lowpass(&Chebyshev1::<6>::new(0.5), 4e3)
            .unwrap();
        let poly: PolyDesign<f64, 6> = d.poly();
        let sos: SosDesign<f64, 3> = d.sos(SosGain::Distribute);
        let mut yp = [0.0; 1000];
        let mut ys = [0.0; 1000];
        poly.instance().block(&x, &mut yp);
        sos.instance().block(&x, &mut ys);
        assert!(allclose(&yp, &ys, 1e-6, 1e-9));

        let d = IirFilter::new(48e3)
            .highpass(&Bessel::<5>::new(), 1e3)
            .unwrap();
        let poly: PolyDesign<f64, 5> = d.poly();
        let sos: SosDesign<f64, 3> = d.sos(SosGain::FirstSection);
        poly.instance().block(&x, &mut yp);
        sos.instance().block(&x, &mut ys);
        assert!(allclose(&yp, &ys, 1e-6, 1e-9));
    }

    #[test]
    fn impulse_spectrum() {
        const L: usize = 1 << 10;
        let d = IirFilter::new(1.0)
            .lowpass(&Butterworth::<3>::new(), 0.125)
            .unwrap();
        let poly: PolyDesign<f64, 3> = d.poly();
        let mut p = poly.instance();
        let mut h: Vec<_> = (0..L)
            .map(|n| Complex64::new(p.process((n == 0) as u8 as f64), 0.0))
            .collect();
        FftPlanner::new().plan_fft_forward(L).process(&mut h);
        let db = |i: usize| 10.0 * h[i].norm_sqr().log10();
        assert!(isclose(db(0), 0.0, 0.0, 1e-9));
        assert!(isclose(db(L / 8), -3.0103, 0.0, 1e-3));
        // 18 dB/octave
        assert!(db(L / 4) < -18.0);
        assert!(db(L / 2) < -200.0);
    }
}
