use heapless::Vec;

use super::{
    DesignError, Kind, Zpk,
    bessel::{BESSEL_MAX_ORDER, BESSEL_POLES},
};
use crate::{Complex, DesignFloat, Vector};

/// Analog lowpass prototype of order `N`
///
/// Cutoff is normalized to 1 rad/s.
pub trait Prototype<const N: usize> {
    /// Prototype family
    fn kind(&self) -> Kind;

    /// Prototype zeros, poles and gain
    fn zpk<F: DesignFloat>(&self) -> Zpk<F, N>;

    /// Filter order
    fn order(&self) -> usize {
        N
    }

    /// Check runtime parameters
    fn validate(&self) -> Result<(), DesignError> {
        Ok(())
    }
}

/// Angle of the `k`th left half plane pole
///
/// `pi (2 k + 1 - N)/(2 N)`. With `skip_zero` the zero angle of odd orders
/// is left out.
fn theta<F: DesignFloat>(n: usize, k: usize, skip_zero: bool) -> Complex<F> {
    let k = k + (skip_zero && n % 2 == 1 && k >= n / 2) as usize;
    let i = (2 * k + 1) as f64 - n as f64;
    Complex::new(F::zero(), F::PI() * F::cast(i / (2 * n) as f64))
}

/// `-sinh(v)`
fn minus_sinh<F: DesignFloat>(v: Complex<F>) -> Complex<F> {
    ((-v).exp() - v.exp()) * F::cast(0.5)
}

fn butterworth_poles<F: DesignFloat, const N: usize>() -> Vector<Complex<F>, N> {
    Vector::from_fn(|k| -theta::<F>(N, k, false).exp())
}

fn check_ripple(ripple: f64) -> Result<(), DesignError> {
    if ripple.is_finite() && ripple > 0.0 {
        Ok(())
    } else {
        Err(DesignError::Ripple)
    }
}

/// Maximally flat prototype
///
/// Poles evenly spaced on the left half unit circle, no zeros, unity gain.
///
/// ```
/// use embedded_iir::iir::{Butterworth, Prototype};
/// let zpk = Butterworth::<3>::new().zpk::<f64>();
/// assert_eq!(zpk.poles()[1].re(), -1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Butterworth<const N: usize>(());

impl<const N: usize> Butterworth<N> {
    /// Create a new Butterworth prototype
    pub const fn new() -> Self {
        const { assert!(N > 0, "order must be positive") };
        Self(())
    }
}

impl<const N: usize> Prototype<N> for Butterworth<N> {
    fn kind(&self) -> Kind {
        Kind::Butterworth
    }

    fn zpk<F: DesignFloat>(&self) -> Zpk<F, N> {
        const { assert!(N > 0, "order must be positive") };
        Zpk::new(Vec::new(), butterworth_poles(), F::one())
    }
}

/// Chebyshev type I prototype
///
/// Equiripple pass band with `ripple` dB peak to peak, monotonic stop band.
/// Unity peak pass band gain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chebyshev1<const N: usize> {
    ripple: f64,
}

impl<const N: usize> Chebyshev1<N> {
    /// Create a new prototype with pass band ripple in dB
    pub const fn new(ripple: f64) -> Self {
        const { assert!(N > 0, "order must be positive") };
        Self { ripple }
    }

    /// Pass band ripple in dB
    pub const fn ripple(&self) -> f64 {
        self.ripple
    }
}

impl<const N: usize> Prototype<N> for Chebyshev1<N> {
    fn kind(&self) -> Kind {
        Kind::Chebyshev1
    }

    fn validate(&self) -> Result<(), DesignError> {
        check_ripple(self.ripple)
    }

    fn zpk<F: DesignFloat>(&self) -> Zpk<F, N> {
        const { assert!(N > 0, "order must be positive") };
        let rf = (F::cast(10.0).powf(F::cast(0.1 * self.ripple)) - F::one()).sqrt();
        let mu = Complex::real(rf.recip().asinh() / F::cast(N as _));
        let poles = Vector::from_fn(|k| minus_sinh(mu + theta(N, k, false)));
        let mut gain = poles.reduce(|a, p| a * -p, Complex::<F>::one()).re();
        if N % 2 == 0 {
            gain = gain / (F::one() + rf * rf).sqrt();
        }
        Zpk::new(Vec::new(), poles, gain)
    }
}

/// Chebyshev type II (inverse Chebyshev) prototype
///
/// Monotonic pass band, equiripple stop band attenuated by at least `ripple` dB.
/// The stop band edge is at the normalized frequency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chebyshev2<const N: usize> {
    ripple: f64,
}

impl<const N: usize> Chebyshev2<N> {
    /// Create a new prototype with stop band attenuation in dB
    pub const fn new(ripple: f64) -> Self {
        const { assert!(N > 0, "order must be positive") };
        Self { ripple }
    }

    /// Stop band attenuation in dB
    pub const fn ripple(&self) -> f64 {
        self.ripple
    }
}

impl<const N: usize> Prototype<N> for Chebyshev2<N> {
    fn kind(&self) -> Kind {
        Kind::Chebyshev2
    }

    fn validate(&self) -> Result<(), DesignError> {
        check_ripple(self.ripple)
    }

    fn zpk<F: DesignFloat>(&self) -> Zpk<F, N> {
        const { assert!(N > 0, "order must be positive") };
        let rf = (F::cast(10.0).powf(F::cast(0.1 * self.ripple)) - F::one()).sqrt().recip();
        let mu = rf.recip().asinh() / F::cast(N as _);
        let (sinh, cosh) = (mu.sinh(), mu.cosh());
        let zeros: Vec<Complex<F>, N> = (0..N - N % 2)
            .map(|k| minus_sinh(theta(N, k, true)).recip())
            .collect();
        let poles = butterworth_poles::<F, N>()
            .transform(|p| Complex::new(sinh * p.re(), cosh * p.im()).recip());
        let num: Complex<F> = zeros.iter().map(|z| -*z).product();
        let den: Complex<F> = poles.reduce(|a, p| a * -p, Complex::one());
        let gain = (den / num).re();
        Zpk::new(zeros, poles, gain)
    }
}

/// Bessel-Thomson prototype
///
/// Maximally flat group delay. Phase normalized: the high frequency phase
/// asymptote matches the Butterworth prototype of the same order.
/// Orders up to [`BESSEL_MAX_ORDER`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bessel<const N: usize>(());

impl<const N: usize> Bessel<N> {
    /// Create a new Bessel prototype
    pub const fn new() -> Self {
        const { assert!(N > 0 && N <= BESSEL_MAX_ORDER, "order out of range") };
        Self(())
    }
}

impl<const N: usize> Prototype<N> for Bessel<N> {
    fn kind(&self) -> Kind {
        Kind::Bessel
    }

    fn zpk<F: DesignFloat>(&self) -> Zpk<F, N> {
        const { assert!(N > 0 && N <= BESSEL_MAX_ORDER, "order out of range") };
        let offset = N * (N - 1) / 2;
        let poles = Vector::from_fn(|k| {
            let [re, im] = BESSEL_POLES[offset + k];
            Complex::new(F::cast(re), F::cast(im))
        });
        Zpk::new(Vec::new(), poles, F::one())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{complex_allclose, isclose};

    /// Analog response at `w` rad/s in dB
    fn analog_db<const N: usize>(zpk: &Zpk<f64, N>, w: f64) -> f64 {
        let s = Complex::new(0.0, w);
        let num: Complex<f64> = zpk.zeros().iter().map(|z| s - *z).product();
        let den: Complex<f64> = zpk.poles().iter().map(|p| s - *p).product();
        10.0 * ((num / den) * zpk.gain()).norm_sqr().log10()
    }

    fn sizes<const N: usize>() {
        assert_eq!(Butterworth::<N>::new().zpk::<f64>().zeros().len(), 0);
        assert_eq!(Chebyshev1::<N>::new(1.0).zpk::<f64>().zeros().len(), 0);
        assert_eq!(Bessel::<N>::new().zpk::<f32>().zeros().len(), 0);
        let c2 = Chebyshev2::<N>::new(40.0);
        assert_eq!(c2.zpk::<f64>().zeros().len(), N - N % 2);
        assert_eq!(c2.zpk::<f64>().poles().size(), N);
        assert_eq!(c2.order(), N);
    }

    #[test]
    fn prototype_sizes() {
        sizes::<1>();
        sizes::<2>();
        sizes::<3>();
        sizes::<4>();
        sizes::<7>();
        sizes::<10>();
    }

    #[test]
    fn butterworth() {
        let p = Butterworth::<5>::new().zpk::<f64>();
        let (a, b) = (0.30901699437494745, 0.9510565162951535);
        let (c, d) = (0.8090169943749475, 0.5877852522924731);
        assert!(complex_allclose(
            &p.poles().0,
            &[
                Complex::new(-a, b),
                Complex::new(-c, d),
                Complex::real(-1.0),
                Complex::new(-c, -d),
                Complex::new(-a, -b),
            ],
            1e-15,
            1e-16,
        ));
        assert!(p.poles()[2].is_real());
        assert_eq!(p.gain(), 1.0);

        let p = Butterworth::<6>::new().zpk::<f64>();
        for (k, p) in p.poles().iter().enumerate() {
            assert!(isclose(p.abs(), 1.0, 1e-15, 0.0));
            let t = core::f64::consts::PI * (2 * k + 1) as f64 / 12.0 - core::f64::consts::FRAC_PI_2;
            assert!(isclose((-p.im()).atan2(-p.re()), t, 1e-14, 1e-15));
        }
        assert!(isclose(analog_db(&p, 1.0), -3.0103, 1e-4, 0.0));
    }

    #[test]
    fn chebyshev1() {
        let p = Chebyshev1::<3>::new(1.0).zpk::<f64>();
        assert!(complex_allclose(
            &p.poles().0,
            &[
                Complex::new(-0.2470853024711903, 0.9659986749948668),
                Complex::real(-0.4941706049423804),
                Complex::new(-0.2470853024711903, -0.9659986749948668),
            ],
            1e-12,
            0.0
        ));
        assert!(p.poles()[1].is_real());
        assert!(isclose(p.gain(), 0.4913066820900677, 1e-12, 0.0));
        assert!(isclose(analog_db(&p, 0.0), 0.0, 0.0, 1e-12));
        assert!(isclose(analog_db(&p, 1.0), -1.0, 0.0, 1e-12));

        let p = Chebyshev1::<4>::new(0.5).zpk::<f64>();
        assert!(isclose(analog_db(&p, 0.0), -0.5, 0.0, 1e-12));
        assert!(isclose(analog_db(&p, 1.0), -0.5, 0.0, 1e-12));
        assert!(analog_db(&p, 2.0) < -20.0);
    }

    #[test]
    fn chebyshev2() {
        let p = Chebyshev2::<3>::new(40.0).zpk::<f64>();
        assert!(complex_allclose(
            p.zeros(),
            &[
                Complex::new(0.0, -1.1547005383792517),
                Complex::new(0.0, 1.1547005383792517)
            ],
            1e-12,
            0.0
        ));
        assert!(complex_allclose(
            &p.poles().0,
            &[
                Complex::new(-0.1611490056000606, -0.2959331509597176),
                Complex::real(-0.35229951131263043),
                Complex::new(-0.1611490056000606, 0.2959331509597176),
            ],
            1e-12,
            0.0
        ));
        assert!(p.poles()[1].is_real());
        assert!(isclose(p.gain(), 0.03000150011250936, 1e-12, 0.0));
        for n in [0.0, 1.0] {
            let want = if n == 0.0 { 0.0 } else { -40.0 };
            assert!(isclose(analog_db(&p, n), want, 0.0, 1e-9));
        }
        let p = Chebyshev2::<6>::new(60.0).zpk::<f64>();
        assert!(isclose(analog_db(&p, 0.0), 0.0, 0.0, 1e-9));
        assert!(isclose(analog_db(&p, 1.0), -60.0, 0.0, 1e-9));
        assert!(analog_db(&p, 3.0) <= -60.0 + 1e-9);
    }

    #[test]
    fn bessel() {
        let p = Bessel::<2>::new().zpk::<f64>();
        assert_eq!(
            p.poles(),
            &Vector([
                Complex::new(-0.8660254037844386, 0.5),
                Complex::new(-0.8660254037844386, -0.5)
            ])
        );
        let p = Bessel::<3>::new().zpk::<f64>();
        assert_eq!(p.poles()[1], Complex::real(-0.9416000265332067));
        let p = Bessel::<BESSEL_MAX_ORDER>::new().zpk::<f64>();
        assert!(p.poles().iter().all(|p| p.re() < 0.0));
        assert_eq!(p.poles().count(|p| p.is_real()), 1);
        // unity DC gain
        for p in [
            analog_db(&Bessel::<4>::new().zpk(), 0.0),
            analog_db(&Bessel::<9>::new().zpk(), 0.0),
            analog_db(&p, 0.0),
        ] {
            assert!(isclose(p, 0.0, 0.0, 1e-9));
        }
    }

    #[test]
    fn ripple() {
        assert_eq!(Chebyshev1::<2>::new(1.0).validate(), Ok(()));
        assert_eq!(Chebyshev1::<2>::new(0.0).validate(), Err(DesignError::Ripple));
        assert_eq!(
            Chebyshev2::<2>::new(f64::NAN).validate(),
            Err(DesignError::Ripple)
        );
        assert_eq!(Bessel::<2>::new().validate(), Ok(()));
    }
}
