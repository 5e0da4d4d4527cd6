use core::iter::repeat_n;

use heapless::Vec;

use crate::{Complex, DesignFloat, Vector};

/// Pre-warp a frequency for the bilinear transform
///
/// `2 fs tan(pi f/fs)`
pub fn warp_frequency<F: DesignFloat>(f: F, fs: F) -> F {
    (fs + fs) * (F::PI() * f / fs).tan()
}

/// Zero-pole-gain transfer function
///
/// `gain * prod(s - zero)/prod(s - pole)` with `N` poles and at most `N` zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct Zpk<F, const N: usize> {
    zeros: Vec<Complex<F>, N>,
    poles: Vector<Complex<F>, N>,
    gain: F,
}

impl<F: DesignFloat, const N: usize> Zpk<F, N> {
    /// Create a new ZPK
    pub fn new(zeros: Vec<Complex<F>, N>, poles: Vector<Complex<F>, N>, gain: F) -> Self {
        Self { zeros, poles, gain }
    }

    /// Zeros
    pub fn zeros(&self) -> &[Complex<F>] {
        &self.zeros
    }

    /// Poles
    pub fn poles(&self) -> &Vector<Complex<F>, N> {
        &self.poles
    }

    /// Gain
    pub fn gain(&self) -> F {
        self.gain
    }

    /// Filter order
    pub const fn order(&self) -> usize {
        N
    }

    /// All `N` zeros, the missing ones at the origin
    pub fn padded_zeros(&self) -> Vector<Complex<F>, N> {
        Vector::from_fn(|i| self.zeros.get(i).copied().unwrap_or_default())
    }

    /// Scale a lowpass prototype to cutoff `f`
    pub fn lowpass(&self, f: F) -> Self {
        Self {
            zeros: self.zeros.iter().map(|z| *z * f).collect(),
            poles: self.poles.transform(|p| p * f),
            gain: self.gain * f.powi((N - self.zeros.len()) as _),
        }
    }

    /// Transform a lowpass prototype into a highpass with cutoff `f`
    ///
    /// Zeros and poles are inverted and scaled. The zeros at infinity
    /// move to the origin.
    pub fn highpass(&self, f: F) -> Self {
        let f = Complex::real(f);
        let num: Complex<F> = self.zeros.iter().map(|z| -*z).product();
        let den: Complex<F> = self.poles.iter().map(|p| -*p).product();
        Self {
            zeros: self
                .zeros
                .iter()
                .map(|z| f / *z)
                .chain(repeat_n(Complex::default(), N - self.zeros.len()))
                .collect(),
            poles: self.poles.transform(|p| f / p),
            gain: self.gain * (num / den).re(),
        }
    }

    /// Bilinear transform to the discrete domain with sample rate `fs`
    ///
    /// Zeros at infinity map to Nyquist (`z = -1`).
    pub fn bilinear(&self, fs: F) -> Self {
        let fs2 = Complex::real(fs + fs);
        let num: Complex<F> = self.zeros.iter().map(|z| fs2 - *z).product();
        let den: Complex<F> = self.poles.iter().map(|p| fs2 - *p).product();
        let map = |r: Complex<F>| (fs2 + r) / (fs2 - r);
        Self {
            zeros: self
                .zeros
                .iter()
                .map(|z| map(*z))
                .chain(repeat_n(Complex::real(-F::one()), N - self.zeros.len()))
                .collect(),
            poles: self.poles.transform(map),
            gain: self.gain * (num / den).re(),
        }
    }
}
