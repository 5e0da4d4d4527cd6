use num_traits::{AsPrimitive, Float};
use serde::{Deserialize, Serialize};

use super::{SosGain, Zpk, zpk_to_sos};
use crate::{Complex, DesignFloat, FilterNum, Split, SplitInplace, SplitProcess, Vector, poly_monic};

/// Second-order section
///
/// `H(z) = (b0 + b1 z^-1 + b2 z^-2)/(1 + a1 z^-1 + a2 z^-2)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SosSection<T> {
    /// Coefficients
    ///
    /// `[b0, b1, b2, a1, a2]`
    pub ba: [T; 5],
}

impl<T: FilterNum> SosSection<T> {
    /// Create a new section from `[b0, b1, b2, a1, a2]`
    pub const fn new(ba: [T; 5]) -> Self {
        Self { ba }
    }

    /// Numerator coefficients `[b0, b1, b2]`
    pub fn b(&self) -> [T; 3] {
        [self.ba[0], self.ba[1], self.ba[2]]
    }

    /// Denominator coefficients `[1, a1, a2]`
    pub fn a(&self) -> [T; 3] {
        [T::ONE, self.ba[3], self.ba[4]]
    }

    /// Quantize design coefficients
    pub fn quantize<F>(section: &SosSection<F>) -> Self
    where
        T: AsPrimitive<F>,
        F: Float + AsPrimitive<T>,
    {
        Self::new(section.ba.map(T::quantize))
    }
}

impl<F: DesignFloat> SosSection<F> {
    /// Section with the given zero and pole pairs
    ///
    /// Each pair must be real or complex conjugate.
    pub fn from_roots(zeros: [Complex<F>; 2], poles: [Complex<F>; 2], gain: F) -> Self {
        let [b1, b2] = poly_monic(&zeros);
        let [a1, a2] = poly_monic(&poles);
        Self::new([gain, gain * b1.re(), gain * b2.re(), a1.re(), a2.re()])
    }
}

/// SOS state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SosState<T> {
    /// Transposed direct form II state
    ///
    /// `[y1, y2]`
    pub y: [T; 2],
}

impl<T: FilterNum> SplitProcess<T, T, SosState<T>> for SosSection<T> {
    fn process(&self, state: &mut SosState<T>, x: T) -> T {
        let [b0, b1, b2, a1, a2] = self.ba;
        let [y1, y2] = state.y;
        let y = b0.mul(x) + y1;
        state.y = [b1.mul(x) - a1.mul(y) + y2, b2.mul(x) - a2.mul(y)];
        y
    }
}

impl<T: FilterNum> SplitInplace<T, SosState<T>> for SosSection<T> {}

/// Cascade of second-order sections
///
/// ```
/// use embedded_iir::{Process, iir::{Butterworth, IirFilter, SosDesign, SosGain}};
/// let design: SosDesign<f32, 2> = IirFilter::new(1e3)
///     .lowpass(&Butterworth::<4>::new(), 50.0)?
///     .sos(SosGain::FirstSection);
/// let mut lp = design.instance();
/// let y: f32 = (0..1000).map(|_| lp.process(1.0)).last().unwrap_or_default();
/// assert!((y - 1.0).abs() < 1e-4);
/// # Ok::<(), embedded_iir::iir::DesignError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SosDesign<T, const S: usize> {
    sections: Vector<SosSection<T>, S>,
    order: usize,
}

/// Running SOS filter
pub type SosInstance<'a, T, const S: usize> =
    Split<&'a SosDesign<T, S>, Vector<SosState<T>, S>>;

impl<T: FilterNum, const S: usize> SosDesign<T, S> {
    /// Design from a discrete ZPK of order `N`, `S = (N + 1)/2`
    pub fn new<F: DesignFloat, const N: usize>(zpk: &Zpk<F, N>, gain: SosGain) -> Self
    where
        T: AsPrimitive<F>,
        F: AsPrimitive<T>,
    {
        let sections: [SosSection<F>; S] = zpk_to_sos(zpk, gain);
        Self {
            sections: Vector(sections.map(|s| SosSection::quantize(&s))),
            order: N,
        }
    }

    /// Sections in processing order
    pub fn sections(&self) -> &[SosSection<T>; S] {
        &self.sections
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of sections
    pub const fn section_count(&self) -> usize {
        S
    }

    /// A new zero state instance
    pub fn instance(&self) -> SosInstance<'_, T, S> {
        Split::new(self, Vector::default())
    }
}

impl<T: FilterNum, const S: usize> SplitProcess<T, T, Vector<SosState<T>, S>> for SosDesign<T, S> {
    fn process(&self, state: &mut Vector<SosState<T>, S>, x: T) -> T {
        self.sections
            .iter()
            .zip(state.0.iter_mut())
            .fold(x, |x, (section, state)| section.process(state, x))
    }
}

impl<T: FilterNum, const S: usize> SplitInplace<T, Vector<SosState<T>, S>> for SosDesign<T, S> {}
