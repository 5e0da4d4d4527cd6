use miniconf::{Leaf, Tree};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::{
    DesignFloat, FilterNum,
    iir::{
        BESSEL_MAX_ORDER, Bessel, Butterworth, Chebyshev1, Chebyshev2, Design, DesignError,
        IirFilter, Response, SosDesign, SosGain,
    },
};

/// Analog prototype family
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
    strum::IntoStaticStr,
)]
pub enum Kind {
    /// Maximally flat magnitude
    #[default]
    Butterworth,
    /// Equiripple passband
    Chebyshev1,
    /// Equiripple stopband
    Chebyshev2,
    /// Maximally flat group delay
    Bessel,
}

/// Runtime filter configuration
///
/// ```
/// use embedded_iir::iir::{FilterConfig, Kind, SosDesign};
/// let mut cfg = FilterConfig::<f64>::default();
/// *cfg.kind = Kind::Chebyshev2;
/// *cfg.ripple = 40.0;
/// *cfg.sample_rate = 48e3;
/// *cfg.frequency = 1e3;
/// let sos: SosDesign<f32, 3> = cfg.sos::<f32, 6, 3>()?;
/// assert_eq!(sos.order(), 6);
/// # Ok::<(), embedded_iir::iir::DesignError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Tree)]
pub struct FilterConfig<T> {
    /// Prototype family
    pub kind: Leaf<Kind>,
    /// Lowpass or highpass
    pub response: Leaf<Response>,
    /// Cutoff frequency
    ///
    /// In the units of `sample_rate`.
    pub frequency: Leaf<T>,
    /// Sample rate
    pub sample_rate: Leaf<T>,
    /// Passband ripple (Chebyshev I) or stopband attenuation (Chebyshev II) in dB
    pub ripple: Leaf<T>,
    /// Gain placement in SOS realizations
    pub gain: Leaf<SosGain>,
}

impl<F: DesignFloat> Default for FilterConfig<F> {
    fn default() -> Self {
        Self {
            kind: Leaf(Kind::default()),
            response: Leaf(Response::default()),
            frequency: Leaf(F::cast(0.1)),
            sample_rate: Leaf(F::one()),
            ripple: Leaf(F::one()),
            gain: Leaf(SosGain::default()),
        }
    }
}

impl<F: DesignFloat> FilterConfig<F> {
    /// Design a filter of order `N`
    ///
    /// `N` must be within `1..=BESSEL_MAX_ORDER`.
    pub fn design<const N: usize>(&self) -> Result<Design<F, N>, DesignError> {
        const { assert!(N > 0 && N <= BESSEL_MAX_ORDER, "order out of range") };
        let ripple = self.ripple.to_f64().unwrap_or(f64::NAN);
        let filter = IirFilter::new(*self.sample_rate);
        let (r, f) = (*self.response, *self.frequency);
        match *self.kind {
            Kind::Butterworth => filter.design(r, &Butterworth::<N>::new(), f),
            Kind::Chebyshev1 => filter.design(r, &Chebyshev1::<N>::new(ripple), f),
            Kind::Chebyshev2 => filter.design(r, &Chebyshev2::<N>::new(ripple), f),
            Kind::Bessel => filter.design(r, &Bessel::<N>::new(), f),
        }
    }

    /// Design second-order sections with the configured gain placement
    pub fn sos<T, const N: usize, const S: usize>(&self) -> Result<SosDesign<T, S>, DesignError>
    where
        T: FilterNum + AsPrimitive<F>,
        F: AsPrimitive<T>,
    {
        Ok(self.design::<N>()?.sos(*self.gain))
    }
}
