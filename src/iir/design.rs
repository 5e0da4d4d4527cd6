use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::{PolyDesign, Prototype, SosDesign, SosGain, Zpk, warp_frequency};
use crate::{DesignFloat, FilterNum};

/// Invalid runtime design parameters
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, thiserror::Error,
)]
#[non_exhaustive]
pub enum DesignError {
    /// The sample rate is not finite and positive
    #[error("Sample rate must be finite and positive")]
    SampleRate,
    /// The frequency is not strictly between zero and Nyquist
    #[error("Frequency must be between zero and Nyquist")]
    Frequency,
    /// The ripple or attenuation is not finite and positive
    #[error("Ripple must be finite and positive")]
    Ripple,
}

/// Frequency response type
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
    strum::IntoStaticStr,
)]
pub enum Response {
    /// Pass below the cutoff
    #[default]
    Lowpass,
    /// Pass above the cutoff
    Highpass,
}

/// Discrete IIR filter designer at a given sample rate
///
/// ```
/// use embedded_iir::iir::{Chebyshev1, IirFilter, PolyDesign};
/// let poly: PolyDesign<f64, 4> = IirFilter::new(48e3)
///     .highpass(&Chebyshev1::<4>::new(1.0), 100.0)?
///     .poly();
/// assert_eq!(poly.order(), 4);
/// # Ok::<(), embedded_iir::iir::DesignError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IirFilter<F> {
    fs: F,
}

impl<F: DesignFloat> IirFilter<F> {
    /// Designer for sample rate `fs`
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Sample rate
    pub fn sample_rate(&self) -> F {
        self.fs
    }

    /// Lowpass with cutoff `f`
    pub fn lowpass<P: Prototype<N>, const N: usize>(
        &self,
        proto: &P,
        f: F,
    ) -> Result<Design<F, N>, DesignError> {
        self.design(Response::Lowpass, proto, f)
    }

    /// Highpass with cutoff `f`
    pub fn highpass<P: Prototype<N>, const N: usize>(
        &self,
        proto: &P,
        f: F,
    ) -> Result<Design<F, N>, DesignError> {
        self.design(Response::Highpass, proto, f)
    }

    /// Design a discrete filter from an analog prototype
    ///
    /// The cutoff `f` is in the units of the sample rate.
    pub fn design<P: Prototype<N>, const N: usize>(
        &self,
        response: Response,
        proto: &P,
        f: F,
    ) -> Result<Design<F, N>, DesignError> {
        if !(self.fs.is_finite() && self.fs > F::zero()) {
            return Err(DesignError::SampleRate);
        }
        if !(f.is_finite() && f > F::zero() && f + f < self.fs) {
            return Err(DesignError::Frequency);
        }
        proto.validate()?;
        let two = F::cast(2.0);
        let w = warp_frequency(two * f / self.fs, two);
        let zpk = proto.zpk();
        let zpk = match response {
            Response::Lowpass => zpk.lowpass(w),
            Response::Highpass => zpk.highpass(w),
        }
        .bilinear(two);
        log::debug!(
            "{} {} order {N}: gain {:?}",
            proto.kind().as_ref(),
            response.as_ref(),
            zpk.gain()
        );
        Ok(Design { zpk })
    }
}

/// Discrete filter design in zero-pole-gain form
#[derive(Clone, Debug, PartialEq)]
pub struct Design<F, const N: usize> {
    zpk: Zpk<F, N>,
}

impl<F: DesignFloat, const N: usize> Design<F, N> {
    /// Discrete zeros, poles and gain
    pub fn zpk(&self) -> &Zpk<F, N> {
        &self.zpk
    }

    /// Transfer function polynomial realization
    pub fn poly<T>(&self) -> PolyDesign<T, N>
    where
        T: FilterNum + AsPrimitive<F>,
        F: AsPrimitive<T>,
    {
        PolyDesign::new(&self.zpk)
    }

    /// Second-order section realization with `S = (N + 1)/2` sections
    pub fn sos<T, const S: usize>(&self, gain: SosGain) -> SosDesign<T, S>
    where
        T: FilterNum + AsPrimitive<F>,
        F: AsPrimitive<T>,
    {
        let sos = SosDesign::new(&self.zpk, gain);
        log::debug!("{S} sections, gain {}", gain.as_ref());
        sos
    }
}
