use serde::{Deserialize, Serialize};

use super::{SosSection, Zpk};
use crate::{
    Complex, DesignFloat,
    vector::{argmin_by, swap_pop_front},
};

/// Placement of the overall gain in a cascade of sections
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
pub enum SosGain {
    /// All gain in the first section
    #[default]
    FirstSection,
    /// Equal gain in every section
    ///
    /// A negative overall sign is carried by the first section.
    Distribute,
}

/// Working set of roots
///
/// Removal moves the first root into the freed slot and shifts the rest
/// down by one.
struct Roots<'a, F> {
    roots: &'a mut [Complex<F>],
    len: usize,
}

impl<'a, F: DesignFloat> Roots<'a, F> {
    fn new(roots: &'a mut [Complex<F>]) -> Self {
        let len = roots.len();
        Self { roots, len }
    }

    fn count_real(&self) -> usize {
        self.roots[..self.len].iter().filter(|r| r.is_real()).count()
    }

    /// Index of the first minimum under the strict order `less`
    fn argmin(&self, less: impl FnMut(&Complex<F>, &Complex<F>) -> bool) -> usize {
        argmin_by(&self.roots[..self.len], less)
    }

    fn nearest(&self, target: Complex<F>) -> usize {
        self.argmin(|a, b| (*a - target).norm_sqr() < (*b - target).norm_sqr())
    }

    /// Nearest with preference for real (`real == true`) or complex roots
    fn nearest_preferring(&self, target: Complex<F>, real: bool) -> usize {
        self.argmin(|a, b| {
            let (ra, rb) = (a.is_real() == real, b.is_real() == real);
            (ra && !rb) || (ra == rb && (*a - target).norm_sqr() < (*b - target).norm_sqr())
        })
    }

    fn take(&mut self, i: usize) -> Complex<F> {
        let r = swap_pop_front(&mut self.roots[..self.len], i);
        self.len -= 1;
        r
    }
}

/// Distance from the unit circle
fn unit_distance<F: DesignFloat>(p: &Complex<F>) -> F {
    (F::one() - p.norm_sqr()).abs()
}

/// Pair poles and zeros of a discrete ZPK into second-order sections
///
/// Missing zeros are at the origin. Odd orders are padded with a pole and
/// a zero at the origin. The pole closest to the unit circle is paired
/// first with its conjugate (or the next real pole) and the closest zeros.
/// Sections are returned in processing order: the first pairs end up last.
/// Ties resolve to the root encountered first.
///
/// `S` must be `(N + 1)/2`.
pub fn zpk_to_sos<F: DesignFloat, const N: usize, const S: usize>(
    zpk: &Zpk<F, N>,
    gain: SosGain,
) -> [SosSection<F>; S] {
    const { assert!((N + 1) / 2 == S, "section count must be (N + 1)/2") };
    let mut zeros = [[Complex::default(); 2]; S];
    let mut poles = [[Complex::default(); 2]; S];
    zeros.as_flattened_mut()[..N].copy_from_slice(&zpk.padded_zeros().0);
    poles.as_flattened_mut()[..N].copy_from_slice(&zpk.poles().0);
    let mut z = Roots::new(zeros.as_flattened_mut());
    let mut p = Roots::new(poles.as_flattened_mut());

    let k = zpk.gain();
    let per_section = match gain {
        SosGain::FirstSection => F::one(),
        SosGain::Distribute => k.abs().powf(F::cast(S as f64).recip()),
    };
    let mut sections = [SosSection::new([F::zero(); 5]); S];
    for stage in (0..S).rev() {
        let p1 = p.take(p.argmin(|a, b| unit_distance(a) < unit_distance(b)));
        let (z1, z2, p2);
        if !p1.is_real() && z.count_real() == 1 && p.count_real() == 1 {
            // Keep the last real pole and zero together
            z1 = z.take(z.nearest_preferring(p1, false));
            z2 = z.take(z.nearest(z1.conj()));
            p2 = p.take(p.nearest(p1.conj()));
        } else {
            p2 = if p1.is_real() {
                p.take(p.argmin(|a, b| {
                    (a.is_real() && !b.is_real())
                        || (a.is_real() == b.is_real() && unit_distance(a) < unit_distance(b))
                }))
            } else {
                p.take(p.nearest(p1.conj()))
            };
            z1 = z.take(z.nearest(p1));
            z2 = if z1.is_real() {
                z.take(z.nearest_preferring(p1, true))
            } else {
                z.take(z.nearest(z1.conj()))
            };
        }
        let g = match gain {
            SosGain::FirstSection if stage == 0 => k,
            SosGain::FirstSection => F::one(),
            SosGain::Distribute if stage == 0 && k < F::zero() => -per_section,
            SosGain::Distribute => per_section,
        };
        log::trace!(
            "section {stage}: |p| = {:?}, |z| = {:?}",
            p1.abs(),
            z1.abs()
        );
        sections[stage] = SosSection::from_roots([z1, z2], [p1, p2], g);
    }
    sections
}
