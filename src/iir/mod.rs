//! IIR filter design and realization

mod zpk;
pub use zpk::*;
mod bessel;
pub use bessel::BESSEL_MAX_ORDER;
mod prototype;
pub use prototype::*;
mod pairing;
pub use pairing::*;
mod sos;
pub use sos::*;
mod poly;
pub use poly::*;
mod design;
pub use design::*;
mod repr;
pub use repr::*;
mod dump;
pub use dump::*;
