#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

mod num;
pub use num::*;
mod vector;
pub use vector::*;
mod complex;
pub use complex::*;
mod convolve;
pub use convolve::*;
mod process;
pub use process::*;
pub mod iir;

#[cfg(test)]
pub mod testing;
