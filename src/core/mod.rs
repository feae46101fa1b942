//! Game constants and the injectable dice source.

#![allow(unused_imports)]

pub mod constants;
pub mod dice;

pub use constants::*;
pub use dice::*;
