//! Resonant ladder composites.
//!
//! Each ladder chains identical first-order lowpass stages (Direct Form 2
//! Transpose, one shared coefficient set) and closes a global feedback loop
//! scaled by `Q`. The ideal loop is delay-free, so the feedback uses the
//! previous sample's stage outputs. The feedback always passes through a
//! bounded nonlinearity before re-entering the chain, so output stays
//! bounded at any `Q`.

pub mod diode;
pub mod hundred_grit;
pub mod korg35;

pub use diode::DiodeLadder;
pub use hundred_grit::{HundredGritLadder, HUNDRED_GRIT_NOISE_AMPLITUDE};
pub use korg35::Korg35Lowpass;
