//! Closed-form coefficient calculators.
//!
//! IIR calculators take an angular cutoff `Ω ∈ [0, π)` normalized to the
//! Nyquist rate, pre-warp it with `tan(Ω/2)`, build the analog prototype and
//! normalize by the prototype's `a0`, which is dropped from storage. Inputs
//! are not validated here: `Ω = π` diverges, `Q <= 0` produces unstable or NaN
//! coefficients. Validation lives in `rackfilter_spec::validate_design`.

pub mod bilinear;
pub mod biquadratic;
pub mod fir;
pub mod freqz;

pub use bilinear::BilinearCoefficients;
pub use biquadratic::BiquadCoefficients;
pub use freqz::freqz;

use crate::sample::Sample;

/// Bilinear-transform frequency pre-warp, `tan(Ω/2)`.
#[inline]
pub fn prewarp<T: Sample>(omega: T) -> T {
    (omega / T::lit(2.0)).tan()
}
