//! First-order (bilinear) coefficient calculators.

use num_complex::Complex;

use super::{freqz, prewarp};
use crate::sample::Sample;

/// First-order transfer function `(b0 + b1 z⁻¹) / (1 + a0 z⁻¹)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilinearCoefficients<T: Sample> {
    /// Feedforward coefficients.
    pub b: [T; 2],
    /// Feedback coefficient with the leading `1` omitted.
    pub a: [T; 1],
}

impl<T: Sample> Default for BilinearCoefficients<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Sample> BilinearCoefficients<T> {
    /// Creates coefficients from raw arrays.
    pub fn new(b: [T; 2], a: [T; 1]) -> Self {
        Self { b, a }
    }

    /// All-zero coefficients (silent output).
    pub fn zero() -> Self {
        Self {
            b: [T::zero(); 2],
            a: [T::zero(); 1],
        }
    }

    /// Passthrough coefficients.
    pub fn identity() -> Self {
        Self {
            b: [T::one(), T::zero()],
            a: [T::zero()],
        }
    }

    /// First-order lowpass at `cutoff` radians.
    pub fn lowpass(cutoff: T) -> Self {
        let o = prewarp(cutoff);
        let a0 = o + T::one();
        Self {
            b: [o / a0, o / a0],
            a: [(o - T::one()) / a0],
        }
    }

    /// First-order highpass at `cutoff` radians.
    pub fn highpass(cutoff: T) -> Self {
        let o = prewarp(cutoff);
        let a0 = o + T::one();
        Self {
            b: [T::one() / a0, -T::one() / a0],
            a: [(o - T::one()) / a0],
        }
    }

    /// First-order allpass with its 90° phase point at `cutoff` radians.
    pub fn allpass(cutoff: T) -> Self {
        let o = prewarp(cutoff);
        let a0 = o + T::one();
        Self {
            b: [(T::one() - o) / a0, (-T::one() - o) / a0],
            a: [(o - T::one()) / a0],
        }
    }

    /// First-order low shelf with its zero at `zero` and pole at `pole`.
    pub fn lowshelf(zero: T, pole: T) -> Self {
        let oz = prewarp(zero);
        let op = prewarp(pole);
        let a0 = op + T::one();
        Self {
            b: [(oz + T::one()) / a0, (oz - T::one()) / a0],
            a: [(op - T::one()) / a0],
        }
    }

    /// First-order high shelf with its zero at `zero` and pole at `pole`.
    pub fn highshelf(zero: T, pole: T) -> Self {
        let oz = prewarp(zero);
        let op = prewarp(pole);
        let a0 = op + T::one();
        Self {
            b: [(oz + T::one()) / a0, (T::one() - oz) / a0],
            a: [(T::one() - op) / a0],
        }
    }

    /// Complex frequency response at `omega` radians.
    pub fn frequency_response(&self, omega: T) -> Complex<T> {
        freqz(&self.b, &self.a, omega)
    }
}
