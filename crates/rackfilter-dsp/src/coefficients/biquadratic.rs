//! Second-order (biquadratic) coefficient calculators.

use num_complex::Complex;

use super::{freqz, prewarp};
use crate::sample::Sample;

/// Second-order transfer function
/// `(b0 + b1 z⁻¹ + b2 z⁻²) / (1 + a0 z⁻¹ + a1 z⁻²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients<T: Sample> {
    /// Feedforward coefficients.
    pub b: [T; 3],
    /// Feedback coefficients with the leading `1` omitted.
    pub a: [T; 2],
}

impl<T: Sample> Default for BiquadCoefficients<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Sample> BiquadCoefficients<T> {
    /// Creates coefficients from raw arrays.
    pub fn new(b: [T; 3], a: [T; 2]) -> Self {
        Self { b, a }
    }

    /// All-zero coefficients (silent output).
    pub fn zero() -> Self {
        Self {
            b: [T::zero(); 3],
            a: [T::zero(); 2],
        }
    }

    /// Passthrough coefficients.
    pub fn identity() -> Self {
        Self {
            b: [T::one(), T::zero(), T::zero()],
            a: [T::zero(); 2],
        }
    }

    /// Sallen-Key lowpass.
    ///
    /// # Arguments
    /// * `cutoff` - Cutoff in radians, `[0, π)`
    /// * `q` - Quality factor
    pub fn sallen_key_lowpass(cutoff: T, q: T) -> Self {
        let o = prewarp(cutoff);
        let o2q = o * o * q;
        let a0 = o2q + o + q;
        let two = T::lit(2.0);
        Self {
            b: [o2q / a0, two * o2q / a0, o2q / a0],
            a: [two * (o2q - q) / a0, (o2q - o + q) / a0],
        }
    }

    /// Sallen-Key highpass.
    pub fn sallen_key_highpass(cutoff: T, q: T) -> Self {
        let o = prewarp(cutoff);
        let o2q = o * o * q;
        let a0 = o2q + o + q;
        let two = T::lit(2.0);
        Self {
            b: [q / a0, -two * q / a0, q / a0],
            a: [two * (o2q - q) / a0, (o2q - o + q) / a0],
        }
    }

    /// Sallen-Key bandpass.
    pub fn sallen_key_bandpass(cutoff: T, q: T) -> Self {
        let o = prewarp(cutoff);
        let o2q = o * o * q;
        let a0 = o2q + o + q;
        let two = T::lit(2.0);
        Self {
            b: [q * o / a0, T::zero(), -q * o / a0],
            a: [two * (o2q - q) / a0, (o2q - o + q) / a0],
        }
    }

    /// Bainter notch with independent zero and pole frequencies and a shared Q.
    pub fn bainter_bandstop(zero: T, pole: T, q: T) -> Self {
        let oz = prewarp(zero);
        let op = prewarp(pole);
        let op2 = op * op;
        let oz2 = oz * oz;
        let a0 = q * op2 + q + op;
        let two = T::lit(2.0);
        Self {
            b: [
                q * (oz2 + T::one()) / a0,
                q * (two * oz2 - two) / a0,
                q * (oz2 + T::one()) / a0,
            ],
            a: [(two * q * op2 - two * q) / a0, (q * op2 + q - op) / a0],
        }
    }

    /// General Bainter section with independent zero and pole quality.
    pub fn bainter(zero: T, pole: T, zero_q: T, pole_q: T) -> Self {
        let oz = prewarp(zero);
        let op = prewarp(pole);
        let op2 = op * op;
        let oz2 = oz * oz;
        let (qz, qp) = (zero_q, pole_q);
        let a0 = qz * (qp * op2 + qp + op);
        let two = T::lit(2.0);
        Self {
            b: [
                qp * (qz * oz2 + qz + oz) / a0,
                qp * (two * qz * oz2 - two * qz) / a0,
                qp * (qz * oz2 + qz - oz) / a0,
            ],
            a: [
                qz * (two * qp * op2 - two * qp) / a0,
                qz * (qp * op2 + qp - op) / a0,
            ],
        }
    }

    /// Second-order allpass.
    pub fn allpass(cutoff: T, q: T) -> Self {
        let o = prewarp(cutoff);
        let o2q = o * o * q;
        let a0 = o2q + q + o;
        let two = T::lit(2.0);
        Self {
            b: [
                (o2q + q - o) / a0,
                (two * o2q - two * q) / a0,
                (o2q + q + o) / a0,
            ],
            a: [(two * o2q - two * q) / a0, (o2q + q - o) / a0],
        }
    }

    /// Constant-peak bandpass.
    pub fn bandpass(cutoff: T, q: T) -> Self {
        let o = prewarp(cutoff);
        let o2q = o * o * q;
        let a0 = o2q + q + o;
        let two = T::lit(2.0);
        Self {
            b: [o / a0, T::zero(), -o / a0],
            a: [(two * o2q - two * q) / a0, (o2q + q - o) / a0],
        }
    }

    /// Complex frequency response at `omega` radians.
    pub fn frequency_response(&self, omega: T) -> Complex<T> {
        freqz(&self.b, &self.a, omega)
    }
}
