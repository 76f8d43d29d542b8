//! Windowless FIR impulse responses (shifted sinc designs).
//!
//! Tap `n` of an `N`-tap response is evaluated at phase
//! `φ = π(n - midpoint/2)`, where `midpoint` is `N` for odd lengths and
//! `N - 1` for even lengths. Cutoffs are normalized to Nyquist, `[0, 1]`.

use crate::sample::Sample;

#[inline]
fn phase<T: Sample>(n: usize, len: usize) -> T {
    let midpoint = len - (1 - len % 2);
    T::PI() * (T::lit(n as f64) - T::lit(midpoint as f64) / T::lit(2.0))
}

#[inline]
fn is_center<T: Sample>(phase: T) -> bool {
    phase.abs() <= T::epsilon()
}

/// Lowpass impulse: `sin(cφ) / φ`.
pub fn lowpass<T: Sample>(n: usize, len: usize, cutoff: T) -> T {
    let phase: T = phase(n, len);
    if is_center(phase) {
        return T::one();
    }
    (cutoff * phase).sin() / phase
}

/// Highpass impulse: `(sin φ - sin cφ) / φ`.
pub fn highpass<T: Sample>(n: usize, len: usize, cutoff: T) -> T {
    let phase: T = phase(n, len);
    if is_center(phase) {
        return T::one();
    }
    (phase.sin() - (cutoff * phase).sin()) / phase
}

/// Bandpass impulse: `(sin hφ - sin lφ) / φ`.
pub fn bandpass<T: Sample>(n: usize, len: usize, low: T, high: T) -> T {
    let phase: T = phase(n, len);
    if is_center(phase) {
        return T::one();
    }
    ((high * phase).sin() - (low * phase).sin()) / phase
}

/// Bandstop impulse: `(sin φ - (sin hφ - sin lφ)) / φ`.
pub fn bandstop<T: Sample>(n: usize, len: usize, low: T, high: T) -> T {
    let phase: T = phase(n, len);
    if is_center(phase) {
        return T::one();
    }
    (phase.sin() - ((high * phase).sin() - (low * phase).sin())) / phase
}

/// An FIR impulse design with its band edges bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FirImpulse<T: Sample> {
    /// Lowpass with the given cutoff.
    Lowpass(T),
    /// Highpass with the given cutoff.
    Highpass(T),
    /// Bandpass between `low` and `high`.
    Bandpass { low: T, high: T },
    /// Bandstop between `low` and `high`.
    Bandstop { low: T, high: T },
}

impl<T: Sample> FirImpulse<T> {
    /// Evaluates tap `n` of an `len`-tap response.
    pub fn value(&self, n: usize, len: usize) -> T {
        match *self {
            FirImpulse::Lowpass(cutoff) => lowpass(n, len, cutoff),
            FirImpulse::Highpass(cutoff) => highpass(n, len, cutoff),
            FirImpulse::Bandpass { low, high } => bandpass(n, len, low, high),
            FirImpulse::Bandstop { low, high } => bandstop(n, len, low, high),
        }
    }
}
