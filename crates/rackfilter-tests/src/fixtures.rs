//! Shared reference signals.

use std::f64::consts::PI;

/// Sixteen samples of a sinusoid, the input for the lattice reference
/// sequences.
pub const SINUSOID: [f64; 16] = [
    0.0,
    0.40208519,
    0.73630021,
    0.94623109,
    0.99644245,
    0.87845883,
    0.61219533,
    0.24259603,
    -0.16795238,
    -0.55015119,
    -0.83948697,
    -0.98712114,
    -0.96813374,
    -0.78572974,
    -0.47069811,
    -0.07621478,
];

/// Unit impulse of `len` samples.
pub fn impulse(len: usize) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    if let Some(first) = signal.first_mut() {
        *first = 1.0;
    }
    signal
}

/// Unit step of `len` samples.
pub fn step(len: usize) -> Vec<f64> {
    vec![1.0; len]
}

/// Sum of two detuned sines plus a DC offset, long enough to excite every
/// mode of a low-order section.
pub fn test_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| {
            let t = n as f64;
            0.5 * (0.11 * PI * t).sin() + 0.3 * (0.63 * PI * t).cos() + 0.1
        })
        .collect()
}

/// Biquad designs covering every calculator, as `(name, cutoff, q)`.
pub const BIQUAD_CASES: &[(&str, f64, f64)] = &[
    ("sallen_key_lowpass", 0.2 * PI, 0.707),
    ("sallen_key_lowpass", 0.45 * PI, 8.0),
    ("sallen_key_highpass", 0.1 * PI, 1.2),
    ("sallen_key_bandpass", 0.3 * PI, 2.0),
    ("allpass", 0.25 * PI, 0.9),
    ("bandpass", 0.6 * PI, 4.0),
];
