//! Four-pole transistor ladder ("HundredGrit").

use crate::clipping::cubic_clip;
use crate::coefficients::BilinearCoefficients;
use crate::iir::bilinear::direct_form_2_transpose;
use crate::noise::{NoiseSource, DEFAULT_NOISE_SEED};
use crate::sample::{Sample, SampleFilter};

/// Default peak dither level injected at the loop input.
pub const HUNDRED_GRIT_NOISE_AMPLITUDE: f64 = 1e-6;

/// Transistor ladder lowpass: four identical poles in series with the last
/// output fed back through a cubic soft clip.
///
/// Self-oscillates from dither alone once `Q` passes roughly 2, below the
/// analog threshold of 4 because of the unit-delay feedback.
#[derive(Debug, Clone)]
pub struct HundredGritLadder<T: Sample> {
    coefficients: BilinearCoefficients<T>,
    q: T,
    h: [T; 4],
    y: T,
    noise: NoiseSource<T>,
}

impl<T: Sample> Default for HundredGritLadder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> HundredGritLadder<T> {
    /// Creates a ladder with zero coefficients, zero resonance, and the
    /// default noise seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_NOISE_SEED)
    }

    /// Creates a ladder whose dither stream starts from `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_noise(NoiseSource::new(
            seed,
            T::lit(HUNDRED_GRIT_NOISE_AMPLITUDE),
        ))
    }

    /// Creates a ladder with a caller-supplied noise source.
    pub fn with_noise(noise: NoiseSource<T>) -> Self {
        Self {
            coefficients: BilinearCoefficients::zero(),
            q: T::zero(),
            h: [T::zero(); 4],
            y: T::zero(),
            noise,
        }
    }

    /// Sets every pole to a first-order lowpass at `cutoff` radians.
    pub fn set_cutoff(&mut self, cutoff: T) {
        self.coefficients = BilinearCoefficients::lowpass(cutoff);
    }

    /// Replaces the shared stage coefficients.
    pub fn set_coefficients(&mut self, coefficients: BilinearCoefficients<T>) {
        self.coefficients = coefficients;
    }

    /// Shared stage coefficients.
    pub fn coefficients(&self) -> &BilinearCoefficients<T> {
        &self.coefficients
    }

    /// Sets the resonance.
    pub fn set_q(&mut self, q: T) {
        self.q = q;
    }

    /// Resonance.
    pub fn q(&self) -> T {
        self.q
    }

    /// State register of pole `i` (0-3).
    pub fn pole(&self, i: usize) -> Option<T> {
        self.h.get(i).copied()
    }

    /// All four pole registers.
    pub fn poles(&self) -> [T; 4] {
        self.h
    }

    /// Last output, which is also the feedback tap.
    pub fn output(&self) -> T {
        self.y
    }

    /// Dither source.
    pub fn noise_mut(&mut self) -> &mut NoiseSource<T> {
        &mut self.noise
    }

    /// Clears pole state and rewinds the dither stream.
    pub fn reset(&mut self) {
        self.h = [T::zero(); 4];
        self.y = T::zero();
        self.noise.reseed();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        let c = &self.coefficients;
        let x0 = value - cubic_clip(self.q * self.y) + self.noise.sample();
        let x1 = direct_form_2_transpose(c, &mut self.h[0], x0);
        let x2 = direct_form_2_transpose(c, &mut self.h[1], x1);
        let x3 = direct_form_2_transpose(c, &mut self.h[2], x2);
        self.y = direct_form_2_transpose(c, &mut self.h[3], x3);
        self.y
    }
}

impl<T: Sample> SampleFilter<T> for HundredGritLadder<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        HundredGritLadder::process(self, input)
    }

    fn reset(&mut self) {
        HundredGritLadder::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tail_peak(ladder: &mut HundredGritLadder<f64>, samples: usize) -> f64 {
        let mut peak: f64 = 0.0;
        for n in 0..samples {
            let y = ladder.process(0.0);
            assert!(y.is_finite());
            if n >= samples - 2000 {
                peak = peak.max(y.abs());
            }
        }
        peak
    }

    #[test]
    fn test_unity_dc_gain() {
        let mut ladder = HundredGritLadder::<f64>::new();
        ladder.set_cutoff(0.2 * PI);
        let mut y = 0.0;
        for _ in 0..2000 {
            y = ladder.process(1.0);
        }
        assert!((y - 1.0).abs() < 1e-4);
        assert_eq!(ladder.output(), y);
    }

    #[test]
    fn test_self_oscillates_from_silence() {
        let mut ladder = HundredGritLadder::<f64>::with_seed(5);
        ladder.set_cutoff(0.2 * PI);
        ladder.set_q(4.0);
        let peak = tail_peak(&mut ladder, 20000);
        assert!(peak > 0.1, "peak {}", peak);
        assert!(peak < 1.5, "peak {}", peak);
    }

    #[test]
    fn test_decays_below_threshold() {
        let mut ladder = HundredGritLadder::<f64>::with_seed(5);
        ladder.set_cutoff(0.2 * PI);
        ladder.set_q(1.0);
        assert!(tail_peak(&mut ladder, 20000) < 1e-3);
    }

    #[test]
    fn test_poles_exposed() {
        let mut ladder = HundredGritLadder::<f64>::with_noise(NoiseSource::silent());
        ladder.set_cutoff(0.3 * PI);
        ladder.process(1.0);
        let poles = ladder.poles();
        assert!(poles.iter().all(|p| *p != 0.0));
        assert_eq!(ladder.pole(0), Some(poles[0]));
        assert_eq!(ladder.pole(4), None);

        ladder.reset();
        assert_eq!(ladder.poles(), [0.0; 4]);
        assert_eq!(ladder.output(), 0.0);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = HundredGritLadder::<f32>::with_seed(42);
        let mut b = HundredGritLadder::<f32>::with_seed(42);
        for ladder in [&mut a, &mut b] {
            ladder.set_cutoff(0.5);
            ladder.set_q(3.0);
        }
        for _ in 0..500 {
            assert_eq!(a.process(0.0), b.process(0.0));
        }
    }
}
