//! Four-pole diode ladder.

use crate::clipping::hyperbolic_tangent;
use crate::coefficients::BilinearCoefficients;
use crate::iir::bilinear::direct_form_2_transpose;
use crate::noise::{NoiseSource, DEFAULT_NOISE_SEED};
use crate::sample::{Sample, SampleFilter};

/// Diode ladder lowpass.
///
/// Each inner stage sees the average of its neighbours' previous outputs,
/// and the last stage's output returns through `tanh(Q·y₃)`. Dither noise at
/// machine epsilon lets self-oscillation start from silence.
#[derive(Debug, Clone)]
pub struct DiodeLadder<T: Sample> {
    coefficients: BilinearCoefficients<T>,
    q: T,
    h: [T; 4],
    y: [T; 4],
    noise: NoiseSource<T>,
}

impl<T: Sample> Default for DiodeLadder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> DiodeLadder<T> {
    /// Creates a ladder with zero coefficients, zero resonance, and the
    /// default noise seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_NOISE_SEED)
    }

    /// Creates a ladder whose dither stream starts from `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_noise(NoiseSource::new(seed, T::epsilon()))
    }

    /// Creates a ladder with a caller-supplied noise source.
    pub fn with_noise(noise: NoiseSource<T>) -> Self {
        Self {
            coefficients: BilinearCoefficients::zero(),
            q: T::zero(),
            h: [T::zero(); 4],
            y: [T::zero(); 4],
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

    /// Output of stage `i` from the last sample.
    pub fn stage_output(&self, i: usize) -> Option<T> {
        self.y.get(i).copied()
    }

    /// Dither source.
    pub fn noise_mut(&mut self) -> &mut NoiseSource<T> {
        &mut self.noise
    }

    /// Clears stage state and rewinds the dither stream.
    pub fn reset(&mut self) {
        self.h = [T::zero(); 4];
        self.y = [T::zero(); 4];
        self.noise.reseed();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        let half = T::lit(0.5);
        let c = &self.coefficients;
        let x = value - hyperbolic_tangent(self.q * self.y[3]) + self.noise.sample();
        self.y[0] = direct_form_2_transpose(c, &mut self.h[0], x + self.y[1]);
        self.y[1] = direct_form_2_transpose(c, &mut self.h[1], half * (self.y[0] + self.y[2]));
        self.y[2] = direct_form_2_transpose(c, &mut self.h[2], half * (self.y[1] + self.y[3]));
        self.y[3] = direct_form_2_transpose(c, &mut self.h[3], half * self.y[2]);
        self.y[3]
    }
}

impl<T: Sample> SampleFilter<T> for DiodeLadder<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        DiodeLadder::process(self, input)
    }

    fn reset(&mut self) {
        DiodeLadder::reset(self)
    }
}
