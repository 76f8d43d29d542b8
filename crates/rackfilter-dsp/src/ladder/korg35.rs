//! Korg35-style lowpass.

use crate::clipping::hyperbolic_tangent;
use crate::coefficients::BilinearCoefficients;
use crate::iir::bilinear::direct_form_2_transpose;
use crate::sample::{Sample, SampleFilter};

/// Two lowpass poles with feedback taken through a one-pole highpass.
///
/// The feedback is `tanh(Q · hp(x₂))`, so it stays within `±1` at any `Q`
/// and is linear for small signals. Resonance is a band-limited peak rather
/// than full self-oscillation.
#[derive(Debug, Clone, Default)]
pub struct Korg35Lowpass<T: Sample> {
    lowpass: BilinearCoefficients<T>,
    highpass: BilinearCoefficients<T>,
    q: T,
    h: [T; 3],
    y: T,
}

impl<T: Sample> Korg35Lowpass<T> {
    /// Creates a filter with zero coefficients and zero resonance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lowpass poles and the feedback highpass to `cutoff` radians.
    pub fn set_cutoff(&mut self, cutoff: T) {
        self.lowpass = BilinearCoefficients::lowpass(cutoff);
        self.highpass = BilinearCoefficients::highpass(cutoff);
    }

    /// Replaces the lowpass and highpass coefficients.
    pub fn set_coefficients(
        &mut self,
        lowpass: BilinearCoefficients<T>,
        highpass: BilinearCoefficients<T>,
    ) {
        self.lowpass = lowpass;
        self.highpass = highpass;
    }

    /// Lowpass coefficients.
    pub fn lowpass(&self) -> &BilinearCoefficients<T> {
        &self.lowpass
    }

    /// Feedback highpass coefficients.
    pub fn highpass(&self) -> &BilinearCoefficients<T> {
        &self.highpass
    }

    /// Sets the resonance.
    pub fn set_q(&mut self, q: T) {
        self.q = q;
    }

    /// Resonance.
    pub fn q(&self) -> T {
        self.q
    }

    /// Feedback value that will be added to the second pole's input.
    pub fn feedback(&self) -> T {
        self.y
    }

    /// Clears all state.
    pub fn reset(&mut self) {
        self.h = [T::zero(); 3];
        self.y = T::zero();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        let x1 = direct_form_2_transpose(&self.lowpass, &mut self.h[0], value);
        let x2 = direct_form_2_transpose(&self.lowpass, &mut self.h[1], self.y + x1);
        let hp = direct_form_2_transpose(&self.highpass, &mut self.h[2], x2);
        self.y = hyperbolic_tangent(self.q * hp);
        x2
    }
}

impl<T: Sample> SampleFilter<T> for Korg35Lowpass<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        Korg35Lowpass::process(self, input)
    }

    fn reset(&mut self) {
        Korg35Lowpass::reset(self)
    }
}
