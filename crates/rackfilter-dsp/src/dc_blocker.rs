//! DC-blocking first-order highpass.

use crate::coefficients::BilinearCoefficients;
use crate::iir::bilinear::direct_form_1;
use crate::sample::{Sample, SampleFilter};

/// Default pole radius.
pub const DEFAULT_POLE: f64 = 0.999;

/// Unity-gain-at-Nyquist DC blocker,
/// `y[n] = ((1 + p) / 2) (x[n] - x[n-1]) + p·y[n-1]`.
///
/// Realized as a first-order Direct Form 1 stage with
/// `b = [(1+p)/2, -(1+p)/2]` and `a = [-p]`.
#[derive(Debug, Clone)]
pub struct DcBlocker<T: Sample> {
    pole: T,
    coefficients: BilinearCoefficients<T>,
    x1: T,
    y1: T,
}

impl<T: Sample> Default for DcBlocker<T> {
    fn default() -> Self {
        Self::new(T::lit(DEFAULT_POLE))
    }
}

impl<T: Sample> DcBlocker<T> {
    /// Creates a DC blocker.
    ///
    /// # Arguments
    /// * `pole` - Pole radius, typically 0.995 to 0.9999. Higher values = lower cutoff.
    pub fn new(pole: T) -> Self {
        Self {
            pole,
            coefficients: Self::coefficients_for(pole),
            x1: T::zero(),
            y1: T::zero(),
        }
    }

    fn coefficients_for(pole: T) -> BilinearCoefficients<T> {
        let gain = (T::one() + pole) / T::lit(2.0);
        BilinearCoefficients::new([gain, -gain], [-pole])
    }

    /// Pole radius.
    pub fn pole(&self) -> T {
        self.pole
    }

    /// Sets the pole radius.
    pub fn set_pole(&mut self, pole: T) {
        self.pole = pole;
        self.coefficients = Self::coefficients_for(pole);
    }

    /// Sets the pole from a transition width in Hz, `p = 1 - 2w/fs`.
    pub fn set_transition_width(&mut self, width: T, sample_rate: T) {
        self.set_pole(T::one() - T::lit(2.0) * width / sample_rate);
    }

    /// Transition width in Hz at `sample_rate`.
    pub fn transition_width(&self, sample_rate: T) -> T {
        sample_rate * (T::one() - self.pole) / T::lit(2.0)
    }

    /// Last output.
    pub fn value(&self) -> T {
        self.y1
    }

    /// Resets the filter state.
    pub fn reset(&mut self) {
        self.x1 = T::zero();
        self.y1 = T::zero();
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        direct_form_1(&self.coefficients, &mut self.x1, &mut self.y1, input)
    }
}

impl<T: Sample> SampleFilter<T> for DcBlocker<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        DcBlocker::process(self, input)
    }

    fn reset(&mut self) {
        DcBlocker::reset(self)
    }
}
