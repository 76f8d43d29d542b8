//! Direct-form FIR convolution.

use log::debug;

use crate::coefficients::fir::FirImpulse;
use crate::delay_line::DelayLine;
use crate::error::{FilterError, FilterResult};
use crate::sample::{Sample, SampleFilter};
use crate::window::Window;

/// N-tap direct-form FIR filter over a circular delay line.
#[derive(Debug, Clone)]
pub struct FirDirectForm<T: Sample> {
    delay: DelayLine<T>,
    coefficients: Vec<T>,
}

impl<T: Sample> FirDirectForm<T> {
    /// Creates a filter with `taps` zeroed coefficients.
    pub fn new(taps: usize) -> FilterResult<Self> {
        if taps < 1 {
            return Err(FilterError::InvalidOrder { order: taps });
        }
        Ok(Self {
            delay: DelayLine::new(taps),
            coefficients: vec![T::zero(); taps],
        })
    }

    /// Creates a windowed design with `taps` taps.
    pub fn design(taps: usize, impulse: FirImpulse<T>, window: Window) -> FilterResult<Self> {
        let mut filter = Self::new(taps)?;
        filter.set_coefficients(|n, len| impulse.value(n, len), window);
        Ok(filter)
    }

    /// Changes the tap count. Clears the delay line; coefficients are
    /// truncated or zero-extended.
    pub fn resize(&mut self, taps: usize) -> FilterResult<()> {
        if taps < 1 {
            return Err(FilterError::InvalidOrder { order: taps });
        }
        debug!("resizing FIR from {} to {} taps", self.len(), taps);
        self.delay.resize(taps);
        self.coefficients.resize(taps, T::zero());
        Ok(())
    }

    /// Tap count.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false; a filter has at least one tap.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficient of tap `i`, if it exists.
    pub fn coefficient(&self, i: usize) -> Option<T> {
        self.coefficients.get(i).copied()
    }

    /// All coefficients.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Sets tap `i`. Out-of-range indices are ignored and reported as `false`.
    pub fn set_coefficient(&mut self, i: usize, value: T) -> bool {
        match self.coefficients.get_mut(i) {
            Some(c) => {
                *c = value;
                true
            }
            None => false,
        }
    }

    /// Zeroes every coefficient.
    pub fn clear_coefficients(&mut self) {
        self.coefficients.iter_mut().for_each(|c| *c = T::zero());
    }

    /// Fills coefficients as `impulse(n, N) * window(n, N)` using the
    /// symmetric window form.
    pub fn set_coefficients<F>(&mut self, impulse: F, window: Window)
    where
        F: Fn(usize, usize) -> T,
    {
        let len = self.coefficients.len();
        for (n, c) in self.coefficients.iter_mut().enumerate() {
            *c = impulse(n, len) * window.value(n, len, true);
        }
    }

    /// Sample pushed `age` samples ago.
    pub fn delay(&self, age: usize) -> T {
        self.delay.get(age)
    }

    /// Pushes a sample into the delay line without computing output.
    pub fn process_delay(&mut self, value: T) {
        self.delay.push(value);
    }

    /// Clears the delay line.
    pub fn reset(&mut self) {
        self.delay.clear();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        self.delay.push(value);
        self.coefficients
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, &c)| acc + c * self.delay.get(i))
    }
}

impl<T: Sample> SampleFilter<T> for FirDirectForm<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        FirDirectForm::process(self, input)
    }

    fn reset(&mut self) {
        FirDirectForm::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::fir::lowpass;

    #[test]
    fn test_zero_taps_rejected() {
        assert!(FirDirectForm::<f64>::new(0).is_err());
        let mut fir = FirDirectForm::<f64>::new(4).unwrap();
        assert!(fir.resize(0).is_err());
        assert_eq!(fir.len(), 4);
    }

    #[test]
    fn test_impulse_response_is_coefficients() {
        let mut fir = FirDirectForm::design(15, FirImpulse::Lowpass(0.5), Window::Hamming).unwrap();
        let coefficients = fir.coefficients().to_vec();
        let mut response = vec![fir.process(1.0)];
        for _ in 1..15 {
            response.push(fir.process(0.0));
        }
        assert_eq!(response, coefficients);
    }

    #[test]
    fn test_boxcar_design_matches_impulse() {
        let fir = FirDirectForm::design(16, FirImpulse::Lowpass(0.5), Window::Boxcar).unwrap();
        for n in 0..16 {
            assert_eq!(fir.coefficient(n), Some(lowpass(n, 16, 0.5)));
        }
        assert_eq!(fir.coefficient(16), None);
    }

    #[test]
    fn test_zero_cutoff_is_silent() {
        let mut fir = FirDirectForm::design(15, FirImpulse::Lowpass(0.0), Window::Hann).unwrap();
        assert!((0..30).all(|n| fir.process((n as f64).sin()) == 0.0));
    }

    #[test]
    fn test_coefficient_editing() {
        let mut fir = FirDirectForm::<f32>::new(3).unwrap();
        assert!(fir.set_coefficient(2, 1.0));
        assert!(!fir.set_coefficient(3, 1.0));
        // pure two-sample delay
        assert_eq!(fir.process(1.0), 0.0);
        assert_eq!(fir.process(2.0), 0.0);
        assert_eq!(fir.process(3.0), 1.0);

        fir.clear_coefficients();
        assert!(fir.coefficients().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_process_delay_and_reset() {
        let mut fir = FirDirectForm::<f64>::new(4).unwrap();
        fir.process_delay(1.0);
        fir.process_delay(2.0);
        assert_eq!(fir.delay(0), 2.0);
        assert_eq!(fir.delay(1), 1.0);
        fir.reset();
        assert_eq!(fir.delay(0), 0.0);
    }

    #[test]
    fn test_lowpass_dc_gain_positive() {
        let mut fir = FirDirectForm::design(31, FirImpulse::Lowpass(0.25), Window::Blackman).unwrap();
        let mut y = 0.0;
        for _ in 0..31 {
            y = fir.process(1.0);
        }
        let sum: f64 = fir.coefficients().iter().sum();
        assert!((y - sum).abs() < 1e-12);
        assert!(sum > 0.0);
    }
}
