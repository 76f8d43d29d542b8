//! Exponential moving average and variance.
//!
//! Both trackers are the one-pole recursion
//! `μ[n] = μ[n-1] + α (x[n] - μ[n-1])`, i.e. a first-order lowpass with
//! `H(z) = α / (1 - (1 - α) z⁻¹)`. [`cutoff_to_alpha`] picks `α` so that the
//! response is 3 dB down at a given normalized frequency.

use crate::sample::{Sample, SampleFilter};

/// Smoothing factor whose EMA is 3 dB down at `cutoff` radians.
///
/// `α = cos ω - 1 + sqrt(cos² ω - 4 cos ω + 3)`. Grows past 0.8 toward
/// Nyquist, where a one-pole smoother can no longer reach -3 dB.
pub fn cutoff_to_alpha<T: Sample>(cutoff: T) -> T {
    let c = cutoff.cos();
    c - T::one() + (c * c - T::lit(4.0) * c + T::lit(3.0)).sqrt()
}

/// Inverse of [`cutoff_to_alpha`] for `α` in `(0, 1)`.
pub fn alpha_to_cutoff<T: Sample>(alpha: T) -> T {
    let two = T::lit(2.0);
    ((alpha * alpha + two * alpha - two) / (two * alpha - two)).acos()
}

/// Running exponential average of a signal.
#[derive(Debug, Clone, Default)]
pub struct ExponentialMovingAverage<T: Sample> {
    alpha: T,
    average: T,
}

impl<T: Sample> ExponentialMovingAverage<T> {
    /// Creates a tracker starting from zero. Negative `alpha` is clamped to 0.
    pub fn new(alpha: T) -> Self {
        Self {
            alpha: alpha.max(T::zero()),
            average: T::zero(),
        }
    }

    /// Creates a tracker that is 3 dB down at `cutoff` radians.
    pub fn with_cutoff(cutoff: T) -> Self {
        Self::new(cutoff_to_alpha(cutoff))
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Sets the smoothing factor, clamped to be non-negative.
    pub fn set_alpha(&mut self, alpha: T) {
        self.alpha = alpha.max(T::zero());
    }

    /// Current average `μ`.
    pub fn average(&self) -> T {
        self.average
    }
}

impl<T: Sample> SampleFilter<T> for ExponentialMovingAverage<T> {
    /// Folds `input` into the average and returns the new average.
    #[inline]
    fn process(&mut self, input: T) -> T {
        self.average = self.average + self.alpha * (input - self.average);
        self.average
    }

    fn reset(&mut self) {
        self.average = T::zero();
    }
}

/// Running exponential average and variance of a signal.
///
/// Uses the incremental update
/// `δ = x - μ`, `μ += α δ`, `σ² = (1 - α)(σ² + α δ²)`.
#[derive(Debug, Clone, Default)]
pub struct ExponentialMovingVariance<T: Sample> {
    alpha: T,
    average: T,
    variance: T,
}

impl<T: Sample> ExponentialMovingVariance<T> {
    /// Creates a tracker starting from zero. Negative `alpha` is clamped to 0.
    pub fn new(alpha: T) -> Self {
        Self {
            alpha: alpha.max(T::zero()),
            average: T::zero(),
            variance: T::zero(),
        }
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Sets the smoothing factor, clamped to be non-negative.
    pub fn set_alpha(&mut self, alpha: T) {
        self.alpha = alpha.max(T::zero());
    }

    /// Current average `μ`.
    pub fn average(&self) -> T {
        self.average
    }

    /// Current variance `σ²`.
    pub fn variance(&self) -> T {
        self.variance
    }
}

impl<T: Sample> SampleFilter<T> for ExponentialMovingVariance<T> {
    /// Folds `input` into the statistics and returns the new variance.
    #[inline]
    fn process(&mut self, input: T) -> T {
        let delta = input - self.average;
        self.average = self.average + self.alpha * delta;
        self.variance = (T::one() - self.alpha) * (self.variance + self.alpha * delta * delta);
        self.variance
    }

    fn reset(&mut self) {
        self.average = T::zero();
        self.variance = T::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_alpha_for_quarter_nyquist() {
        assert!((cutoff_to_alpha(FRAC_PI_2) - (3.0f64.sqrt() - 1.0)).abs() < 1e-12);
        assert!((alpha_to_cutoff(3.0f64.sqrt() - 1.0) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_places_half_power_point() {
        for cutoff in [0.1f64, 0.5, 1.0, 2.0] {
            let alpha = cutoff_to_alpha(cutoff);
            let z1 = Complex::from_polar(1.0, -cutoff);
            let h = alpha / (Complex::new(1.0, 0.0) - (1.0 - alpha) * z1);
            assert!((h.norm_sqr() - 0.5).abs() < 1e-9, "cutoff {}", cutoff);
            assert!((alpha_to_cutoff(alpha) - cutoff).abs() < 1e-9);
        }
    }

    #[test]
    fn test_average_step_response() {
        let mut ema = ExponentialMovingAverage::new(0.1f64);
        let mut y = 0.0;
        for _ in 0..10 {
            y = ema.process(1.0);
        }
        assert!((y - (1.0 - 0.9f64.powi(10))).abs() < 1e-12);
        assert_eq!(ema.average(), y);

        ema.reset();
        assert_eq!(ema.average(), 0.0);
        assert_eq!(ema.alpha(), 0.1);
    }

    #[test]
    fn test_negative_alpha_clamped() {
        let mut ema = ExponentialMovingAverage::new(-0.5f32);
        assert_eq!(ema.alpha(), 0.0);
        assert_eq!(ema.process(1.0), 0.0);

        let mut emv = ExponentialMovingVariance::new(0.2f32);
        emv.set_alpha(-1.0);
        assert_eq!(emv.alpha(), 0.0);
    }

    #[test]
    fn test_variance_of_constant_decays() {
        let mut emv = ExponentialMovingVariance::new(0.05f64);
        for _ in 0..2000 {
            emv.process(3.0);
        }
        assert!((emv.average() - 3.0).abs() < 1e-9);
        assert!(emv.variance() < 1e-12);
    }

    #[test]
    fn test_variance_of_square_wave() {
        let mut emv = ExponentialMovingVariance::new(0.01f64);
        let mut variance = 0.0;
        for n in 0..5000 {
            variance = emv.process(if n % 2 == 0 { 1.0 } else { -1.0 });
        }
        assert!(emv.average().abs() < 0.01);
        assert!((variance - 1.0).abs() < 1e-3);
    }
}
