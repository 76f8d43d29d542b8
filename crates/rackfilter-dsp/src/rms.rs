//! Windowed RMS level meter.

use crate::moving_average::{MovingAverageFir, DEFAULT_WINDOW};
use crate::sample::{Sample, SampleFilter};

/// Mean-square floor, -60 dB.
pub const MIN_MEAN_SQUARE: f64 = 1e-6;

/// RMS level in decibels over a sliding window.
///
/// Squares each input into a [`MovingAverageFir`] and reports
/// `10 log10(max(mean square, 1e-6))`, which equals `20 log10(rms)` without
/// taking the square root. Silence reads -60 dB.
#[derive(Debug, Clone)]
pub struct RootMeanSquare<T: Sample> {
    mean_square: MovingAverageFir<T>,
}

impl<T: Sample> Default for RootMeanSquare<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl<T: Sample> RootMeanSquare<T> {
    /// Creates a meter over `samples` samples (at least one).
    pub fn new(samples: usize) -> Self {
        Self {
            mean_square: MovingAverageFir::new(samples),
        }
    }

    /// Window length in samples.
    pub fn len(&self) -> usize {
        self.mean_square.len()
    }

    /// Always false; the window holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.mean_square.is_empty()
    }

    /// Sizes the window to `time` seconds at `sample_rate`.
    pub fn set_time(&mut self, time: T, sample_rate: T) {
        self.mean_square.set_time(time, sample_rate);
    }

    /// Rebuilds the running mean square from the stored window.
    pub fn recalculate(&mut self) {
        self.mean_square.recalculate();
    }

    /// Current level in dB without consuming a sample.
    pub fn level_db(&self) -> T {
        Self::to_db(self.mean_square.average())
    }

    fn to_db(mean_square: T) -> T {
        T::lit(10.0) * mean_square.max(T::lit(MIN_MEAN_SQUARE)).log10()
    }
}

impl<T: Sample> SampleFilter<T> for RootMeanSquare<T> {
    /// Folds `input` into the window and returns the level in dB.
    #[inline]
    fn process(&mut self, input: T) -> T {
        Self::to_db(self.mean_square.process(input * input))
    }

    fn reset(&mut self) {
        self.mean_square.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_reads_floor() {
        let mut meter = RootMeanSquare::<f64>::new(8);
        assert!((meter.process(0.0) + 60.0).abs() < 1e-9);
        assert!((meter.level_db() + 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_level_fills_window() {
        let mut meter = RootMeanSquare::<f64>::new(4);
        let expected = [-12.041199826559248, -9.030899869919436, -7.269987279362623];
        for want in expected {
            assert!((meter.process(0.5) - want).abs() < 1e-9);
        }
        for _ in 0..3 {
            assert!((meter.process(-0.5) - 20.0 * 0.5f64.log10()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_scale_sine_reads_minus_three_db() {
        let mut meter = RootMeanSquare::<f32>::new(100);
        let mut level = 0.0;
        for n in 0..400 {
            level = meter.process((2.0 * std::f32::consts::PI * n as f32 / 20.0).sin());
        }
        assert!((level + 3.0103).abs() < 1e-3, "level {}", level);
    }

    #[test]
    fn test_set_time_and_reset() {
        let mut meter = RootMeanSquare::<f64>::default();
        meter.set_time(0.002, 48000.0);
        assert_eq!(meter.len(), 97);
        meter.process(1.0);
        meter.reset();
        assert!((meter.level_db() + 60.0).abs() < 1e-9);
    }
}
