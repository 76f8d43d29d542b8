//! Boxcar moving averages over the last `N` samples.
//!
//! Both forms compute `(x[n] + ... + x[n-N+1]) / N` with a running sum:
//! the newest sample is added and the one falling out of the window is
//! subtracted. [`MovingAverageIir`] keeps the raw sum in a feedback register;
//! [`MovingAverageFir`] stores pre-divided samples and can rebuild its sum
//! from history to shed accumulated rounding error.

use crate::delay_line::DelayLine;
use crate::sample::{Sample, SampleFilter};

/// Window length used by `Default`.
pub const DEFAULT_WINDOW: usize = 64;

/// Window length for `time` seconds at `sample_rate`, plus the one sample
/// the current input occupies.
fn window_for_time<T: Sample>(time: T, sample_rate: T) -> usize {
    (time * sample_rate + T::one())
        .max(T::one())
        .to_usize()
        .unwrap_or(1)
}

/// Recursive moving average: `s[n] = s[n-1] + x[n] - x[n-N]`, `y[n] = s[n] / N`.
#[derive(Debug, Clone)]
pub struct MovingAverageIir<T: Sample> {
    history: DelayLine<T>,
    feedback: T,
}

impl<T: Sample> Default for MovingAverageIir<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl<T: Sample> MovingAverageIir<T> {
    /// Creates an average over `samples` samples (at least one).
    pub fn new(samples: usize) -> Self {
        Self {
            history: DelayLine::new(samples),
            feedback: T::zero(),
        }
    }

    /// Window length in samples.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the window holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Sizes the window to `time` seconds at `sample_rate`. Clears state only
    /// when the length actually changes.
    pub fn set_time(&mut self, time: T, sample_rate: T) {
        let samples = window_for_time(time, sample_rate);
        if samples != self.history.len() {
            self.history.resize(samples);
            self.feedback = T::zero();
        }
    }
}

impl<T: Sample> SampleFilter<T> for MovingAverageIir<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        let leaving = self.history.get(self.history.len() - 1);
        self.history.push(input);
        self.feedback = self.feedback + input - leaving;
        self.feedback / T::lit(self.history.len() as f64)
    }

    fn reset(&mut self) {
        self.history.clear();
        self.feedback = T::zero();
    }
}

/// Moving average over pre-divided samples with an explicit running sum.
#[derive(Debug, Clone)]
pub struct MovingAverageFir<T: Sample> {
    history: DelayLine<T>,
    average: T,
}

impl<T: Sample> Default for MovingAverageFir<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl<T: Sample> MovingAverageFir<T> {
    /// Creates an average over `samples` samples (at least one).
    pub fn new(samples: usize) -> Self {
        Self {
            history: DelayLine::new(samples),
            average: T::zero(),
        }
    }

    /// Window length in samples.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the window holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Current average.
    pub fn average(&self) -> T {
        self.average
    }

    /// Sizes the window to `time` seconds at `sample_rate`. Clears state only
    /// when the length actually changes.
    pub fn set_time(&mut self, time: T, sample_rate: T) {
        let samples = window_for_time(time, sample_rate);
        if samples != self.history.len() {
            self.history.resize(samples);
            self.average = T::zero();
        }
    }

    /// Rebuilds the running sum from the stored window.
    ///
    /// Call occasionally from a control-rate path to stop rounding error
    /// from accumulating in long-running instances.
    pub fn recalculate(&mut self) {
        let history = &self.history;
        self.average = (0..history.len()).fold(T::zero(), |sum, age| sum + history.get(age));
    }
}

impl<T: Sample> SampleFilter<T> for MovingAverageFir<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        let scaled = input / T::lit(self.history.len() as f64);
        self.average = self.average - self.history.get(self.history.len() - 1);
        self.history.push(scaled);
        self.average = self.average + scaled;
        self.average
    }

    fn reset(&mut self) {
        self.history.clear();
        self.average = T::zero();
    }
}
