//! Numeric sample type shared by every filter.

use std::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Floating-point sample type that filter stages are generic over.
///
/// Implemented for `f32` and `f64`.
pub trait Sample: Float + FloatConst + Debug + Default + Send + Sync + 'static {
    /// Converts an `f64` literal into the sample type.
    fn lit(x: f64) -> Self;

    /// Widens the sample to `f64`.
    fn to_f64_lossless(self) -> f64;
}

impl Sample for f32 {
    #[inline]
    fn lit(x: f64) -> Self {
        x as f32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    #[inline]
    fn lit(x: f64) -> Self {
        x
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self
    }
}

/// Single-input, single-output sample processor.
///
/// Every direct-form stage, variable-order form, FIR form, ladder, and the DC
/// blocker implements this so hosts can drive them uniformly.
pub trait SampleFilter<T: Sample> {
    /// Consumes one input sample and returns one output sample.
    fn process(&mut self, input: T) -> T;

    /// Clears delay state without touching coefficients.
    fn reset(&mut self);

    /// Processes a buffer in place.
    fn process_buffer(&mut self, buffer: &mut [T]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}
