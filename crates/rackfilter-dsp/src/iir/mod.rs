//! Direct-form IIR realizations.
//!
//! Every form in a submodule realizes the same transfer function
//! `H(z) = (b0 + b1 z⁻¹ + ...) / (1 + a0 z⁻¹ + ...)` through a different
//! arrangement of delay registers:
//!
//! - **Direct Form 1**: separate input and output histories (`2 × order` registers)
//! - **Direct Form 1 Transpose**: poles first, then zeros, with two accumulator banks
//! - **Direct Form 2**: one shared delay line (`order` registers)
//! - **Direct Form 2 Transpose**: one shared accumulator bank (`order` registers)
//!
//! `process` consumes one sample, updates state once, and never allocates.
//! `reset` clears state and keeps coefficients.

/// Coefficient accessors and the [`SampleFilter`](crate::SampleFilter) impl
/// shared by the fixed-order stages.
macro_rules! impl_stage {
    ($stage:ident, $coefficients:ident) => {
        impl<T: Sample> $stage<T> {
            /// Creates a stage with the given coefficients and cleared state.
            pub fn new(coefficients: $coefficients<T>) -> Self {
                Self {
                    coefficients,
                    ..Self::default()
                }
            }

            /// Current coefficients.
            pub fn coefficients(&self) -> &$coefficients<T> {
                &self.coefficients
            }

            /// Replaces the coefficients. Delay state is kept so that
            /// control-rate updates do not click.
            pub fn set_coefficients(&mut self, coefficients: $coefficients<T>) {
                self.coefficients = coefficients;
            }
        }

        impl<T: Sample> crate::sample::SampleFilter<T> for $stage<T> {
            #[inline]
            fn process(&mut self, input: T) -> T {
                $stage::process(self, input)
            }

            fn reset(&mut self) {
                $stage::reset(self)
            }
        }
    };
}

pub(crate) use impl_stage;

pub mod bilinear;
pub mod bipolynomial;
pub mod biquadratic;
