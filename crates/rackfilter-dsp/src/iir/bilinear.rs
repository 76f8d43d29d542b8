//! First-order (bilinear) direct-form stages.
//!
//! The free functions take the state registers explicitly so composite
//! filters can run several poles off one shared coefficient set.

use super::impl_stage;
use crate::coefficients::BilinearCoefficients;
use crate::sample::Sample;

/// Direct Form 1 step.
///
/// # Arguments
/// * `c` - Coefficients
/// * `x` - Previous input
/// * `y` - Previous output
/// * `value` - Current input
#[inline]
pub fn direct_form_1<T: Sample>(c: &BilinearCoefficients<T>, x: &mut T, y: &mut T, value: T) -> T {
    *y = c.b[0] * value + c.b[1] * *x - c.a[0] * *y;
    *x = value;
    *y
}

/// Direct Form 1 Transpose step with pole accumulator `ha` and zero
/// accumulator `hb`.
#[inline]
pub fn direct_form_1_transpose<T: Sample>(
    c: &BilinearCoefficients<T>,
    ha: &mut T,
    hb: &mut T,
    value: T,
) -> T {
    let feedback = value + *ha;
    *ha = -c.a[0] * feedback;
    let feedforward = c.b[0] * feedback + *hb;
    *hb = c.b[1] * feedback;
    feedforward
}

/// Direct Form 2 step with shared delay register `h`.
#[inline]
pub fn direct_form_2<T: Sample>(c: &BilinearCoefficients<T>, h: &mut T, value: T) -> T {
    let feedback = value - c.a[0] * *h;
    let feedforward = c.b[0] * feedback + c.b[1] * *h;
    *h = feedback;
    feedforward
}

/// Direct Form 2 Transpose step with accumulator `h`.
#[inline]
pub fn direct_form_2_transpose<T: Sample>(c: &BilinearCoefficients<T>, h: &mut T, value: T) -> T {
    let feedforward = c.b[0] * value + *h;
    *h = c.b[1] * value - c.a[0] * feedforward;
    feedforward
}

/// First-order Direct Form 1 stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm1<T: Sample> {
    coefficients: BilinearCoefficients<T>,
    x: T,
    y: T,
}

impl<T: Sample> DirectForm1<T> {
    /// Previous input and output, `(x, y)`.
    pub fn state(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Clears the delay registers.
    pub fn reset(&mut self) {
        self.x = T::zero();
        self.y = T::zero();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_1(&self.coefficients, &mut self.x, &mut self.y, value)
    }
}

impl_stage!(DirectForm1, BilinearCoefficients);

/// First-order Direct Form 1 Transpose stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm1Transpose<T: Sample> {
    coefficients: BilinearCoefficients<T>,
    ha: T,
    hb: T,
}

impl<T: Sample> DirectForm1Transpose<T> {
    /// Pole and zero accumulators, `(ha, hb)`.
    pub fn state(&self) -> (T, T) {
        (self.ha, self.hb)
    }

    /// Clears the accumulators.
    pub fn reset(&mut self) {
        self.ha = T::zero();
        self.hb = T::zero();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_1_transpose(&self.coefficients, &mut self.ha, &mut self.hb, value)
    }
}

impl_stage!(DirectForm1Transpose, BilinearCoefficients);

/// First-order Direct Form 2 stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm2<T: Sample> {
    coefficients: BilinearCoefficients<T>,
    h: T,
}

impl<T: Sample> DirectForm2<T> {
    /// Shared delay register.
    pub fn state(&self) -> T {
        self.h
    }

    /// Clears the delay register.
    pub fn reset(&mut self) {
        self.h = T::zero();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_2(&self.coefficients, &mut self.h, value)
    }
}

impl_stage!(DirectForm2, BilinearCoefficients);

/// First-order Direct Form 2 Transpose stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm2Transpose<T: Sample> {
    coefficients: BilinearCoefficients<T>,
    h: T,
}

impl<T: Sample> DirectForm2Transpose<T> {
    /// Accumulator register.
    pub fn state(&self) -> T {
        self.h
    }

    /// Clears the accumulator.
    pub fn reset(&mut self) {
        self.h = T::zero();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_2_transpose(&self.coefficients, &mut self.h, value)
    }
}

impl_stage!(DirectForm2Transpose, BilinearCoefficients);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleFilter;
    use std::f64::consts::PI;

    const INPUT: [f64; 8] = [1.0, 0.5, -0.25, 0.0, 0.75, -1.0, 0.3, 0.0];

    fn run<F: SampleFilter<f64>>(filter: &mut F) -> Vec<f64> {
        INPUT.iter().map(|&x| filter.process(x)).collect()
    }

    fn all_forms(c: BilinearCoefficients<f64>) -> Vec<Box<dyn SampleFilter<f64>>> {
        vec![
            Box::new(DirectForm1::new(c)),
            Box::new(DirectForm1Transpose::new(c)),
            Box::new(DirectForm2::new(c)),
            Box::new(DirectForm2Transpose::new(c)),
        ]
    }

    #[test]
    fn test_identity() {
        for mut form in all_forms(BilinearCoefficients::identity()) {
            let output: Vec<f64> = INPUT.iter().map(|&x| form.process(x)).collect();
            assert_eq!(output, INPUT.to_vec());
        }
    }

    #[test]
    fn test_zero() {
        for mut form in all_forms(BilinearCoefficients::zero()) {
            assert!(INPUT.iter().all(|&x| form.process(x) == 0.0));
        }
    }

    #[test]
    fn test_transpose_unit_delay() {
        let mut filter = DirectForm1Transpose::new(BilinearCoefficients::new([0.0, 1.0], [0.0]));
        let output = run(&mut filter);
        assert_eq!(output[0], 0.0);
        assert_eq!(&output[1..], &INPUT[..7]);
    }

    #[test]
    fn test_forms_agree() {
        let c = BilinearCoefficients::lowpass(0.3 * PI);
        let outputs: Vec<Vec<f64>> = all_forms(c)
            .into_iter()
            .map(|mut f| INPUT.iter().map(|&x| f.process(x)).collect())
            .collect();
        for output in &outputs[1..] {
            for (a, b) in outputs[0].iter().zip(output.iter()) {
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_reset_keeps_coefficients() {
        let c = BilinearCoefficients::highpass(0.2 * PI);
        let mut filter = DirectForm1::new(c);
        let first = run(&mut filter);
        assert_ne!(filter.state(), (0.0, 0.0));

        filter.reset();
        assert_eq!(filter.state(), (0.0, 0.0));
        assert_eq!(*filter.coefficients(), c);
        assert_eq!(run(&mut filter), first);
    }

    #[test]
    fn test_f32_lowpass_dc() {
        let cutoff = 0.1f32 * std::f32::consts::PI;
        let mut filter = DirectForm2Transpose::new(BilinearCoefficients::lowpass(cutoff));
        let mut y = 0.0f32;
        for _ in 0..2000 {
            y = filter.process(1.0);
        }
        assert!((y - 1.0).abs() < 1e-4);
    }
}
