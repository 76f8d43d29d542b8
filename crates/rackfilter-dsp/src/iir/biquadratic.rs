//! Second-order (biquadratic) direct-form stages.

use super::impl_stage;
use crate::coefficients::BiquadCoefficients;
use crate::sample::Sample;

/// Direct Form 1 step. `x` and `y` hold the last two inputs and outputs,
/// most recent first.
#[inline]
pub fn direct_form_1<T: Sample>(
    c: &BiquadCoefficients<T>,
    x: &mut [T; 2],
    y: &mut [T; 2],
    value: T,
) -> T {
    let output = c.b[0] * value + c.b[1] * x[0] + c.b[2] * x[1] - c.a[0] * y[0] - c.a[1] * y[1];
    x[1] = x[0];
    x[0] = value;
    y[1] = y[0];
    y[0] = output;
    output
}

/// Direct Form 1 Transpose step with pole accumulators `ha` and zero
/// accumulators `hb`.
#[inline]
pub fn direct_form_1_transpose<T: Sample>(
    c: &BiquadCoefficients<T>,
    ha: &mut [T; 2],
    hb: &mut [T; 2],
    value: T,
) -> T {
    let feedback = value + ha[0];
    ha[0] = ha[1] - c.a[0] * feedback;
    ha[1] = -c.a[1] * feedback;
    let feedforward = c.b[0] * feedback + hb[0];
    hb[0] = c.b[1] * feedback + hb[1];
    hb[1] = c.b[2] * feedback;
    feedforward
}

/// Direct Form 2 step with shared delay line `h`.
#[inline]
pub fn direct_form_2<T: Sample>(c: &BiquadCoefficients<T>, h: &mut [T; 2], value: T) -> T {
    let feedback = value - c.a[0] * h[0] - c.a[1] * h[1];
    let feedforward = c.b[0] * feedback + c.b[1] * h[0] + c.b[2] * h[1];
    h[1] = h[0];
    h[0] = feedback;
    feedforward
}

/// Direct Form 2 Transpose step with accumulators `h`.
#[inline]
pub fn direct_form_2_transpose<T: Sample>(
    c: &BiquadCoefficients<T>,
    h: &mut [T; 2],
    value: T,
) -> T {
    let feedforward = c.b[0] * value + h[1];
    h[1] = c.b[1] * value - c.a[0] * feedforward + h[0];
    h[0] = c.b[2] * value - c.a[1] * feedforward;
    feedforward
}

/// Second-order Direct Form 1 stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm1<T: Sample> {
    coefficients: BiquadCoefficients<T>,
    x: [T; 2],
    y: [T; 2],
}

impl<T: Sample> DirectForm1<T> {
    /// Input and output histories, most recent first.
    pub fn state(&self) -> ([T; 2], [T; 2]) {
        (self.x, self.y)
    }

    /// Clears both histories.
    pub fn reset(&mut self) {
        self.x = [T::zero(); 2];
        self.y = [T::zero(); 2];
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_1(&self.coefficients, &mut self.x, &mut self.y, value)
    }
}

impl_stage!(DirectForm1, BiquadCoefficients);

/// Second-order Direct Form 1 Transpose stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm1Transpose<T: Sample> {
    coefficients: BiquadCoefficients<T>,
    ha: [T; 2],
    hb: [T; 2],
}

impl<T: Sample> DirectForm1Transpose<T> {
    /// Pole and zero accumulators.
    pub fn state(&self) -> ([T; 2], [T; 2]) {
        (self.ha, self.hb)
    }

    /// Clears both accumulator banks.
    pub fn reset(&mut self) {
        self.ha = [T::zero(); 2];
        self.hb = [T::zero(); 2];
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_1_transpose(&self.coefficients, &mut self.ha, &mut self.hb, value)
    }
}

impl_stage!(DirectForm1Transpose, BiquadCoefficients);

/// Second-order Direct Form 2 stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm2<T: Sample> {
    coefficients: BiquadCoefficients<T>,
    h: [T; 2],
}

impl<T: Sample> DirectForm2<T> {
    /// Shared delay line, most recent first.
    pub fn state(&self) -> [T; 2] {
        self.h
    }

    /// Clears the delay line.
    pub fn reset(&mut self) {
        self.h = [T::zero(); 2];
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_2(&self.coefficients, &mut self.h, value)
    }
}

impl_stage!(DirectForm2, BiquadCoefficients);

/// Second-order Direct Form 2 Transpose stage.
#[derive(Debug, Clone, Default)]
pub struct DirectForm2Transpose<T: Sample> {
    coefficients: BiquadCoefficients<T>,
    h: [T; 2],
}

impl<T: Sample> DirectForm2Transpose<T> {
    /// Accumulator registers.
    pub fn state(&self) -> [T; 2] {
        self.h
    }

    /// Clears the accumulators.
    pub fn reset(&mut self) {
        self.h = [T::zero(); 2];
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        direct_form_2_transpose(&self.coefficients, &mut self.h, value)
    }
}

impl_stage!(DirectForm2Transpose, BiquadCoefficients);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleFilter;
    use std::f64::consts::PI;

    fn sinusoid(len: usize) -> Vec<f64> {
        (0..len).map(|n| (0.41 * n as f64).sin()).collect()
    }

    fn all_forms(c: BiquadCoefficients<f64>) -> Vec<Box<dyn SampleFilter<f64>>> {
        vec![
            Box::new(DirectForm1::new(c)),
            Box::new(DirectForm1Transpose::new(c)),
            Box::new(DirectForm2::new(c)),
            Box::new(DirectForm2Transpose::new(c)),
        ]
    }

    #[test]
    fn test_identity() {
        let input = sinusoid(32);
        for mut form in all_forms(BiquadCoefficients::identity()) {
            let output: Vec<f64> = input.iter().map(|&x| form.process(x)).collect();
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_zero() {
        let input = sinusoid(32);
        for mut form in all_forms(BiquadCoefficients::zero()) {
            assert!(input.iter().all(|&x| form.process(x) == 0.0));
        }
    }

    #[test]
    fn test_forms_agree_resonant() {
        let input = sinusoid(256);
        let c = BiquadCoefficients::sallen_key_lowpass(0.4 * PI, 10.0);
        let outputs: Vec<Vec<f64>> = all_forms(c)
            .into_iter()
            .map(|mut f| input.iter().map(|&x| f.process(x)).collect())
            .collect();
        for output in &outputs[1..] {
            for (a, b) in outputs[0].iter().zip(output.iter()) {
                assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
            }
        }
    }

    #[test]
    fn test_two_sample_delay() {
        let c = BiquadCoefficients::new([0.0, 0.0, 1.0], [0.0, 0.0]);
        let input = sinusoid(10);
        for mut form in all_forms(c) {
            let output: Vec<f64> = input.iter().map(|&x| form.process(x)).collect();
            assert_eq!(&output[..2], &[0.0, 0.0]);
            assert_eq!(&output[2..], &input[..8]);
        }
    }

    #[test]
    fn test_reset_matches_fresh() {
        let c = BiquadCoefficients::bandpass(0.3 * PI, 2.0);
        let input = sinusoid(64);
        let mut used = DirectForm2Transpose::new(c);
        for &x in &input {
            used.process(x);
        }
        used.reset();
        assert_eq!(used.state(), [0.0, 0.0]);

        let mut fresh = DirectForm2Transpose::new(c);
        for &x in &input {
            assert_eq!(used.process(x), fresh.process(x));
        }
    }

    #[test]
    fn test_lowpass_unity_dc() {
        let mut filter = DirectForm1::new(BiquadCoefficients::sallen_key_lowpass(0.2 * PI, 0.707));
        let mut y = 0.0;
        for _ in 0..1000 {
            y = filter.process(1.0);
        }
        assert!((y - 1.0).abs() < 1e-6);
    }
}
