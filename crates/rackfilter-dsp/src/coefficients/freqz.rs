//! Complex frequency response of a rational transfer function.

use num_complex::Complex;

use crate::sample::Sample;

/// Evaluates `H(e^{jω}) = Σ b_k e^{-jωk} / (1 + Σ a_k e^{-jω(k+1)})`.
///
/// # Arguments
/// * `b` - Feedforward coefficients
/// * `a` - Feedback coefficients with the leading `1` omitted
/// * `omega` - Angular frequency in radians
pub fn freqz<T: Sample>(b: &[T], a: &[T], omega: T) -> Complex<T> {
    let z_inv = Complex::from_polar(T::one(), -omega);

    let mut power = Complex::new(T::one(), T::zero());
    let mut numerator = Complex::new(T::zero(), T::zero());
    for &bk in b {
        numerator = numerator + power.scale(bk);
        power = power * z_inv;
    }

    let mut power = z_inv;
    let mut denominator = Complex::new(T::one(), T::zero());
    for &ak in a {
        denominator = denominator + power.scale(ak);
        power = power * z_inv;
    }

    numerator / denominator
}

/// Magnitude response in decibels.
pub fn magnitude_db<T: Sample>(b: &[T], a: &[T], omega: T) -> T {
    T::lit(20.0) * freqz(b, a, omega).norm().log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_first_order_fixture() {
        let b = [0.42080778, 0.42080778];
        let a = [-0.15838444];
        let h = freqz(&b, &a, 0.4 * PI);
        assert!((h.re - 0.5).abs() < 1e-6);
        assert!((h.im + 0.5).abs() < 1e-6);

        let h = freqz(&b, &a, 0.2 * PI);
        assert!((h.re - 0.83333333).abs() < 1e-6);
        assert!((h.im + 0.372678).abs() < 1e-6);
    }

    #[test]
    fn test_identity() {
        let h = freqz(&[1.0f32], &[], 1.0);
        assert!((h.re - 1.0).abs() < 1e-6);
        assert!(h.im.abs() < 1e-6);
    }

    #[test]
    fn test_dc_gain() {
        // H(1) = (0.5 + 0.5) / (1 - 0.5)
        let h: Complex<f64> = freqz(&[0.5, 0.5], &[-0.5], 0.0);
        assert!((h.re - 2.0).abs() < 1e-12);
        assert!((magnitude_db::<f64>(&[0.5, 0.5], &[-0.5], 0.0) - 6.0206).abs() < 1e-3);
    }
}
