//! VTL5C3 vactrol emulation.
//!
//! A vactrol is an LED optically coupled to a photoresistor. The LED drive is
//! smoothed by an exponential moving average that rises faster than it falls,
//! and the smoothed drive is mapped through the cell's resistance curve.

use crate::sample::{Sample, SampleFilter};

/// Resistance curve `R(x) = A e^(-Bx) + C` in ohms, fitted to the datasheet.
const CURVE_A: f64 = 19977.0579;
const CURVE_B: f64 = 4.72586603;
const CURVE_C: f64 = 22.9420751;
/// The fit was made with this truncated value of `e`.
const CURVE_BASE: f64 = 2.71828;
/// Dark resistance that normalizes the curve output.
const DARK_RESISTANCE: f64 = 20000.0;

/// Quadratic fits of the EMA rate against the sample period `T`:
/// `rate = c T² + a T + b`.
const FALL_FIT: (f64, f64, f64) = (48113.5069, 209.616712, 0.000880319056);
const RISE_FIT: (f64, f64, f64) = (-3665711.27, 2746.38887, 0.000319227063);

fn rate_for_period<T: Sample>((c, a, b): (f64, f64, f64), period: T) -> T {
    T::lit(c) * period * period + T::lit(a) * period + T::lit(b)
}

/// VTL5C3 light-dependent-resistor response.
///
/// Output is the normalized conductance `1 - R(μ) / 20kΩ`, which is about 0
/// for a dark cell and approaches 1 when fully lit.
#[derive(Debug, Clone)]
pub struct Vtl5c3<T: Sample> {
    rise: T,
    fall: T,
    average: T,
}

impl<T: Sample> Vtl5c3<T> {
    /// Creates a dark cell tuned for `sample_rate` Hz.
    pub fn new(sample_rate: T) -> Self {
        let mut cell = Self {
            rise: T::zero(),
            fall: T::zero(),
            average: T::zero(),
        };
        cell.set_sample_rate(sample_rate);
        cell
    }

    /// Retunes the rise and fall rates. The fits hold from 8 kHz to 728 kHz.
    pub fn set_sample_rate(&mut self, sample_rate: T) {
        let period = sample_rate.recip();
        self.rise = rate_for_period(RISE_FIT, period);
        self.fall = rate_for_period(FALL_FIT, period);
    }

    /// EMA rate used while the drive is increasing.
    pub fn rise(&self) -> T {
        self.rise
    }

    /// EMA rate used while the drive is decreasing.
    pub fn fall(&self) -> T {
        self.fall
    }

    /// Maps a drive level through the resistance curve.
    pub fn curve(x: T) -> T {
        let resistance = T::lit(CURVE_A) * T::lit(CURVE_BASE).powf(-T::lit(CURVE_B) * x)
            + T::lit(CURVE_C);
        T::one() - resistance / T::lit(DARK_RESISTANCE)
    }
}

impl<T: Sample> SampleFilter<T> for Vtl5c3<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        let rate = if input > self.average { self.rise } else { self.fall };
        self.average = self.average + rate * (input - self.average);
        Self::curve(self.average)
    }

    fn reset(&mut self) {
        self.average = T::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_at_44100() {
        let cell = Vtl5c3::<f64>::new(44100.0);
        assert!((cell.rise() - 0.0607107500894139).abs() < 1e-12);
        assert!((cell.fall() - 0.005658271918284748).abs() < 1e-12);
    }

    #[test]
    fn test_rise_faster_than_fall_across_rates() {
        for sample_rate in [8000.0f64, 44100.0, 96000.0, 192000.0, 728000.0] {
            let cell = Vtl5c3::new(sample_rate);
            assert!(cell.rise() > cell.fall(), "at {} Hz", sample_rate);
            assert!(cell.fall() > 0.0 && cell.rise() < 1.0);
        }
    }

    #[test]
    fn test_curve_endpoints() {
        assert!(Vtl5c3::<f64>::curve(0.0).abs() < 1e-8);
        assert!((Vtl5c3::<f64>::curve(1.0) - 0.99).abs() < 1e-9);
        assert!((Vtl5c3::<f64>::curve(0.5) - 0.9048170464851474).abs() < 1e-9);
    }

    #[test]
    fn test_attack_and_release() {
        let mut cell = Vtl5c3::<f64>::new(44100.0);
        let mut lit = 0.0;
        for _ in 0..100 {
            let y = cell.process(1.0);
            assert!(y >= lit);
            lit = y;
        }
        assert!((lit - 0.989919932137643).abs() < 1e-9);

        let mut dim = lit;
        for _ in 0..100 {
            let y = cell.process(0.0);
            assert!(y <= dim);
            dim = y;
        }
        // Release is much slower than attack
        assert!((dim - 0.9299808644742131).abs() < 1e-9);

        cell.reset();
        assert!(cell.process(0.0).abs() < 1e-8);
    }
}
