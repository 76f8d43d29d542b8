//! Multi-band soft clipping and sine compression.
//!
//! [`MultiBandSoftClipper`] splits the input into three bands with a
//! first-order highpass and lowpass pair (the mid band is the remainder),
//! gains and cubic-clips each band, and sums them. [`CompressionFilter`]
//! follows that with a Bainter notch and a final full-band cubic clip.
//!
//! All frequencies are in radians, `π` being Nyquist.

use crate::clipping::cubic_clip;
use crate::coefficients::{BilinearCoefficients, BiquadCoefficients};
use crate::iir::{bilinear, biquadratic};
use crate::sample::{Sample, SampleFilter};

/// Per-band drive applied before clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandGains<T: Sample> {
    pub high: T,
    pub mid: T,
    pub low: T,
}

impl<T: Sample> Default for BandGains<T> {
    fn default() -> Self {
        Self {
            high: T::one(),
            mid: T::one(),
            low: T::one(),
        }
    }
}

/// Three-band soft clipper.
#[derive(Debug, Clone)]
pub struct MultiBandSoftClipper<T: Sample> {
    highpass: bilinear::DirectForm2Transpose<T>,
    lowpass: bilinear::DirectForm2Transpose<T>,
    gains: BandGains<T>,
}

impl<T: Sample> MultiBandSoftClipper<T> {
    /// Creates a clipper with unity band gains.
    ///
    /// # Arguments
    /// * `high_cutoff` - Lower edge of the high band, radians
    /// * `low_cutoff` - Upper edge of the low band, radians
    pub fn new(high_cutoff: T, low_cutoff: T) -> Self {
        Self {
            highpass: bilinear::DirectForm2Transpose::new(BilinearCoefficients::highpass(
                high_cutoff,
            )),
            lowpass: bilinear::DirectForm2Transpose::new(BilinearCoefficients::lowpass(
                low_cutoff,
            )),
            gains: BandGains::default(),
        }
    }

    /// Moves the crossover frequencies. Filter state is kept.
    pub fn set_crossovers(&mut self, high_cutoff: T, low_cutoff: T) {
        self.highpass
            .set_coefficients(BilinearCoefficients::highpass(high_cutoff));
        self.lowpass
            .set_coefficients(BilinearCoefficients::lowpass(low_cutoff));
    }

    pub fn gains(&self) -> BandGains<T> {
        self.gains
    }

    pub fn set_gains(&mut self, gains: BandGains<T>) {
        self.gains = gains;
    }

    /// Splits one sample into `(high, mid, low)`. The bands always sum back
    /// to the input.
    #[inline]
    pub fn split(&mut self, input: T) -> (T, T, T) {
        let high = self.highpass.process(input);
        let low = self.lowpass.process(input);
        (high, input - high - low, low)
    }
}

impl<T: Sample> SampleFilter<T> for MultiBandSoftClipper<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        let (high, mid, low) = self.split(input);
        let g = self.gains;
        cubic_clip(g.high * high) + cubic_clip(g.mid * mid) + cubic_clip(g.low * low)
    }

    fn reset(&mut self) {
        self.highpass.reset();
        self.lowpass.reset();
    }
}

/// Sine compression: band-dependent soft clipping, a notch to carve out a
/// tone, then a full-band soft clip.
#[derive(Debug, Clone)]
pub struct CompressionFilter<T: Sample> {
    dynamics: MultiBandSoftClipper<T>,
    notch: biquadratic::DirectForm2Transpose<T>,
    output_gain: T,
}

impl<T: Sample> CompressionFilter<T> {
    /// Creates a compression filter with unity gains.
    ///
    /// # Arguments
    /// * `notch_cutoff` - Notch center, radians
    /// * `notch_q` - Notch quality
    /// * `high_cutoff` - Lower edge of the high band, radians
    /// * `low_cutoff` - Upper edge of the low band, radians
    pub fn new(notch_cutoff: T, notch_q: T, high_cutoff: T, low_cutoff: T) -> Self {
        Self {
            dynamics: MultiBandSoftClipper::new(high_cutoff, low_cutoff),
            notch: biquadratic::DirectForm2Transpose::new(BiquadCoefficients::bainter_bandstop(
                notch_cutoff,
                notch_cutoff,
                notch_q,
            )),
            output_gain: T::one(),
        }
    }

    /// Retunes the notch. Filter state is kept.
    pub fn set_notch(&mut self, cutoff: T, q: T) {
        self.notch
            .set_coefficients(BiquadCoefficients::bainter_bandstop(cutoff, cutoff, q));
    }

    pub fn set_crossovers(&mut self, high_cutoff: T, low_cutoff: T) {
        self.dynamics.set_crossovers(high_cutoff, low_cutoff);
    }

    pub fn set_band_gains(&mut self, gains: BandGains<T>) {
        self.dynamics.set_gains(gains);
    }

    /// Drive into the final clip.
    pub fn set_output_gain(&mut self, gain: T) {
        self.output_gain = gain;
    }

    pub fn dynamics(&self) -> &MultiBandSoftClipper<T> {
        &self.dynamics
    }
}

impl<T: Sample> SampleFilter<T> for CompressionFilter<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        let shaped = self.dynamics.process(input);
        let notched = self.notch.process(shaped);
        cubic_clip(self.output_gain * notched)
    }

    fn reset(&mut self) {
        self.dynamics.reset();
        self.notch.reset();
    }
}
