//! Realizes validated design documents as concrete processors.
//!
//! This is the control-rate bridge between `rackfilter-spec` and the
//! per-sample core. Direct-form designs are realized in Direct Form 2
//! Transpose.

use log::{debug, warn};
use num_complex::Complex;
use rackfilter_spec::{
    validate_design, BiquadResponse, FilterDesign, FirResponse, FirstOrderResponse, LadderKind,
    ShelfResponse,
};

use crate::coefficients::fir::FirImpulse;
use crate::coefficients::{freqz, BilinearCoefficients, BiquadCoefficients};
use crate::error::{FilterError, FilterResult};
use crate::fir::FirDirectForm;
use crate::iir::{bilinear, biquadratic};
use crate::ladder::{DiodeLadder, HundredGritLadder, Korg35Lowpass};
use crate::lattice::{AllPoleLattice, FirLattice, PoleZeroLattice};
use crate::noise::{derive_voice_seed, DEFAULT_NOISE_SEED};
use crate::sample::{Sample, SampleFilter};
use crate::window::Window;

/// A processor built from a [`FilterDesign`].
#[derive(Debug, Clone)]
pub enum DesignedFilter<T: Sample> {
    /// First-order or shelf section.
    FirstOrder(bilinear::DirectForm2Transpose<T>),
    /// Biquad or Bainter section.
    Biquad(biquadratic::DirectForm2Transpose<T>),
    /// Windowed FIR.
    Fir(FirDirectForm<T>),
    /// FIR lattice.
    LatticeFir(FirLattice<T>),
    /// All-pole lattice.
    LatticeAllPole(AllPoleLattice<T>),
    /// Pole-zero lattice.
    LatticePoleZero(PoleZeroLattice<T>),
    /// Diode ladder.
    Diode(DiodeLadder<T>),
    /// Transistor ladder.
    HundredGrit(HundredGritLadder<T>),
    /// Korg35 lowpass.
    Korg35(Korg35Lowpass<T>),
}

fn lit_vec<T: Sample>(values: &[f64]) -> Vec<T> {
    values.iter().map(|&v| T::lit(v)).collect()
}

impl<T: Sample> DesignedFilter<T> {
    /// Validates and realizes a design.
    pub fn from_design(design: &FilterDesign) -> FilterResult<Self> {
        Self::build(design, None)
    }

    /// Validates and realizes a design for one voice of a polyphonic patch.
    ///
    /// Ladder designs get a dither seed derived from the design seed and the
    /// voice index, so voices never share a noise stream.
    pub fn from_design_for_voice(design: &FilterDesign, voice: u32) -> FilterResult<Self> {
        Self::build(design, Some(voice))
    }

    fn build(design: &FilterDesign, voice: Option<u32>) -> FilterResult<Self> {
        let result = validate_design(design);
        for warning in &result.warnings {
            warn!("{} design: {}", design.kind_name(), warning);
        }
        if !result.ok {
            warn!(
                "rejecting {} design with {} error(s)",
                design.kind_name(),
                result.errors.len()
            );
            return Err(FilterError::InvalidDesign(result.errors));
        }
        debug!("realizing {} design", design.kind_name());

        let filter = match design {
            FilterDesign::FirstOrder { response, cutoff } => {
                let cutoff = T::lit(*cutoff);
                let c = match response {
                    FirstOrderResponse::Lowpass => BilinearCoefficients::lowpass(cutoff),
                    FirstOrderResponse::Highpass => BilinearCoefficients::highpass(cutoff),
                    FirstOrderResponse::Allpass => BilinearCoefficients::allpass(cutoff),
                };
                DesignedFilter::FirstOrder(bilinear::DirectForm2Transpose::new(c))
            }
            FilterDesign::Shelf {
                response,
                zero,
                pole,
            } => {
                let (zero, pole) = (T::lit(*zero), T::lit(*pole));
                let c = match response {
                    ShelfResponse::Lowshelf => BilinearCoefficients::lowshelf(zero, pole),
                    ShelfResponse::Highshelf => BilinearCoefficients::highshelf(zero, pole),
                };
                DesignedFilter::FirstOrder(bilinear::DirectForm2Transpose::new(c))
            }
            FilterDesign::Biquad {
                response,
                cutoff,
                q,
            } => {
                let (cutoff, q) = (T::lit(*cutoff), T::lit(*q));
                let c = match response {
                    BiquadResponse::SallenKeyLowpass => {
                        BiquadCoefficients::sallen_key_lowpass(cutoff, q)
                    }
                    BiquadResponse::SallenKeyHighpass => {
                        BiquadCoefficients::sallen_key_highpass(cutoff, q)
                    }
                    BiquadResponse::SallenKeyBandpass => {
                        BiquadCoefficients::sallen_key_bandpass(cutoff, q)
                    }
                    BiquadResponse::Allpass => BiquadCoefficients::allpass(cutoff, q),
                    BiquadResponse::Bandpass => BiquadCoefficients::bandpass(cutoff, q),
                };
                DesignedFilter::Biquad(biquadratic::DirectForm2Transpose::new(c))
            }
            FilterDesign::BainterBandstop { zero, pole, q } => {
                let c = BiquadCoefficients::bainter_bandstop(T::lit(*zero), T::lit(*pole), T::lit(*q));
                DesignedFilter::Biquad(biquadratic::DirectForm2Transpose::new(c))
            }
            FilterDesign::Bainter {
                zero,
                pole,
                zero_q,
                pole_q,
            } => {
                let c = BiquadCoefficients::bainter(
                    T::lit(*zero),
                    T::lit(*pole),
                    T::lit(*zero_q),
                    T::lit(*pole_q),
                );
                DesignedFilter::Biquad(biquadratic::DirectForm2Transpose::new(c))
            }
            FilterDesign::Fir {
                response,
                taps,
                cutoff,
                high_cutoff,
                window,
            } => {
                let low = T::lit(*cutoff);
                // Validation guarantees band designs carry an upper edge
                let high = T::lit(high_cutoff.unwrap_or(1.0));
                let impulse = match response {
                    FirResponse::Lowpass => FirImpulse::Lowpass(low),
                    FirResponse::Highpass => FirImpulse::Highpass(low),
                    FirResponse::Bandpass => FirImpulse::Bandpass { low, high },
                    FirResponse::Bandstop => FirImpulse::Bandstop { low, high },
                };
                DesignedFilter::Fir(FirDirectForm::design(*taps, impulse, Window::from(*window))?)
            }
            FilterDesign::LatticeFir { reflection } => {
                DesignedFilter::LatticeFir(FirLattice::from_reflection(&lit_vec(reflection))?)
            }
            FilterDesign::LatticeAllPole { reflection } => DesignedFilter::LatticeAllPole(
                AllPoleLattice::from_reflection(&lit_vec(reflection))?,
            ),
            FilterDesign::LatticePoleZero { reflection, taps } => DesignedFilter::LatticePoleZero(
                PoleZeroLattice::from_coefficients(&lit_vec(reflection), &lit_vec(taps))?,
            ),
            FilterDesign::Ladder {
                kind,
                cutoff,
                q,
                seed,
            } => {
                let base = seed.unwrap_or(DEFAULT_NOISE_SEED);
                let seed = match voice {
                    Some(index) => derive_voice_seed(base, index),
                    None => base,
                };
                let (cutoff, q) = (T::lit(*cutoff), T::lit(*q));
                match kind {
                    LadderKind::Diode => {
                        let mut ladder = DiodeLadder::with_seed(seed);
                        ladder.set_cutoff(cutoff);
                        ladder.set_q(q);
                        DesignedFilter::Diode(ladder)
                    }
                    LadderKind::HundredGrit => {
                        let mut ladder = HundredGritLadder::with_seed(seed);
                        ladder.set_cutoff(cutoff);
                        ladder.set_q(q);
                        DesignedFilter::HundredGrit(ladder)
                    }
                    LadderKind::Korg35 => {
                        let mut ladder = Korg35Lowpass::new();
                        ladder.set_cutoff(cutoff);
                        ladder.set_q(q);
                        DesignedFilter::Korg35(ladder)
                    }
                }
            }
        };
        Ok(filter)
    }

    /// Complex frequency response for linear direct-form designs.
    ///
    /// Returns `None` for lattice and ladder realizations.
    pub fn frequency_response(&self, omega: T) -> Option<Complex<T>> {
        match self {
            DesignedFilter::FirstOrder(f) => Some(f.coefficients().frequency_response(omega)),
            DesignedFilter::Biquad(f) => Some(f.coefficients().frequency_response(omega)),
            DesignedFilter::Fir(f) => Some(freqz(f.coefficients(), &[], omega)),
            _ => None,
        }
    }
}

/// Expands to a match that calls `$call` on the concrete processor in each
/// variant, keeping per-sample calls statically dispatched.
macro_rules! each_variant {
    ($filter:expr, $inner:ident => $call:expr) => {
        match $filter {
            DesignedFilter::FirstOrder($inner) => $call,
            DesignedFilter::Biquad($inner) => $call,
            DesignedFilter::Fir($inner) => $call,
            DesignedFilter::LatticeFir($inner) => $call,
            DesignedFilter::LatticeAllPole($inner) => $call,
            DesignedFilter::LatticePoleZero($inner) => $call,
            DesignedFilter::Diode($inner) => $call,
            DesignedFilter::HundredGrit($inner) => $call,
            DesignedFilter::Korg35($inner) => $call,
        }
    };
}

impl<T: Sample> SampleFilter<T> for DesignedFilter<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        each_variant!(self, f => SampleFilter::process(f, input))
    }

    fn reset(&mut self) {
        each_variant!(self, f => SampleFilter::reset(f))
    }

    fn process_buffer(&mut self, buffer: &mut [T]) {
        each_variant!(self, f => SampleFilter::process_buffer(f, buffer))
    }
}
