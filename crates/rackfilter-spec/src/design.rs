//! Filter design documents.
//!
//! A design names a coefficient calculator and its control parameters. All
//! frequencies are normalized angular frequencies in radians, where `π` is
//! the Nyquist rate. FIR cutoffs are the exception: they are normalized to
//! Nyquist in `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// A filter design: a calculator choice plus its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterDesign {
    /// First-order (bilinear) section.
    FirstOrder {
        /// Response shape.
        response: FirstOrderResponse,
        /// Cutoff in radians, `[0, π)`.
        cutoff: f64,
    },
    /// First-order shelving section.
    Shelf {
        /// Shelf direction.
        response: ShelfResponse,
        /// Zero frequency in radians, `[0, π)`.
        zero: f64,
        /// Pole frequency in radians, `[0, π)`.
        pole: f64,
    },
    /// Second-order (biquadratic) section.
    Biquad {
        /// Response shape.
        response: BiquadResponse,
        /// Cutoff in radians, `[0, π)`.
        cutoff: f64,
        /// Quality factor (> 0).
        #[serde(default = "default_q")]
        q: f64,
    },
    /// Bainter notch with a shared quality factor.
    BainterBandstop {
        /// Zero frequency in radians.
        zero: f64,
        /// Pole frequency in radians.
        pole: f64,
        /// Quality factor (> 0).
        q: f64,
    },
    /// General Bainter section with independent zero and pole quality.
    Bainter {
        /// Zero frequency in radians.
        zero: f64,
        /// Pole frequency in radians.
        pole: f64,
        /// Zero quality factor (> 0).
        zero_q: f64,
        /// Pole quality factor (> 0).
        pole_q: f64,
    },
    /// Windowed-sinc FIR.
    Fir {
        /// Response shape.
        response: FirResponse,
        /// Number of taps (1-4096).
        taps: usize,
        /// Cutoff normalized to Nyquist, `[0, 1]`. Lower band edge for band designs.
        cutoff: f64,
        /// Upper band edge for bandpass and bandstop designs.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high_cutoff: Option<f64>,
        /// Window applied to the ideal impulse.
        #[serde(default)]
        window: WindowKind,
    },
    /// FIR lattice cascade.
    LatticeFir {
        /// Reflection coefficients, one per stage, each in `(-1, 1)`.
        reflection: Vec<f64>,
    },
    /// All-pole lattice cascade.
    LatticeAllPole {
        /// Reflection coefficients, one per stage, each in `(-1, 1)`.
        reflection: Vec<f64>,
    },
    /// Pole-zero lattice cascade.
    LatticePoleZero {
        /// Reflection coefficients, one per stage, each in `(-1, 1)`.
        reflection: Vec<f64>,
        /// Tap coefficients, one per stage.
        taps: Vec<f64>,
    },
    /// Resonant ladder composite.
    Ladder {
        /// Ladder topology.
        kind: LadderKind,
        /// Cutoff in radians, `[0, π)`.
        cutoff: f64,
        /// Resonance.
        #[serde(default)]
        q: f64,
        /// Seed for the dither noise source.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u32>,
    },
}

/// First-order response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstOrderResponse {
    Lowpass,
    Highpass,
    Allpass,
}

/// First-order shelf directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfResponse {
    Lowshelf,
    Highshelf,
}

/// Second-order response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiquadResponse {
    SallenKeyLowpass,
    SallenKeyHighpass,
    SallenKeyBandpass,
    Allpass,
    Bandpass,
}

/// FIR response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirResponse {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl FirResponse {
    /// Whether the response needs an upper band edge.
    pub fn is_band(&self) -> bool {
        matches!(self, FirResponse::Bandpass | FirResponse::Bandstop)
    }
}

/// FIR window shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Boxcar,
    Bartlett,
    BartlettHann,
    Parzen,
    Welch,
    Cosine,
    Bohman,
    Lanczos,
    Hann,
    #[default]
    Hamming,
    Blackman,
    BlackmanHarris,
    BlackmanNuttall,
    KaiserBessel,
    Flattop,
}

/// Ladder topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderKind {
    /// Diode ladder with averaged inter-stage coupling.
    Diode,
    /// Four-pole transistor ladder with cubic feedback clipping.
    HundredGrit,
    /// Two lowpass stages with highpass feedback.
    Korg35,
}

fn default_q() -> f64 {
    std::f64::consts::FRAC_1_SQRT_2
}

impl FilterDesign {
    /// Parses a design from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the design as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Short name of the design kind, matching the `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FilterDesign::FirstOrder { .. } => "first_order",
            FilterDesign::Shelf { .. } => "shelf",
            FilterDesign::Biquad { .. } => "biquad",
            FilterDesign::BainterBandstop { .. } => "bainter_bandstop",
            FilterDesign::Bainter { .. } => "bainter",
            FilterDesign::Fir { .. } => "fir",
            FilterDesign::LatticeFir { .. } => "lattice_fir",
            FilterDesign::LatticeAllPole { .. } => "lattice_all_pole",
            FilterDesign::LatticePoleZero { .. } => "lattice_pole_zero",
            FilterDesign::Ladder { .. } => "ladder",
        }
    }
}

/// Parses a design from a JSON string.
pub fn parse_design(json: &str) -> Result<FilterDesign, SpecError> {
    FilterDesign::from_json(json)
}
