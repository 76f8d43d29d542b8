//! Rackfilter DSP
//!
//! Per-sample recursive filter processors for a modular synthesizer:
//! - closed-form IIR coefficient calculators (bilinear transform)
//! - first-order and biquad sections in four direct-form topologies
//! - lattice cascades (FIR, all-pole, pole-zero)
//! - nonlinear ladder composites (diode, transistor, Korg35)
//! - smoothing and metering recursions (moving averages, EMA, RMS, vactrol)
//! - multi-band soft clipping and sine compression
//!
//! # Overview
//!
//! Coefficients are computed at control rate and handed to stages that run
//! once per sample. Angular frequencies are normalized so that `π` is the
//! Nyquist rate. Everything is generic over [`Sample`], implemented for
//! `f32` and `f64`.
//!
//! Every processor owns its state exclusively and never allocates while
//! processing. Ladders that inject dither own a seeded PCG32 noise source,
//! so two instances built with the same seed produce identical output.
//!
//! # Example
//!
//! ```
//! use rackfilter_dsp::coefficients::BiquadCoefficients;
//! use rackfilter_dsp::iir::biquadratic::DirectForm2Transpose;
//! use rackfilter_dsp::SampleFilter;
//!
//! let coefficients = BiquadCoefficients::sallen_key_lowpass(0.25_f64, 0.707);
//! let mut filter = DirectForm2Transpose::new(coefficients);
//! let mut buffer = vec![1.0; 64];
//! filter.process_buffer(&mut buffer);
//! assert!(buffer.iter().all(|s| s.is_finite()));
//! ```
//!
//! # Crate Structure
//!
//! - [`coefficients`] - Coefficient calculators and frequency response
//! - [`iir`] - Direct-form stages for bilinear, biquad and arbitrary-order sections
//! - [`fir`] - Direct-form FIR with windowed impulse design
//! - [`lattice`] - Lattice cascades
//! - [`ladder`] - Ladder composites
//! - [`design`] - Realizes `rackfilter_spec::FilterDesign` documents
//! - [`noise`] - Deterministic dither sources
//! - [`ema`], [`moving_average`], [`rms`], [`vactrol`] - Smoothers and meters
//! - [`compression`] - Multi-band soft clipper and compression filter

pub mod clipping;
pub mod coefficients;
pub mod compression;
pub mod dc_blocker;
pub mod delay_line;
pub mod design;
pub mod ema;
pub mod error;
pub mod fir;
pub mod iir;
pub mod ladder;
pub mod lattice;
pub mod moving_average;
pub mod noise;
pub mod rms;
pub mod sample;
pub mod vactrol;
pub mod window;

// Re-export main types at crate root
pub use coefficients::{BilinearCoefficients, BiquadCoefficients};
pub use compression::{BandGains, CompressionFilter, MultiBandSoftClipper};
pub use dc_blocker::DcBlocker;
pub use design::DesignedFilter;
pub use ema::{ExponentialMovingAverage, ExponentialMovingVariance};
pub use error::{FilterError, FilterResult};
pub use fir::FirDirectForm;
pub use ladder::{DiodeLadder, HundredGritLadder, Korg35Lowpass};
pub use lattice::{AllPoleLattice, FirLattice, LatticeOutput, PoleZeroLattice};
pub use moving_average::{MovingAverageFir, MovingAverageIir};
pub use noise::NoiseSource;
pub use rms::RootMeanSquare;
pub use sample::{Sample, SampleFilter};
pub use vactrol::Vtl5c3;
pub use window::Window;
