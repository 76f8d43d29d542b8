//! Rackfilter Design Library
//!
//! This crate provides serializable filter design documents and their
//! validation. A design names one of the closed-form coefficient calculators
//! in `rackfilter-dsp` together with its control parameters.
//!
//! # Example
//!
//! ```
//! use rackfilter_spec::{parse_design, validate_design};
//!
//! let design = parse_design(
//!     r#"{"type": "biquad", "response": "sallen_key_lowpass", "cutoff": 1.2, "q": 2.0}"#,
//! )
//! .unwrap();
//! assert!(validate_design(&design).is_ok());
//! ```
//!
//! Parsing lives in [`design`], the coded diagnostics in [`error`], and the
//! range checks in [`validation`].

pub mod design;
pub mod error;
pub mod validation;

pub use design::{
    parse_design, BiquadResponse, FilterDesign, FirResponse, FirstOrderResponse, LadderKind,
    ShelfResponse, WindowKind,
};
pub use error::{
    Diagnostic, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use validation::validate_design;
