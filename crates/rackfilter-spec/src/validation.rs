//! Design validation.
//!
//! The calculators in the DSP core trust their inputs. This module is the
//! configuration-time gate that rejects parameter sets which would produce
//! diverging or NaN output.

use std::f64::consts::PI;

use crate::design::FilterDesign;
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};

/// Maximum supported FIR tap or lattice stage count.
pub const MAX_TAPS: usize = 4096;

/// Reflection magnitude above which a lattice stage is flagged as marginal.
pub const MARGINAL_REFLECTION: f64 = 0.999;

/// Empirical resonance above which the transistor ladder self-oscillates.
pub const HUNDRED_GRIT_SELF_OSCILLATION_Q: f64 = 2.2;

/// Validates a design, collecting every error and warning.
pub fn validate_design(design: &FilterDesign) -> ValidationResult {
    let mut v = Validator::default();

    match design {
        FilterDesign::FirstOrder { cutoff, .. } => v.frequency("cutoff", *cutoff),
        FilterDesign::Shelf { zero, pole, .. } => {
            v.frequency("zero", *zero);
            v.frequency("pole", *pole);
        }
        FilterDesign::Biquad { cutoff, q, .. } => {
            v.frequency("cutoff", *cutoff);
            v.quality("q", *q);
        }
        FilterDesign::BainterBandstop { zero, pole, q } => {
            v.frequency("zero", *zero);
            v.frequency("pole", *pole);
            v.quality("q", *q);
        }
        FilterDesign::Bainter {
            zero,
            pole,
            zero_q,
            pole_q,
        } => {
            v.frequency("zero", *zero);
            v.frequency("pole", *pole);
            v.quality("zero_q", *zero_q);
            v.quality("pole_q", *pole_q);
        }
        FilterDesign::Fir {
            response,
            taps,
            cutoff,
            high_cutoff,
            ..
        } => {
            v.count("taps", *taps);
            v.normalized("cutoff", *cutoff);
            match (response.is_band(), high_cutoff) {
                (true, Some(high)) => {
                    v.normalized("high_cutoff", *high);
                    if high.is_finite() && cutoff.is_finite() && *high <= *cutoff {
                        v.error(
                            ErrorCode::InvalidBandEdges,
                            format!(
                                "high_cutoff must be greater than cutoff, got {} <= {}",
                                high, cutoff
                            ),
                            "high_cutoff",
                        );
                    }
                }
                (true, None) => v.error(
                    ErrorCode::InvalidBandEdges,
                    "band designs require high_cutoff",
                    "high_cutoff",
                ),
                (false, _) => {}
            }
        }
        FilterDesign::LatticeFir { reflection } | FilterDesign::LatticeAllPole { reflection } => {
            v.count("reflection", reflection.len());
            v.reflection(reflection);
        }
        FilterDesign::LatticePoleZero { reflection, taps } => {
            v.count("reflection", reflection.len());
            v.reflection(reflection);
            if taps.len() != reflection.len() {
                v.error(
                    ErrorCode::TapLengthMismatch,
                    format!(
                        "expected {} tap coefficients, got {}",
                        reflection.len(),
                        taps.len()
                    ),
                    "taps",
                );
            }
            for (i, c) in taps.iter().enumerate() {
                v.finite(&format!("taps[{}]", i), *c);
            }
        }
        FilterDesign::Ladder { kind, cutoff, q, .. } => {
            v.frequency("cutoff", *cutoff);
            if !q.is_finite() {
                v.finite("q", *q);
            } else if *q < 0.0 {
                v.error(
                    ErrorCode::InvalidQuality,
                    format!("q must be >= 0, got {}", q),
                    "q",
                );
            } else if *kind == crate::design::LadderKind::HundredGrit
                && *q > HUNDRED_GRIT_SELF_OSCILLATION_Q
            {
                v.warnings.push(ValidationWarning::with_path(
                    WarningCode::SelfOscillation,
                    format!(
                        "q {} is above the self-oscillation threshold {}",
                        q, HUNDRED_GRIT_SELF_OSCILLATION_Q
                    ),
                    "q",
                ));
            }
        }
    }

    ValidationResult::from_parts(v.errors, v.warnings)
}

#[derive(Default)]
struct Validator {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    fn error(&mut self, code: ErrorCode, message: impl Into<String>, path: &str) {
        self.errors
            .push(ValidationError::with_path(code, message, path));
    }

    fn finite(&mut self, path: &str, value: f64) -> bool {
        if value.is_finite() {
            return true;
        }
        self.error(
            ErrorCode::NonFiniteParameter,
            format!("{} must be finite, got {}", path, value),
            path,
        );
        false
    }

    /// Angular frequency in `[0, π)`. `π` itself is rejected because the
    /// bilinear pre-warp diverges there.
    fn frequency(&mut self, path: &str, value: f64) {
        if self.finite(path, value) && !(0.0..PI).contains(&value) {
            self.error(
                ErrorCode::FrequencyOutOfRange,
                format!("{} must be in [0, π), got {}", path, value),
                path,
            );
        }
    }

    fn normalized(&mut self, path: &str, value: f64) {
        if self.finite(path, value) && !(0.0..=1.0).contains(&value) {
            self.error(
                ErrorCode::FrequencyOutOfRange,
                format!("{} must be in [0, 1], got {}", path, value),
                path,
            );
        }
    }

    fn quality(&mut self, path: &str, value: f64) {
        if self.finite(path, value) && value <= 0.0 {
            self.error(
                ErrorCode::InvalidQuality,
                format!("{} must be positive, got {}", path, value),
                path,
            );
        }
    }

    fn count(&mut self, path: &str, count: usize) {
        if count == 0 || count > MAX_TAPS {
            self.error(
                ErrorCode::InvalidTapCount,
                format!("{} must have 1-{} entries, got {}", path, MAX_TAPS, count),
                path,
            );
        }
    }

    fn reflection(&mut self, coefficients: &[f64]) {
        for (i, k) in coefficients.iter().enumerate() {
            let path = format!("reflection[{}]", i);
            if !self.finite(&path, *k) {
                continue;
            }
            if k.abs() >= 1.0 {
                self.error(
                    ErrorCode::ReflectionOutOfRange,
                    format!("reflection coefficient must be in (-1, 1), got {}", k),
                    &path,
                );
            } else if k.abs() > MARGINAL_REFLECTION {
                self.warnings.push(ValidationWarning::with_path(
                    WarningCode::MarginalReflection,
                    format!("reflection coefficient {} is numerically marginal", k),
                    path,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{BiquadResponse, FirResponse, FirstOrderResponse, LadderKind, WindowKind};
    use pretty_assertions::assert_eq;

    fn codes(result: &ValidationResult) -> Vec<ErrorCode> {
        result.errors.iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_valid_first_order() {
        let design = FilterDesign::FirstOrder {
            response: FirstOrderResponse::Lowpass,
            cutoff: 0.2 * PI,
        };
        let result = validate_design(&design);
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_nyquist_cutoff_rejected() {
        let design = FilterDesign::FirstOrder {
            response: FirstOrderResponse::Highpass,
            cutoff: PI,
        };
        let result = validate_design(&design);
        assert_eq!(codes(&result), vec![ErrorCode::FrequencyOutOfRange]);
        assert_eq!(result.errors[0].path.as_deref(), Some("cutoff"));
    }

    #[test]
    fn test_biquad_quality_rejected() {
        let design = FilterDesign::Biquad {
            response: BiquadResponse::SallenKeyLowpass,
            cutoff: 0.4 * PI,
            q: 0.0,
        };
        assert_eq!(
            codes(&validate_design(&design)),
            vec![ErrorCode::InvalidQuality]
        );
    }

    #[test]
    fn test_nan_reported_once() {
        let design = FilterDesign::Biquad {
            response: BiquadResponse::Bandpass,
            cutoff: f64::NAN,
            q: 1.0,
        };
        assert_eq!(
            codes(&validate_design(&design)),
            vec![ErrorCode::NonFiniteParameter]
        );
    }

    #[test]
    fn test_fir_band_edges() {
        let missing = FilterDesign::Fir {
            response: FirResponse::Bandpass,
            taps: 31,
            cutoff: 0.2,
            high_cutoff: None,
            window: WindowKind::Hann,
        };
        assert_eq!(
            codes(&validate_design(&missing)),
            vec![ErrorCode::InvalidBandEdges]
        );

        let inverted = FilterDesign::Fir {
            response: FirResponse::Bandstop,
            taps: 31,
            cutoff: 0.6,
            high_cutoff: Some(0.3),
            window: WindowKind::Hann,
        };
        assert_eq!(
            codes(&validate_design(&inverted)),
            vec![ErrorCode::InvalidBandEdges]
        );

        let zero_taps = FilterDesign::Fir {
            response: FirResponse::Lowpass,
            taps: 0,
            cutoff: 0.5,
            high_cutoff: None,
            window: WindowKind::Boxcar,
        };
        assert_eq!(
            codes(&validate_design(&zero_taps)),
            vec![ErrorCode::InvalidTapCount]
        );
    }

    #[test]
    fn test_lattice_reflection_range() {
        let design = FilterDesign::LatticeAllPole {
            reflection: vec![0.5, 1.0, -0.9995],
        };
        let result = validate_design(&design);
        assert_eq!(codes(&result), vec![ErrorCode::ReflectionOutOfRange]);
        assert_eq!(result.errors[0].path.as_deref(), Some("reflection[1]"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::MarginalReflection);
    }

    #[test]
    fn test_lattice_empty_rejected() {
        let design = FilterDesign::LatticeFir { reflection: vec![] };
        assert_eq!(
            codes(&validate_design(&design)),
            vec![ErrorCode::InvalidTapCount]
        );
    }

    #[test]
    fn test_pole_zero_tap_mismatch() {
        let design = FilterDesign::LatticePoleZero {
            reflection: vec![0.5, 0.25],
            taps: vec![1.0],
        };
        assert_eq!(
            codes(&validate_design(&design)),
            vec![ErrorCode::TapLengthMismatch]
        );
    }

    #[test]
    fn test_ladder_self_oscillation_warning() {
        let design = FilterDesign::Ladder {
            kind: LadderKind::HundredGrit,
            cutoff: 0.3,
            q: 3.0,
            seed: None,
        };
        let result = validate_design(&design);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::SelfOscillation);

        let negative = FilterDesign::Ladder {
            kind: LadderKind::Diode,
            cutoff: 0.3,
            q: -1.0,
            seed: None,
        };
        assert_eq!(
            codes(&validate_design(&negative)),
            vec![ErrorCode::InvalidQuality]
        );
    }
}
