//! Error types for design parsing and validation.

use std::fmt;

use thiserror::Error;

/// Declares a diagnostic code enum together with its stable string form.
macro_rules! diagnostic_codes {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $code:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Stable identifier such as `E001` or `W001`.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

diagnostic_codes! {
    /// Conditions that reject a design.
    ErrorCode {
        /// Frequency outside `[0, π)` or not finite.
        FrequencyOutOfRange => "E001",
        /// Quality factor not strictly positive.
        InvalidQuality => "E002",
        /// Reflection coefficient outside `(-1, 1)`.
        ReflectionOutOfRange => "E003",
        /// Tap or stage count outside the supported range.
        InvalidTapCount => "E004",
        /// Pole-zero tap coefficients do not line up with the reflection coefficients.
        TapLengthMismatch => "E005",
        /// Band edges missing or not increasing.
        InvalidBandEdges => "E006",
        /// Parameter is NaN or infinite.
        NonFiniteParameter => "E007",
    }
}

diagnostic_codes! {
    /// Conditions worth reporting that still allow the design to be realized.
    WarningCode {
        /// Reflection coefficient near ±1, numerically marginal.
        MarginalReflection => "W001",
        /// Ladder resonance at or above the self-oscillation threshold.
        SelfOscillation => "W002",
    }
}

/// A coded finding about a design, optionally located by field path
/// (for example `reflection[2]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<C> {
    pub code: C,
    pub message: String,
    pub path: Option<String>,
}

/// A finding that rejects the design.
pub type ValidationError = Diagnostic<ErrorCode>;

/// A finding reported alongside an accepted design.
pub type ValidationWarning = Diagnostic<WarningCode>;

impl<C> Diagnostic<C> {
    /// Diagnostic that applies to the design as a whole.
    pub fn new(code: C, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Diagnostic attached to a specific field.
    pub fn with_path(code: C, message: impl Into<String>, path: impl Into<String>) -> Self {
        Diagnostic {
            path: Some(path.into()),
            ..Self::new(code, message)
        }
    }
}

impl<C: fmt::Display> fmt::Display for Diagnostic<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        match &self.path {
            Some(path) => write!(f, " (at {path})"),
            None => Ok(()),
        }
    }
}

impl<C: fmt::Debug + fmt::Display> std::error::Error for Diagnostic<C> {}

/// Failure to obtain a usable design.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("design validation failed with {0} error(s)")]
    ValidationFailed(usize),

    #[error("malformed design JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Everything validation found: errors reject the design, warnings do not.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        ValidationResult {
            ok: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn is_err(&self) -> bool {
        !self.ok
    }

    /// Keeps the warnings of an accepted design, or reports how many errors rejected it.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, SpecError> {
        match self.errors.len() {
            0 => Ok(self.warnings),
            n => Err(SpecError::ValidationFailed(n)),
        }
    }
}
