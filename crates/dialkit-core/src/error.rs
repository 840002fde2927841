//! Error types for the dialkit core.
//!
//! Range and domain errors indicate a misconfigured control instance and are
//! surfaced immediately; they are programmer errors, not runtime conditions a
//! widget should recover from. Free-text parsing ([`crate::format::parse_value`])
//! deliberately never fails and does not appear here.

use thiserror::Error;

/// Errors raised by the core value-mapping functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    /// A range was configured with `min >= max` where strict ordering is
    /// required.
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    /// A quantization step was zero or negative.
    #[error("invalid step: {step} (step must be positive)")]
    InvalidStep { step: f64 },

    /// A skew center value fell outside its range.
    #[error("center value {center} outside range [{min}, {max}]")]
    CenterOutOfRange { center: f64, min: f64, max: f64 },

    /// A note name did not match `letter[accidental]octave` (e.g. `"C#4"`).
    #[error("unparseable note name: {0:?}")]
    UnparseableNoteName(String),
}

/// Result type for dialkit core operations.
pub type ControlResult<T> = Result<T, ControlError>;
