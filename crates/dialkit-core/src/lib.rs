//! # dialkit-core
//!
//! Value-mapping core for audio-style UI controls (rotary knobs, sliders,
//! numeric inputs, piano keyboards, XY pads).
//!
//! Every control in the toolkit composes the same scalar machinery: a raw
//! value in `[min, max]`, a normalized position in `[0, 1]` shaped by a skew
//! exponent, step quantization at the step's own decimal precision, and
//! unit-aware text formatting. This crate is that machinery — pure,
//! synchronous, stateless functions with no rendering, DOM, or framework
//! code. Widget layers supply input events (pointer deltas, wheel deltas,
//! keystrokes) and consume raw values and display strings.
//!
//! ## Modules
//!
//! - [`math`] - scalar helpers: clamping, linear remap, decimal rounding,
//!   dB/gain and angle conversions
//! - [`range`] - normalization, skew curves, step quantization
//! - [`format`] - unit selection, free-text parsing, display formatting
//! - [`scale`] - tick-mark enumeration for ranged controls
//! - [`input`] - the drag/wheel/keyboard-to-value protocol
//! - [`midi`] - note-name to MIDI-number utilities for piano widgets
//! - [`error`] - error types
//!
//! ## Example
//!
//! ```
//! use dialkit_core::input::{ControlConfig, InputEventOption};
//! use dialkit_core::range::Range;
//!
//! // A frequency knob: 10 Hz..1 kHz with 100 Hz at the midpoint
//! let config = ControlConfig::new(Range::new(10.0, 1000.0).unwrap(), 1.0)
//!     .unwrap()
//!     .with_center(100.0)
//!     .unwrap()
//!     .with_wheel(InputEventOption::Normalized(0.05));
//!
//! let value = config.on_wheel(100.0, -120.0).unwrap();
//! assert!(value > 100.0);
//! ```

pub mod error;
pub mod format;
pub mod input;
pub mod math;
pub mod midi;
pub mod range;
pub mod scale;

// Re-exports for convenience
pub use error::{ControlError, ControlResult};
pub use format::{format_value, parse_value, select_unit, ParsedValue, UnitScale, UnitSpec, Units};
pub use input::{wheel_sign, ArrowKey, ControlConfig, InputEventOption, Orientation};
pub use math::{
    clamp, db_to_gain, decimal_part, degrees, gain_to_db, integer_part, map_value, modulo,
    radians, to_fixed,
};
pub use midi::{note_name, note_number, parse_note_name, Accidental, ParsedNoteName};
pub use range::{
    normalize_value, raw_value, skew_with_center_value, step_value, Range,
};
pub use scale::{scale_entries, ScaleEntry, ScaleMarkKind, ScaleSpec};
