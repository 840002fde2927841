//! # dialkit
//!
//! Value-mapping toolkit for audio-style UI controls.
//!
//! dialkit provides the shared numeric core behind rotary knobs, sliders,
//! numeric inputs, piano keyboards, and XY pads: normalization with skew
//! curves, step quantization, unit-aware formatting, tick generation, and
//! the drag/wheel/keyboard-to-value protocol.
//!
//! ## Architecture
//!
//! ```text
//! Your widget (canvas/SVG/DOM layer)
//!        ↓ input events            ↑ raw values, display strings
//! ControlConfig (interaction mapper)
//!        ↓
//! range / format / scale / midi (pure core functions)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dialkit::prelude::*;
//!
//! // A frequency knob: 20 Hz..20 kHz, 100 Hz steps, 1 kHz at the midpoint
//! let config = ControlConfig::new(Range::new(20.0, 20_000.0)?, 100.0)?
//!     .with_center(1_000.0)?
//!     .with_wheel(InputEventOption::Normalized(0.02));
//!
//! let value = config.on_wheel(1_000.0, -120.0).unwrap();
//! let units = UnitSpec::List(Units::frequency());
//! let label = format_value(value, &units, Some(2));
//! # let _ = label;
//! # Ok::<(), ControlError>(())
//! ```

// Re-export sub-crate
pub use dialkit_core as core;

/// Prelude module for convenient imports.
///
/// Import everything a widget layer needs:
/// ```
/// use dialkit::prelude::*;
/// ```
pub mod prelude {
    pub use dialkit_core::error::{ControlError, ControlResult};
    pub use dialkit_core::format::{
        format_value, parse_value, select_unit, ParsedValue, UnitScale, UnitSpec, Units,
    };
    pub use dialkit_core::input::{
        wheel_sign, ArrowKey, ControlConfig, InputEventOption, Orientation,
    };
    pub use dialkit_core::math::{
        clamp, db_to_gain, decimal_part, degrees, gain_to_db, integer_part, map_value, modulo,
        radians, to_fixed,
    };
    pub use dialkit_core::midi::{
        note_name, note_number, parse_note_name, Accidental, ParsedNoteName,
    };
    pub use dialkit_core::range::{
        normalize_value, raw_value, skew_with_center_value, step_value, Range,
    };
    pub use dialkit_core::scale::{scale_entries, ScaleEntry, ScaleMarkKind, ScaleSpec};
}
