//! The drag/wheel/keyboard-to-value protocol shared by every control.
//!
//! Each input event is handled independently given the current value: the
//! device delta is turned into a candidate raw value (through the skew curve
//! for normalized-mode options), then quantized and clamped. There is no
//! buffering, debouncing, or animation; the mapping is a pure synchronous
//! function of (current value, configuration, event), so one widget's events
//! can never affect another's.
//!
//! Sign conventions, preserved for UX parity across widgets:
//!
//! - wheel: scroll down (`delta_y > 0`) decreases the value
//! - keyboard: `Right`/`Up` increase, `Left`/`Down` decrease
//! - drag: horizontal controls take the axis delta as-is, vertical controls
//!   invert it (screen y grows downward), and a reversed orientation inverts
//!   it again
//!
//! # Example
//!
//! ```
//! use dialkit_core::input::{ControlConfig, InputEventOption};
//! use dialkit_core::range::Range;
//!
//! let config = ControlConfig::new(Range::new(0.0, 100.0).unwrap(), 1.0)
//!     .unwrap()
//!     .with_wheel(InputEventOption::Raw(5.0));
//!
//! // Scroll up (negative delta_y) increases the value
//! assert_eq!(config.on_wheel(50.0, -120.0), Some(55.0));
//! assert_eq!(config.on_wheel(50.0, 120.0), Some(45.0));
//! ```

use log::{debug, trace};

use crate::error::{ControlError, ControlResult};
use crate::range::{quantize, Range};

/// How much one input increment changes a value: a `(mode, magnitude)` pair.
///
/// `Normalized` moves along the skewed `[0, 1]` curve (equal perceptual
/// steps on a logarithmic control); `Raw` adds to the raw value directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEventOption {
    /// Magnitude applied in normalized `[0, 1]` terms.
    Normalized(f64),
    /// Magnitude applied in raw-value terms.
    Raw(f64),
}

/// Drag axis of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Arrow keys recognized by keyboard-operable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Signed delta direction: `Right`/`Up` positive, `Left`/`Down` negative.
    pub fn sign(self) -> f64 {
        match self {
            ArrowKey::Up | ArrowKey::Right => 1.0,
            ArrowKey::Down | ArrowKey::Left => -1.0,
        }
    }
}

/// Signed delta direction for a wheel event: scroll up to increase.
///
/// `delta_y > 0` (scroll down) maps to `-1`, `delta_y < 0` to `+1`, and an
/// exactly zero delta to `0`.
pub fn wheel_sign(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        -1.0
    } else if delta_y < 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Static configuration for one pointer/wheel/keyboard-driven control.
///
/// Bundles the range, step, skew, and per-source [`InputEventOption`]s. A
/// source configured as `None` is disabled entirely: its handler returns
/// `None` without producing a value. The range and step are validated at
/// construction, so event handling itself is infallible.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    range: Range,
    step: f64,
    skew: f64,
    wheel: Option<InputEventOption>,
    keyboard: Option<InputEventOption>,
    orientation: Orientation,
    reversed: bool,
}

impl ControlConfig {
    /// Create a configuration with a linear curve and both optional input
    /// sources disabled.
    ///
    /// Fails with [`ControlError::InvalidStep`] unless `step > 0`.
    pub fn new(range: Range, step: f64) -> ControlResult<Self> {
        if !(step > 0.0) {
            return Err(ControlError::InvalidStep { step });
        }
        Ok(Self {
            range,
            step,
            skew: 1.0,
            wheel: None,
            keyboard: None,
            orientation: Orientation::Horizontal,
            reversed: false,
        })
    }

    /// Set the skew exponent directly.
    pub fn with_skew(mut self, skew: f64) -> Self {
        self.skew = skew;
        self
    }

    /// Derive the skew exponent that places `center` at the control's
    /// midpoint. Fails when `center` is outside the range.
    pub fn with_center(mut self, center: f64) -> ControlResult<Self> {
        self.skew = self.range.skew_with_center(center)?;
        Ok(self)
    }

    /// Enable wheel input with the given per-notch option.
    pub fn with_wheel(mut self, option: InputEventOption) -> Self {
        self.wheel = Some(option);
        self
    }

    /// Enable keyboard input with the given per-keypress option.
    pub fn with_keyboard(mut self, option: InputEventOption) -> Self {
        self.keyboard = Some(option);
        self
    }

    /// Set the drag axis.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Reverse the drag direction.
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// The control's range.
    pub fn range(&self) -> Range {
        self.range
    }

    /// The control's quantization step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The control's skew exponent.
    pub fn skew(&self) -> f64 {
        self.skew
    }

    /// Normalized (skewed) position of `value`, for rendering collaborators
    /// (fill percentages, arc angles).
    pub fn normalized(&self, value: f64) -> f64 {
        self.range.normalize(value, self.skew)
    }

    /// Raw value at a normalized (skewed) position.
    pub fn value_at(&self, normalized: f64) -> f64 {
        self.range.denormalize(normalized, self.skew)
    }

    /// Map one input event onto the current value.
    ///
    /// `direction` is the signed event delta: `±1` for a wheel notch or
    /// keypress, the sign-adjusted axis delta for a drag. The candidate is
    /// quantized to the step and clamped to the range.
    pub fn apply(&self, value: f64, option: InputEventOption, direction: f64) -> f64 {
        let candidate = match option {
            InputEventOption::Normalized(magnitude) => {
                let n = self.range.normalize(value, self.skew);
                self.range.denormalize(n + direction * magnitude, self.skew)
            }
            InputEventOption::Raw(magnitude) => value + direction * magnitude,
        };
        self.range.clamp(quantize(candidate, self.step))
    }

    /// Handle a wheel event. Returns `None` when wheel input is disabled.
    pub fn on_wheel(&self, value: f64, delta_y: f64) -> Option<f64> {
        let Some(option) = self.wheel else {
            debug!("wheel input disabled; ignoring event");
            return None;
        };
        let next = self.apply(value, option, wheel_sign(delta_y));
        trace!("wheel delta_y={delta_y}: {value} -> {next}");
        Some(next)
    }

    /// Handle an arrow-key press. Returns `None` when keyboard input is
    /// disabled.
    pub fn on_key(&self, value: f64, key: ArrowKey) -> Option<f64> {
        let Some(option) = self.keyboard else {
            debug!("keyboard input disabled; ignoring event");
            return None;
        };
        let next = self.apply(value, option, key.sign());
        trace!("key {key:?}: {value} -> {next}");
        Some(next)
    }

    /// Handle a pointer drag of `delta` device units along the control's
    /// axis, with `option` giving the value change per unit.
    pub fn on_drag(&self, value: f64, delta: f64, option: InputEventOption) -> f64 {
        let next = self.apply(value, option, self.drag_sign() * delta);
        trace!("drag delta={delta}: {value} -> {next}");
        next
    }

    /// Effective drag sign for the configured axis: vertical inverts,
    /// reversed inverts again.
    pub fn drag_sign(&self) -> f64 {
        let base = match self.orientation {
            Orientation::Horizontal => 1.0,
            Orientation::Vertical => -1.0,
        };
        if self.reversed {
            -base
        } else {
            base
        }
    }
}
