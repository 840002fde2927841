//! Range normalization, skew curves, and step quantization.
//!
//! Every ranged control holds a raw value in `[min, max]` and renders it via
//! its normalized position in `[0, 1]`. A positive `skew` exponent reshapes
//! that position for non-linear (logarithmic-feeling) response curves: the
//! exponent produced by [`skew_with_center_value`] places a chosen center
//! value at exactly normalized `0.5`, which is how audio frequency and dB
//! controls get their perceptual feel without changing the mapping code.
//!
//! # Example
//!
//! ```
//! use dialkit_core::range::{normalize_value, raw_value, skew_with_center_value};
//!
//! // Linear position of 34 within 0..100
//! assert_eq!(normalize_value(34.0, 0.0, 100.0, 1.0).unwrap(), 0.34);
//!
//! // A frequency-style curve with 100 Hz at the knob's midpoint
//! let skew = skew_with_center_value(100.0, 10.0, 1000.0).unwrap();
//! let mid = raw_value(0.5, 10.0, 1000.0, skew).unwrap();
//! assert!((mid - 100.0).abs() < 1e-9);
//! ```

use crate::error::{ControlError, ControlResult};
use crate::math::{clamp, decimal_part, to_fixed};

/// A validated `min < max` value domain.
///
/// Construction fails on `min >= max`, so the mapping methods never need an
/// error path of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Create a range, requiring `min < max`.
    pub fn new(min: f64, max: f64) -> ControlResult<Self> {
        if !(min < max) {
            return Err(ControlError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`. Always positive.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Bound `value` to this range.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }

    /// Normalized (and skewed) position of `raw` within the range.
    ///
    /// Returns exactly `0.0` at or below `min` and exactly `1.0` at or
    /// above `max`; monotonic in between for positive `skew`.
    pub fn normalize(&self, raw: f64, skew: f64) -> f64 {
        let v = clamp((raw - self.min) / (self.max - self.min), 0.0, 1.0);
        if skew == 1.0 {
            v
        } else {
            v.powf(skew)
        }
    }

    /// Inverse of [`Range::normalize`]: the raw value at a normalized
    /// (skewed) position.
    ///
    /// For `skew != 1` the curve is inverted via `exp(ln(v) / skew)`;
    /// `ln(0)` is `-inf` and `exp(-inf)` is `0`, so the `normalized = 0`
    /// boundary maps back to `min` exactly.
    pub fn denormalize(&self, normalized: f64, skew: f64) -> f64 {
        let n = clamp(normalized, 0.0, 1.0);
        let v = if skew == 1.0 { n } else { (n.ln() / skew).exp() };
        self.min + v * (self.max - self.min)
    }

    /// Skew exponent that places `center` at normalized `0.5`.
    ///
    /// Fails unless `min <= center <= max`.
    pub fn skew_with_center(&self, center: f64) -> ControlResult<f64> {
        if !self.contains(center) {
            return Err(ControlError::CenterOutOfRange {
                center,
                min: self.min,
                max: self.max,
            });
        }
        Ok(0.5_f64.ln() / ((center - self.min) / (self.max - self.min)).ln())
    }
}

/// Normalized (optionally skewed) position of `raw_value` within
/// `[min, max]`.
///
/// Fails with [`ControlError::InvalidRange`] when `min >= max`.
pub fn normalize_value(raw_value: f64, min: f64, max: f64, skew: f64) -> ControlResult<f64> {
    Ok(Range::new(min, max)?.normalize(raw_value, skew))
}

/// Raw value at a normalized (optionally skewed) position within
/// `[min, max]`. Inverse of [`normalize_value`].
///
/// Fails with [`ControlError::InvalidRange`] when `min >= max`.
pub fn raw_value(normalized_value: f64, min: f64, max: f64, skew: f64) -> ControlResult<f64> {
    Ok(Range::new(min, max)?.denormalize(normalized_value, skew))
}

/// Skew exponent that places `center_value` at normalized `0.5` within
/// `[min, max]`.
///
/// `skew = ln(0.5) / ln((center - min) / (max - min))`. Fails with
/// [`ControlError::CenterOutOfRange`] unless `min <= center_value <= max`.
pub fn skew_with_center_value(center_value: f64, min: f64, max: f64) -> ControlResult<f64> {
    if !(min <= center_value && center_value <= max) {
        return Err(ControlError::CenterOutOfRange {
            center: center_value,
            min,
            max,
        });
    }
    Ok(0.5_f64.ln() / ((center_value - min) / (max - min)).ln())
}

/// Quantize `value` to the nearest multiple of `step`.
///
/// Fails with [`ControlError::InvalidStep`] unless `step > 0`.
///
/// The two candidate multiples bracketing `value` are each rounded to the
/// precision of `step`'s own decimal representation (so step `0.1` never
/// produces `3.0000000000000004`), and the closer one wins. On exact
/// equidistance the upper candidate wins; this tie-break decides which
/// value a drag lands on and is pinned by tests.
///
/// # Example
///
/// ```
/// use dialkit_core::range::step_value;
///
/// assert_eq!(step_value(3.14, 0.3).unwrap(), 3.0);
/// assert_eq!(step_value(3.15, 0.3).unwrap(), 3.3);
/// assert_eq!(step_value(6.0, 4.0).unwrap(), 8.0);
/// ```
pub fn step_value(value: f64, step: f64) -> ControlResult<f64> {
    if !(step > 0.0) {
        return Err(ControlError::InvalidStep { step });
    }
    Ok(quantize(value, step))
}

/// [`step_value`] without the step check, for callers that validated the
/// step at configuration time.
pub(crate) fn quantize(value: f64, step: f64) -> f64 {
    let quotient = (value / step).floor();
    let precision = decimal_part(step).map(|d| d.len());
    let lower = to_fixed(quotient * step, precision);
    let upper = to_fixed((quotient + 1.0) * step, precision);
    // Strict < keeps equidistant values on the upper candidate.
    if value - lower < upper - value {
        lower
    } else {
        upper
    }
}
