//! Tick-mark enumeration for ranged controls.
//!
//! A scale is the static set of labeled reference marks drawn along a
//! slider or knob. It is computed once at render/configuration time, either
//! from an explicit caller-provided list or procedurally from an interval:
//! ticks land on multiples of the interval that fall within `[min, max]`,
//! anchored at `ceil(min / per)`, so they are not necessarily at `min` or
//! `max` themselves unless those are exact multiples.

use crate::math::{decimal_part, to_fixed};

/// What a tick renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMarkKind {
    /// Tick line only.
    Mark,
    /// Tick line with its value printed.
    MarkNumber,
    /// Value only, no tick line.
    Number,
}

/// One tick position on a control's scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    /// Raw-value position of the tick.
    pub at: f64,
    /// Rendering kind.
    pub kind: ScaleMarkKind,
    /// Optional label overriding the printed value.
    pub text: Option<String>,
}

impl ScaleEntry {
    /// Create a tick at `at` with no label override.
    pub fn new(at: f64, kind: ScaleMarkKind) -> Self {
        Self {
            at,
            kind,
            text: None,
        }
    }

    /// Attach a label override.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// How a control's scale is specified.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleSpec {
    /// Explicit tick list, passed through as-is (no validation).
    Explicit(Vec<ScaleEntry>),
    /// One tick per control step.
    EveryStep(ScaleMarkKind),
    /// One tick per multiple of the given interval.
    Every(f64, ScaleMarkKind),
}

/// Enumerate the tick positions for a ranged control.
///
/// `None` yields no ticks. Explicit lists pass through unchanged. Interval
/// specs emit `floor(max/per) - ceil(min/per) + 1` ticks at multiples of
/// `per` inside `[min, max]`, each rounded to the precision of `per`'s own
/// decimal representation; an empty or inverted span yields no ticks.
///
/// # Example
///
/// ```
/// use dialkit_core::scale::{scale_entries, ScaleMarkKind, ScaleSpec};
///
/// let spec = ScaleSpec::Every(10.0, ScaleMarkKind::MarkNumber);
/// let ticks = scale_entries(Some(&spec), 4.0, 30.0, 1.0);
/// let positions: Vec<f64> = ticks.iter().map(|t| t.at).collect();
/// assert_eq!(positions, vec![10.0, 20.0, 30.0]);
/// ```
pub fn scale_entries(spec: Option<&ScaleSpec>, min: f64, max: f64, step: f64) -> Vec<ScaleEntry> {
    let (per, kind) = match spec {
        None => return Vec::new(),
        Some(ScaleSpec::Explicit(list)) => return list.clone(),
        Some(ScaleSpec::EveryStep(kind)) => (step, *kind),
        Some(ScaleSpec::Every(per, kind)) => (*per, *kind),
    };
    let first = (min / per).ceil();
    let count = ((max / per).floor() - first + 1.0) as i64;
    let precision = decimal_part(per).map(|d| d.len());
    (0..count.max(0))
        .map(|i| ScaleEntry::new(to_fixed(per * (first + i as f64), precision), kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(spec: &ScaleSpec, min: f64, max: f64, step: f64) -> Vec<f64> {
        scale_entries(Some(spec), min, max, step)
            .iter()
            .map(|t| t.at)
            .collect()
    }

    #[test]
    fn test_no_spec_yields_no_ticks() {
        assert!(scale_entries(None, 0.0, 100.0, 1.0).is_empty());
    }

    #[test]
    fn test_explicit_list_passes_through() {
        let list = vec![
            ScaleEntry::new(0.0, ScaleMarkKind::MarkNumber),
            ScaleEntry::new(50.0, ScaleMarkKind::Mark).with_text("mid"),
        ];
        let spec = ScaleSpec::Explicit(list.clone());
        assert_eq!(scale_entries(Some(&spec), 0.0, 100.0, 1.0), list);
    }

    #[test]
    fn test_interval_ticks_align_to_multiples() {
        let spec = ScaleSpec::Every(10.0, ScaleMarkKind::MarkNumber);
        // min is not itself a multiple; the first tick is the next one up
        assert_eq!(positions(&spec, 4.0, 30.0, 1.0), vec![10.0, 20.0, 30.0]);
        assert_eq!(positions(&spec, 0.0, 30.0, 1.0), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_interval_with_no_aligned_multiple_in_range() {
        let spec = ScaleSpec::EveryStep(ScaleMarkKind::Number);
        assert!(positions(&spec, 410.0, 500.0, 400.0).is_empty());
    }

    #[test]
    fn test_every_step_uses_control_step() {
        let spec = ScaleSpec::EveryStep(ScaleMarkKind::Mark);
        assert_eq!(positions(&spec, 0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_fractional_interval_rounds_to_its_precision() {
        let spec = ScaleSpec::Every(0.1, ScaleMarkKind::Mark);
        let ticks = positions(&spec, 0.0, 0.5, 1.0);
        assert_eq!(ticks, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_negative_span() {
        let spec = ScaleSpec::Every(0.5, ScaleMarkKind::MarkNumber);
        assert_eq!(
            positions(&spec, -1.0, 1.0, 0.1),
            vec![-1.0, -0.5, 0.0, 0.5, 1.0]
        );
    }
}
