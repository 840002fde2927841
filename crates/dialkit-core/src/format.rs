//! Unit-aware value formatting and free-text parsing.
//!
//! Numeric text fields convert between a stored raw value and the text the
//! user sees/edits. Parsing never fails: every keystroke must produce some
//! valid intermediate state (the user may have typed just `"-"`), so
//! malformed input degrades to a default instead of raising.
//!
//! # Example
//!
//! ```
//! use dialkit_core::format::{parse_value, format_value, Units, UnitSpec};
//!
//! let units = UnitSpec::List(Units::frequency());
//! let parsed = parse_value("1500", &units, Some(2));
//! assert_eq!(parsed.raw_value, 1500.0);
//! assert_eq!(parsed.display, "1.50kHz");
//! assert_eq!(parsed.unit, "kHz");
//!
//! assert_eq!(format_value(440.0, &units, None), "440Hz");
//! ```

use std::sync::OnceLock;

use regex::Regex;

/// Number optionally followed by a unit word: `"1.5 kHz"`, `"-20"`, `"3db"`.
const NUMBER_WITH_UNIT_PATTERN: &str = r"^(-?\d+(\.\d+)?)\s*(\w*)$";

/// Leading numeric token anywhere in the input: `"-12.5"` out of `"-12.5 dB"`.
const LEADING_NUMBER_PATTERN: &str = r"-?\d+(\.\d+)?";

static NUMBER_WITH_UNIT_REGEX: OnceLock<Regex> = OnceLock::new();
static LEADING_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

fn number_with_unit_regex() -> &'static Regex {
    NUMBER_WITH_UNIT_REGEX
        .get_or_init(|| Regex::new(NUMBER_WITH_UNIT_PATTERN).expect("invalid regex pattern"))
}

fn leading_number_regex() -> &'static Regex {
    LEADING_NUMBER_REGEX
        .get_or_init(|| Regex::new(LEADING_NUMBER_PATTERN).expect("invalid regex pattern"))
}

/// One display unit: a label and the factor that converts it to base units.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitScale {
    /// Display label, e.g. `"kHz"`.
    pub label: String,
    /// Scale factor relative to the base unit, e.g. `1000.0`.
    pub factor: f64,
}

impl UnitScale {
    /// Create a unit entry.
    pub fn new(label: impl Into<String>, factor: f64) -> Self {
        Self {
            label: label.into(),
            factor,
        }
    }
}

/// An ordered list of display units for one quantity.
///
/// Entries must be non-empty and sorted ascending by `|factor|`; the linear
/// scan in [`Units::select`] relies on it. Sortedness is a documented caller
/// responsibility, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Units {
    entries: Vec<UnitScale>,
}

impl Units {
    /// Create a unit list from entries sorted ascending by `|factor|`.
    pub fn new(entries: Vec<UnitScale>) -> Self {
        debug_assert!(!entries.is_empty(), "unit list must not be empty");
        Self { entries }
    }

    /// Hz / kHz / MHz, base unit Hz.
    pub fn frequency() -> Self {
        Self::new(vec![
            UnitScale::new("Hz", 1.0),
            UnitScale::new("kHz", 1_000.0),
            UnitScale::new("MHz", 1_000_000.0),
        ])
    }

    /// ms / s, base unit ms.
    pub fn duration() -> Self {
        Self::new(vec![
            UnitScale::new("ms", 1.0),
            UnitScale::new("s", 1_000.0),
        ])
    }

    /// The unit entries in ascending-|factor| order.
    pub fn entries(&self) -> &[UnitScale] {
        &self.entries
    }

    /// The largest-scale unit not exceeding `value`'s magnitude.
    ///
    /// Scans for the first entry whose `|factor|` exceeds `|value|` and
    /// returns the entry before it; if the first entry already exceeds the
    /// value, the first entry is returned, and if none does, the last.
    pub fn select(&self, value: f64) -> &UnitScale {
        let i = self
            .entries
            .iter()
            .position(|u| u.factor.abs() > value.abs())
            .unwrap_or(self.entries.len());
        &self.entries[i.saturating_sub(1)]
    }

    fn find(&self, label: &str) -> Option<&UnitScale> {
        self.entries.iter().find(|u| u.label == label)
    }
}

/// The largest-scale unit in `units` not exceeding `value`'s magnitude.
/// See [`Units::select`].
pub fn select_unit<'a>(units: &'a Units, value: f64) -> &'a UnitScale {
    units.select(value)
}

/// How a control's value is rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitSpec {
    /// Plain number, no unit.
    None,
    /// Fixed suffix appended verbatim, e.g. `"Hz"`.
    Suffix(String),
    /// Auto-scaled unit list, e.g. Hz/kHz.
    List(Units),
}

/// Result of parsing free-form user text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    /// The value in base units.
    pub raw_value: f64,
    /// Canonical display text for the parsed value.
    pub display: String,
    /// The display unit label (empty when `UnitSpec::None`).
    pub unit: String,
}

/// Parse free-form user text into a raw value plus canonical display text.
///
/// Never fails; malformed input degrades to a default so a live text field
/// always has some valid interpretation:
///
/// - [`UnitSpec::None`]: the trimmed input parsed as a number (`0` when
///   unparseable); the display is the trimmed input verbatim.
/// - [`UnitSpec::Suffix`]: the leading numeric token (fallback `"0"`) with
///   the suffix appended.
/// - [`UnitSpec::List`]: `number [unit-word]`. A known unit word scales the
///   number into base units; an unknown or missing word leaves it in base
///   units. Either way the best-fit display unit is re-selected and the
///   scaled value formatted with `digits` precision when given. When the
///   input matches nothing at all, the result is `raw_value = 0` with the
///   first unit's scale factor as the display text. That fallback
///   reproduces long-standing behavior that existing fields rely on, quirky
///   as the rendered constant looks; callers that dislike it should
///   pre-validate the input.
pub fn parse_value(input: &str, units: &UnitSpec, digits: Option<usize>) -> ParsedValue {
    match units {
        UnitSpec::None => {
            let trimmed = input.trim();
            ParsedValue {
                raw_value: trimmed.parse().unwrap_or(0.0),
                display: trimmed.to_string(),
                unit: String::new(),
            }
        }

        UnitSpec::Suffix(suffix) => {
            let token = leading_number_regex()
                .find(input)
                .map(|m| m.as_str())
                .unwrap_or("0");
            ParsedValue {
                raw_value: token.parse().unwrap_or(0.0),
                display: format!("{}{}", token, suffix),
                unit: suffix.clone(),
            }
        }

        UnitSpec::List(units) => match number_with_unit_regex().captures(input.trim()) {
            Some(caps) => {
                let number: f64 = caps[1].parse().unwrap_or(0.0);
                let word = &caps[3];
                let raw_value = match units.find(word) {
                    Some(unit) if !word.is_empty() => number * unit.factor,
                    _ => number,
                };
                let (display, unit) = scaled_display(units, raw_value, digits);
                ParsedValue {
                    raw_value,
                    display,
                    unit,
                }
            }
            None => {
                let first = &units.entries()[0];
                ParsedValue {
                    raw_value: 0.0,
                    display: first.factor.to_string(),
                    unit: first.label.clone(),
                }
            }
        },
    }
}

/// Format a raw value as display text (no parsing involved).
pub fn format_value(value: f64, units: &UnitSpec, digits: Option<usize>) -> String {
    match units {
        UnitSpec::None => number_text(value, digits),
        UnitSpec::Suffix(suffix) => format!("{}{}", number_text(value, digits), suffix),
        UnitSpec::List(units) => scaled_display(units, value, digits).0,
    }
}

fn scaled_display(units: &Units, raw_value: f64, digits: Option<usize>) -> (String, String) {
    let best = units.select(raw_value);
    let scaled = raw_value / best.factor;
    let display = format!("{}{}", number_text(scaled, digits), best.label);
    (display, best.label.clone())
}

fn number_text(value: f64, digits: Option<usize>) -> String {
    match digits {
        Some(d) => format!("{:.prec$}", value, prec = d),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq() -> UnitSpec {
        UnitSpec::List(Units::frequency())
    }

    #[test]
    fn test_select_unit_boundaries() {
        let units = Units::frequency();
        assert_eq!(units.select(999.0).label, "Hz");
        assert_eq!(units.select(1000.0).label, "kHz");
        assert_eq!(units.select(999_999.0).label, "kHz");
        assert_eq!(units.select(1_000_000.0).label, "MHz");
        // First entry already exceeds the magnitude: stay on the first
        assert_eq!(units.select(0.5).label, "Hz");
        // Nothing exceeds it: largest unit applies
        assert_eq!(units.select(1e12).label, "MHz");
        // Magnitude comparison ignores sign
        assert_eq!(units.select(-2000.0).label, "kHz");
    }

    #[test]
    fn test_parse_value_no_units() {
        let parsed = parse_value(" 12.5 ", &UnitSpec::None, None);
        assert_eq!(parsed.raw_value, 12.5);
        assert_eq!(parsed.display, "12.5");
        assert_eq!(parsed.unit, "");

        // Unparseable degrades to zero, text kept verbatim
        let parsed = parse_value("-", &UnitSpec::None, None);
        assert_eq!(parsed.raw_value, 0.0);
        assert_eq!(parsed.display, "-");
    }

    #[test]
    fn test_parse_value_suffix() {
        let hz = UnitSpec::Suffix("Hz".to_string());
        let parsed = parse_value("440", &hz, None);
        assert_eq!(parsed.raw_value, 440.0);
        assert_eq!(parsed.display, "440Hz");
        assert_eq!(parsed.unit, "Hz");

        // Leading token wins, junk after it is dropped
        let parsed = parse_value("-12.5 dB nonsense", &hz, None);
        assert_eq!(parsed.raw_value, -12.5);
        assert_eq!(parsed.display, "-12.5Hz");

        // No numeric token at all falls back to "0"
        let parsed = parse_value("abc", &hz, None);
        assert_eq!(parsed.raw_value, 0.0);
        assert_eq!(parsed.display, "0Hz");
    }

    #[test]
    fn test_parse_value_unit_list() {
        let parsed = parse_value("1500", &freq(), None);
        assert_eq!(parsed.raw_value, 1500.0);
        assert_eq!(parsed.display, "1.5kHz");
        assert_eq!(parsed.unit, "kHz");

        let parsed = parse_value("2 kHz", &freq(), None);
        assert_eq!(parsed.raw_value, 2000.0);
        assert_eq!(parsed.display, "2kHz");

        let parsed = parse_value("440Hz", &freq(), Some(1));
        assert_eq!(parsed.raw_value, 440.0);
        assert_eq!(parsed.display, "440.0Hz");

        // Unknown unit word: number treated as already in base units
        let parsed = parse_value("250 bogons", &freq(), None);
        assert_eq!(parsed.raw_value, 250.0);
        assert_eq!(parsed.display, "250Hz");
        assert_eq!(parsed.unit, "Hz");
    }

    #[test]
    fn test_parse_value_unit_list_fallback_quirk() {
        // Total parse failure renders the first unit's scale factor
        let parsed = parse_value("", &freq(), None);
        assert_eq!(parsed.raw_value, 0.0);
        assert_eq!(parsed.display, "1");
        assert_eq!(parsed.unit, "Hz");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.5, &UnitSpec::None, None), "3.5");
        assert_eq!(format_value(3.5, &UnitSpec::None, Some(2)), "3.50");

        let db = UnitSpec::Suffix("dB".to_string());
        assert_eq!(format_value(-6.0, &db, None), "-6dB");
        assert_eq!(format_value(-6.0, &db, Some(1)), "-6.0dB");

        assert_eq!(format_value(1500.0, &freq(), None), "1.5kHz");
        assert_eq!(format_value(1500.0, &freq(), Some(2)), "1.50kHz");
        assert_eq!(format_value(440.0, &freq(), None), "440Hz");
    }

    #[test]
    fn test_units_duration_preset() {
        let units = Units::duration();
        assert_eq!(units.select(250.0).label, "ms");
        assert_eq!(units.select(1500.0).label, "s");
        assert_eq!(format_value(1500.0, &UnitSpec::List(units), Some(1)), "1.5s");
    }
}
