//! MIDI note-name utilities for piano-family widgets.
//!
//! Note names have the form `letter[accidental]octave` (`"C#4"`, `"Bbb-1"`),
//! with MIDI note 60 = `"C4"`. Rendering always spells sharps, never flats,
//! so `note_name`/`note_number` round-trip exactly for canonical forms;
//! flat spellings parse to the same number as their sharp equivalent.
//!
//! Note numbers are unbounded integers in principle; the MIDI convention is
//! `0..=127` (`"C-1"` through `"G9"`), but octaves outside that range map
//! consistently.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ControlError, ControlResult};

/// `letter`, optional accidental (up to two sharps or flats), signed octave.
const NOTE_NAME_PATTERN: &str = r"^([a-gA-G])(#{0,2}|b{0,2})(-?\d+)$";

static NOTE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_name_regex() -> &'static Regex {
    NOTE_NAME_REGEX.get_or_init(|| Regex::new(NOTE_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Chromatic note names starting at A, sharps only.
const NOTE_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// An accidental modifying a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Natural,
    Sharp,
    DoubleSharp,
    Flat,
    DoubleFlat,
}

impl Accidental {
    /// Semitone offset: `#` +1, `##` +2, `b` -1, `bb` -2.
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
        }
    }

    /// The accidental's textual form.
    pub fn as_str(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
        }
    }

    fn from_token(token: &str) -> Self {
        match token {
            "#" => Accidental::Sharp,
            "##" => Accidental::DoubleSharp,
            "b" => Accidental::Flat,
            "bb" => Accidental::DoubleFlat,
            _ => Accidental::Natural,
        }
    }
}

/// A note name split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNoteName {
    /// Note letter, normalized to uppercase `A..=G`.
    pub letter: char,
    /// Accidental, [`Accidental::Natural`] when absent.
    pub accidental: Accidental,
    /// Signed octave number.
    pub octave: i32,
}

/// Parse a note name into letter, accidental, and octave.
///
/// Fails with [`ControlError::UnparseableNoteName`] when the input does not
/// match the grammar; there is no partial parsing. Callers are expected to
/// only pass names they generated themselves, so a failure here is an
/// assertion against internal misuse.
///
/// # Example
///
/// ```
/// use dialkit_core::midi::{parse_note_name, Accidental};
///
/// let parsed = parse_note_name("Bbb-1").unwrap();
/// assert_eq!(parsed.letter, 'B');
/// assert_eq!(parsed.accidental, Accidental::DoubleFlat);
/// assert_eq!(parsed.octave, -1);
/// ```
pub fn parse_note_name(name: &str) -> ControlResult<ParsedNoteName> {
    let caps = note_name_regex()
        .captures(name)
        .ok_or_else(|| ControlError::UnparseableNoteName(name.to_string()))?;
    let letter = caps[1]
        .chars()
        .next()
        .ok_or_else(|| ControlError::UnparseableNoteName(name.to_string()))?
        .to_ascii_uppercase();
    let accidental = Accidental::from_token(&caps[2]);
    let octave: i32 = caps[3]
        .parse()
        .map_err(|_| ControlError::UnparseableNoteName(name.to_string()))?;
    Ok(ParsedNoteName {
        letter,
        accidental,
        octave,
    })
}

/// MIDI note number for a note name. `"C4"` is 60.
///
/// Fails when the name does not parse. Flat spellings map to the same
/// number as their sharp equivalent (`"Bbb4"` == `"A4"` == 69).
pub fn note_number(name: &str) -> ControlResult<i32> {
    let parsed = parse_note_name(name)?;
    let letter_index = match parsed.letter {
        'A' => 0,
        'B' => 2,
        'C' => 3,
        'D' => 5,
        'E' => 7,
        'F' => 8,
        'G' => 10,
        // The regex only admits A..=G
        _ => unreachable!("note letter out of range"),
    };
    let offset = (letter_index - 3_i32).rem_euclid(12);
    Ok(offset + 12 * (parsed.octave + 1) + parsed.accidental.semitones())
}

/// Note name for a MIDI note number, always spelled with sharps.
///
/// `note_name(60)` is `"C4"`, `note_name(0)` is `"C-1"`. Inverse of
/// [`note_number`] for canonical (sharp) spellings; the accidental spelling
/// of the input is not recoverable.
pub fn note_name(number: i32) -> String {
    let number = number as i64;
    let index = (number + 3).rem_euclid(12) as usize;
    let octave = number.div_euclid(12) - 1;
    format!("{}{}", NOTE_NAMES[index], octave)
}
