//! Kern pitch token parser
//!
//! Token grammar: `rest | letter-run accidental-run?`. The letter run is one
//! letter of a-g repeated in a single case; run length and case encode the
//! octave. The accidental run is sharps (`#`) or flats (`-`), one semitone
//! each. A leading `r` marks a rest.
//!
//! Tokens that mix letters, cases, or accidental signs are rejected rather
//! than given a meaning the notation never assigns them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::models::{KernPitch, Letter, NotePitch};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-gA-G]+)([#-]*)$").expect("pitch token regex is valid"));

/// Parse a Kern pitch token into a rest or a sounding pitch
///
/// Examples:
///   "c"   → middle-octave c
///   "cc#" → c one octave up, sharpened
///   "CC-" → c two octaves down, flattened
///   "r"   → rest
pub fn parse_pitch(token: &str) -> Result<KernPitch, ParseError> {
    let first = match token.chars().next() {
        Some(c) => c,
        None => return Err(ParseError::EmptyToken),
    };

    // Rests are recognized by their leading character alone; any duration
    // or layout characters after it belong to the caller's notation layer.
    if first == 'r' {
        return Ok(KernPitch::Rest);
    }

    let captures = match TOKEN_RE.captures(token) {
        Some(captures) => captures,
        None => {
            if Letter::from_char(first).is_none() {
                return Err(ParseError::InvalidLetter(first));
            }
            return Err(ParseError::TrailingInput(token.to_string()));
        }
    };

    let letters = &captures[1];
    if letters.chars().any(|c| c != first) {
        return Err(ParseError::MixedLetters(token.to_string()));
    }
    let letter = Letter::from_char(first).ok_or(ParseError::InvalidLetter(first))?;

    let accidentals = parse_accidentals(&captures[2], token)?;

    // Run length and case encode the octave: the reference octave itself is
    // a single lowercase letter, so lowercase runs start counting at zero
    // while uppercase runs start one octave down.
    let lowercase = first.is_ascii_lowercase();
    let magnitude = letters.len() as i32 - lowercase as i32;
    let octave = if lowercase { magnitude } else { -magnitude };

    Ok(KernPitch::Note(NotePitch {
        letter,
        octave,
        accidentals,
    }))
}

/// Count a uniform accidental run: sharps positive, flats negative
fn parse_accidentals(run: &str, token: &str) -> Result<i32, ParseError> {
    let sharps = run.chars().filter(|&c| c == '#').count() as i32;
    let flats = run.chars().filter(|&c| c == '-').count() as i32;
    if sharps > 0 && flats > 0 {
        return Err(ParseError::MixedAccidentals(token.to_string()));
    }
    Ok(sharps - flats)
}
