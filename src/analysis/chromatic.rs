//! Chromatic pitch evaluation
//!
//! Maps a parsed pitch to an absolute semitone value anchored at middle
//! c = 60, MIDI-style: one octave is 12 semitones and each accidental
//! shifts the value by one.

use crate::errors::IntervalError;
use crate::models::{KernPitch, NotePitch};
use crate::parse::parse_pitch;

/// Semitone value of a sounding pitch
pub(crate) fn semitone_value(note: &NotePitch) -> i32 {
    60 + note.letter.natural_semitone() + 12 * note.octave + note.accidentals
}

/// Absolute semitone value of a parsed pitch
///
/// Rests have no pitch value and fail with `RestOperand`.
pub fn chromatic_value(pitch: &KernPitch) -> Result<i32, IntervalError> {
    match pitch {
        KernPitch::Rest => Err(IntervalError::RestOperand),
        KernPitch::Note(note) => Ok(semitone_value(note)),
    }
}

/// Signed semitone distance between two pitch tokens
pub fn chromatic_distance(from: &str, to: &str) -> Result<i32, IntervalError> {
    let a = require_note(from)?;
    let b = require_note(to)?;
    Ok(semitone_value(&b) - semitone_value(&a))
}

/// Parse a token and reject rests
pub(crate) fn require_note(token: &str) -> Result<NotePitch, IntervalError> {
    match parse_pitch(token)? {
        KernPitch::Rest => Err(IntervalError::RestOperand),
        KernPitch::Note(note) => Ok(note),
    }
}
