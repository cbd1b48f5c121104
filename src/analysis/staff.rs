//! Staff interval evaluation
//!
//! The semitone span a diatonic step count would cover with no accidentals
//! in play. Only unisons, fourths, and fifths have a single "perfect"
//! semitone count; the other step residues have two natural sizes (major
//! and minor), so they fall back to the natural chromatic distance and
//! leave the major/minor decision to the classifier.

use crate::analysis::chromatic::{require_note, semitone_value};
use crate::analysis::steps::step_distance;
use crate::errors::IntervalError;
use crate::models::NotePitch;

/// Unaltered semitone distance implied by the diatonic step count of two
/// pitch tokens
pub fn staff_interval(from: &str, to: &str) -> Result<i32, IntervalError> {
    let a = require_note(from)?;
    let b = require_note(to)?;
    Ok(staff_interval_of(&a, &b))
}

pub(crate) fn staff_interval_of(a: &NotePitch, b: &NotePitch) -> i32 {
    let a = a.natural();
    let b = b.natural();
    let steps = step_distance(&a, &b);
    let octaves = 12 * steps.div_euclid(7);
    match steps.rem_euclid(7) {
        0 => octaves,
        3 => 5 + octaves,
        4 => 7 + octaves,
        _ => semitone_value(&b) - semitone_value(&a),
    }
}
