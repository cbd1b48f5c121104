//! Diatonic step evaluation
//!
//! Counts signed letter-name distance between two pitches. Letters are not
//! evenly spaced in semitones, so the raw mod-7 letter difference can
//! disagree with the chromatic distance in sign or octave count; the
//! corrections here keep the two consistent. The arithmetic deliberately
//! follows conventional interval-naming edge cases (a descending seventh
//! that is chromatically zero reads as a second, not a seventh) rather than
//! any closed formula, and should not be "simplified".

use std::cmp::Ordering;

use crate::analysis::chromatic::{require_note, semitone_value};
use crate::errors::IntervalError;
use crate::models::NotePitch;

/// Signed diatonic step distance between two pitch tokens
///
/// One step per letter name: c→d is 1, c→e is 2, an octave is 7. Rests
/// fail with `RestOperand`.
pub fn diatonic_step_distance(from: &str, to: &str) -> Result<i32, IntervalError> {
    let a = require_note(from)?;
    let b = require_note(to)?;
    Ok(step_distance(&a, &b))
}

pub(crate) fn step_distance(a: &NotePitch, b: &NotePitch) -> i32 {
    let letter_delta = b.letter.index() - a.letter.index();
    let octave_delta = b.octave - a.octave;
    let chrom = semitone_value(b) - semitone_value(a);

    let mut step = letter_delta.rem_euclid(7) + 7 * octave_delta;

    // Diatonic motion must not point against chromatic motion.
    if step.signum() == -chrom.signum() {
        step = descending_residue(letter_delta);
    }
    // A near-octave residue over zero semitones is an enharmonic unison
    // spelled a letter apart; read it as a descending second, not an
    // ascending seventh.
    if step.rem_euclid(7) == 6 && chrom == 0 {
        step = descending_residue(letter_delta);
    }

    // Re-align to the octave count the chromatic distance implies; the
    // residue arithmetic above only ever sees a single octave.
    step + 7 * round_half_even(7 * chrom - 12 * step, 84)
}

/// The mod-7 residue of `letter_delta` chosen in the descending direction,
/// in (-7, 0]
fn descending_residue(letter_delta: i32) -> i32 {
    let residue = letter_delta.rem_euclid(7);
    if residue == 0 {
        0
    } else {
        residue - 7
    }
}

/// Round `numerator / denominator` to the nearest integer, ties to even
///
/// Exact integer form of rounding chrom/12 - step/7; `denominator` must be
/// positive.
fn round_half_even(numerator: i32, denominator: i32) -> i32 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    match (2 * remainder).cmp(&denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    }
}
