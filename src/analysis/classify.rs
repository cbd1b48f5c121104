//! Interval classification
//!
//! Combines the chromatic distance, diatonic step count, and staff interval
//! of two pitch tokens into a labeled interval. The alteration (actual
//! semitones minus the unaltered staff span) decides between the natural
//! quality and an Augmented/Diminished run.

use crate::analysis::chromatic::{require_note, semitone_value};
use crate::analysis::staff::staff_interval_of;
use crate::analysis::steps::step_distance;
use crate::errors::IntervalError;
use crate::models::{Direction, IntervalLabel, Quality};

/// Natural quality of each chromatic residue within the octave; the
/// tritone (6) has none
const NATURAL_QUALITIES: [Option<Quality>; 12] = [
    Some(Quality::Perfect),  // 0 unison
    Some(Quality::Minor),    // 1 minor second
    Some(Quality::Major),    // 2 major second
    Some(Quality::Minor),    // 3 minor third
    Some(Quality::Major),    // 4 major third
    Some(Quality::Perfect),  // 5 fourth
    None,                    // 6 tritone
    Some(Quality::Perfect),  // 7 fifth
    Some(Quality::Minor),    // 8 minor sixth
    Some(Quality::Major),    // 9 major sixth
    Some(Quality::Minor),    // 10 minor seventh
    Some(Quality::Major),    // 11 major seventh
];

fn natural_quality(semitones: i32) -> Option<Quality> {
    NATURAL_QUALITIES[(semitones.abs() % 12) as usize]
}

/// Classify the interval between two pitch tokens
///
/// Examples: `interval("c", "e")` is `+M3`, `interval("c", "f#")` is `+A4`,
/// and reversing a pair flips only the sign. Rests and malformed tokens
/// fail with the corresponding error.
pub fn interval(from: &str, to: &str) -> Result<IntervalLabel, IntervalError> {
    let a = require_note(from)?;
    let b = require_note(to)?;

    let steps = step_distance(&a, &b);
    let chrom = semitone_value(&b) - semitone_value(&a);
    let staff = staff_interval_of(&a, &b);
    let mut alteration = chrom - staff;

    // A major interval narrows to minor before any diminished labeling, so
    // the quality change absorbs one half step of the alteration.
    if natural_quality(staff) == Some(Quality::Major) {
        if alteration < 0 && chrom >= 0 {
            alteration += 1;
        } else if alteration > 0 && chrom <= 0 {
            alteration -= 1;
        }
    }

    // Chromatic motion decides the direction; enharmonic unisons fall back
    // to the diatonic step sign.
    let sign = if chrom != 0 { chrom.signum() } else { steps.signum() };
    let direction = if sign >= 0 {
        Direction::Ascending
    } else {
        Direction::Descending
    };

    log::debug!(
        "interval {from:?}->{to:?}: steps={steps} chrom={chrom} staff={staff} alteration={alteration}"
    );

    let quality = if (alteration > 0 && sign >= 0) || (alteration < 0 && sign < 0) {
        Quality::Augmented(alteration.unsigned_abs())
    } else if (alteration < 0 && sign >= 0) || (alteration > 0 && sign < 0) {
        Quality::Diminished(alteration.unsigned_abs())
    } else {
        natural_quality(chrom).ok_or(IntervalError::NoNaturalQuality { semitones: chrom })?
    };

    Ok(IntervalLabel {
        direction,
        quality,
        size: steps.unsigned_abs() + 1,
    })
}
