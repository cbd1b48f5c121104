//! Parsed pitch model
//!
//! A Kern token decodes to either a rest or a sounding pitch: one scale
//! letter, a signed octave offset from the reference octave, and a signed
//! accidental count. Octave encoding follows Kern: lowercase letters sit at
//! or above the reference octave, uppercase below, and repetition extends
//! further in that direction ("c"=0, "cc"=+1, "C"=-1, "CC"=-2).

use serde::{Deserialize, Serialize};

/// The seven scale letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// Parse a letter from a single character (either case)
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_lowercase() {
            'a' => Some(Letter::A),
            'b' => Some(Letter::B),
            'c' => Some(Letter::C),
            'd' => Some(Letter::D),
            'e' => Some(Letter::E),
            'f' => Some(Letter::F),
            'g' => Some(Letter::G),
            _ => None,
        }
    }

    /// Cyclic position in alphabetical letter order (a=0 .. g=6)
    ///
    /// This is the ordering diatonic step counting works in, not scale
    /// order from c.
    pub fn index(&self) -> i32 {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 6,
        }
    }

    /// Natural semitone offset within the octave (c=0, d=2, e=4, f=5, g=7, a=9, b=11)
    pub fn natural_semitone(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Lowercase character for this letter
    pub fn as_char(&self) -> char {
        match self {
            Letter::A => 'a',
            Letter::B => 'b',
            Letter::C => 'c',
            Letter::D => 'd',
            Letter::E => 'e',
            Letter::F => 'f',
            Letter::G => 'g',
        }
    }
}

/// A sounding pitch: letter, octave offset, accidental count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotePitch {
    pub letter: Letter,
    /// Signed octaves from the reference octave (lowercase tokens >= 0,
    /// uppercase < 0)
    pub octave: i32,
    /// Positive for sharps, negative for flats
    pub accidentals: i32,
}

impl NotePitch {
    /// The same pitch with accidentals removed
    pub fn natural(&self) -> NotePitch {
        NotePitch {
            accidentals: 0,
            ..*self
        }
    }
}

/// A parsed Kern pitch token: either a rest or a sounding pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernPitch {
    Rest,
    Note(NotePitch),
}

impl KernPitch {
    pub fn is_rest(&self) -> bool {
        matches!(self, KernPitch::Rest)
    }

    /// The sounding pitch, if this is not a rest
    pub fn note(&self) -> Option<&NotePitch> {
        match self {
            KernPitch::Rest => None,
            KernPitch::Note(note) => Some(note),
        }
    }
}
