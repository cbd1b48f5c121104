//! Error types for pitch parsing and interval analysis
//!
//! Defines the error hierarchy: malformed tokens fail at parse time
//! (ParseError), while analysis failures (rest operands, the tritone's
//! missing natural quality) surface as IntervalError.

use thiserror::Error;

/// Errors produced while parsing a Kern pitch token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token is the empty string
    #[error("empty pitch token")]
    EmptyToken,

    /// Token does not start with a pitch letter (a-g, A-G) or the rest symbol
    #[error("invalid pitch letter {0:?}")]
    InvalidLetter(char),

    /// Letter run mixes different letters or cases (e.g. "cd", "cC")
    #[error("inconsistent letter run in token {0:?}")]
    MixedLetters(String),

    /// Token carries both sharps and flats (e.g. "c#-")
    #[error("token {0:?} mixes sharps and flats")]
    MixedAccidentals(String),

    /// Characters remain after the letter and accidental runs
    #[error("unexpected trailing characters in token {0:?}")]
    TrailingInput(String),
}

/// Top-level error for the interval analysis stages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// A supplied token failed to parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A rest was passed to a stage that needs a sounding pitch
    #[error("rest has no chromatic pitch value")]
    RestOperand,

    /// The interval spans a tritone with no alteration, so none of
    /// Perfect/Major/minor applies
    #[error("interval of {semitones} semitones has no natural quality")]
    NoNaturalQuality { semitones: i32 },
}
