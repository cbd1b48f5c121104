//! Labeled musical intervals from Kern-style pitch tokens
//!
//! Converts pairs of pitches in compact Kern notation (letter case and
//! repetition encode the octave, `#`/`-` runs encode accidentals, `r` is a
//! rest) into labeled intervals: a quality (Perfect/Major/minor or an
//! Augmented/Diminished run), a 1-based size, and a direction sign.
//!
//! ```
//! use kern_intervals::interval;
//!
//! assert_eq!(interval("c", "e").unwrap().to_string(), "+M3");
//! assert_eq!(interval("c", "e-").unwrap().to_string(), "+m3");
//! assert_eq!(interval("e", "c").unwrap().to_string(), "-M3");
//! ```
//!
//! Everything is a pure function over its arguments; there is no shared
//! state and the library is freely callable from concurrent threads. This
//! crate logs through the `log` facade and never installs a logger itself.

pub mod analysis;
pub mod errors;
pub mod models;
pub mod parse;

// Re-export the public API
pub use analysis::{
    chromatic_distance, chromatic_value, diatonic_step_distance, interval, staff_interval,
};
pub use errors::{IntervalError, ParseError};
pub use models::{Direction, IntervalLabel, KernPitch, Letter, NotePitch, Quality};
pub use parse::parse_pitch;
