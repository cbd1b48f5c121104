//! Interval label model
//!
//! The final product of interval analysis: a direction sign, a diatonic
//! quality, and a 1-based size. Display renders the compact label form used
//! by Kern-derived tools: "+P1", "-M3", "+A4", "+AA4".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interval direction
///
/// Unisons and other chromatically-zero intervals count as ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Sign character used in the label form
    pub fn symbol(&self) -> char {
        match self {
            Direction::Ascending => '+',
            Direction::Descending => '-',
        }
    }
}

/// Diatonic interval quality
///
/// Augmented and Diminished carry their alteration magnitude: an interval a
/// whole step wider than perfect is doubly augmented, rendered "AA".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented(u32),
    Diminished(u32),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Perfect => f.write_str("P"),
            Quality::Major => f.write_str("M"),
            Quality::Minor => f.write_str("m"),
            Quality::Augmented(n) => f.write_str(&"A".repeat(*n as usize)),
            Quality::Diminished(n) => f.write_str(&"D".repeat(*n as usize)),
        }
    }
}

/// A labeled musical interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalLabel {
    pub direction: Direction,
    pub quality: Quality,
    /// 1-based diatonic size (1=unison, 2=second, ...)
    pub size: u32,
}

impl fmt::Display for IntervalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.direction.symbol(), self.quality, self.size)
    }
}
