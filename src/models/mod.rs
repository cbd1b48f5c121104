//! Data models for pitch and interval analysis
//!
//! This module contains the parsed-pitch and interval-label types shared
//! by the parser and the analysis stages.

pub mod interval;
pub mod pitch;

// Re-export commonly used types
pub use interval::{Direction, IntervalLabel, Quality};
pub use pitch::{KernPitch, Letter, NotePitch};
