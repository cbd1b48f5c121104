//! Pitch token parsing

pub mod kern;

pub use kern::parse_pitch;
