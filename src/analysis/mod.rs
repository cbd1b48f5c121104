//! Interval analysis stages
//!
//! Four pure stages composed linearly: chromatic evaluation, diatonic step
//! counting, staff (unaltered) interval derivation, and classification.

pub mod chromatic;
pub mod classify;
pub mod staff;
pub mod steps;

pub use chromatic::{chromatic_distance, chromatic_value};
pub use classify::interval;
pub use staff::staff_interval;
pub use steps::diatonic_step_distance;
