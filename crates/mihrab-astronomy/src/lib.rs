//! Prayer time calculation from solar position.
//!
//! A low-precision solar model (declination and equation of time to within
//! a few seconds of time) feeds the standard hour-angle formula. This is
//! accurate to well under a minute for prayer times, without an ephemeris
//! dependency.

pub mod prayer;
pub mod solar;

pub use prayer::{HORIZON_ALTITUDE, compute_prayer_times};
