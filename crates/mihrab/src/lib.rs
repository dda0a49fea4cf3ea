//! # Mihrab
//!
//! Prayer-time and qibla calculations as pure functions of coordinate,
//! date and time - the computational core of a religious-companion
//! application, with no platform, timezone-database or network dependency
//! in the math itself.
//!
//! This crate is a facade that re-exports functionality from the `mihrab`
//! ecosystem.
//!
//! ## Crates
//!
//! - `mihrab-types`: value types (Coordinate, PrayerTimeSet, etc.)
//! - `mihrab-astronomy`: solar position and prayer-time computation
//! - `mihrab-qibla`: great-circle bearing, distance and compass alignment
//! - `mihrab-schedule`: next/current prayer and countdown formatting
//! - `mihrab-network`: location providers (optional, `geo` feature)
//!
//! ## Usage
//!
//! ```rust
//! use mihrab::prelude::*;
//! use chrono::NaiveDate;
//!
//! let jakarta = Coordinate::new(-6.2088, 106.8456)?;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let times = date.prayer_times(jakarta)?;
//!
//! assert!(times.fajr.unwrap() < times.dhuhr);
//! # Ok::<(), MihrabError>(())
//! ```

pub use mihrab_core::*;
