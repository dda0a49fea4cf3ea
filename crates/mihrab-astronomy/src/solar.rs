//! Low-precision solar position: declination and equation of time.
//!
//! Uses the NOAA/Almanac approximation of the sun's ecliptic longitude.
//! Good to about 1 arcminute of declination and a few seconds of equation
//! of time over the current century, which is more than enough for
//! minute-resolution prayer times.

use chrono::{Datelike, NaiveDate};

/// Julian day number of noon on J2000.0 (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Sun geometry for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time in hours (apparent minus mean solar time),
    /// wrapped to [-12, 12).
    pub equation_of_time: f64,
}

/// Julian day of the date's 00:00 UTC.
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut y = date.year() as f64;
    let mut m = date.month() as f64;
    let d = date.day() as f64;
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5
}

/// Solar declination and equation of time at a Julian day (with fraction).
pub fn solar_position(jd: f64) -> SolarPosition {
    let d = jd - J2000;

    // Mean anomaly and mean longitude of the sun.
    let g = (357.529 + 0.985_600_28 * d).rem_euclid(360.0).to_radians();
    let q = (280.459 + 0.985_647_36 * d).rem_euclid(360.0);

    // Apparent ecliptic longitude.
    let l = (q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
        .rem_euclid(360.0)
        .to_radians();

    // Mean obliquity of the ecliptic.
    let e = (23.439 - 0.000_000_36 * d).to_radians();

    let declination = (e.sin() * l.sin()).asin().to_degrees();

    // Right ascension in hours, same quadrant as l via atan2.
    let ra = ((e.cos() * l.sin()).atan2(l.cos()).to_degrees() / 15.0).rem_euclid(24.0);
    let equation_of_time = (q / 15.0 - ra + 12.0).rem_euclid(24.0) - 12.0;

    SolarPosition { declination, equation_of_time }
}

/// Hour angle (in hours from solar noon) at which the sun reaches the
/// given altitude, for an observer latitude and solar declination, all in
/// degrees.
///
/// Returns `None` when the altitude is never reached on that day (polar
/// day or night), or when the latitude puts the observer at a pole where
/// the formula degenerates.
pub fn hour_angle(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();
    let alt = altitude.to_radians();

    let cos_h = (alt.sin() - lat.sin() * decl.sin()) / (lat.cos() * decl.cos());
    if !cos_h.is_finite() || cos_h.abs() > 1.0 {
        return None;
    }
    Some(cos_h.acos().to_degrees() / 15.0)
}
