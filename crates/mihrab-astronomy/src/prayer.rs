//! Daily prayer time computation.

use crate::solar::{hour_angle, julian_day, solar_position};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use mihrab_types::{CalculationParams, Coordinate, PrayerTimeSet};

/// Apparent sun altitude at sunrise/sunset: atmospheric refraction plus
/// the solar semidiameter.
pub const HORIZON_ALTITUDE: f64 = -0.833;

/// Solves for the time (hours UTC from the date's midnight) at which the
/// sun reaches `altitude` degrees, on the morning or evening side of solar
/// noon. Two passes: solve with the sun evaluated at an estimated event
/// time, then re-solve with the sun at the first solution.
fn event_time(
    jd: f64,
    coords: Coordinate,
    altitude: f64,
    morning: bool,
    initial_hours: f64,
) -> Option<f64> {
    let mut t = initial_hours;
    for _ in 0..2 {
        let sun = solar_position(jd + t / 24.0);
        let noon = 12.0 - coords.lng / 15.0 - sun.equation_of_time;
        let ha = hour_angle(coords.lat, sun.declination, altitude)?;
        t = if morning { noon - ha } else { noon + ha };
    }
    Some(t)
}

/// Asr by the Shafi shadow rule: the sun altitude whose cotangent is
/// 1 + tan|latitude - declination| (shadow length one plus the noon
/// shadow).
fn asr_time(jd: f64, coords: Coordinate) -> Option<f64> {
    let mut t = 13.0;
    for _ in 0..2 {
        let sun = solar_position(jd + t / 24.0);
        let shadow = 1.0 + (coords.lat - sun.declination).abs().to_radians().tan();
        let altitude = (1.0 / shadow).atan().to_degrees();
        let ha = hour_angle(coords.lat, sun.declination, altitude)?;
        let noon = 12.0 - coords.lng / 15.0 - sun.equation_of_time;
        t = noon + ha;
    }
    Some(t)
}

/// Solar noon in hours UTC from the date's midnight, refined once with the
/// sun evaluated at the first estimate.
fn solar_noon(jd: f64, coords: Coordinate) -> f64 {
    let sun = solar_position(jd + 0.5);
    let noon = 12.0 - coords.lng / 15.0 - sun.equation_of_time;
    let sun = solar_position(jd + noon / 24.0);
    12.0 - coords.lng / 15.0 - sun.equation_of_time
}

/// Computes the six solar events for one date at one coordinate.
///
/// Events the sun never reaches at that latitude on that date (polar day
/// or night) come back as `None`; Dhuhr is always defined. Times are
/// absolute UTC instants; for eastern or western longitudes they may fall
/// on the neighboring UTC calendar day while remaining within the local
/// civil day.
///
/// Never panics for finite input, poles included.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use mihrab_types::{CalculationParams, Coordinate};
/// use mihrab_astronomy::compute_prayer_times;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let jakarta = Coordinate::new_unchecked(-6.2088, 106.8456);
/// let times = compute_prayer_times(date, jakarta, &CalculationParams::default());
///
/// assert!(times.fajr.unwrap() < times.dhuhr);
/// ```
pub fn compute_prayer_times(
    date: NaiveDate,
    coords: Coordinate,
    params: &CalculationParams,
) -> PrayerTimeSet {
    let jd = julian_day(date);

    let dhuhr = solar_noon(jd, coords);
    let fajr = event_time(jd, coords, params.fajr_angle, true, 5.0);
    let sunrise = event_time(jd, coords, HORIZON_ALTITUDE, true, 6.0);
    let maghrib = event_time(jd, coords, HORIZON_ALTITUDE, false, 18.0);
    let isha = event_time(jd, coords, params.isha_angle, false, 18.0);
    let asr = asr_time(jd, coords);

    let base = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight exists"));
    let stamp = |hours: f64| base + Duration::milliseconds((hours * 3_600_000.0).round() as i64);

    PrayerTimeSet {
        date,
        fajr: fajr.map(stamp),
        sunrise: sunrise.map(stamp),
        dhuhr: stamp(dhuhr),
        asr: asr.map(stamp),
        maghrib: maghrib.map(stamp),
        isha: isha.map(stamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use mihrab_types::Prayer;

    const JAKARTA: Coordinate = Coordinate::new_unchecked(-6.2088, 106.8456);
    const MECCA: Coordinate = Coordinate::new_unchecked(21.4225, 39.8262);

    fn assert_close(actual: DateTime<Utc>, expected: DateTime<Utc>) {
        let diff = (actual - expected).num_seconds().abs();
        assert!(diff <= 120, "expected {expected}, got {actual} ({diff}s off)");
    }

    #[test]
    fn jakarta_golden_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let times = compute_prayer_times(date, JAKARTA, &CalculationParams::default());

        // Jakarta is UTC+7ish by longitude; Fajr and Sunrise land on the
        // previous UTC day.
        assert_close(times.fajr.unwrap(), Utc.with_ymd_and_hms(2024, 3, 14, 21, 48, 7).unwrap());
        assert_close(times.sunrise.unwrap(), Utc.with_ymd_and_hms(2024, 3, 14, 22, 57, 17).unwrap());
        assert_close(times.dhuhr, Utc.with_ymd_and_hms(2024, 3, 15, 5, 1, 28).unwrap());
        assert_close(times.asr.unwrap(), Utc.with_ymd_and_hms(2024, 3, 15, 8, 9, 31).unwrap());
        assert_close(times.maghrib.unwrap(), Utc.with_ymd_and_hms(2024, 3, 15, 11, 5, 33).unwrap());
        assert_close(times.isha.unwrap(), Utc.with_ymd_and_hms(2024, 3, 15, 12, 10, 40).unwrap());
    }

    #[test]
    fn mecca_golden_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let times = compute_prayer_times(date, MECCA, &CalculationParams::default());

        assert_close(times.fajr.unwrap(), Utc.with_ymd_and_hms(2024, 6, 15, 1, 13, 2).unwrap());
        assert_close(times.sunrise.unwrap(), Utc.with_ymd_and_hms(2024, 6, 15, 2, 38, 19).unwrap());
        assert_close(times.dhuhr, Utc.with_ymd_and_hms(2024, 6, 15, 9, 21, 17).unwrap());
        assert_close(times.asr.unwrap(), Utc.with_ymd_and_hms(2024, 6, 15, 12, 40, 52).unwrap());
        assert_close(times.maghrib.unwrap(), Utc.with_ymd_and_hms(2024, 6, 15, 16, 4, 18).unwrap());
        assert_close(times.isha.unwrap(), Utc.with_ymd_and_hms(2024, 6, 15, 17, 24, 23).unwrap());
    }

    #[test]
    fn events_strictly_ordered() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let times = compute_prayer_times(date, JAKARTA, &CalculationParams::default());
        let events = times.events();
        assert_eq!(events.len(), 6);
        for pair in events.windows(2) {
            assert!(pair[0].time < pair[1].time, "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn polar_midsummer_undefined_twilight() {
        // Longyearbyen in midsummer: the sun never sets, so sunrise,
        // maghrib and both twilight events are undefined. Dhuhr remains.
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let svalbard = Coordinate::new_unchecked(78.22, 15.63);
        let times = compute_prayer_times(date, svalbard, &CalculationParams::default());

        assert!(times.fajr.is_none());
        assert!(times.sunrise.is_none());
        assert!(times.maghrib.is_none());
        assert!(times.isha.is_none());
        assert!(times.time_of(Prayer::Dhuhr).is_some());
    }

    #[test]
    fn pole_does_not_panic() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let pole = Coordinate::new_unchecked(90.0, 0.0);
        let times = compute_prayer_times(date, pole, &CalculationParams::default());
        assert!(times.fajr.is_none());
        assert!(times.sunrise.is_none());
    }

    #[test]
    fn shallower_fajr_angle_is_later() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mwl = compute_prayer_times(date, JAKARTA, &CalculationParams::mwl());
        let isna = compute_prayer_times(date, JAKARTA, &CalculationParams::isna());
        // -15 degrees is reached later in the morning than -18.
        assert!(isna.fajr.unwrap() > mwl.fajr.unwrap());
        // ...and earlier in the evening.
        assert!(isna.isha.unwrap() < mwl.isha.unwrap());
    }
}
