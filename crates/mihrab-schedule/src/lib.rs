//! Prayer schedule queries over a computed [`PrayerTimeSet`].
//!
//! Selection of the next and current prayer relative to a reference
//! instant, countdown formatting for a 1-second UI tick, and the
//! longitude-based local-day arithmetic that decides when the daily set
//! must be recomputed. No timezone database: local civil time is
//! approximated as UTC + longitude / 15°.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use mihrab_astronomy::compute_prayer_times;
use mihrab_types::{CalculationParams, Coordinate, NamedPrayer, Prayer, PrayerTimeSet};

/// The first canonical prayer strictly after `reference`.
///
/// A prayer at exactly `reference` counts as already passed. Undefined
/// events are skipped. When nothing remains in the set, the next calendar
/// date is recomputed **at the same coordinate** and its first defined
/// canonical prayer (normally Fajr) is returned.
///
/// Returns `None` only when the date cannot be advanced, i.e. at the end
/// of the representable calendar.
pub fn next_prayer(
    set: &PrayerTimeSet,
    coordinate: Coordinate,
    params: &CalculationParams,
    reference: DateTime<Utc>,
) -> Option<NamedPrayer> {
    for prayer in Prayer::CANONICAL {
        if let Some(time) = set.time_of(prayer) {
            if time > reference {
                return Some(NamedPrayer::new(prayer, time));
            }
        }
    }

    // All of today's prayers have passed; roll over to the next date.
    let tomorrow = compute_prayer_times(set.date.succ_opt()?, coordinate, params);
    Prayer::CANONICAL
        .into_iter()
        .find_map(|p| tomorrow.time_of(p).map(|t| NamedPrayer::new(p, t)))
}

/// The latest canonical prayer whose time is at or before `reference`, or
/// `None` before Fajr.
pub fn current_prayer(set: &PrayerTimeSet, reference: DateTime<Utc>) -> Option<NamedPrayer> {
    Prayer::CANONICAL
        .into_iter()
        .rev()
        .find_map(|p| {
            set.time_of(p)
                .filter(|&t| t <= reference)
                .map(|t| NamedPrayer::new(p, t))
        })
}

/// Renders the time from `reference` until `target` as a short countdown.
///
/// "Now" when the target has passed, "Hh Mm" from one hour up, "Mm Ss"
/// from one minute up, "Ss" below that. Components are floored, never
/// rounded, so the countdown cannot overshoot the event.
pub fn format_time_remaining(target: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let diff = target - reference;
    if diff <= Duration::zero() {
        return "Now".to_string();
    }

    let total = diff.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Renders an instant as a 12-hour wall-clock string at the given UTC
/// offset, e.g. "06:05 PM".
pub fn format_clock_time(time: DateTime<Utc>, utc_offset_hours: f64) -> String {
    let local = time + offset_duration(utc_offset_hours);
    local.format("%I:%M %p").to_string()
}

/// Longitude-based UTC offset in hours (15° per hour, no timezone
/// database).
pub fn local_utc_offset_hours(coordinate: Coordinate) -> f64 {
    coordinate.lng / 15.0
}

/// The local civil date at `instant` for the coordinate's implied offset.
pub fn local_day(coordinate: Coordinate, instant: DateTime<Utc>) -> NaiveDate {
    (instant + offset_duration(local_utc_offset_hours(coordinate))).date_naive()
}

/// The UTC instant of the coordinate's next local midnight - the moment
/// the daily prayer set goes stale and must be recomputed.
pub fn next_rollover(coordinate: Coordinate, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let offset = offset_duration(local_utc_offset_hours(coordinate));
    let midnight = local_day(coordinate, instant)
        .succ_opt()?
        .and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight) - offset)
}

fn offset_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}
