//! Aggregator for the mihrab calculation crates.
//!
//! Re-exports the value types, the prayer-time engine, the qibla engine
//! and the schedule helpers under one roof, plus two conveniences built on
//! top: [`PrayerDateExt`] for date-first call sites and the
//! [`UpcomingPrayers`] iterator for walking prayers across day boundaries.

pub use mihrab_types::{
    AlignmentState, CalculationParams, Coordinate, KAABA, MihrabError, NamedPrayer, Prayer,
    PrayerTimeSet, QiblaResult,
};

pub use mihrab_astronomy::{HORIZON_ALTITUDE, compute_prayer_times, solar};

pub use mihrab_qibla::{
    DEFAULT_TOLERANCE, EARTH_RADIUS_KM, check_alignment, distance_to_kaaba, is_aligned,
    normalize_angle, qibla_bearing, qibla_data, relative_angle,
};

pub use mihrab_schedule::{
    current_prayer, format_clock_time, format_time_remaining, local_day, local_utc_offset_hours,
    next_prayer, next_rollover,
};

#[cfg(feature = "geo")]
pub use mihrab_network as network;

mod extension;
pub use extension::PrayerDateExt;

pub mod prelude {
    pub use crate::PrayerDateExt;
    pub use crate::upcoming_prayers;
    pub use mihrab_qibla::{is_aligned, normalize_angle, qibla_bearing, qibla_data};
    pub use mihrab_schedule::{current_prayer, format_time_remaining, next_prayer};
    pub use mihrab_types::*;
}

use chrono::{DateTime, Utc};

/// Lazily yields every canonical prayer after `start`, in order, crossing
/// day boundaries by recomputing the set for each new date at the same
/// coordinate.
///
/// The iterator is effectively unbounded; it ends only at the edge of the
/// representable calendar.
pub struct UpcomingPrayers {
    coordinate: Coordinate,
    params: CalculationParams,
    cursor: DateTime<Utc>,
    set: PrayerTimeSet,
}

impl Iterator for UpcomingPrayers {
    type Item = NamedPrayer;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for prayer in Prayer::CANONICAL {
                if let Some(time) = self.set.time_of(prayer) {
                    if time > self.cursor {
                        self.cursor = time;
                        return Some(NamedPrayer::new(prayer, time));
                    }
                }
            }
            let next_date = self.set.date.succ_opt()?;
            self.set = compute_prayer_times(next_date, self.coordinate, &self.params);
        }
    }
}

/// Iterator over the canonical prayers after `start` at a coordinate.
pub fn upcoming_prayers(
    coordinate: Coordinate,
    params: CalculationParams,
    start: DateTime<Utc>,
) -> UpcomingPrayers {
    let date = mihrab_schedule::local_day(coordinate, start);
    let set = compute_prayer_times(date, coordinate, &params);
    UpcomingPrayers { coordinate, params, cursor: start, set }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const JAKARTA: Coordinate = Coordinate::new_unchecked(-6.2088, 106.8456);

    #[test]
    fn upcoming_prayers_are_strictly_increasing() {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        let prayers: Vec<NamedPrayer> =
            upcoming_prayers(JAKARTA, CalculationParams::default(), start)
                .take(12)
                .collect();

        assert_eq!(prayers.len(), 12);
        assert!(prayers[0].time > start);
        for pair in prayers.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn upcoming_prayers_cycle_through_the_canonical_five() {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let prayers: Vec<Prayer> = upcoming_prayers(JAKARTA, CalculationParams::default(), start)
            .take(10)
            .map(|p| p.prayer)
            .collect();

        // Two full days' worth of canonical prayers, Sunrise never appears.
        assert!(!prayers.contains(&Prayer::Sunrise));
        let fajr_count = prayers.iter().filter(|&&p| p == Prayer::Fajr).count();
        assert_eq!(fajr_count, 2);
    }

    #[test]
    fn first_upcoming_matches_next_prayer() {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        let params = CalculationParams::default();
        let date = local_day(JAKARTA, start);
        let set = compute_prayer_times(date, JAKARTA, &params);

        let from_iter = upcoming_prayers(JAKARTA, params, start).next().unwrap();
        let from_query = next_prayer(&set, JAKARTA, &params, start).unwrap();
        assert_eq!(from_iter, from_query);
    }
}
