//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use mihrab_astronomy::compute_prayer_times;
use mihrab_types::{CalculationParams, Coordinate, MihrabError, PrayerTimeSet};

/// Extends `NaiveDate` with prayer-time computation.
///
/// Unlike the raw engine, these entry points validate the coordinate, so
/// an out-of-range latitude or longitude surfaces as
/// [`MihrabError::InvalidCoordinate`] instead of a plausible-looking wrong
/// answer.
pub trait PrayerDateExt {
    /// Prayer times for this date with the default (Muslim World League)
    /// convention.
    fn prayer_times(&self, coordinate: Coordinate) -> Result<PrayerTimeSet, MihrabError>;

    /// Prayer times for this date with explicit calculation parameters.
    fn prayer_times_with(
        &self,
        coordinate: Coordinate,
        params: &CalculationParams,
    ) -> Result<PrayerTimeSet, MihrabError>;
}

impl PrayerDateExt for NaiveDate {
    fn prayer_times(&self, coordinate: Coordinate) -> Result<PrayerTimeSet, MihrabError> {
        self.prayer_times_with(coordinate, &CalculationParams::default())
    }

    fn prayer_times_with(
        &self,
        coordinate: Coordinate,
        params: &CalculationParams,
    ) -> Result<PrayerTimeSet, MihrabError> {
        let coordinate = Coordinate::new(coordinate.lat, coordinate.lng)?;
        Ok(compute_prayer_times(*self, coordinate, params))
    }
}
