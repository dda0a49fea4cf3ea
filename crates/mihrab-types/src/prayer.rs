use crate::error::MihrabError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// The six daily solar events. Sunrise is a marker, not a prayer; the five
/// canonical prayers are listed by [`Prayer::CANONICAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// The five canonical prayers in chronological order (Sunrise excluded).
    pub const CANONICAL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// All six events in chronological order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Sunrise => "الشروق",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Prayer::Sunrise)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One prayer event with its absolute time. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NamedPrayer {
    pub prayer: Prayer,
    pub time: DateTime<Utc>,
}

impl NamedPrayer {
    pub const fn new(prayer: Prayer, time: DateTime<Utc>) -> Self {
        Self { prayer, time }
    }
}

/// The solar events of one calendar date at one coordinate.
///
/// Dhuhr (solar noon) exists on every date; the other five carry `None`
/// when the sun never reaches the required altitude at that latitude
/// (polar day or night). A `None` is the explicit undefined marker - the
/// engine never substitutes a clamped timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimeSet {
    /// The civil date the set was computed for.
    pub date: NaiveDate,
    pub fajr: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub dhuhr: DateTime<Utc>,
    pub asr: Option<DateTime<Utc>>,
    pub maghrib: Option<DateTime<Utc>>,
    pub isha: Option<DateTime<Utc>>,
}

impl PrayerTimeSet {
    /// Returns the time of one event, `None` when undefined.
    pub fn time_of(&self, prayer: Prayer) -> Option<DateTime<Utc>> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => Some(self.dhuhr),
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Returns the time of one event, surfacing the undefined case as an
    /// error for callers that require it.
    pub fn require(&self, prayer: Prayer) -> Result<DateTime<Utc>, MihrabError> {
        self.time_of(prayer).ok_or(MihrabError::UndefinedSolarEvent {
            prayer,
            date: self.date,
        })
    }

    /// All defined events in chronological order, Sunrise included.
    pub fn events(&self) -> SmallVec<[NamedPrayer; 6]> {
        Prayer::ALL
            .into_iter()
            .filter_map(|p| self.time_of(p).map(|t| NamedPrayer::new(p, t)))
            .collect()
    }
}
