//! Core value types for the mihrab calculation engine.
//!
//! Everything here is plain data: coordinates, calculation parameters,
//! prayer identifiers and the per-day result set. The actual computations
//! live in `mihrab-astronomy`, `mihrab-qibla` and `mihrab-schedule`.

mod coordinate;
mod error;
mod prayer;
mod qibla;

pub use coordinate::{Coordinate, KAABA};
pub use error::MihrabError;
pub use prayer::{NamedPrayer, Prayer, PrayerTimeSet};
pub use qibla::{AlignmentState, QiblaResult};

use serde::{Deserialize, Serialize};

/// Solar depression angles selecting a prayer-time convention.
///
/// Angles are in degrees and negative (below the horizon). The default is
/// the Muslim World League convention: Fajr at -18°, Isha at -17°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Sun altitude defining the onset of Fajr.
    pub fajr_angle: f64,
    /// Sun altitude defining the onset of Isha.
    pub isha_angle: f64,
}

impl CalculationParams {
    pub const fn new(fajr_angle: f64, isha_angle: f64) -> Self {
        Self { fajr_angle, isha_angle }
    }

    /// Muslim World League: -18° / -17°.
    pub const fn mwl() -> Self {
        Self::new(-18.0, -17.0)
    }

    /// Islamic Society of North America: -15° / -15°.
    pub const fn isna() -> Self {
        Self::new(-15.0, -15.0)
    }

    /// Egyptian General Authority of Survey: -19.5° / -17.5°.
    pub const fn egyptian() -> Self {
        Self::new(-19.5, -17.5)
    }

    /// University of Islamic Sciences, Karachi: -18° / -18°.
    pub const fn karachi() -> Self {
        Self::new(-18.0, -18.0)
    }
}

impl Default for CalculationParams {
    fn default() -> Self {
        Self::mwl()
    }
}
