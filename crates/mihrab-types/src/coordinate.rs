use crate::error::MihrabError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on Earth's surface in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lng: f64,
}

/// The Kaaba in Mecca. The constants are fixed; conformance tests against
/// published qibla bearings depend on them exactly.
pub const KAABA: Coordinate = Coordinate::new_unchecked(21.4225, 39.8262);

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    /// Returns [`MihrabError::InvalidCoordinate`] when latitude is outside
    /// [-90, 90], longitude is outside [-180, 180], or either is not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, MihrabError> {
        let coord = Self::new_unchecked(lat, lng);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(MihrabError::InvalidCoordinate { lat, lng })
        }
    }

    /// Creates a coordinate without validation, for trusted inputs.
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}
