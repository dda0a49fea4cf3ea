use crate::prayer::Prayer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from mihrab operations.
///
/// All failures are local: an undefined solar event for one field never
/// invalidates the rest of the day's prayer set, and no operation retries
/// internally.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum MihrabError {
    /// Latitude or longitude outside the valid range, or not finite.
    #[error("invalid coordinate: latitude {lat}, longitude {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// The sun never reaches the depression angle required for this event
    /// on this date at this latitude (polar day or night).
    #[error("{prayer} is undefined on {date} at this latitude")]
    UndefinedSolarEvent { prayer: Prayer, date: NaiveDate },

    /// Failure in an optional network provider.
    #[error("network error: {0}")]
    Network(String),
}
