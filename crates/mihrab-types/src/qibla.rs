use serde::{Deserialize, Serialize};

/// Direction and distance from a coordinate to the Kaaba.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaResult {
    /// Initial great-circle bearing in degrees, [0, 360). Not constant
    /// along the path.
    pub bearing: f64,
    /// Great-circle distance in kilometers.
    pub distance_km: f64,
}

/// Whether a live device heading matches the qibla bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentState {
    /// Normalized device heading in degrees, [0, 360).
    pub heading: f64,
    /// Alignment tolerance in degrees.
    pub tolerance: f64,
    /// True iff the circular distance between heading and bearing is
    /// within the tolerance.
    pub aligned: bool,
}
