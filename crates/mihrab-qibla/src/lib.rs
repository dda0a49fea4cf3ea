//! Qibla direction and distance on the great circle.
//!
//! Pure spherical geodesy toward the fixed Kaaba reference point, plus the
//! angle arithmetic a compass UI needs: normalization, relative turn angle
//! and wraparound-safe alignment.

use mihrab_types::{AlignmentState, Coordinate, QiblaResult};

pub use mihrab_types::KAABA;

/// Mean Earth radius in kilometers, as used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default alignment tolerance in degrees.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Initial great-circle bearing from a coordinate toward the Kaaba, in
/// degrees [0, 360).
///
/// A coordinate exactly at the Kaaba has no defined bearing; it resolves
/// to 0.0 rather than NaN.
pub fn qibla_bearing(from: Coordinate) -> f64 {
    if from == KAABA {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = KAABA.lat.to_radians();
    let dlon = (KAABA.lng - from.lng).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_angle(y.atan2(x).to_degrees())
}

/// Haversine distance from a coordinate to the Kaaba in kilometers.
pub fn distance_to_kaaba(from: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = KAABA.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (KAABA.lng - from.lng).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Both qibla values for a coordinate.
pub fn qibla_data(from: Coordinate) -> QiblaResult {
    QiblaResult {
        bearing: qibla_bearing(from),
        distance_km: distance_to_kaaba(from),
    }
}

/// Normalizes an angle into [0, 360), correctly for negative inputs.
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// The rotation from the device heading to the qibla bearing, in degrees
/// [0, 360). This is the needle angle a compass UI renders.
pub fn relative_angle(bearing: f64, heading: f64) -> f64 {
    normalize_angle(bearing - heading)
}

/// True when the device heading is within `tolerance` degrees of the
/// bearing, measured circularly so that e.g. 358° and 2° are 4° apart.
pub fn is_aligned(heading: f64, bearing: f64, tolerance: f64) -> bool {
    let diff = (normalize_angle(heading) - normalize_angle(bearing)).abs();
    diff <= tolerance || diff >= 360.0 - tolerance
}

/// Evaluates alignment of a heading against a bearing.
pub fn check_alignment(heading: f64, bearing: f64, tolerance: f64) -> AlignmentState {
    let heading = normalize_angle(heading);
    AlignmentState {
        heading,
        tolerance,
        aligned: is_aligned(heading, bearing, tolerance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAKARTA: Coordinate = Coordinate::new_unchecked(-6.2088, 106.8456);

    #[test]
    fn jakarta_bearing_golden() {
        // Pinned output of the initial-bearing formula; west-northwest.
        let bearing = qibla_bearing(JAKARTA);
        assert!((bearing - 295.1517).abs() < 0.01, "bearing {bearing}");
    }

    #[test]
    fn reference_city_bearings() {
        let london = Coordinate::new_unchecked(51.5074, -0.1278);
        let new_york = Coordinate::new_unchecked(40.7128, -74.0060);
        assert!((qibla_bearing(london) - 118.987).abs() < 0.01);
        assert!((qibla_bearing(new_york) - 58.482).abs() < 0.01);
    }

    #[test]
    fn at_kaaba_bearing_is_zero_not_nan() {
        assert_eq!(qibla_bearing(KAABA), 0.0);
    }

    #[test]
    fn at_kaaba_distance_is_zero() {
        assert_eq!(distance_to_kaaba(KAABA), 0.0);
    }

    #[test]
    fn jakarta_distance_golden() {
        let d = distance_to_kaaba(JAKARTA);
        assert!((d - 7920.13).abs() < 1.0, "distance {d}");
    }

    #[test]
    fn distance_never_negative() {
        let antipode = Coordinate::new_unchecked(-21.4225, -140.1738);
        let d = distance_to_kaaba(antipode);
        assert!(d > 0.0);
        // Half the Earth's circumference at R = 6371.
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }

    #[test]
    fn normalize_handles_negatives() {
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(-360.0), 0.0);
        assert_eq!(normalize_angle(720.0), 0.0);
        assert_eq!(normalize_angle(370.5), 10.5);
    }

    #[test]
    fn alignment_wraparound() {
        assert!(is_aligned(2.0, 358.0, 5.0));
        assert!(is_aligned(358.0, 2.0, 5.0));
        assert!(!is_aligned(10.0, 358.0, 5.0));
        assert!(is_aligned(0.0, 360.0, 5.0));
    }

    #[test]
    fn alignment_plain_case() {
        assert!(is_aligned(100.0, 103.0, 5.0));
        assert!(!is_aligned(100.0, 106.0, 5.0));
        // Boundary is inclusive.
        assert!(is_aligned(100.0, 105.0, 5.0));
    }

    #[test]
    fn relative_angle_is_needle_rotation() {
        assert_eq!(relative_angle(295.0, 295.0), 0.0);
        assert_eq!(relative_angle(295.0, 300.0), 355.0);
        assert_eq!(relative_angle(10.0, 350.0), 20.0);
    }

    #[test]
    fn check_alignment_normalizes_heading() {
        let state = check_alignment(-2.0, 358.0, DEFAULT_TOLERANCE);
        assert_eq!(state.heading, 358.0);
        assert!(state.aligned);
    }

    #[test]
    fn qibla_data_composes() {
        let data = qibla_data(JAKARTA);
        assert_eq!(data.bearing, qibla_bearing(JAKARTA));
        assert_eq!(data.distance_km, distance_to_kaaba(JAKARTA));
    }
}
