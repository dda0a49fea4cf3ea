//! Qibla bearing and distance for a handful of cities, plus a simulated
//! compass sweep showing the alignment window.
//!
//! ```sh
//! cargo run -p mihrab --example qibla_compass
//! ```

use mihrab::prelude::*;
use mihrab::{DEFAULT_TOLERANCE, check_alignment, relative_angle};

fn main() {
    let cities = [
        ("Jakarta", Coordinate::new_unchecked(-6.2088, 106.8456)),
        ("London", Coordinate::new_unchecked(51.5074, -0.1278)),
        ("New York", Coordinate::new_unchecked(40.7128, -74.0060)),
        ("Tokyo", Coordinate::new_unchecked(35.6762, 139.6503)),
    ];

    for (name, coord) in cities {
        let data = qibla_data(coord);
        println!(
            "{name:<9} bearing {:>7.2}°  distance {:>8.1} km",
            data.bearing, data.distance_km
        );
    }

    let jakarta = Coordinate::new_unchecked(-6.2088, 106.8456);
    let bearing = qibla_bearing(jakarta);
    println!("\nSweeping a compass in Jakarta (bearing {bearing:.2}°):");
    for step in 0..12 {
        let heading = f64::from(step) * 30.0;
        let state = check_alignment(heading, bearing, DEFAULT_TOLERANCE);
        let needle = relative_angle(bearing, heading);
        let marker = if state.aligned { " <-- aligned" } else { "" };
        println!("  heading {heading:>5.1}°  turn {needle:>6.1}°{marker}");
    }
}
