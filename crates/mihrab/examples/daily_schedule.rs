//! Prints today's prayer schedule and the countdown to the next prayer
//! for a fixed location.
//!
//! ```sh
//! cargo run -p mihrab --example daily_schedule
//! ```

use chrono::Utc;
use mihrab::prelude::*;
use mihrab::{compute_prayer_times, format_clock_time, local_day, local_utc_offset_hours};

fn main() {
    let jakarta = Coordinate::new_unchecked(-6.2088, 106.8456);
    let params = CalculationParams::default();

    let now = Utc::now();
    let today = local_day(jakarta, now);
    let offset = local_utc_offset_hours(jakarta);
    let times = compute_prayer_times(today, jakarta, &params);

    println!("Prayer times for {today} at {jakarta} (mean-time offset {offset:+.2}h)\n");
    for event in times.events() {
        println!(
            "  {:<8} {}  ({})",
            event.prayer.name(),
            format_clock_time(event.time, offset),
            event.prayer.arabic_name()
        );
    }

    match next_prayer(&times, jakarta, &params, now) {
        Some(next) => println!(
            "\nNext: {} in {}",
            next.prayer,
            format_time_remaining(next.time, now)
        ),
        None => println!("\nNext prayer unavailable"),
    }

    if let Some(current) = current_prayer(&times, now) {
        println!("Current: {}", current.prayer);
    }
}
