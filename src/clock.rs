//! Wall-clock formatting for the header clock slot. Pure formatting, no state.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Formats a seconds-of-day value as `HH:MM:SS`, wrapping at 24 hours.
///
/// # Examples
///
/// ```
/// use home_dash::clock::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(19 * 3600 + 5 * 60 + 7), "19:05:07");
/// ```
pub fn format_hms(seconds_of_day: u64) -> String {
    let s = seconds_of_day % SECONDS_PER_DAY;
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Current UTC seconds-of-day from the system clock.
pub fn now_seconds_of_day() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() % SECONDS_PER_DAY)
        .unwrap_or(0)
}
