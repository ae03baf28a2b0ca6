//! Value formatters for timestamps, distances and durations.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` rendered in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Meters rendered as kilometers with one decimal, e.g. `"465.3 km"`.
#[derive(Debug, Clone, Copy)]
pub struct Kilometers(pub u64);

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.0 as f64 / 1000.0)
    }
}

/// Seconds rendered as whole hours and minutes, e.g. `"4h 38min"`.
/// Leftover seconds are truncated.
#[derive(Debug, Clone, Copy)]
pub struct HoursMinutes(pub u64);

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        write!(f, "{hours}h {minutes}min")
    }
}
