//! Message timestamps.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, TimeZone};

/// Wall-clock time a transcript message was created.
pub type Timestamp = DateTime<Local>;

/// Current local time.
pub fn now() -> Timestamp {
    Local::now()
}

/// Render a timestamp the way the transcript shows it (`HH:MM`).
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M").to_string()
}
