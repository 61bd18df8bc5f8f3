//! Display helpers for entry timestamps and the dashboard greeting.
//!
//! All formatting is done in UTC; callers that want local time convert
//! before calling.

use chrono::{DateTime, Timelike, Utc};

/// "Good morning" before noon, "Good afternoon" before 18:00, else "Good evening"
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Greeting for the hour of `now`
pub fn greeting_at(now: DateTime<Utc>) -> &'static str {
    greeting(now.hour())
}

/// Whether two instants fall on the same calendar day
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// "Mar 5, 2024"
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// "9:05 AM"
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// "Today at 9:05 AM" for timestamps on `now`'s day, otherwise "Mar 5, 2024 9:05 AM"
pub fn format_date_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if is_same_day(timestamp, now) {
        format!("Today at {}", format_time(timestamp))
    } else {
        format!("{} {}", format_date(timestamp), format_time(timestamp))
    }
}
