//! Time interval formatting
//!
//! Intervals are plain seconds (`f64`), the same unit [`subtract_moments`]
//! produces. Formatting shows either a whole day count or hours and minutes;
//! seconds are never shown except by [`format_colon`].
//!
//! [`subtract_moments`]: crate::utils::datetime::subtract_moments

use crate::constants::{INFINITE_INTERVAL, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use serde::{Deserialize, Serialize};

/// Verbosity of unit labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormattingMode {
    /// `1d`, `2h 5m`
    #[default]
    Short,
    /// `1 day`, `2 hrs 5 mins`
    Medium,
    /// `1 day`, `2 hours 5 minutes`
    Full,
}

impl FormattingMode {
    fn day(self, plural: bool) -> &'static str {
        match (self, plural) {
            (FormattingMode::Short, _) => "d",
            (_, true) => " days",
            (_, false) => " day",
        }
    }

    fn hour(self, plural: bool) -> &'static str {
        match (self, plural) {
            (FormattingMode::Short, _) => "h",
            (FormattingMode::Medium, true) => " hrs",
            (FormattingMode::Medium, false) => " hr",
            (FormattingMode::Full, true) => " hours",
            (FormattingMode::Full, false) => " hour",
        }
    }

    fn minute(self, plural: bool) -> &'static str {
        match (self, plural) {
            (FormattingMode::Short, _) => "m",
            (FormattingMode::Medium, true) => " mins",
            (FormattingMode::Medium, false) => " min",
            (FormattingMode::Full, true) => " minutes",
            (FormattingMode::Full, false) => " minute",
        }
    }
}

/// Whole seconds, truncated toward zero
pub fn whole_seconds(seconds: f64) -> i64 {
    seconds as i64
}

pub fn whole_minutes(seconds: f64) -> i64 {
    whole_seconds(seconds) / SECONDS_PER_MINUTE
}

pub fn whole_hours(seconds: f64) -> i64 {
    whole_seconds(seconds) / SECONDS_PER_HOUR
}

pub fn whole_days(seconds: f64) -> i64 {
    whole_seconds(seconds) / SECONDS_PER_DAY
}

/// Format an interval in seconds.
///
/// * negative → `"∞"`
/// * one day or more → day count only
/// * zero → `"0"` plus the plural minute label
/// * otherwise hours and remaining minutes, each omitted when zero
///
/// The minute label's plural form follows the total minute count, not the
/// remainder shown, so `3660` seconds reads `1h 1m` but `1 hr 1 mins` in
/// medium mode.
pub fn format_interval(seconds: f64, mode: FormattingMode) -> String {
    if seconds < 0.0 {
        return INFINITE_INTERVAL.to_string();
    }
    if seconds >= SECONDS_PER_DAY as f64 {
        let days = whole_days(seconds);
        return format!("{}{}", days, mode.day(days != 1));
    }
    if seconds == 0.0 {
        return format!("0{}", mode.minute(true));
    }

    let minutes = whole_minutes(seconds);
    let hours = minutes / 60;
    let remaining_minutes = minutes % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{}{}", hours, mode.hour(hours != 1)));
    }
    if remaining_minutes > 0 {
        parts.push(format!("{}{}", remaining_minutes, mode.minute(minutes != 1)));
    }
    parts.join(" ")
}

/// Format a chrono duration with [`format_interval`]
pub fn format_duration(duration: chrono::Duration, mode: FormattingMode) -> String {
    format_interval(duration.num_milliseconds() as f64 / 1000.0, mode)
}

/// Stopwatch-style rendering: `h:mm:ss` once an hour has passed, else `m:ss`.
pub fn format_colon(seconds: f64) -> String {
    let total_minutes = whole_minutes(seconds);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let secs = whole_seconds(seconds) % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
