//! Constants used throughout the crate
//!
//! This module centralizes display strings, format patterns and other constant
//! values so the classification tables and formatters share one source.

// Day part emoji
pub const EMOJI_MORNING: &str = "🌱";
pub const EMOJI_MIDDAY: &str = "☀️";
pub const EMOJI_AFTERNOON: &str = "⛅️";
pub const EMOJI_EVENING: &str = "🌙";
pub const EMOJI_NIGHT: &str = "🌒";
pub const EMOJI_MIDNIGHT: &str = "✨";

// Day part greetings
pub const GREETING_MORNING: &str = "An early start!";
pub const GREETING_MIDDAY: &str = "Good morning!";
pub const GREETING_AFTERNOON: &str = "Good afternoon!";
pub const GREETING_EVENING: &str = "Good evening!";
pub const GREETING_NIGHT: &str = "Good evening!";
pub const GREETING_MIDNIGHT: &str = "Up this late?";

// Relative date phrases
pub const RELATIVE_TODAY: &str = "today";
pub const RELATIVE_TOMORROW: &str = "tomorrow";

/// Returned by the interval formatter for negative durations
pub const INFINITE_INTERVAL: &str = "∞";

// Date format patterns (chrono strftime syntax)
/// Short US-style date, e.g. `6/14/24`
pub const SHORT_DATE_FORMAT: &str = "%-m/%-d/%y";
/// Long date, e.g. `Friday, June 14, 2024`
pub const LONG_DATE_FORMAT: &str = "%A, %B %d, %Y";
/// Hour and minute without meridian, e.g. `3:05`
pub const HOUR_MINUTE_FORMAT: &str = "%-I:%M";
/// Default clock time shown by the CLI, e.g. `3:05 PM`
pub const TIME_FORMAT: &str = "%-I:%M %p";
/// Date format accepted on the command line and in date-only input
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

// Time units
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Relative shorthand shows a weekday name below this many days ahead
pub const WEEKDAY_NAME_HORIZON_DAYS: i64 = 6;

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_MISSING_AT_VALUE: &str = "❌ --at requires a date argument";
