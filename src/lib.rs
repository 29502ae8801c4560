//! datekit - day-part greetings, weekday lookup and relative date formatting
//!
//! This library adds classification and human-readable formatting on top of
//! `chrono`. It never implements calendars or time zones itself: every moment
//! is a `chrono::DateTime` and every field is read through chrono.
//!
//! # Modules
//!
//! * [`weekday`] - Weekday lookup from Gregorian indexes and display names
//! * [`day_part`] - Six-way split of the day with emoji and greetings
//! * [`relative`] - "today" / "tomorrow" / weekday / short-date shorthand
//! * [`clock`] - Source of the current moment
//! * [`config`] - Application configuration management
//! * [`utils`] - Interval formatting, date helpers and collection helpers

/// Source of the current moment
pub mod clock;

/// Configuration module for managing display and logging settings
pub mod config;

/// Shared constants: emoji, greetings, format patterns and time units
pub mod constants;

/// Day part classification
pub mod day_part;

/// Error types for parsing and formatting
pub mod error;

/// Logging setup for file output
pub mod logger;

/// Relative date shorthand
pub mod relative;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Weekday lookup and display
pub mod weekday;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day_part::DayPart;
pub use error::DateKitError;
pub use relative::{relative_shorthand, RelativeDateFormatter};
pub use utils::interval::{format_interval, FormattingMode};
pub use weekday::Weekday;
