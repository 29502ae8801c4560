//! Relative date shorthand
//!
//! Describes a target moment relative to "now" the way a to-do list would:
//!
//! | Calendar days ahead | Output |
//! |---|---|
//! | 0, target not after now | `today` |
//! | 0, target later today | `in 2 hrs 5 mins` |
//! | 1 | `tomorrow` |
//! | 2..=5 | weekday name, e.g. `Thursday` |
//! | anything else (including the past) | short date, e.g. `6/14/24` |

use crate::clock::Clock;
use crate::config::DisplayConfig;
use crate::constants::{RELATIVE_TODAY, RELATIVE_TOMORROW, SHORT_DATE_FORMAT, WEEKDAY_NAME_HORIZON_DAYS};
use crate::error::Result;
use crate::utils::datetime::{days_between, render, shorthand, subtract_moments, validate_format};
use crate::utils::interval::{format_interval, FormattingMode};
use crate::weekday::Weekday;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Formats relative date shorthand with a configurable short-date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeDateFormatter {
    short_date_format: String,
    interval_mode: FormattingMode,
}

impl Default for RelativeDateFormatter {
    fn default() -> Self {
        Self {
            short_date_format: SHORT_DATE_FORMAT.to_string(),
            interval_mode: FormattingMode::Medium,
        }
    }
}

impl RelativeDateFormatter {
    /// Create a formatter, rejecting short-date patterns chrono cannot render
    pub fn new(short_date_format: impl Into<String>, interval_mode: FormattingMode) -> Result<Self> {
        let short_date_format = short_date_format.into();
        validate_format(&short_date_format)?;
        Ok(Self {
            short_date_format,
            interval_mode,
        })
    }

    /// Build from the display section of the configuration
    pub fn from_config(display: &DisplayConfig) -> Result<Self> {
        Self::new(display.short_date_format.clone(), display.interval_mode)
    }

    pub fn short_date_format(&self) -> &str {
        &self.short_date_format
    }

    /// Describe `target` relative to `now`
    pub fn relative_shorthand<Tz>(&self, target: &DateTime<Tz>, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let amount = days_between(now, target);
        log::trace!("Relative shorthand: target is {} calendar days ahead", amount);

        match amount {
            0 => {
                let time_left = subtract_moments(target, now);
                if time_left <= 0.0 {
                    RELATIVE_TODAY.to_string()
                } else {
                    format!("in {}", format_interval(time_left, self.interval_mode))
                }
            }
            1 => RELATIVE_TOMORROW.to_string(),
            amount if amount > 1 && amount < WEEKDAY_NAME_HORIZON_DAYS => {
                Weekday::from_moment(target).name().to_string()
            }
            _ => render(target, &self.short_date_format).unwrap_or_else(|_| shorthand(target)),
        }
    }

    /// Describe `target` relative to the clock's current moment
    pub fn relative_to_now<Tz>(&self, target: &DateTime<Tz>, clock: &impl Clock) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let now = clock.now().with_timezone(&target.timezone());
        self.relative_shorthand(target, &now)
    }
}

/// Relative shorthand with the default short-date pattern and medium intervals
pub fn relative_shorthand<Tz>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    RelativeDateFormatter::default().relative_shorthand(target, now)
}
