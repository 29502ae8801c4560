//! Date and time utility functions
//!
//! This module provides calendar arithmetic and human-readable formatting for
//! moments (`chrono::DateTime` in any time zone). Fields are always read in the
//! moment's own zone.

use crate::constants::*;
use crate::error::{DateKitError, Result};
use crate::weekday::Weekday;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use std::fmt::{Display, Write};

/// Whole calendar days from `from` to `to`, comparing local dates only.
///
/// 23:59 today and 00:01 tomorrow are one day apart.
pub fn days_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// Elapsed seconds from `rhs` to `lhs` (`lhs - rhs`)
pub fn subtract_moments<Tz: TimeZone>(lhs: &DateTime<Tz>, rhs: &DateTime<Tz>) -> f64 {
    let delta = lhs.clone().signed_duration_since(rhs.clone());
    delta.num_milliseconds() as f64 / 1000.0
}

/// Parse a moment in the local time zone
///
/// # Arguments
/// * `input` - RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`
///
/// # Returns
/// * `Result<DateTime<Local>>` - Parsed moment; date-only input is local midnight
pub fn parse_moment(input: &str) -> Result<DateTime<Local>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(input, &format!("{}T%H:%M:%S", INPUT_DATE_FORMAT))
        .or_else(|_| NaiveDateTime::parse_from_str(input, &format!("{} %H:%M:%S", INPUT_DATE_FORMAT)))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DateKitError::InvalidMoment(input.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DateKitError::NonexistentLocalTime(input.to_string()))
}

/// Check that chrono can render a strftime pattern.
///
/// Some specifiers (e.g. `%#z`) parse but cannot be rendered, so the pattern
/// is also rendered against a sample moment.
pub fn validate_format(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateKitError::InvalidFormat(pattern.to_string()));
    }
    let sample = Utc
        .with_ymd_and_hms(2024, 6, 14, 15, 5, 0)
        .single()
        .ok_or_else(|| DateKitError::InvalidFormat(pattern.to_string()))?;
    render(&sample, pattern).map(|_| ())
}

/// Render without panicking when chrono's `Display` reports an error
pub(crate) fn render<Tz>(moment: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut buf = String::new();
    write!(buf, "{}", moment.format(pattern)).map_err(|_| DateKitError::InvalidFormat(pattern.to_string()))?;
    Ok(buf)
}

/// Format a moment with a caller-supplied strftime pattern
pub fn format_moment<Tz>(moment: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    validate_format(pattern)?;
    render(moment, pattern)
}

/// Format a moment, substituting `am` / `pm` for `%p`.
///
/// Escaped `%%` sequences are left alone, so `%%p` stays a literal `%p`.
pub fn format_with_meridian<Tz>(moment: &DateTime<Tz>, pattern: &str, am: &str, pm: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let symbol = if moment.hour() < 12 { am } else { pm };
    let symbol = symbol.replace('%', "%%");

    let mut substituted = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            substituted.push(c);
            continue;
        }
        match chars.next() {
            Some('p') => substituted.push_str(&symbol),
            Some(next) => {
                substituted.push('%');
                substituted.push(next);
            }
            None => substituted.push('%'),
        }
    }
    format_moment(moment, &substituted)
}

/// Clock time rendered with a configurable pattern and English meridian symbols
pub fn clock_time<Tz>(moment: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_with_meridian(moment, pattern, "AM", "PM")
}

/// Long form, e.g. "Friday, June 14, 2024"
pub fn longhand<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    moment.format(LONG_DATE_FORMAT).to_string()
}

/// Short form, e.g. "6/14/24"
pub fn shorthand<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    moment.format(SHORT_DATE_FORMAT).to_string()
}

/// Zero-padded day of month and abbreviated month, e.g. ("04", "Jun")
pub fn day_month<Tz>(moment: &DateTime<Tz>) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    (moment.format("%d").to_string(), moment.format("%b").to_string())
}

/// 12-hour clock time and meridian, e.g. ("3:05", "PM")
pub fn hour_minute_meridian<Tz>(moment: &DateTime<Tz>) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    (moment.format(HOUR_MINUTE_FORMAT).to_string(), moment.format("%p").to_string())
}

/// Same calendar date at 23:59:59.
///
/// `None` when that local time does not exist in the moment's zone.
pub fn at_end_of_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let naive = moment.date_naive().and_hms_opt(23, 59, 59)?;
    moment.timezone().from_local_datetime(&naive).earliest()
}

/// Next occurrence of `weekday`, keeping the time of day.
///
/// A moment already on `weekday` moves a full week ahead unless
/// `consider_today` is set, in which case it is returned unchanged.
pub fn next_weekday<Tz: TimeZone>(moment: &DateTime<Tz>, weekday: Weekday, consider_today: bool) -> DateTime<Tz> {
    let from = i64::from(Weekday::from_moment(moment).code());
    let target = i64::from(weekday.code());
    let delta = (7 + target - from) % 7;
    if delta == 0 && consider_today {
        return moment.clone();
    }
    shift_days(moment, if delta == 0 { 7 } else { delta })
}

/// Previous occurrence of `weekday`, keeping the time of day.
///
/// Mirrors [`next_weekday`] in the other direction.
pub fn previous_weekday<Tz: TimeZone>(
    moment: &DateTime<Tz>,
    weekday: Weekday,
    consider_today: bool,
) -> DateTime<Tz> {
    let from = i64::from(Weekday::from_moment(moment).code());
    let target = i64::from(weekday.code());
    let delta = (7 + from - target) % 7;
    if delta == 0 && consider_today {
        return moment.clone();
    }
    shift_days(moment, -(if delta == 0 { 7 } else { delta }))
}

/// Move by whole calendar days on the local wall clock.
///
/// Falls back to a fixed 24h-per-day shift when the wall-clock time is
/// skipped in the target day.
fn shift_days<Tz: TimeZone>(moment: &DateTime<Tz>, days: i64) -> DateTime<Tz> {
    let shifted = moment.naive_local() + Duration::days(days);
    moment
        .timezone()
        .from_local_datetime(&shifted)
        .earliest()
        .unwrap_or_else(|| moment.clone() + Duration::days(days))
}

/// Full calendar months from `from` to `to` (0 when `to` precedes `from`)
fn full_months_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    if to <= from {
        return 0;
    }
    let months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month());
    if months <= 0 {
        return 0;
    }
    let Ok(step) = u32::try_from(months) else {
        return 0;
    };
    match from.checked_add_months(Months::new(step)) {
        Some(shifted) if shifted <= to => months,
        _ => months - 1,
    }
}

/// Describe how long ago `moment` was, relative to `now`.
///
/// Years and months are counted on the calendar; weeks and smaller units
/// from elapsed time. Moments in the future read "Just now".
pub fn time_ago_since<Tz: TimeZone>(moment: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let elapsed = now.clone().signed_duration_since(moment.clone()).num_seconds();
    if elapsed < 0 {
        return "Just now".to_string();
    }

    let months = full_months_between(moment.naive_local(), now.naive_local());
    let years = months / 12;
    let weeks = elapsed / SECONDS_PER_WEEK;
    let days = elapsed / SECONDS_PER_DAY;
    let hours = elapsed / SECONDS_PER_HOUR;
    let minutes = elapsed / SECONDS_PER_MINUTE;

    if years >= 2 {
        format!("{} years ago", years)
    } else if years == 1 {
        "Last year".to_string()
    } else if months >= 2 {
        format!("{} months ago", months)
    } else if months == 1 {
        "Last month".to_string()
    } else if weeks >= 2 {
        format!("{} weeks ago", weeks)
    } else if weeks == 1 {
        "Last week".to_string()
    } else if days >= 2 {
        format!("{} days ago", days)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if hours >= 2 {
        format!("{} hours ago", hours)
    } else if hours == 1 {
        "An hour ago".to_string()
    } else if minutes >= 2 {
        format!("{} minutes ago", minutes)
    } else if minutes == 1 {
        "A minute ago".to_string()
    } else if elapsed >= 3 {
        format!("{} seconds ago", elapsed)
    } else {
        "Just now".to_string()
    }
}
