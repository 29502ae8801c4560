use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike, Utc};
use datekit::utils::datetime::*;
use datekit::weekday::Weekday;
use datekit::DateKitError;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn test_days_between_uses_calendar_dates() {
    assert_eq!(days_between(&utc(2024, 6, 14, 23, 59, 0), &utc(2024, 6, 15, 0, 1, 0)), 1);
    assert_eq!(days_between(&utc(2024, 6, 14, 0, 0, 0), &utc(2024, 6, 14, 23, 59, 59)), 0);
    assert_eq!(days_between(&utc(2024, 6, 14, 12, 0, 0), &utc(2024, 6, 11, 12, 0, 0)), -3);
    assert_eq!(days_between(&utc(2024, 12, 31, 12, 0, 0), &utc(2025, 1, 1, 12, 0, 0)), 1);
}

#[test]
fn test_subtract_moments() {
    let later = utc(2024, 6, 14, 12, 0, 30);
    let earlier = utc(2024, 6, 14, 11, 0, 0);
    assert_eq!(subtract_moments(&later, &earlier), 3630.0);
    assert_eq!(subtract_moments(&earlier, &later), -3630.0);
}

#[test]
fn test_longhand_and_shorthand() {
    let moment = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(longhand(&moment), "Friday, June 14, 2024");
    assert_eq!(shorthand(&moment), "6/14/24");
}

#[test]
fn test_day_month() {
    let moment = utc(2024, 6, 4, 15, 5, 0);
    assert_eq!(day_month(&moment), ("04".to_string(), "Jun".to_string()));
}

#[test]
fn test_hour_minute_meridian() {
    assert_eq!(
        hour_minute_meridian(&utc(2024, 6, 14, 15, 5, 0)),
        ("3:05".to_string(), "PM".to_string())
    );
    assert_eq!(
        hour_minute_meridian(&utc(2024, 6, 14, 0, 30, 0)),
        ("12:30".to_string(), "AM".to_string())
    );
}

#[test]
fn test_format_with_meridian() {
    let afternoon = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(format_with_meridian(&afternoon, "%-I:%M%p", "a", "p").unwrap(), "3:05p");
    let morning = utc(2024, 6, 14, 9, 0, 0);
    assert_eq!(format_with_meridian(&morning, "%-I %p", "am", "pm").unwrap(), "9 am");
}

#[test]
fn test_format_with_meridian_keeps_escaped_percent() {
    let afternoon = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(format_with_meridian(&afternoon, "%%p", "am", "pm").unwrap(), "%p");
    assert_eq!(format_with_meridian(&afternoon, "%%%p", "am", "pm").unwrap(), "%pm");
    assert_eq!(format_with_meridian(&afternoon, "%H%%", "am", "pm").unwrap(), "15%");
}

#[test]
fn test_clock_time() {
    assert_eq!(clock_time(&utc(2024, 6, 14, 9, 30, 0), "%-I:%M %p").unwrap(), "9:30 AM");
}

#[test]
fn test_unrenderable_pattern_is_an_error() {
    let moment = utc(2024, 6, 14, 15, 5, 0);
    assert!(matches!(validate_format("%#z"), Err(DateKitError::InvalidFormat(_))));
    assert!(matches!(format_moment(&moment, "%#z"), Err(DateKitError::InvalidFormat(_))));
}

#[test]
fn test_format_moment_rejects_bad_pattern() {
    let moment = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(format_moment(&moment, "%Y/%m").unwrap(), "2024/06");
    assert!(matches!(format_moment(&moment, "%Q"), Err(DateKitError::InvalidFormat(_))));
    assert!(validate_format("%A, %B %d, %Y").is_ok());
}

#[test]
fn test_at_end_of_day() {
    let end = at_end_of_day(&utc(2024, 6, 14, 8, 15, 0)).unwrap();
    assert_eq!(end, utc(2024, 6, 14, 23, 59, 59));
}

#[test]
fn test_next_weekday() {
    let friday = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(next_weekday(&friday, Weekday::Monday, false), utc(2024, 6, 17, 15, 5, 0));
    assert_eq!(next_weekday(&friday, Weekday::Saturday, false), utc(2024, 6, 15, 15, 5, 0));
}

#[test]
fn test_next_weekday_same_day() {
    let friday = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(next_weekday(&friday, Weekday::Friday, false), utc(2024, 6, 21, 15, 5, 0));
    assert_eq!(next_weekday(&friday, Weekday::Friday, true), friday);
}

#[test]
fn test_previous_weekday() {
    let friday = utc(2024, 6, 14, 15, 5, 0);
    assert_eq!(previous_weekday(&friday, Weekday::Monday, false), utc(2024, 6, 10, 15, 5, 0));
    assert_eq!(previous_weekday(&friday, Weekday::Saturday, false), utc(2024, 6, 8, 15, 5, 0));
    assert_eq!(previous_weekday(&friday, Weekday::Friday, false), utc(2024, 6, 7, 15, 5, 0));
    assert_eq!(previous_weekday(&friday, Weekday::Friday, true), friday);
}

#[test]
fn test_time_ago_calendar_units() {
    let now = utc(2024, 6, 14, 12, 0, 0);
    assert_eq!(time_ago_since(&utc(2022, 6, 14, 12, 0, 0), &now), "2 years ago");
    assert_eq!(time_ago_since(&utc(2023, 5, 1, 12, 0, 0), &now), "Last year");
    assert_eq!(time_ago_since(&utc(2024, 3, 1, 12, 0, 0), &now), "3 months ago");
    assert_eq!(time_ago_since(&utc(2024, 5, 10, 12, 0, 0), &now), "Last month");
}

#[test]
fn test_time_ago_elapsed_units() {
    let now = utc(2024, 6, 14, 12, 0, 0);
    assert_eq!(time_ago_since(&utc(2024, 5, 25, 12, 0, 0), &now), "2 weeks ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 5, 12, 0, 0), &now), "Last week");
    assert_eq!(time_ago_since(&utc(2024, 6, 11, 12, 0, 0), &now), "3 days ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 13, 12, 0, 0), &now), "Yesterday");
    assert_eq!(time_ago_since(&utc(2024, 6, 14, 9, 0, 0), &now), "3 hours ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 14, 11, 0, 0), &now), "An hour ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 14, 11, 50, 0), &now), "10 minutes ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 14, 11, 59, 0), &now), "A minute ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 14, 11, 59, 50), &now), "10 seconds ago");
    assert_eq!(time_ago_since(&utc(2024, 6, 14, 11, 59, 59), &now), "Just now");
}

#[test]
fn test_time_ago_future_is_just_now() {
    let now = utc(2024, 6, 14, 12, 0, 0);
    assert_eq!(time_ago_since(&utc(2024, 7, 1, 12, 0, 0), &now), "Just now");
}

#[test]
fn test_parse_moment_date_only() {
    let parsed = parse_moment("2024-06-14").unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(parsed.naive_local(), expected);
}

#[test]
fn test_parse_moment_local_datetime_formats() {
    let iso = parse_moment("2024-06-14T15:05:00").unwrap();
    let spaced = parse_moment("2024-06-14 15:05:00").unwrap();
    assert_eq!(iso, spaced);
    assert_eq!(iso.hour(), 15);
    assert_eq!(iso.minute(), 5);
}

#[test]
fn test_parse_moment_rfc3339() {
    let parsed = parse_moment("2024-06-14T15:05:00Z").unwrap();
    assert_eq!(parsed.with_timezone(&Utc), utc(2024, 6, 14, 15, 5, 0));
    let _: DateTime<Local> = parsed;
}

#[test]
fn test_parse_moment_invalid() {
    assert!(matches!(parse_moment("next tuesday"), Err(DateKitError::InvalidMoment(_))));
    assert!(matches!(parse_moment("2024-13-01"), Err(DateKitError::InvalidMoment(_))));
}
