use chrono::{Local, TimeZone, Utc};
use datekit::clock::FixedClock;
use datekit::day_part::DayPart;

#[test]
fn test_hour_buckets() {
    let expected = [
        (0..=4, DayPart::Midnight),
        (5..=8, DayPart::Morning),
        (9..=11, DayPart::Midday),
        (12..=17, DayPart::Afternoon),
        (18..=19, DayPart::Evening),
        (20..=23, DayPart::Night),
    ];
    for (hours, part) in expected {
        for hour in hours {
            assert_eq!(DayPart::classify(hour), part, "hour {}", hour);
        }
    }
}

#[test]
fn test_hour_17_is_afternoon() {
    assert_eq!(DayPart::classify(17), DayPart::Afternoon);
}

#[test]
fn test_out_of_range_hours_are_midnight() {
    for hour in [-1, 24, 99, i64::MIN] {
        assert_eq!(DayPart::classify(hour), DayPart::Midnight);
    }
}

#[test]
fn test_display_attributes() {
    assert_eq!(DayPart::Morning.emoji(), "🌱");
    assert_eq!(DayPart::Morning.greeting(), "An early start!");
    assert_eq!(DayPart::Midday.greeting(), "Good morning!");
    assert_eq!(DayPart::Afternoon.emoji(), "⛅️");
    assert_eq!(DayPart::Evening.greeting(), DayPart::Night.greeting());
    assert_eq!(DayPart::Midnight.emoji(), "✨");
    assert_eq!(DayPart::Midnight.greeting(), "Up this late?");
    assert_eq!(DayPart::Night.to_string(), "night");
}

#[test]
fn test_from_moment() {
    let moment = Utc.with_ymd_and_hms(2024, 6, 14, 9, 30, 0).unwrap();
    assert_eq!(DayPart::from_moment(&moment), DayPart::Midday);
}

#[test]
fn test_classify_now_reads_clock() {
    let evening = Local.with_ymd_and_hms(2024, 6, 14, 18, 30, 0).unwrap();
    assert_eq!(DayPart::classify_now(&FixedClock::new(evening)), DayPart::Evening);

    let early = Local.with_ymd_and_hms(2024, 6, 14, 3, 0, 0).unwrap();
    assert_eq!(DayPart::classify_now(&FixedClock::new(early)), DayPart::Midnight);
}
