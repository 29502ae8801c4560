//! Parts of the day used for greetings
//!
//! The 24-hour clock is split into six contiguous buckets. Classification is
//! first-match-wins in the order morning, midday, afternoon, evening, night;
//! anything left over (including out-of-range hours) is midnight.

use crate::clock::Clock;
use crate::constants::*;
use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Named segment of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    /// 5-9 AM
    Morning,
    /// 9 AM-12 PM
    Midday,
    /// 12-5 PM
    Afternoon,
    /// 5-8 PM
    Evening,
    /// 8 PM-12 AM
    Night,
    /// 12-5 AM
    Midnight,
}

/// Hour buckets checked in order. Afternoon and evening both claim 17;
/// afternoon is checked first and wins.
const HOUR_BUCKETS: [(RangeInclusive<i64>, DayPart); 5] = [
    (5..=8, DayPart::Morning),
    (9..=11, DayPart::Midday),
    (12..=17, DayPart::Afternoon),
    (17..=19, DayPart::Evening),
    (20..=23, DayPart::Night),
];

impl DayPart {
    /// Classify an hour of the day (0-23). Hours outside that range are midnight.
    pub fn classify(hour: i64) -> Self {
        HOUR_BUCKETS
            .iter()
            .find(|(hours, _)| hours.contains(&hour))
            .map(|(_, part)| *part)
            .unwrap_or(DayPart::Midnight)
    }

    /// Day part of a moment's hour in its own time zone
    pub fn from_moment<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self::classify(i64::from(moment.hour()))
    }

    /// Day part of the clock's current hour
    pub fn classify_now(clock: &impl Clock) -> Self {
        Self::from_moment(&clock.now())
    }

    pub fn emoji(self) -> &'static str {
        match self {
            DayPart::Morning => EMOJI_MORNING,
            DayPart::Midday => EMOJI_MIDDAY,
            DayPart::Afternoon => EMOJI_AFTERNOON,
            DayPart::Evening => EMOJI_EVENING,
            DayPart::Night => EMOJI_NIGHT,
            DayPart::Midnight => EMOJI_MIDNIGHT,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            DayPart::Morning => GREETING_MORNING,
            DayPart::Midday => GREETING_MIDDAY,
            DayPart::Afternoon => GREETING_AFTERNOON,
            DayPart::Evening => GREETING_EVENING,
            DayPart::Night => GREETING_NIGHT,
            DayPart::Midnight => GREETING_MIDNIGHT,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Midday => "midday",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
            DayPart::Night => "night",
            DayPart::Midnight => "midnight",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
