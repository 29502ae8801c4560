//! Weekday lookup and display names
//!
//! Weekdays are numbered 0 (Sunday) through 6 (Saturday). Calendar APIs that
//! report a 1-based Gregorian index (1 = Sunday … 7 = Saturday) are mapped
//! through [`Weekday::from_gregorian_index`].

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

/// Display attributes per weekday
struct WeekdayInfo {
    name: &'static str,
    single_letter: &'static str,
}

/// Indexed by [`Weekday::code`]
const WEEKDAY_TABLE: [WeekdayInfo; 7] = [
    WeekdayInfo { name: "Sunday", single_letter: "U" },
    WeekdayInfo { name: "Monday", single_letter: "M" },
    WeekdayInfo { name: "Tuesday", single_letter: "T" },
    WeekdayInfo { name: "Wednesday", single_letter: "W" },
    WeekdayInfo { name: "Thursday", single_letter: "R" },
    WeekdayInfo { name: "Friday", single_letter: "F" },
    WeekdayInfo { name: "Saturday", single_letter: "S" },
];

impl Weekday {
    /// All weekdays in code order, Sunday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Canonical code, 0 (Sunday) through 6 (Saturday)
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a weekday by its canonical code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Map a 1-based Gregorian weekday index (1 = Sunday … 7 = Saturday).
    ///
    /// Indexes outside 1..=7 are not rejected: they resolve to Sunday.
    pub fn from_gregorian_index(index: i64) -> Self {
        match index {
            1..=7 => Self::ALL[(index - 1) as usize],
            _ => {
                log::debug!("Gregorian weekday index {} out of range, using Sunday", index);
                Weekday::Sunday
            }
        }
    }

    /// Weekday of a moment in its own time zone
    pub fn from_moment<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self::from_gregorian_index(i64::from(moment.weekday().number_from_sunday()))
    }

    /// Full English name, e.g. "Thursday"
    pub fn name(self) -> &'static str {
        WEEKDAY_TABLE[self as usize].name
    }

    /// First three letters of the name
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// One-letter abbreviation for calendar headers.
    ///
    /// Thursday is "R" and Sunday is "U" so they differ from Tuesday and Saturday.
    pub fn single_letter(self) -> &'static str {
        WEEKDAY_TABLE[self as usize].single_letter
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}
