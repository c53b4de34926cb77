//! Calendar values and the fixed English vocabulary.
//!
//!     Templates only ever see wall-clock fields: year, month, day, hour, minute and second.
//!     There is no time zone and no sub-second precision. The month is zero-based (0 is
//!     January) because that is what the template directives count from; the day of the
//!     week is never stored, it is derived from the other fields on demand.
//!
//!     Validation of field combinations (31 February, hour 24, ...) is delegated to chrono,
//!     which is also the bridge for callers that already hold a `NaiveDateTime`.

use crate::error::{DateError, Field};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full month names, indexed by zero-based month.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full weekday names, indexed from Sunday.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Case-insensitive lookup of a full month name.
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index as u32)
}

/// Case-insensitive lookup of a three letter month abbreviation (`Jan`, `Feb`, ...).
pub fn month_from_abbreviation(abbr: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month[..3].eq_ignore_ascii_case(abbr))
        .map(|index| index as u32)
}

/// Case-insensitive lookup of a full weekday name. Returns days from Sunday.
pub fn weekday_from_name(name: &str) -> Option<u32> {
    WEEKDAYS
        .iter()
        .position(|day| day.eq_ignore_ascii_case(name))
        .map(|index| index as u32)
}

/// Decimal text of a year as templates see it: at least four digits.
///
/// Both the full and the two digit year directives are defined on this text, so that
/// rendering and parsing agree on which characters are the "century".
pub(crate) fn year_text(year: i32) -> String {
    format!("{:04}", year)
}

/// A wall-clock date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DateFields", into = "DateFields")]
pub struct Date {
    inner: NaiveDateTime,
}

impl Date {
    /// 1970-01-01 00:00:00, the seed used when parsing without a base date.
    pub fn epoch() -> Date {
        Date {
            inner: NaiveDateTime::default(),
        }
    }

    /// Build a date from its fields. `month` is zero-based.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Date, DateError> {
        if month > 11 {
            return Err(DateError::new(Field::Month, i64::from(month)));
        }
        let date = NaiveDate::from_ymd_opt(year, month + 1, day)
            .ok_or_else(|| DateError::new(Field::Day, i64::from(day)))?;
        if hour > 23 {
            return Err(DateError::new(Field::Hour, i64::from(hour)));
        }
        if minute > 59 {
            return Err(DateError::new(Field::Minute, i64::from(minute)));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| DateError::new(Field::Second, i64::from(second)))?;
        Ok(Date {
            inner: date.and_time(time),
        })
    }

    /// A date at midnight. `month` is zero-based.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Date, DateError> {
        Date::new(year, month, day, 0, 0, 0)
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Zero-based month, 0 (January) through 11 (December).
    pub fn month(&self) -> u32 {
        self.inner.month0()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// Full English name of the month.
    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month() as usize]
    }

    /// Full English name of the day of the week.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday().num_days_from_sunday() as usize]
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.inner
    }
}

impl Default for Date {
    fn default() -> Self {
        Date::epoch()
    }
}

impl From<NaiveDateTime> for Date {
    fn from(inner: NaiveDateTime) -> Self {
        // Templates have no sub-second directive.
        let inner = inner.with_nanosecond(0).unwrap_or(inner);
        Date { inner }
    }
}

impl From<Date> for NaiveDateTime {
    fn from(date: Date) -> Self {
        date.inner
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Serialized shape of a [`Date`]. Deserializing goes back through [`Date::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateFields {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
}

impl TryFrom<DateFields> for Date {
    type Error = DateError;

    fn try_from(f: DateFields) -> Result<Self, Self::Error> {
        Date::new(f.year, f.month, f.day, f.hour, f.minute, f.second)
    }
}

impl From<Date> for DateFields {
    fn from(date: Date) -> Self {
        DateFields {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
        }
    }
}
