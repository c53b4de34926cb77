//! Per-call date accumulator.
//!
//! A [DateBuilder] starts from a seed date and is moved through each parse step. Fields are
//! only checked against the calendar in [DateBuilder::finish], so intermediate states such as
//! day 31 in a February seed are fine as long as a later token fixes the month.
//!
//! A day that only came from the seed is clamped to the last day of the resulting month: a
//! January 31 seed parsing "February" gives February 28 (or 29). A day read from the input
//! is never adjusted.

use crate::calendar::{year_text, Date};
use crate::error::{DateError, Field};
use chrono::NaiveDate;

/// AM/PM designator seen in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    meridiem: Option<Meridiem>,
    day_set: bool,
}

impl DateBuilder {
    pub fn seeded(seed: &Date) -> Self {
        DateBuilder {
            year: seed.year(),
            month: seed.month(),
            day: seed.day(),
            hour: seed.hour(),
            minute: seed.minute(),
            second: seed.second(),
            meridiem: None,
            day_set: false,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Two digit year, completed with the first two characters of the current year.
    ///
    /// The century therefore comes from whatever year the builder holds at this point:
    /// the seed's, or one set by an earlier token.
    pub fn partial_year(self, digits: &str) -> Option<Self> {
        let current = year_text(self.year);
        let century: String = current.chars().take(2).collect();
        let year = format!("{}{}", century, digits).parse().ok()?;
        Some(self.year(year))
    }

    /// Zero-based month.
    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    /// One-based month as written in the input.
    pub fn numeric_month(self, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::new(Field::Month, i64::from(month)));
        }
        Ok(self.month(month - 1))
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self.day_set = true;
        self
    }

    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    pub fn second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    pub fn meridiem(mut self, meridiem: Meridiem) -> Self {
        self.meridiem = Some(meridiem);
        self
    }

    /// Resolve AM/PM against the hour and check the fields form a real date.
    pub fn finish(self) -> Result<Date, DateError> {
        let hour = match (self.meridiem, self.hour) {
            (Some(Meridiem::Pm), h) if h < 12 => h + 12,
            (Some(Meridiem::Am), 12) => 0,
            (_, h) => h,
        };
        let day = if self.day_set {
            self.day
        } else {
            last_valid_day(self.year, self.month, self.day)
        };
        Date::new(
            self.year,
            self.month,
            day,
            hour,
            self.minute,
            self.second,
        )
    }
}

/// `day`, or the last day of the month if the month is shorter.
fn last_valid_day(year: i32, month: u32, day: u32) -> u32 {
    (28..=day)
        .rev()
        .find(|d| NaiveDate::from_ymd_opt(year, month + 1, *d).is_some())
        .unwrap_or(day)
}
