//! Directive table
//!
//!     A directive is a template placeholder such as `{YYYY}`: one date/time field in one
//!     display form. The set of directives is closed and case-sensitive:
//!
//!         YYYY  full year              YY    two digit year
//!         MMMM  full month name        MM    three letter month name
//!         Mo    numeric month          DD    day of the month
//!         Do    ordinal day (24th)     dddd  weekday name
//!         H     hour, 24-hour clock    h     hour, 12-hour clock
//!         mm    minutes                ss    seconds
//!         a     AM/PM
//!
//!     [DIRECTIVES] lists the spellings longest first. Matching walks the list in order and
//!     takes the first candidate, so a longer spelling always wins over a shorter one that
//!     shares its prefix (`MMMM` before `MM`, `YYYY` before `YY`). `Mo` is its own entry,
//!     not a prefix form of `MM`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recognized directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directive {
    FullYear,
    PartialYear,
    FullMonth,
    PartialMonth,
    NumericMonth,
    DayOfMonth,
    OrdinalDayOfMonth,
    DayOfWeekName,
    Hour12,
    Hour24,
    Minute,
    Second,
    Meridiem,
}

/// Directive spellings, longest first.
pub const DIRECTIVES: &[(&str, Directive)] = &[
    ("YYYY", Directive::FullYear),
    ("MMMM", Directive::FullMonth),
    ("dddd", Directive::DayOfWeekName),
    ("YY", Directive::PartialYear),
    ("MM", Directive::PartialMonth),
    ("Mo", Directive::NumericMonth),
    ("DD", Directive::DayOfMonth),
    ("Do", Directive::OrdinalDayOfMonth),
    ("mm", Directive::Minute),
    ("ss", Directive::Second),
    ("H", Directive::Hour24),
    ("h", Directive::Hour12),
    ("a", Directive::Meridiem),
];

impl Directive {
    /// Longest directive spelling at the start of `text`, with its length in bytes.
    pub fn match_prefix(text: &str) -> Option<(Directive, usize)> {
        DIRECTIVES
            .iter()
            .find(|(spelling, _)| text.starts_with(spelling))
            .map(|(spelling, directive)| (*directive, spelling.len()))
    }

    /// The directive spelled exactly `name`.
    pub fn lookup(name: &str) -> Option<Directive> {
        match Directive::match_prefix(name) {
            Some((directive, len)) if len == name.len() => Some(directive),
            _ => None,
        }
    }

    /// Template spelling, without braces.
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::FullYear => "YYYY",
            Directive::PartialYear => "YY",
            Directive::FullMonth => "MMMM",
            Directive::PartialMonth => "MM",
            Directive::NumericMonth => "Mo",
            Directive::DayOfMonth => "DD",
            Directive::OrdinalDayOfMonth => "Do",
            Directive::DayOfWeekName => "dddd",
            Directive::Hour12 => "h",
            Directive::Hour24 => "H",
            Directive::Minute => "mm",
            Directive::Second => "ss",
            Directive::Meridiem => "a",
        }
    }

    /// Human description of the input shape the directive consumes when parsing.
    pub fn expects(&self) -> &'static str {
        match self {
            Directive::FullYear => "4 digits",
            Directive::PartialYear => "2 digits",
            Directive::FullMonth => "a month name",
            Directive::PartialMonth => "a 3 letter month name",
            Directive::DayOfWeekName => "a weekday name",
            Directive::OrdinalDayOfMonth => "1-2 digits and st/nd/rd/th",
            Directive::Meridiem => "AM or PM",
            Directive::NumericMonth
            | Directive::DayOfMonth
            | Directive::Hour12
            | Directive::Hour24
            | Directive::Minute
            | Directive::Second => "1-2 digits",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.as_str())
    }
}
