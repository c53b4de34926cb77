//! Inverse parser
//!
//!     Reads a date back out of text that was written with a template. Tokens are processed
//!     strictly in order, each one consuming a prefix of the remaining input:
//!
//!         literal             the exact literal text
//!         {YYYY}              exactly 4 digits
//!         {YY}                exactly 2 digits, century taken from the year held so far
//!         {MMMM}              a run of letters naming a month
//!         {MM}                exactly 3 letters abbreviating a month
//!         {Mo} {DD} {H} {h}   1-2 digits
//!         {mm} {ss}           1-2 digits
//!         {Do}                1-2 digits and st/nd/rd/th
//!         {dddd}              a run of letters naming a weekday (checked, not stored)
//!         {a}                 am/pm
//!
//!     Name and suffix matching is case-insensitive. There is no backtracking: a token that
//!     consumes too much (`{DD}` on "035") is not revisited by later tokens. The first failure
//!     ends the parse; no partial date is returned. Input left over after the last token is an
//!     error.
//!
//!     Fields not mentioned by the template keep the value of the base date, which defaults to
//!     1970-01-01 00:00:00. `{YY}` depends on it: without a base date, two digit years land in
//!     the 1900s.

pub mod builder;
pub mod patterns;

use crate::calendar::{month_from_abbreviation, month_from_name, weekday_from_name, Date};
use crate::directive::Directive;
use crate::error::ParseError;
use crate::lexing::Token;
use builder::{DateBuilder, Meridiem};
use patterns::{
    Cursor, FOUR_DIGITS, LETTERS, MERIDIEM, ONE_OR_TWO_DIGITS, ORDINAL, THREE_LETTERS, TWO_DIGITS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Options for a single parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Seed for every field the template does not set.
    pub base_date: Option<Date>,
}

impl ParseOptions {
    pub fn with_base_date(base_date: Date) -> Self {
        ParseOptions {
            base_date: Some(base_date),
        }
    }
}

/// Parse `input` against a token sequence.
pub fn parse(tokens: &[Token], input: &str, options: &ParseOptions) -> Result<Date, ParseError> {
    let seed = options.base_date.unwrap_or_default();
    if options.base_date.is_none()
        && tokens
            .iter()
            .any(|t| t.directive() == Some(Directive::PartialYear))
    {
        debug!(
            seed = %seed,
            "two digit year parsed without a base date; century comes from the default seed"
        );
    }

    let mut cursor = Cursor::new(input);
    let result = tokens
        .iter()
        .try_fold(DateBuilder::seeded(&seed), |builder, token| {
            trace!(%token, offset = cursor.offset(), "consuming");
            step(builder, token, &mut cursor)
        })
        .and_then(|builder| {
            if cursor.is_at_end() {
                Ok(builder)
            } else {
                Err(ParseError::TrailingInput {
                    offset: cursor.offset(),
                })
            }
        })
        .and_then(|builder| builder.finish().map_err(ParseError::from));

    if let Err(err) = &result {
        debug!(%err, input, "parse failed");
    }
    result
}

fn step(
    builder: DateBuilder,
    token: &Token,
    cursor: &mut Cursor<'_>,
) -> Result<DateBuilder, ParseError> {
    let directive = match token {
        Token::Literal(text) => {
            return if cursor.strip(text) {
                Ok(builder)
            } else {
                Err(ParseError::LiteralMismatch {
                    expected: text.clone(),
                    offset: cursor.offset(),
                })
            };
        }
        Token::Directive(directive) => *directive,
    };

    let offset = cursor.offset();
    let mismatch = || ParseError::Mismatch { directive, offset };
    let unknown = |name: &str| ParseError::UnknownName {
        directive,
        name: name.to_string(),
        offset,
    };

    match directive {
        Directive::OrdinalDayOfMonth => {
            let captures = cursor.take(&ORDINAL).ok_or_else(mismatch)?;
            let day = captures[1].parse().map_err(|_| mismatch())?;
            Ok(builder.day(day))
        }
        Directive::PartialMonth => {
            let name = cursor.take_str(&THREE_LETTERS).ok_or_else(mismatch)?;
            let month = month_from_abbreviation(name).ok_or_else(|| unknown(name))?;
            Ok(builder.month(month))
        }
        Directive::FullMonth => {
            let name = cursor.take_str(&LETTERS).ok_or_else(mismatch)?;
            let month = month_from_name(name).ok_or_else(|| unknown(name))?;
            Ok(builder.month(month))
        }
        Directive::NumericMonth => {
            let month = number(cursor, &ONE_OR_TWO_DIGITS).ok_or_else(mismatch)?;
            Ok(builder.numeric_month(month)?)
        }
        Directive::FullYear => {
            let digits = cursor.take_str(&FOUR_DIGITS).ok_or_else(mismatch)?;
            let year = digits.parse().map_err(|_| mismatch())?;
            Ok(builder.year(year))
        }
        Directive::PartialYear => {
            let digits = cursor.take_str(&TWO_DIGITS).ok_or_else(mismatch)?;
            builder.partial_year(digits).ok_or_else(mismatch)
        }
        Directive::DayOfWeekName => {
            let name = cursor.take_str(&LETTERS).ok_or_else(mismatch)?;
            weekday_from_name(name).ok_or_else(|| unknown(name))?;
            Ok(builder)
        }
        Directive::DayOfMonth => {
            let day = number(cursor, &ONE_OR_TWO_DIGITS).ok_or_else(mismatch)?;
            Ok(builder.day(day))
        }
        Directive::Hour12 | Directive::Hour24 => {
            let hour = number(cursor, &ONE_OR_TWO_DIGITS).ok_or_else(mismatch)?;
            Ok(builder.hour(hour))
        }
        Directive::Minute => {
            let minute = number(cursor, &ONE_OR_TWO_DIGITS).ok_or_else(mismatch)?;
            Ok(builder.minute(minute))
        }
        Directive::Second => {
            let second = number(cursor, &ONE_OR_TWO_DIGITS).ok_or_else(mismatch)?;
            Ok(builder.second(second))
        }
        Directive::Meridiem => {
            let text = cursor.take_str(&MERIDIEM).ok_or_else(mismatch)?;
            let meridiem = if text.eq_ignore_ascii_case("pm") {
                Meridiem::Pm
            } else {
                Meridiem::Am
            };
            Ok(builder.meridiem(meridiem))
        }
    }
}

fn number(cursor: &mut Cursor<'_>, pattern: &Regex) -> Option<u32> {
    cursor.take_str(pattern)?.parse().ok()
}
