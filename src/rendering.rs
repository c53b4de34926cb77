//! Renderer
//!
//!     Writes a token sequence against a date. Every token maps to a fixed piece of text; the
//!     only knobs are the padding options, which turn single digit hours, days and months into
//!     two digits. Minutes and seconds are always two digits.
//!
//!     Rendering is lazy: [Rendered] implements `Display` and formats straight into whatever
//!     writer it is given. [render] collects it into a `String`.

use crate::calendar::{year_text, Date};
use crate::directive::Directive;
use crate::lexing::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Padding knobs for rendering. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Zero-pad `{h}` and `{H}`.
    pub pad_hours: bool,
    /// Zero-pad `{DD}`.
    pub pad_days: bool,
    /// Zero-pad `{Mo}`.
    pub pad_month: bool,
}

/// Render tokens against a date.
pub fn render(tokens: &[Token], date: &Date, options: &Options) -> String {
    Rendered::new(tokens, date, options).to_string()
}

/// A token sequence bound to a date, formatted on demand.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    tokens: &'a [Token],
    date: &'a Date,
    options: &'a Options,
}

impl<'a> Rendered<'a> {
    pub fn new(tokens: &'a [Token], date: &'a Date, options: &'a Options) -> Self {
        Rendered {
            tokens,
            date,
            options,
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens {
            match token {
                Token::Literal(text) => f.write_str(text)?,
                Token::Directive(directive) => {
                    write_directive(f, *directive, self.date, self.options)?
                }
            }
        }
        Ok(())
    }
}

fn write_directive(
    f: &mut fmt::Formatter<'_>,
    directive: Directive,
    date: &Date,
    options: &Options,
) -> fmt::Result {
    match directive {
        Directive::OrdinalDayOfMonth => write!(f, "{}{}", date.day(), ordinal_suffix(date.day())),
        Directive::PartialMonth => f.write_str(&date.month_name()[..3]),
        Directive::FullMonth => f.write_str(date.month_name()),
        Directive::NumericMonth => write_padded(f, date.month() + 1, options.pad_month),
        Directive::FullYear => f.write_str(&year_text(date.year())),
        Directive::PartialYear => {
            let text = year_text(date.year());
            f.write_str(&text[text.len() - 2..])
        }
        Directive::DayOfWeekName => f.write_str(date.weekday_name()),
        Directive::DayOfMonth => write_padded(f, date.day(), options.pad_days),
        Directive::Hour12 => write_padded(f, twelve_hour(date.hour()), options.pad_hours),
        Directive::Hour24 => write_padded(f, date.hour(), options.pad_hours),
        Directive::Minute => write_padded(f, date.minute(), true),
        Directive::Second => write_padded(f, date.second(), true),
        Directive::Meridiem => f.write_str(if date.hour() >= 12 { "PM" } else { "AM" }),
    }
}

/// Single digit values get a leading zero when `pad` is set.
fn write_padded(f: &mut fmt::Formatter<'_>, value: u32, pad: bool) -> fmt::Result {
    if pad {
        write!(f, "{:02}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// 0 and 12 are both shown as 12.
pub fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    }
}
