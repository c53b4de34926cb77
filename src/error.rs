//! Errors raised while compiling templates, parsing input, and building dates.

use crate::directive::Directive;
use std::fmt;

/// A date/time field, used to report values that do not fit the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        };
        f.write_str(name)
    }
}

/// A field value that cannot be part of a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateError {
    pub field: Field,
    pub value: i64,
}

impl DateError {
    pub fn new(field: Field, value: i64) -> Self {
        DateError { field, value }
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} is out of range", self.field, self.value)
    }
}

impl std::error::Error for DateError {}

/// Errors that can occur while compiling a template string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Brace content shaped like a directive that the directive table does not know.
    /// `offset` is the byte offset of the opening brace.
    UnrecognizedDirective { directive: String, offset: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnrecognizedDirective { directive, offset } => write!(
                f,
                "Unrecognized directive '{{{}}}' at offset {}",
                directive, offset
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Errors that can occur while parsing input text against a template.
///
/// Offsets are byte offsets into the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not continue with the template's literal text.
    LiteralMismatch { expected: String, offset: usize },
    /// The input did not have the shape a directive expects (digit count, letters, suffix).
    Mismatch { directive: Directive, offset: usize },
    /// A month or weekday name that is not in the English vocabulary.
    UnknownName {
        directive: Directive,
        name: String,
        offset: usize,
    },
    /// Every token matched but the values do not form a real date and time.
    OutOfRange(DateError),
    /// Input remained after the last token was consumed.
    TrailingInput { offset: usize },
}

impl ParseError {
    /// Byte offset in the input where parsing stopped, if the failure is positional.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::LiteralMismatch { offset, .. }
            | ParseError::Mismatch { offset, .. }
            | ParseError::UnknownName { offset, .. }
            | ParseError::TrailingInput { offset } => Some(*offset),
            ParseError::OutOfRange(_) => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::LiteralMismatch { expected, offset } => {
                write!(f, "Expected '{}' at offset {}", expected, offset)
            }
            ParseError::Mismatch { directive, offset } => write!(
                f,
                "Expected {} for {{{}}} at offset {}",
                directive.expects(),
                directive.as_str(),
                offset
            ),
            ParseError::UnknownName {
                directive,
                name,
                offset,
            } => write!(
                f,
                "Unknown name '{}' for {{{}}} at offset {}",
                name,
                directive.as_str(),
                offset
            ),
            ParseError::OutOfRange(err) => write!(f, "Invalid date: {}", err),
            ParseError::TrailingInput { offset } => {
                write!(f, "Unexpected trailing input at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DateError> for ParseError {
    fn from(err: DateError) -> Self {
        ParseError::OutOfRange(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_display() {
        let err = CompileError::UnrecognizedDirective {
            directive: "YYY".to_string(),
            offset: 4,
        };
        assert_eq!(err.to_string(), "Unrecognized directive '{YYY}' at offset 4");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Mismatch {
            directive: Directive::FullYear,
            offset: 0,
        };
        assert_eq!(err.to_string(), "Expected 4 digits for {YYYY} at offset 0");

        let err = ParseError::LiteralMismatch {
            expected: "_".to_string(),
            offset: 2,
        };
        assert_eq!(err.to_string(), "Expected '_' at offset 2");

        let err = ParseError::from(DateError::new(Field::Day, 31));
        assert_eq!(err.to_string(), "Invalid date: day 31 is out of range");
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_out_of_range_has_source() {
        use std::error::Error;

        let err = ParseError::from(DateError::new(Field::Month, 12));
        assert!(err.source().is_some());
        let err = ParseError::TrailingInput { offset: 3 };
        assert!(err.source().is_none());
        assert_eq!(err.offset(), Some(3));
    }
}
