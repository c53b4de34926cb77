//! Input cursor and the fixed-shape patterns directives extract with.
//!
//! All patterns are anchored at the cursor. ASCII classes are spelled out: `\d` would also
//! accept non-ASCII digits.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub static ONE_OR_TWO_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}").unwrap());
pub static TWO_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}").unwrap());
pub static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}").unwrap());
pub static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})(?i:st|nd|rd|th)").unwrap());
pub static THREE_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{3}").unwrap());
pub static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+").unwrap());
pub static MERIDIEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i:am|pm)").unwrap());

/// Read position over the input being parsed. Only moves forward.
#[derive(Debug, Clone)]
pub struct Cursor<'i> {
    input: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    pub fn new(input: &'i str) -> Self {
        Cursor { input, offset: 0 }
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// Byte offset of the unconsumed input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Consume `literal` if the input continues with it.
    pub fn strip(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.offset += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume the match of an anchored pattern, returning its captures.
    pub fn take(&mut self, pattern: &Regex) -> Option<Captures<'i>> {
        let rest = self.rest();
        let captures = pattern.captures(rest)?;
        self.offset += captures.get(0).map_or(0, |m| m.end());
        Some(captures)
    }

    /// Consume the match of an anchored pattern, returning the matched text.
    pub fn take_str(&mut self, pattern: &Regex) -> Option<&'i str> {
        let rest = self.rest();
        let found = pattern.find(rest)?;
        self.offset += found.end();
        Some(found.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_advances() {
        let mut cursor = Cursor::new("035Nov");
        assert_eq!(cursor.take_str(&ONE_OR_TWO_DIGITS), Some("03"));
        assert_eq!(cursor.offset(), 2);
        assert!(cursor.strip("5"));
        assert_eq!(cursor.take_str(&THREE_LETTERS), Some("Nov"));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_failed_take_does_not_move() {
        let mut cursor = Cursor::new("abcd");
        assert_eq!(cursor.take_str(&FOUR_DIGITS), None);
        assert!(!cursor.strip("x"));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.rest(), "abcd");
    }

    #[test]
    fn test_ordinal_captures_number() {
        let mut cursor = Cursor::new("3RD_November");
        let captures = cursor.take(&ORDINAL).unwrap();
        assert_eq!(&captures[1], "3");
        assert_eq!(cursor.rest(), "_November");
    }

    #[test]
    fn test_patterns_are_anchored() {
        assert!(FOUR_DIGITS.find("x1992").is_none());
        assert!(MERIDIEM.find(" pm").is_none());
        assert_eq!(MERIDIEM.find("Pm").map(|m| m.as_str()), Some("Pm"));
        assert_eq!(LETTERS.find("Friday, 3").map(|m| m.as_str()), Some("Friday"));
    }

    #[test]
    fn test_digits_are_ascii() {
        assert!(ONE_OR_TWO_DIGITS.find("٣").is_none());
    }
}
