//! Partial calendar values: month-day, year-month and year.
//!
//! `chrono` has no types for these, so they are defined here together with
//! their text encodings:
//! - `MonthDay` is stored as `MM-dd`, e.g. `03-07`
//! - `YearMonth` is stored as `yyyy-MM`, e.g. `2024-01`. The year is
//!   zero-padded to 4 digits; years with more than 4 digits get a leading
//!   `+` (`+45000-01`) and negative years a leading `-` (`-0044-03`)
//! - `Year` is stored as a plain integer

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Smallest supported year.
pub const MIN_YEAR: i32 = -999_999_999;
/// Largest supported year.
pub const MAX_YEAR: i32 = 999_999_999;

/// Minimum number of year digits in the `yyyy-MM` encoding.
const YEAR_MIN_WIDTH: usize = 4;
/// Maximum number of year digits accepted when parsing.
const YEAR_MAX_WIDTH: usize = 10;

fn max_day_of_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// A month and day of month, without a year (e.g. a birthday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a month-day. February 29 is accepted.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::ValueOutOfRange {
                target: "MonthDay month",
                value: month as i64,
            });
        }
        if day < 1 || day > max_day_of_month(month) {
            return Err(Error::ValueOutOfRange {
                target: "MonthDay day",
                value: day as i64,
            });
        }
        Ok(Self { month, day })
    }

    /// Month of year (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Parse the `MM-dd` encoding.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b'-' {
            return Err(Error::format("MonthDay", text, "expected MM-dd"));
        }
        let month = parse_fixed_digits(&text[..2])
            .ok_or_else(|| Error::format("MonthDay", text, "month must be two digits"))?;
        let day = parse_fixed_digits(&text[3..])
            .ok_or_else(|| Error::format("MonthDay", text, "day must be two digits"))?;
        Self::new(month, day).map_err(|err| Error::format("MonthDay", text, err.to_string()))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A year and month, without a day (e.g. a credit card expiry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::ValueOutOfRange {
                target: "YearMonth month",
                value: month as i64,
            });
        }
        Ok(Self { year, month })
    }

    /// Proleptic year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse the `yyyy-MM` encoding.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |message: &str| Error::format("YearMonth", text, message);

        let (negative, explicit_plus, rest) = match text.as_bytes().first() {
            Some(b'+') => (false, true, &text[1..]),
            Some(b'-') => (true, false, &text[1..]),
            _ => (false, false, text),
        };

        let year_digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if !(YEAR_MIN_WIDTH..=YEAR_MAX_WIDTH).contains(&year_digits) {
            return Err(invalid("year must have 4 to 10 digits"));
        }
        if explicit_plus && year_digits <= YEAR_MIN_WIDTH {
            return Err(invalid("'+' is only allowed for years beyond 4 digits"));
        }
        if !negative && !explicit_plus && year_digits > YEAR_MIN_WIDTH {
            return Err(invalid("years beyond 4 digits need a leading '+'"));
        }

        let magnitude: i64 = rest[..year_digits]
            .parse()
            .map_err(|_| invalid("invalid year"))?;
        if negative && magnitude == 0 {
            return Err(invalid("negative zero year"));
        }
        let year = if negative { -magnitude } else { magnitude };

        let tail = &rest[year_digits..];
        if tail.len() != 3 || !tail.starts_with('-') {
            return Err(invalid("expected yyyy-MM"));
        }
        let month =
            parse_fixed_digits(&tail[1..]).ok_or_else(|| invalid("month must be two digits"))?;

        let year = i32::try_from(year).map_err(|_| invalid("year out of range"))?;
        Self::new(year, month).map_err(|err| Error::format("YearMonth", text, err.to_string()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.year.unsigned_abs();
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", magnitude, self.month)
        } else if magnitude > 9999 {
            write!(f, "+{}-{:02}", magnitude, self.month)
        } else {
            write!(f, "{:04}-{:02}", magnitude, self.month)
        }
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A calendar year, stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Create a year.
    pub fn new(year: i32) -> Result<Self> {
        check_year(year)?;
        Ok(Self(year))
    }

    /// The year value.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Check for a leap year in the proleptic Gregorian calendar.
    pub fn is_leap(&self) -> bool {
        (self.0 % 4 == 0 && self.0 % 100 != 0) || self.0 % 400 == 0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::ValueOutOfRange {
            target: "Year",
            value: year as i64,
        })
    }
}

/// Parse exactly two ASCII digits.
fn parse_fixed_digits(text: &str) -> Option<u32> {
    if text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_day_format() {
        assert_eq!(MonthDay::new(3, 7).unwrap().to_string(), "03-07");
        assert_eq!(MonthDay::new(12, 31).unwrap().to_string(), "12-31");
    }

    #[test]
    fn test_month_day_leap_day() {
        let md = MonthDay::parse("02-29").unwrap();
        assert_eq!(md.month(), 2);
        assert_eq!(md.day(), 29);
    }

    #[test]
    fn test_month_day_invalid() {
        assert!(MonthDay::new(13, 1).is_err());
        assert!(MonthDay::new(4, 31).is_err());
        assert!(MonthDay::new(2, 30).is_err());
        assert!(MonthDay::new(1, 0).is_err());

        for input in ["3-07", "03/07", "03-7", "0307", "ab-cd", "04-31", "13-01", "", "03-07 "] {
            assert!(
                matches!(MonthDay::parse(input), Err(Error::Format { .. })),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_year_month_format() {
        assert_eq!(YearMonth::new(2024, 1).unwrap().to_string(), "2024-01");
        assert_eq!(YearMonth::new(33, 12).unwrap().to_string(), "0033-12");
        assert_eq!(YearMonth::new(45000, 1).unwrap().to_string(), "+45000-01");
        assert_eq!(YearMonth::new(-44, 3).unwrap().to_string(), "-0044-03");
        assert_eq!(YearMonth::new(0, 6).unwrap().to_string(), "0000-06");
    }

    #[test]
    fn test_year_month_parse() {
        assert_eq!(YearMonth::parse("2024-01").unwrap(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(YearMonth::parse("+45000-01").unwrap(), YearMonth::new(45000, 1).unwrap());
        assert_eq!(YearMonth::parse("-0044-03").unwrap(), YearMonth::new(-44, 3).unwrap());
        assert_eq!(YearMonth::parse("-12345-03").unwrap(), YearMonth::new(-12345, 3).unwrap());
    }

    #[test]
    fn test_year_month_parse_invalid() {
        for input in [
            "24-01",
            "45000-01",
            "+2024-01",
            "-0000-01",
            "2024-1",
            "2024-13",
            "2024/01",
            "2024-01-01",
            "+99999999999-01",
            "",
        ] {
            assert!(
                matches!(YearMonth::parse(input), Err(Error::Format { .. })),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_year_range() {
        assert_eq!(Year::new(2024).unwrap().value(), 2024);
        assert!(Year::new(MAX_YEAR).is_ok());
        assert!(matches!(
            Year::new(1_000_000_000),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(Year::new(2000).unwrap().is_leap());
        assert!(!Year::new(1900).unwrap().is_leap());
    }
}
