//! Session options shared by parameter and result slots.

use crate::error::{Error, Result};
use chrono::{FixedOffset, Offset, Utc};

/// Environment variable read by [`SessionOptions::from_env`].
pub const SESSION_TIME_ZONE_ENV: &str = "SQLTYPES_SESSION_TIME_ZONE";

/// Per-session conversion options.
///
/// The time zone decides how local date-times (which carry no offset) are
/// mapped onto driver timestamps (which are absolute points in time).
/// Binding and extracting through the same session always round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Offset used for local date-time conversion (default: UTC).
    pub time_zone: FixedOffset,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionOptions {
    /// Create options with UTC as the session time zone.
    pub fn new() -> Self {
        Self {
            time_zone: utc(),
        }
    }

    /// Set the session time zone.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use sqltypes::SessionOptions;
    ///
    /// let options = SessionOptions::new()
    ///     .with_time_zone(FixedOffset::east_opt(8 * 3600).unwrap());
    /// assert_eq!(options.time_zone.local_minus_utc(), 28800);
    /// ```
    pub fn with_time_zone(mut self, time_zone: FixedOffset) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Parse a time zone string like `Z`, `UTC`, `+08:00`, `-0530` or `+09`.
    pub fn parse(time_zone: &str) -> Result<Self> {
        Ok(Self::new().with_time_zone(parse_offset(time_zone)?))
    }

    /// Load options from `SQLTYPES_SESSION_TIME_ZONE`, falling back to UTC
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SESSION_TIME_ZONE_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::new()),
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

fn parse_offset(value: &str) -> Result<FixedOffset> {
    let invalid = || Error::InvalidTimeZone {
        value: value.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(utc());
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    // Accepted shapes: HH, HHMM, HH:MM
    let bytes = rest.as_bytes();
    let (hours, minutes) = match bytes {
        [h1, h2] => (two_digits(*h1, *h2), Some(0)),
        [h1, h2, m1, m2] => (two_digits(*h1, *h2), two_digits(*m1, *m2)),
        [h1, h2, b':', m1, m2] => (two_digits(*h1, *h2), two_digits(*m1, *m2)),
        _ => return Err(invalid()),
    };
    let (Some(hours), Some(minutes)) = (hours, minutes) else {
        return Err(invalid());
    };
    if hours > 18 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

fn two_digits(tens: u8, ones: u8) -> Option<i32> {
    if tens.is_ascii_digit() && ones.is_ascii_digit() {
        Some(i32::from(tens - b'0') * 10 + i32::from(ones - b'0'))
    } else {
        None
    }
}
