//! Driver-native temporal values.
//!
//! These mirror what a driver actually puts on the wire:
//! - `SqlTimestamp`: seconds + nanoseconds since the Unix epoch (UTC)
//! - `SqlDate`: days since 1970-01-01
//! - `SqlTime`: seconds + nanoseconds since midnight
//!
//! Conversions to and from `chrono` types live here so descriptors stay
//! one-liners.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use std::fmt;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Driver timestamp: an absolute point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlTimestamp {
    /// Seconds since 1970-01-01T00:00:00Z.
    pub seconds: i64,
    /// Nanoseconds within the second.
    pub nanos: u32,
}

impl SqlTimestamp {
    /// Create a timestamp from epoch seconds and nanoseconds.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Convert a UTC instant into a driver timestamp.
    pub fn from_instant(instant: &DateTime<Utc>) -> Self {
        Self {
            seconds: instant.timestamp(),
            nanos: instant.timestamp_subsec_nanos(),
        }
    }

    /// Convert back to a UTC instant.
    pub fn to_instant(&self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos).ok_or(Error::ValueOutOfRange {
            target: "DateTime<Utc>",
            value: self.seconds,
        })
    }

    /// Interpret a local date-time in `zone` and convert it to a timestamp.
    pub fn from_local(local: &NaiveDateTime, zone: FixedOffset) -> Result<Self> {
        let zoned = local
            .and_local_timezone(zone)
            .single()
            .ok_or(Error::ValueOutOfRange {
                target: "SqlTimestamp",
                value: local.and_utc().timestamp(),
            })?;
        Ok(Self::from_instant(&zoned.with_timezone(&Utc)))
    }

    /// Render the timestamp as a local date-time in `zone`.
    pub fn to_local(&self, zone: FixedOffset) -> Result<NaiveDateTime> {
        Ok(self.to_instant()?.with_timezone(&zone).naive_local())
    }
}

impl fmt::Display for SqlTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_instant() {
            Ok(instant) => write!(f, "{}", instant.format("%Y-%m-%d %H:%M:%S%.f")),
            Err(_) => write!(f, "<timestamp {}s {}ns>", self.seconds, self.nanos),
        }
    }
}

/// Driver date: a calendar day with no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlDate {
    /// Days since 1970-01-01 (negative before the epoch).
    pub days: i32,
}

impl SqlDate {
    /// Create a date from days since the epoch.
    pub fn new(days: i32) -> Self {
        Self { days }
    }

    /// Convert a calendar date into a driver date.
    pub fn from_naive(date: &NaiveDate) -> Self {
        Self {
            days: date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE,
        }
    }

    /// Convert back to a calendar date.
    pub fn to_naive(&self) -> Result<NaiveDate> {
        self.days
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(Error::ValueOutOfRange {
                target: "NaiveDate",
                value: self.days as i64,
            })
    }
}

impl fmt::Display for SqlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Ok(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Err(_) => write!(f, "<date {} days>", self.days),
        }
    }
}

/// Driver time: a wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlTime {
    /// Seconds since midnight (0..86400).
    pub seconds: u32,
    /// Nanoseconds within the second (may exceed 999,999,999 for a leap second).
    pub nanos: u32,
}

impl SqlTime {
    /// Create a time from seconds since midnight and nanoseconds.
    pub fn new(seconds: u32, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Convert a wall-clock time into a driver time.
    pub fn from_naive(time: &NaiveTime) -> Self {
        Self {
            seconds: time.num_seconds_from_midnight(),
            nanos: time.nanosecond(),
        }
    }

    /// Convert back to a wall-clock time.
    pub fn to_naive(&self) -> Result<NaiveTime> {
        NaiveTime::from_num_seconds_from_midnight_opt(self.seconds, self.nanos).ok_or(
            Error::ValueOutOfRange {
                target: "NaiveTime",
                value: self.seconds as i64,
            },
        )
    }
}

impl fmt::Display for SqlTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Ok(time) => write!(f, "{}", time.format("%H:%M:%S%.f")),
            Err(_) => write!(f, "<time {}s {}ns>", self.seconds, self.nanos),
        }
    }
}
