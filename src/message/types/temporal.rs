//! Date and time values as stored in a message buffer.
//!
//! - DATE: signed 32-bit count of days since 1858-11-17
//! - TIME: unsigned 32-bit count of 1/10000 seconds since midnight
//! - TIMESTAMP: DATE followed by TIME
//!
//! All values are little-endian in the buffer.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::message::constants::{DATE_EPOCH_DAYS_FROM_CE, SECONDS_PER_DAY, TIME_SECONDS_PRECISION};

/// Encoded DATE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FbDate(pub i32);

impl FbDate {
    pub const WIRE_SIZE: usize = 4;

    /// Create from a day number.
    pub fn from_days(days: i32) -> Self {
        Self(days)
    }

    /// Day number since 1858-11-17.
    pub fn days(&self) -> i32 {
        self.0
    }

    /// Encode a calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce() - DATE_EPOCH_DAYS_FROM_CE)
    }

    /// Decode to a calendar date.
    ///
    /// Returns `None` when the day number is outside chrono's supported range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        self.0
            .checked_add(DATE_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    pub(crate) fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(i32::from_le_bytes(bytes))
    }

    pub(crate) fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Encoded TIME value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FbTime(pub u32);

impl FbTime {
    pub const WIRE_SIZE: usize = 4;

    /// Create from 1/10000 second units since midnight.
    pub fn from_units(units: u32) -> Self {
        Self(units)
    }

    /// 1/10000 second units since midnight.
    pub fn units(&self) -> u32 {
        self.0
    }

    /// Encode a wall clock time. Sub-100µs precision is truncated.
    pub fn from_naive(time: NaiveTime) -> Self {
        // leap seconds report nanos >= 1e9
        let fractions = (time.nanosecond() / 100_000).min(TIME_SECONDS_PRECISION - 1);
        Self(time.num_seconds_from_midnight() * TIME_SECONDS_PRECISION + fractions)
    }

    /// Decode to a wall clock time.
    ///
    /// Returns `None` for values at or past midnight of the next day.
    pub fn to_naive(&self) -> Option<NaiveTime> {
        let secs = self.0 / TIME_SECONDS_PRECISION;
        if secs >= SECONDS_PER_DAY {
            return None;
        }
        let nanos = (self.0 % TIME_SECONDS_PRECISION) * 100_000;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
    }

    pub(crate) fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    pub(crate) fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Encoded TIMESTAMP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FbTimestamp {
    pub date: FbDate,
    pub time: FbTime,
}

impl FbTimestamp {
    pub const WIRE_SIZE: usize = 8;

    pub fn new(date: FbDate, time: FbTime) -> Self {
        Self { date, time }
    }

    /// Encode a calendar date and time.
    pub fn from_naive(value: NaiveDateTime) -> Self {
        Self {
            date: FbDate::from_naive(value.date()),
            time: FbTime::from_naive(value.time()),
        }
    }

    /// Decode to a calendar date and time.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(self.date.to_naive()?, self.time.to_naive()?))
    }

    pub(crate) fn from_le_bytes(bytes: [u8; 8]) -> Self {
        let mut date = [0u8; 4];
        let mut time = [0u8; 4];
        date.copy_from_slice(&bytes[..4]);
        time.copy_from_slice(&bytes[4..]);
        Self {
            date: FbDate::from_le_bytes(date),
            time: FbTime::from_le_bytes(time),
        }
    }

    pub(crate) fn to_le_bytes(self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&self.date.to_le_bytes());
        bytes[4..].copy_from_slice(&self.time.to_le_bytes());
        bytes
    }
}

/// Calendar fields of a decoded DATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Clock fields of a decoded TIME. `fractions` is in 1/10000 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub fractions: u32,
}

impl From<FbTime> for TimeParts {
    fn from(time: FbTime) -> Self {
        let total_seconds = time.0 / TIME_SECONDS_PRECISION;
        Self {
            hours: total_seconds / 3600,
            minutes: total_seconds / 60 % 60,
            seconds: total_seconds % 60,
            fractions: time.0 % TIME_SECONDS_PRECISION,
        }
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:04}",
            self.hours, self.minutes, self.seconds, self.fractions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_epoch() {
        let epoch = NaiveDate::from_ymd_opt(1858, 11, 17).unwrap();
        assert_eq!(FbDate::from_naive(epoch), FbDate(0));
        assert_eq!(FbDate(0).to_naive(), Some(epoch));
    }

    #[test]
    fn test_date_known_values() {
        // 1970-01-01 is day 40587
        let unix = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(FbDate::from_naive(unix).days(), 40587);

        let before = NaiveDate::from_ymd_opt(1858, 11, 16).unwrap();
        assert_eq!(FbDate::from_naive(before).days(), -1);
    }

    #[test]
    fn test_date_out_of_range() {
        assert_eq!(FbDate(i32::MAX).to_naive(), None);
    }

    #[test]
    fn test_time_roundtrip() {
        let time = NaiveTime::from_hms_micro_opt(13, 45, 30, 123_400).unwrap();
        let encoded = FbTime::from_naive(time);
        assert_eq!(encoded.units(), (13 * 3600 + 45 * 60 + 30) * 10_000 + 1234);
        assert_eq!(encoded.to_naive(), Some(time));
    }

    #[test]
    fn test_time_past_midnight() {
        assert_eq!(FbTime(86_400 * 10_000).to_naive(), None);
    }

    #[test]
    fn test_time_parts() {
        let parts = TimeParts::from(FbTime((1 * 3600 + 2 * 60 + 3) * 10_000 + 45));
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 2);
        assert_eq!(parts.seconds, 3);
        assert_eq!(parts.fractions, 45);
        assert_eq!(parts.to_string(), "01:02:03.0045");
    }

    #[test]
    fn test_timestamp_bytes() {
        let ts = FbTimestamp::new(FbDate(58_000), FbTime(1234));
        let bytes = ts.to_le_bytes();
        assert_eq!(&bytes[..4], &58_000i32.to_le_bytes());
        assert_eq!(&bytes[4..], &1234u32.to_le_bytes());
        assert_eq!(FbTimestamp::from_le_bytes(bytes), ts);
    }

    #[test]
    fn test_date_parts_display() {
        let parts = DateParts {
            year: 2024,
            month: 3,
            day: 5,
        };
        assert_eq!(parts.to_string(), "2024-03-05");
    }
}
