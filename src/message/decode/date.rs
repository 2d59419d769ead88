//! DATE and TIME codecs.
//!
//! DATE is a day count since 1858-11-17, TIME a count of 1/10000 seconds
//! since midnight. Calendar arithmetic goes through `chrono`.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::message::constants::TIME_SECONDS_PRECISION;
use crate::message::types::{DateParts, FbDate, FbTime, TimeParts};

/// Decode a DATE into calendar fields.
///
/// # Errors
/// Returns `Error::Codec` if the day number is outside the supported range.
pub fn decode_date(date: FbDate) -> Result<DateParts> {
    date.to_naive()
        .map(DateParts::from)
        .ok_or_else(|| Error::codec(format!("DATE out of range: day {}", date.days())))
}

/// Encode calendar fields into a DATE.
///
/// # Errors
/// Returns `Error::Codec` if the fields do not name a real date.
pub fn encode_date(parts: DateParts) -> Result<FbDate> {
    if !(1..=12).contains(&parts.month) {
        return Err(Error::codec(format!("Invalid month: {}", parts.month)));
    }
    if !(1..=31).contains(&parts.day) {
        return Err(Error::codec(format!("Invalid day: {}", parts.day)));
    }
    let date = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day).ok_or_else(|| {
        Error::codec(format!(
            "Invalid DATE: year={}, month={}, day={}",
            parts.year, parts.month, parts.day
        ))
    })?;
    Ok(FbDate::from_naive(date))
}

/// Decode a TIME into clock fields.
///
/// # Errors
/// Returns `Error::Codec` if the value is past the end of the day.
pub fn decode_time(time: FbTime) -> Result<TimeParts> {
    let parts = TimeParts::from(time);
    if parts.hours > 23 {
        return Err(Error::codec(format!(
            "TIME out of range: {} units",
            time.units()
        )));
    }
    Ok(parts)
}

/// Encode clock fields into a TIME.
///
/// # Errors
/// Returns `Error::Codec` if any field is out of range.
pub fn encode_time(parts: TimeParts) -> Result<FbTime> {
    if parts.hours > 23 {
        return Err(Error::codec(format!("Invalid hour: {}", parts.hours)));
    }
    if parts.minutes > 59 {
        return Err(Error::codec(format!("Invalid minute: {}", parts.minutes)));
    }
    if parts.seconds > 59 {
        return Err(Error::codec(format!("Invalid second: {}", parts.seconds)));
    }
    if parts.fractions >= TIME_SECONDS_PRECISION {
        return Err(Error::codec(format!("Invalid fraction: {}", parts.fractions)));
    }
    let seconds = parts.hours * 3600 + parts.minutes * 60 + parts.seconds;
    Ok(FbTime(seconds * TIME_SECONDS_PRECISION + parts.fractions))
}
