//! Value codecs for message fields.
//!
//! Field accessors never decode dates or arbitrary precision numbers on
//! their own. They call a [`ValueCodec`] handed to the row buffer, so the
//! caller decides which implementation is used.
//!
//! ## Currently Supported
//!
//! | SQL Type | Module |
//! |----------|--------|
//! | NUMERIC / DECIMAL / INT128 | `scaled` |
//! | DATE / TIME | `date` |
//! | DECFLOAT(16) / DECFLOAT(34) | `decfloat` |

mod date;
mod decfloat;
mod scaled;

pub use date::{decode_date, decode_time, encode_date, encode_time};
pub use decfloat::{decode_dec16, decode_dec34, dec16_to_string, dec34_to_string, DecimalValue};
pub use scaled::format_scaled;

use crate::error::Result;
use crate::message::types::{DateParts, DecFloat16, DecFloat34, FbDate, FbTime, TimeParts};

/// Conversions a field accessor delegates to its environment.
pub trait ValueCodec: Send + Sync {
    /// Split a DATE into calendar fields.
    fn decode_date(&self, date: FbDate) -> Result<DateParts>;

    /// Build a DATE from calendar fields.
    fn encode_date(&self, parts: DateParts) -> Result<FbDate>;

    /// Split a TIME into clock fields.
    fn decode_time(&self, time: FbTime) -> Result<TimeParts>;

    /// Build a TIME from clock fields.
    fn encode_time(&self, parts: TimeParts) -> Result<FbTime>;

    /// Render an INT128 with its decimal scale.
    fn int128_to_string(&self, value: i128, scale: i32) -> Result<String>;

    /// Render a DECFLOAT(16).
    fn dec16_to_string(&self, value: &DecFloat16) -> Result<String>;

    /// Render a DECFLOAT(34).
    fn dec34_to_string(&self, value: &DecFloat34) -> Result<String>;
}

/// Pure Rust codec, used unless the caller supplies another one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCodec;

impl ValueCodec for NativeCodec {
    fn decode_date(&self, date: FbDate) -> Result<DateParts> {
        decode_date(date)
    }

    fn encode_date(&self, parts: DateParts) -> Result<FbDate> {
        encode_date(parts)
    }

    fn decode_time(&self, time: FbTime) -> Result<TimeParts> {
        decode_time(time)
    }

    fn encode_time(&self, parts: TimeParts) -> Result<FbTime> {
        encode_time(parts)
    }

    fn int128_to_string(&self, value: i128, scale: i32) -> Result<String> {
        format_scaled(value, scale)
    }

    fn dec16_to_string(&self, value: &DecFloat16) -> Result<String> {
        Ok(dec16_to_string(value))
    }

    fn dec34_to_string(&self, value: &DecFloat34) -> Result<String> {
        Ok(dec34_to_string(value))
    }
}
