//! Decoded snapshot of a single field value.

use std::fmt;

use super::handles::{DecFloat16, DecFloat34, Quad};
use super::temporal::{FbDate, FbTime, FbTimestamp};
use crate::message::decode::{
    decode_date, decode_time, dec16_to_string, dec34_to_string, format_scaled,
};

/// Field value decoded according to its SQL type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// NULL value.
    Null,
    Boolean(bool),
    /// SMALLINT or scaled NUMERIC: raw value and scale.
    Int16(i16, i32),
    /// INTEGER or scaled NUMERIC: raw value and scale.
    Int32(i32, i32),
    /// BIGINT or scaled NUMERIC: raw value and scale.
    Int64(i64, i32),
    /// INT128 or scaled NUMERIC: raw value and scale.
    Int128(i128, i32),
    Float32(f32),
    Float64(f64),
    DecFloat16(DecFloat16),
    DecFloat34(DecFloat34),
    Date(FbDate),
    Time(FbTime),
    Timestamp(FbTimestamp),
    /// CHAR or VARCHAR in a character set.
    Text(String),
    /// BINARY or VARBINARY.
    Binary(Vec<u8>),
    /// BLOB or ARRAY id.
    Quad(Quad),
    /// Bytes of a type with no native mapping (zoned temporal types).
    Raw(Vec<u8>),
}

impl FieldValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Try to get the value as an i64, ignoring scale.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int16(v, _) => Some(*v as i64),
            FieldValue::Int32(v, _) => Some(*v as i64),
            FieldValue::Int64(v, _) => Some(*v),
            FieldValue::Int128(v, _) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get the value as an f64. Scaled integers are scaled.
    pub fn as_f64(&self) -> Option<f64> {
        let scaled = |v: f64, scale: i32| v * 10f64.powi(scale);
        match self {
            FieldValue::Float32(v) => Some(*v as f64),
            FieldValue::Float64(v) => Some(*v),
            FieldValue::Int16(v, s) => Some(scaled(*v as f64, *s)),
            FieldValue::Int32(v, s) => Some(scaled(*v as f64, *s)),
            FieldValue::Int64(v, s) => Some(scaled(*v as f64, *s)),
            FieldValue::Int128(v, s) => Some(scaled(*v as f64, *s)),
            _ => None,
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Binary(b) | FieldValue::Raw(b) => Some(b),
            FieldValue::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Try to get the value as a BLOB/ARRAY id.
    pub fn as_quad(&self) -> Option<Quad> {
        match self {
            FieldValue::Quad(q) => Some(*q),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "NULL"),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Int16(v, s) => write_scaled(f, *v as i128, *s),
            FieldValue::Int32(v, s) => write_scaled(f, *v as i128, *s),
            FieldValue::Int64(v, s) => write_scaled(f, *v as i128, *s),
            FieldValue::Int128(v, s) => write_scaled(f, *v, *s),
            FieldValue::Float32(v) => write!(f, "{}", v),
            FieldValue::Float64(v) => write!(f, "{}", v),
            FieldValue::DecFloat16(d) => write!(f, "{}", dec16_to_string(d)),
            FieldValue::DecFloat34(d) => write!(f, "{}", dec34_to_string(d)),
            FieldValue::Date(d) => match decode_date(*d) {
                Ok(date) => write!(f, "{}", date),
                Err(_) => write!(f, "<DATE: day {}>", d.days()),
            },
            FieldValue::Time(t) => match decode_time(*t) {
                Ok(time) => write!(f, "{}", time),
                Err(_) => write!(f, "<TIME: {} units>", t.units()),
            },
            FieldValue::Timestamp(ts) => match (decode_date(ts.date), decode_time(ts.time)) {
                (Ok(date), Ok(time)) => write!(f, "{} {}", date, time),
                _ => write!(f, "<TIMESTAMP: day {} units {}>", ts.date.days(), ts.time.units()),
            },
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Binary(b) => write!(f, "<BINARY: {} bytes>", b.len()),
            FieldValue::Quad(q) => write!(f, "<QUAD: {}>", q),
            FieldValue::Raw(b) => write!(f, "<RAW: {} bytes>", b.len()),
        }
    }
}

/// Scales beyond the exact numeric range fall back to exponent form.
fn write_scaled(f: &mut fmt::Formatter<'_>, value: i128, scale: i32) -> fmt::Result {
    match format_scaled(value, scale) {
        Ok(text) => write!(f, "{}", text),
        Err(_) => write!(f, "{}E{}", value, scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_field_value_null() {
        let val = FieldValue::Null;
        assert!(val.is_null());
        assert_eq!(val.as_str(), None);
        assert_eq!(format!("{}", val), "NULL");
    }

    #[test]
    fn test_field_value_scaled() {
        let val = FieldValue::Int32(-1267, -2);
        assert_eq!(format!("{}", val), "-12.67");
        assert_eq!(val.as_i64(), Some(-1267));
        assert!((val.as_f64().unwrap() + 12.67).abs() < 1e-9);
    }

    #[test]
    fn test_field_value_date() {
        let date = FbDate::from_naive(NaiveDate::from_ymd_opt(2024, 10, 21).unwrap());
        assert_eq!(format!("{}", FieldValue::Date(date)), "2024-10-21");
    }

    #[test]
    fn test_field_value_time_matches_string_form() {
        let time = FbTime::from_naive(NaiveTime::from_hms_milli_opt(8, 5, 3, 250).unwrap());
        assert_eq!(format!("{}", FieldValue::Time(time)), "08:05:03.2500");

        let date = FbDate::from_naive(NaiveDate::from_ymd_opt(987, 1, 2).unwrap());
        let ts = FbTimestamp::new(date, time);
        assert_eq!(
            format!("{}", FieldValue::Timestamp(ts)),
            "0987-01-02 08:05:03.2500"
        );
        assert_eq!(
            format!("{}", FieldValue::Time(FbTime::from_units(864_000_000))),
            "<TIME: 864000000 units>"
        );
    }

    #[test]
    fn test_field_value_scale_out_of_range() {
        assert_eq!(format!("{}", FieldValue::Int64(12, -40)), "12E-40");
        assert_eq!(format!("{}", FieldValue::Int128(-5, -2)), "-0.05");
    }

    #[test]
    fn test_field_value_text_and_binary() {
        let text = FieldValue::Text("hello".to_string());
        assert_eq!(text.as_str(), Some("hello"));
        assert_eq!(text.as_bytes(), Some(&b"hello"[..]));

        let bin = FieldValue::Binary(vec![1, 2, 3]);
        assert_eq!(bin.as_str(), None);
        assert_eq!(format!("{}", bin), "<BINARY: 3 bytes>");
    }
}
