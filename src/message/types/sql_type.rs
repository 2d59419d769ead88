//! SQL type tag of a message field.
//!
//! The tag alone decides how the value region is laid out. Scale, length,
//! sub type and charset live on the descriptor, since the same tag can be
//! declared with different attributes.

use crate::message::constants::{
    SQL_ARRAY, SQL_BLOB, SQL_BOOLEAN, SQL_DEC16, SQL_DEC34, SQL_DOUBLE, SQL_D_FLOAT, SQL_FLOAT,
    SQL_INT128, SQL_INT64, SQL_LONG, SQL_NULL, SQL_QUAD, SQL_SHORT, SQL_TEXT, SQL_TIMESTAMP,
    SQL_TIMESTAMP_TZ, SQL_TIMESTAMP_TZ_EX, SQL_TIME_TZ, SQL_TIME_TZ_EX, SQL_TYPE_DATE,
    SQL_TYPE_TIME, SQL_VARYING,
};

/// SQL type tag of a message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Null,
    Boolean,
    /// SMALLINT, or NUMERIC/DECIMAL when scaled.
    Int16,
    /// INTEGER, or NUMERIC/DECIMAL when scaled.
    Int32,
    /// BIGINT, or NUMERIC/DECIMAL when scaled.
    Int64,
    /// INT128, or NUMERIC/DECIMAL when scaled.
    Int128,
    Float32,
    Float64,
    DecFloat16,
    DecFloat34,
    Date,
    Time,
    Timestamp,
    /// TIME WITH TIME ZONE. `extended` carries the zone offset as well.
    TimeTz { extended: bool },
    /// TIMESTAMP WITH TIME ZONE. `extended` carries the zone offset as well.
    TimestampTz { extended: bool },
    /// CHAR(n) / BINARY(n), space padded.
    FixedText,
    /// VARCHAR(n) / VARBINARY(n), length prefixed.
    VaryingText,
    Blob,
    Array,
    Quad,
    /// A type code this crate does not know.
    Unknown(u32),
}

impl SqlType {
    /// Create from a raw type code.
    ///
    /// The low bit (nullable marker) is ignored. Unknown codes are kept as
    /// `SqlType::Unknown` so that metadata for them can still be described.
    pub fn from_raw(code: u32) -> Self {
        match code & !1 {
            SQL_NULL => SqlType::Null,
            SQL_BOOLEAN => SqlType::Boolean,
            SQL_SHORT => SqlType::Int16,
            SQL_LONG => SqlType::Int32,
            SQL_INT64 => SqlType::Int64,
            SQL_INT128 => SqlType::Int128,
            SQL_FLOAT => SqlType::Float32,
            SQL_DOUBLE | SQL_D_FLOAT => SqlType::Float64,
            SQL_DEC16 => SqlType::DecFloat16,
            SQL_DEC34 => SqlType::DecFloat34,
            SQL_TYPE_DATE => SqlType::Date,
            SQL_TYPE_TIME => SqlType::Time,
            SQL_TIMESTAMP => SqlType::Timestamp,
            SQL_TIME_TZ => SqlType::TimeTz { extended: false },
            SQL_TIME_TZ_EX => SqlType::TimeTz { extended: true },
            SQL_TIMESTAMP_TZ => SqlType::TimestampTz { extended: false },
            SQL_TIMESTAMP_TZ_EX => SqlType::TimestampTz { extended: true },
            SQL_TEXT => SqlType::FixedText,
            SQL_VARYING => SqlType::VaryingText,
            SQL_BLOB => SqlType::Blob,
            SQL_ARRAY => SqlType::Array,
            SQL_QUAD => SqlType::Quad,
            other => SqlType::Unknown(other),
        }
    }

    /// Get the raw type code.
    pub fn type_code(&self) -> u32 {
        match self {
            SqlType::Null => SQL_NULL,
            SqlType::Boolean => SQL_BOOLEAN,
            SqlType::Int16 => SQL_SHORT,
            SqlType::Int32 => SQL_LONG,
            SqlType::Int64 => SQL_INT64,
            SqlType::Int128 => SQL_INT128,
            SqlType::Float32 => SQL_FLOAT,
            SqlType::Float64 => SQL_DOUBLE,
            SqlType::DecFloat16 => SQL_DEC16,
            SqlType::DecFloat34 => SQL_DEC34,
            SqlType::Date => SQL_TYPE_DATE,
            SqlType::Time => SQL_TYPE_TIME,
            SqlType::Timestamp => SQL_TIMESTAMP,
            SqlType::TimeTz { extended: false } => SQL_TIME_TZ,
            SqlType::TimeTz { extended: true } => SQL_TIME_TZ_EX,
            SqlType::TimestampTz { extended: false } => SQL_TIMESTAMP_TZ,
            SqlType::TimestampTz { extended: true } => SQL_TIMESTAMP_TZ_EX,
            SqlType::FixedText => SQL_TEXT,
            SqlType::VaryingText => SQL_VARYING,
            SqlType::Blob => SQL_BLOB,
            SqlType::Array => SQL_ARRAY,
            SqlType::Quad => SQL_QUAD,
            SqlType::Unknown(code) => *code,
        }
    }

    /// Width of the value region for fixed-width types.
    ///
    /// Returns `None` for text types, whose width comes from the declared
    /// length, and for unknown codes.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            SqlType::Null => Some(0),
            SqlType::Boolean => Some(1),
            SqlType::Int16 => Some(2),
            SqlType::Int32 | SqlType::Float32 | SqlType::Date | SqlType::Time => Some(4),
            SqlType::Int64
            | SqlType::Float64
            | SqlType::DecFloat16
            | SqlType::Timestamp
            | SqlType::Blob
            | SqlType::Array
            | SqlType::Quad => Some(8),
            SqlType::TimeTz { .. } => Some(8),
            SqlType::TimestampTz { .. } => Some(12),
            SqlType::Int128 | SqlType::DecFloat34 => Some(16),
            SqlType::FixedText | SqlType::VaryingText | SqlType::Unknown(_) => None,
        }
    }

    /// Natural alignment of the value region inside a message.
    pub fn alignment(&self) -> usize {
        match self {
            SqlType::Null | SqlType::Boolean | SqlType::FixedText | SqlType::Unknown(_) => 1,
            SqlType::Int16 | SqlType::VaryingText => 2,
            SqlType::Int32
            | SqlType::Float32
            | SqlType::Date
            | SqlType::Time
            | SqlType::Timestamp
            | SqlType::TimeTz { .. }
            | SqlType::TimestampTz { .. }
            | SqlType::Blob
            | SqlType::Array
            | SqlType::Quad => 4,
            SqlType::Int64
            | SqlType::Int128
            | SqlType::Float64
            | SqlType::DecFloat16
            | SqlType::DecFloat34 => 8,
        }
    }

    /// Check if this is a text type (CHAR or VARCHAR).
    pub fn is_text(&self) -> bool {
        matches!(self, SqlType::FixedText | SqlType::VaryingText)
    }
}
