//! Typed access to one field of a message buffer.
//!
//! A [`FieldAccessor`] pairs a [`FieldDescriptor`] with the bytes of the
//! buffer it describes. Reads and writes are checked against the field's
//! SQL type: asking for a native type the field cannot hold fails with
//! `Error::TypeMismatch` and leaves the buffer untouched.
//!
//! Conversion rules:
//!
//! | Native | Read from | Write to |
//! |--------|-----------|----------|
//! | `bool` | BOOLEAN, SMALLINT, INTEGER, BIGINT | BOOLEAN |
//! | `i16` | SMALLINT | SMALLINT, INTEGER, BIGINT |
//! | `i32` | SMALLINT, INTEGER | INTEGER, BIGINT |
//! | `i64` | SMALLINT, INTEGER, BIGINT | BIGINT |
//! | `i128` | INT128 | INT128 |
//! | `f32` | FLOAT | FLOAT |
//! | `f64` | FLOAT, DOUBLE PRECISION | DOUBLE PRECISION |
//! | `FbDate` | DATE, TIMESTAMP | DATE, TIMESTAMP |
//! | `FbTime` | TIME, TIMESTAMP | TIME, TIMESTAMP |
//! | `FbTimestamp` | TIMESTAMP | TIMESTAMP |
//! | `Quad` | BLOB, ARRAY, QUAD | BLOB, ARRAY, QUAD |
//! | `String` | any scalar or text type | CHAR, VARCHAR |
//!
//! Integer reads and writes never reinterpret the scale; `get_string`
//! applies it.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};
use crate::message::constants::{
    FB_FALSE, FB_TRUE, NULL_FLAG_NULL, NULL_FLAG_PRESENT, VARYING_PREFIX_SIZE,
};
use crate::message::decode::{format_scaled, ValueCodec};
use crate::message::types::{
    DecFloat16, DecFloat34, FbDate, FbTime, FbTimestamp, FieldDescriptor, FieldValue, Quad,
    SqlType,
};

/// Read-only view of a field.
pub type Field<'a> = FieldAccessor<'a, &'a [u8]>;

/// Read-write view of a field.
pub type FieldMut<'a> = FieldAccessor<'a, &'a mut [u8]>;

/// View of one field bound to a message buffer.
///
/// `B` is the borrowed buffer: `&[u8]` for reading, `&mut [u8]` for
/// reading and writing. The view cannot outlive the buffer it borrows.
pub struct FieldAccessor<'a, B> {
    descriptor: &'a FieldDescriptor,
    buffer: B,
    codec: &'a dyn ValueCodec,
}

impl<'a, B: Deref<Target = [u8]>> FieldAccessor<'a, B> {
    /// Bind a descriptor to a buffer.
    ///
    /// # Errors
    /// Returns `Error::FieldOutOfBounds` if the value region or the null
    /// flag does not fit in the buffer.
    pub fn bind(descriptor: &'a FieldDescriptor, buffer: B, codec: &'a dyn ValueCodec) -> Result<Self> {
        let end = descriptor.extent_end();
        if end > buffer.len() {
            return Err(Error::FieldOutOfBounds {
                field: descriptor.name().to_string(),
                end,
                available: buffer.len(),
            });
        }
        Ok(Self {
            descriptor,
            buffer,
            codec,
        })
    }

    /// Bind without the extent check. The caller guarantees the field fits.
    pub(crate) fn bind_unchecked(
        descriptor: &'a FieldDescriptor,
        buffer: B,
        codec: &'a dyn ValueCodec,
    ) -> Self {
        debug_assert!(descriptor.extent_end() <= buffer.len());
        Self {
            descriptor,
            buffer,
            codec,
        }
    }

    /// Get the field's metadata.
    pub fn descriptor(&self) -> &FieldDescriptor {
        self.descriptor
    }

    /// Check the null flag. Only `-1` means NULL.
    pub fn is_null(&self) -> bool {
        let start = self.descriptor.null_offset() as usize;
        let flag = i16::from_le_bytes([self.buffer[start], self.buffer[start + 1]]);
        flag == NULL_FLAG_NULL
    }

    /// Get a BOOLEAN. Integer fields read as true when nonzero.
    pub fn get_bool(&self) -> Result<bool> {
        match self.descriptor.sql_type() {
            SqlType::Boolean => Ok(self.read::<1>()[0] != FB_FALSE),
            SqlType::Int16 => Ok(i16::from_le_bytes(self.read()) != 0),
            SqlType::Int32 => Ok(i32::from_le_bytes(self.read()) != 0),
            SqlType::Int64 => Ok(i64::from_le_bytes(self.read()) != 0),
            _ => Err(self.read_mismatch("bool")),
        }
    }

    /// Get a SMALLINT.
    pub fn get_i16(&self) -> Result<i16> {
        match self.descriptor.sql_type() {
            SqlType::Int16 => Ok(i16::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("i16")),
        }
    }

    /// Get an INTEGER, widening SMALLINT.
    pub fn get_i32(&self) -> Result<i32> {
        match self.descriptor.sql_type() {
            SqlType::Int16 => Ok(i16::from_le_bytes(self.read()) as i32),
            SqlType::Int32 => Ok(i32::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("i32")),
        }
    }

    /// Get a BIGINT, widening SMALLINT and INTEGER.
    pub fn get_i64(&self) -> Result<i64> {
        match self.descriptor.sql_type() {
            SqlType::Int16 => Ok(i16::from_le_bytes(self.read()) as i64),
            SqlType::Int32 => Ok(i32::from_le_bytes(self.read()) as i64),
            SqlType::Int64 => Ok(i64::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("i64")),
        }
    }

    /// Get an INT128.
    pub fn get_i128(&self) -> Result<i128> {
        match self.descriptor.sql_type() {
            SqlType::Int128 => Ok(i128::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("i128")),
        }
    }

    /// Get a FLOAT.
    pub fn get_f32(&self) -> Result<f32> {
        match self.descriptor.sql_type() {
            SqlType::Float32 => Ok(f32::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("f32")),
        }
    }

    /// Get a DOUBLE PRECISION, widening FLOAT.
    pub fn get_f64(&self) -> Result<f64> {
        match self.descriptor.sql_type() {
            SqlType::Float32 => Ok(f32::from_le_bytes(self.read()) as f64),
            SqlType::Float64 => Ok(f64::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("f64")),
        }
    }

    /// Get the raw bits of a DECFLOAT(16).
    pub fn get_dec16(&self) -> Result<DecFloat16> {
        match self.descriptor.sql_type() {
            SqlType::DecFloat16 => Ok(DecFloat16(self.read())),
            _ => Err(self.read_mismatch("DecFloat16")),
        }
    }

    /// Get the raw bits of a DECFLOAT(34).
    pub fn get_dec34(&self) -> Result<DecFloat34> {
        match self.descriptor.sql_type() {
            SqlType::DecFloat34 => Ok(DecFloat34(self.read())),
            _ => Err(self.read_mismatch("DecFloat34")),
        }
    }

    /// Get a DATE, or the date part of a TIMESTAMP.
    pub fn get_date(&self) -> Result<FbDate> {
        match self.descriptor.sql_type() {
            SqlType::Date => Ok(FbDate::from_le_bytes(self.read())),
            SqlType::Timestamp => Ok(FbTimestamp::from_le_bytes(self.read()).date),
            _ => Err(self.read_mismatch("FbDate")),
        }
    }

    /// Get a TIME, or the time part of a TIMESTAMP.
    pub fn get_time(&self) -> Result<FbTime> {
        match self.descriptor.sql_type() {
            SqlType::Time => Ok(FbTime::from_le_bytes(self.read())),
            SqlType::Timestamp => Ok(FbTimestamp::from_le_bytes(self.read()).time),
            _ => Err(self.read_mismatch("FbTime")),
        }
    }

    /// Get a TIMESTAMP.
    pub fn get_timestamp(&self) -> Result<FbTimestamp> {
        match self.descriptor.sql_type() {
            SqlType::Timestamp => Ok(FbTimestamp::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("FbTimestamp")),
        }
    }

    /// Get the BLOB/ARRAY id.
    pub fn get_quad(&self) -> Result<Quad> {
        match self.descriptor.sql_type() {
            SqlType::Blob | SqlType::Array | SqlType::Quad => Ok(Quad::from_le_bytes(self.read())),
            _ => Err(self.read_mismatch("Quad")),
        }
    }

    /// Get the full CHAR(n) region, padding included.
    pub fn char_bytes(&self) -> Result<&[u8]> {
        match self.descriptor.sql_type() {
            SqlType::FixedText => Ok(&self.buffer[self.descriptor.value_range()]),
            _ => Err(self.read_mismatch("char[]")),
        }
    }

    /// Get the full BINARY(n) region. Same bytes as [`char_bytes`](Self::char_bytes).
    pub fn binary_bytes(&self) -> Result<&[u8]> {
        match self.descriptor.sql_type() {
            SqlType::FixedText => Ok(&self.buffer[self.descriptor.value_range()]),
            _ => Err(self.read_mismatch("u8[]")),
        }
    }

    /// Get the payload of a VARCHAR/VARBINARY.
    ///
    /// A stored length above the declared length is clamped to it.
    pub fn varying_bytes(&self) -> Result<&[u8]> {
        match self.descriptor.sql_type() {
            SqlType::VaryingText => {
                let start = self.descriptor.offset() as usize;
                let stored = u16::from_le_bytes([self.buffer[start], self.buffer[start + 1]]);
                let len = (stored as usize).min(self.descriptor.length() as usize);
                let payload = start + VARYING_PREFIX_SIZE;
                Ok(&self.buffer[payload..payload + len])
            }
            _ => Err(self.read_mismatch("VaryingBytes")),
        }
    }

    /// Render the value as text.
    ///
    /// Text types are decoded as UTF-8 (lossy); CHAR keeps its padding.
    /// Scaled integers are rendered in fixed point, dates as `YYYY-MM-DD`,
    /// times as `HH:MM:SS.FFFF`.
    pub fn get_string(&self) -> Result<String> {
        let scale = self.descriptor.scale();
        match self.descriptor.sql_type() {
            SqlType::FixedText => Ok(String::from_utf8_lossy(self.char_bytes()?).into_owned()),
            SqlType::VaryingText => {
                Ok(String::from_utf8_lossy(self.varying_bytes()?).into_owned())
            }
            SqlType::Boolean => Ok(String::from(if self.get_bool()? { "true" } else { "false" })),
            SqlType::Int16 | SqlType::Int32 | SqlType::Int64 => {
                format_scaled(self.get_i64()? as i128, scale)
            }
            SqlType::Int128 => self.codec.int128_to_string(self.get_i128()?, scale),
            SqlType::Float32 => Ok(self.get_f32()?.to_string()),
            SqlType::Float64 => Ok(self.get_f64()?.to_string()),
            SqlType::DecFloat16 => self.codec.dec16_to_string(&self.get_dec16()?),
            SqlType::DecFloat34 => self.codec.dec34_to_string(&self.get_dec34()?),
            SqlType::Date => Ok(self.codec.decode_date(self.get_date()?)?.to_string()),
            SqlType::Time => Ok(self.codec.decode_time(self.get_time()?)?.to_string()),
            SqlType::Timestamp => {
                let ts = self.get_timestamp()?;
                let date = self.codec.decode_date(ts.date)?;
                let time = self.codec.decode_time(ts.time)?;
                Ok(format!("{} {}", date, time))
            }
            SqlType::Null
            | SqlType::TimeTz { .. }
            | SqlType::TimestampTz { .. }
            | SqlType::Blob
            | SqlType::Array
            | SqlType::Quad
            | SqlType::Unknown(_) => Err(self.read_mismatch("String")),
        }
    }

    /// Decode the field into a [`FieldValue`], `FieldValue::Null` when NULL.
    pub fn value(&self) -> Result<FieldValue> {
        if self.is_null() {
            return Ok(FieldValue::Null);
        }
        let scale = self.descriptor.scale();
        let value = match self.descriptor.sql_type() {
            SqlType::Null => FieldValue::Null,
            SqlType::Boolean => FieldValue::Boolean(self.get_bool()?),
            SqlType::Int16 => FieldValue::Int16(self.get_i16()?, scale),
            SqlType::Int32 => FieldValue::Int32(self.get_i32()?, scale),
            SqlType::Int64 => FieldValue::Int64(self.get_i64()?, scale),
            SqlType::Int128 => FieldValue::Int128(self.get_i128()?, scale),
            SqlType::Float32 => FieldValue::Float32(self.get_f32()?),
            SqlType::Float64 => FieldValue::Float64(self.get_f64()?),
            SqlType::DecFloat16 => FieldValue::DecFloat16(self.get_dec16()?),
            SqlType::DecFloat34 => FieldValue::DecFloat34(self.get_dec34()?),
            SqlType::Date => FieldValue::Date(self.get_date()?),
            SqlType::Time => FieldValue::Time(self.get_time()?),
            SqlType::Timestamp => FieldValue::Timestamp(self.get_timestamp()?),
            SqlType::FixedText if self.descriptor.is_binary() => {
                FieldValue::Binary(self.binary_bytes()?.to_vec())
            }
            SqlType::VaryingText if self.descriptor.is_binary() => {
                FieldValue::Binary(self.varying_bytes()?.to_vec())
            }
            SqlType::FixedText | SqlType::VaryingText => FieldValue::Text(self.get_string()?),
            SqlType::Blob | SqlType::Array | SqlType::Quad => FieldValue::Quad(self.get_quad()?),
            SqlType::TimeTz { .. } | SqlType::TimestampTz { .. } | SqlType::Unknown(_) => {
                FieldValue::Raw(self.buffer[self.descriptor.value_range()].to_vec())
            }
        };
        Ok(value)
    }

    fn read<const N: usize>(&self) -> [u8; N] {
        let start = self.descriptor.offset() as usize;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[start..start + N]);
        bytes
    }

    fn read_mismatch(&self, native: &str) -> Error {
        Error::cannot_read(self.descriptor.sql_type_name(), native)
    }
}

impl<'a, B: DerefMut<Target = [u8]>> FieldAccessor<'a, B> {
    /// Set or clear the null flag. Legal for every type.
    pub fn set_null(&mut self, null: bool) {
        let flag = if null { NULL_FLAG_NULL } else { NULL_FLAG_PRESENT };
        let start = self.descriptor.null_offset() as usize;
        self.buffer[start..start + 2].copy_from_slice(&flag.to_le_bytes());
    }

    /// Write a BOOLEAN.
    pub fn set_bool(&mut self, value: bool) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Boolean => self.write(&[if value { FB_TRUE } else { FB_FALSE }]),
            _ => return Err(self.write_mismatch("bool")),
        }
        Ok(())
    }

    /// Write a SMALLINT, widened for INTEGER and BIGINT fields.
    pub fn set_i16(&mut self, value: i16) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Int16 => self.write(&value.to_le_bytes()),
            SqlType::Int32 => self.write(&(value as i32).to_le_bytes()),
            SqlType::Int64 => self.write(&(value as i64).to_le_bytes()),
            _ => return Err(self.write_mismatch("i16")),
        }
        Ok(())
    }

    /// Write an INTEGER, widened for BIGINT fields.
    pub fn set_i32(&mut self, value: i32) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Int32 => self.write(&value.to_le_bytes()),
            SqlType::Int64 => self.write(&(value as i64).to_le_bytes()),
            _ => return Err(self.write_mismatch("i32")),
        }
        Ok(())
    }

    /// Write a BIGINT.
    pub fn set_i64(&mut self, value: i64) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Int64 => self.write(&value.to_le_bytes()),
            _ => return Err(self.write_mismatch("i64")),
        }
        Ok(())
    }

    /// Write an INT128.
    pub fn set_i128(&mut self, value: i128) -> Result<()> {
        *self.int128_bytes_mut()? = value.to_le_bytes();
        Ok(())
    }

    /// In-place access to the little-endian bytes of an INT128.
    pub fn int128_bytes_mut(&mut self) -> Result<&mut [u8; 16]> {
        self.value_array_mut(SqlType::Int128, "i128")
    }

    /// Write a FLOAT.
    pub fn set_f32(&mut self, value: f32) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Float32 => self.write(&value.to_le_bytes()),
            _ => return Err(self.write_mismatch("f32")),
        }
        Ok(())
    }

    /// Write a DOUBLE PRECISION. FLOAT fields are rejected.
    pub fn set_f64(&mut self, value: f64) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Float64 => self.write(&value.to_le_bytes()),
            _ => return Err(self.write_mismatch("f64")),
        }
        Ok(())
    }

    /// Write the raw bits of a DECFLOAT(16).
    pub fn set_dec16(&mut self, value: DecFloat16) -> Result<()> {
        *self.dec16_bytes_mut()? = value.0;
        Ok(())
    }

    /// In-place access to the bytes of a DECFLOAT(16).
    pub fn dec16_bytes_mut(&mut self) -> Result<&mut [u8; 8]> {
        self.value_array_mut(SqlType::DecFloat16, "DecFloat16")
    }

    /// Write the raw bits of a DECFLOAT(34).
    pub fn set_dec34(&mut self, value: DecFloat34) -> Result<()> {
        *self.dec34_bytes_mut()? = value.0;
        Ok(())
    }

    /// In-place access to the bytes of a DECFLOAT(34).
    pub fn dec34_bytes_mut(&mut self) -> Result<&mut [u8; 16]> {
        self.value_array_mut(SqlType::DecFloat34, "DecFloat34")
    }

    /// Write a DATE, or replace the date part of a TIMESTAMP.
    ///
    /// The time part of a TIMESTAMP is left as it was.
    pub fn set_date(&mut self, value: FbDate) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Date | SqlType::Timestamp => self.write(&value.to_le_bytes()),
            _ => return Err(self.write_mismatch("FbDate")),
        }
        Ok(())
    }

    /// Write a TIME, or replace the time part of a TIMESTAMP.
    ///
    /// The date part of a TIMESTAMP is left as it was.
    pub fn set_time(&mut self, value: FbTime) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Time => self.write(&value.to_le_bytes()),
            SqlType::Timestamp => {
                let start = self.descriptor.offset() as usize + FbDate::WIRE_SIZE;
                self.buffer[start..start + FbTime::WIRE_SIZE].copy_from_slice(&value.to_le_bytes());
            }
            _ => return Err(self.write_mismatch("FbTime")),
        }
        Ok(())
    }

    /// Write a TIMESTAMP.
    pub fn set_timestamp(&mut self, value: FbTimestamp) -> Result<()> {
        *self.timestamp_bytes_mut()? = value.to_le_bytes();
        Ok(())
    }

    /// In-place access to the bytes of a TIMESTAMP (date then time).
    pub fn timestamp_bytes_mut(&mut self) -> Result<&mut [u8; 8]> {
        self.value_array_mut(SqlType::Timestamp, "FbTimestamp")
    }

    /// Write the BLOB/ARRAY id.
    pub fn set_quad(&mut self, value: Quad) -> Result<()> {
        match self.descriptor.sql_type() {
            SqlType::Blob | SqlType::Array | SqlType::Quad => self.write(&value.to_le_bytes()),
            _ => return Err(self.write_mismatch("Quad")),
        }
        Ok(())
    }

    /// In-place access to the full CHAR(n) region.
    pub fn char_bytes_mut(&mut self) -> Result<&mut [u8]> {
        match self.descriptor.sql_type() {
            SqlType::FixedText => Ok(&mut self.buffer[self.descriptor.value_range()]),
            _ => Err(self.write_mismatch("char[]")),
        }
    }

    /// In-place access to the full BINARY(n) region.
    pub fn binary_bytes_mut(&mut self) -> Result<&mut [u8]> {
        match self.descriptor.sql_type() {
            SqlType::FixedText => Ok(&mut self.buffer[self.descriptor.value_range()]),
            _ => Err(self.write_mismatch("u8[]")),
        }
    }

    /// Write the payload of a VARCHAR/VARBINARY with its length prefix.
    pub fn set_varying_bytes(&mut self, value: &[u8]) -> Result<()> {
        if self.descriptor.sql_type() != SqlType::VaryingText {
            return Err(self.write_mismatch("VaryingBytes"));
        }
        self.write_text(value)
    }

    /// Write text into a CHAR or VARCHAR field.
    ///
    /// CHAR is padded with spaces to its full length; VARCHAR stores the
    /// exact length.
    ///
    /// # Errors
    /// `Error::TypeMismatch` for any other type, `Error::Overflow` if the
    /// text is longer than the declared length.
    pub fn set_string(&mut self, value: &str) -> Result<()> {
        self.set_bytes(value.as_bytes())
    }

    /// Byte-level form of [`set_string`](Self::set_string).
    pub fn set_bytes(&mut self, value: &[u8]) -> Result<()> {
        if !self.descriptor.sql_type().is_text() {
            return Err(self.write_mismatch("&str"));
        }
        self.write_text(value)
    }

    fn write_text(&mut self, value: &[u8]) -> Result<()> {
        let capacity = self.descriptor.length();
        if value.len() > capacity as usize || value.len() > u16::MAX as usize {
            return Err(Error::Overflow {
                field: self.descriptor.name().to_string(),
                length: value.len(),
                capacity,
            });
        }
        let start = self.descriptor.offset() as usize;
        match self.descriptor.sql_type() {
            SqlType::VaryingText => {
                let payload = start + VARYING_PREFIX_SIZE;
                self.buffer[start..payload].copy_from_slice(&(value.len() as u16).to_le_bytes());
                self.buffer[payload..payload + value.len()].copy_from_slice(value);
            }
            _ => {
                let region = &mut self.buffer[self.descriptor.value_range()];
                region.fill(b' ');
                region[..value.len()].copy_from_slice(value);
            }
        }
        Ok(())
    }

    fn value_array_mut<const N: usize>(&mut self, expected: SqlType, native: &str) -> Result<&mut [u8; N]> {
        let descriptor = self.descriptor;
        if descriptor.sql_type() != expected {
            return Err(self.write_mismatch(native));
        }
        let start = descriptor.offset() as usize;
        (&mut self.buffer[start..start + N])
            .try_into()
            .map_err(|_| Error::cannot_write(native, descriptor.sql_type_name()))
    }

    fn write(&mut self, bytes: &[u8]) {
        let start = self.descriptor.offset() as usize;
        self.buffer[start..start + bytes.len()].copy_from_slice(bytes);
    }

    fn write_mismatch(&self, native: &str) -> Error {
        Error::cannot_write(native, self.descriptor.sql_type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::constants::CS_BINARY;
    use crate::message::decode::NativeCodec;
    use chrono::NaiveDate;

    fn field(sql_type: SqlType) -> FieldDescriptor {
        let width = sql_type.fixed_width().unwrap_or(0) as u32;
        FieldDescriptor::new("F", sql_type).with_offsets(0, 16.max(width))
    }

    fn text(sql_type: SqlType, length: u32) -> FieldDescriptor {
        FieldDescriptor::new("T", sql_type)
            .with_length(length)
            .with_offsets(0, 40)
    }

    #[test]
    fn test_bind_out_of_bounds() {
        let desc = field(SqlType::Int64);
        let buf = [0u8; 8];
        let err = Field::bind(&desc, &buf[..], &NativeCodec).err().unwrap();
        assert!(matches!(err, Error::FieldOutOfBounds { end: 18, available: 8, .. }));
    }

    #[test]
    fn test_null_flag() {
        let desc = field(SqlType::Int32);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        assert!(!f.is_null());
        f.set_null(true);
        assert!(f.is_null());
        assert!(f.is_null());
        f.set_null(false);
        assert!(!f.is_null());
        assert_eq!(&buf[16..18], &[0, 0]);
    }

    #[test]
    fn test_null_flag_encoding() {
        let desc = field(SqlType::Boolean);
        let mut buf = [0u8; 32];
        FieldMut::bind(&desc, &mut buf[..], &NativeCodec)
            .unwrap()
            .set_null(true);
        assert_eq!(&buf[16..18], &[0xff, 0xff]);

        // any other value reads as present
        buf[16] = 1;
        buf[17] = 0;
        let f = Field::bind(&desc, &buf[..], &NativeCodec).unwrap();
        assert!(!f.is_null());
    }

    #[test]
    fn test_bool_from_integers() {
        let desc = field(SqlType::Int32);
        let mut buf = [0u8; 32];
        buf[..4].copy_from_slice(&256i32.to_le_bytes());
        let f = Field::bind(&desc, &buf[..], &NativeCodec).unwrap();
        // low byte is zero, full width is not
        assert!(f.get_bool().unwrap());
    }

    #[test]
    fn test_bool_write_requires_boolean() {
        let desc = field(SqlType::Int16);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        let err = f.set_bool(true).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                from: "bool".to_string(),
                to: "SMALLINT".to_string()
            }
        );
        assert_eq!(buf, [0u8; 32]);
    }

    #[test]
    fn test_widening_writes() {
        let desc = field(SqlType::Int64);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_i16(-2).unwrap();
        assert_eq!(f.get_i64().unwrap(), -2);
        f.set_i32(-70_000).unwrap();
        assert_eq!(f.get_i64().unwrap(), -70_000);
        assert!(f.get_i32().unwrap_err().is_type_mismatch());
        assert!(f.get_i16().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_widening_reads() {
        let desc = field(SqlType::Int16);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_i16(-300).unwrap();
        assert_eq!(f.get_i32().unwrap(), -300);
        assert_eq!(f.get_i64().unwrap(), -300);
        assert!(f.set_i32(1).unwrap_err().is_type_mismatch());
        assert!(f.set_i64(1).unwrap_err().is_type_mismatch());
        assert_eq!(f.get_i16().unwrap(), -300);
    }

    #[test]
    fn test_float_asymmetry() {
        let desc = field(SqlType::Float32);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_f32(1.5).unwrap();
        assert_eq!(f.get_f64().unwrap(), 1.5);
        assert!(f.set_f64(2.5).unwrap_err().is_type_mismatch());
        assert_eq!(f.get_f32().unwrap(), 1.5);
    }

    #[test]
    fn test_int128_in_place() {
        let desc = field(SqlType::Int128);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_i128(-5).unwrap();
        f.int128_bytes_mut().unwrap()[0] = 0xfe;
        assert_eq!(f.get_i128().unwrap(), -2);
        assert!(f.get_i64().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_date_into_timestamp_keeps_time() {
        let desc = field(SqlType::Timestamp);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_timestamp(FbTimestamp::new(FbDate(100), FbTime(5000)))
            .unwrap();
        f.set_date(FbDate(200)).unwrap();
        assert_eq!(
            f.get_timestamp().unwrap(),
            FbTimestamp::new(FbDate(200), FbTime(5000))
        );
        f.set_time(FbTime(7000)).unwrap();
        assert_eq!(f.get_date().unwrap(), FbDate(200));
        assert_eq!(f.get_time().unwrap(), FbTime(7000));
    }

    #[test]
    fn test_date_rejects_time_field() {
        let desc = field(SqlType::Time);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        assert!(f.set_date(FbDate(1)).unwrap_err().is_type_mismatch());
        assert!(f.get_date().unwrap_err().is_type_mismatch());
        assert!(f.get_timestamp().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_char_padding() {
        let desc = text(SqlType::FixedText, 8);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_string("abc").unwrap();
        assert_eq!(f.get_string().unwrap(), "abc     ");
        assert_eq!(f.char_bytes().unwrap(), b"abc     ");
        assert_eq!(f.binary_bytes().unwrap(), b"abc     ");
    }

    #[test]
    fn test_char_overflow_leaves_buffer() {
        let desc = text(SqlType::FixedText, 4);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_string("abcd").unwrap();
        let err = f.set_string("abcde").unwrap_err();
        assert_eq!(
            err,
            Error::Overflow {
                field: "T".to_string(),
                length: 5,
                capacity: 4
            }
        );
        assert_eq!(f.get_string().unwrap(), "abcd");
    }

    #[test]
    fn test_varchar_prefix() {
        let desc = text(SqlType::VaryingText, 10);
        let mut buf = [0u8; 48];
        {
            let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
            f.set_string("hey").unwrap();
            assert_eq!(f.get_string().unwrap(), "hey");
            f.set_string("").unwrap();
            assert_eq!(f.get_string().unwrap(), "");
            f.set_string("0123456789").unwrap();
        }
        assert_eq!(&buf[..2], &10u16.to_le_bytes());
        assert_eq!(&buf[2..12], b"0123456789");
    }

    #[test]
    fn test_varchar_clamps_corrupt_length() {
        let desc = text(SqlType::VaryingText, 4);
        let mut buf = [b'x'; 48];
        buf[..2].copy_from_slice(&500u16.to_le_bytes());
        let f = Field::bind(&desc, &buf[..], &NativeCodec).unwrap();
        assert_eq!(f.varying_bytes().unwrap().len(), 4);
    }

    #[test]
    fn test_string_rejected_by_numbers() {
        let desc = field(SqlType::Int32);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        assert!(f.set_string("12").unwrap_err().is_type_mismatch());
        assert!(f.char_bytes_mut().unwrap_err().is_type_mismatch());
        assert!(f.set_varying_bytes(b"12").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_string_of_numbers() {
        let desc = field(SqlType::Int64).with_scale(-3);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_i64(-12_670).unwrap();
        assert_eq!(f.get_string().unwrap(), "-12.670");

        let desc = field(SqlType::Int128).with_scale(-2);
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_i128(123_456_789_012_345_678_901_234_567_890).unwrap();
        assert_eq!(
            f.get_string().unwrap(),
            "1234567890123456789012345678.90"
        );
    }

    #[test]
    fn test_string_of_temporal() {
        let desc = field(SqlType::Timestamp);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_milli_opt(8, 5, 3, 250)
            .unwrap();
        f.set_timestamp(FbTimestamp::from_naive(dt)).unwrap();
        assert_eq!(f.get_string().unwrap(), "2024-02-29 08:05:03.2500");
    }

    #[test]
    fn test_string_of_blob_fails() {
        let desc = field(SqlType::Blob).with_sub_type(1);
        let buf = [0u8; 32];
        let f = Field::bind(&desc, &buf[..], &NativeCodec).unwrap();
        let err = f.get_string().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot convert value from BLOB SUB_TYPE TEXT to String"
        );
    }

    #[test]
    fn test_quad() {
        let desc = field(SqlType::Array);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_quad(Quad::new(7, 9)).unwrap();
        assert_eq!(f.get_quad().unwrap(), Quad::new(7, 9));
        assert_eq!(f.value().unwrap(), FieldValue::Quad(Quad::new(7, 9)));
    }

    #[test]
    fn test_value_snapshot() {
        let desc = text(SqlType::VaryingText, 6).with_charset(CS_BINARY);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_varying_bytes(&[0, 159, 146]).unwrap();
        assert_eq!(f.value().unwrap(), FieldValue::Binary(vec![0, 159, 146]));
        f.set_null(true);
        assert_eq!(f.value().unwrap(), FieldValue::Null);
    }

    #[test]
    fn test_dec16_in_place() {
        let desc = field(SqlType::DecFloat16);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        *f.dec16_bytes_mut().unwrap() = 0xa230_0000_0000_00a3u64.to_le_bytes();
        assert_eq!(f.get_dec16().unwrap(), DecFloat16::from_bits(0xa230_0000_0000_00a3));
        assert_eq!(f.get_string().unwrap(), "-1.23");

        f.set_dec16(DecFloat16::from_bits(0x2238_0000_0000_0001)).unwrap();
        assert_eq!(f.get_string().unwrap(), "1");
        assert!(f.get_dec34().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_dec34_in_place() {
        let desc = field(SqlType::DecFloat34);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        let one = 0x2208_0000_0000_0000_0000_0000_0000_0001u128;
        *f.dec34_bytes_mut().unwrap() = one.to_le_bytes();
        assert_eq!(f.get_dec34().unwrap().to_bits(), one);
        assert_eq!(f.get_string().unwrap(), "1");
        assert!(f.dec16_bytes_mut().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_timestamp_in_place() {
        let desc = field(SqlType::Timestamp);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        let bytes = f.timestamp_bytes_mut().unwrap();
        bytes[..4].copy_from_slice(&5i32.to_le_bytes());
        bytes[4..].copy_from_slice(&36_000_000u32.to_le_bytes());
        assert_eq!(
            f.get_timestamp().unwrap(),
            FbTimestamp::new(FbDate(5), FbTime(36_000_000))
        );
        assert_eq!(f.get_string().unwrap(), "1858-11-22 01:00:00.0000");
    }

    #[test]
    fn test_fixed_bytes_in_place() {
        let desc = text(SqlType::FixedText, 4);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.char_bytes_mut().unwrap().copy_from_slice(b"abcd");
        assert_eq!(f.get_string().unwrap(), "abcd");

        let bin = text(SqlType::FixedText, 4).with_charset(CS_BINARY);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&bin, &mut buf[..], &NativeCodec).unwrap();
        f.binary_bytes_mut().unwrap().copy_from_slice(&[0, 1, 254, 255]);
        assert_eq!(f.binary_bytes().unwrap(), &[0, 1, 254, 255]);
        assert_eq!(f.value().unwrap(), FieldValue::Binary(vec![0, 1, 254, 255]));
    }

    #[test]
    fn test_set_bytes() {
        let desc = text(SqlType::VaryingText, 4);
        let mut buf = [0u8; 48];
        let mut f = FieldMut::bind(&desc, &mut buf[..], &NativeCodec).unwrap();
        f.set_bytes(&[0xc3, 0xa9]).unwrap();
        assert_eq!(f.varying_bytes().unwrap(), &[0xc3, 0xa9]);
        assert_eq!(f.get_string().unwrap(), "\u{e9}");
        assert!(matches!(
            f.set_bytes(b"12345").unwrap_err(),
            Error::Overflow { length: 5, capacity: 4, .. }
        ));

        let int = field(SqlType::Int32);
        let mut buf = [0u8; 32];
        let mut f = FieldMut::bind(&int, &mut buf[..], &NativeCodec).unwrap();
        assert!(f.set_bytes(b"1").unwrap_err().is_type_mismatch());
        assert!(buf.iter().all(|b| *b == 0));
    }
}
