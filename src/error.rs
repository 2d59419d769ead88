//! Error types for message buffer access.

use thiserror::Error;

/// Result type alias for message buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for message buffer operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested native type is incompatible with the field's SQL type.
    #[error("Cannot convert value from {from} to {to}")]
    TypeMismatch { from: String, to: String },

    /// A string or binary value does not fit the field's declared length.
    #[error("String overflow in field {field}: {length} bytes exceed capacity of {capacity}")]
    Overflow {
        field: String,
        length: usize,
        capacity: u32,
    },

    /// Field index outside the message.
    #[error("Field index {index} out of range (fields: {count})")]
    OutOfRange { index: usize, count: usize },

    /// The field's value or null flag reaches past the end of the buffer.
    #[error("Field {field} ends at byte {end}, buffer has {available}")]
    FieldOutOfBounds {
        field: String,
        end: usize,
        available: usize,
    },

    /// A codec could not represent the value.
    #[error("Codec error: {message}")]
    Codec { message: String },

    /// The metadata provider failed to describe the message.
    #[error("Metadata error: {message}")]
    Metadata { message: String },
}

impl Error {
    /// Mismatch while reading a field of `sql_type` as `native`.
    pub fn cannot_read(sql_type: impl Into<String>, native: &str) -> Self {
        Self::TypeMismatch {
            from: sql_type.into(),
            to: native.to_string(),
        }
    }

    /// Mismatch while writing `native` into a field of `sql_type`.
    pub fn cannot_write(native: &str, sql_type: impl Into<String>) -> Self {
        Self::TypeMismatch {
            from: native.to_string(),
            to: sql_type.into(),
        }
    }

    /// Create a codec error.
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }

    /// Create a metadata error.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Whether this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}
