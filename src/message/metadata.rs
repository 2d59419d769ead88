//! Message metadata provider.
//!
//! The statement layer describes the shape of an input or output message.
//! This trait is the boundary: descriptors and row buffers are built from
//! whatever implements it, one field at a time by index.

use crate::error::Result;

/// Source of per-field message metadata.
///
/// Calls may fail when the provider talks to a remote service, so every
/// getter returns a `Result`.
pub trait MessageMetadata {
    /// Number of fields in the message.
    fn count(&self) -> Result<u32>;

    /// Total byte length of the message buffer.
    fn message_length(&self) -> Result<u32>;

    /// Field (column or parameter) name.
    fn field(&self, index: u32) -> Result<String>;

    /// Name of the table that owns the field.
    fn relation(&self, index: u32) -> Result<String>;

    /// Owner (schema) name of the table.
    fn owner(&self, index: u32) -> Result<String>;

    /// Display alias.
    fn alias(&self, index: u32) -> Result<String>;

    /// Raw SQL type code.
    fn sql_type(&self, index: u32) -> Result<u32>;

    fn sub_type(&self, index: u32) -> Result<i32>;

    /// Declared byte length of the value.
    fn length(&self, index: u32) -> Result<u32>;

    fn scale(&self, index: u32) -> Result<i32>;

    fn charset(&self, index: u32) -> Result<u32>;

    /// Byte offset of the value region.
    fn offset(&self, index: u32) -> Result<u32>;

    /// Byte offset of the 2-byte null flag.
    fn null_offset(&self, index: u32) -> Result<u32>;

    fn is_nullable(&self, index: u32) -> Result<bool>;
}
