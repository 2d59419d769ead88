//! Message layout builder.
//!
//! Computes value and null flag offsets for a list of fields the same way
//! the server lays out a message: each value is aligned to its type, each
//! null flag follows its value at 2-byte alignment.

use tracing::trace;

use crate::error::{Error, Result};
use crate::message::constants::NULL_FLAG_SIZE;
use crate::message::metadata::MessageMetadata;
use crate::message::row_buffer::RowBuffer;
use crate::message::types::FieldDescriptor;

/// Builder for a [`MessageLayout`].
///
/// # Example
///
/// ```
/// use fb_message::{FieldDescriptor, MessageBuilder, SqlType};
///
/// let layout = MessageBuilder::new()
///     .add(FieldDescriptor::new("ID", SqlType::Int32))
///     .add(FieldDescriptor::new("NAME", SqlType::VaryingText).with_length(20))
///     .build();
///
/// let mut row = layout.row_buffer();
/// row.field_mut(1)?.set_string("hello")?;
/// # Ok::<(), fb_message::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    fields: Vec<FieldDescriptor>,
}

impl MessageBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Its offsets and index are assigned by [`build`](Self::build).
    pub fn add(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Assign offsets and compute the message length.
    pub fn build(self) -> MessageLayout {
        let mut offset = 0usize;
        let mut max_alignment = 1usize;
        let mut fields = Vec::with_capacity(self.fields.len());

        for (index, field) in self.fields.into_iter().enumerate() {
            let alignment = field.sql_type().alignment();
            max_alignment = max_alignment.max(alignment).max(NULL_FLAG_SIZE);

            let value_offset = align(offset, alignment);
            offset = value_offset + field.value_width();
            let null_offset = align(offset, NULL_FLAG_SIZE);
            offset = null_offset + NULL_FLAG_SIZE;

            fields.push(
                field
                    .with_offsets(value_offset as u32, null_offset as u32)
                    .with_index(index as u32),
            );
        }

        let length = align(offset, max_alignment) as u32;
        trace!(fields = fields.len(), length, "built message layout");
        MessageLayout { fields, length }
    }
}

fn align(offset: usize, alignment: usize) -> usize {
    (offset + alignment - 1) / alignment * alignment
}

/// Field descriptors with assigned offsets and the total message length.
#[derive(Debug, Clone)]
pub struct MessageLayout {
    fields: Vec<FieldDescriptor>,
    length: u32,
}

impl MessageLayout {
    /// Get the descriptors with their assigned offsets.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Total message length in bytes.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Allocate a row buffer with this layout.
    pub fn row_buffer(&self) -> RowBuffer {
        RowBuffer::new(self.fields.clone(), self.length as usize)
    }

    fn get(&self, index: u32) -> Result<&FieldDescriptor> {
        self.fields.get(index as usize).ok_or(Error::OutOfRange {
            index: index as usize,
            count: self.fields.len(),
        })
    }
}

impl MessageMetadata for MessageLayout {
    fn count(&self) -> Result<u32> {
        Ok(self.fields.len() as u32)
    }

    fn message_length(&self) -> Result<u32> {
        Ok(self.length)
    }

    fn field(&self, index: u32) -> Result<String> {
        Ok(self.get(index)?.name().to_string())
    }

    fn relation(&self, index: u32) -> Result<String> {
        Ok(self.get(index)?.relation().to_string())
    }

    fn owner(&self, index: u32) -> Result<String> {
        Ok(self.get(index)?.owner().to_string())
    }

    fn alias(&self, index: u32) -> Result<String> {
        Ok(self.get(index)?.alias().to_string())
    }

    fn sql_type(&self, index: u32) -> Result<u32> {
        Ok(self.get(index)?.sql_type().type_code())
    }

    fn sub_type(&self, index: u32) -> Result<i32> {
        Ok(self.get(index)?.sub_type())
    }

    fn length(&self, index: u32) -> Result<u32> {
        Ok(self.get(index)?.length())
    }

    fn scale(&self, index: u32) -> Result<i32> {
        Ok(self.get(index)?.scale())
    }

    fn charset(&self, index: u32) -> Result<u32> {
        Ok(self.get(index)?.charset())
    }

    fn offset(&self, index: u32) -> Result<u32> {
        Ok(self.get(index)?.offset())
    }

    fn null_offset(&self, index: u32) -> Result<u32> {
        Ok(self.get(index)?.null_offset())
    }

    fn is_nullable(&self, index: u32) -> Result<bool> {
        Ok(self.get(index)?.is_nullable())
    }
}
