//! Row buffer: one message buffer plus the fields that live in it.

use std::sync::Arc;

use bytes::BytesMut;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::message::accessor::{Field, FieldMut};
use crate::message::decode::{NativeCodec, ValueCodec};
use crate::message::metadata::MessageMetadata;
use crate::message::types::FieldDescriptor;

/// A contiguous message buffer and its field layout.
///
/// The transport fills [`data_mut`](Self::data_mut) on fetch or sends
/// [`data`](Self::data) on execute; callers read and write individual
/// fields in place through [`field`](Self::field) and
/// [`field_mut`](Self::field_mut). Fields are addressed by index only.
///
/// The buffer is never shorter than the largest field extent, so every
/// descriptor binds without a bounds failure.
pub struct RowBuffer {
    /// Message bytes, zero-initialized.
    buffer: BytesMut,
    /// Field descriptors in metadata order.
    fields: Vec<FieldDescriptor>,
    /// Codec for dates and arbitrary precision numbers.
    codec: Arc<dyn ValueCodec>,
}

impl RowBuffer {
    /// Allocate a buffer of `length` bytes for `fields`.
    ///
    /// If a field's value or null flag reaches past `length`, the buffer is
    /// grown so that every field fits.
    pub fn new(fields: Vec<FieldDescriptor>, length: usize) -> Self {
        let required = fields
            .iter()
            .map(FieldDescriptor::extent_end)
            .max()
            .unwrap_or(0);
        let allocated = if required > length {
            warn!(
                declared = length,
                required, "field extents exceed message length, growing buffer"
            );
            required
        } else {
            length
        };
        debug!(fields = fields.len(), length = allocated, "allocated row buffer");

        Self {
            buffer: BytesMut::zeroed(allocated),
            fields,
            codec: Arc::new(NativeCodec),
        }
    }

    /// Build a row buffer from a metadata provider.
    pub fn from_metadata<M: MessageMetadata + ?Sized>(meta: &M) -> Result<Self> {
        let count = meta.count()?;
        let length = meta.message_length()?;
        let fields = (0..count)
            .map(|index| FieldDescriptor::from_metadata(meta, index))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(fields, length as usize))
    }

    /// Use `codec` instead of the native codec.
    pub fn with_codec(mut self, codec: Arc<dyn ValueCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Get the codec used for string conversions.
    pub fn codec(&self) -> &dyn ValueCodec {
        self.codec.as_ref()
    }

    /// Get the raw message bytes.
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the raw message bytes for the transport to fill.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Pointer to the start of the message, for FFI transports.
    pub fn as_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    /// Mutable pointer to the start of the message, for FFI transports.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.buffer.as_mut_ptr()
    }

    /// Size of the message in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the message has no bytes.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of fields.
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    /// Get all field descriptors.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Get the descriptor of field `index`.
    pub fn descriptor(&self, index: usize) -> Result<&FieldDescriptor> {
        self.fields.get(index).ok_or(Error::OutOfRange {
            index,
            count: self.fields.len(),
        })
    }

    /// Read-only view of field `index`.
    pub fn field(&self, index: usize) -> Result<Field<'_>> {
        let descriptor = self.descriptor(index)?;
        Ok(Field::bind_unchecked(descriptor, &self.buffer[..], self.codec.as_ref()))
    }

    /// Read-write view of field `index`.
    pub fn field_mut(&mut self, index: usize) -> Result<FieldMut<'_>> {
        let count = self.fields.len();
        let descriptor = self
            .fields
            .get(index)
            .ok_or(Error::OutOfRange { index, count })?;
        Ok(FieldMut::bind_unchecked(
            descriptor,
            &mut self.buffer[..],
            self.codec.as_ref(),
        ))
    }

    /// Iterate over read-only views of all fields.
    pub fn iter(&self) -> impl Iterator<Item = Field<'_>> {
        let codec = self.codec.as_ref();
        self.fields
            .iter()
            .map(move |descriptor| Field::bind_unchecked(descriptor, &self.buffer[..], codec))
    }

    /// Zero the whole message, null flags included.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }
}

impl std::fmt::Debug for RowBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowBuffer")
            .field("len", &self.buffer.len())
            .field("fields", &self.fields)
            .finish()
    }
}
