//! Message buffers and typed field access.
//!
//! This module contains:
//! - Field metadata and native value types (`types`)
//! - Wire constants (`constants`)
//! - Date and number codecs (`decode`)
//! - The metadata provider boundary (`metadata`) and a layout builder (`layout`)
//! - Field accessors (`accessor`) and the row buffer that owns them (`row_buffer`)

pub mod accessor;
pub mod constants;
pub mod decode;
pub mod layout;
pub mod metadata;
pub mod row_buffer;
pub mod types;

pub use accessor::{Field, FieldAccessor, FieldMut};
pub use decode::{NativeCodec, ValueCodec};
pub use layout::{MessageBuilder, MessageLayout};
pub use metadata::MessageMetadata;
pub use row_buffer::RowBuffer;
pub use types::{
    DateParts, DecFloat16, DecFloat34, FbDate, FbTime, FbTimestamp, FieldDescriptor, FieldValue,
    Quad, SqlType, TimeParts,
};
