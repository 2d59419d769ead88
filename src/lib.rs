//! Firebird Message Buffers for Rust
//!
//! Typed, in-place access to the fixed-layout binary messages Firebird uses
//! for statement parameters and fetched rows. A message is one contiguous
//! buffer; each field has a value region and a 2-byte null flag at offsets
//! given by the statement metadata.
//!
//! # Example
//!
//! ```
//! use fb_message::{FieldDescriptor, Result, RowBuffer, SqlType};
//!
//! fn main() -> Result<()> {
//!     let fields = vec![
//!         FieldDescriptor::new("ID", SqlType::Int32).with_offsets(0, 4),
//!         FieldDescriptor::new("NAME", SqlType::VaryingText)
//!             .with_length(20)
//!             .with_offsets(6, 28)
//!             .with_index(1),
//!     ];
//!     let mut row = RowBuffer::new(fields, 32);
//!
//!     row.field_mut(0)?.set_i32(42)?;
//!     row.field_mut(1)?.set_string("hello")?;
//!
//!     assert_eq!(row.field(0)?.get_i32()?, 42);
//!     assert_eq!(row.field(1)?.get_string()?, "hello");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;

// Re-export main types
pub use error::{Error, Result};
pub use message::{
    DateParts, DecFloat16, DecFloat34, FbDate, FbTime, FbTimestamp, Field, FieldAccessor,
    FieldDescriptor, FieldMut, FieldValue, MessageBuilder, MessageLayout, MessageMetadata,
    NativeCodec, Quad, RowBuffer, SqlType, TimeParts, ValueCodec,
};
