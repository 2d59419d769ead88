//! Field metadata and native value types.

mod descriptor;
mod handles;
mod sql_type;
mod temporal;
mod value;

pub use descriptor::FieldDescriptor;
pub use handles::{DecFloat16, DecFloat34, Quad};
pub use sql_type::SqlType;
pub use temporal::{DateParts, FbDate, FbTime, FbTimestamp, TimeParts};
pub use value::FieldValue;
