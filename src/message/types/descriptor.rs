//! Field descriptor: the immutable metadata of one message field.

use std::ops::Range;

use crate::error::Result;
use crate::message::constants::{
    BLOB_SUB_TYPE_BINARY, BLOB_SUB_TYPE_TEXT, CS_BINARY, CS_NONE, DEC16_DIGITS, DEC34_DIGITS,
    NULL_FLAG_SIZE, VARYING_PREFIX_SIZE,
};
use crate::message::metadata::MessageMetadata;

use super::sql_type::SqlType;

/// Metadata of one field in a message buffer.
///
/// Built once when the statement is prepared and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    relation: String,
    owner: String,
    alias: String,
    null_offset: u32,
    offset: u32,
    sql_type: SqlType,
    sub_type: i32,
    length: u32,
    scale: i32,
    charset: u32,
    index: u32,
    nullable: bool,
}

impl FieldDescriptor {
    /// Create a descriptor with minimal info.
    ///
    /// The declared length defaults to the type's fixed width. Offsets,
    /// scale and the remaining attributes start at zero.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            relation: String::new(),
            owner: String::new(),
            null_offset: 0,
            offset: 0,
            sql_type,
            sub_type: 0,
            length: sql_type.fixed_width().unwrap_or(0) as u32,
            scale: 0,
            charset: CS_NONE,
            index: 0,
            nullable: true,
        }
    }

    /// Read the descriptor of field `index` from a metadata provider.
    pub fn from_metadata<M: MessageMetadata + ?Sized>(meta: &M, index: u32) -> Result<Self> {
        Ok(Self {
            name: meta.field(index)?,
            relation: meta.relation(index)?,
            owner: meta.owner(index)?,
            alias: meta.alias(index)?,
            null_offset: meta.null_offset(index)?,
            offset: meta.offset(index)?,
            sql_type: SqlType::from_raw(meta.sql_type(index)?),
            sub_type: meta.sub_type(index)?,
            length: meta.length(index)?,
            scale: meta.scale(index)?,
            charset: meta.charset(index)?,
            index,
            nullable: meta.is_nullable(index)?,
        })
    }

    /// Set the value and null flag offsets.
    pub fn with_offsets(mut self, offset: u32, null_offset: u32) -> Self {
        self.offset = offset;
        self.null_offset = null_offset;
        self
    }

    /// Set the declared byte length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Set the decimal scale (negative = fractional digits).
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the BLOB sub type.
    pub fn with_sub_type(mut self, sub_type: i32) -> Self {
        self.sub_type = sub_type;
        self
    }

    /// Set the character set id.
    pub fn with_charset(mut self, charset: u32) -> Self {
        self.charset = charset;
        self
    }

    /// Set the ordinal position in the message.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Set whether the field accepts NULL.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the owning table and its owner.
    pub fn with_relation(mut self, relation: impl Into<String>, owner: impl Into<String>) -> Self {
        self.relation = relation.into();
        self.owner = owner.into();
        self
    }

    /// Set the display alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the owning table name.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Get the owner of the owning table.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the display alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Get the byte offset of the null flag.
    pub fn null_offset(&self) -> u32 {
        self.null_offset
    }

    /// Get the byte offset of the value.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Get the SQL type tag.
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    /// Get the sub type (BLOB sub type or text charset hint).
    pub fn sub_type(&self) -> i32 {
        self.sub_type
    }

    /// Get the declared byte length.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Get the decimal scale.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Get the character set id.
    pub fn charset(&self) -> u32 {
        self.charset
    }

    /// Get the ordinal position in the message.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Check if the field accepts NULL.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Check if the field holds raw octets rather than characters.
    pub fn is_binary(&self) -> bool {
        self.charset == CS_BINARY
    }

    /// Byte width of the value region.
    pub fn value_width(&self) -> usize {
        match self.sql_type {
            SqlType::FixedText => self.length as usize,
            SqlType::VaryingText => VARYING_PREFIX_SIZE + self.length as usize,
            other => other.fixed_width().unwrap_or(self.length as usize),
        }
    }

    /// Byte range of the value region.
    pub fn value_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.value_width()
    }

    /// Byte range of the null flag.
    pub fn null_range(&self) -> Range<usize> {
        let start = self.null_offset as usize;
        start..start + NULL_FLAG_SIZE
    }

    /// First byte past both the value and the null flag.
    pub fn extent_end(&self) -> usize {
        self.value_range().end.max(self.null_range().end)
    }

    /// Canonical SQL spelling of the field's type.
    ///
    /// CHAR/VARCHAR lengths are byte lengths, not character counts.
    pub fn sql_type_name(&self) -> String {
        match self.sql_type {
            SqlType::Null => "NULL".to_string(),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Int16 => self.integer_name("SMALLINT", 4),
            SqlType::Int32 => self.integer_name("INTEGER", 9),
            SqlType::Int64 => self.integer_name("BIGINT", 18),
            SqlType::Int128 => self.integer_name("INT128", 38),
            SqlType::Float32 => "FLOAT".to_string(),
            SqlType::Float64 => self.integer_name("DOUBLE PRECISION", 15),
            SqlType::DecFloat16 => format!("DECFLOAT({})", DEC16_DIGITS),
            SqlType::DecFloat34 => format!("DECFLOAT({})", DEC34_DIGITS),
            SqlType::Date => "DATE".to_string(),
            SqlType::Time => "TIME".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
            SqlType::TimeTz { .. } => "TIME WITH TIME ZONE".to_string(),
            SqlType::TimestampTz { .. } => "TIMESTAMP WITH TIME ZONE".to_string(),
            SqlType::FixedText if self.is_binary() => format!("BINARY({})", self.length),
            SqlType::FixedText => format!("CHAR({})", self.length),
            SqlType::VaryingText if self.is_binary() => format!("VARBINARY({})", self.length),
            SqlType::VaryingText => format!("VARCHAR({})", self.length),
            SqlType::Blob => match self.sub_type {
                BLOB_SUB_TYPE_BINARY => "BLOB SUB_TYPE 0".to_string(),
                BLOB_SUB_TYPE_TEXT => "BLOB SUB_TYPE TEXT".to_string(),
                other => format!("BLOB SUB_TYPE {}", other),
            },
            SqlType::Array => "ARRAY".to_string(),
            SqlType::Quad | SqlType::Unknown(_) => "UNKNOWN".to_string(),
        }
    }

    fn integer_name(&self, plain: &str, precision: u32) -> String {
        if self.scale == 0 {
            plain.to_string()
        } else {
            format!("NUMERIC({}, {})", precision, -(self.scale as i64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::constants::CS_UTF8;

    fn type_name(sql_type: SqlType) -> String {
        FieldDescriptor::new("F", sql_type).sql_type_name()
    }

    #[test]
    fn test_integer_names() {
        assert_eq!(type_name(SqlType::Int16), "SMALLINT");
        assert_eq!(type_name(SqlType::Int32), "INTEGER");
        assert_eq!(type_name(SqlType::Int64), "BIGINT");
        assert_eq!(type_name(SqlType::Int128), "INT128");
    }

    #[test]
    fn test_numeric_names() {
        let field = |t| FieldDescriptor::new("F", t).with_scale(-2).sql_type_name();
        assert_eq!(field(SqlType::Int16), "NUMERIC(4, 2)");
        assert_eq!(field(SqlType::Int32), "NUMERIC(9, 2)");
        assert_eq!(field(SqlType::Int64), "NUMERIC(18, 2)");
        assert_eq!(field(SqlType::Int128), "NUMERIC(38, 2)");
        assert_eq!(field(SqlType::Float64), "NUMERIC(15, 2)");
    }

    #[test]
    fn test_float_names() {
        assert_eq!(type_name(SqlType::Float32), "FLOAT");
        assert_eq!(type_name(SqlType::Float64), "DOUBLE PRECISION");
        assert_eq!(type_name(SqlType::DecFloat16), "DECFLOAT(16)");
        assert_eq!(type_name(SqlType::DecFloat34), "DECFLOAT(34)");
    }

    #[test]
    fn test_temporal_names() {
        assert_eq!(type_name(SqlType::Date), "DATE");
        assert_eq!(type_name(SqlType::Time), "TIME");
        assert_eq!(type_name(SqlType::Timestamp), "TIMESTAMP");
        assert_eq!(
            type_name(SqlType::TimeTz { extended: true }),
            "TIME WITH TIME ZONE"
        );
        assert_eq!(
            type_name(SqlType::TimestampTz { extended: false }),
            "TIMESTAMP WITH TIME ZONE"
        );
    }

    #[test]
    fn test_text_names() {
        let text = |t, charset| {
            FieldDescriptor::new("F", t)
                .with_length(10)
                .with_charset(charset)
                .sql_type_name()
        };
        assert_eq!(text(SqlType::FixedText, CS_BINARY), "BINARY(10)");
        assert_eq!(text(SqlType::FixedText, CS_UTF8), "CHAR(10)");
        assert_eq!(text(SqlType::VaryingText, CS_BINARY), "VARBINARY(10)");
        assert_eq!(text(SqlType::VaryingText, CS_UTF8), "VARCHAR(10)");
    }

    #[test]
    fn test_blob_names() {
        let blob = |sub_type| {
            FieldDescriptor::new("F", SqlType::Blob)
                .with_sub_type(sub_type)
                .sql_type_name()
        };
        assert_eq!(blob(0), "BLOB SUB_TYPE 0");
        assert_eq!(blob(1), "BLOB SUB_TYPE TEXT");
        assert_eq!(blob(7), "BLOB SUB_TYPE 7");
    }

    #[test]
    fn test_other_names() {
        assert_eq!(type_name(SqlType::Null), "NULL");
        assert_eq!(type_name(SqlType::Boolean), "BOOLEAN");
        assert_eq!(type_name(SqlType::Array), "ARRAY");
        assert_eq!(type_name(SqlType::Unknown(9)), "UNKNOWN");
    }

    #[test]
    fn test_sql_type_name_is_stable() {
        let field = FieldDescriptor::new("F", SqlType::Int32).with_scale(-2);
        assert_eq!(field.sql_type_name(), field.sql_type_name());
    }

    #[test]
    fn test_ranges() {
        let field = FieldDescriptor::new("NAME", SqlType::VaryingText)
            .with_length(20)
            .with_offsets(4, 26);
        assert_eq!(field.value_width(), 22);
        assert_eq!(field.value_range(), 4..26);
        assert_eq!(field.null_range(), 26..28);
        assert_eq!(field.extent_end(), 28);

        let int = FieldDescriptor::new("ID", SqlType::Int32).with_offsets(0, 8);
        assert_eq!(int.length(), 4);
        assert_eq!(int.extent_end(), 10);
    }

    #[test]
    fn test_builder_defaults() {
        let field = FieldDescriptor::new("ID", SqlType::Int64)
            .with_relation("COLOR", "SYSDBA")
            .with_index(3)
            .with_nullable(false);
        assert_eq!(field.name(), "ID");
        assert_eq!(field.alias(), "ID");
        assert_eq!(field.relation(), "COLOR");
        assert_eq!(field.owner(), "SYSDBA");
        assert_eq!(field.index(), 3);
        assert!(!field.is_nullable());
        assert_eq!(field.length(), 8);
    }
}
