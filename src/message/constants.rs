//! Message buffer constants.
//!
//! Type codes follow the values reported by the server's message metadata.

// SQL type codes
pub const SQL_TEXT: u32 = 452;
pub const SQL_VARYING: u32 = 448;
pub const SQL_SHORT: u32 = 500;
pub const SQL_LONG: u32 = 496;
pub const SQL_FLOAT: u32 = 482;
pub const SQL_DOUBLE: u32 = 480;
pub const SQL_D_FLOAT: u32 = 530;
pub const SQL_TIMESTAMP: u32 = 510;
pub const SQL_BLOB: u32 = 520;
pub const SQL_ARRAY: u32 = 540;
pub const SQL_QUAD: u32 = 550;
pub const SQL_TYPE_TIME: u32 = 560;
pub const SQL_TYPE_DATE: u32 = 570;
pub const SQL_INT64: u32 = 580;
pub const SQL_TIMESTAMP_TZ_EX: u32 = 32748;
pub const SQL_TIME_TZ_EX: u32 = 32750;
pub const SQL_INT128: u32 = 32752;
pub const SQL_TIMESTAMP_TZ: u32 = 32754;
pub const SQL_TIME_TZ: u32 = 32756;
pub const SQL_DEC16: u32 = 32760;
pub const SQL_DEC34: u32 = 32762;
pub const SQL_BOOLEAN: u32 = 32764;
pub const SQL_NULL: u32 = 32766;

// Character sets
pub const CS_NONE: u32 = 0;
pub const CS_BINARY: u32 = 1;
pub const CS_UTF8: u32 = 4;

// BLOB sub types
pub const BLOB_SUB_TYPE_BINARY: i32 = 0;
pub const BLOB_SUB_TYPE_TEXT: i32 = 1;

// Null indicator values
pub const NULL_FLAG_NULL: i16 = -1;
pub const NULL_FLAG_PRESENT: i16 = 0;
pub const NULL_FLAG_SIZE: usize = 2;

// VARCHAR length prefix
pub const VARYING_PREFIX_SIZE: usize = 2;

// Boolean storage
pub const FB_TRUE: u8 = 1;
pub const FB_FALSE: u8 = 0;

// Temporal encoding
pub const TIME_SECONDS_PRECISION: u32 = 10_000;
pub const SECONDS_PER_DAY: u32 = 86_400;
/// Days from 0001-01-01 (day 1) to 1858-11-17, the zero date.
pub const DATE_EPOCH_DAYS_FROM_CE: i32 = 678_576;

// Largest scale magnitude of an exact numeric (NUMERIC(38, s))
pub const MAX_SCALE: u32 = 38;

// Decimal floating point (decimal64 / decimal128)
pub const DEC16_EXPONENT_BIAS: i32 = 398;
pub const DEC34_EXPONENT_BIAS: i32 = 6176;
pub const DEC16_DIGITS: usize = 16;
pub const DEC34_DIGITS: usize = 34;
