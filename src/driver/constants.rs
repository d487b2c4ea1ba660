//! Driver type codes.
//!
//! The numeric values match the JDBC `java.sql.Types` constants so codes
//! reported by descriptors line up with what drivers and schema tools expect.

pub const SQL_TYPE_NULL: i32 = 0;
pub const SQL_TYPE_BOOLEAN: i32 = 16;
pub const SQL_TYPE_INTEGER: i32 = 4;
pub const SQL_TYPE_BIGINT: i32 = -5;
pub const SQL_TYPE_FLOAT: i32 = 6;
pub const SQL_TYPE_DOUBLE: i32 = 8;
pub const SQL_TYPE_DECIMAL: i32 = 3;
pub const SQL_TYPE_VARCHAR: i32 = 12;
pub const SQL_TYPE_LONGVARCHAR: i32 = -1;
pub const SQL_TYPE_BINARY: i32 = -2;
pub const SQL_TYPE_BLOB: i32 = 2004;
pub const SQL_TYPE_DATE: i32 = 91;
pub const SQL_TYPE_TIME: i32 = 92;
pub const SQL_TYPE_TIMESTAMP: i32 = 93;
pub const SQL_TYPE_OTHER: i32 = 1111;

/// Highest parameter position accepted by the in-memory driver.
pub const MAX_PARAMETERS: usize = 65_535;
