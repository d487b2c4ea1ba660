//! Parameter and result slots of the database access layer.
//!
//! Descriptors never talk to a database directly. They write into a
//! [`ParameterSink`] (the outbound parameters of a prepared statement) and
//! read from a [`ResultSource`] (the current row of a result set). Both are
//! addressed by 1-based position, and getters report NULL as `None`.
//!
//! A real driver implements these traits over its statement and cursor
//! types. [`Parameters`] and [`Row`] are in-memory implementations.

pub mod constants;
mod lob;
mod params;
mod row;
mod temporal;
mod value;

pub use lob::{read_and_free, LargeObject, LobValue};
pub use params::Parameters;
pub use row::{ColumnInfo, ResultColumn, Row};
pub use temporal::{SqlDate, SqlTime, SqlTimestamp};
pub use value::DriverValue;

use crate::config::SessionOptions;
use crate::error::Result;
use rust_decimal::Decimal;

/// Outbound parameter slot with type-specific setters.
pub trait ParameterSink {
    /// Session options in effect for this statement.
    fn session(&self) -> SessionOptions {
        SessionOptions::default()
    }

    /// Bind SQL NULL, typed with the driver type code.
    fn set_null(&mut self, index: usize, type_code: i32) -> Result<()>;

    fn set_boolean(&mut self, index: usize, value: bool) -> Result<()>;

    fn set_int(&mut self, index: usize, value: i32) -> Result<()>;

    fn set_long(&mut self, index: usize, value: i64) -> Result<()>;

    fn set_float(&mut self, index: usize, value: f32) -> Result<()>;

    fn set_double(&mut self, index: usize, value: f64) -> Result<()>;

    fn set_decimal(&mut self, index: usize, value: Decimal) -> Result<()>;

    fn set_string(&mut self, index: usize, value: &str) -> Result<()>;

    fn set_bytes(&mut self, index: usize, value: &[u8]) -> Result<()>;

    fn set_blob(&mut self, index: usize, value: LobValue) -> Result<()>;

    /// Bind through the driver's generic object mechanism.
    fn set_object(&mut self, index: usize, value: DriverValue) -> Result<()>;

    fn set_timestamp(&mut self, index: usize, value: SqlTimestamp) -> Result<()>;

    fn set_date(&mut self, index: usize, value: SqlDate) -> Result<()>;

    fn set_time(&mut self, index: usize, value: SqlTime) -> Result<()>;
}

/// Inbound result slot with type-specific nullable getters.
pub trait ResultSource {
    /// Session options in effect for this result set.
    fn session(&self) -> SessionOptions {
        SessionOptions::default()
    }

    fn get_boolean(&mut self, index: usize) -> Result<Option<bool>>;

    fn get_int(&mut self, index: usize) -> Result<Option<i32>>;

    fn get_long(&mut self, index: usize) -> Result<Option<i64>>;

    fn get_float(&mut self, index: usize) -> Result<Option<f32>>;

    fn get_double(&mut self, index: usize) -> Result<Option<f64>>;

    fn get_decimal(&mut self, index: usize) -> Result<Option<Decimal>>;

    fn get_string(&mut self, index: usize) -> Result<Option<String>>;

    fn get_bytes(&mut self, index: usize) -> Result<Option<Vec<u8>>>;

    /// Get a large object handle. The caller must free it.
    fn get_blob(&mut self, index: usize) -> Result<Option<Box<dyn LargeObject + '_>>>;

    /// Get the raw value through the driver's generic object mechanism.
    fn get_object(&mut self, index: usize) -> Result<DriverValue>;

    fn get_timestamp(&mut self, index: usize) -> Result<Option<SqlTimestamp>>;

    fn get_date(&mut self, index: usize) -> Result<Option<SqlDate>>;

    fn get_time(&mut self, index: usize) -> Result<Option<SqlTime>>;
}
