//! In-memory parameter buffer.

use super::constants::MAX_PARAMETERS;
use super::lob::LobValue;
use super::temporal::{SqlDate, SqlTime, SqlTimestamp};
use super::value::DriverValue;
use super::ParameterSink;
use crate::config::SessionOptions;
use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// Outbound parameters collected in memory.
///
/// Positions are 1-based, up to [`MAX_PARAMETERS`]. Binding past the end
/// grows the buffer, filling the gap with NULLs.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: Vec<DriverValue>,
    null_types: Vec<Option<i32>>,
    session: SessionOptions,
}

impl Parameters {
    /// Create an empty parameter buffer with default session options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty parameter buffer bound to `session`.
    pub fn with_session(session: SessionOptions) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    /// Get the value bound at a 1-based position.
    pub fn get(&self, index: usize) -> Option<&DriverValue> {
        index.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// Driver type code recorded for a NULL bound at `index`.
    pub fn null_type(&self, index: usize) -> Option<i32> {
        index
            .checked_sub(1)
            .and_then(|i| self.null_types.get(i).copied().flatten())
    }

    /// Get the number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no parameters are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values in position order.
    pub fn values(&self) -> &[DriverValue] {
        &self.values
    }

    /// Consume the buffer, returning the bound values.
    pub fn into_values(self) -> Vec<DriverValue> {
        self.values
    }

    fn put(&mut self, index: usize, value: DriverValue, null_type: Option<i32>) -> Result<()> {
        if index == 0 || index > MAX_PARAMETERS {
            return Err(Error::IndexOutOfBounds {
                index,
                count: self.values.len(),
            });
        }
        if self.values.len() < index {
            self.values.resize(index, DriverValue::Null);
            self.null_types.resize(index, None);
        }
        self.values[index - 1] = value;
        self.null_types[index - 1] = null_type;
        Ok(())
    }
}

impl ParameterSink for Parameters {
    fn session(&self) -> SessionOptions {
        self.session
    }

    fn set_null(&mut self, index: usize, type_code: i32) -> Result<()> {
        self.put(index, DriverValue::Null, Some(type_code))
    }

    fn set_boolean(&mut self, index: usize, value: bool) -> Result<()> {
        self.put(index, DriverValue::Boolean(value), None)
    }

    fn set_int(&mut self, index: usize, value: i32) -> Result<()> {
        self.put(index, DriverValue::Int(value), None)
    }

    fn set_long(&mut self, index: usize, value: i64) -> Result<()> {
        self.put(index, DriverValue::Long(value), None)
    }

    fn set_float(&mut self, index: usize, value: f32) -> Result<()> {
        self.put(index, DriverValue::Float(value), None)
    }

    fn set_double(&mut self, index: usize, value: f64) -> Result<()> {
        self.put(index, DriverValue::Double(value), None)
    }

    fn set_decimal(&mut self, index: usize, value: Decimal) -> Result<()> {
        self.put(index, DriverValue::Decimal(value), None)
    }

    fn set_string(&mut self, index: usize, value: &str) -> Result<()> {
        self.put(index, DriverValue::String(value.to_string()), None)
    }

    fn set_bytes(&mut self, index: usize, value: &[u8]) -> Result<()> {
        self.put(index, DriverValue::Bytes(value.to_vec()), None)
    }

    fn set_blob(&mut self, index: usize, value: LobValue) -> Result<()> {
        self.put(index, DriverValue::Blob(value), None)
    }

    fn set_object(&mut self, index: usize, value: DriverValue) -> Result<()> {
        self.put(index, value, None)
    }

    fn set_timestamp(&mut self, index: usize, value: SqlTimestamp) -> Result<()> {
        self.put(index, DriverValue::Timestamp(value), None)
    }

    fn set_date(&mut self, index: usize, value: SqlDate) -> Result<()> {
        self.put(index, DriverValue::Date(value), None)
    }

    fn set_time(&mut self, index: usize, value: SqlTime) -> Result<()> {
        self.put(index, DriverValue::Time(value), None)
    }
}
