//! In-memory result row.

use std::sync::Arc;

use super::constants::*;
use super::lob::{LargeObject, LobValue};
use super::params::Parameters;
use super::temporal::{SqlDate, SqlTime, SqlTimestamp};
use super::value::DriverValue;
use super::ResultSource;
use crate::config::SessionOptions;
use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// A column in a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultColumn {
    /// Column label.
    pub name: String,
    /// Driver type code.
    pub type_code: i32,
}

impl ResultColumn {
    /// Create a result column.
    pub fn new(name: impl Into<String>, type_code: i32) -> Self {
        Self {
            name: name.into(),
            type_code,
        }
    }
}

/// Shared column information for all rows in a result set.
#[derive(Debug, Clone, Default)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<ResultColumn>,
}

impl ColumnInfo {
    /// Create new column info from columns.
    pub fn new(columns: Vec<ResultColumn>) -> Self {
        Self { columns }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Find the 1-based position of a column by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .map(|i| i + 1)
    }
}

/// A row of query results, readable through [`ResultSource`].
#[derive(Debug, Clone)]
pub struct Row {
    values: Vec<DriverValue>,
    column_info: Arc<ColumnInfo>,
    session: SessionOptions,
}

impl Row {
    /// Create a new row with values and shared column info.
    pub fn new(values: Vec<DriverValue>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
            session: SessionOptions::default(),
        }
    }

    /// Build a row from bound parameters, one column per position.
    ///
    /// Columns are labelled `p1`, `p2`, ... and the row inherits the
    /// parameters' session options.
    pub fn from_parameters(params: Parameters) -> Self {
        let session = crate::driver::ParameterSink::session(&params);
        let columns = params
            .values()
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let type_code = match value {
                    DriverValue::Null => params.null_type(i + 1).unwrap_or(SQL_TYPE_NULL),
                    other => driver_type_code(other),
                };
                ResultColumn::new(format!("p{}", i + 1), type_code)
            })
            .collect();
        Self {
            values: params.into_values(),
            column_info: Arc::new(ColumnInfo::new(columns)),
            session,
        }
    }

    /// Replace the session options used by conversions reading this row.
    pub fn with_session(mut self, session: SessionOptions) -> Self {
        self.session = session;
        self
    }

    /// Get value by 1-based position.
    pub fn get(&self, index: usize) -> Option<&DriverValue> {
        index.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&DriverValue> {
        self.column_info
            .find_by_name(name)
            .and_then(|index| self.get(index))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get column information.
    pub fn columns(&self) -> &[ResultColumn] {
        &self.column_info.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    fn value(&self, index: usize) -> Result<&DriverValue> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            count: self.values.len(),
        })
    }

    fn typed<T>(
        &self,
        index: usize,
        expected: &'static str,
        convert: impl FnOnce(&DriverValue) -> Option<T>,
    ) -> Result<Option<T>> {
        let value = self.value(index)?;
        if value.is_null() {
            return Ok(None);
        }
        match convert(value) {
            Some(v) => Ok(Some(v)),
            None => Err(Error::UnexpectedDriverType {
                index,
                expected,
                actual: value.type_name(),
            }),
        }
    }
}

fn driver_type_code(value: &DriverValue) -> i32 {
    match value {
        DriverValue::Null => SQL_TYPE_NULL,
        DriverValue::Boolean(_) => SQL_TYPE_BOOLEAN,
        DriverValue::Int(_) => SQL_TYPE_INTEGER,
        DriverValue::Long(_) => SQL_TYPE_BIGINT,
        DriverValue::Float(_) => SQL_TYPE_FLOAT,
        DriverValue::Double(_) => SQL_TYPE_DOUBLE,
        DriverValue::Decimal(_) => SQL_TYPE_DECIMAL,
        DriverValue::String(_) => SQL_TYPE_VARCHAR,
        DriverValue::Bytes(_) => SQL_TYPE_BINARY,
        DriverValue::Blob(_) => SQL_TYPE_BLOB,
        DriverValue::Timestamp(_) => SQL_TYPE_TIMESTAMP,
        DriverValue::Date(_) => SQL_TYPE_DATE,
        DriverValue::Time(_) => SQL_TYPE_TIME,
        DriverValue::Uuid(_) => SQL_TYPE_OTHER,
    }
}

impl ResultSource for Row {
    fn session(&self) -> SessionOptions {
        self.session
    }

    fn get_boolean(&mut self, index: usize) -> Result<Option<bool>> {
        self.typed(index, "boolean", |v| match v {
            DriverValue::Boolean(b) => Some(*b),
            _ => None,
        })
    }

    fn get_int(&mut self, index: usize) -> Result<Option<i32>> {
        self.typed(index, "int", |v| match v {
            DriverValue::Int(n) => Some(*n),
            _ => None,
        })
    }

    fn get_long(&mut self, index: usize) -> Result<Option<i64>> {
        self.typed(index, "bigint", |v| match v {
            DriverValue::Long(n) => Some(*n),
            DriverValue::Int(n) => Some(*n as i64),
            _ => None,
        })
    }

    fn get_float(&mut self, index: usize) -> Result<Option<f32>> {
        self.typed(index, "float", |v| match v {
            DriverValue::Float(n) => Some(*n),
            _ => None,
        })
    }

    fn get_double(&mut self, index: usize) -> Result<Option<f64>> {
        self.typed(index, "double", |v| match v {
            DriverValue::Double(n) => Some(*n),
            DriverValue::Float(n) => Some(*n as f64),
            _ => None,
        })
    }

    fn get_decimal(&mut self, index: usize) -> Result<Option<Decimal>> {
        self.typed(index, "decimal", |v| match v {
            DriverValue::Decimal(d) => Some(*d),
            _ => None,
        })
    }

    fn get_string(&mut self, index: usize) -> Result<Option<String>> {
        self.typed(index, "varchar", |v| v.as_str().map(str::to_string))
    }

    fn get_bytes(&mut self, index: usize) -> Result<Option<Vec<u8>>> {
        self.typed(index, "bytes", |v| v.as_bytes().map(<[u8]>::to_vec))
    }

    fn get_blob(&mut self, index: usize) -> Result<Option<Box<dyn LargeObject + '_>>> {
        let lob = self.typed(index, "blob", |v| match v {
            DriverValue::Blob(lob) => Some(lob.clone()),
            DriverValue::Bytes(bytes) => Some(LobValue::new(bytes.clone())),
            _ => None,
        })?;
        Ok(lob.map(|lob| Box::new(lob) as Box<dyn LargeObject>))
    }

    fn get_object(&mut self, index: usize) -> Result<DriverValue> {
        self.value(index).cloned()
    }

    fn get_timestamp(&mut self, index: usize) -> Result<Option<SqlTimestamp>> {
        self.typed(index, "timestamp", |v| match v {
            DriverValue::Timestamp(ts) => Some(*ts),
            _ => None,
        })
    }

    fn get_date(&mut self, index: usize) -> Result<Option<SqlDate>> {
        self.typed(index, "date", |v| match v {
            DriverValue::Date(d) => Some(*d),
            _ => None,
        })
    }

    fn get_time(&mut self, index: usize) -> Result<Option<SqlTime>> {
        self.typed(index, "time", |v| match v {
            DriverValue::Time(t) => Some(*t),
            _ => None,
        })
    }
}
