//! Table definitions and column declaration helpers.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use super::column::{Column, ColumnBuilder, ColumnDef};
use crate::driver::{SqlDate, SqlTime, SqlTimestamp};
use crate::error::{Error, Result};
use crate::types::{
    enum_from_value, enum_to_value, ColumnValue, EnumType, MonthDay, SqlEnum, SqlType, Value,
    Year, YearMonth,
};

/// A table definition: a name and its registered columns.
#[derive(Debug, Clone)]
pub struct Table {
    name: Arc<str>,
    columns: Vec<ColumnDef>,
}

impl Table {
    /// Create an empty table definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            columns: Vec::new(),
        }
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered columns in declaration order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Find a column by name (case-insensitive).
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Names of the primary key columns.
    pub fn primary_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Register a column with an explicit descriptor and value conversions.
    ///
    /// Fails with `DuplicateColumn` if a column with exactly this name is
    /// already registered. Names differing only in case are distinct.
    pub fn register_column<T>(
        &mut self,
        name: &str,
        sql_type: SqlType,
        to_value: fn(&T) -> Value,
        from_value: fn(Value) -> Result<T>,
    ) -> Result<ColumnBuilder<'_, T>> {
        if self.columns.iter().any(|c| c.name == name) {
            return Err(Error::DuplicateColumn {
                table: self.name.to_string(),
                name: name.to_string(),
            });
        }
        debug!(table = %self.name, column = name, sql_type = %sql_type, "register column");

        let column = Column::new(
            Arc::clone(&self.name),
            Arc::from(name),
            sql_type.clone(),
            to_value,
            from_value,
        );
        let position = self.columns.len();
        self.columns.push(ColumnDef::new(name, sql_type));
        Ok(ColumnBuilder::new(&mut self.columns[position], column))
    }

    fn typed<T: ColumnValue>(&mut self, name: &str, sql_type: SqlType) -> Result<ColumnBuilder<'_, T>> {
        self.register_column(name, sql_type, T::to_value, T::from_value)
    }

    /// Define a `boolean` column.
    pub fn boolean(&mut self, name: &str) -> Result<ColumnBuilder<'_, bool>> {
        self.typed(name, SqlType::Boolean)
    }

    /// Define an `int` column.
    pub fn int(&mut self, name: &str) -> Result<ColumnBuilder<'_, i32>> {
        self.typed(name, SqlType::Int)
    }

    /// Define a `bigint` column.
    pub fn long(&mut self, name: &str) -> Result<ColumnBuilder<'_, i64>> {
        self.typed(name, SqlType::Long)
    }

    /// Define a `float` column.
    pub fn float(&mut self, name: &str) -> Result<ColumnBuilder<'_, f32>> {
        self.typed(name, SqlType::Float)
    }

    /// Define a `double` column.
    pub fn double(&mut self, name: &str) -> Result<ColumnBuilder<'_, f64>> {
        self.typed(name, SqlType::Double)
    }

    /// Define a `decimal` column.
    pub fn decimal(&mut self, name: &str) -> Result<ColumnBuilder<'_, Decimal>> {
        self.typed(name, SqlType::Decimal)
    }

    /// Define a `varchar` column.
    pub fn varchar(&mut self, name: &str) -> Result<ColumnBuilder<'_, String>> {
        self.typed(name, SqlType::Varchar)
    }

    /// Define a `text` column.
    pub fn text(&mut self, name: &str) -> Result<ColumnBuilder<'_, String>> {
        self.typed(name, SqlType::Text)
    }

    /// Define a `blob` column.
    pub fn blob(&mut self, name: &str) -> Result<ColumnBuilder<'_, Vec<u8>>> {
        self.typed(name, SqlType::Blob)
    }

    /// Define a `bytes` column.
    pub fn bytes(&mut self, name: &str) -> Result<ColumnBuilder<'_, Vec<u8>>> {
        self.typed(name, SqlType::Bytes)
    }

    /// Define a `timestamp` column holding driver-native timestamps.
    pub fn jdbc_timestamp(&mut self, name: &str) -> Result<ColumnBuilder<'_, SqlTimestamp>> {
        self.typed(name, SqlType::JdbcTimestamp)
    }

    /// Define a `date` column holding driver-native dates.
    pub fn jdbc_date(&mut self, name: &str) -> Result<ColumnBuilder<'_, SqlDate>> {
        self.typed(name, SqlType::JdbcDate)
    }

    /// Define a `time` column holding driver-native times.
    pub fn jdbc_time(&mut self, name: &str) -> Result<ColumnBuilder<'_, SqlTime>> {
        self.typed(name, SqlType::JdbcTime)
    }

    /// Define a `timestamp` column holding UTC instants.
    pub fn timestamp(&mut self, name: &str) -> Result<ColumnBuilder<'_, DateTime<Utc>>> {
        self.typed(name, SqlType::Instant)
    }

    /// Define a `datetime` column holding local date-times.
    pub fn datetime(&mut self, name: &str) -> Result<ColumnBuilder<'_, NaiveDateTime>> {
        self.typed(name, SqlType::LocalDateTime)
    }

    /// Define a `date` column.
    pub fn date(&mut self, name: &str) -> Result<ColumnBuilder<'_, NaiveDate>> {
        self.typed(name, SqlType::LocalDate)
    }

    /// Define a `time` column.
    pub fn time(&mut self, name: &str) -> Result<ColumnBuilder<'_, NaiveTime>> {
        self.typed(name, SqlType::LocalTime)
    }

    /// Define a month-day column, saved as `MM-dd` strings.
    pub fn month_day(&mut self, name: &str) -> Result<ColumnBuilder<'_, MonthDay>> {
        self.typed(name, SqlType::MonthDay)
    }

    /// Define a year-month column, saved as `yyyy-MM` strings.
    pub fn year_month(&mut self, name: &str) -> Result<ColumnBuilder<'_, YearMonth>> {
        self.typed(name, SqlType::YearMonth)
    }

    /// Define a year column, saved as integers.
    pub fn year(&mut self, name: &str) -> Result<ColumnBuilder<'_, Year>> {
        self.typed(name, SqlType::Year)
    }

    /// Define an enum column, saved as member names.
    ///
    /// Fails with `DuplicateEnumMember` if two members of `E` share a name.
    pub fn enumeration<E: SqlEnum>(&mut self, name: &str) -> Result<ColumnBuilder<'_, E>> {
        self.register_column(
            name,
            SqlType::Enum(EnumType::of::<E>()?),
            enum_to_value::<E>,
            enum_from_value::<E>,
        )
    }

    /// Define a `uuid` column.
    pub fn uuid(&mut self, name: &str) -> Result<ColumnBuilder<'_, Uuid>> {
        self.typed(name, SqlType::Uuid)
    }
}
