//! Typed column handles.

use std::fmt;
use std::sync::Arc;

use crate::driver::{ParameterSink, ResultSource};
use crate::error::Result;
use crate::types::{SqlType, Value};

/// Column definition as stored on a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Descriptor used to bind and extract values.
    pub sql_type: SqlType,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
}

impl ColumnDef {
    /// Create a nullable, non-key column definition.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: true,
            primary_key: false,
        }
    }
}

/// A registered column whose values have the Rust type `T`.
///
/// Handles are cheap to clone and can be shared across threads.
pub struct Column<T> {
    table: Arc<str>,
    name: Arc<str>,
    sql_type: SqlType,
    to_value: fn(&T) -> Value,
    from_value: fn(Value) -> Result<T>,
}

impl<T> Column<T> {
    pub(crate) fn new(
        table: Arc<str>,
        name: Arc<str>,
        sql_type: SqlType,
        to_value: fn(&T) -> Value,
        from_value: fn(Value) -> Result<T>,
    ) -> Self {
        Self {
            table,
            name,
            sql_type,
            to_value,
            from_value,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the owning table.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Descriptor used by this column.
    pub fn sql_type(&self) -> &SqlType {
        &self.sql_type
    }

    /// Bind a value (or NULL) at the 1-based `index`.
    pub fn bind(&self, sink: &mut dyn ParameterSink, index: usize, value: Option<&T>) -> Result<()> {
        let value = value.map(self.to_value);
        self.sql_type.bind(sink, index, value.as_ref())
    }

    /// Extract a value at the 1-based `index`; SQL NULL yields `None`.
    pub fn extract(&self, source: &mut dyn ResultSource, index: usize) -> Result<Option<T>> {
        self.sql_type
            .extract(source, index)?
            .map(self.from_value)
            .transpose()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            name: Arc::clone(&self.name),
            sql_type: self.sql_type.clone(),
            to_value: self.to_value,
            from_value: self.from_value,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("table", &self.table)
            .field("name", &self.name)
            .field("sql_type", &self.sql_type)
            .finish()
    }
}

/// Handle returned by column registration for further configuration.
///
/// # Example
///
/// ```
/// use sqltypes::Table;
///
/// let mut employees = Table::new("t_employee");
/// let id = employees.int("id")?.primary_key().build();
/// let name = employees.varchar("name")?.not_null().build();
///
/// assert_eq!(id.name(), "id");
/// assert_eq!(employees.primary_keys(), vec!["id"]);
/// # let _ = name;
/// # Ok::<(), sqltypes::Error>(())
/// ```
pub struct ColumnBuilder<'a, T> {
    def: &'a mut ColumnDef,
    column: Column<T>,
}

impl<'a, T> ColumnBuilder<'a, T> {
    pub(crate) fn new(def: &'a mut ColumnDef, column: Column<T>) -> Self {
        Self { def, column }
    }

    /// Mark the column as (part of) the primary key. Implies `not_null`.
    pub fn primary_key(self) -> Self {
        self.def.primary_key = true;
        self.def.nullable = false;
        self
    }

    /// Disallow NULL values.
    pub fn not_null(self) -> Self {
        self.def.nullable = false;
        self
    }

    /// Allow NULL values (the default).
    pub fn nullable(self) -> Self {
        self.def.nullable = true;
        self
    }

    /// Finish configuration and return the typed column handle.
    pub fn build(self) -> Column<T> {
        self.column
    }
}

impl<T> From<ColumnBuilder<'_, T>> for Column<T> {
    fn from(builder: ColumnBuilder<'_, T>) -> Self {
        builder.build()
    }
}
