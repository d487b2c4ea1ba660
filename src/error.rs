//! Error types for the column type catalog.

use std::io;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for binding and extracting column values.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a large object stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reported by the underlying driver.
    #[error("Driver error: {message}")]
    Driver { message: String },

    /// Stored text could not be parsed back into a temporal value.
    #[error("Cannot parse '{input}' as {target}: {message}")]
    Format {
        target: &'static str,
        input: String,
        message: String,
    },

    /// Enum member name not declared by the enum type.
    #[error("No member named '{name}' in enum {enum_type}")]
    Lookup {
        enum_type: &'static str,
        name: String,
    },

    /// Two members of one enum type share a stored name.
    #[error("Duplicate member name '{name}' in enum {enum_type}")]
    DuplicateEnumMember {
        enum_type: &'static str,
        name: String,
    },

    /// Generic object slot held a value of the wrong type.
    #[error("Cannot cast {actual} to {expected}")]
    Cast {
        expected: &'static str,
        actual: &'static str,
    },

    /// Value handed to a descriptor does not belong to its domain.
    #[error("Type mismatch: {sql_type} column cannot hold a {actual} value")]
    TypeMismatch {
        sql_type: &'static str,
        actual: &'static str,
    },

    /// Slot getter called on a value of a different driver type.
    #[error("Column {index} holds {actual}, expected {expected}")]
    UnexpectedDriverType {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// Numeric value outside the range of the target type.
    #[error("Value {value} out of range for {target}")]
    ValueOutOfRange { target: &'static str, value: i64 },

    /// Parameter or column index out of bounds (indices are 1-based).
    #[error("Index {index} out of bounds (count: {count})")]
    IndexOutOfBounds { index: usize, count: usize },

    /// Column registered twice on the same table.
    #[error("Duplicate column name '{name}' in table {table}")]
    DuplicateColumn { table: String, name: String },

    /// Invalid session time zone.
    #[error("Invalid time zone '{value}': expected Z, UTC or +HH:MM")]
    InvalidTimeZone { value: String },

    /// Large object used after it was freed.
    #[error("Large object has already been freed")]
    LobFreed,
}

impl Error {
    /// Create a driver error.
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Create a format error for `target` failing to parse `input`.
    pub fn format(target: &'static str, input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            target,
            input: input.into(),
            message: message.into(),
        }
    }
}
