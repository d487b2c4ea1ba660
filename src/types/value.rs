//! Application-level values carried through descriptors.

use super::calendar::{MonthDay, Year, YearMonth};
use super::enumeration::EnumMember;
use crate::driver::{SqlDate, SqlTime, SqlTimestamp};
use crate::error::{Error, Result};
use base64::Engine;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// A non-null value of one of the catalog's value domains.
///
/// NULL is represented by the absence of a value (`Option<Value>`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    /// Text for both `varchar` and `text` columns.
    String(String),
    /// Binary data for both `blob` and `bytes` columns.
    Bytes(Vec<u8>),
    /// Driver-native timestamp.
    SqlTimestamp(SqlTimestamp),
    /// Driver-native date.
    SqlDate(SqlDate),
    /// Driver-native time.
    SqlTime(SqlTime),
    /// UTC point in time.
    Instant(DateTime<Utc>),
    LocalDateTime(NaiveDateTime),
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
    MonthDay(MonthDay),
    YearMonth(YearMonth),
    Year(Year),
    Enum(EnumMember),
    Uuid(Uuid),
}

impl Value {
    /// Name of the value domain, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "bool",
            Value::Int(_) => "i32",
            Value::Long(_) => "i64",
            Value::Float(_) => "f32",
            Value::Double(_) => "f64",
            Value::Decimal(_) => "Decimal",
            Value::String(_) => "String",
            Value::Bytes(_) => "bytes",
            Value::SqlTimestamp(_) => "SqlTimestamp",
            Value::SqlDate(_) => "SqlDate",
            Value::SqlTime(_) => "SqlTime",
            Value::Instant(_) => "DateTime<Utc>",
            Value::LocalDateTime(_) => "NaiveDateTime",
            Value::LocalDate(_) => "NaiveDate",
            Value::LocalTime(_) => "NaiveTime",
            Value::MonthDay(_) => "MonthDay",
            Value::YearMonth(_) => "YearMonth",
            Value::Year(_) => "Year",
            Value::Enum(_) => "enum",
            Value::Uuid(_) => "Uuid",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "{}", base64::engine::general_purpose::STANDARD.encode(v)),
            Value::SqlTimestamp(v) => write!(f, "{}", v),
            Value::SqlDate(v) => write!(f, "{}", v),
            Value::SqlTime(v) => write!(f, "{}", v),
            Value::Instant(v) => write!(f, "{}", v.to_rfc3339()),
            Value::LocalDateTime(v) => write!(f, "{}", v),
            Value::LocalDate(v) => write!(f, "{}", v),
            Value::LocalTime(v) => write!(f, "{}", v),
            Value::MonthDay(v) => write!(f, "{}", v),
            Value::YearMonth(v) => write!(f, "{}", v),
            Value::Year(v) => write!(f, "{}", v),
            Value::Enum(v) => write!(f, "{}", v.name),
            Value::Uuid(v) => write!(f, "{}", v),
        }
    }
}

/// Rust types that map onto one [`Value`] variant.
///
/// Typed columns use this to move between `T` and the descriptor's
/// untyped `Value`. Enums go through [`SqlEnum`](super::SqlEnum) instead.
pub trait ColumnValue: Sized {
    /// Wrap `self` in a catalog value.
    fn to_value(&self) -> Value;

    /// Unwrap a catalog value, failing if it holds another domain.
    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_column_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ColumnValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Error::Cast {
                            expected: stringify!($ty),
                            actual: other.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_column_value! {
    bool => Boolean,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    String => String,
    Vec<u8> => Bytes,
    SqlTimestamp => SqlTimestamp,
    SqlDate => SqlDate,
    SqlTime => SqlTime,
    DateTime<Utc> => Instant,
    NaiveDateTime => LocalDateTime,
    NaiveDate => LocalDate,
    NaiveTime => LocalTime,
    MonthDay => MonthDay,
    YearMonth => YearMonth,
    Year => Year,
    Uuid => Uuid,
}
