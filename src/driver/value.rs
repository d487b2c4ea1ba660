//! Driver-level values held by parameter and result slots.

use super::lob::LobValue;
use super::temporal::{SqlDate, SqlTime, SqlTimestamp};
use base64::Engine;
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// A single value as the driver sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// NULL value.
    Null,
    /// BOOLEAN value.
    Boolean(bool),
    /// INTEGER value.
    Int(i32),
    /// BIGINT value.
    Long(i64),
    /// FLOAT value.
    Float(f32),
    /// DOUBLE value.
    Double(f64),
    /// DECIMAL value.
    Decimal(Decimal),
    /// Character value (VARCHAR, LONGVARCHAR, ...).
    String(String),
    /// Binary value (BINARY, VARBINARY, ...).
    Bytes(Vec<u8>),
    /// BLOB value.
    Blob(LobValue),
    /// TIMESTAMP value.
    Timestamp(SqlTimestamp),
    /// DATE value.
    Date(SqlDate),
    /// TIME value.
    Time(SqlTime),
    /// UUID passed through the generic object mechanism.
    Uuid(Uuid),
}

impl DriverValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Name of the driver type this value carries.
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Boolean(_) => "boolean",
            DriverValue::Int(_) => "int",
            DriverValue::Long(_) => "bigint",
            DriverValue::Float(_) => "float",
            DriverValue::Double(_) => "double",
            DriverValue::Decimal(_) => "decimal",
            DriverValue::String(_) => "varchar",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Blob(_) => "blob",
            DriverValue::Timestamp(_) => "timestamp",
            DriverValue::Date(_) => "date",
            DriverValue::Time(_) => "time",
            DriverValue::Uuid(_) => "uuid",
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DriverValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DriverValue::Bytes(bytes) => Some(bytes),
            DriverValue::Blob(lob) => lob.as_bytes(),
            _ => None,
        }
    }
}

impl fmt::Display for DriverValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverValue::Null => write!(f, "NULL"),
            DriverValue::Boolean(b) => write!(f, "{}", b),
            DriverValue::Int(n) => write!(f, "{}", n),
            DriverValue::Long(n) => write!(f, "{}", n),
            DriverValue::Float(n) => write!(f, "{}", n),
            DriverValue::Double(n) => write!(f, "{}", n),
            DriverValue::Decimal(d) => write!(f, "{}", d),
            DriverValue::String(s) => write!(f, "{}", s),
            DriverValue::Bytes(bytes) => {
                write!(f, "{}", base64::engine::general_purpose::STANDARD.encode(bytes))
            }
            DriverValue::Blob(lob) => write!(f, "<BLOB: {} bytes>", lob.size()),
            DriverValue::Timestamp(ts) => write!(f, "{}", ts),
            DriverValue::Date(d) => write!(f, "{}", d),
            DriverValue::Time(t) => write!(f, "{}", t),
            DriverValue::Uuid(u) => write!(f, "{}", u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_value_null() {
        let val = DriverValue::Null;
        assert!(val.is_null());
        assert_eq!(val.as_str(), None);
        assert_eq!(format!("{}", val), "NULL");
    }

    #[test]
    fn test_driver_value_string() {
        let val = DriverValue::String("hello".to_string());
        assert!(!val.is_null());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.type_name(), "varchar");
    }

    #[test]
    fn test_driver_value_bytes_display() {
        let val = DriverValue::Bytes(b"hello".to_vec());
        assert_eq!(format!("{}", val), "aGVsbG8=");
        assert_eq!(val.as_bytes(), Some(b"hello".as_slice()));

        let blob = DriverValue::Blob(LobValue::new(b"hello".to_vec()));
        assert_eq!(format!("{}", blob), "<BLOB: 5 bytes>");
        assert_eq!(blob.as_bytes(), Some(b"hello".as_slice()));
    }
}
