//! SQL type descriptors.
//!
//! Each [`SqlType`] variant binds one value domain to one pair of driver
//! calls: a setter on the [`ParameterSink`] and a getter on the
//! [`ResultSource`].
//!
//! | Descriptor | Driver type | Stored as |
//! |------------|-------------|-----------|
//! | `Boolean` | BOOLEAN | bool |
//! | `Int` | INTEGER | i32 |
//! | `Long` | BIGINT | i64 |
//! | `Float` | FLOAT | f32 |
//! | `Double` | DOUBLE | f64 |
//! | `Decimal` | DECIMAL | Decimal |
//! | `Varchar` | VARCHAR | String |
//! | `Text` | LONGVARCHAR | String |
//! | `Blob` | BLOB | large object |
//! | `Bytes` | BINARY | bytes |
//! | `JdbcTimestamp` / `Instant` / `LocalDateTime` | TIMESTAMP | SqlTimestamp |
//! | `JdbcDate` / `LocalDate` | DATE | SqlDate |
//! | `JdbcTime` / `LocalTime` | TIME | SqlTime |
//! | `MonthDay` | VARCHAR | `MM-dd` |
//! | `YearMonth` | VARCHAR | `yyyy-MM` |
//! | `Year` | INTEGER | i32 |
//! | `Enum` | VARCHAR | member name |
//! | `Uuid` | OTHER | driver object |

use super::calendar::{MonthDay, Year, YearMonth};
use super::enumeration::EnumType;
use super::value::Value;
use crate::driver::constants::*;
use crate::driver::{
    read_and_free, DriverValue, LobValue, ParameterSink, ResultSource, SqlDate, SqlTime,
    SqlTimestamp,
};
use crate::error::{Error, Result};
use tracing::trace;

/// Descriptor for one SQL type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlType {
    /// `boolean`.
    Boolean,
    /// `int`.
    Int,
    /// `bigint`.
    Long,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `decimal`.
    Decimal,
    /// `varchar`.
    Varchar,
    /// `text` (long character data).
    Text,
    /// `blob`, read through a large object handle.
    Blob,
    /// `bytes`, read directly.
    Bytes,
    /// `timestamp` holding a driver-native timestamp.
    JdbcTimestamp,
    /// `date` holding a driver-native date.
    JdbcDate,
    /// `time` holding a driver-native time.
    JdbcTime,
    /// `timestamp` holding a UTC instant.
    Instant,
    /// `datetime` holding a local date-time in the session time zone.
    LocalDateTime,
    /// `date` holding a calendar date.
    LocalDate,
    /// `time` holding a wall-clock time.
    LocalTime,
    /// Month-day saved as a `MM-dd` string.
    MonthDay,
    /// Year-month saved as a `yyyy-MM` string.
    YearMonth,
    /// Year saved as an integer.
    Year,
    /// Enum saved as its member name.
    Enum(EnumType),
    /// `uuid`, passed through the driver's object binding.
    Uuid,
}

impl SqlType {
    /// Get the driver type code.
    pub fn type_code(&self) -> i32 {
        match self {
            SqlType::Boolean => SQL_TYPE_BOOLEAN,
            SqlType::Int | SqlType::Year => SQL_TYPE_INTEGER,
            SqlType::Long => SQL_TYPE_BIGINT,
            SqlType::Float => SQL_TYPE_FLOAT,
            SqlType::Double => SQL_TYPE_DOUBLE,
            SqlType::Decimal => SQL_TYPE_DECIMAL,
            SqlType::Varchar | SqlType::MonthDay | SqlType::YearMonth | SqlType::Enum(_) => {
                SQL_TYPE_VARCHAR
            }
            SqlType::Text => SQL_TYPE_LONGVARCHAR,
            SqlType::Blob => SQL_TYPE_BLOB,
            SqlType::Bytes => SQL_TYPE_BINARY,
            SqlType::JdbcTimestamp | SqlType::Instant | SqlType::LocalDateTime => {
                SQL_TYPE_TIMESTAMP
            }
            SqlType::JdbcDate | SqlType::LocalDate => SQL_TYPE_DATE,
            SqlType::JdbcTime | SqlType::LocalTime => SQL_TYPE_TIME,
            SqlType::Uuid => SQL_TYPE_OTHER,
        }
    }

    /// Get the type name used in logs and schema generation.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlType::Boolean => "boolean",
            SqlType::Int | SqlType::Year => "int",
            SqlType::Long => "bigint",
            SqlType::Float => "float",
            SqlType::Double => "double",
            SqlType::Decimal => "decimal",
            SqlType::Varchar | SqlType::MonthDay | SqlType::YearMonth | SqlType::Enum(_) => {
                "varchar"
            }
            SqlType::Text => "text",
            SqlType::Blob => "blob",
            SqlType::Bytes => "bytes",
            SqlType::JdbcTimestamp | SqlType::Instant => "timestamp",
            SqlType::LocalDateTime => "datetime",
            SqlType::JdbcDate | SqlType::LocalDate => "date",
            SqlType::JdbcTime | SqlType::LocalTime => "time",
            SqlType::Uuid => "uuid",
        }
    }

    /// Bind `value` at the 1-based `index`; `None` binds a typed NULL.
    pub fn bind(
        &self,
        sink: &mut dyn ParameterSink,
        index: usize,
        value: Option<&Value>,
    ) -> Result<()> {
        trace!(sql_type = %self, index, "bind parameter");
        match value {
            None => sink.set_null(index, self.type_code()),
            Some(value) => self.bind_value(sink, index, value),
        }
    }

    fn bind_value(&self, sink: &mut dyn ParameterSink, index: usize, value: &Value) -> Result<()> {
        match (self, value) {
            (SqlType::Boolean, Value::Boolean(v)) => sink.set_boolean(index, *v),
            (SqlType::Int, Value::Int(v)) => sink.set_int(index, *v),
            (SqlType::Long, Value::Long(v)) => sink.set_long(index, *v),
            (SqlType::Float, Value::Float(v)) => sink.set_float(index, *v),
            (SqlType::Double, Value::Double(v)) => sink.set_double(index, *v),
            (SqlType::Decimal, Value::Decimal(v)) => sink.set_decimal(index, *v),
            (SqlType::Varchar | SqlType::Text, Value::String(v)) => sink.set_string(index, v),
            (SqlType::Blob, Value::Bytes(v)) => sink.set_blob(index, LobValue::new(v.clone())),
            (SqlType::Bytes, Value::Bytes(v)) => sink.set_bytes(index, v),
            (SqlType::JdbcTimestamp, Value::SqlTimestamp(v)) => sink.set_timestamp(index, *v),
            (SqlType::JdbcDate, Value::SqlDate(v)) => sink.set_date(index, *v),
            (SqlType::JdbcTime, Value::SqlTime(v)) => sink.set_time(index, *v),
            (SqlType::Instant, Value::Instant(v)) => {
                sink.set_timestamp(index, SqlTimestamp::from_instant(v))
            }
            (SqlType::LocalDateTime, Value::LocalDateTime(v)) => {
                let zone = sink.session().time_zone;
                sink.set_timestamp(index, SqlTimestamp::from_local(v, zone)?)
            }
            (SqlType::LocalDate, Value::LocalDate(v)) => sink.set_date(index, SqlDate::from_naive(v)),
            (SqlType::LocalTime, Value::LocalTime(v)) => sink.set_time(index, SqlTime::from_naive(v)),
            (SqlType::MonthDay, Value::MonthDay(v)) => sink.set_string(index, &v.to_string()),
            (SqlType::YearMonth, Value::YearMonth(v)) => sink.set_string(index, &v.to_string()),
            (SqlType::Year, Value::Year(v)) => sink.set_int(index, v.value()),
            (SqlType::Enum(enum_type), Value::Enum(member)) => {
                if !enum_type.owns(member) {
                    return Err(Error::Cast {
                        expected: enum_type.type_name(),
                        actual: member.enum_type(),
                    });
                }
                if !enum_type.contains(member.name) {
                    return Err(Error::Lookup {
                        enum_type: enum_type.type_name(),
                        name: member.name.to_string(),
                    });
                }
                sink.set_string(index, member.name)
            }
            (SqlType::Uuid, Value::Uuid(v)) => sink.set_object(index, DriverValue::Uuid(*v)),
            (sql_type, value) => Err(Error::TypeMismatch {
                sql_type: sql_type.type_name(),
                actual: value.type_name(),
            }),
        }
    }

    /// Extract the value at the 1-based `index`; SQL NULL yields `None`.
    pub fn extract(&self, source: &mut dyn ResultSource, index: usize) -> Result<Option<Value>> {
        trace!(sql_type = %self, index, "extract result");
        let value = match self {
            SqlType::Boolean => source.get_boolean(index)?.map(Value::Boolean),
            SqlType::Int => source.get_int(index)?.map(Value::Int),
            SqlType::Long => source.get_long(index)?.map(Value::Long),
            SqlType::Float => source.get_float(index)?.map(Value::Float),
            SqlType::Double => source.get_double(index)?.map(Value::Double),
            SqlType::Decimal => source.get_decimal(index)?.map(Value::Decimal),
            SqlType::Varchar | SqlType::Text => source.get_string(index)?.map(Value::String),
            SqlType::Blob => match source.get_blob(index)? {
                Some(lob) => Some(Value::Bytes(read_and_free(lob)?)),
                None => None,
            },
            SqlType::Bytes => source.get_bytes(index)?.map(Value::Bytes),
            SqlType::JdbcTimestamp => source.get_timestamp(index)?.map(Value::SqlTimestamp),
            SqlType::JdbcDate => source.get_date(index)?.map(Value::SqlDate),
            SqlType::JdbcTime => source.get_time(index)?.map(Value::SqlTime),
            SqlType::Instant => source
                .get_timestamp(index)?
                .map(|ts| ts.to_instant())
                .transpose()?
                .map(Value::Instant),
            SqlType::LocalDateTime => {
                let zone = source.session().time_zone;
                source
                    .get_timestamp(index)?
                    .map(|ts| ts.to_local(zone))
                    .transpose()?
                    .map(Value::LocalDateTime)
            }
            SqlType::LocalDate => source
                .get_date(index)?
                .map(|d| d.to_naive())
                .transpose()?
                .map(Value::LocalDate),
            SqlType::LocalTime => source
                .get_time(index)?
                .map(|t| t.to_naive())
                .transpose()?
                .map(Value::LocalTime),
            SqlType::MonthDay => source
                .get_string(index)?
                .map(|s| MonthDay::parse(&s))
                .transpose()?
                .map(Value::MonthDay),
            SqlType::YearMonth => source
                .get_string(index)?
                .map(|s| YearMonth::parse(&s))
                .transpose()?
                .map(Value::YearMonth),
            SqlType::Year => source
                .get_int(index)?
                .map(Year::new)
                .transpose()?
                .map(Value::Year),
            SqlType::Enum(enum_type) => source
                .get_string(index)?
                .filter(|name| !name.trim().is_empty())
                .map(|name| enum_type.resolve(&name))
                .transpose()?
                .map(Value::Enum),
            SqlType::Uuid => match source.get_object(index)? {
                DriverValue::Null => None,
                DriverValue::Uuid(uuid) => Some(Value::Uuid(uuid)),
                other => {
                    return Err(Error::Cast {
                        expected: "uuid",
                        actual: other.type_name(),
                    })
                }
            },
        };
        Ok(value)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlType::Enum(enum_type) => write!(f, "varchar({})", enum_type.type_name()),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Parameters, Row};

    fn round_trip(sql_type: &SqlType, value: &Value) -> Option<Value> {
        let mut params = Parameters::new();
        sql_type.bind(&mut params, 1, Some(value)).unwrap();
        let mut row = Row::from_parameters(params);
        sql_type.extract(&mut row, 1).unwrap()
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(SqlType::Boolean.type_code(), SQL_TYPE_BOOLEAN);
        assert_eq!(SqlType::Long.type_code(), SQL_TYPE_BIGINT);
        assert_eq!(SqlType::Text.type_code(), SQL_TYPE_LONGVARCHAR);
        assert_eq!(SqlType::Blob.type_code(), SQL_TYPE_BLOB);
        assert_eq!(SqlType::Instant.type_code(), SQL_TYPE_TIMESTAMP);
        assert_eq!(SqlType::MonthDay.type_code(), SQL_TYPE_VARCHAR);
        assert_eq!(SqlType::Year.type_code(), SQL_TYPE_INTEGER);
        assert_eq!(SqlType::Uuid.type_code(), SQL_TYPE_OTHER);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SqlType::LocalDateTime), "datetime");
        assert_eq!(format!("{}", SqlType::Instant), "timestamp");
        assert_eq!(format!("{}", SqlType::Bytes), "bytes");
    }

    #[test]
    fn test_bind_null_uses_type_code() {
        let mut params = Parameters::new();
        SqlType::Decimal.bind(&mut params, 1, None).unwrap();
        assert_eq!(params.get(1), Some(&DriverValue::Null));
        assert_eq!(params.null_type(1), Some(SQL_TYPE_DECIMAL));
    }

    #[test]
    fn test_bind_type_mismatch() {
        let mut params = Parameters::new();
        let result = SqlType::Int.bind(&mut params, 1, Some(&Value::Long(1)));
        match result {
            Err(Error::TypeMismatch { sql_type, actual }) => {
                assert_eq!(sql_type, "int");
                assert_eq!(actual, "i64");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
        assert!(params.is_empty());
    }

    #[test]
    fn test_month_day_stored_as_text() {
        let mut params = Parameters::new();
        let md = Value::MonthDay(MonthDay::new(3, 7).unwrap());
        SqlType::MonthDay.bind(&mut params, 1, Some(&md)).unwrap();
        assert_eq!(params.get(1), Some(&DriverValue::String("03-07".to_string())));
    }

    #[test]
    fn test_year_round_trip() {
        let year = Value::Year(Year::new(1999).unwrap());
        assert_eq!(round_trip(&SqlType::Year, &year), Some(year));
    }

    #[test]
    fn test_year_out_of_range_on_extract() {
        let mut params = Parameters::new();
        params.set_int(1, i32::MAX).unwrap();
        let mut row = Row::from_parameters(params);
        assert!(matches!(
            SqlType::Year.extract(&mut row, 1),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_blob_bound_as_large_object() {
        let mut params = Parameters::new();
        let data = Value::Bytes(b"blob data".to_vec());
        SqlType::Blob.bind(&mut params, 1, Some(&data)).unwrap();
        assert!(matches!(params.get(1), Some(DriverValue::Blob(_))));

        let mut row = Row::from_parameters(params);
        assert_eq!(SqlType::Blob.extract(&mut row, 1).unwrap(), Some(data));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shape {
        Circle,
    }

    impl crate::types::SqlEnum for Shape {
        fn members() -> &'static [Self] {
            &[Shape::Circle]
        }

        fn name(&self) -> &'static str {
            "CIRCLE"
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Badge {
        Circle,
    }

    impl crate::types::SqlEnum for Badge {
        fn members() -> &'static [Self] {
            &[Badge::Circle]
        }

        fn name(&self) -> &'static str {
            "CIRCLE"
        }
    }

    #[test]
    fn test_enum_bind_rejects_member_of_other_enum() {
        let shapes = SqlType::Enum(EnumType::of::<Shape>().unwrap());
        let badge = Value::Enum(crate::types::EnumMember::of(&Badge::Circle));

        let mut params = Parameters::new();
        match shapes.bind(&mut params, 1, Some(&badge)) {
            Err(Error::Cast { expected, actual }) => {
                assert_eq!(expected, "Shape");
                assert_eq!(actual, "Badge");
            }
            other => panic!("Expected Cast error, got {:?}", other),
        }
        assert!(params.is_empty());

        let circle = Value::Enum(crate::types::EnumMember::of(&Shape::Circle));
        assert_eq!(round_trip(&shapes, &circle), Some(circle));
    }

    #[test]
    fn test_uuid_rejects_other_objects() {
        let mut params = Parameters::new();
        params.set_string(1, "123e4567-e89b-12d3-a456-426614174000").unwrap();
        let mut row = Row::from_parameters(params);
        match SqlType::Uuid.extract(&mut row, 1) {
            Err(Error::Cast { expected, actual }) => {
                assert_eq!(expected, "uuid");
                assert_eq!(actual, "varchar");
            }
            other => panic!("Expected Cast error, got {:?}", other),
        }
    }
}
