//! Value domains and the SQL type descriptors that bind them.

mod calendar;
mod enumeration;
mod sql_type;
mod value;

pub use calendar::{MonthDay, Year, YearMonth, MAX_YEAR, MIN_YEAR};
pub use enumeration::{enum_from_value, enum_to_value, EnumMember, EnumType, SqlEnum};
pub use sql_type::SqlType;
pub use value::{ColumnValue, Value};
