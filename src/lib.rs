//! Typed column descriptors for SQL parameters and results.
//!
//! This crate maps Rust value types onto the parameter-binding and
//! result-extraction calls of a database driver. Each supported domain has
//! one [`SqlType`] descriptor and one column declaration helper on
//! [`Table`].
//!
//! # Example
//!
//! ```
//! use sqltypes::{Parameters, Result, Row, SqlEnum, Table};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Gender {
//!     Male,
//!     Female,
//! }
//!
//! impl SqlEnum for Gender {
//!     fn members() -> &'static [Self] {
//!         &[Gender::Male, Gender::Female]
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Gender::Male => "MALE",
//!             Gender::Female => "FEMALE",
//!         }
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut employees = Table::new("t_employee");
//!     let id = employees.long("id")?.primary_key().build();
//!     let gender = employees.enumeration::<Gender>("gender")?.build();
//!
//!     // Bind parameters for an insert
//!     let mut params = Parameters::new();
//!     id.bind(&mut params, 1, Some(&1))?;
//!     gender.bind(&mut params, 2, Some(&Gender::Female))?;
//!
//!     // Read them back as if they were a result row
//!     let mut row = Row::from_parameters(params);
//!     assert_eq!(id.extract(&mut row, 1)?, Some(1));
//!     assert_eq!(gender.extract(&mut row, 2)?, Some(Gender::Female));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod schema;
pub mod types;

// Re-export main types
pub use config::SessionOptions;
pub use driver::{
    DriverValue, LargeObject, LobValue, ParameterSink, Parameters, ResultSource, Row, SqlDate,
    SqlTime, SqlTimestamp,
};
pub use error::{Error, Result};
pub use schema::{Column, ColumnBuilder, ColumnDef, Table};
pub use types::{ColumnValue, EnumType, MonthDay, SqlEnum, SqlType, Value, Year, YearMonth};
