//! Table definitions and typed columns.

mod column;
mod table;

pub use column::{Column, ColumnBuilder, ColumnDef};
pub use table::Table;
