//! Read-only lookup data consumed by the calculator.
//!
//! The calculator never owns its tables; it reads them through
//! [`TablesOracle`] so built-in tables and loaded content are interchangeable.
mod error;
mod tables;

pub use error::TableError;
pub use tables::{CatchTables, MultiplierEntry, MultiplierTable, TablesOracle};
