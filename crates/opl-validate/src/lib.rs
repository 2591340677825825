//! Rule engine for powerlifting `entries.csv` tables.
//!
//! The engine checks an already parsed [`Table`](opl_model::Table) in three
//! layers:
//!
//! - **Header**: required, unknown and duplicated columns
//! - **Rows**: agreement between Event, lifts, totals, weight class and sex
//! - **Cells**: the format of every non-empty cell, via a fixed registry
//!   keyed by [`ColumnKind`](opl_model::ColumnKind)
//!
//! Findings are collected in a [`DiagnosticSink`]; the caller decides what an
//! error count means for its exit status.
//!
//! # Example
//!
//! ```ignore
//! use opl_validate::{CheckSettings, DiagnosticSink, TableChecker};
//!
//! let checker = TableChecker::new(CheckSettings::default());
//! let mut sink = DiagnosticSink::new();
//! checker.check(path, &table, &mut sink);
//! if sink.has_errors() {
//!     // ...
//! }
//! ```

mod catalog;
pub mod cells;
mod checker;
mod checks;
mod context;
mod error;
pub mod header;
mod options;
mod sink;

pub use catalog::{WeightClassCatalog, WeightClassEntry};
pub use checker::TableChecker;
pub use context::{Finding, HeaderMatch, RowView, Schema, parse_number};
pub use error::ConfigError;
pub use options::{CheckOptions, CheckSettings};
pub use sink::DiagnosticSink;
