//! Data model for competition-result tables and the diagnostics found in them.

pub mod column;
pub mod diagnostic;
pub mod enums;
pub mod error;
pub mod table;
pub mod weight_class;

pub use column::{ColumnKind, is_valid_disambiguation, split_disambiguation};
pub use diagnostic::{Diagnostic, FileReport, Severity};
pub use enums::{Equipment, Event, Lift, Place, Sex, Tested};
pub use error::{LiteralKind, ModelError, Result};
pub use table::Table;
pub use weight_class::WeightClass;
