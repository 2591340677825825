//! Ingestion for result tables: CSV reading and file discovery.
//!
//! Nothing here interprets cell contents; that is the checker's job.

pub mod csv_table;
pub mod discovery;
pub mod error;

pub use csv_table::{read_table, read_table_from_reader};
pub use discovery::{ENTRIES_FILE, EntriesFile, MEET_FILE, discover_entries};
pub use error::{IngestError, Result};
