//! Error types for reading result tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Path given for discovery does not exist.
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
