//! Finding `entries.csv` files and their companion `meet.csv`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// File name of a result table.
pub const ENTRIES_FILE: &str = "entries.csv";

/// File name of the competition metadata that must sit next to it.
pub const MEET_FILE: &str = "meet.csv";

/// A discovered result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntriesFile {
    /// Path to the `entries.csv` file.
    pub path: PathBuf,
    /// The sibling `meet.csv`, if it exists.
    pub meet_path: Option<PathBuf>,
}

impl EntriesFile {
    fn new(path: PathBuf) -> Self {
        let meet_path = path
            .parent()
            .map(|dir| dir.join(MEET_FILE))
            .filter(|meet| meet.is_file());
        Self { path, meet_path }
    }
}

/// Find every `entries.csv` under `root`.
///
/// `root` may also be a file, which is taken as-is whatever its name. Hidden
/// directories are skipped. Results are sorted by path.
pub fn discover_entries(root: &Path) -> Result<Vec<EntriesFile>> {
    if root.is_file() {
        return Ok(vec![EntriesFile::new(root.to_path_buf())]);
    }
    if !root.is_dir() {
        return Err(IngestError::PathNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    walk(root, &mut found)?;
    found.sort();
    debug!(root = %root.display(), count = found.len(), "discovered entries files");

    Ok(found.into_iter().map(EntriesFile::new).collect())
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let read_error = |source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };
    for entry_result in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry_result.map_err(read_error)?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');

        if path.is_dir() {
            if !hidden {
                walk(&path, found)?;
            }
        } else if entry.file_name() == ENTRIES_FILE {
            found.push(path);
        }
    }
    Ok(())
}
