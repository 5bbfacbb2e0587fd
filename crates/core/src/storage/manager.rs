use chrono::NaiveDate;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
#[cfg(not(target_arch = "wasm32"))]
use tracing::info;

#[cfg(not(target_arch = "wasm32"))]
use crate::errors::CoreError;

/// MIME type the frontend should attach to a downloaded export.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Prefix of every export file name.
const EXPORT_FILE_PREFIX: &str = "budget-tracker";

/// Naming and writing of CSV export files.
///
/// Nothing here is read back: exports are one-way snapshots, not session storage.
pub struct StorageManager;

impl StorageManager {
    /// File name for an export made on `date`, e.g. `budget-tracker-2024-03-05.csv`.
    #[must_use]
    pub fn export_filename(date: NaiveDate) -> String {
        format!("{EXPORT_FILE_PREFIX}-{}.csv", date.format("%Y-%m-%d"))
    }

    /// Write an export into `dir` (created if missing). Returns the full path written.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn write_export(dir: &Path, date: NaiveDate, csv: &str) -> Result<PathBuf, CoreError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(Self::export_filename(date));
        std::fs::write(&path, csv)?;
        info!(path = %path.display(), bytes = csv.len(), "wrote CSV export");
        Ok(path)
    }
}
