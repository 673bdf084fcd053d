use std::path::PathBuf;

use crate::error::Result;
use crate::io::csv_file::CsvFileBackend;
use crate::io::excel_write::EXPORT_FILE_NAME;
use crate::store::StudentStore;

/// Backing file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "students.csv";
/// Environment variable that overrides the backing file location.
pub const DATA_FILE_ENV: &str = "STUDENT_ROSTER_DATA";

/// Where the roster reads and writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub data_file: PathBuf,
    pub export_file: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(EXPORT_FILE_NAME),
        }
    }
}

impl RosterConfig {
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_export_file(mut self, export_file: impl Into<PathBuf>) -> Self {
        self.export_file = export_file.into();
        self
    }

    /// Opens the CSV-backed store at [`data_file`](Self::data_file).
    pub fn open_store(&self) -> Result<StudentStore<CsvFileBackend>> {
        StudentStore::open_path(&self.data_file)
    }
}
