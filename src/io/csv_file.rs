use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Result, RosterError};
use crate::model::{COLUMNS, StudentRecord};
use crate::store::StorageBackend;

/// Stores the student table as a comma-separated file with the header
/// `student_class,student_age,student_name`.
#[derive(Debug, Clone)]
pub struct CsvFileBackend {
    path: PathBuf,
}

impl CsvFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for CsvFileBackend {
    /// Columns are matched by header name. A missing or zero-byte file loads as
    /// an empty table; any row that does not fit the three columns is an error.
    #[instrument(level = "debug", skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<StudentRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                warn!("backing file not found, starting with an empty table");
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<StudentRecord>, _>>()
            .map_err(|source| RosterError::csv(&self.path, source))?;
        debug!(row_count = records.len(), "parsed backing file");
        Ok(records)
    }

    /// Rewrites the whole file. The header is always written, so an empty
    /// table still round-trips.
    #[instrument(level = "debug", skip_all, fields(path = %self.path.display(), row_count = records.len()))]
    fn save(&mut self, records: &[StudentRecord]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|source| RosterError::csv(&self.path, source))?;

        writer
            .write_record(COLUMNS)
            .map_err(|source| RosterError::csv(&self.path, source))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|source| RosterError::csv(&self.path, source))?;
        }
        writer.flush()?;
        Ok(())
    }
}
