use crate::error::Result;
use crate::model::StudentRecord;

/// Durable home of the student table.
///
/// Backends move the whole table at once: [`load`](StorageBackend::load) returns
/// every stored row in order and [`save`](StorageBackend::save) replaces whatever
/// was stored before. A backend with nothing stored yet loads as an empty table.
pub trait StorageBackend {
    /// Reads every stored record, preserving the stored order.
    fn load(&self) -> Result<Vec<StudentRecord>>;

    /// Replaces the stored table with `records`.
    fn save(&mut self, records: &[StudentRecord]) -> Result<()>;
}

/// Keeps the table in memory. Used by tests in place of the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Vec<StudentRecord>,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds the given rows.
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self { records, saves: 0 }
    }

    /// Rows as of the last save.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Number of times the table has been saved.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[StudentRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
