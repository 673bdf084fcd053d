//! The student table and the operations the CLI runs against it.
//!
//! Every mutating call rewrites the whole table through the injected
//! [`StorageBackend`]. There is no locking: two processes writing the same
//! backing file race and the last save wins.

mod backend;

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::csv_file::CsvFileBackend;
use crate::model::StudentRecord;

pub use backend::{MemoryBackend, StorageBackend};

/// Owns the in-memory student table and keeps the backend in sync with it.
#[derive(Debug)]
pub struct StudentStore<B: StorageBackend> {
    backend: B,
    records: Vec<StudentRecord>,
}

impl StudentStore<CsvFileBackend> {
    /// Opens the store backed by the CSV file at `path`. A missing file yields
    /// an empty table; the file is created on the first mutation.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(CsvFileBackend::new(path))
    }
}

impl<B: StorageBackend> StudentStore<B> {
    /// Loads the table from `backend`.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory table with the backend's current contents.
    pub fn load(&mut self) -> Result<()> {
        self.records = self.backend.load()?;
        debug!(row_count = self.records.len(), "student table loaded");
        Ok(())
    }

    /// Appends a record and persists the table. Names are not required to be
    /// unique.
    #[instrument(level = "info", skip(self))]
    pub fn add(&mut self, class: &str, age: i64, name: &str) -> Result<()> {
        self.records.push(StudentRecord::new(class, age, name));
        self.persist()?;
        info!(row_count = self.records.len(), "student added");
        Ok(())
    }

    /// Removes every record whose name equals `name` exactly and persists the
    /// table. Returns `true` when at least one row was removed.
    #[instrument(level = "info", skip(self))]
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.name != name);
        self.persist()?;

        let removed = before - self.records.len();
        info!(removed, "delete applied");
        Ok(removed > 0)
    }

    /// Rows whose name or class contains `keyword`, ignoring case, in table
    /// order. An empty keyword matches every row.
    pub fn search(&self, keyword: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|record| record.matches_keyword(keyword))
            .collect()
    }

    /// Overwrites the first record named `old_name` and persists the table.
    ///
    /// Only the first match changes even when several rows share the name,
    /// whereas [`delete`](Self::delete) removes them all. Returns `false` and
    /// leaves both the table and the backend untouched when nothing matches.
    #[instrument(level = "info", skip(self))]
    pub fn update(
        &mut self,
        old_name: &str,
        new_class: &str,
        new_age: i64,
        new_name: &str,
    ) -> Result<bool> {
        let Some(record) = self.records.iter_mut().find(|record| record.name == old_name) else {
            debug!("no student with that name");
            return Ok(false);
        };

        record.class = new_class.to_string();
        record.age = new_age;
        record.name = new_name.to_string();
        self.persist()?;
        info!("student updated");
        Ok(true)
    }

    /// First record named exactly `name`.
    pub fn find(&self, name: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Every record in table order.
    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per class, ordered by class.
    pub fn count_by_class(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.class.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Mean age per class, ordered by class.
    pub fn average_age_by_class(&self) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, (i64, usize)> = BTreeMap::new();
        for record in &self.records {
            let entry = totals.entry(record.class.clone()).or_insert((0, 0));
            entry.0 += record.age;
            entry.1 += 1;
        }

        totals
            .into_iter()
            .map(|(class, (sum, count))| (class, sum as f64 / count as f64))
            .collect()
    }

    /// The backend the table is persisted through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&mut self) -> Result<()> {
        self.backend.save(&self.records)?;
        debug!(row_count = self.records.len(), "student table saved");
        Ok(())
    }
}
