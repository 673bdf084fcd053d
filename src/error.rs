use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Error type covering the failure cases of loading, persisting, and exporting
/// the student table.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the backing file cannot be parsed or written as CSV.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Raised when JSON output cannot be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the CLI rejects user input before reaching the store.
    #[error("{0}")]
    InvalidInput(String),

    /// Raised when an update or delete targets a name that is not in the table.
    #[error("{0}")]
    NotFound(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl RosterError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        RosterError::Csv {
            path: path.into(),
            source,
        }
    }
}
