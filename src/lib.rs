//! Core library for the student-roster command line application.
//!
//! The student table lives in [`store`], which persists it through a pluggable
//! [`store::StorageBackend`]. File formats sit under [`io`]: the CSV backing
//! file in [`io::csv_file`] and the spreadsheet export in [`io::excel_write`].
//! [`render`] turns records and aggregates into terminal output.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;

pub use error::{Result, RosterError};
