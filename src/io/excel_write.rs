use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Table, TableColumn, Workbook};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{COLUMNS, StudentRecord};

/// Name of the single worksheet in the export.
pub const SHEET_NAME: &str = "Students";
/// File name offered for the exported workbook.
pub const EXPORT_FILE_NAME: &str = "students.xlsx";
/// MIME type of the exported workbook.
pub const EXPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serialises the table into an in-memory `.xlsx` workbook with one sheet named
/// [`SHEET_NAME`]. Ages are written as numbers, everything else as text.
#[instrument(level = "info", skip_all, fields(row_count = records.len()))]
pub fn export_to_buffer(records: &[StudentRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col_idx, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, *header)?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, &record.class)?;
        worksheet.write_number(row, 1, record.age as f64)?;
        worksheet.write_string(row, 2, &record.name)?;
    }

    // Excel tables need at least one data row below the header.
    if !records.is_empty() {
        let columns: Vec<TableColumn> = COLUMNS
            .iter()
            .map(|header| TableColumn::new().set_header(*header))
            .collect();
        let table = Table::new().set_autofilter(true).set_columns(&columns);
        let col_end = (COLUMNS.len() as u16).saturating_sub(1);
        worksheet.add_table(0, 0, records.len() as u32, col_end, &table)?;
    }
    worksheet.autofit();

    let buffer = workbook.save_to_buffer()?;
    debug!(byte_count = buffer.len(), "workbook serialised");
    Ok(buffer)
}

/// Writes the export produced by [`export_to_buffer`] to `path`.
#[instrument(level = "info", skip(records), fields(path = %path.display()))]
pub fn export_to_file(records: &[StudentRecord], path: &Path) -> Result<()> {
    let buffer = export_to_buffer(records)?;
    fs::write(path, buffer)?;
    Ok(())
}
