//! Result workbook writer.
//!
//! Serializes the collected records into a fresh workbook: one header
//! row from [`RESULT_COLUMNS`], one row per record, no styling.
use std::path::Path;

use crate::io::xlsx::SheetError;
use crate::types::{LookupRecord, RESULT_COLUMNS};

/// Fixed output filename, written next to the input file.
pub const RESULT_FILE_NAME: &str = "resultado_cnpjs_receita.xlsx";

pub fn write_results(path: &Path, records: &[LookupRecord]) -> Result<(), SheetError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    for (index, name) in RESULT_COLUMNS.iter().enumerate() {
        sheet.get_cell_mut((index as u32 + 1, 1)).set_value(*name);
    }

    for (row_index, record) in records.iter().enumerate() {
        // Row 1 is the header; records start at row 2.
        let row = row_index as u32 + 2;
        for (col_index, value) in record.row().into_iter().enumerate() {
            if let Some(value) = value {
                sheet.get_cell_mut((col_index as u32 + 1, row)).set_value(value);
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| SheetError::Write(e.to_string()))
}
