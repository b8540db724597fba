//! Input spreadsheet reader.
//!
//! Loads the `Input_CNPJ` worksheet, locates the `CNPJ` column by its
//! trimmed header, and turns the raw cells into sanitized, deduplicated
//! identifiers. Validation failures are fatal: no lookup is issued for a
//! workbook the reader rejects.
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use thiserror::Error;

use crate::core::sanitize::collect_unique;
use crate::types::Cnpj;

/// Worksheet the input identifiers are read from.
pub const INPUT_SHEET: &str = "Input_CNPJ";

/// Header of the identifier column inside [`INPUT_SHEET`].
pub const CNPJ_COLUMN: &str = "CNPJ";

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to read workbook: {0}")]
    Open(#[from] calamine::XlsxError),

    #[error("worksheet '{0}' not found")]
    MissingSheet(String),

    #[error("column '{column}' not found in worksheet '{sheet}'")]
    MissingColumn { column: String, sheet: String },

    #[error("failed to write workbook: {0}")]
    Write(String),
}

/// The validated input sheet: identifiers already sanitized and
/// deduplicated, in first-occurrence order.
#[derive(Debug, Clone)]
pub struct CnpjSheet {
    cnpjs: Vec<Cnpj>,
}

impl CnpjSheet {
    /// Open `path` and extract the identifier column.
    pub fn open(path: &Path) -> Result<Self, SheetError> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        if !workbook.sheet_names().iter().any(|n| n == INPUT_SHEET) {
            return Err(SheetError::MissingSheet(INPUT_SHEET.to_string()));
        }
        let range = workbook.worksheet_range(INPUT_SHEET)?;

        let mut rows = range.rows();
        let header = rows.next().unwrap_or(&[]);
        let column = header
            .iter()
            .position(|cell| {
                cell_text(cell)
                    .map(|text| text.trim() == CNPJ_COLUMN)
                    .unwrap_or(false)
            })
            .ok_or_else(|| SheetError::MissingColumn {
                column: CNPJ_COLUMN.to_string(),
                sheet: INPUT_SHEET.to_string(),
            })?;

        let cells = rows.filter_map(|row| row.get(column).and_then(cell_text));
        Ok(Self {
            cnpjs: collect_unique(cells),
        })
    }

    pub fn cnpjs(&self) -> &[Cnpj] {
        &self.cnpjs
    }

    pub fn len(&self) -> usize {
        self.cnpjs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cnpjs.is_empty()
    }

    pub fn into_cnpjs(self) -> Vec<Cnpj> {
        self.cnpjs
    }
}

/// Textual content of a cell, if it has any.
///
/// Excel frequently stores numeric-looking CNPJs as floats; an integral
/// float is rendered without a fractional part so its digits survive
/// sanitization.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{f:.0}")),
        Data::Float(f) => Some(f.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_float_cells_keep_all_digits() {
        let text = cell_text(&Data::Float(12345678000195.0)).unwrap();
        assert_eq!(text, "12345678000195");
    }

    #[test]
    fn empty_cells_have_no_text() {
        assert!(cell_text(&Data::Empty).is_none());
    }

    #[test]
    fn missing_column_message_names_sheet_and_column() {
        let err = SheetError::MissingColumn {
            column: CNPJ_COLUMN.to_string(),
            sheet: INPUT_SHEET.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'CNPJ' not found in worksheet 'Input_CNPJ'"
        );
    }
}
