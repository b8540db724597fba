//! End-to-end pipeline tests over real workbook files, no network:
//! input reading/sanitization, validation aborts, and the result
//! writer read back cell by cell.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tempfile::TempDir;

use cnpjfetch::{
    Cnpj, CnpjSheet, CompanyRecord, LookupRecord, RESULT_COLUMNS, RESULT_FILE_NAME, SheetError,
    output_path_for, write_results,
};

fn write_input_workbook(path: &Path, header: &str, cells: &[&str]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.new_sheet("Input_CNPJ").unwrap();
    sheet.get_cell_mut("A1").set_value(header);
    for (index, cell) in cells.iter().enumerate() {
        let row = index as u32 + 2;
        sheet.get_cell_mut((1, row)).set_value(*cell);
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

#[test]
fn reads_sanitizes_and_deduplicates() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xlsx");

    // One formatted value, one duplicate of it, one invalid length.
    write_input_workbook(
        &input,
        "CNPJ",
        &["12.345.678/0001-95", "12345678000195", "123"],
    );

    let sheet = CnpjSheet::open(&input).unwrap();
    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet.cnpjs()[0].as_str(), "12345678000195");
}

#[test]
fn header_whitespace_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xlsx");

    write_input_workbook(&input, "  CNPJ  ", &["11.444.777/0001-61"]);

    let sheet = CnpjSheet::open(&input).unwrap();
    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet.cnpjs()[0].as_str(), "11444777000161");
}

#[test]
fn missing_column_aborts_with_specific_message() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xlsx");

    write_input_workbook(&input, "Empresa", &["12345678000195"]);

    let err = CnpjSheet::open(&input).unwrap_err();
    match &err {
        SheetError::MissingColumn { column, sheet } => {
            assert_eq!(column, "CNPJ");
            assert_eq!(sheet, "Input_CNPJ");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "column 'CNPJ' not found in worksheet 'Input_CNPJ'"
    );
}

#[test]
fn missing_sheet_aborts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xlsx");

    // Workbook with only the default sheet.
    let book = umya_spreadsheet::new_file();
    umya_spreadsheet::writer::xlsx::write(&book, &input).unwrap();

    let err = CnpjSheet::open(&input).unwrap_err();
    assert!(matches!(err, SheetError::MissingSheet(_)));
    assert_eq!(err.to_string(), "worksheet 'Input_CNPJ' not found");
}

#[test]
fn written_results_read_back_cell_by_cell() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xlsx");
    let output = output_path_for(&input);
    assert_eq!(output, dir.path().join(RESULT_FILE_NAME));

    let active = LookupRecord::Company(Box::new(CompanyRecord {
        cnpj: Some("12.345.678/0001-95".to_string()),
        situacao: Some("ATIVA".to_string()),
        nome: Some("EMPRESA EXEMPLO LTDA".to_string()),
        ..Default::default()
    }));
    let failed = LookupRecord::failed(Cnpj::parse("11444777000161").unwrap(), "HTTP 500");

    write_results(&output, &[active, failed]).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let sheet_name = workbook.sheet_names().first().unwrap().clone();
    let range = workbook.worksheet_range(&sheet_name).unwrap();
    let rows: Vec<_> = range.rows().collect();
    assert_eq!(rows.len(), 3);

    let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
    assert_eq!(header, RESULT_COLUMNS);

    let erro_col = RESULT_COLUMNS.len() - 1;

    // Successful record: populated fields, empty Erro cell.
    assert_eq!(rows[1][0], Data::String("12.345.678/0001-95".to_string()));
    assert_eq!(rows[1][1], Data::String("ATIVA".to_string()));
    assert_eq!(rows[1][2], Data::String("EMPRESA EXEMPLO LTDA".to_string()));
    assert_eq!(rows[1][erro_col], Data::Empty);

    // Error record: identifier and Erro only.
    assert_eq!(rows[2][0], Data::String("11444777000161".to_string()));
    assert_eq!(rows[2][1], Data::Empty);
    assert_eq!(rows[2][erro_col], Data::String("HTTP 500".to_string()));
}

#[test]
fn empty_input_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(RESULT_FILE_NAME);

    write_results(&output, &[]).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let sheet_name = workbook.sheet_names().first().unwrap().clone();
    let range = workbook.worksheet_range(&sheet_name).unwrap();
    let rows: Vec<_> = range.rows().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), RESULT_COLUMNS.len());
}
