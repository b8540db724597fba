//! High-level, ergonomic library API: run a whole input file to an
//! output file, or drive the lookup loop directly. Prefer these
//! entrypoints over the low-level io modules when embedding CNPJFETCH.
use std::path::{Path, PathBuf};

use crate::core::params::LookupParams;
use crate::error::Result;
use crate::io::receitaws::RegistryClient;
use crate::io::writers::xlsx::{RESULT_FILE_NAME, write_results};
use crate::io::xlsx::CnpjSheet;
use crate::types::{Cnpj, LookupRecord};

/// Summary of one completed run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Unique identifiers taken from the input sheet
    pub total: usize,
    /// Records decoded from a successful response
    pub succeeded: usize,
    /// Records carrying an error description
    pub failed: usize,
    /// Where the result workbook was written
    pub output: PathBuf,
}

/// The fixed output location for a given input file: the input's
/// directory joined with [`RESULT_FILE_NAME`].
pub fn output_path_for(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(RESULT_FILE_NAME)
}

/// Query every identifier, strictly one at a time, in input order.
///
/// `on_progress` is called with `(position, total, cnpj)` before each
/// request goes out, `position` counting from 1. Failures never stop
/// the loop; they come back as error records.
pub fn lookup_all(
    client: &RegistryClient,
    cnpjs: &[Cnpj],
    mut on_progress: impl FnMut(usize, usize, &Cnpj),
) -> Vec<LookupRecord> {
    let total = cnpjs.len();
    let mut records = Vec::with_capacity(total);
    for (index, cnpj) in cnpjs.iter().enumerate() {
        on_progress(index + 1, total, cnpj);
        records.push(client.lookup(cnpj));
    }
    records
}

/// Full pipeline: read and validate the input sheet, query the registry
/// per identifier, write the result workbook next to the input.
///
/// Input validation failures abort before any network call.
pub fn lookup_file_to_path(
    input: &Path,
    params: &LookupParams,
    on_progress: impl FnMut(usize, usize, &Cnpj),
) -> Result<BatchReport> {
    let sheet = CnpjSheet::open(input)?;
    let client = RegistryClient::new(params)?;

    let records = lookup_all(&client, sheet.cnpjs(), on_progress);
    let failed = records.iter().filter(|r| r.is_failed()).count();

    let output = output_path_for(input);
    write_results(&output, &records)?;

    Ok(BatchReport {
        total: records.len(),
        succeeded: records.len() - failed,
        failed,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lands_next_to_input() {
        let out = output_path_for(Path::new("/data/cnpjs/input.xlsx"));
        assert_eq!(out, Path::new("/data/cnpjs").join(RESULT_FILE_NAME));
    }

    #[test]
    fn bare_filename_maps_to_current_directory() {
        let out = output_path_for(Path::new("input.xlsx"));
        assert_eq!(out, Path::new("").join(RESULT_FILE_NAME));
    }
}
