#![doc = r#"
CNPJFETCH — batch CNPJ lookup against the ReceitaWS registry.

This crate reads CNPJ identifiers from an `.xlsx` workbook, queries the
public registry once per identifier, and writes an enriched workbook next
to the input. It powers both the CNPJFETCH CLI and GUI, and can be
embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on
top of a working MVP used by the CLI/GUI and is robust, but may evolve as
the crate stabilizes. Breaking changes can occur.

Input contract
--------------
The input workbook must carry a worksheet named `Input_CNPJ` with a column
headed `CNPJ`. Cells may contain formatting characters; everything that is
not a digit is stripped, values that do not come out at 14 digits are
dropped, and duplicates collapse to their first occurrence.

Quick start: run a whole file
-----------------------------
```rust,no_run
use std::path::Path;
use cnpjfetch::{LookupParams, lookup_file_to_path};

fn main() -> cnpjfetch::Result<()> {
    let params = LookupParams {
        days: 30,
        timeout_secs: 10,
        token: None, // falls back to RECEITAWS_API_TOKEN
    };

    let report = lookup_file_to_path(
        Path::new("/data/empresas.xlsx"),
        &params,
        |position, total, cnpj| println!("{position}/{total} {cnpj}"),
    )?;

    println!(
        "queried={} errors={} output={:?}",
        report.total, report.failed, report.output
    );
    Ok(())
}
```

Drive the loop yourself
-----------------------
```rust,no_run
use std::path::Path;
use cnpjfetch::{CnpjSheet, LookupParams, RegistryClient, lookup_all};

fn main() -> cnpjfetch::Result<()> {
    let sheet = CnpjSheet::open(Path::new("/data/empresas.xlsx"))?;
    let client = RegistryClient::new(&LookupParams::default())?;

    let records = lookup_all(&client, sheet.cnpjs(), |_, _, _| {});
    for record in &records {
        if let Some(error) = record.error() {
            eprintln!("failed: {error}");
        }
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `cnpjfetch::Result<T>`; match on
`cnpjfetch::Error` to handle specific cases, e.g. spreadsheet or registry
errors. Per-identifier failures never surface as `Err`: they fold into
error records so the run always covers every identifier.

```rust,no_run
use std::path::Path;
use cnpjfetch::{Error, LookupParams, lookup_file_to_path};

fn main() {
    match lookup_file_to_path(Path::new("/bad/input.xlsx"), &LookupParams::default(), |_, _, _| {}) {
        Ok(report) => println!("saved {:?}", report.output),
        Err(Error::Sheet(e)) => eprintln!("Spreadsheet error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Feature flags
-------------
- `gui`: builds the GUI crate module.
- `full`: enables a complete feature set for typical end-to-end workflows.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`Cnpj`, `CompanyRecord`, `LookupRecord`).
- [`io`] — spreadsheet reader/writer and the registry client.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use core::params::{LookupParams, TOKEN_ENV};
pub use error::{Error, Result};
pub use types::{Cnpj, CompanyRecord, LookupRecord, RESULT_COLUMNS};

// Readers and the registry client
pub use io::receitaws::{DEFAULT_BASE_URL, RegistryClient, RegistryError};
pub use io::xlsx::{CNPJ_COLUMN, CnpjSheet, INPUT_SHEET, SheetError};

// Writer helpers
pub use io::writers::xlsx::{RESULT_FILE_NAME, write_results};

// High-level API re-exports
pub use api::{BatchReport, lookup_all, lookup_file_to_path, output_path_for};
