//! I/O layer: the CNPJ input sheet reader, the ReceitaWS registry
//! client, and the result workbook writer.
pub mod xlsx;
pub use xlsx::{CNPJ_COLUMN, CnpjSheet, INPUT_SHEET, SheetError};

pub mod receitaws;
pub use receitaws::{DEFAULT_BASE_URL, RegistryClient, RegistryError};

pub mod writers;
