//! Writers for the enriched result workbook.
pub mod xlsx;
pub use xlsx::{RESULT_FILE_NAME, write_results};
