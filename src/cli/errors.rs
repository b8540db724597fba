use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file does not exist: {path}")]
    InputNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] cnpjfetch::SheetError),

    #[error("Registry error: {0}")]
    Registry(#[from] cnpjfetch::RegistryError),
}
