//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, spreadsheet, and registry errors, and provides
//! semantic variants for argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] crate::io::SheetError),

    #[error("Registry error: {0}")]
    Registry(#[from] crate::io::RegistryError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
