//! Command Line Interface (CLI) layer for CNPJFETCH.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a headless lookup run. It
//! wires user-provided options to the underlying library functionality
//! exposed via `cnpjfetch::api`.
//!
//! If you are embedding CNPJFETCH into another application, prefer using
//! the high-level `cnpjfetch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
