use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cnpjfetch", version, about = "CNPJFETCH CLI")]
pub struct CliArgs {
    /// Input workbook containing the Input_CNPJ worksheet
    #[arg(short, long)]
    pub input: PathBuf,

    /// Status-change window, in days, requested from the registry
    #[arg(long, default_value_t = 30)]
    pub days: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Registry API token; falls back to RECEITAWS_API_TOKEN
    #[arg(long)]
    pub token: Option<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
