use tracing::{info, warn};

use cnpjfetch::api::{lookup_all, output_path_for};
use cnpjfetch::io::writers::xlsx::write_results;
use cnpjfetch::{CnpjSheet, LookupParams, RegistryClient};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if !args.input.exists() {
        return Err(AppError::InputNotFound {
            path: args.input.display().to_string(),
        }
        .into());
    }

    let params = LookupParams {
        days: args.days,
        timeout_secs: args.timeout,
        token: args.token,
    };

    let sheet = CnpjSheet::open(&args.input).map_err(AppError::from)?;
    info!(
        "Loaded {} unique CNPJ(s) from {:?}",
        sheet.len(),
        args.input
    );

    let client = RegistryClient::new(&params).map_err(AppError::from)?;
    if !client.has_token() {
        warn!("No registry token configured; running against the public quota");
    }

    let records = lookup_all(&client, sheet.cnpjs(), |position, total, cnpj| {
        info!("Looking up {} ({}/{})", cnpj, position, total);
    });

    let failed = records.iter().filter(|r| r.is_failed()).count();
    for record in records.iter().filter(|r| r.is_failed()) {
        if let Some(error) = record.error() {
            warn!("Lookup failed: {}", error);
        }
    }

    let output = output_path_for(&args.input);
    write_results(&output, &records).map_err(AppError::from)?;

    info!("Lookup complete!");
    info!("Queried: {}", records.len());
    info!("Errors: {}", failed);
    info!("Saved: {:?}", output);

    Ok(())
}
