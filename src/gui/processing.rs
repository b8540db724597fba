use super::logging::GuiLogLayer;
use super::models::{CnpjGui, Progress, init_gui_logging};
use crate::api::{lookup_all, output_path_for};
use crate::core::params::LookupParams;
use crate::io::receitaws::RegistryClient;
use crate::io::writers::xlsx::write_results;
use crate::io::xlsx::CnpjSheet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

/// GUI-specific errors
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("Select an input file first")]
    MissingInput,

    #[error("Invalid days value: {value}. Must be a positive integer")]
    InvalidDays { value: String },

    #[error("Invalid timeout value: {value}. Must be a positive integer")]
    InvalidTimeout { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] crate::io::xlsx::SheetError),

    #[error("Registry error: {0}")]
    Registry(#[from] crate::io::receitaws::RegistryError),
}

impl CnpjGui {
    pub fn select_input_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel workbooks", &["xlsx"])
            .pick_file()
        {
            self.input_path = Some(path);
            if let Ok(mut progress) = self.progress.lock() {
                *progress = Progress::default();
            }
            info!(
                "Selected input file: {:?}",
                self.input_path.as_ref().unwrap()
            );
        }
    }

    /// Parse the editable text fields into typed lookup parameters.
    /// The token is never held in GUI state; runs pick it up from the
    /// environment.
    pub fn parsed_params(&self) -> Result<LookupParams, GuiError> {
        let days = self
            .days_text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| GuiError::InvalidDays {
                value: self.days_text.clone(),
            })?;

        let timeout_secs = self
            .timeout_text
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|t| *t > 0)
            .ok_or_else(|| GuiError::InvalidTimeout {
                value: self.timeout_text.clone(),
            })?;

        Ok(LookupParams {
            days,
            timeout_secs,
            token: None,
        })
    }

    pub fn run_lookup(&mut self) {
        if self.is_processing {
            debug!("Lookup already in progress, ignoring request");
            return;
        }

        // Always initialize logging so error messages appear in the GUI
        init_gui_logging();

        let input = match self.input_path.clone() {
            Some(path) => path,
            None => {
                error!("{}", GuiError::MissingInput);
                return;
            }
        };

        let params = match self.parsed_params() {
            Ok(params) => params,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        self.is_processing = true;
        self.processing_start_time = Some(Instant::now());
        self.last_processing_duration = None;
        if let Ok(mut progress) = self.progress.lock() {
            *progress = Progress::default();
        }
        info!("Lookup started");

        debug!("Background lookup parameters:");
        debug!("  Input: {:?}", input);
        debug!("  Days window: {}", params.days);
        debug!("  Timeout: {}s", params.timeout_secs);

        let progress = self.progress.clone();
        let log_messages = self.log_messages.clone();
        let (tx, rx) = std::sync::mpsc::channel();

        // Spawn background thread for the lookup loop
        std::thread::spawn(move || {
            // Set up a tracing subscriber for this thread so messages
            // appear in the GUI. Ignore error if already set.
            let subscriber = Registry::default().with(GuiLogLayer::new());
            let _ = tracing::subscriber::set_global_default(subscriber);

            let separator = crate::gui::logging::LogEntry::new(
                tracing::Level::INFO,
                "--- Lookup Started ---".to_string(),
                "gui".to_string(),
            );
            if let Ok(mut logs) = log_messages.lock() {
                logs.push(separator);
            }

            let result = run_lookup_inner(&input, &params, &progress);
            let msg = match result {
                Ok(m) => m,
                Err(e) => {
                    error!("Lookup cancelled: {}", e);
                    format!("Error: {}", e)
                }
            };
            let _ = tx.send(msg);
        });

        // Store the receiver for completion notification
        self.completion_receiver = Some(rx);
        info!("Lookup started in background thread");
    }
}

// The actual lookup pipeline, run on the background thread. Strictly
// sequential: one request at a time, in input order.
fn run_lookup_inner(
    input: &Path,
    params: &LookupParams,
    progress: &Arc<Mutex<Progress>>,
) -> Result<String, String> {
    let sheet = CnpjSheet::open(input).map_err(|e| e.to_string())?;
    info!("Loaded {} unique CNPJ(s) from {:?}", sheet.len(), input);

    if let Ok(mut p) = progress.lock() {
        p.total = sheet.len();
        p.done = 0;
    }

    let client = RegistryClient::new(params).map_err(|e| e.to_string())?;
    if !client.has_token() {
        warn!("No registry token configured; running against the public quota");
    }

    let records = lookup_all(&client, sheet.cnpjs(), |position, total, cnpj| {
        info!("Looking up {} ({}/{})", cnpj, position, total);
        if let Ok(mut p) = progress.lock() {
            p.done = position - 1;
            p.total = total;
        }
    });

    let failed = records.iter().filter(|r| r.is_failed()).count();
    if failed > 0 {
        warn!("{} lookup(s) came back with an error record", failed);
    }

    let output = output_path_for(input);
    write_results(&output, &records).map_err(|e| e.to_string())?;

    if let Ok(mut p) = progress.lock() {
        p.done = p.total;
    }

    info!("Queried: {}", records.len());
    info!("Errors: {}", failed);
    Ok(format!("Lookup finished! Saved as: {:?}", output))
}
