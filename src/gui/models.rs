use crate::core::params::{LookupParams, TOKEN_ENV};
use crate::gui::logging::{GuiLogLayer, LogEntry};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use sysinfo;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

/// Lookup progress snapshot shared with the worker thread.
#[derive(Copy, Clone, Default, Debug)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Keep eframe/winit chatter out of the in-app panel.
        let filter = EnvFilter::new("trace")
            .add_directive("eframe=info".parse().unwrap())
            .add_directive("winit=info".parse().unwrap());

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub struct CnpjGui {
    // Input parameters
    pub input_path: Option<PathBuf>,

    // Lookup parameters, kept as text until a run starts
    pub days_text: String,
    pub timeout_text: String,

    // Options
    pub min_log_level: Level,

    // Status
    pub is_processing: bool,
    pub processing_start_time: Option<Instant>,
    pub last_processing_duration: Option<Duration>,

    // Progress snapshot updated by the worker thread
    pub progress: Arc<Mutex<Progress>>,

    // Log messages for the central panel - thread-safe
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,

    // Receiver for completion notification from the background lookup
    pub completion_receiver: Option<std::sync::mpsc::Receiver<String>>,

    // System monitoring
    pub cpu_usage: f32,
    pub memory_usage_mb: f64,
    pub total_memory_mb: f64,
    pub system_monitor: Option<sysinfo::System>,
    pub last_system_update: Option<Instant>,
}

impl Default for CnpjGui {
    fn default() -> Self {
        let defaults = LookupParams::default();
        Self {
            input_path: None,
            days_text: defaults.days.to_string(),
            timeout_text: defaults.timeout_secs.to_string(),
            min_log_level: Level::INFO,
            is_processing: false,
            processing_start_time: None,
            last_processing_duration: None,
            progress: Arc::new(Mutex::new(Progress::default())),
            log_messages: Arc::new(Mutex::new(Vec::new())),
            completion_receiver: None,
            cpu_usage: 0.0,
            memory_usage_mb: 0.0,
            total_memory_mb: 0.0,
            system_monitor: None,
            last_system_update: None,
        }
    }
}

impl CnpjGui {
    /// Whether a registry token is visible to a run started right now.
    pub fn token_configured(&self) -> bool {
        std::env::var(TOKEN_ENV)
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn save_logs_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        let logs = self
            .log_messages
            .lock()
            .map_err(|e| format!("Failed to lock logs: {}", e))?;

        if logs.is_empty() {
            return Err("No logs to save".into());
        }

        // Filter logs based on current filter level
        let filtered_logs: Vec<&LogEntry> = logs
            .iter()
            .filter(|entry| {
                if self.min_log_level == Level::TRACE {
                    true
                } else {
                    entry.level == self.min_log_level
                }
            })
            .collect();

        if filtered_logs.is_empty() {
            return Err("No logs match the current filter level".into());
        }

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("Log files", &["log"])
            .set_file_name("cnpjfetch.log")
            .save_file()
        {
            let mut log_content = String::new();
            log_content.push_str("=== CNPJFETCH Log File ===\n");
            log_content.push_str(&format!("Generated: {}\n", chrono::Utc::now().to_rfc3339()));
            log_content.push_str(&format!(
                "Filter Level: {}\n",
                match self.min_log_level {
                    Level::ERROR => "ERROR",
                    Level::WARN => "WARN",
                    Level::INFO => "INFO",
                    Level::DEBUG => "DEBUG",
                    Level::TRACE => "ALL",
                }
            ));
            log_content.push_str(&format!("Total Logs: {}\n", filtered_logs.len()));
            log_content.push_str("==========================\n\n");

            for entry in &filtered_logs {
                let level_str = match entry.level {
                    Level::ERROR => "ERROR",
                    Level::WARN => "WARN",
                    Level::INFO => "INFO",
                    Level::DEBUG => "DEBUG",
                    Level::TRACE => "TRACE",
                };

                log_content.push_str(&format!(
                    "[{}] {} {}: {}\n",
                    entry.timestamp, level_str, entry.target, entry.message
                ));
            }

            fs::write(&save_path, log_content)?;

            tracing::info!(
                "Filtered logs saved to: {:?} ({} entries)",
                save_path,
                filtered_logs.len()
            );

            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn save_preset(&self) -> Result<(), Box<dyn std::error::Error>> {
        #[derive(Serialize)]
        struct LookupPreset {
            days: String,
            timeout_secs: String,
            min_log_level: String,
        }

        let preset = LookupPreset {
            days: self.days_text.clone(),
            timeout_secs: self.timeout_text.clone(),
            min_log_level: format!("{:?}", self.min_log_level),
        };

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("CNPJFETCH Preset files", &["cnpjfetch"])
            .set_file_name("cnpjfetch_preset.cnpjfetch")
            .save_file()
        {
            let mut preset_content = String::new();
            preset_content.push_str("// ==========================================\n");
            preset_content.push_str("// CNPJFETCH Configuration Preset\n");
            preset_content.push_str("// ==========================================\n");
            preset_content.push_str("// Program: CNPJFETCH - CNPJ Registry Lookup Tool\n");
            preset_content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
            preset_content.push_str(&format!(
                "// Generated: {}\n",
                chrono::Utc::now().to_rfc3339()
            ));
            preset_content.push_str("// Note: Input path and API token are not included in presets\n");
            preset_content.push_str("// ==========================================\n\n");

            let json = serde_json::to_string_pretty(&preset)?;
            preset_content.push_str(&json);

            fs::write(&save_path, preset_content)?;

            tracing::info!("Preset saved to: {:?}", save_path);
            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn load_preset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(load_path) = rfd::FileDialog::new()
            .add_filter("CNPJFETCH Preset files", &["cnpjfetch"])
            .pick_file()
        {
            let content = fs::read_to_string(&load_path)?;

            // Extract JSON part by finding the first '{' character
            let json_start = content
                .find('{')
                .ok_or("Invalid preset file: no JSON content found")?;
            let json = &content[json_start..];

            #[derive(Deserialize)]
            struct LookupPreset {
                days: String,
                timeout_secs: String,
                min_log_level: String,
            }

            let preset: LookupPreset = serde_json::from_str(json)?;

            let min_log_level = match preset.min_log_level.as_str() {
                "ERROR" => Level::ERROR,
                "WARN" => Level::WARN,
                "INFO" => Level::INFO,
                "DEBUG" => Level::DEBUG,
                "TRACE" => Level::TRACE,
                _ => Level::INFO,
            };

            self.days_text = preset.days;
            self.timeout_text = preset.timeout_secs;
            self.min_log_level = min_log_level;

            tracing::info!("Preset loaded from: {:?}", load_path);
            Ok(())
        } else {
            Err("No preset file selected".into())
        }
    }

    pub fn generate_cli_command(&self) -> String {
        let mut cmd = String::from("cargo run --release --bin cnpjfetch --");

        if let Some(input_path) = &self.input_path {
            cmd.push_str(&format!(" --input {:?}", input_path));
        }

        cmd.push_str(&format!(" --days {}", self.days_text.trim()));
        cmd.push_str(&format!(" --timeout {}", self.timeout_text.trim()));

        // we always want to log
        cmd.push_str(" --log");

        cmd
    }

    /// Update system statistics (CPU and memory usage)
    pub fn update_system_stats(&mut self) {
        // Only update every 2 seconds to avoid excessive system calls
        let now = Instant::now();
        if let Some(last_update) = self.last_system_update {
            if now.duration_since(last_update).as_secs() < 2 {
                return;
            }
        }

        if self.system_monitor.is_none() {
            self.system_monitor = Some(sysinfo::System::new_all());
        }

        if let Some(ref mut sys) = self.system_monitor {
            sys.refresh_all();

            self.cpu_usage = sys.global_cpu_usage();

            self.memory_usage_mb = sys.used_memory() as f64 / 1024.0 / 1024.0;
            self.total_memory_mb = sys.total_memory() as f64 / 1024.0 / 1024.0;
        }

        self.last_system_update = Some(now);
    }
}
