use super::models::CnpjGui;
use eframe::egui::{Align, Color32, Frame, Layout, RichText, Ui};

const COMPONENT_HEIGHT: f32 = 80.0;
const COMPONENT_WIDTH: f32 = 120.0;

pub struct FileSelectionComponent;

impl FileSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut CnpjGui) {
        ui.heading("File Selection");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Input Workbook:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Browse").clicked() {
                        app.select_input_file();
                    }
                });
            });

            if let Some(path) = &app.input_path {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }

            ui.add_space(5.0);

            ui.label(
                RichText::new(
                    "Expects a worksheet named 'Input_CNPJ' with a 'CNPJ' column. \
                     The result is written next to the input as 'resultado_cnpjs_receita.xlsx'.",
                )
                .color(Color32::from_gray(120))
                .size(11.0),
            );
        });
    }
}

pub struct LookupOptionsComponent;

impl LookupOptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut CnpjGui) {
        ui.heading("Lookup Options");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Days window:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let response = ui.text_edit_singleline(&mut app.days_text);
                    if let Some(text) = response.changed().then(|| app.days_text.clone()) {
                        app.days_text = text.chars().filter(|c| c.is_ascii_digit()).collect();
                    }
                });
            });

            ui.label(
                RichText::new("Status-change window, in days, requested from the registry.")
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Timeout (s):");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let response = ui.text_edit_singleline(&mut app.timeout_text);
                    if let Some(text) = response.changed().then(|| app.timeout_text.clone()) {
                        app.timeout_text = text.chars().filter(|c| c.is_ascii_digit()).collect();
                    }
                });
            });

            ui.label(
                RichText::new("Per-request timeout. Each CNPJ is queried once, no retries.")
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("API token:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if app.token_configured() {
                        ui.label(
                            RichText::new("configured").color(Color32::from_rgb(100, 200, 100)),
                        );
                    } else {
                        ui.label(RichText::new("not set").color(Color32::from_rgb(255, 165, 0)));
                    }
                });
            });

            ui.label(
                RichText::new(
                    "Read from the RECEITAWS_API_TOKEN environment variable. \
                     Without it, requests run against the public quota.",
                )
                .color(Color32::from_gray(120))
                .size(11.0),
            );
        });
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut CnpjGui) {
        // Update system statistics
        app.update_system_stats();

        ui.horizontal(|ui| {
            // Left side - Timing and system information
            let status_color = if app.is_processing {
                Color32::from_rgb(255, 165, 0) // Orange for processing
            } else {
                Color32::from_rgb(100, 200, 100) // Green for ready
            };

            let timing_text = if app.is_processing {
                if let Some(start_time) = app.processing_start_time {
                    let elapsed = start_time.elapsed();
                    format!("Looking up: {:.2?}", elapsed)
                } else {
                    "Looking up...".to_string()
                }
            } else if let Some(duration) = app.last_processing_duration {
                format!("Last run: {:.2?}", duration)
            } else {
                "Ready".to_string()
            };

            ui.label(RichText::new(timing_text).color(status_color).size(14.0));

            ui.separator();

            // CPU usage
            let cpu_color = if app.cpu_usage > 80.0 {
                Color32::from_rgb(255, 100, 100)
            } else if app.cpu_usage > 50.0 {
                Color32::from_rgb(255, 165, 0)
            } else {
                Color32::from_rgb(100, 200, 100)
            };

            ui.label(
                RichText::new(format!("CPU: {:.1}%", app.cpu_usage))
                    .color(cpu_color)
                    .size(12.0),
            );

            ui.separator();

            // Memory usage
            let memory_percent = if app.total_memory_mb > 0.0 {
                (app.memory_usage_mb / app.total_memory_mb) * 100.0
            } else {
                0.0
            };

            let memory_color = if memory_percent > 80.0 {
                Color32::from_rgb(255, 100, 100)
            } else if memory_percent > 60.0 {
                Color32::from_rgb(255, 165, 0)
            } else {
                Color32::from_rgb(100, 200, 100)
            };

            ui.label(
                RichText::new(format!(
                    "RAM: {:.1} GB / {:.1} GB ({:.1}%)",
                    app.memory_usage_mb / 1024.0,
                    app.total_memory_mb / 1024.0,
                    memory_percent
                ))
                .color(memory_color)
                .size(12.0),
            );

            // Right side - Buttons
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("To CLI").clicked() {
                    let cli_command = app.generate_cli_command();

                    // Create a special CLI command entry (not a regular log)
                    let cli_entry = crate::gui::logging::LogEntry::new(
                        tracing::Level::INFO,
                        format!("CLI Command: {}", cli_command),
                        "cli".to_string(),
                    );

                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.push(cli_entry);
                    }
                }

                if ui.button("Save Preset").clicked() {
                    if let Err(e) = app.save_preset() {
                        tracing::error!("Failed to save preset: {}", e);
                    }
                }

                if ui.button("Load Preset").clicked() {
                    if let Err(e) = app.load_preset() {
                        tracing::error!("Failed to load preset: {}", e);
                    }
                }

                if ui.button("Save Logs").clicked() {
                    if let Err(e) = app.save_logs_to_file() {
                        tracing::error!("Failed to save logs: {}", e);
                    }
                }

                if ui.button("Clear").clicked() {
                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.clear();
                    }
                }

                if ui.button("Reset").clicked() {
                    *app = CnpjGui::default();
                }
            });
        });
    }
}
