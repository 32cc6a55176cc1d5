#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based credit approval predictor.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use credit_approval::egui_app::ui::{APP_TITLE, EguiApp, MIN_VIEWPORT_SIZE};
use credit_approval::predictor::Predictor;
use credit_approval::settings::{self, AppSettings};
use credit_approval::{logging, model};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = settings::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {err}");
        AppSettings::default()
    });
    let artifact_path = settings.artifact_path(&std::env::current_dir()?);
    // The model is loaded once, before any form exists.
    let loaded = model::load(&artifact_path).inspect_err(|err| {
        tracing::error!("Model unavailable: {err}");
    });

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([1180.0, 780.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Credit Approval Predictor",
        native_options,
        Box::new(move |_cc| {
            let app: Box<dyn eframe::App> = match loaded {
                Ok(model) => Box::new(EguiApp::new(Predictor::new(model), &settings)),
                Err(err) => Box::new(LaunchError {
                    message: err.to_string(),
                }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Blocking screen shown when the model artifact cannot be loaded.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading("Failed to load model");
                ui.label(&self.message);
                ui.add_space(8.0);
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}
