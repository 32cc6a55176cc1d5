//! egui renderer for the predictor window.

mod form_panel;
mod results_panel;
mod status_bar;
pub mod style;

use eframe::egui::{self, Vec2};

use crate::egui_app::controller::AppController;
use crate::predictor::Predictor;
use crate::settings::AppSettings;

/// Title shown on the window and above the results.
pub const APP_TITLE: &str = "Credit Approval Prediction";
/// Smallest window size that still fits the form and the four breakdown cells.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(880.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AppController,
    visuals_set: bool,
}

impl EguiApp {
    /// Window state for a loaded predictor and the persisted layout.
    pub fn new(predictor: Predictor, settings: &AppSettings) -> Self {
        let mut controller = AppController::new(predictor);
        controller.apply_settings(settings);
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        status_bar::render(ctx, &self.controller.ui.status);
        egui::SidePanel::left("input_panel")
            .resizable(true)
            .default_width(self.controller.ui.sidebar_width)
            .show(ctx, |ui| form_panel::render(ui, &mut self.controller));
        egui::CentralPanel::default().show(ctx, |ui| {
            results_panel::render(ui, &self.controller.ui.results);
        });
    }
}
