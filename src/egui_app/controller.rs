use crate::egui_app::state::{ResultsState, StatusTone, UiState};
use crate::form::FeatureForm;
use crate::predictor::Predictor;
use crate::settings::AppSettings;

/// Holds the form and last result, and bridges the predictor to the egui UI.
pub struct AppController {
    pub ui: UiState,
    predictor: Predictor,
    form: FeatureForm,
}

impl AppController {
    /// Controller with a fresh form built from the predictor's schema.
    pub fn new(predictor: Predictor) -> Self {
        let form = predictor.build_form();
        Self {
            ui: UiState::default(),
            predictor,
            form,
        }
    }

    /// Apply persisted layout preferences.
    pub fn apply_settings(&mut self, settings: &AppSettings) {
        self.ui.sidebar_width = settings.ui.sidebar_width;
    }

    pub fn form(&self) -> &FeatureForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FeatureForm {
        &mut self.form
    }

    /// Run the model on the current form values.
    ///
    /// A rejected submission clears any earlier result so stale numbers are
    /// never shown next to the new inputs.
    pub fn submit(&mut self) {
        match self.predictor.submit(&self.form) {
            Ok(report) => {
                let summary = report
                    .most_likely()
                    .map(|top| format!("Most likely: {} at {}", top.category.label(), top.percent))
                    .unwrap_or_else(|| "Prediction complete".to_string());
                self.set_status(summary, StatusTone::Info);
                self.ui.results = ResultsState::Ready(report);
            }
            Err(err) => {
                let message = format!("Prediction failed: {err}");
                self.set_status(message.clone(), StatusTone::Error);
                self.ui.results = ResultsState::Failed(message);
            }
        }
    }

    /// Restore every control to its default and clear the results area.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.ui.results = ResultsState::Empty;
        self.set_status("Inputs reset", StatusTone::Idle);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
