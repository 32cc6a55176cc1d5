//! Plain UI state consumed by the egui renderer.

use egui::Color32;

use crate::egui_app::ui::style;
use crate::predictor::PredictionReport;

/// Number of status messages kept in the rolling log.
const STATUS_LOG_LIMIT: usize = 50;

/// Severity of the latest status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Error,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    pub tone: StatusTone,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before the first prediction.
    pub fn idle() -> Self {
        let (label, color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Fill in the applicant details and run a prediction".into(),
            badge_label: label.into(),
            badge_color: color,
            tone: StatusTone::Idle,
            log: Vec::new(),
        }
    }

    /// Replace the current message and append it to the log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.text = text.into();
        self.badge_label = label.into();
        self.badge_color = color;
        self.tone = tone;
        self.log.push(self.text.clone());
        if self.log.len() > STATUS_LOG_LIMIT {
            let excess = self.log.len() - STATUS_LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

/// What the results area currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultsState {
    /// Nothing submitted yet, or the form was reset.
    #[default]
    Empty,
    /// Last submission succeeded.
    Ready(PredictionReport),
    /// Last submission was rejected; no partial result is kept.
    Failed(String),
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status: StatusBarState,
    pub results: ResultsState,
    /// Initial width of the input side panel.
    pub sidebar_width: f32,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            results: ResultsState::Empty,
            sidebar_width: crate::settings::UiSettings::default().sidebar_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_log_is_bounded() {
        let mut status = StatusBarState::idle();
        for idx in 0..(STATUS_LOG_LIMIT + 5) {
            status.set(format!("message {idx}"), StatusTone::Info);
        }
        assert_eq!(status.log.len(), STATUS_LOG_LIMIT);
        assert_eq!(status.log.first().map(String::as_str), Some("message 5"));
        assert_eq!(status.badge_label, "Done");
    }
}
