use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_ARTIFACT_PATH;

pub(super) const DEFAULT_SIDEBAR_WIDTH: f32 = 320.0;
const MIN_SIDEBAR_WIDTH: f32 = 200.0;
const MAX_SIDEBAR_WIDTH: f32 = 640.0;

fn default_sidebar_width() -> f32 {
    DEFAULT_SIDEBAR_WIDTH
}

/// Settings read from `config.toml`.
///
/// Config keys (TOML): `model.artifact_path`, `ui.sidebar_width`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Clamp values into their supported ranges.
    pub fn normalized(mut self) -> Self {
        self.ui.sidebar_width = if self.ui.sidebar_width.is_finite() {
            self.ui.sidebar_width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
        } else {
            DEFAULT_SIDEBAR_WIDTH
        };
        self
    }

    /// Artifact location, relative paths resolved against `working_dir`.
    pub fn artifact_path(&self, working_dir: &Path) -> PathBuf {
        let configured = self
            .model
            .artifact_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH));
        if configured.is_absolute() {
            configured
        } else {
            working_dir.join(configured)
        }
    }
}

/// Where the classifier artifact is read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Overrides the default `credit_classifier.json` in the working directory.
    #[serde(default)]
    pub artifact_path: Option<PathBuf>,
}

/// Window layout preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Initial width of the input side panel in points.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
        }
    }
}
