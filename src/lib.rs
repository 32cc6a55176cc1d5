//! Library exports for the credit approval predictor and its tools.
/// Application directory resolution.
pub mod app_dirs;
/// egui front end.
pub mod egui_app;
/// Schema-driven applicant form and input records.
pub mod form;
/// Tracing subscriber setup.
pub mod logging;
/// Classifier artifact loading and inference.
pub mod model;
/// Prediction requests and result reports.
pub mod predictor;
/// TOML settings.
pub mod settings;
