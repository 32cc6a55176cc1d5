mod support;

use credit_approval::{
    app_dirs::APP_DIR_NAME,
    model::DEFAULT_ARTIFACT_PATH,
    settings::{self, CONFIG_FILE_NAME},
};
use support::config_env::ConfigHomeGuard;

#[test]
fn missing_config_yields_defaults_in_working_dir() {
    let temp = tempfile::tempdir().unwrap();
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());
    let settings = settings::load_or_default().unwrap();
    assert_eq!(settings, settings::AppSettings::default());
    let working_dir = temp.path().join("work");
    assert_eq!(
        settings.artifact_path(&working_dir),
        working_dir.join(DEFAULT_ARTIFACT_PATH)
    );
    assert!(temp.path().join(APP_DIR_NAME).is_dir());
}

#[test]
fn config_file_overrides_artifact_and_clamps_layout() {
    let temp = tempfile::tempdir().unwrap();
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());
    let config = settings::config_path().unwrap();
    assert_eq!(config, temp.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    std::fs::write(
        &config,
        "[model]\nartifact_path = \"models/custom.json\"\n\n[ui]\nsidebar_width = 10000.0\n",
    )
    .unwrap();

    let settings = settings::load_or_default().unwrap();
    assert_eq!(settings.ui.sidebar_width, 640.0);
    let working_dir = temp.path().join("work");
    assert_eq!(
        settings.artifact_path(&working_dir),
        working_dir.join("models").join("custom.json")
    );
}

#[test]
fn broken_config_reports_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());
    let config = settings::config_path().unwrap();
    std::fs::write(&config, "[ui\nsidebar_width = ").unwrap();
    assert!(matches!(
        settings::load_or_default(),
        Err(settings::ConfigError::ParseToml { .. })
    ));
}
