pub mod config_env;

use std::path::PathBuf;

/// Path to the small four-feature artifact checked in for integration tests.
pub fn fixture_artifact() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("credit_classifier.json")
}
