use std::path::Path;
use std::sync::Arc;

use super::{DeserializationError, ProbabilityModel, TreeEnsembleModel};

/// Artifact location used when the settings file does not override it.
pub const DEFAULT_ARTIFACT_PATH: &str = "credit_classifier.json";

/// Load and validate the classifier artifact at `path`.
///
/// The returned handle is shared read-only for the rest of the session.
pub fn load(path: &Path) -> Result<Arc<dyn ProbabilityModel>, DeserializationError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DeserializationError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            DeserializationError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let model = load_from_slice(&bytes, path)?;
    tracing::info!(
        path = %path.display(),
        features = model.feature_names.len(),
        trees = model.trees.len(),
        "Loaded model artifact"
    );
    Ok(Arc::new(model))
}

/// Decode an artifact already read into memory; `origin` is used in errors.
pub fn load_from_slice(
    bytes: &[u8],
    origin: &Path,
) -> Result<TreeEnsembleModel, DeserializationError> {
    let model: TreeEnsembleModel =
        serde_json::from_slice(bytes).map_err(|source| DeserializationError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
    model
        .validate()
        .map_err(|reason| DeserializationError::Invalid {
            path: origin.to_path_buf(),
            reason,
        })?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TINY_ARTIFACT: &str = r#"{
        "format_version": 1,
        "feature_names": ["NETMONTHLYINCOME", "CC_Flag"],
        "feature_types": ["float", "i"],
        "classes": ["P1", "P2", "P3", "P4"],
        "base_scores": [0.0, 0.0, 0.0, 0.0],
        "trees": [
            { "class_index": 0,
              "nodes": [
                { "feature": 0, "threshold": 25000.0, "left": 1, "right": 2 },
                { "leaf": -0.5 },
                { "leaf": 0.8 } ] }
        ]
    }"#;

    #[test]
    fn loads_artifact_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_ARTIFACT_PATH);
        std::fs::write(&path, TINY_ARTIFACT).unwrap();
        let model = load(&path).unwrap();
        assert_eq!(model.feature_names(), ["NETMONTHLYINCOME", "CC_Flag"]);
        assert_eq!(model.feature_type(1), Some(super::super::FeatureType::Indicator));
    }

    #[test]
    fn learning_rate_defaults_to_one() {
        let model = load_from_slice(TINY_ARTIFACT.as_bytes(), Path::new("mem")).unwrap();
        assert_eq!(model.learning_rate, 1.0);
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let dir = tempdir().unwrap();
        let err = match load(&dir.path().join("absent.json")) {
            Err(err) => err,
            Ok(_) => panic!("expected missing artifact to fail"),
        };
        assert!(matches!(err, DeserializationError::Missing { .. }));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = load_from_slice(b"\x80pickle\x94", Path::new("model.pkl")).unwrap_err();
        assert!(matches!(err, DeserializationError::Parse { .. }));
    }

    #[test]
    fn wrong_class_count_is_invalid() {
        let three_classes = TINY_ARTIFACT
            .replace(r#"["P1", "P2", "P3", "P4"]"#, r#"["P1", "P2", "P3"]"#)
            .replace("[0.0, 0.0, 0.0, 0.0]", "[0.0, 0.0, 0.0]");
        let err = load_from_slice(three_classes.as_bytes(), Path::new("mem")).unwrap_err();
        match err {
            DeserializationError::Invalid { reason, .. } => {
                assert!(reason.contains("exactly 4 classes"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn leaf_beyond_f32_range_is_invalid() {
        let overflowing = TINY_ARTIFACT.replace(r#"{ "leaf": 0.8 }"#, r#"{ "leaf": 1e39 }"#);
        let err = load_from_slice(overflowing.as_bytes(), Path::new("mem")).unwrap_err();
        match err {
            DeserializationError::Invalid { reason, .. } => {
                assert!(reason.contains("non-finite leaf"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
