use std::path::PathBuf;

use thiserror::Error;

/// The model artifact could not be turned into a usable classifier.
#[derive(Debug, Error)]
pub enum DeserializationError {
    /// No file exists at the artifact path.
    #[error("Model artifact not found at {path}")]
    Missing {
        /// Artifact path that was probed.
        path: PathBuf,
    },
    /// The artifact exists but could not be read.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        /// Artifact path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The artifact is not valid JSON of the expected shape.
    #[error("Invalid model artifact {path}: {source}")]
    Parse {
        /// Artifact path.
        path: PathBuf,
        /// JSON decode error.
        source: serde_json::Error,
    },
    /// The artifact parsed but violates a structural invariant.
    #[error("Malformed model artifact {path}: {reason}")]
    Invalid {
        /// Artifact path.
        path: PathBuf,
        /// Which invariant failed.
        reason: String,
    },
}

/// A prediction request did not match what the model expects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// A schema feature has no value in the record.
    #[error("Missing value for feature `{feature}`")]
    MissingFeature {
        /// Feature identifier.
        feature: String,
    },
    /// The record carries a key the model does not know.
    #[error("Unexpected feature `{feature}`")]
    UnexpectedFeature {
        /// Feature identifier.
        feature: String,
    },
    /// The record has the wrong number of values.
    #[error("Expected {expected} feature values but got {actual}")]
    FeatureCount {
        /// Schema length.
        expected: usize,
        /// Record length.
        actual: usize,
    },
    /// A value cannot be coerced to the declared feature type.
    #[error("Feature `{feature}` expects {expected} but got {value}")]
    ValueType {
        /// Feature identifier.
        feature: String,
        /// Human readable expected type.
        expected: &'static str,
        /// Offending value as displayed.
        value: String,
    },
    /// NaN or infinity reached the model.
    #[error("Feature `{feature}` must be a finite number")]
    NonFiniteValue {
        /// Feature identifier.
        feature: String,
    },
    /// The model returned a different number of rows than it was given.
    #[error("Model returned {actual} probability rows for {expected} inputs")]
    RowCount {
        /// Number of input rows.
        expected: usize,
        /// Number of output rows.
        actual: usize,
    },
}
