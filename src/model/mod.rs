//! Classifier handle used by the predictor.
//!
//! The production model is a gradient-boosted tree ensemble deserialized from a
//! JSON artifact. Everything downstream only sees [`ProbabilityModel`], so the
//! form and results views can be driven by [`FixedProbabilities`] in tests.

mod artifact;
mod errors;
mod fixed;
mod loader;

pub use artifact::{ARTIFACT_FORMAT_VERSION, TreeEnsembleModel, Tree, TreeNode, softmax};
pub use errors::{DeserializationError, PredictionError};
pub use fixed::FixedProbabilities;
pub use loader::{DEFAULT_ARTIFACT_PATH, load, load_from_slice};

use serde::{Deserialize, Serialize};

use crate::form::InputRecord;

/// Number of ordered classes every model must produce.
pub const CLASS_COUNT: usize = 4;

/// Per-class probabilities for one input row, in class order.
pub type ProbabilityVector = [f64; CLASS_COUNT];

/// Value type a model declares for one of its input features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    /// Any real number.
    #[serde(rename = "float")]
    Float,
    /// Whole numbers only.
    #[serde(rename = "int")]
    Integer,
    /// Binary indicator taking 0 or 1.
    #[serde(rename = "i")]
    Indicator,
}

/// Capability shared by the deserialized artifact and test doubles.
pub trait ProbabilityModel: Send + Sync {
    /// Ordered feature identifiers the model expects in every row.
    fn feature_names(&self) -> &[String];

    /// Declared value type of the feature at `index`, when the model records one.
    fn feature_type(&self, _index: usize) -> Option<FeatureType> {
        None
    }

    /// Predict one probability vector per input row.
    fn predict_probabilities(
        &self,
        rows: &[InputRecord],
    ) -> Result<Vec<ProbabilityVector>, PredictionError>;
}
