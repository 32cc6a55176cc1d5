use std::sync::atomic::{AtomicUsize, Ordering};

use super::{PredictionError, ProbabilityModel, ProbabilityVector};
use crate::form::InputRecord;

/// Stand-in model that answers every row with the same probability vector.
///
/// It accepts any record, so key checking is left to the predictor. The
/// number of `predict_probabilities` calls is recorded for assertions.
#[derive(Debug)]
pub struct FixedProbabilities {
    feature_names: Vec<String>,
    probabilities: ProbabilityVector,
    calls: AtomicUsize,
}

impl FixedProbabilities {
    /// Model over `feature_names` that always answers `probabilities`.
    pub fn new<I, S>(feature_names: I, probabilities: ProbabilityVector) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            feature_names: feature_names.into_iter().map(Into::into).collect(),
            probabilities,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times the model has been asked for predictions.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProbabilityModel for FixedProbabilities {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_probabilities(
        &self,
        rows: &[InputRecord],
    ) -> Result<Vec<ProbabilityVector>, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![self.probabilities; rows.len()])
    }
}
