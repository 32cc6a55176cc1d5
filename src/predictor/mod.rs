//! Runs one prediction for a submitted form.
//!
//! The [`Predictor`] owns a shared handle to the loaded model. Each submit
//! checks the record against the schema, calls the model with a batch of one
//! and turns the probability vector into a [`PredictionReport`].

mod categories;
mod report;

pub use categories::{RISK_CATEGORIES, RiskCategory};
pub use report::{CategoryProbability, PredictionReport, SubmittedValue, format_percent};

use std::sync::Arc;

use crate::form::{FeatureForm, InputRecord};
use crate::model::{PredictionError, ProbabilityModel, ProbabilityVector};

/// Binds the form and results views to a loaded model.
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn ProbabilityModel>,
}

impl Predictor {
    /// Predictor over an already loaded model.
    pub fn new(model: Arc<dyn ProbabilityModel>) -> Self {
        Self { model }
    }

    /// Build a fresh form with one control per model feature.
    pub fn build_form(&self) -> FeatureForm {
        FeatureForm::for_model(self.model.as_ref())
    }

    /// Probability vector for a single record.
    pub fn predict(&self, record: &InputRecord) -> Result<ProbabilityVector, PredictionError> {
        self.check_keys(record)?;
        let rows = self
            .model
            .predict_probabilities(std::slice::from_ref(record))?;
        let actual = rows.len();
        match <[ProbabilityVector; 1]>::try_from(rows) {
            Ok([probabilities]) => Ok(probabilities),
            Err(_) => Err(PredictionError::RowCount {
                expected: 1,
                actual,
            }),
        }
    }

    /// Submit the form's current values and build the results report.
    pub fn submit(&self, form: &FeatureForm) -> Result<PredictionReport, PredictionError> {
        let record = form.assemble();
        let probabilities = self.predict(&record).inspect_err(|err| {
            tracing::warn!("Prediction rejected: {err}");
        })?;
        tracing::debug!(?probabilities, "Prediction completed");
        Ok(PredictionReport::new(probabilities, &record))
    }

    fn check_keys(&self, record: &InputRecord) -> Result<(), PredictionError> {
        let schema = self.model.feature_names();
        if let Some(missing) = schema.iter().find(|feature| !record.contains(feature)) {
            return Err(PredictionError::MissingFeature {
                feature: missing.clone(),
            });
        }
        if let Some((unexpected, _)) = record
            .iter()
            .find(|(feature, _)| !schema.iter().any(|name| name == *feature))
        {
            return Err(PredictionError::UnexpectedFeature {
                feature: unexpected.to_string(),
            });
        }
        if record.len() != schema.len() {
            return Err(PredictionError::FeatureCount {
                expected: schema.len(),
                actual: record.len(),
            });
        }
        Ok(())
    }
}
