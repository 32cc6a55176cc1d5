use crate::form::{InputRecord, display_label};
use crate::model::ProbabilityVector;

use super::categories::{RISK_CATEGORIES, RiskCategory};

/// Format a probability as a percentage with two decimals (`0.1` -> `10.00%`).
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// One category with its probability, used by the chart and the breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProbability {
    pub category: RiskCategory,
    pub probability: f64,
    /// Pre-formatted percentage text.
    pub percent: String,
}

/// Submitted value listed under its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedValue {
    /// Feature identifier from the record.
    pub feature: String,
    /// Display label for the feature.
    pub label: String,
    /// Value as submitted, at full precision.
    pub value: String,
}

/// Everything the results area shows for one successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub probabilities: ProbabilityVector,
    pub categories: Vec<CategoryProbability>,
    pub submitted: Vec<SubmittedValue>,
}

impl PredictionReport {
    pub fn new(probabilities: ProbabilityVector, record: &InputRecord) -> Self {
        let categories = RISK_CATEGORIES
            .iter()
            .zip(probabilities)
            .map(|(category, probability)| CategoryProbability {
                category: *category,
                probability,
                percent: format_percent(probability),
            })
            .collect();
        let submitted = record
            .iter()
            .map(|(feature, value)| SubmittedValue {
                feature: feature.to_string(),
                label: display_label(feature).to_string(),
                value: value.to_string(),
            })
            .collect();
        Self {
            probabilities,
            categories,
            submitted,
        }
    }

    /// Category with the highest probability; ties go to the earlier band.
    pub fn most_likely(&self) -> Option<&CategoryProbability> {
        self.categories.iter().fold(None, |best, current| match best {
            Some(best) if best.probability >= current.probability => Some(best),
            _ => Some(current),
        })
    }

    /// Percent strings in category order.
    pub fn breakdown(&self) -> Vec<(String, &str)> {
        self.categories
            .iter()
            .map(|entry| (entry.category.label(), entry.percent.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FeatureValue;

    #[test]
    fn percentages_have_two_decimals() {
        assert_eq!(format_percent(0.1), "10.00%");
        assert_eq!(format_percent(0.12345), "12.35%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn breakdown_is_positional() {
        let report = PredictionReport::new([0.1, 0.2, 0.3, 0.4], &InputRecord::new());
        assert_eq!(
            report.breakdown(),
            vec![
                ("Low Risk (P1)".to_string(), "10.00%"),
                ("Med Risk (P2)".to_string(), "20.00%"),
                ("High Risk (P3)".to_string(), "30.00%"),
                ("Near to Default (P4)".to_string(), "40.00%"),
            ]
        );
        assert_eq!(report.most_likely().unwrap().category.code, "P4");
    }

    #[test]
    fn probabilities_are_not_renormalized() {
        let report = PredictionReport::new([0.5, 0.5, 0.5, 0.5], &InputRecord::new());
        assert_eq!(report.probabilities, [0.5; 4]);
        assert!(report.categories.iter().all(|c| c.percent == "50.00%"));
        assert_eq!(report.most_likely().unwrap().category.code, "P1");
    }

    #[test]
    fn submitted_values_use_display_labels() {
        let record: InputRecord = [
            ("NETMONTHLYINCOME", FeatureValue::Real(42000.0)),
            ("EDUCATION", FeatureValue::Integer(2)),
            ("custom_score", FeatureValue::Real(0.5)),
            ("pct_tl_open_L6M", FeatureValue::Real(0.0049)),
        ]
        .into_iter()
        .collect();
        let report = PredictionReport::new([0.25; 4], &record);
        let listing: Vec<(&str, &str)> = report
            .submitted
            .iter()
            .map(|entry| (entry.label.as_str(), entry.value.as_str()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("Net Monthly Income", "42000"),
                ("Education Level", "2"),
                ("custom_score", "0.5"),
                ("Percent Total Lines Open (Last 6M)", "0.0049"),
            ]
        );
    }
}
