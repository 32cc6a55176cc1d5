use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CLASS_COUNT, FeatureType, PredictionError, ProbabilityModel, ProbabilityVector};
use crate::form::{FeatureValue, InputRecord};

/// Artifact layout version understood by this build.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

fn default_learning_rate() -> f32 {
    1.0
}

/// One node of a regression tree, addressed by its index in [`Tree::nodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal node; rows with `value < threshold` go left.
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    /// Terminal node contributing `leaf` to its class logit.
    Leaf { leaf: f32 },
}

/// Regression tree contributing to the logit of a single class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Class whose raw score this tree adds to.
    pub class_index: usize,
    /// Flattened nodes; index 0 is the root.
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk the tree for one feature row and return the leaf value.
    ///
    /// Assumes the tree passed [`TreeEnsembleModel::validate`].
    pub fn evaluate(&self, features: &[f32]) -> f32 {
        let mut index = 0usize;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { leaf }) => return *leaf,
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().unwrap_or(0.0);
                    index = if value < *threshold { *left } else { *right };
                }
                None => return 0.0,
            }
        }
    }

    fn validate(&self, tree_idx: usize, n_features: usize) -> Result<(), String> {
        if self.class_index >= CLASS_COUNT {
            return Err(format!(
                "Tree {tree_idx} targets class {} but the model has {CLASS_COUNT} classes",
                self.class_index
            ));
        }
        if self.nodes.is_empty() {
            return Err(format!("Tree {tree_idx} has no nodes"));
        }
        for (node_idx, node) in self.nodes.iter().enumerate() {
            let (feature, threshold, left, right) = match node {
                TreeNode::Leaf { leaf } if !leaf.is_finite() => {
                    return Err(format!(
                        "Tree {tree_idx} node {node_idx} has a non-finite leaf value"
                    ));
                }
                TreeNode::Leaf { .. } => continue,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => (feature, threshold, left, right),
            };
            if *feature >= n_features {
                return Err(format!(
                    "Tree {tree_idx} node {node_idx} splits on feature {feature} of {n_features}"
                ));
            }
            if !threshold.is_finite() {
                return Err(format!("Tree {tree_idx} node {node_idx} has a non-finite threshold"));
            }
            // Children must come after their parent, so every walk terminates.
            for child in [*left, *right] {
                if child <= node_idx || child >= self.nodes.len() {
                    return Err(format!(
                        "Tree {tree_idx} node {node_idx} points to invalid child {child}"
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Multi-class gradient-boosted tree ensemble with a softmax link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsembleModel {
    /// Artifact layout version.
    pub format_version: u32,
    /// Ordered feature identifiers; row values are laid out in this order.
    pub feature_names: Vec<String>,
    /// Optional per-feature value types, aligned with `feature_names`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_types: Option<Vec<FeatureType>>,
    /// Ordered class identifiers.
    pub classes: Vec<String>,
    /// Scale applied to every leaf value.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f32,
    /// Initial raw logits before any tree contributes.
    pub base_scores: Vec<f32>,
    /// All boosting trees, each tagged with its class.
    pub trees: Vec<Tree>,
}

impl TreeEnsembleModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "Unsupported format version {} (expected {ARTIFACT_FORMAT_VERSION})",
                self.format_version
            ));
        }
        if self.feature_names.is_empty() {
            return Err("Model declares no features".to_string());
        }
        let mut seen = HashSet::new();
        for name in &self.feature_names {
            if !seen.insert(name.as_str()) {
                return Err(format!("Duplicate feature name `{name}`"));
            }
        }
        if let Some(types) = &self.feature_types {
            if types.len() != self.feature_names.len() {
                return Err(format!(
                    "feature_types has {} entries but there are {} features",
                    types.len(),
                    self.feature_names.len()
                ));
            }
        }
        if self.classes.len() != CLASS_COUNT {
            return Err(format!(
                "Model must contain exactly {CLASS_COUNT} classes, found {}",
                self.classes.len()
            ));
        }
        if self.base_scores.len() != self.classes.len() {
            return Err("base_scores length must match classes length".to_string());
        }
        if self.base_scores.iter().any(|score| !score.is_finite()) {
            return Err("base_scores must be finite".to_string());
        }
        if !self.learning_rate.is_finite() {
            return Err("learning_rate must be finite".to_string());
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(tree_idx, self.feature_names.len())?;
        }
        Ok(())
    }

    /// Lay out a record as a dense row in schema order, checking keys and types.
    pub fn feature_row(&self, record: &InputRecord) -> Result<Vec<f32>, PredictionError> {
        for (feature, _) in record.iter() {
            if !self.feature_names.iter().any(|name| name == feature) {
                return Err(PredictionError::UnexpectedFeature {
                    feature: feature.to_string(),
                });
            }
        }
        let mut row = Vec::with_capacity(self.feature_names.len());
        for (index, name) in self.feature_names.iter().enumerate() {
            let value = record
                .get(name)
                .ok_or_else(|| PredictionError::MissingFeature {
                    feature: name.clone(),
                })?;
            self.check_value(index, name, value)?;
            row.push(value.as_f64() as f32);
        }
        if record.len() != row.len() {
            return Err(PredictionError::FeatureCount {
                expected: row.len(),
                actual: record.len(),
            });
        }
        Ok(row)
    }

    fn check_value(&self, index: usize, name: &str, value: FeatureValue) -> Result<(), PredictionError> {
        if !value.as_f64().is_finite() {
            return Err(PredictionError::NonFiniteValue {
                feature: name.to_string(),
            });
        }
        let expected = match self.feature_type(index) {
            Some(FeatureType::Integer) if !value.is_whole() => "a whole number",
            Some(FeatureType::Indicator) if value.as_f64() != 0.0 && value.as_f64() != 1.0 => {
                "0 or 1"
            }
            _ => return Ok(()),
        };
        Err(PredictionError::ValueType {
            feature: name.to_string(),
            expected,
            value: value.to_string(),
        })
    }

    /// Predict raw logits for a dense feature row.
    pub fn predict_raw(&self, features: &[f32]) -> [f32; CLASS_COUNT] {
        let mut raw = [0.0f32; CLASS_COUNT];
        for (slot, base) in raw.iter_mut().zip(&self.base_scores) {
            *slot = *base;
        }
        for tree in &self.trees {
            raw[tree.class_index] += self.learning_rate * tree.evaluate(features);
        }
        raw
    }

    /// Predict class probabilities for a dense feature row.
    pub fn predict_proba(&self, features: &[f32]) -> ProbabilityVector {
        softmax(&self.predict_raw(features))
    }
}

impl ProbabilityModel for TreeEnsembleModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn feature_type(&self, index: usize) -> Option<FeatureType> {
        self.feature_types
            .as_ref()
            .and_then(|types| types.get(index).copied())
    }

    fn predict_probabilities(
        &self,
        rows: &[InputRecord],
    ) -> Result<Vec<ProbabilityVector>, PredictionError> {
        rows.iter()
            .map(|record| self.feature_row(record).map(|row| self.predict_proba(&row)))
            .collect()
    }
}

/// Compute a numerically-stable softmax for a set of logits.
pub fn softmax(raw: &[f32; CLASS_COUNT]) -> ProbabilityVector {
    let max = raw
        .iter()
        .map(|&v| v as f64)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut out = [0.0f64; CLASS_COUNT];
    let mut sum = 0.0f64;
    for (slot, &v) in out.iter_mut().zip(raw) {
        *slot = (v as f64 - max).exp();
        sum += *slot;
    }
    if sum == 0.0 || !sum.is_finite() {
        return [1.0 / CLASS_COUNT as f64; CLASS_COUNT];
    }
    for v in &mut out {
        *v /= sum;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(feature: usize, threshold: f32, left: usize, right: usize) -> TreeNode {
        TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        }
    }

    fn leaf(value: f32) -> TreeNode {
        TreeNode::Leaf { leaf: value }
    }

    fn two_feature_model() -> TreeEnsembleModel {
        TreeEnsembleModel {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names: vec!["income".into(), "CC_Flag".into()],
            feature_types: Some(vec![FeatureType::Float, FeatureType::Indicator]),
            classes: vec!["P1".into(), "P2".into(), "P3".into(), "P4".into()],
            learning_rate: 1.0,
            base_scores: vec![0.0; 4],
            trees: vec![
                Tree {
                    class_index: 0,
                    nodes: vec![split(0, 1000.0, 1, 2), leaf(-1.0), leaf(2.0)],
                },
                Tree {
                    class_index: 3,
                    nodes: vec![
                        split(0, 1000.0, 1, 2),
                        split(1, 0.5, 3, 4),
                        leaf(0.0),
                        leaf(0.5),
                        leaf(3.0),
                    ],
                },
            ],
        }
    }

    fn record(income: f64, flag: i64) -> InputRecord {
        [
            ("income", FeatureValue::Real(income)),
            ("CC_Flag", FeatureValue::Integer(flag)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn tree_goes_left_only_below_threshold() {
        let tree = Tree {
            class_index: 0,
            nodes: vec![split(0, 0.5, 1, 2), leaf(-1.0), leaf(2.0)],
        };
        assert_eq!(tree.evaluate(&[0.0]), -1.0);
        assert_eq!(tree.evaluate(&[0.5]), 2.0);
        assert_eq!(tree.evaluate(&[0.6]), 2.0);
    }

    #[test]
    fn raw_scores_accumulate_per_class() {
        let model = two_feature_model();
        assert_eq!(model.predict_raw(&[500.0, 1.0]), [-1.0, 0.0, 0.0, 3.0]);
        assert_eq!(model.predict_raw(&[5000.0, 1.0]), [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn learning_rate_scales_leaves() {
        let mut model = two_feature_model();
        model.learning_rate = 0.5;
        model.base_scores = vec![1.0, 0.0, 0.0, 0.0];
        assert_eq!(model.predict_raw(&[5000.0, 0.0]), [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn probabilities_follow_softmax_of_raw_scores() {
        let model = two_feature_model();
        let probs = model
            .predict_probabilities(&[record(500.0, 1)])
            .unwrap()
            .remove(0);
        let expected = softmax(&[-1.0, 0.0, 0.0, 3.0]);
        assert_eq!(probs, expected);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probs[3] > probs[0]);
    }

    #[test]
    fn softmax_is_stable_for_large_logits() {
        let probs = softmax(&[1000.0, 1000.0, -1000.0, -1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-9);
        assert!((probs[1] - 0.5).abs() < 1e-9);
        assert!(probs[2] < 1e-12);
    }

    #[test]
    fn feature_row_rejects_missing_unknown_and_mistyped_values() {
        let model = two_feature_model();

        let mut missing = record(1.0, 0);
        missing.remove("CC_Flag");
        assert_eq!(
            model.feature_row(&missing),
            Err(PredictionError::MissingFeature {
                feature: "CC_Flag".into()
            })
        );

        let mut extra = record(1.0, 0);
        extra.insert("bogus", FeatureValue::Integer(1));
        assert_eq!(
            model.feature_row(&extra),
            Err(PredictionError::UnexpectedFeature {
                feature: "bogus".into()
            })
        );

        assert!(matches!(
            model.feature_row(&record(1.0, 2)),
            Err(PredictionError::ValueType { .. })
        ));
        assert_eq!(
            model.feature_row(&record(f64::INFINITY, 0)),
            Err(PredictionError::NonFiniteValue {
                feature: "income".into()
            })
        );
    }

    #[test]
    fn validate_rejects_structural_problems() {
        let mut model = two_feature_model();
        model.classes.pop();
        assert!(model.validate().unwrap_err().contains("exactly 4 classes"));

        let mut model = two_feature_model();
        model.trees[0].nodes = vec![split(0, 1.0, 0, 1), leaf(1.0)];
        assert!(model.validate().unwrap_err().contains("invalid child"));

        let mut model = two_feature_model();
        model.trees[0].nodes[0] = split(7, 1.0, 1, 2);
        assert!(model.validate().unwrap_err().contains("feature 7"));

        let mut model = two_feature_model();
        model.feature_names[1] = "income".into();
        assert!(model.validate().unwrap_err().contains("Duplicate"));

        let mut model = two_feature_model();
        model.trees[1].nodes[4] = leaf(f32::INFINITY);
        assert!(model.validate().unwrap_err().contains("non-finite leaf"));

        let mut model = two_feature_model();
        model.base_scores[2] = f32::NAN;
        assert!(model.validate().unwrap_err().contains("base_scores must be finite"));

        assert!(two_feature_model().validate().is_ok());
    }
}
