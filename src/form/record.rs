use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar submitted for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Value picked from a flag or categorical domain.
    Integer(i64),
    /// Free numeric input.
    Real(f64),
}

impl FeatureValue {
    /// Numeric value as fed to the model.
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Integer(value) => value as f64,
            FeatureValue::Real(value) => value,
        }
    }

    /// True when the value is a whole number, whatever its variant.
    pub fn is_whole(self) -> bool {
        match self {
            FeatureValue::Integer(_) => true,
            FeatureValue::Real(value) => value.is_finite() && value.fract() == 0.0,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Integer(value) => write!(f, "{value}"),
            FeatureValue::Real(value) => write!(f, "{value}"),
        }
    }
}

/// Feature values for a single applicant, keyed by feature identifier.
///
/// Entries keep insertion order; inserting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRecord {
    entries: Vec<(String, FeatureValue)>,
}

impl InputRecord {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `feature`, returning the previous one.
    pub fn insert(&mut self, feature: impl Into<String>, value: FeatureValue) -> Option<FeatureValue> {
        let feature = feature.into();
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == feature) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((feature, value));
        None
    }

    /// Drop `feature`, returning its value.
    pub fn remove(&mut self, feature: &str) -> Option<FeatureValue> {
        let index = self.entries.iter().position(|(key, _)| key == feature)?;
        Some(self.entries.remove(index).1)
    }

    /// Value submitted for `feature`.
    pub fn get(&self, feature: &str) -> Option<FeatureValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == feature)
            .map(|(_, value)| *value)
    }

    /// Whether `feature` has a value.
    pub fn contains(&self, feature: &str) -> bool {
        self.get(feature).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, FeatureValue)> for InputRecord {
    fn from_iter<I: IntoIterator<Item = (K, FeatureValue)>>(iter: I) -> Self {
        let mut record = InputRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
