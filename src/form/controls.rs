use crate::model::{FeatureType, ProbabilityModel};

use super::display_names::display_label;
use super::record::{FeatureValue, InputRecord};

/// Kind of input widget a feature is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Binary yes/no flag.
    Flag,
    /// Ordinal education level.
    Education,
    /// Free numeric entry.
    Numeric,
}

/// Values a control accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueDomain {
    /// One of a fixed set of integers.
    Choices(&'static [i64]),
    /// Any finite real number, starting at `default`.
    Real { default: f64 },
}

impl ValueDomain {
    /// Whether `value` lies in this domain.
    pub fn accepts(&self, value: FeatureValue) -> bool {
        match (self, value) {
            (ValueDomain::Choices(choices), FeatureValue::Integer(v)) => choices.contains(&v),
            (ValueDomain::Choices(_), FeatureValue::Real(_)) => false,
            (ValueDomain::Real { .. }, value) => value.as_f64().is_finite(),
        }
    }

    /// Turn a whole real into the matching choice, so JSON `1.0` selects 1.
    ///
    /// Real domains and non-whole values pass through untouched.
    pub fn coerce(&self, value: FeatureValue) -> FeatureValue {
        match (self, value) {
            (ValueDomain::Choices(choices), FeatureValue::Real(v)) if value.is_whole() => choices
                .iter()
                .copied()
                .find(|&choice| choice as f64 == v)
                .map_or(value, FeatureValue::Integer),
            _ => value,
        }
    }

    /// Initial value for a freshly built control.
    pub fn default_value(&self) -> FeatureValue {
        match self {
            ValueDomain::Choices(choices) => FeatureValue::Integer(choices.first().copied().unwrap_or(0)),
            ValueDomain::Real { default } => FeatureValue::Real(*default),
        }
    }
}

/// Control kind plus accepted domain for a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    /// Widget used to edit the feature.
    pub kind: ControlKind,
    /// Values the widget may hold.
    pub domain: ValueDomain,
}

const BINARY: &[i64] = &[0, 1];
const EDUCATION_LEVELS: &[i64] = &[0, 1, 2, 3];

/// Yes/no flag holding 0 or 1.
pub const FLAG: ControlSpec = ControlSpec {
    kind: ControlKind::Flag,
    domain: ValueDomain::Choices(BINARY),
};
/// Education level from 0 to 3.
pub const EDUCATION: ControlSpec = ControlSpec {
    kind: ControlKind::Education,
    domain: ValueDomain::Choices(EDUCATION_LEVELS),
};
/// Free real-valued entry starting at 0.
pub const NUMERIC: ControlSpec = ControlSpec {
    kind: ControlKind::Numeric,
    domain: ValueDomain::Real { default: 0.0 },
};

/// Features that get a dedicated control; everything else is numeric.
///
/// New control kinds are added here rather than in the form builder.
pub const CONTROL_TABLE: &[(&str, ControlSpec)] = &[
    ("GENDER_F", FLAG),
    ("GENDER_M", FLAG),
    ("MARITALSTATUS_Married", FLAG),
    ("MARITALSTATUS_Single", FLAG),
    ("CC_Flag", FLAG),
    ("PL_Flag", FLAG),
    ("HL_Flag", FLAG),
    ("GL_Flag", FLAG),
    ("EDUCATION", EDUCATION),
];

/// Resolve the control for `feature`, consulting the table before the declared type.
pub fn control_spec(feature: &str, declared: Option<FeatureType>) -> ControlSpec {
    if let Some((_, spec)) = CONTROL_TABLE.iter().find(|(name, _)| *name == feature) {
        return *spec;
    }
    match declared {
        Some(FeatureType::Indicator) => FLAG,
        _ => NUMERIC,
    }
}

/// One editable input bound to a schema feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    /// Feature identifier used as the record key.
    pub feature: String,
    /// Label shown next to the widget.
    pub label: String,
    /// Widget kind and accepted domain.
    pub spec: ControlSpec,
    value: FeatureValue,
}

impl FormControl {
    /// Control for `feature` holding its domain's default value.
    pub fn new(feature: impl Into<String>, spec: ControlSpec) -> Self {
        let feature = feature.into();
        Self {
            label: display_label(&feature).to_string(),
            value: spec.domain.default_value(),
            feature,
            spec,
        }
    }

    /// Current value.
    pub fn value(&self) -> FeatureValue {
        self.value
    }

    /// Set the value if the control's domain accepts it.
    ///
    /// Numeric controls always hold a real value, whatever variant was given.
    pub fn set_value(&mut self, value: FeatureValue) -> bool {
        if !self.spec.domain.accepts(value) {
            return false;
        }
        self.value = match self.spec.domain {
            ValueDomain::Real { .. } => FeatureValue::Real(value.as_f64()),
            ValueDomain::Choices(_) => value,
        };
        true
    }

    /// Mutable access for numeric widgets; `None` for choice controls.
    pub fn real_value_mut(&mut self) -> Option<&mut f64> {
        match &mut self.value {
            FeatureValue::Real(value) => Some(value),
            FeatureValue::Integer(_) => None,
        }
    }

    /// Restore the domain default.
    pub fn reset(&mut self) {
        self.value = self.spec.domain.default_value();
    }
}

/// Form with one control per model feature, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureForm {
    controls: Vec<FormControl>,
}

impl FeatureForm {
    /// Build controls for the model's declared schema.
    pub fn for_model(model: &dyn ProbabilityModel) -> Self {
        let controls = model
            .feature_names()
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                FormControl::new(feature.clone(), control_spec(feature, model.feature_type(index)))
            })
            .collect();
        Self { controls }
    }

    /// Build controls for a bare list of feature names.
    #[cfg(test)]
    pub(crate) fn from_schema<S: AsRef<str>>(features: &[S]) -> Self {
        let controls = features
            .iter()
            .map(|feature| {
                let feature = feature.as_ref();
                FormControl::new(feature, control_spec(feature, None))
            })
            .collect();
        Self { controls }
    }

    /// Controls in schema order.
    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    /// Mutable controls for the form widgets.
    pub fn controls_mut(&mut self) -> &mut [FormControl] {
        &mut self.controls
    }

    /// Control bound to `feature`, if any.
    pub fn control(&self, feature: &str) -> Option<&FormControl> {
        self.controls.iter().find(|control| control.feature == feature)
    }

    /// Set a value by feature identifier; false when unknown or out of domain.
    pub fn set_value(&mut self, feature: &str, value: FeatureValue) -> bool {
        self.controls
            .iter_mut()
            .find(|control| control.feature == feature)
            .is_some_and(|control| control.set_value(value))
    }

    /// Restore every control to its default.
    pub fn reset(&mut self) {
        self.controls.iter_mut().for_each(FormControl::reset);
    }

    /// Snapshot the current values as a record keyed by feature identifier.
    pub fn assemble(&self) -> InputRecord {
        self.controls
            .iter()
            .map(|control| (control.feature.clone(), control.value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FixedProbabilities;

    const FLAGS: [&str; 8] = [
        "GENDER_F",
        "GENDER_M",
        "MARITALSTATUS_Married",
        "MARITALSTATUS_Single",
        "CC_Flag",
        "PL_Flag",
        "HL_Flag",
        "GL_Flag",
    ];

    #[test]
    fn flag_features_accept_exactly_zero_and_one() {
        for feature in FLAGS {
            let spec = control_spec(feature, None);
            assert_eq!(spec.kind, ControlKind::Flag, "{feature}");
            assert_eq!(spec.domain, ValueDomain::Choices(&[0, 1]));
            assert!(spec.domain.accepts(FeatureValue::Integer(0)));
            assert!(spec.domain.accepts(FeatureValue::Integer(1)));
            assert!(!spec.domain.accepts(FeatureValue::Integer(2)));
            assert!(!spec.domain.accepts(FeatureValue::Real(1.0)));
        }
    }

    #[test]
    fn education_accepts_four_levels() {
        let spec = control_spec("EDUCATION", None);
        assert_eq!(spec.kind, ControlKind::Education);
        assert_eq!(spec.domain, ValueDomain::Choices(&[0, 1, 2, 3]));
        assert!(!spec.domain.accepts(FeatureValue::Integer(4)));
        assert!(!spec.domain.accepts(FeatureValue::Integer(-1)));
    }

    #[test]
    fn other_features_are_numeric_unless_declared_indicator() {
        assert_eq!(control_spec("NETMONTHLYINCOME", None), NUMERIC);
        assert_eq!(control_spec("num_sub", Some(FeatureType::Integer)), NUMERIC);
        assert_eq!(control_spec("new_flag", Some(FeatureType::Indicator)), FLAG);
        assert_eq!(control_spec("EDUCATION", Some(FeatureType::Float)), EDUCATION);
        assert!(NUMERIC.domain.accepts(FeatureValue::Real(-12.5)));
        assert!(!NUMERIC.domain.accepts(FeatureValue::Real(f64::NAN)));
    }

    #[test]
    fn coercion_only_maps_whole_reals_onto_choices() {
        assert_eq!(
            EDUCATION.domain.coerce(FeatureValue::Real(2.0)),
            FeatureValue::Integer(2)
        );
        assert_eq!(
            FLAG.domain.coerce(FeatureValue::Real(1e30)),
            FeatureValue::Real(1e30)
        );
        assert_eq!(
            NUMERIC.domain.coerce(FeatureValue::Real(1e30)),
            FeatureValue::Real(1e30)
        );
        let mut form = FeatureForm::from_schema(&["NETMONTHLYINCOME"]);
        let control = &mut form.controls_mut()[0];
        let value = control.spec.domain.coerce(FeatureValue::Real(1e30));
        assert!(control.set_value(value));
        assert_eq!(control.value(), FeatureValue::Real(1e30));
    }

    #[test]
    fn controls_use_display_labels_but_keep_identifiers() {
        let form = FeatureForm::from_schema(&["CC_Flag", "unlabelled_feature"]);
        let flag = form.control("CC_Flag").unwrap();
        assert_eq!(flag.label, "Credit Card Holder");
        assert_eq!(flag.feature, "CC_Flag");
        let raw = form.control("unlabelled_feature").unwrap();
        assert_eq!(raw.label, "unlabelled_feature");
    }

    #[test]
    fn assembled_record_follows_schema_with_typed_defaults() {
        let form = FeatureForm::from_schema(&["NETMONTHLYINCOME", "EDUCATION", "GL_Flag"]);
        let record = form.assemble();
        let entries: Vec<(&str, FeatureValue)> = record.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("NETMONTHLYINCOME", FeatureValue::Real(0.0)),
                ("EDUCATION", FeatureValue::Integer(0)),
                ("GL_Flag", FeatureValue::Integer(0)),
            ]
        );
    }

    #[test]
    fn out_of_domain_values_are_refused_and_reset_restores_defaults() {
        let mut form = FeatureForm::from_schema(&["EDUCATION", "Age_Oldest_TL"]);
        assert!(form.set_value("EDUCATION", FeatureValue::Integer(3)));
        assert!(!form.set_value("EDUCATION", FeatureValue::Integer(9)));
        assert!(!form.set_value("missing", FeatureValue::Integer(1)));
        assert!(form.set_value("Age_Oldest_TL", FeatureValue::Integer(48)));
        assert_eq!(
            form.control("Age_Oldest_TL").unwrap().value(),
            FeatureValue::Real(48.0)
        );
        assert_eq!(form.control("EDUCATION").unwrap().value(), FeatureValue::Integer(3));

        form.reset();
        assert_eq!(form.control("EDUCATION").unwrap().value(), FeatureValue::Integer(0));
        assert_eq!(
            form.control("Age_Oldest_TL").unwrap().value(),
            FeatureValue::Real(0.0)
        );
    }

    #[test]
    fn form_for_model_mirrors_model_schema() {
        let model = FixedProbabilities::new(["GENDER_M", "enq_L3m"], [0.25; 4]);
        let form = FeatureForm::for_model(&model);
        let features: Vec<&str> = form.controls().iter().map(|c| c.feature.as_str()).collect();
        assert_eq!(features, vec!["GENDER_M", "enq_L3m"]);
        assert_eq!(form.controls()[0].spec, FLAG);
        assert_eq!(form.controls()[1].label, "Inquiries in Last 3 Months");
    }
}
