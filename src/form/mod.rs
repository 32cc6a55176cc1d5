//! Schema-driven applicant form.
//!
//! Controls are derived from the model's feature list through a declarative
//! table, labelled through the display-name mapping, and snapshotted into an
//! [`InputRecord`] on submit.

mod controls;
mod display_names;
mod record;

pub use controls::{
    CONTROL_TABLE, ControlKind, ControlSpec, EDUCATION, FLAG, FeatureForm, FormControl, NUMERIC,
    ValueDomain, control_spec,
};
pub use display_names::display_label;
pub use record::{FeatureValue, InputRecord};
