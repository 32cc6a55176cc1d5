use crate::model::CLASS_COUNT;

/// Positional label for one model class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskCategory {
    /// Class code as trained ("P1".."P4").
    pub code: &'static str,
    /// Risk band name shown before the code.
    pub name: &'static str,
}

impl RiskCategory {
    /// Label used by both the chart and the breakdown, e.g. `Low Risk (P1)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Risk bands in model output order. Shared by every results view.
pub const RISK_CATEGORIES: [RiskCategory; CLASS_COUNT] = [
    RiskCategory {
        code: "P1",
        name: "Low Risk",
    },
    RiskCategory {
        code: "P2",
        name: "Med Risk",
    },
    RiskCategory {
        code: "P3",
        name: "High Risk",
    },
    RiskCategory {
        code: "P4",
        name: "Near to Default",
    },
];
