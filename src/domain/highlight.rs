use serde::{Deserialize, Serialize};

/// Risk bucket assigned to a highlighted clause by the analyzer model.
///
/// The serialized names are part of the API contract; any other value
/// coming back from the model is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "High-Risk")]
    HighRisk,
    Cautionary,
    Standard,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "High-Risk",
            RiskCategory::Cautionary => "Cautionary",
            RiskCategory::Standard => "Standard",
        }
    }
}

/// A verbatim excerpt of the analyzed document, tagged with a risk
/// category and a one-sentence explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    pub category: RiskCategory,
    pub explanation: String,
}
