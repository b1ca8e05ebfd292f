use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Safe,
}

/// Verdict parsed out of the model's free-text reply to a detection
/// request. Every field must be present and non-empty or the whole result
/// is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub is_phishing: bool,
    pub confidence: Confidence,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub red_flags: Vec<String>,
    pub analysis: String,
    pub recommendation: String,
}
