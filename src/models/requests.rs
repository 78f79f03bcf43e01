use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search the facility catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    /// Free-text query; empty or whitespace-only selects the lowest-wait tier
    #[serde(default)]
    pub query: String,
    /// Maximum results; the configured default applies when omitted
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

/// Request for a symptom triage assessment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TriageRequest {
    #[validate(length(min = 1))]
    pub symptoms: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
}
