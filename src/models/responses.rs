use serde::{Deserialize, Serialize};
use crate::models::domain::{CareLevel, FacilityRecord, MatchTier, ScoredFacility, Urgency};

/// Response for the facility search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<ScoredFacility>,
    pub tier: MatchTier,
    pub total_candidates: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub facilities: Vec<FacilityRecord>,
    pub count: usize,
}

/// Response for the triage endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResponse {
    pub assessment_id: String,
    pub summary: String,
    pub urgency: Urgency,
    pub recommended_care: CareLevel,
    pub advice: String,
    pub suggested_facilities: Vec<ScoredFacility>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache_entries: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
