use serde::{Deserialize, Serialize};

/// A healthcare facility in the catalog
///
/// The `keywords` field is a space-separated tag string used only for
/// matching; it is never rendered to users. `available` is mutated by the
/// capacity simulator, never by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub specialty: String,
    pub keywords: String,
    #[serde(rename = "waitTimeMinutes")]
    pub wait_time_minutes: u32,
    pub capacity: u32,
    pub available: u32,
}

/// A facility paired with its relevance score for one query
///
/// `keywords` is intentionally omitted: it is matching input, not display
/// output. `score` is 0 on the lowest-wait and fallback tiers, which carry
/// no relevance measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFacility {
    pub id: String,
    pub name: String,
    pub location: String,
    pub specialty: String,
    #[serde(rename = "waitTimeMinutes")]
    pub wait_time_minutes: u32,
    pub capacity: u32,
    pub available: u32,
    pub score: u32,
}

impl ScoredFacility {
    pub fn from_record(record: &FacilityRecord, score: u32) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            location: record.location.clone(),
            specialty: record.specialty.clone(),
            wait_time_minutes: record.wait_time_minutes,
            capacity: record.capacity,
            available: record.available,
            score,
        }
    }

    /// For tiers that order without scoring (lowest wait, fallback)
    pub fn unscored(record: &FacilityRecord) -> Self {
        Self::from_record(record, 0)
    }
}

/// Which tier of the matching pipeline produced the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Non-empty query, ranked by relevance score
    Relevance,
    /// Empty query, ordered by ascending wait time
    LowestWait,
    /// Nothing scored above zero; general-care facilities in catalog order
    GeneralFallback,
}

/// Per-field relevance weights
///
/// Keyword-pair hits dominate, then name, specialty, location.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub keyword: u32,
    pub name: u32,
    pub specialty: u32,
    pub location: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: 10,
            name: 8,
            specialty: 6,
            location: 4,
        }
    }
}

/// Triage urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
    /// Symptoms could not be assessed
    Unknown,
}

/// Recommended care setting for a triage assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareLevel {
    Clinic,
    #[serde(rename = "General Hospital")]
    GeneralHospital,
    #[serde(rename = "Tertiary Hospital")]
    TertiaryHospital,
}

impl CareLevel {
    /// Query terms that route this care level through the facility matcher
    pub fn search_terms(&self) -> &'static str {
        match self {
            CareLevel::Clinic => "clinic general checkup",
            CareLevel::GeneralHospital => "general",
            CareLevel::TertiaryHospital => "specialist tertiary surgery",
        }
    }
}

/// Outcome of one triage assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageAssessment {
    pub summary: String,
    pub urgency: Urgency,
    pub recommended_care: CareLevel,
    pub advice: String,
}
