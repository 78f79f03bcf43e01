// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CareLevel, FacilityRecord, MatchTier, ScoreWeights, ScoredFacility, TriageAssessment, Urgency};
pub use requests::{SearchRequest, TriageRequest};
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse, SearchResponse, TriageResponse};
