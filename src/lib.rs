//! Kairos Match - facility matching service for the Kairos healthcare platform
//!
//! This library provides the facility search core used by the Kairos
//! coordination product. It implements a tiered ranking pipeline: relevance
//! scoring for free-text queries, a lowest-wait ordering for empty queries,
//! and a general-care fallback when nothing matches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchOutcome, DEFAULT_LIMIT};
pub use models::{FacilityRecord, MatchTier, ScoreWeights, ScoredFacility, SearchRequest, SearchResponse};
pub use services::{seed_catalog, CatalogStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("cardiac", &seed_catalog(), DEFAULT_LIMIT);
        assert_eq!(outcome.tier, MatchTier::Relevance);
    }
}
