use crate::core::scoring::score_facility;
use crate::core::text::tokenize;
use crate::models::{FacilityRecord, MatchTier, ScoreWeights, ScoredFacility};

/// Default number of facilities returned per query
pub const DEFAULT_LIMIT: usize = 7;

/// Result of one matching pass
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<ScoredFacility>,
    pub total_candidates: usize,
    pub tier: MatchTier,
}

/// Facility matching orchestrator - implements the tiered ranking pipeline
///
/// # Tiers
/// 1. Empty query: lowest wait time first
/// 2. Scored query: relevance ranking over keywords, name, specialty, location
/// 3. Fallback: general-care facilities when nothing scores above zero
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoreWeights,
    fallback_specialty: String,
}

impl Matcher {
    pub fn new(weights: ScoreWeights) -> Self {
        Self {
            weights,
            fallback_specialty: "general".to_string(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoreWeights::default())
    }

    /// Override the specialty substring used by the fallback tier
    pub fn with_fallback_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.fallback_specialty = specialty.into().to_lowercase();
        self
    }

    /// Rank facilities in `catalog` against a free-text query
    ///
    /// Pure with respect to the catalog: records are only read, never
    /// mutated. Any string is a valid query; unmatched queries degrade
    /// through the fallback tier rather than failing. Ties on every tier
    /// keep catalog order (stable sorts throughout).
    ///
    /// # Arguments
    /// * `query` - Raw search box text; may be empty or whitespace-only
    /// * `catalog` - All facility records, in catalog order
    /// * `limit` - Maximum number of results to return
    pub fn rank(&self, query: &str, catalog: &[FacilityRecord], limit: usize) -> MatchOutcome {
        let total_candidates = catalog.len();

        // Tier 1: empty query returns the shortest waits
        if query.trim().is_empty() {
            let mut by_wait: Vec<&FacilityRecord> = catalog.iter().collect();
            by_wait.sort_by_key(|f| f.wait_time_minutes);

            let matches = by_wait
                .into_iter()
                .take(limit)
                .map(ScoredFacility::unscored)
                .collect();

            return MatchOutcome {
                matches,
                total_candidates,
                tier: MatchTier::LowestWait,
            };
        }

        // Tier 2: relevance scoring
        let query_words = tokenize(query);

        let mut scored: Vec<(u32, &FacilityRecord)> = catalog
            .iter()
            .filter_map(|facility| {
                let score = score_facility(facility, &query_words, &self.weights);
                (score > 0).then_some((score, facility))
            })
            .collect();

        if !scored.is_empty() {
            // Stable sort keeps catalog order on score ties
            scored.sort_by(|a, b| b.0.cmp(&a.0));

            let matches = scored
                .into_iter()
                .take(limit)
                .map(|(score, facility)| ScoredFacility::from_record(facility, score))
                .collect();

            return MatchOutcome {
                matches,
                total_candidates,
                tier: MatchTier::Relevance,
            };
        }

        // Tier 3: general-care fallback; may legitimately be empty
        let matches = catalog
            .iter()
            .filter(|f| f.specialty.to_lowercase().contains(&self.fallback_specialty))
            .take(limit)
            .map(ScoredFacility::unscored)
            .collect();

        MatchOutcome {
            matches,
            total_candidates,
            tier: MatchTier::GeneralFallback,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(
        id: &str,
        name: &str,
        location: &str,
        specialty: &str,
        keywords: &str,
        wait: u32,
    ) -> FacilityRecord {
        FacilityRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            specialty: specialty.to_string(),
            keywords: keywords.to_string(),
            wait_time_minutes: wait,
            capacity: 100,
            available: 40,
        }
    }

    fn sample_catalog() -> Vec<FacilityRecord> {
        vec![
            facility(
                "1",
                "City General",
                "Downtown",
                "General Care",
                "general checkup fever",
                30,
            ),
            facility(
                "2",
                "Heart Institute",
                "Uptown",
                "Cardiology",
                "cardiac heart chest pain",
                10,
            ),
        ]
    }

    #[test]
    fn test_scored_query_ranks_keyword_hits() {
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("chest pain", &sample_catalog(), 7);

        assert_eq!(outcome.tier, MatchTier::Relevance);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].name, "Heart Institute");
        assert_eq!(outcome.matches[0].score, 20);
        assert_eq!(outcome.total_candidates, 2);
    }

    #[test]
    fn test_empty_query_sorts_by_wait_time() {
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("", &sample_catalog(), 7);

        assert_eq!(outcome.tier, MatchTier::LowestWait);
        let names: Vec<&str> = outcome.matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Heart Institute", "City General"]);
    }

    #[test]
    fn test_whitespace_query_takes_empty_path() {
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("   \t ", &sample_catalog(), 7);

        assert_eq!(outcome.tier, MatchTier::LowestWait);
    }

    #[test]
    fn test_unmatched_query_falls_back_to_general_care() {
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("xyz-nonsense", &sample_catalog(), 7);

        assert_eq!(outcome.tier, MatchTier::GeneralFallback);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].name, "City General");
    }

    #[test]
    fn test_fallback_can_be_empty() {
        let catalog = vec![facility(
            "1",
            "Heart Institute",
            "Uptown",
            "Cardiology",
            "cardiac heart",
            10,
        )];
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("xyz-nonsense", &catalog, 7);

        assert_eq!(outcome.tier, MatchTier::GeneralFallback);
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_score_ties_keep_catalog_order() {
        // Identical records score identically; the stable sort must keep
        // first-seen order
        let catalog = vec![
            facility("a", "Alpha Clinic", "Ikeja", "General Care", "fever", 20),
            facility("b", "Beta Clinic", "Ikeja", "General Care", "fever", 5),
            facility("c", "Gamma Clinic", "Ikeja", "General Care", "fever", 40),
        ];
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.rank("fever", &catalog, 7);

        let ids: Vec<&str> = outcome.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_respects_limit_on_every_tier() {
        let catalog: Vec<FacilityRecord> = (0..20)
            .map(|i| {
                facility(
                    &i.to_string(),
                    &format!("Facility {}", i),
                    "Ikeja",
                    "General Care",
                    "general fever",
                    i,
                )
            })
            .collect();
        let matcher = Matcher::with_default_weights();

        assert_eq!(matcher.rank("fever", &catalog, 5).matches.len(), 5);
        assert_eq!(matcher.rank("", &catalog, 5).matches.len(), 5);
        assert_eq!(matcher.rank("zzz-no-hit-zzz", &catalog, 5).matches.len(), 5);
    }

    #[test]
    fn test_empty_catalog_returns_empty_on_every_tier() {
        let matcher = Matcher::with_default_weights();

        assert!(matcher.rank("fever", &[], 7).matches.is_empty());
        assert!(matcher.rank("", &[], 7).matches.is_empty());
    }

    #[test]
    fn test_custom_fallback_specialty() {
        let catalog = vec![facility(
            "1",
            "Kids First",
            "Lekki",
            "Pediatrics",
            "child",
            15,
        )];
        let matcher = Matcher::with_default_weights().with_fallback_specialty("Pediatrics");
        let outcome = matcher.rank("zzz-no-hit-zzz", &catalog, 7);

        assert_eq!(outcome.matches.len(), 1);
    }
}
