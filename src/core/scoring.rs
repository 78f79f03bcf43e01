use crate::core::text::tokenize;
use crate::models::{FacilityRecord, ScoreWeights};

/// Calculate the relevance score of a facility for a tokenized query
///
/// Scoring, per query word:
/// - +keyword (10) for every keyword token where either string contains the
///   other; every matching pair counts, with no deduplication
/// - +name (8) if the facility name contains the word
/// - +specialty (6) if the specialty contains the word
/// - +location (4) if the location contains the word
///
/// Reads only `name`, `location`, `specialty`, `keywords`; capacity and wait
/// data never influence relevance. Query words are expected lowercase (see
/// [`tokenize`]).
pub fn score_facility(
    facility: &FacilityRecord,
    query_words: &[String],
    weights: &ScoreWeights,
) -> u32 {
    let name = facility.name.to_lowercase();
    let specialty = facility.specialty.to_lowercase();
    let location = facility.location.to_lowercase();
    let keyword_words = tokenize(&facility.keywords);

    let mut score = 0u32;

    for query_word in query_words {
        for keyword_word in &keyword_words {
            if query_word.contains(keyword_word.as_str())
                || keyword_word.contains(query_word.as_str())
            {
                score += weights.keyword;
            }
        }

        if name.contains(query_word.as_str()) {
            score += weights.name;
        }
        if specialty.contains(query_word.as_str()) {
            score += weights.specialty;
        }
        if location.contains(query_word.as_str()) {
            score += weights.location;
        }
    }

    score
}
