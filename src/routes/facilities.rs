use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::core::matcher::DEFAULT_LIMIT;
use crate::core::triage::triage_symptoms;
use crate::core::Matcher;
use crate::models::{
    CatalogResponse, ErrorResponse, FacilityRecord, HealthResponse, MatchTier, ScoredFacility,
    SearchRequest, SearchResponse, TriageRequest, TriageResponse,
};
use crate::services::{CacheKey, CacheManager, CatalogStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all facility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/facilities", web::get().to(list_facilities))
        .route("/facilities/search", web::post().to(search_facilities))
        .route("/triage", web::post().to(triage));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // An empty catalog means every search returns nothing; surface it
    let status = if state.catalog.is_empty().await {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache_entries: state.cache.stats().entries,
    })
}

/// Catalog listing endpoint
///
/// GET /api/v1/facilities
async fn list_facilities(state: web::Data<AppState>) -> impl Responder {
    let facilities = state.catalog.snapshot().await;
    let count = facilities.len();

    HttpResponse::Ok().json(CatalogResponse { facilities, count })
}

/// Cached ranking: ids and scores only, rehydrated per request so cached
/// entries never carry stale availability numbers
#[derive(Debug, Serialize, Deserialize)]
struct CachedRanking {
    entries: Vec<(String, u32)>,
    tier: MatchTier,
    total_candidates: usize,
}

/// Facility search endpoint
///
/// POST /api/v1/facilities/search
///
/// Request body:
/// ```json
/// {
///   "query": "chest pain",
///   "limit": 7
/// }
/// ```
async fn search_facilities(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);
    let normalized = crate::core::text::normalize(&req.query);
    let cache_key = CacheKey::search(&normalized, limit);

    let snapshot = state.catalog.snapshot().await;

    // Serve from cache when the ranking for this query is still fresh
    if let Ok(cached) = state.cache.get::<CachedRanking>(&cache_key).await {
        if let Some(matches) = rehydrate(&cached, &snapshot) {
            tracing::debug!("Served \"{}\" from cache", normalized);
            return HttpResponse::Ok().json(SearchResponse {
                matches,
                tier: cached.tier,
                total_candidates: cached.total_candidates,
            });
        }
    }

    let outcome = state.matcher.rank(&req.query, &snapshot, limit);

    tracing::info!(
        "Ranked \"{}\": {} of {} facilities via {:?} tier",
        normalized,
        outcome.matches.len(),
        outcome.total_candidates,
        outcome.tier
    );

    let cached = CachedRanking {
        entries: outcome
            .matches
            .iter()
            .map(|m| (m.id.clone(), m.score))
            .collect(),
        tier: outcome.tier,
        total_candidates: outcome.total_candidates,
    };
    if let Err(e) = state.cache.set(&cache_key, &cached).await {
        tracing::warn!("Failed to cache ranking for \"{}\": {}", normalized, e);
    }

    HttpResponse::Ok().json(SearchResponse {
        matches: outcome.matches,
        tier: outcome.tier,
        total_candidates: outcome.total_candidates,
    })
}

/// Rebuild scored facilities from cached ids against the live snapshot
///
/// Returns None if any cached id is gone, which forces a fresh ranking.
fn rehydrate(cached: &CachedRanking, snapshot: &[FacilityRecord]) -> Option<Vec<ScoredFacility>> {
    let by_id: HashMap<&str, &FacilityRecord> =
        snapshot.iter().map(|r| (r.id.as_str(), r)).collect();

    cached
        .entries
        .iter()
        .map(|(id, score)| {
            by_id
                .get(id.as_str())
                .map(|record| ScoredFacility::from_record(record, *score))
        })
        .collect()
}

/// Symptom triage endpoint
///
/// POST /api/v1/triage
///
/// Request body:
/// ```json
/// {
///   "symptoms": "chest pain and dizziness",
///   "age": 54,
///   "location": "Ikeja"
/// }
/// ```
async fn triage(state: web::Data<AppState>, req: web::Json<TriageRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let assessment = triage_symptoms(&req.symptoms);
    let snapshot = state.catalog.snapshot().await;

    // Try the symptom text itself first; when nothing in the catalog matches
    // it, search on the recommended care level instead
    let outcome = state.matcher.rank(&req.symptoms, &snapshot, DEFAULT_LIMIT);
    let suggested_facilities = if outcome.tier == MatchTier::Relevance {
        outcome.matches
    } else {
        state
            .matcher
            .rank(
                assessment.recommended_care.search_terms(),
                &snapshot,
                DEFAULT_LIMIT,
            )
            .matches
    };

    tracing::info!(
        "Triage assessed as {:?} / {:?}, {} facilities suggested",
        assessment.urgency,
        assessment.recommended_care,
        suggested_facilities.len()
    );

    HttpResponse::Ok().json(TriageResponse {
        assessment_id: uuid::Uuid::new_v4().to_string(),
        summary: assessment.summary,
        urgency: assessment.urgency,
        recommended_care: assessment.recommended_care,
        advice: assessment.advice,
        suggested_facilities,
    })
}
