mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::Matcher;
use crate::models::ScoreWeights;
use crate::routes::facilities::AppState;
use crate::routes::{handle_json_payload_error, handle_query_payload_error};
use crate::services::{seed_catalog, CacheManager, CapacitySimulator, CatalogStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration; logging is not up yet, so report to stderr
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging from the configured level and format;
    // RUST_LOG still wins when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Kairos Match facility matching service...");
    info!("Configuration loaded successfully");

    // Load the facility catalog (configured file, or the built-in seed)
    let catalog = match &settings.catalog.path {
        Some(path) => CatalogStore::from_file(path).unwrap_or_else(|e| {
            error!("Failed to load catalog from {}: {}", path, e);
            panic!("Catalog error: {}", e);
        }),
        None => CatalogStore::from_records(seed_catalog()).unwrap_or_else(|e| {
            error!("Built-in seed catalog rejected: {}", e);
            panic!("Catalog error: {}", e);
        }),
    };
    let catalog = Arc::new(catalog);

    info!("Catalog loaded ({} facilities)", catalog.len().await);

    // Initialize the search result cache
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache_entries = settings.cache.max_entries.unwrap_or(1000);
    let cache = Arc::new(CacheManager::new(cache_entries, cache_ttl));

    info!("Cache initialized ({} entries, TTL: {}s)", cache_entries, cache_ttl);

    // Initialize matcher with configured weights
    let weights = ScoreWeights {
        keyword: settings.scoring.weights.keyword,
        name: settings.scoring.weights.name,
        specialty: settings.scoring.weights.specialty,
        location: settings.scoring.weights.location,
    };

    let mut matcher = Matcher::new(weights);
    if let Some(specialty) = &settings.matching.fallback_specialty {
        matcher = matcher.with_fallback_specialty(specialty.clone());
    }

    info!("Matcher initialized with weights: {:?}", weights);

    // Start the demo capacity drift, if enabled
    if settings.simulator.enabled {
        let interval = Duration::from_secs(settings.simulator.interval_secs.unwrap_or(3));
        let max_step = settings.simulator.max_step.unwrap_or(3);
        CapacitySimulator::new(Arc::clone(&catalog), interval, max_step).spawn();
        info!("Capacity simulator running (every {:?}, step ±{})", interval, max_step);
    }

    // Build application state
    let app_state = AppState {
        catalog,
        cache,
        matcher,
        default_limit: settings.matching.default_limit.unwrap_or(7) as usize,
        max_limit: settings.matching.max_limit.unwrap_or(100) as usize,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
