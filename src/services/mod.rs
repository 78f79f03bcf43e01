// Service exports
pub mod cache;
pub mod catalog;
pub mod simulator;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use catalog::{seed_catalog, CatalogError, CatalogStore};
pub use simulator::CapacitySimulator;
