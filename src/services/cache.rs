use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-memory search result cache
///
/// A single moka tier with a TTL. Entries hold ranked facility ids, not
/// full records: callers rehydrate against the current catalog snapshot so
/// a cached ranking never serves stale availability numbers.
pub struct CacheManager {
    l1_cache: moka::future::Cache<String, Vec<u8>>,
}

impl CacheManager {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { l1_cache }
    }

    /// Get a value from cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.l1_cache.get(key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.l1_cache.insert(key.to_string(), bytes).await;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a single entry
    pub async fn delete(&self, key: &str) {
        self.l1_cache.invalidate(key).await;
    }

    /// Get cache statistics, surfaced by the health endpoint
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.l1_cache.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a ranked search
    ///
    /// The query component is the normalized form, so "Chest PAIN " and
    /// "chest pain" share an entry.
    pub fn search(normalized_query: &str, limit: usize) -> String {
        format!("search:{}:{}", limit, normalized_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_set_get_delete() {
        tokio_test::block_on(async {
            let cache = CacheManager::new(100, 60);

            cache.set("k", &vec!["a".to_string(), "b".to_string()]).await.unwrap();
            let value: Vec<String> = cache.get("k").await.unwrap();
            assert_eq!(value, vec!["a", "b"]);

            cache.delete("k").await;
            assert!(cache.get::<Vec<String>>("k").await.is_err());
        });
    }

    #[test]
    fn test_stats_on_fresh_cache() {
        let cache = CacheManager::new(100, 60);
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::search("chest pain", 7), "search:7:chest pain");
        assert_eq!(CacheKey::search("", 7), "search:7:");
    }
}
