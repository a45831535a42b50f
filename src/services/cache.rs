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

/// In-memory cache for collaborator lookups.
///
/// Geocode results and dataset snapshots are slow external calls; both are
/// kept here under a TTL so repeated lookups for the same place or country
/// skip the network.
pub struct CacheManager {
    cache: moka::future::Cache<String, Vec<u8>>,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Get a value from cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.cache.get(key).await {
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
        self.cache.insert(key.to_string(), bytes).await;
        Ok(())
    }

    /// Remove a value from cache
    pub async fn delete(&self, key: &str) {
        self.cache.invalidate(key).await;
    }
}

/// Cache key builders
pub struct CacheKey;

impl CacheKey {
    pub fn geocode(city: &str, country: &str) -> String {
        format!(
            "geo:{}:{}",
            country.trim().to_lowercase(),
            city.trim().to_lowercase()
        )
    }

    pub fn dataset(country: &str) -> String {
        format!("dataset:{}", country.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let cache = CacheManager::new(16, 60);
        let coords = Coordinates {
            latitude: 40.7128,
            longitude: -74.0060,
        };

        cache.set("geo:test", &coords).await.unwrap();
        let loaded: Coordinates = cache.get("geo:test").await.unwrap();

        assert_eq!(loaded.latitude, coords.latitude);
        assert_eq!(loaded.longitude, coords.longitude);
    }

    #[tokio::test]
    async fn test_miss_is_an_error() {
        let cache = CacheManager::new(16, 60);
        let result: Result<Coordinates, CacheError> = cache.get("geo:absent").await;

        assert!(matches!(result, Err(CacheError::CacheMiss(_))));
    }

    #[tokio::test]
    async fn test_delete_evicts() {
        let cache = CacheManager::new(16, 60);
        cache.set("k", &1_u32).await.unwrap();
        cache.delete("k").await;

        let result: Result<u32, CacheError> = cache.get("k").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_keys_normalized() {
        assert_eq!(CacheKey::geocode(" New York ", "USA"), "geo:usa:new york");
        assert_eq!(CacheKey::dataset("GB"), "dataset:gb");
    }
}
