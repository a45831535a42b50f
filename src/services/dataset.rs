use crate::models::ServiceRecord;
use crate::services::{CacheKey, CacheManager};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the provider registry
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Provider-registry client.
///
/// Fetches the table of service-provider records for one country from the
/// registry endpoint. The endpoint does the country filtering; an empty
/// table is a valid answer and flows downstream as "no matches". Rows that
/// fail to deserialize are skipped with a warning rather than failing the
/// snapshot.
pub struct DatasetClient {
    base_url: String,
    client: Client,
    cache: Arc<CacheManager>,
}

impl DatasetClient {
    /// Create a new dataset client
    pub fn new(base_url: String, cache: Arc<CacheManager>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            client,
            cache,
        }
    }

    /// Fetch the provider records for a country
    pub async fn records_for(&self, country: &str) -> Result<Vec<ServiceRecord>, DatasetError> {
        let cache_key = CacheKey::dataset(country);
        if let Ok(records) = self.cache.get::<Vec<ServiceRecord>>(&cache_key).await {
            return Ok(records);
        }

        let url = format!(
            "{}/providers?country={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(country.trim())
        );

        tracing::debug!("Fetching provider records from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::ApiError(format!(
                "Registry returned {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| DatasetError::InvalidResponse("Expected a record array".into()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_value::<ServiceRecord>(row.clone()) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed provider row: {}", e);
                }
            }
        }

        tracing::debug!("Loaded {} provider records for {}", records.len(), country);

        if let Err(e) = self.cache.set(&cache_key, &records).await {
            tracing::warn!("Failed to cache provider records for {}: {}", country, e);
        }

        Ok(records)
    }
}
