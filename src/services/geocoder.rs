use crate::models::Coordinates;
use crate::services::{CacheKey, CacheManager};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving a place name
#[derive(Debug, Error)]
pub enum GeocoderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Place not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Forward-geocoding client.
///
/// Talks to a Nominatim-style search endpoint and maps "city, country" to a
/// latitude/longitude pair. An unresolvable place is a [`GeocoderError::NotFound`],
/// which callers turn into a "try a different location" reply; it is never a
/// hard failure. No retries happen here.
pub struct GeocoderClient {
    base_url: String,
    user_agent: String,
    client: Client,
    cache: Arc<CacheManager>,
}

impl GeocoderClient {
    /// Create a new geocoder client
    pub fn new(base_url: String, user_agent: String, cache: Arc<CacheManager>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            user_agent,
            client,
            cache,
        }
    }

    /// Resolve a city/country pair to coordinates
    pub async fn resolve(&self, city: &str, country: &str) -> Result<Coordinates, GeocoderError> {
        let cache_key = CacheKey::geocode(city, country);
        if let Ok(coords) = self.cache.get::<Coordinates>(&cache_key).await {
            return Ok(coords);
        }

        let place = format!("{}, {}", city.trim(), country.trim());
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&place)
        );

        tracing::debug!("Resolving location via: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocoderError::ApiError(format!(
                "Geocoder returned {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let results = json
            .as_array()
            .ok_or_else(|| GeocoderError::InvalidResponse("Expected a result array".into()))?;

        let first = results
            .first()
            .ok_or_else(|| GeocoderError::NotFound(place.clone()))?;

        let latitude = parse_coordinate(first.get("lat")).ok_or_else(|| {
            GeocoderError::InvalidResponse(format!("Missing latitude for {}", place))
        })?;
        let longitude = parse_coordinate(first.get("lon")).ok_or_else(|| {
            GeocoderError::InvalidResponse(format!("Missing longitude for {}", place))
        })?;

        let coords = Coordinates {
            latitude,
            longitude,
        };

        if let Err(e) = self.cache.set(&cache_key, &coords).await {
            tracing::warn!("Failed to cache geocode result for {}: {}", place, e);
        }

        Ok(coords)
    }
}

/// Nominatim serves coordinates as strings; other providers use numbers.
fn parse_coordinate(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
