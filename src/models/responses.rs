use serde::{Deserialize, Serialize};

/// Response for the find services endpoint.
///
/// `reply` is the finished user-facing text block; the counters are for the
/// caller's logging, not for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindServicesResponse {
    pub reply: String,
    pub matched: usize,
    #[serde(rename = "locationResolved")]
    pub location_resolved: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
