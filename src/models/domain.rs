use serde::{Deserialize, Serialize};

/// One row of the service-provider registry.
///
/// Rows arrive from the dataset collaborator as loosely-populated JSON;
/// every text field is optional so a partial row loads as explicit `None`s
/// instead of failing the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(rename = "aboutMe", default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub services: Option<String>,
    #[serde(rename = "searchDescription", default)]
    pub search_description: Option<String>,
    #[serde(rename = "customMemberKeywords", default)]
    pub custom_member_keywords: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "fullFilename", default)]
    pub full_filename: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "countryCode", default)]
    pub country_code: String,
}

impl ServiceRecord {
    /// Both coordinates present, or the record cannot be placed on the map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// A resolved lookup request: one value object per request, passed by
/// reference through the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceQuery {
    pub country: String,
    pub city: String,
    pub category: String,
}

/// Geographic origin of a query, as resolved by the geocoder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Priority class of a text match. `Primary` hits matched on the provider
/// name; `Secondary` hits matched on any of the descriptive fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Primary,
    Secondary,
}

/// A candidate that passed the radius filter, annotated with its
/// great-circle distance from the query origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedCandidate {
    pub record_index: usize,
    pub tier: MatchTier,
    pub distance_miles: f64,
}

/// Deduplicated, discovery-ordered index sets per tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieredMatches {
    pub primary: Vec<usize>,
    pub secondary: Vec<usize>,
}

impl TieredMatches {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}
