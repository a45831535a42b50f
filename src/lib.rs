//! Helpline Algo - service-provider lookup and matching for the community helpline
//!
//! This library answers "find a *category* of help near *city, country*"
//! queries against a registry of service-provider records. It implements a
//! tiered fuzzy-matching, radius-filtering and ranking pipeline and renders
//! the result as a single reply text block.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{great_circle_distance, partial_similarity, ServiceMatcher};
pub use models::{
    Coordinates, FindServicesRequest, FindServicesResponse, MatchTier, ServiceQuery, ServiceRecord,
};
