// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinates, LocatedCandidate, MatchTier, ServiceQuery, ServiceRecord, TieredMatches,
};
pub use requests::FindServicesRequest;
pub use responses::{ErrorResponse, FindServicesResponse, HealthResponse};
