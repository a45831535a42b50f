// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod ranking;
pub mod response;
pub mod similarity;

pub use distance::great_circle_distance;
pub use filters::{within_radius, RADIUS_MILES};
pub use matcher::{match_records, LookupResult, ServiceMatcher, MATCH_THRESHOLD};
pub use ranking::{rank, MAX_RESULTS};
pub use response::build_reply;
pub use similarity::partial_similarity;
