use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to look up service providers near a place
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindServicesRequest {
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub category: String,
}
