// Service exports
pub mod cache;
pub mod dataset;
pub mod geocoder;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use dataset::{DatasetClient, DatasetError};
pub use geocoder::{GeocoderClient, GeocoderError};
