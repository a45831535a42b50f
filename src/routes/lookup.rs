use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::ServiceMatcher;
use crate::models::{ErrorResponse, FindServicesRequest, FindServicesResponse, HealthResponse, ServiceQuery};
use crate::services::{DatasetClient, GeocoderClient, GeocoderError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<GeocoderClient>,
    pub dataset: Arc<DatasetClient>,
    pub matcher: ServiceMatcher,
}

/// Configure all lookup-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/services/find", web::post().to(find_services));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find services endpoint
///
/// POST /api/v1/services/find
///
/// Request body:
/// ```json
/// {
///   "country": "string",
///   "city": "string",
///   "category": "string"
/// }
/// ```
///
/// Unresolvable locations and zero-match lookups are successful responses
/// carrying user-facing reply text; only collaborator transport failures
/// surface as errors.
async fn find_services(
    state: web::Data<AppState>,
    req: web::Json<FindServicesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_services request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = ServiceQuery {
        country: req.country.trim().to_string(),
        city: req.city.trim().to_string(),
        category: req.category.trim().to_string(),
    };

    tracing::info!(
        "Looking up \"{}\" near {}, {}",
        query.category,
        query.city,
        query.country
    );

    // Resolve the place name first; without an origin there is nothing to match
    let origin = match state.geocoder.resolve(&query.city, &query.country).await {
        Ok(coords) => coords,
        Err(GeocoderError::NotFound(place)) => {
            tracing::info!("Location not resolved: {}", place);
            return HttpResponse::Ok().json(FindServicesResponse {
                reply: format!(
                    "I couldn't find a place called {}, {}. \
                     Could you try a different city or spell it another way?",
                    query.city, query.country
                ),
                matched: 0,
                location_resolved: false,
            });
        }
        Err(e) => {
            tracing::error!("Geocoder failure for {}, {}: {}", query.city, query.country, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to resolve location".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    // Fetch the provider snapshot for the country; an empty table simply
    // yields the no-match reply downstream
    let records = match state.dataset.records_for(&query.country).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to fetch provider records for {}: {}", query.country, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch provider records".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    tracing::debug!("Matching against {} candidate records", records.len());

    // Run the matching pipeline
    let result = state.matcher.find_services(&query, origin, &records);

    tracing::info!(
        "Returning {} matches for \"{}\" (from {} candidates)",
        result.matched,
        query.category,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindServicesResponse {
        reply: result.reply,
        matched: result.matched,
        location_resolved: true,
    })
}
