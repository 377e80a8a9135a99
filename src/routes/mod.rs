use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::itinerary_builder::{ItineraryBuilder, ItineraryConfig};
use crate::services::venue_fetcher::VenueFetcher;
use crate::services::yelp_service::{SearchError, YelpClient};

pub mod health;
pub mod itinerary;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub fetcher: VenueFetcher,
    pub builder: ItineraryBuilder,
    pub max_trip_days: u32,
    pub api_key_hint: Option<String>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        let yelp =
            YelpClient::with_optional_key(&config.yelp_api_url, config.yelp_api_key.clone())?;
        log::info!("Search provider at {}", yelp.endpoint());

        let api_key_hint = config.masked_api_key();
        if api_key_hint.is_none() {
            log::warn!("YELP_API_KEY not set, itineraries will have no venues");
        }

        Ok(Self {
            fetcher: VenueFetcher::with_limit(Arc::new(yelp), config.venue_limit),
            builder: ItineraryBuilder::with_config(ItineraryConfig {
                max_alternates: config.max_alternates,
            }),
            max_trip_days: config.max_trip_days,
            api_key_hint,
        })
    }
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    error::InternalError::from_response(err, response).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(web::scope("/api").route("/itinerary", web::post().to(itinerary::create)));
}
