use actix_web::{web, App};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use city_itinerary_api::config::AppConfig;
use city_itinerary_api::models::venue::Venue;
use city_itinerary_api::routes::{self, AppState};
use city_itinerary_api::services::itinerary_builder::{ItineraryBuilder, ItineraryConfig};
use city_itinerary_api::services::venue_fetcher::VenueFetcher;
use city_itinerary_api::services::yelp_service::{SearchError, SearchProvider};

/// Serves canned venues per category. Unknown categories come back empty,
/// categories listed in `failing` return a provider error.
#[derive(Default)]
pub struct StubProvider {
    pub results: HashMap<String, Vec<Venue>>,
    pub failing: Vec<String>,
}

impl StubProvider {
    pub fn with(mut self, category: &str, ids: &[&str]) -> Self {
        let venues = ids
            .iter()
            .map(|id| Venue::new(*id, format!("Venue {}", id)).with_category(category, category))
            .collect();
        self.results.insert(category.to_string(), venues);
        self
    }

    pub fn failing(mut self, category: &str) -> Self {
        self.failing.push(category.to_string());
        self
    }
}

#[async_trait]
impl SearchProvider for StubProvider {
    async fn search(
        &self,
        _location: &str,
        category: &str,
        limit: u32,
    ) -> Result<Vec<Venue>, SearchError> {
        if self.failing.iter().any(|failing| failing == category) {
            return Err(SearchError::StatusError(503, "unavailable".to_string()));
        }
        let venues = self.results.get(category).cloned().unwrap_or_default();
        Ok(venues.into_iter().take(limit as usize).collect())
    }
}

pub fn sample_provider() -> StubProvider {
    StubProvider::default()
        .with("cafes", &["c1", "c2", "c3", "c4", "c5"])
        .with("restaurants", &["r1", "r2", "r3", "r4", "r5"])
        .with("arts", &["gallery", "theatre"])
        .with("landmarks", &["capitol", "gallery"])
        .with("parks", &["zilker"])
}

/// Config with nothing listening at the provider URL.
pub fn offline_config(yelp_api_key: Option<&str>) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        yelp_api_key: yelp_api_key.map(str::to_string),
        yelp_api_url: "http://127.0.0.1:9".to_string(),
        max_alternates: 3,
        venue_limit: 10,
        max_trip_days: 14,
    }
}

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    pub fn new(provider: StubProvider) -> Self {
        let state = web::Data::new(AppState {
            fetcher: VenueFetcher::new(Arc::new(provider)),
            builder: ItineraryBuilder::with_config(ItineraryConfig { max_alternates: 3 }),
            max_trip_days: 14,
            api_key_hint: Some("abcd***wxyz".to_string()),
        });

        Self { state }
    }

    /// State wired the way the binary wires it, talking to a real `YelpClient`.
    pub fn from_config(config: &AppConfig) -> Self {
        let state = AppState::from_config(config).unwrap();
        Self {
            state: web::Data::new(state),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure)
    }
}
