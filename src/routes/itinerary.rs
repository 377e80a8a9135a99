use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::models::itinerary::{ItineraryRequest, ItineraryResponse};
use crate::routes::AppState;

/*
    /api/itinerary
*/
pub async fn create(
    state: web::Data<AppState>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();
    let city = request.city.trim().to_string();

    if city.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "City is required" }));
    }
    if request.days == 0 || request.days > state.max_trip_days {
        return HttpResponse::BadRequest().json(json!({
            "error": format!("Days must be between 1 and {}", state.max_trip_days)
        }));
    }

    log::info!("Planning {} day itinerary for {}", request.days, city);

    let pool = state.fetcher.fetch_pool(&city).await;
    if pool.is_empty() {
        log::warn!("No venues found for {}", city);
    }

    let itinerary = state.builder.build(request.days, pool);

    HttpResponse::Ok().json(ItineraryResponse {
        city,
        days: request.days,
        generated_at: Utc::now(),
        itinerary,
    })
}
