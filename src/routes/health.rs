use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::routes::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let search_result = check_search_provider(&state);
    health
        .services
        .insert("yelp".to_string(), search_result.clone());

    if search_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_search_provider(state: &AppState) -> ServiceStatus {
    // Only checks the key is present, no request goes out
    match &state.api_key_hint {
        Some(hint) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Yelp API key configured ({})", hint)),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("YELP_API_KEY not configured".to_string()),
        },
    }
}
