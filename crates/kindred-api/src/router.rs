use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::state::AppState;
use crate::{auth, content, donations, health_content, volunteers};

/// Every HTTP route the site exposes. Routes that take `AdminClaims` require a
/// bearer token; the rest are public.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/admin/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/admins", get(auth::list_admins))
        .route(
            "/api/resources",
            get(content::list_resources).post(content::create_resource),
        )
        .route(
            "/api/partners",
            get(content::list_partners).post(content::create_partner),
        )
        .route(
            "/api/volunteers",
            get(volunteers::list_volunteers).post(volunteers::create_volunteer),
        )
        .route("/api/donations", get(donations::list_donations))
        .route(
            "/api/donations/create-payment-intent",
            post(donations::create_payment_intent),
        )
        .route("/api/donations/confirm", post(donations::confirm_donation))
        .route(
            "/api/health-content",
            get(health_content::list_health_content).post(health_content::create_health_content),
        )
        .route(
            "/api/health-content/{id}",
            get(health_content::get_health_content).patch(health_content::update_health_content),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
