use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use kindred_types::models::{NewVolunteer, Volunteer};

use crate::error::ApiError;
use crate::middleware::AdminClaims;
use crate::state::AppState;
use crate::validation::parse_payload;

/// POST /api/volunteers
pub async fn create_volunteer(
    State(state): State<AppState>,
    payload: Result<Json<NewVolunteer>, JsonRejection>,
) -> Result<Json<Volunteer>, ApiError> {
    let new = parse_payload(payload, "Invalid volunteer data")?;
    let volunteer = state.store.create_volunteer(new)?;
    info!(volunteer_id = volunteer.id, "Volunteer signed up");
    Ok(Json(volunteer))
}

/// GET /api/volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
    AdminClaims(_claims): AdminClaims,
) -> Result<Json<Vec<Volunteer>>, ApiError> {
    Ok(Json(state.store.list_volunteers()?))
}
