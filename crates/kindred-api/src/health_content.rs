use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::info;

use kindred_store::StoreError;
use kindred_types::api::HealthContentQuery;
use kindred_types::models::{HealthContent, HealthContentPatch, NewHealthContent};

use crate::error::ApiError;
use crate::middleware::AdminClaims;
use crate::state::AppState;
use crate::validation::{parse_id, parse_payload, parse_query};

const INVALID: &str = "Invalid content data";

fn not_found() -> ApiError {
    ApiError::NotFound("Content not found")
}

/// GET /api/health-content[?status=]
pub async fn list_health_content(
    State(state): State<AppState>,
    query: Result<Query<HealthContentQuery>, QueryRejection>,
) -> Result<Json<Vec<HealthContent>>, ApiError> {
    let query = parse_query(query);
    let content = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(status) => state.store.health_content_by_status(status)?,
        None => state.store.list_health_content()?,
    };
    Ok(Json(content))
}

/// GET /api/health-content/{id}
pub async fn get_health_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HealthContent>, ApiError> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    state
        .store
        .health_content_by_id(id)?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/health-content
pub async fn create_health_content(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    payload: Result<Json<NewHealthContent>, JsonRejection>,
) -> Result<Json<HealthContent>, ApiError> {
    let new = parse_payload(payload, INVALID)?;
    let content = state.store.create_health_content(new)?;
    info!(content_id = content.id, admin = %claims.username, "Health content created");
    Ok(Json(content))
}

/// PATCH /api/health-content/{id}
pub async fn update_health_content(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    Path(id): Path<String>,
    payload: Result<Json<HealthContentPatch>, JsonRejection>,
) -> Result<Json<HealthContent>, ApiError> {
    let patch = parse_payload(payload, INVALID)?;
    let id = parse_id(&id).ok_or_else(not_found)?;

    let content = state
        .store
        .update_health_content(id, patch)
        .map_err(|e| match e {
            StoreError::NotFound { .. } => not_found(),
            other => other.into(),
        })?;

    info!(content_id = content.id, admin = %claims.username, "Health content updated");
    Ok(Json(content))
}
