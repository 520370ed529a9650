//! Resources and partners.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::info;

use kindred_types::api::ResourceQuery;
use kindred_types::models::{NewPartner, NewResource, Partner, Resource};

use crate::error::ApiError;
use crate::middleware::AdminClaims;
use crate::state::AppState;
use crate::validation::{parse_payload, parse_query};

/// GET /api/resources[?category=]
pub async fn list_resources(
    State(state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let query = parse_query(query);
    let resources = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => state.store.resources_by_category(category)?,
        None => state.store.list_resources()?,
    };
    Ok(Json(resources))
}

/// POST /api/resources
pub async fn create_resource(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    payload: Result<Json<NewResource>, JsonRejection>,
) -> Result<Json<Resource>, ApiError> {
    let new = parse_payload(payload, "Invalid resource data")?;
    let resource = state.store.create_resource(new)?;
    info!(resource_id = resource.id, admin = %claims.username, "Resource created");
    Ok(Json(resource))
}

/// GET /api/partners
pub async fn list_partners(State(state): State<AppState>) -> Result<Json<Vec<Partner>>, ApiError> {
    Ok(Json(state.store.list_partners()?))
}

/// POST /api/partners
pub async fn create_partner(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    payload: Result<Json<NewPartner>, JsonRejection>,
) -> Result<Json<Partner>, ApiError> {
    let new = parse_payload(payload, "Invalid partner data")?;
    let partner = state.store.create_partner(new)?;
    info!(partner_id = partner.id, admin = %claims.username, "Partner created");
    Ok(Json(partner))
}
