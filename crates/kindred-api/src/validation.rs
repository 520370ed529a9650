use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::debug;

use kindred_types::validation::Validate;

use crate::error::ApiError;

/// Unwrap a JSON body and run its structural checks. Any failure becomes a
/// 400 carrying `message`; nothing has been written at that point.
pub fn parse_payload<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> Result<T, ApiError> {
    let Json(value) = payload.map_err(|rejection| {
        debug!("Rejected payload: {}", rejection.body_text());
        ApiError::InvalidPayload(message)
    })?;

    value.validate().map_err(|e| {
        debug!("Rejected payload: {}", e);
        ApiError::InvalidPayload(message)
    })?;

    Ok(value)
}

/// Unwrap an optional-filter query string. A query that does not parse
/// (a repeated key, say) applies no filter instead of failing the request.
pub fn parse_query<T: Default>(query: Result<Query<T>, QueryRejection>) -> T {
    match query {
        Ok(Query(value)) => value,
        Err(rejection) => {
            debug!("Ignoring query string: {}", rejection.body_text());
            T::default()
        }
    }
}

/// Path ids that are not positive integers cannot name a stored row.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok().filter(|id| *id > 0)
}
