use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::warn;

use kindred_types::api::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified admin identity for the current request.
///
/// Taking this as a handler argument gates the route: a missing bearer token
/// answers 403 "No token provided", a bad or expired one 403 "Invalid Token".
/// It runs before the body extractor, so the payload is never looked at for
/// unauthenticated requests.
#[derive(Debug, Clone)]
pub struct AdminClaims(pub Claims);

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        let claims = decode_token(token, &state.tokens.secret).map_err(|e| {
            warn!("Rejected admin token: {}", e);
            ApiError::InvalidToken
        })?;

        Ok(Self(claims))
    }
}

/// Verify signature and, when present, expiry.
pub fn decode_token(token: &str, secret: &str) -> jsonwebtoken::errors::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    // exp is optional: tokens only carry it when a lifetime is configured
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
}
