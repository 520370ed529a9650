use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::{info, warn};

use kindred_types::api::{
    AdminSummary, Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use kindred_types::models::{Admin, NewAdmin};

use crate::error::ApiError;
use crate::state::{AppState, TokenSettings};

/// POST /api/admin/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let (Some(username), Some(password)) = (present(req.username), present(req.password)) else {
        return Err(ApiError::CredentialsRequired);
    };

    let password_hash = hash_password(&password)?;
    let admin = state.store.create_admin(NewAdmin {
        username,
        password_hash,
    })?;

    info!(admin_id = admin.id, username = %admin.username, "Admin registered");

    Ok(Json(RegisterResponse {
        success: true,
        admin: AdminSummary {
            id: admin.id,
            username: admin.username,
        },
    }))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let Some(admin) = state.store.find_admin_by_username(&username)? else {
        warn!(username = %username, "Login for unknown admin");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&password, &admin.password_hash)? {
        warn!(admin_id = admin.id, "Login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&state.tokens, admin.id, &admin.username)?;
    info!(admin_id = admin.id, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}

/// GET /api/admins
///
/// Returns full records, password hashes included.
pub async fn list_admins(State(state): State<AppState>) -> Result<Json<Vec<Admin>>, ApiError> {
    Ok(Json(state.store.list_admins()?))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Argon2id with a fresh random salt, PHC string format.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only if the stored hash is unreadable.
pub fn verify_password(password: &str, password_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| anyhow::anyhow!("stored password hash is malformed: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn create_token(settings: &TokenSettings, id: u64, username: &str) -> anyhow::Result<String> {
    let now = Utc::now();
    let claims = Claims {
        id,
        username: username.to_string(),
        iat: now.timestamp() as u64,
        exp: settings.ttl.map(|ttl| (now + ttl).timestamp() as u64),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )?;

    Ok(token)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::middleware::decode_token;

    fn settings(ttl: Option<Duration>) -> TokenSettings {
        TokenSettings {
            secret: "test-secret".into(),
            ttl,
        }
    }

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = hash_password("pw").unwrap();
        let b = hash_password("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-hash").is_err());
    }

    #[test]
    fn token_without_ttl_has_no_expiry() {
        let token = create_token(&settings(None), 7, "root").unwrap();
        let claims = decode_token(&token, "test-secret").unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.username, "root");
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn token_with_ttl_carries_expiry() {
        let token = create_token(&settings(Some(Duration::hours(1))), 7, "root").unwrap();
        let claims = decode_token(&token, "test-secret").unwrap();
        let exp = claims.exp.unwrap();
        assert!(exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = create_token(&settings(Some(Duration::hours(-2))), 7, "root").unwrap();
        assert!(decode_token(&token, "test-secret").is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(&settings(None), 7, "root").unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }
}
