use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

use kindred_payments::PaymentError;
use kindred_store::StoreError;

/// Request failure. Validation and lookup failures answer with `{error}`,
/// credential and token failures with `{success: false, message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidPayload(&'static str),
    #[error("username and password required")]
    CredentialsRequired,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no token provided")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("payment gateway: {0}")]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Internal(e.into())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::CredentialsRequired => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::MissingToken | Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Payment(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the client. Never includes internal detail.
    pub fn body(&self) -> Value {
        match self {
            Self::InvalidPayload(msg) | Self::NotFound(msg) => json!({ "error": msg }),
            Self::CredentialsRequired => rejected("Username and password required"),
            Self::InvalidCredentials => rejected("Invalid credentials"),
            Self::MissingToken => rejected("No token provided"),
            Self::InvalidToken => rejected("Invalid Token"),
            Self::Payment(_) => json!({ "error": "Failed to create payment intent" }),
            Self::Internal(_) => json!({ "error": "Internal server error" }),
        }
    }
}

fn rejected(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Payment(e) => error!("Payment intent failed: {}", e),
            Self::Internal(e) => error!("Internal error: {:#}", e),
            _ => {}
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
