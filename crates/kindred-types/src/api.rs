use serde::{Deserialize, Serialize};

// -- JWT Claims --

/// Claims carried by admin bearer tokens. `exp` is only present when the
/// server is configured with a token lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: u64,
    pub username: String,
    pub iat: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

// -- Auth --

/// Both fields are optional at the wire level so that a missing field can be
/// answered with the endpoint's own error body instead of a generic
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminSummary {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub admin: AdminSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

// -- Query strings --

#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthContentQuery {
    pub status: Option<String>,
}

// -- Donations --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
