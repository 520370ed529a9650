#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use kindred_api::{AppStateInner, TokenSettings, router};
use kindred_payments::{PaymentError, PaymentGateway, PaymentIntent, PaymentIntentRequest};
use kindred_store::Store;

pub const SECRET: &str = "test-secret";

/// Gateway double that records every request it sees.
#[derive(Default)]
pub struct RecordingGateway {
    pub requests: Mutex<Vec<PaymentIntentRequest>>,
    pub fail: bool,
}

impl RecordingGateway {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn seen(&self) -> Vec<PaymentIntentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(PaymentError::Rejected {
                status: 402,
                message: "Your card was declined.".into(),
            });
        }
        Ok(PaymentIntent {
            id: "pi_test".into(),
            client_secret: format!("pi_test_secret_{}", request.amount),
        })
    }
}

pub fn app_with(gateway: Arc<RecordingGateway>) -> Router {
    let state = Arc::new(AppStateInner {
        store: Store::new(),
        tokens: TokenSettings {
            secret: SECRET.into(),
            ttl: None,
        },
        payments: gateway,
        currency: "usd".into(),
    });
    router(state)
}

pub fn app() -> Router {
    app_with(Arc::new(RecordingGateway::default()))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, None, Some(body)).await
}

/// Register an admin and log in, returning the bearer token.
pub async fn admin_token(app: &Router) -> String {
    let creds = json!({ "username": "admin", "password": "s3cret-pass" });
    let (status, _) = post(app, "/api/admin/register", creds.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(app, "/api/login", creds).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
