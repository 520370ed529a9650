mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::*;

fn donation(amount: serde_json::Value) -> serde_json::Value {
    json!({ "name": "Ada", "email": "ada@example.org", "amount": amount, "message": "Thank you" })
}

#[tokio::test]
async fn payment_intent_amount_is_sent_in_minor_units() {
    let gateway = Arc::new(RecordingGateway::default());
    let app = app_with(gateway.clone());

    let (status, body) = post(&app, "/api/donations/create-payment-intent", donation(json!(50))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "clientSecret": "pi_test_secret_5000" }));

    let seen = gateway.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].amount, 5000);
    assert_eq!(seen[0].currency, "usd");
    assert_eq!(seen[0].email, "ada@example.org");
    assert_eq!(seen[0].name, "Ada");
}

#[tokio::test]
async fn invalid_donation_never_reaches_gateway() {
    let gateway = Arc::new(RecordingGateway::default());
    let app = app_with(gateway.clone());

    for amount in [json!(0), json!(-10), json!("fifty")] {
        let (status, body) =
            post(&app, "/api/donations/create-payment-intent", donation(amount)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid donation data" }));
    }

    assert!(gateway.seen().is_empty());
}

#[tokio::test]
async fn amount_too_large_for_minor_units_is_rejected() {
    let gateway = Arc::new(RecordingGateway::default());
    let app = app_with(gateway.clone());

    let amount = u64::MAX / 100 + 1;
    let (status, body) =
        post(&app, "/api/donations/create-payment-intent", donation(json!(amount))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid donation data" }));
    assert!(gateway.seen().is_empty());
}

#[tokio::test]
async fn gateway_failure_is_a_server_error() {
    let app = app_with(Arc::new(RecordingGateway::failing()));

    let (status, body) = post(&app, "/api/donations/create-payment-intent", donation(json!(20))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create payment intent" }));
}

#[tokio::test]
async fn confirm_records_donation_without_gateway() {
    let gateway = Arc::new(RecordingGateway::default());
    let app = app_with(gateway.clone());

    let (status, body) = post(&app, "/api/donations/confirm", donation(json!(75))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Ada",
            "email": "ada@example.org",
            "amount": 75,
            "message": "Thank you",
        })
    );
    assert!(gateway.seen().is_empty());

    let token = admin_token(&app).await;
    let (status, list) = send(&app, Method::GET, "/api/donations", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([body]));
}

#[tokio::test]
async fn confirm_rejects_missing_email() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/donations/confirm",
        json!({ "name": "Ada", "amount": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid donation data" }));
}

#[tokio::test]
async fn donation_list_is_admin_only() {
    let app = app();
    let (status, _) = get(&app, "/api/donations").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
