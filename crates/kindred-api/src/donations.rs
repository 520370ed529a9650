use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info};

use kindred_payments::PaymentIntentRequest;
use kindred_types::api::PaymentIntentResponse;
use kindred_types::models::{Donation, NewDonation};

use crate::error::ApiError;
use crate::middleware::AdminClaims;
use crate::state::AppState;
use crate::validation::parse_payload;

const INVALID: &str = "Invalid donation data";

/// POST /api/donations/create-payment-intent
///
/// Starts a charge with the processor and hands the client secret back to the
/// browser, which completes the payment itself.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<NewDonation>, JsonRejection>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let donation = parse_payload(payload, INVALID)?;
    let request = PaymentIntentRequest::for_donation(&donation, &state.currency).map_err(|e| {
        debug!("Rejected donation: {}", e);
        ApiError::InvalidPayload(INVALID)
    })?;

    let intent = state.payments.create_payment_intent(request).await?;
    info!(intent = %intent.id, amount = donation.amount.get(), "Payment intent created");

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// POST /api/donations/confirm
///
/// Records the donation as submitted. The payment intent's status is not
/// checked against the processor.
pub async fn confirm_donation(
    State(state): State<AppState>,
    payload: Result<Json<NewDonation>, JsonRejection>,
) -> Result<Json<Donation>, ApiError> {
    let new = parse_payload(payload, INVALID)?;
    let donation = state.store.create_donation(new)?;
    info!(donation_id = donation.id, amount = donation.amount.get(), "Donation recorded");
    Ok(Json(donation))
}

/// GET /api/donations
pub async fn list_donations(
    State(state): State<AppState>,
    AdminClaims(_claims): AdminClaims,
) -> Result<Json<Vec<Donation>>, ApiError> {
    Ok(Json(state.store.list_donations()?))
}
