use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::{PaymentError, PaymentGateway, PaymentIntent, PaymentIntentRequest};

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
/// API version the request and response shapes below were written against.
pub const STRIPE_VERSION: &str = "2025-02-24.acacia";

#[derive(Debug, Deserialize)]
struct IntentBody {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Stripe REST client for the one call the donation flow needs.
pub struct StripeGateway {
    http_client: Client,
    secret_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(secret_key: &str, api_base: &str, timeout: Duration) -> Result<Self, PaymentError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            secret_key: secret_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents", self.api_base);
        let amount = request.amount.to_string();
        let form = [
            ("amount", amount.as_str()),
            ("currency", request.currency.as_str()),
            ("metadata[email]", request.email.as_str()),
            ("metadata[name]", request.name.as_str()),
        ];

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .header("Stripe-Version", STRIPE_VERSION)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!("Stripe request failed: {}", e);
                PaymentError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.to_string());
            error!(status = status.as_u16(), "Stripe rejected payment intent: {}", message);
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntentBody = response.json().await?;
        debug!(intent = %body.id, amount = request.amount, "Payment intent created");

        let client_secret = body.client_secret.ok_or(PaymentError::MissingClientSecret)?;
        Ok(PaymentIntent {
            id: body.id,
            client_secret,
        })
    }
}
