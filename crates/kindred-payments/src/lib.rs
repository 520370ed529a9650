pub mod stripe;

use async_trait::async_trait;
use thiserror::Error;

use kindred_types::models::NewDonation;

pub use stripe::StripeGateway;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("amount {0} overflows minor units")]
    InvalidAmount(u64),
    #[error("payment processor unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("payment processor rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("payment intent has no client secret")]
    MissingClientSecret,
}

/// Charge request in the processor's terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
    /// Amount in minor units (cents for USD).
    pub amount: u64,
    pub currency: String,
    pub email: String,
    pub name: String,
}

impl PaymentIntentRequest {
    pub fn for_donation(donation: &NewDonation, currency: &str) -> Result<Self, PaymentError> {
        Ok(Self {
            amount: to_minor_units(donation.amount.get())?,
            currency: currency.to_string(),
            email: donation.email.clone(),
            name: donation.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Creates payment intents with an external processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// Whole currency units to minor units (x100).
pub fn to_minor_units(amount: u64) -> Result<u64, PaymentError> {
    amount
        .checked_mul(100)
        .ok_or(PaymentError::InvalidAmount(amount))
}
