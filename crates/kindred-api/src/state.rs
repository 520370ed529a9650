use std::sync::Arc;

use chrono::Duration;

use kindred_payments::PaymentGateway;
use kindred_store::Store;

pub type AppState = Arc<AppStateInner>;

/// Everything a handler can reach. Built once by the caller and handed to
/// `router`, so tests can swap in their own store and gateway.
pub struct AppStateInner {
    pub store: Store,
    pub tokens: TokenSettings,
    pub payments: Arc<dyn PaymentGateway>,
    /// ISO currency code sent to the payment processor.
    pub currency: String,
}

#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    /// `None` issues tokens without an `exp` claim.
    pub ttl: Option<Duration>,
}
