pub mod auth;
pub mod content;
pub mod donations;
pub mod error;
pub mod health_content;
pub mod middleware;
pub mod router;
pub mod state;
pub mod validation;
pub mod volunteers;

pub use error::ApiError;
pub use router::router;
pub use state::{AppState, AppStateInner, TokenSettings};
