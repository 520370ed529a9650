mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use kindred_api::{AppState, AppStateInner, TokenSettings};
use kindred_payments::StripeGateway;
use kindred_store::Store;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "kindred=debug,kindred_api=debug,kindred_store=debug,kindred_payments=debug,tower_http=debug"
                    .into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    for name in config.insecure_defaults() {
        warn!("{} is unset; using the built-in development value", name);
    }
    if config.token_ttl_hours.is_none() {
        warn!("KINDRED_TOKEN_TTL_HOURS is unset; admin tokens will never expire");
    }

    let ttl = config
        .token_ttl_hours
        .map(|hours| {
            i64::try_from(hours)
                .ok()
                .and_then(chrono::Duration::try_hours)
                .context("KINDRED_TOKEN_TTL_HOURS is too large")
        })
        .transpose()?;

    let payments = StripeGateway::new(
        &config.stripe_secret_key,
        &config.stripe_api_base,
        config.stripe_timeout,
    )?;

    let state: AppState = Arc::new(AppStateInner {
        store: Store::new(),
        tokens: TokenSettings {
            secret: config.jwt_secret.clone(),
            ttl,
        },
        payments: Arc::new(payments),
        currency: config.currency.clone(),
    });

    let app = kindred_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Kindred server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
