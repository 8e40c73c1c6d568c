mod advisor;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::Advisor;
use crate::catalog::loader::{load_catalog, load_policy};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data is loaded once and shared read-only for the process lifetime
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    if catalog.is_empty() {
        warn!("Catalog has no careers; recommendations will be empty");
    }
    let policy = load_policy(config.policy_path.as_deref())?;
    info!(
        "Engine policy: confidence weights {:?}, timeline {:?}",
        policy.confidence_weights, policy.timeline_months
    );

    let state = AppState {
        advisor: Advisor::new(Arc::new(catalog), Arc::new(policy)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
