use crate::advisor::Advisor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Advisor engine holding the read-only catalog and policy.
    pub advisor: Advisor,
}
