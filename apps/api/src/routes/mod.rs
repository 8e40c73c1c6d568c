pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/quiz", get(handlers::handle_quiz))
        // Advisor API
        .route("/api/v1/assess", post(handlers::handle_assess))
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .route("/api/v1/gap", post(handlers::handle_gap))
        .route("/api/v1/roadmap", post(handlers::handle_roadmap))
        .with_state(state)
}
