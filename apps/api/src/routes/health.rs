use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner with the number of careers loaded.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog_source = if state.config.catalog_path.is_some() {
        "file"
    } else {
        "builtin"
    };

    Json(json!({
        "message": "Career Advisor API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "careers_available": state.advisor.catalog().len(),
        "catalog_source": catalog_source
    }))
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.advisor.catalog();
    Json(json!({
        "status": "ok",
        "service": "career-api",
        "careers_loaded": catalog.len(),
        "market_data_available": !catalog.market.is_empty(),
        "quiz_questions": catalog.quiz.len(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
