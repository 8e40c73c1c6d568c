//! Axum route handlers for the Advisor API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::advisor::assess::AssessResponse;
use crate::advisor::gap::GapReport;
use crate::advisor::recommend::RecommendationItem;
use crate::advisor::roadmap::{RoadmapPlan, RoadmapRequest};
use crate::catalog::QuizQuestion;
use crate::errors::{AppError, AppJson};
use crate::models::user::UserProfile;
use crate::state::AppState;

const MIN_HOURS_PER_WEEK: u32 = 1;
const MAX_HOURS_PER_WEEK: u32 = 40;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GapRequest {
    pub career_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub items: Vec<RecommendationItem>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    pub total_questions: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assess
pub async fn handle_assess(
    State(state): State<AppState>,
    AppJson(profile): AppJson<UserProfile>,
) -> Result<Json<AssessResponse>, AppError> {
    validate_hours(profile.hours_per_week)?;
    validate_budget(profile.budget_per_month)?;

    Ok(Json(state.advisor.assess(&profile)))
}

/// POST /api/v1/recommend
///
/// Scores every career in the catalog and returns the top ranked items.
pub async fn handle_recommend(
    State(state): State<AppState>,
    AppJson(profile): AppJson<UserProfile>,
) -> Result<Json<RecommendResponse>, AppError> {
    validate_hours(profile.hours_per_week)?;
    validate_budget(profile.budget_per_month)?;

    let items = state.advisor.recommend(&profile);
    info!(
        "Recommended {} careers (top: {})",
        items.len(),
        items.first().map(|i| i.career_id.as_str()).unwrap_or("none")
    );

    Ok(Json(RecommendResponse {
        items,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/gap
pub async fn handle_gap(
    State(state): State<AppState>,
    AppJson(request): AppJson<GapRequest>,
) -> Result<Json<GapReport>, AppError> {
    validate_career_id(&request.career_id)?;

    let report = state.advisor.gap(&request.career_id, &request.skills)?;
    debug!(
        career_id = %report.career_id,
        readiness = report.readiness_pct,
        missing = report.total_missing,
        "Gap analysis complete"
    );

    Ok(Json(report))
}

/// POST /api/v1/roadmap
///
/// Always eight weeks. Budget only changes which resources are suggested.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    AppJson(request): AppJson<RoadmapRequest>,
) -> Result<Json<RoadmapPlan>, AppError> {
    validate_career_id(&request.career_id)?;
    validate_hours(request.hours_per_week)?;
    validate_budget(request.budget_per_month)?;

    let plan = state.advisor.roadmap(&request)?;
    debug!(career_id = %plan.career_id, "Roadmap generated");

    Ok(Json(plan))
}

/// GET /quiz
pub async fn handle_quiz(State(state): State<AppState>) -> Json<QuizResponse> {
    let questions = state.advisor.catalog().quiz.clone();
    Json(QuizResponse {
        total_questions: questions.len(),
        questions,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Boundary validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_hours(hours_per_week: u32) -> Result<(), AppError> {
    if !(MIN_HOURS_PER_WEEK..=MAX_HOURS_PER_WEEK).contains(&hours_per_week) {
        return Err(AppError::Validation(format!(
            "hours_per_week must be between {MIN_HOURS_PER_WEEK} and {MAX_HOURS_PER_WEEK}"
        )));
    }
    Ok(())
}

fn validate_budget(budget_per_month: f64) -> Result<(), AppError> {
    if !budget_per_month.is_finite() || budget_per_month < 0.0 {
        return Err(AppError::Validation(
            "budget_per_month must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn validate_career_id(career_id: &str) -> Result<(), AppError> {
    if career_id.trim().is_empty() {
        return Err(AppError::Validation("career_id cannot be empty".to_string()));
    }
    Ok(())
}
