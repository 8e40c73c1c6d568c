//! Roadmap generator: fixed-length weekly plan from per-career focus templates.
//!
//! Plan length never depends on hours or budget. Budget only switches the
//! resource mix between free and paid placeholders.

use serde::{Deserialize, Serialize};

use crate::advisor::policy::{EnginePolicy, RoadmapPolicy};
use crate::advisor::AdvisorError;
use crate::catalog::Catalog;
use crate::models::career::CareerProfile;
use crate::models::user::default_hours_per_week;

pub const ROADMAP_WEEKS: usize = 8;
const FREE: &str = "Free";

const INTERVIEW_QUESTIONS: [&str; 5] = [
    "Tell me about a recent project you worked on.",
    "How do you approach learning new technologies?",
    "Describe a challenging problem you solved.",
    "Why are you interested in this field?",
    "How do you stay updated with industry trends?",
];

const SUCCESS_METRICS: [&str; 4] = [
    "Complete all weekly projects",
    "Build a professional portfolio",
    "Practice mock interviews",
    "Network with industry professionals",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Video,
    Practice,
    Course,
    Book,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: u32,
    pub focus: String,
    pub resources: Vec<Resource>,
    pub practice: String,
    pub mini_project: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPlan {
    pub career_id: String,
    pub career_title: String,
    pub hours_per_week: u32,
    pub learning_style: Option<String>,
    pub weeks: Vec<WeekPlan>,
    pub interview_questions: Vec<String>,
    pub resume_bullets: Vec<String>,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    pub career_id: String,
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: u32,
    #[serde(default, alias = "budget_inr_per_month")]
    pub budget_per_month: f64,
    #[serde(default)]
    pub learning_style: Option<String>,
}

/// Looks up the career and expands its plan.
pub fn build_roadmap(
    request: &RoadmapRequest,
    catalog: &Catalog,
    policy: &EnginePolicy,
) -> Result<RoadmapPlan, AdvisorError> {
    let career = catalog
        .career(&request.career_id)
        .ok_or_else(|| AdvisorError::CareerNotFound(request.career_id.clone()))?;

    Ok(generate_roadmap(
        career,
        request.hours_per_week,
        request.budget_per_month,
        request.learning_style.clone(),
        &policy.roadmap,
    ))
}

pub fn generate_roadmap(
    career: &CareerProfile,
    hours_per_week: u32,
    budget_per_month: f64,
    learning_style: Option<String>,
    policy: &RoadmapPolicy,
) -> RoadmapPlan {
    let weeks: Vec<WeekPlan> = focus_areas(&career.id, policy)
        .into_iter()
        .enumerate()
        .map(|(i, focus)| WeekPlan {
            week: i as u32 + 1,
            resources: week_resources(&focus, budget_per_month, policy),
            practice: format!("Complete 3-4 exercises on {focus}"),
            mini_project: format!("Build a small project demonstrating {focus}"),
            focus,
        })
        .collect();

    let resume_bullets = vec![
        format!(
            "Completed intensive {}-week {} program",
            weeks.len(),
            career.title
        ),
        format!("Built portfolio with {} practical projects", weeks.len()),
        "Developed industry-relevant skills and practical experience".to_string(),
    ];

    RoadmapPlan {
        career_id: career.id.clone(),
        career_title: career.title.clone(),
        hours_per_week,
        learning_style,
        weeks,
        interview_questions: INTERVIEW_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        resume_bullets,
        success_metrics: SUCCESS_METRICS.iter().map(|m| m.to_string()).collect(),
    }
}

/// Exactly `ROADMAP_WEEKS` labels: the career's template, cut or padded with
/// generic labels, or the generic sequence when the career has no template.
pub fn focus_areas(career_id: &str, policy: &RoadmapPolicy) -> Vec<String> {
    let template = policy.focus.get(career_id).map(Vec::as_slice).unwrap_or(&[]);
    (0..ROADMAP_WEEKS)
        .map(|i| {
            template
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Week {} Focus", i + 1))
        })
        .collect()
}

fn week_resources(focus: &str, budget_per_month: f64, policy: &RoadmapPolicy) -> Vec<Resource> {
    if budget_per_month <= 0.0 {
        vec![
            Resource {
                kind: ResourceKind::Video,
                name: format!("YouTube tutorials: {focus}"),
                cost: FREE.to_string(),
            },
            Resource {
                kind: ResourceKind::Practice,
                name: format!("Free exercises for {focus}"),
                cost: FREE.to_string(),
            },
        ]
    } else {
        vec![
            Resource {
                kind: ResourceKind::Course,
                name: format!("Online course: {focus}"),
                cost: policy.course_cost.clone(),
            },
            Resource {
                kind: ResourceKind::Book,
                name: format!("Reference book: {focus}"),
                cost: policy.book_cost.clone(),
            },
        ]
    }
}
