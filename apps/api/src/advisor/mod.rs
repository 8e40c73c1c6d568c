// Career advisor engine.
// Implements: skill matching, confidence scoring and ranking, gap analysis, roadmap generation.
// Pure functions over the shared catalog and policy. No I/O.

pub mod assess;
pub mod gap;
pub mod handlers;
pub mod matching;
pub mod policy;
pub mod recommend;
pub mod roadmap;
pub mod scoring;

use std::sync::Arc;

use thiserror::Error;

use crate::advisor::assess::AssessResponse;
use crate::advisor::gap::GapReport;
use crate::advisor::policy::EnginePolicy;
use crate::advisor::recommend::RecommendationItem;
use crate::advisor::roadmap::{RoadmapPlan, RoadmapRequest};
use crate::catalog::Catalog;
use crate::models::user::UserProfile;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Career '{0}' not found")]
    CareerNotFound(String),
}

/// The engine with its reference data injected. Cheap to clone; the catalog
/// and policy are shared and never mutated after startup.
#[derive(Debug, Clone)]
pub struct Advisor {
    catalog: Arc<Catalog>,
    policy: Arc<EnginePolicy>,
}

impl Advisor {
    pub fn new(catalog: Arc<Catalog>, policy: Arc<EnginePolicy>) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn assess(&self, profile: &UserProfile) -> AssessResponse {
        assess::assess(profile, self.policy.commitment_hours)
    }

    pub fn recommend(&self, profile: &UserProfile) -> Vec<RecommendationItem> {
        recommend::recommend(profile, &self.catalog, &self.policy)
    }

    pub fn gap(&self, career_id: &str, skills: &[String]) -> Result<GapReport, AdvisorError> {
        gap::analyze_gap(career_id, skills, &self.catalog, &self.policy)
    }

    pub fn roadmap(&self, request: &RoadmapRequest) -> Result<RoadmapPlan, AdvisorError> {
        roadmap::build_roadmap(request, &self.catalog, &self.policy)
    }
}
