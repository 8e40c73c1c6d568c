use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::advisor::matching::readiness;
use crate::advisor::policy::{EnginePolicy, TimeToReadyPolicy};
use crate::advisor::AdvisorError;
use crate::catalog::Catalog;
use crate::models::career::SkillTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub career_id: String,
    pub career_title: String,
    pub readiness_pct: f64,
    pub missing_by_level: BTreeMap<SkillTier, Vec<String>>,
    pub priority_skills: Vec<String>,
    pub total_missing: usize,
    pub time_to_ready: String,
}

/// Skill gap for one career. Fails only when the career id is unknown.
pub fn analyze_gap(
    career_id: &str,
    user_skills: &[String],
    catalog: &Catalog,
    policy: &EnginePolicy,
) -> Result<GapReport, AdvisorError> {
    let career = catalog
        .career(career_id)
        .ok_or_else(|| AdvisorError::CareerNotFound(career_id.to_string()))?;

    let ready = readiness(user_skills, career, policy.priority_missing_limit);
    let total_missing = ready.total_missing();

    Ok(GapReport {
        career_id: career.id.clone(),
        career_title: career.title.clone(),
        readiness_pct: ready.readiness_pct,
        missing_by_level: ready.missing_by_tier,
        priority_skills: ready.priority_missing,
        total_missing,
        time_to_ready: time_to_ready_label(total_missing, &policy.time_to_ready).to_string(),
    })
}

pub fn time_to_ready_label(total_missing: usize, policy: &TimeToReadyPolicy) -> &str {
    policy
        .buckets
        .iter()
        .find(|bucket| total_missing <= bucket.max_missing)
        .map(|bucket| bucket.label.as_str())
        .unwrap_or(policy.beyond.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::matching::tests::{make_career, skills};
    use crate::catalog::defaults::builtin_catalog;
    use std::collections::HashMap;

    #[test]
    fn test_unknown_career_is_not_found() {
        let err = analyze_gap("astronaut", &[], &builtin_catalog(), &EnginePolicy::default())
            .unwrap_err();
        assert!(matches!(err, AdvisorError::CareerNotFound(ref id) if id == "astronaut"));
    }

    #[test]
    fn test_gap_report_for_builtin_career() {
        let report = analyze_gap(
            "ui_ux_designer",
            &skills(&["Figma_Basics", "wireframing"]),
            &builtin_catalog(),
            &EnginePolicy::default(),
        )
        .unwrap();

        assert_eq!(report.career_title, "UI/UX Designer");
        assert_eq!(report.readiness_pct, 22.2);
        assert_eq!(
            report.priority_skills,
            skills(&["ux_principles", "visual_design_basics"])
        );
        assert_eq!(report.missing_by_level[&SkillTier::L2], skills(&["prototyping", "user_research"]));
        assert_eq!(report.total_missing, 7);
        assert_eq!(report.time_to_ready, "6-12 months");
    }

    #[test]
    fn test_gap_with_no_skills_lists_everything() {
        let catalog = Catalog::new(vec![make_career("abc", &["a", "b"], &["c"], &[])], HashMap::new());
        let report = analyze_gap("abc", &[], &catalog, &EnginePolicy::default()).unwrap();
        assert_eq!(report.readiness_pct, 0.0);
        assert_eq!(report.total_missing, 3);
        assert_eq!(report.time_to_ready, "2-3 months");
        assert!(report.missing_by_level[&SkillTier::L3].is_empty());
    }

    #[test]
    fn test_time_to_ready_buckets() {
        let p = TimeToReadyPolicy::default();
        assert_eq!(time_to_ready_label(0, &p), "2-3 months");
        assert_eq!(time_to_ready_label(3, &p), "2-3 months");
        assert_eq!(time_to_ready_label(4, &p), "4-6 months");
        assert_eq!(time_to_ready_label(6, &p), "4-6 months");
        assert_eq!(time_to_ready_label(7, &p), "6-12 months");
    }

    #[test]
    fn test_missing_by_level_serializes_tier_keys() {
        let catalog = Catalog::new(vec![make_career("abc", &["a"], &["b"], &["c"])], HashMap::new());
        let report = analyze_gap("abc", &skills(&["b"]), &catalog, &EnginePolicy::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["missing_by_level"]["L1"][0], "a");
        assert_eq!(json["missing_by_level"]["L2"].as_array().unwrap().len(), 0);
    }
}
