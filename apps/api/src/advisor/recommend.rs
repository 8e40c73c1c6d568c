//! Ranking: score every career in the catalog, order by
//! `(confidence_pct, readiness_pct)` descending, keep the top few.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisor::matching::{readiness, skill_match};
use crate::advisor::policy::{EnginePolicy, RationalePolicy, TimelineMonths};
use crate::advisor::scoring::{confidence, hours_score, interest_match, market_score};
use crate::catalog::Catalog;
use crate::models::career::{CareerProfile, MarketSignal};
use crate::models::user::UserProfile;

const NO_MARKET_NOTE: &str = "High growth field with good opportunities.";
const MARKET_NOTE_EMPLOYERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub career_id: String,
    pub title: String,
    pub confidence_pct: f64,
    pub readiness_pct: f64,
    /// Weighted skill match in [0, 1], four decimals.
    pub skill_match: f64,
    pub rationale: String,
    pub missing_skills: Vec<String>,
    pub market_note: String,
    pub alternatives: Vec<String>,
    pub estimated_timeline_months: u32,
    pub salary_range: String,
}

/// Scores one career against the profile.
pub fn score_career(
    profile: &UserProfile,
    career: &CareerProfile,
    catalog: &Catalog,
    policy: &EnginePolicy,
) -> RecommendationItem {
    let signal = catalog.market_signal(&career.id);

    let matched = skill_match(&profile.skills, career, &policy.tier_weights);
    let market = market_score(signal, policy.default_demand_score);
    let hours = hours_score(profile.hours_per_week, &policy.hours);
    let interest = interest_match(&profile.interest_text(), &career.id, &policy.interest);
    let confidence_pct = confidence(matched, market, hours, interest, &policy.confidence_weights);

    let ready = readiness(&profile.skills, career, policy.priority_missing_limit);

    RecommendationItem {
        career_id: career.id.clone(),
        title: career.title.clone(),
        confidence_pct,
        readiness_pct: ready.readiness_pct,
        skill_match: (matched * 10_000.0).round() / 10_000.0,
        rationale: build_rationale(
            confidence_pct,
            profile.hours_per_week,
            policy.commitment_hours,
            &policy.rationale,
        ),
        missing_skills: ready.priority_missing,
        market_note: market_note(signal),
        alternatives: policy.alternatives_for(&career.id).to_vec(),
        estimated_timeline_months: estimate_timeline_months(
            ready.readiness_pct,
            &policy.timeline_months,
        ),
        salary_range: career.salary_range.clone(),
    }
}

/// Scores the full catalog and returns the top `policy.recommendation_limit` items.
pub fn recommend(
    profile: &UserProfile,
    catalog: &Catalog,
    policy: &EnginePolicy,
) -> Vec<RecommendationItem> {
    let mut items: Vec<RecommendationItem> = catalog
        .careers
        .iter()
        .map(|career| score_career(profile, career, catalog, policy))
        .collect();

    rank(&mut items);

    for item in &items {
        debug!(
            career_id = %item.career_id,
            confidence = item.confidence_pct,
            readiness = item.readiness_pct,
            "Scored career"
        );
    }

    items.truncate(policy.recommendation_limit);
    items
}

/// Sorts descending by confidence, then readiness. Stable, so full ties keep
/// catalog order.
pub fn rank(items: &mut [RecommendationItem]) {
    items.sort_by(|a, b| compare_rank(b, a));
}

fn compare_rank(a: &RecommendationItem, b: &RecommendationItem) -> Ordering {
    a.confidence_pct
        .total_cmp(&b.confidence_pct)
        .then_with(|| a.readiness_pct.total_cmp(&b.readiness_pct))
}

pub fn build_rationale(
    confidence_pct: f64,
    hours_per_week: u32,
    commitment_hours: u32,
    policy: &RationalePolicy,
) -> String {
    let headline = if confidence_pct >= policy.strong_threshold {
        &policy.strong
    } else if confidence_pct >= policy.moderate_threshold {
        &policy.moderate
    } else {
        &policy.weak
    };

    if !policy.append_commitment_note {
        return headline.clone();
    }

    let note = if hours_per_week >= commitment_hours {
        &policy.committed_note
    } else {
        &policy.uncommitted_note
    };
    format!("{headline} {note}")
}

pub fn estimate_timeline_months(readiness_pct: f64, table: &TimelineMonths) -> u32 {
    if readiness_pct >= table.high_readiness_pct {
        table.high_readiness
    } else if readiness_pct >= table.mid_readiness_pct {
        table.mid_readiness
    } else {
        table.low_readiness
    }
}

pub fn market_note(signal: Option<&MarketSignal>) -> String {
    let Some(signal) = signal else {
        return NO_MARKET_NOTE.to_string();
    };

    let employers: Vec<&str> = signal
        .top_employers
        .iter()
        .take(MARKET_NOTE_EMPLOYERS)
        .map(String::as_str)
        .collect();

    format!(
        "Demand: {:.1}/10 | Growth: {} | Hiring time: ~{} weeks | Top companies: {}",
        signal.demand_score,
        signal.growth_rate,
        signal.avg_time_to_hire_weeks,
        employers.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::matching::tests::{make_career, skills};
    use crate::catalog::defaults::builtin_catalog;
    use crate::models::career::GrowthRate;
    use std::collections::HashMap;

    fn profile(interests: &[&str], user_skills: &[&str], hours: u32) -> UserProfile {
        UserProfile {
            interests: skills(interests),
            skills: skills(user_skills),
            hours_per_week: hours,
            ..Default::default()
        }
    }

    fn item(id: &str, confidence_pct: f64, readiness_pct: f64) -> RecommendationItem {
        RecommendationItem {
            career_id: id.to_string(),
            title: id.to_string(),
            confidence_pct,
            readiness_pct,
            skill_match: 0.0,
            rationale: String::new(),
            missing_skills: vec![],
            market_note: String::new(),
            alternatives: vec![],
            estimated_timeline_months: 6,
            salary_range: String::new(),
        }
    }

    #[test]
    fn test_rank_confidence_then_readiness() {
        let mut items = vec![
            item("low", 40.0, 90.0),
            item("tied_less_ready", 60.0, 10.0),
            item("tied_more_ready", 60.0, 50.0),
            item("top", 75.0, 0.0),
        ];
        rank(&mut items);
        let order: Vec<_> = items.iter().map(|i| i.career_id.as_str()).collect();
        assert_eq!(order, vec!["top", "tied_more_ready", "tied_less_ready", "low"]);
    }

    #[test]
    fn test_rank_full_tie_keeps_catalog_order() {
        let mut items = vec![item("first", 50.0, 20.0), item("second", 50.0, 20.0)];
        rank(&mut items);
        assert_eq!(items[0].career_id, "first");
    }

    #[test]
    fn test_recommend_returns_top_three_sorted() {
        let catalog = builtin_catalog();
        let p = profile(&["Working with data and numbers"], &["excel", "sql"], 10);
        let items = recommend(&p, &catalog, &EnginePolicy::default());

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].career_id, "data_analyst");
        for pair in items.windows(2) {
            assert!(compare_rank(&pair[0], &pair[1]) != Ordering::Less);
        }
    }

    #[test]
    fn test_recommend_data_analyst_values() {
        let catalog = builtin_catalog();
        let p = profile(&["Working with data and numbers"], &["excel", "sql"], 10);
        let items = recommend(&p, &catalog, &EnginePolicy::default());
        let da = &items[0];

        // skill match 6/20, market 0.82, hours 0.8, interest 0.8
        // 100 * (0.12 + 0.205 + 0.16 + 0.12) = 60.5
        assert_eq!(da.confidence_pct, 60.5);
        assert_eq!(da.readiness_pct, 20.0);
        assert_eq!(da.skill_match, 0.3);
        assert_eq!(da.missing_skills, vec!["statistics_basics".to_string()]);
        assert_eq!(da.estimated_timeline_months, 6);
        assert_eq!(da.salary_range, "4-7 LPA");
        assert_eq!(
            da.rationale,
            "Good potential match with focused skill development. \
             Your weekly time commitment supports steady progress."
        );
        assert_eq!(
            da.market_note,
            "Demand: 8.2/10 | Growth: steady | Hiring time: ~6 weeks | Top companies: TCS, Accenture, Flipkart"
        );
    }

    #[test]
    fn test_recommend_fewer_careers_than_limit() {
        let catalog = Catalog::new(
            vec![make_career("only", &["a"], &[], &[])],
            HashMap::new(),
        );
        let items = recommend(&UserProfile::default(), &catalog, &EnginePolicy::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].market_note, NO_MARKET_NOTE);
        assert_eq!(items[0].alternatives[0], "Related roles");
    }

    #[test]
    fn test_recommend_empty_catalog() {
        let catalog = Catalog::default();
        assert!(recommend(&UserProfile::default(), &catalog, &EnginePolicy::default()).is_empty());
    }

    #[test]
    fn test_recommend_length_is_min_of_limit_and_catalog() {
        let policy = EnginePolicy::default();
        for n in 0..6 {
            let careers = (0..n)
                .map(|i| make_career(&format!("c{i}"), &["a"], &["b"], &[]))
                .collect();
            let catalog = Catalog::new(careers, HashMap::new());
            let items = recommend(&UserProfile::default(), &catalog, &policy);
            assert_eq!(items.len(), n.min(3));
        }
    }

    #[test]
    fn test_sparse_profile_scores_without_failing() {
        let catalog = builtin_catalog();
        let p = profile(&[], &[], 1);
        let items = recommend(&p, &catalog, &EnginePolicy::default());
        for i in &items {
            assert_eq!(i.readiness_pct, 0.0);
            assert_eq!(i.skill_match, 0.0);
            assert!((0.0..=100.0).contains(&i.confidence_pct));
        }
    }

    #[test]
    fn test_readiness_breaks_confidence_tie() {
        // Zero tier weights make skill match 0 for both careers, so
        // confidence is identical and readiness decides.
        let mut policy = EnginePolicy::default();
        policy.tier_weights.l1 = 0.0;
        policy.tier_weights.l2 = 0.0;
        policy.tier_weights.l3 = 0.0;
        let catalog = Catalog::new(
            vec![
                make_career("behind", &["a", "b"], &[], &[]),
                make_career("ahead", &["a", "c"], &["d"], &[]),
            ],
            HashMap::new(),
        );
        let p = profile(&[], &["a", "c"], 5);
        let items = recommend(&p, &catalog, &policy);
        assert_eq!(items[0].confidence_pct, items[1].confidence_pct);
        assert_eq!(items[0].career_id, "ahead");
    }

    #[test]
    fn test_rationale_thresholds() {
        let p = RationalePolicy::default();
        assert!(build_rationale(70.0, 8, 8, &p).starts_with("Strong alignment"));
        assert!(build_rationale(69.9, 8, 8, &p).starts_with("Good potential"));
        assert!(build_rationale(50.0, 8, 8, &p).starts_with("Good potential"));
        assert!(build_rationale(49.9, 8, 8, &p).starts_with("Growing field"));
    }

    #[test]
    fn test_rationale_commitment_note() {
        let mut p = RationalePolicy::default();
        assert!(build_rationale(80.0, 8, 8, &p).ends_with("steady progress."));
        assert!(build_rationale(80.0, 7, 8, &p).ends_with("move faster."));
        p.append_commitment_note = false;
        assert_eq!(
            build_rationale(80.0, 7, 8, &p),
            "Strong alignment with your profile and interests."
        );
    }

    #[test]
    fn test_timeline_table() {
        let t = TimelineMonths::default();
        assert_eq!(estimate_timeline_months(70.0, &t), 3);
        assert_eq!(estimate_timeline_months(69.9, &t), 4);
        assert_eq!(estimate_timeline_months(40.0, &t), 4);
        assert_eq!(estimate_timeline_months(39.9, &t), 6);
        let slower = TimelineMonths {
            low_readiness: 8,
            ..TimelineMonths::default()
        };
        assert_eq!(estimate_timeline_months(0.0, &slower), 8);
    }

    #[test]
    fn test_market_note_demand_keeps_one_decimal() {
        let note = market_note(Some(&MarketSignal::default()));
        assert!(note.starts_with("Demand: 7.0/10 | Growth: steady"), "{note}");
    }

    #[test]
    fn test_market_note_truncates_employers() {
        let signal = MarketSignal {
            demand_score: 8.7,
            growth_rate: GrowthRate::Rising,
            avg_time_to_hire_weeks: 5,
            top_employers: skills(&["Infosys", "Deloitte", "Wipro", "IBM"]),
            hot_skills: vec![],
        };
        let note = market_note(Some(&signal));
        assert!(note.ends_with("Infosys, Deloitte, Wipro"));
        assert!(note.contains("Growth: rising"));
    }
}
