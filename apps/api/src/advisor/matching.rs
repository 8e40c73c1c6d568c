//! Matching engine: weighted skill match and unweighted readiness.
//!
//! The two numbers diverge on purpose. `skill_match` weights foundation
//! skills by the tier weights; `readiness` is the plain fraction of required
//! skills already held.
//!
//! A skill listed in more than one tier is counted once per tier.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::advisor::policy::TierWeights;
use crate::models::career::{CareerProfile, SkillTier};
use crate::models::user::normalize_skill;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readiness {
    /// 0.0 – 100.0, one decimal.
    pub readiness_pct: f64,
    /// Missing skills per tier, in the career's declared order.
    pub missing_by_tier: BTreeMap<SkillTier, Vec<String>>,
    /// Leading foundation gaps.
    pub priority_missing: Vec<String>,
}

impl Readiness {
    pub fn total_missing(&self) -> usize {
        self.missing_by_tier.values().map(Vec::len).sum()
    }
}

pub fn normalized_skill_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| normalize_skill(s)).collect()
}

/// Weighted fraction of required skills held, in [0, 1].
/// Returns 0.0 for a career with no required skills.
pub fn skill_match(user_skills: &[String], career: &CareerProfile, weights: &TierWeights) -> f64 {
    let held = normalized_skill_set(user_skills);

    let mut total_weight = 0.0_f64;
    let mut matched_weight = 0.0_f64;

    for tier in SkillTier::ALL {
        let weight = weights.weight(tier);
        let required = career.skills_required.tier(tier);
        let matched = required
            .iter()
            .filter(|s| held.contains(&normalize_skill(s)))
            .count();

        total_weight += required.len() as f64 * weight;
        matched_weight += matched as f64 * weight;
    }

    if total_weight > 0.0 {
        matched_weight / total_weight
    } else {
        0.0
    }
}

pub fn readiness(user_skills: &[String], career: &CareerProfile, priority_limit: usize) -> Readiness {
    let held = normalized_skill_set(user_skills);

    let mut missing_by_tier = BTreeMap::new();
    let mut total_required = 0_usize;
    let mut total_have = 0_usize;

    for tier in SkillTier::ALL {
        let required: Vec<String> = career
            .skills_required
            .tier(tier)
            .iter()
            .map(|s| normalize_skill(s))
            .collect();
        let missing: Vec<String> = required
            .iter()
            .filter(|s| !held.contains(*s))
            .cloned()
            .collect();

        total_required += required.len();
        total_have += required.len() - missing.len();
        missing_by_tier.insert(tier, missing);
    }

    let readiness_pct = if total_required > 0 {
        round1(total_have as f64 / total_required as f64 * 100.0)
    } else {
        0.0
    };

    let priority_missing = missing_by_tier
        .get(&SkillTier::L1)
        .map(|m| m.iter().take(priority_limit).cloned().collect())
        .unwrap_or_default();

    Readiness {
        readiness_pct,
        missing_by_tier,
        priority_missing,
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
