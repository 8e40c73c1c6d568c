//! Scoring engine: the four confidence inputs and their weighted blend.

use crate::advisor::matching::round1;
use crate::advisor::policy::{ConfidenceWeights, HoursPolicy, InterestPolicy};
use crate::models::career::MarketSignal;

/// Step score for weekly learning hours, in [0, 1].
pub fn hours_score(hours_per_week: u32, policy: &HoursPolicy) -> f64 {
    policy
        .steps
        .iter()
        .find(|step| hours_per_week <= step.max_hours)
        .map(|step| step.score)
        .unwrap_or(policy.above)
}

/// Demand score scaled to [0, 1]. Careers without a signal use `default_demand`.
pub fn market_score(signal: Option<&MarketSignal>, default_demand: f64) -> f64 {
    let demand = signal.map(|s| s.demand_score).unwrap_or(default_demand);
    (demand / 10.0).clamp(0.0, 1.0)
}

/// Binary interest signal: any career keyword appearing in the lowercase
/// interest text scores `matched`, otherwise `unmatched`.
pub fn interest_match(interest_text: &str, career_id: &str, policy: &InterestPolicy) -> f64 {
    let hit = policy
        .keywords
        .get(career_id)
        .map(|keywords| {
            keywords
                .iter()
                .any(|k| interest_text.contains(k.to_lowercase().as_str()))
        })
        .unwrap_or(false);

    if hit {
        policy.matched
    } else {
        policy.unmatched
    }
}

/// Composite 0 – 100 confidence, one decimal.
pub fn confidence(
    skill_match: f64,
    market_score: f64,
    hours_score: f64,
    interest_match: f64,
    weights: &ConfidenceWeights,
) -> f64 {
    let blended = weights.skill_match * skill_match
        + weights.market * market_score
        + weights.hours * hours_score
        + weights.interest * interest_match;
    round1((blended * 100.0).clamp(0.0, 100.0))
}
