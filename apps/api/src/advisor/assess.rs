//! Profile assessment: presentation-only traits and strengths.
//! Nothing downstream consumes these.

use serde::{Deserialize, Serialize};

use crate::models::user::UserProfile;

const DATA_KEYWORDS: &[&str] = &["data", "numbers", "analysis"];
const DESIGN_KEYWORDS: &[&str] = &["design", "ui", "ux"];
const SECURITY_KEYWORDS: &[&str] = &["security", "cyber"];

const FOUNDATIONAL_SKILL_COUNT: usize = 3;
const INVESTMENT_READY_BUDGET: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitmentLevel {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTraits {
    pub data_oriented: u8,
    pub design_oriented: u8,
    pub security_oriented: u8,
    pub commitment_level: CommitmentLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessResponse {
    pub profile: UserProfile,
    pub derived_traits: DerivedTraits,
    pub strengths: Vec<String>,
}

pub fn assess(profile: &UserProfile, commitment_hours: u32) -> AssessResponse {
    let interests = profile.interest_text();
    let committed = profile.hours_per_week >= commitment_hours;

    let derived_traits = DerivedTraits {
        data_oriented: flag(&interests, DATA_KEYWORDS),
        design_oriented: flag(&interests, DESIGN_KEYWORDS),
        security_oriented: flag(&interests, SECURITY_KEYWORDS),
        commitment_level: if committed {
            CommitmentLevel::High
        } else {
            CommitmentLevel::Medium
        },
    };

    let mut strengths = Vec::new();
    if committed {
        strengths.push("High learning commitment".to_string());
    }
    if profile.skills.len() >= FOUNDATIONAL_SKILL_COUNT {
        strengths.push("Good foundational skills".to_string());
    }
    if profile.budget_per_month > INVESTMENT_READY_BUDGET {
        strengths.push("Investment ready".to_string());
    }

    AssessResponse {
        profile: profile.clone(),
        derived_traits,
        strengths,
    }
}

fn flag(text: &str, keywords: &[&str]) -> u8 {
    u8::from(keywords.iter().any(|k| text.contains(k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(interests: &[&str], skills: usize, hours: u32, budget: f64) -> UserProfile {
        UserProfile {
            interests: interests.iter().map(|s| s.to_string()).collect(),
            skills: (0..skills).map(|i| format!("skill_{i}")).collect(),
            hours_per_week: hours,
            budget_per_month: budget,
            ..Default::default()
        }
    }

    #[test]
    fn test_traits_from_interests() {
        let r = assess(&profile(&["Cybersecurity and protecting systems"], 0, 5, 0.0), 8);
        assert_eq!(r.derived_traits.security_oriented, 1);
        assert_eq!(r.derived_traits.data_oriented, 0);
        assert_eq!(r.derived_traits.design_oriented, 0);
        assert_eq!(r.derived_traits.commitment_level, CommitmentLevel::Medium);
    }

    #[test]
    fn test_all_strengths() {
        let r = assess(&profile(&["Designing user interfaces"], 3, 8, 3000.0), 8);
        assert_eq!(r.derived_traits.design_oriented, 1);
        assert_eq!(r.derived_traits.commitment_level, CommitmentLevel::High);
        assert_eq!(
            r.strengths,
            vec![
                "High learning commitment".to_string(),
                "Good foundational skills".to_string(),
                "Investment ready".to_string(),
            ]
        );
    }

    #[test]
    fn test_budget_threshold_is_strict() {
        let r = assess(&profile(&[], 0, 1, 1000.0), 8);
        assert!(r.strengths.is_empty());
    }

    #[test]
    fn test_empty_profile_has_no_traits() {
        let r = assess(&UserProfile::default(), 8);
        assert_eq!(r.derived_traits.data_oriented, 0);
        assert_eq!(r.derived_traits.design_oriented, 0);
        assert_eq!(r.derived_traits.security_oriented, 0);
    }
}
