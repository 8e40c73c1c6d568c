use serde::{Deserialize, Serialize};

/// A single request's view of the learner. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: u32,
    #[serde(default, alias = "budget_inr_per_month")]
    pub budget_per_month: f64,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub goal_text: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

pub(crate) fn default_hours_per_week() -> u32 {
    5
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            interests: vec![],
            skills: vec![],
            hours_per_week: default_hours_per_week(),
            budget_per_month: 0.0,
            learning_style: None,
            goal_text: None,
            city: None,
        }
    }
}

impl UserProfile {
    /// Interests joined into one lowercase string for substring keyword checks.
    pub fn interest_text(&self) -> String {
        self.interests.join(" ").to_lowercase()
    }
}

/// Lowercases and trims a skill identifier so comparisons ignore case and padding.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_alias_accepted() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"budget_inr_per_month": 1000, "hours_per_week": 8}"#).unwrap();
        assert_eq!(profile.budget_per_month, 1000.0);
        assert_eq!(profile.hours_per_week, 8);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_interest_text_lowercases_and_joins() {
        let profile = UserProfile {
            interests: vec!["Data".into(), "UI Design".into()],
            ..Default::default()
        };
        assert_eq!(profile.interest_text(), "data ui design");
    }

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  SQL "), "sql");
    }
}
