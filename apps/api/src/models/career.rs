use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill difficulty bucket. L1 is foundation, L3 is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillTier {
    L1,
    L2,
    L3,
}

impl SkillTier {
    /// All tiers in declaration order, foundation first.
    pub const ALL: [SkillTier; 3] = [SkillTier::L1, SkillTier::L2, SkillTier::L3];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTier::L1 => "L1",
            SkillTier::L2 => "L2",
            SkillTier::L3 => "L3",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required skills of a career, one ordered list per tier.
/// Missing tiers in JSON deserialize as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsRequired {
    #[serde(rename = "L1", default)]
    pub l1: Vec<String>,
    #[serde(rename = "L2", default)]
    pub l2: Vec<String>,
    #[serde(rename = "L3", default)]
    pub l3: Vec<String>,
}

impl SkillsRequired {
    pub fn tier(&self, tier: SkillTier) -> &[String] {
        match tier {
            SkillTier::L1 => &self.l1,
            SkillTier::L2 => &self.l2,
            SkillTier::L3 => &self.l3,
        }
    }

    pub fn total(&self) -> usize {
        self.l1.len() + self.l2.len() + self.l3.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub id: String,
    pub title: String,
    pub skills_required: SkillsRequired,
    /// Display string, passed through untouched.
    #[serde(default)]
    pub salary_range: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthRate {
    #[default]
    Steady,
    Rising,
    Declining,
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthRate::Steady => "steady",
            GrowthRate::Rising => "rising",
            GrowthRate::Declining => "declining",
        };
        f.write_str(label)
    }
}

/// Static labor-market reference data for one career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSignal {
    #[serde(default = "default_demand_score")]
    pub demand_score: f64,
    #[serde(default)]
    pub growth_rate: GrowthRate,
    #[serde(default = "default_time_to_hire")]
    pub avg_time_to_hire_weeks: u32,
    #[serde(default)]
    pub top_employers: Vec<String>,
    #[serde(default)]
    pub hot_skills: Vec<String>,
}

pub const DEFAULT_DEMAND_SCORE: f64 = 7.0;
pub const DEFAULT_TIME_TO_HIRE_WEEKS: u32 = 6;

fn default_demand_score() -> f64 {
    DEFAULT_DEMAND_SCORE
}

fn default_time_to_hire() -> u32 {
    DEFAULT_TIME_TO_HIRE_WEEKS
}

impl Default for MarketSignal {
    fn default() -> Self {
        Self {
            demand_score: DEFAULT_DEMAND_SCORE,
            growth_rate: GrowthRate::Steady,
            avg_time_to_hire_weeks: DEFAULT_TIME_TO_HIRE_WEEKS,
            top_employers: vec![],
            hot_skills: vec![],
        }
    }
}
