//! Engine policy: every weight, threshold and lookup table the advisor uses.
//!
//! `EnginePolicy::default()` is the canonical policy. A JSON file may replace
//! any subset of it at startup (see `catalog::loader::load_policy`); fields
//! left out keep their defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::career::{SkillTier, DEFAULT_DEMAND_SCORE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierWeights {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            l1: 3.0,
            l2: 2.0,
            l3: 1.0,
        }
    }
}

impl TierWeights {
    pub fn weight(&self, tier: SkillTier) -> f64 {
        match tier {
            SkillTier::L1 => self.l1,
            SkillTier::L2 => self.l2,
            SkillTier::L3 => self.l3,
        }
    }
}

/// Blend weights for the confidence score. Expected to sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    pub skill_match: f64,
    pub market: f64,
    pub hours: f64,
    pub interest: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.4,
            market: 0.25,
            hours: 0.2,
            interest: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursStep {
    pub max_hours: u32,
    pub score: f64,
}

/// Step function over weekly hours. `steps` are checked in order, so they
/// must be sorted by `max_hours` ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursPolicy {
    pub steps: Vec<HoursStep>,
    pub above: f64,
}

impl Default for HoursPolicy {
    fn default() -> Self {
        Self {
            steps: vec![
                HoursStep { max_hours: 3, score: 0.3 },
                HoursStep { max_hours: 6, score: 0.6 },
                HoursStep { max_hours: 10, score: 0.8 },
            ],
            above: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestPolicy {
    pub matched: f64,
    pub unmatched: f64,
    /// Career id → keywords searched for as substrings of the interest text.
    pub keywords: HashMap<String, Vec<String>>,
}

impl Default for InterestPolicy {
    fn default() -> Self {
        Self {
            matched: 0.8,
            unmatched: 0.3,
            keywords: table(&[
                ("data_analyst", &["data", "numbers", "analysis"]),
                ("ui_ux_designer", &["design", "ui", "ux", "visual"]),
                ("cybersecurity_analyst", &["security", "cyber", "protect"]),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RationalePolicy {
    pub strong_threshold: f64,
    pub moderate_threshold: f64,
    pub strong: String,
    pub moderate: String,
    pub weak: String,
    /// Appends a sentence about weekly hours after the confidence sentence.
    pub append_commitment_note: bool,
    pub committed_note: String,
    pub uncommitted_note: String,
}

impl Default for RationalePolicy {
    fn default() -> Self {
        Self {
            strong_threshold: 70.0,
            moderate_threshold: 50.0,
            strong: "Strong alignment with your profile and interests.".to_string(),
            moderate: "Good potential match with focused skill development.".to_string(),
            weak: "Growing field with learning opportunities.".to_string(),
            append_commitment_note: true,
            committed_note: "Your weekly time commitment supports steady progress.".to_string(),
            uncommitted_note: "Consider adding a few more hours per week to move faster."
                .to_string(),
        }
    }
}

/// Months-to-job-ready estimate keyed by readiness percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineMonths {
    pub high_readiness_pct: f64,
    pub mid_readiness_pct: f64,
    pub high_readiness: u32,
    pub mid_readiness: u32,
    pub low_readiness: u32,
}

impl Default for TimelineMonths {
    fn default() -> Self {
        Self {
            high_readiness_pct: 70.0,
            mid_readiness_pct: 40.0,
            high_readiness: 3,
            mid_readiness: 4,
            low_readiness: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeToReadyBucket {
    pub max_missing: usize,
    pub label: String,
}

/// Coarse label for the total number of missing skills. Buckets are checked
/// in order; counts beyond the last bucket get `beyond`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeToReadyPolicy {
    pub buckets: Vec<TimeToReadyBucket>,
    pub beyond: String,
}

impl Default for TimeToReadyPolicy {
    fn default() -> Self {
        Self {
            buckets: vec![
                TimeToReadyBucket {
                    max_missing: 3,
                    label: "2-3 months".to_string(),
                },
                TimeToReadyBucket {
                    max_missing: 6,
                    label: "4-6 months".to_string(),
                },
            ],
            beyond: "6-12 months".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPolicy {
    /// Career id → one focus label per week.
    pub focus: HashMap<String, Vec<String>>,
    pub course_cost: String,
    pub book_cost: String,
}

impl Default for RoadmapPolicy {
    fn default() -> Self {
        Self {
            focus: table(&[
                (
                    "data_analyst",
                    &[
                        "Excel & SQL Fundamentals",
                        "Statistics Basics",
                        "Python Introduction",
                        "Data Analysis with Pandas",
                        "Data Visualization",
                        "Business Storytelling",
                        "Dashboard Creation",
                        "Portfolio Building",
                    ],
                ),
                (
                    "ui_ux_designer",
                    &[
                        "UX Research Basics",
                        "Figma Fundamentals",
                        "Wireframing Skills",
                        "Visual Design Principles",
                        "Prototyping",
                        "User Testing",
                        "Design Systems",
                        "Portfolio Creation",
                    ],
                ),
                (
                    "cybersecurity_analyst",
                    &[
                        "Network Security Basics",
                        "Linux Fundamentals",
                        "Security Tools",
                        "Threat Detection",
                        "Incident Response",
                        "Security Scripting",
                        "Vulnerability Assessment",
                        "Certification Prep",
                    ],
                ),
            ]),
            course_cost: "₹500-1500".to_string(),
            book_cost: "₹300-800".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    pub tier_weights: TierWeights,
    pub confidence_weights: ConfidenceWeights,
    pub hours: HoursPolicy,
    pub interest: InterestPolicy,
    /// Demand score assumed for careers without a market signal.
    pub default_demand_score: f64,
    /// How many foundation gaps are surfaced as priority skills.
    pub priority_missing_limit: usize,
    pub recommendation_limit: usize,
    /// Weekly hours at or above which a learner counts as committed.
    pub commitment_hours: u32,
    pub rationale: RationalePolicy,
    pub timeline_months: TimelineMonths,
    pub time_to_ready: TimeToReadyPolicy,
    /// Career id → alternative career-family suggestions.
    pub alternatives: HashMap<String, Vec<String>>,
    pub default_alternatives: Vec<String>,
    pub roadmap: RoadmapPolicy,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            tier_weights: TierWeights::default(),
            confidence_weights: ConfidenceWeights::default(),
            hours: HoursPolicy::default(),
            interest: InterestPolicy::default(),
            default_demand_score: DEFAULT_DEMAND_SCORE,
            priority_missing_limit: 3,
            recommendation_limit: 3,
            commitment_hours: 8,
            rationale: RationalePolicy::default(),
            timeline_months: TimelineMonths::default(),
            time_to_ready: TimeToReadyPolicy::default(),
            alternatives: table(&[
                (
                    "data_analyst",
                    &["Business Analyst", "Data Engineer", "Product Analyst"],
                ),
                (
                    "ui_ux_designer",
                    &["Product Designer", "UX Researcher", "Frontend Developer"],
                ),
                (
                    "cybersecurity_analyst",
                    &["SOC Analyst", "Network Administrator", "Cloud Security Engineer"],
                ),
            ]),
            default_alternatives: vec![
                "Related roles".to_string(),
                "Internship path".to_string(),
                "Freelance opportunities".to_string(),
            ],
            roadmap: RoadmapPolicy::default(),
        }
    }
}

impl EnginePolicy {
    pub fn alternatives_for(&self, career_id: &str) -> &[String] {
        self.alternatives
            .get(career_id)
            .map(Vec::as_slice)
            .unwrap_or(&self.default_alternatives)
    }
}

fn table(rows: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    rows.iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}
