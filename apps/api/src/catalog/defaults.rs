//! Built-in reference data used when no `CATALOG_PATH` is configured.

use std::collections::HashMap;

use crate::catalog::{Catalog, QuestionKind, QuizQuestion};
use crate::models::career::{CareerProfile, GrowthRate, MarketSignal, SkillsRequired};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn career(id: &str, title: &str, l1: &[&str], l2: &[&str], l3: &[&str], salary: &str) -> CareerProfile {
    CareerProfile {
        id: id.to_string(),
        title: title.to_string(),
        skills_required: SkillsRequired {
            l1: strings(l1),
            l2: strings(l2),
            l3: strings(l3),
        },
        salary_range: salary.to_string(),
    }
}

fn signal(
    demand_score: f64,
    growth_rate: GrowthRate,
    weeks: u32,
    employers: &[&str],
    hot: &[&str],
) -> MarketSignal {
    MarketSignal {
        demand_score,
        growth_rate,
        avg_time_to_hire_weeks: weeks,
        top_employers: strings(employers),
        hot_skills: strings(hot),
    }
}

pub fn builtin_careers() -> Vec<CareerProfile> {
    vec![
        career(
            "data_analyst",
            "Data Analyst",
            &["excel", "sql", "statistics_basics"],
            &["python", "pandas", "data_cleaning", "data_visualization"],
            &["storytelling", "dashboarding", "business_context"],
            "4-7 LPA",
        ),
        career(
            "ui_ux_designer",
            "UI/UX Designer",
            &["ux_principles", "visual_design_basics", "figma_basics"],
            &["wireframing", "prototyping", "user_research"],
            &["usability_testing", "design_systems", "handoff"],
            "3.5-6 LPA",
        ),
        career(
            "cybersecurity_analyst",
            "Cybersecurity Analyst",
            &["network_basics", "linux_basics", "security_fundamentals"],
            &["siem_basics", "threat_detection", "scripting_basics"],
            &["incident_response", "vulnerability_assessment", "cloud_security_basics"],
            "4-7.5 LPA",
        ),
    ]
}

pub fn builtin_market() -> HashMap<String, MarketSignal> {
    HashMap::from([
        (
            "data_analyst".to_string(),
            signal(
                8.2,
                GrowthRate::Steady,
                6,
                &["TCS", "Accenture", "Flipkart", "Swiggy"],
                &["sql", "excel", "python", "storytelling"],
            ),
        ),
        (
            "ui_ux_designer".to_string(),
            signal(
                7.5,
                GrowthRate::Rising,
                7,
                &["Zomato", "Paytm", "Zoho", "Freshworks"],
                &["figma", "user_research", "prototyping"],
            ),
        ),
        (
            "cybersecurity_analyst".to_string(),
            signal(
                8.7,
                GrowthRate::Rising,
                5,
                &["Infosys", "Deloitte", "Wipro", "IBM"],
                &["siem_basics", "linux", "incident_response"],
            ),
        ),
    ])
}

pub fn builtin_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1_interest".to_string(),
            text: "Which area interests you most?".to_string(),
            kind: QuestionKind::Single,
            options: strings(&[
                "Working with data and numbers",
                "Designing user interfaces",
                "Cybersecurity and protecting systems",
            ]),
        },
        QuizQuestion {
            id: "q2_hours".to_string(),
            text: "How many hours per week can you learn?".to_string(),
            kind: QuestionKind::Single,
            options: strings(&["<3", "3-5", "6-8", "9-12", "12+"]),
        },
    ]
}

pub fn builtin_catalog() -> Catalog {
    Catalog {
        quiz: builtin_quiz(),
        ..Catalog::new(builtin_careers(), builtin_market())
    }
}
