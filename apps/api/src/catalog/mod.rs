//! Reference data: the career taxonomy, per-career market signals and the
//! onboarding quiz. Built once at startup, shared read-only behind an `Arc`.

pub mod defaults;
pub mod loader;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::career::{CareerProfile, MarketSignal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Single,
    Multi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub careers: Vec<CareerProfile>,
    #[serde(default)]
    pub market: HashMap<String, MarketSignal>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Catalog {
    pub fn new(careers: Vec<CareerProfile>, market: HashMap<String, MarketSignal>) -> Self {
        Self {
            careers,
            market,
            quiz: vec![],
        }
    }

    pub fn career(&self, career_id: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.id == career_id)
    }

    /// Market signal for a career, if the table has one.
    pub fn market_signal(&self, career_id: &str) -> Option<&MarketSignal> {
        self.market.get(career_id)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}
