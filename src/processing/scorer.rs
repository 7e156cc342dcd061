//! Candidate scoring against ranking criteria
//!
//! Three additive components: qualification (0-30), skills (0-40) and
//! experience (0-30). The total is rounded half-up to two decimals.

use crate::config::ScoringConfig;
use crate::processing::document::CandidateRecord;
use crate::processing::fields::NOT_FOUND;
use crate::processing::similarity::{self, IndelSimilarity, Similarity};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const QUALIFICATION_WEIGHT: f64 = 30.0;
pub const SKILLS_WEIGHT: f64 = 40.0;
pub const EXPERIENCE_WEIGHT: f64 = 30.0;

const QUALIFICATION_STRONG_MATCH: u32 = 90;
const QUALIFICATION_WEAK_MATCH: u32 = 70;
const SKILL_MATCH_THRESHOLD: u32 = 85;
const EXPERIENCE_GRACE_YEARS: u32 = 5;

/// Caller-supplied ranking requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub qualification: String,
    /// Comma-separated required skills
    pub skills: String,
    pub min_experience: u32,
    /// Number of candidates to return; zero or negative returns none
    pub result_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub qualification: f64,
    pub skills: f64,
    pub experience: f64,
    pub total: f64,
    /// Required skills (case-folded) that found a close candidate skill
    pub matched_skills: Vec<String>,
}

pub struct Scorer {
    similarity: Arc<dyn Similarity>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Arc::new(IndelSimilarity))
    }
}

impl Scorer {
    pub fn new(similarity: Arc<dyn Similarity>) -> Self {
        Self { similarity }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(similarity::for_backend(config.similarity))
    }

    pub fn score(&self, candidate: &CandidateRecord, criteria: &Criteria) -> f64 {
        self.breakdown(candidate, criteria).total
    }

    pub fn breakdown(&self, candidate: &CandidateRecord, criteria: &Criteria) -> ScoreBreakdown {
        let qualification = self.qualification_component(&candidate.qualification, &criteria.qualification);
        let (skills, matched_skills) = self.skills_component(&candidate.skills, &criteria.skills);
        let experience = experience_component(candidate.experience_years, criteria.min_experience);
        let total = round_to_cents(qualification + skills + experience);

        debug!(
            "Scored {}: qualification={} skills={} experience={:.2} total={}",
            candidate.name, qualification, skills, experience, total
        );

        ScoreBreakdown {
            qualification,
            skills,
            experience,
            total,
            matched_skills,
        }
    }

    fn qualification_component(&self, held: &str, required: &str) -> f64 {
        if held == NOT_FOUND {
            return 0.0;
        }

        let similarity = self
            .similarity
            .partial_ratio(&held.to_lowercase(), &required.to_lowercase());

        if similarity >= QUALIFICATION_STRONG_MATCH {
            QUALIFICATION_WEIGHT
        } else if similarity >= QUALIFICATION_WEAK_MATCH {
            QUALIFICATION_WEIGHT / 2.0
        } else {
            0.0
        }
    }

    fn skills_component(&self, held: &str, required: &str) -> (f64, Vec<String>) {
        // Blank required entries still count and can never match
        let required = split_skills(required);
        let held: Vec<String> = if held == NOT_FOUND {
            Vec::new()
        } else {
            split_skills(held)
                .into_iter()
                .filter(|skill| !skill.is_empty())
                .collect()
        };

        let required_count = required.len();
        let matched: Vec<String> = required
            .into_iter()
            .filter(|wanted| {
                held.iter()
                    .any(|skill| self.similarity.ratio(skill, wanted) >= SKILL_MATCH_THRESHOLD)
            })
            .collect();

        let component = matched.len() as f64 / required_count.max(1) as f64 * SKILLS_WEIGHT;
        (component, matched)
    }
}

/// Full credit at or above the minimum, then linear decay to zero over five years
fn experience_component(years: u32, minimum: u32) -> f64 {
    if years >= minimum {
        return EXPERIENCE_WEIGHT;
    }

    let gap = minimum - years;
    if gap <= EXPERIENCE_GRACE_YEARS {
        EXPERIENCE_WEIGHT * (1.0 - gap as f64 / EXPERIENCE_GRACE_YEARS as f64)
    } else {
        0.0
    }
}

/// Comma-separated, trimmed, case-folded; blank entries are kept
fn split_skills(list: &str) -> Vec<String> {
    list.split(',')
        .map(|skill| skill.trim().to_lowercase())
        .collect()
}

/// Half-up rounding to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
