//! Ranking of scored candidates
//!
//! Scores are computed independently per candidate on the rayon pool, then a
//! single stable sort orders them by descending score. Equal scores keep
//! their input order.

use crate::processing::document::CandidateRecord;
use crate::processing::scorer::{Criteria, ScoreBreakdown, Scorer};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate<T> {
    pub candidate: T,
    pub score: f64,
    /// Per-component scores; only kept when the ranker is detailed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

pub struct Ranker {
    scorer: Scorer,
    detailed: bool,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(Scorer::default())
    }
}

impl Ranker {
    pub fn new(scorer: Scorer) -> Self {
        Self {
            scorer,
            detailed: false,
        }
    }

    /// Keep each candidate's score breakdown in the results
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Top `criteria.result_count` candidates, best first
    pub fn rank<T>(&self, candidates: Vec<T>, criteria: &Criteria) -> Vec<ScoredCandidate<T>>
    where
        T: AsRef<CandidateRecord> + Send,
    {
        if criteria.result_count <= 0 {
            return Vec::new();
        }

        let population = candidates.len();
        let scored: Vec<ScoredCandidate<T>> = candidates
            .into_par_iter()
            .map(|candidate| {
                let breakdown = self.scorer.breakdown(candidate.as_ref(), criteria);
                ScoredCandidate {
                    score: breakdown.total,
                    breakdown: self.detailed.then_some(breakdown),
                    candidate,
                }
            })
            .collect();

        let ranked = select_top(scored, criteria.result_count);
        info!("Ranked {} candidates, returning {}", population, ranked.len());
        ranked
    }
}

/// Descending by score
pub fn compare_scores<T>(a: &ScoredCandidate<T>, b: &ScoredCandidate<T>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Stable sort by descending score, then keep the first `count`
pub fn select_top<T>(mut scored: Vec<ScoredCandidate<T>>, count: i64) -> Vec<ScoredCandidate<T>> {
    if count <= 0 {
        return Vec::new();
    }

    scored.sort_by(compare_scores);
    scored.truncate(usize::try_from(count).unwrap_or(usize::MAX));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::fields::NOT_FOUND;

    fn scored(label: &'static str, score: f64) -> ScoredCandidate<&'static str> {
        ScoredCandidate {
            candidate: label,
            score,
            breakdown: None,
        }
    }

    fn record(name: &str, skills: &str, experience_years: u32) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            phone: NOT_FOUND.to_string(),
            email: NOT_FOUND.to_string(),
            qualification: "MBA".to_string(),
            skills: skills.to_string(),
            experience_years,
        }
    }

    fn criteria(result_count: i64) -> Criteria {
        Criteria {
            qualification: "MBA".to_string(),
            skills: "python, sql".to_string(),
            min_experience: 3,
            result_count,
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            scored("a", 80.0),
            scored("b", 80.0),
            scored("c", 60.0),
            scored("d", 95.0),
            scored("e", 40.0),
        ];

        let top = select_top(input, 3);
        let labels: Vec<_> = top.iter().map(|s| (s.candidate, s.score)).collect();

        assert_eq!(labels, vec![("d", 95.0), ("a", 80.0), ("b", 80.0)]);
    }

    #[test]
    fn test_count_larger_than_population() {
        let top = select_top(vec![scored("a", 10.0), scored("b", 20.0)], 50);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].candidate, "b");
    }

    #[test]
    fn test_non_positive_count_is_empty() {
        assert!(select_top(vec![scored("a", 10.0)], 0).is_empty());
        assert!(select_top(vec![scored("a", 10.0)], -4).is_empty());
        assert!(Ranker::default().rank(vec![record("A", "Python", 5)], &criteria(0)).is_empty());
    }

    #[test]
    fn test_rank_records() {
        let records = vec![
            record("Low", "Excel", 0),
            record("High", "Python,SQL", 5),
            record("Mid", "Python", 3),
        ];

        let ranked = Ranker::default().rank(records, &criteria(2));

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].candidate.name, "High");
        assert_eq!(ranked[0].score, 100.0);
        assert_eq!(ranked[1].candidate.name, "Mid");
        assert_eq!(ranked[1].score, 80.0);
        assert!(ranked[0].breakdown.is_none());
    }

    #[test]
    fn test_detailed_ranking_keeps_breakdown() {
        let records = vec![record("Mid", "Python", 3)];
        let ranked = Ranker::default().detailed(true).rank(records, &criteria(1));

        let breakdown = ranked[0].breakdown.as_ref().expect("breakdown requested");
        assert_eq!(breakdown.matched_skills, vec!["python"]);
        assert_eq!(breakdown.total, ranked[0].score);
    }

    #[test]
    fn test_rank_borrowed_records() {
        let records = vec![record("Only", "SQL", 1)];
        let ranked = Ranker::default().rank(records.iter().collect::<Vec<_>>(), &criteria(1));
        assert_eq!(ranked[0].candidate.name, "Only");
    }
}
