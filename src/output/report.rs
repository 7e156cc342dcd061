//! Report structures handed to the formatters

use crate::processing::document::CandidateRecord;
use crate::processing::ranker::ScoredCandidate;
use crate::processing::scorer::{Criteria, ScoreBreakdown};
use crate::store::StoredCandidate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub ranker_version: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            ranker_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One record, with its store id when it has been persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub source: String,
    pub record: CandidateRecord,
}

impl From<StoredCandidate> for RecordEntry {
    fn from(stored: StoredCandidate) -> Self {
        Self {
            id: Some(stored.id),
            source: stored.source,
            record: stored.record,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordReport {
    pub metadata: ReportMetadata,
    pub entries: Vec<RecordEntry>,
}

impl RecordReport {
    pub fn new(entries: Vec<RecordEntry>) -> Self {
        Self {
            metadata: ReportMetadata::default(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking
    pub rank: usize,
    pub score: f64,
    #[serde(flatten)]
    pub entry: RecordEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub criteria: Criteria,
    /// Number of candidates that were scored
    pub population: usize,
    pub results: Vec<RankedEntry>,
}

impl RankingReport {
    pub fn new(
        criteria: Criteria,
        population: usize,
        ranked: Vec<ScoredCandidate<StoredCandidate>>,
    ) -> Self {
        let results = ranked
            .into_iter()
            .enumerate()
            .map(|(index, scored)| RankedEntry {
                rank: index + 1,
                score: scored.score,
                entry: scored.candidate.into(),
                breakdown: scored.breakdown,
            })
            .collect();

        Self {
            metadata: ReportMetadata::default(),
            criteria,
            population,
            results,
        }
    }
}
