//! Text processing: field extraction, record building, scoring and ranking

pub mod document;
pub mod entities;
pub mod experience;
pub mod fields;
pub mod name_extractor;
pub mod ranker;
pub mod scorer;
pub mod similarity;
pub mod text_processor;
pub mod vocabulary;

pub use document::{CandidateRecord, RecordBuilder};
pub use ranker::{Ranker, ScoredCandidate};
pub use scorer::{Criteria, ScoreBreakdown, Scorer};
