//! Candidate records and the builder that assembles them

use crate::processing::entities::{EntityRecognizer, GazetteerRecognizer, NullRecognizer};
use crate::processing::experience::extract_experience;
use crate::processing::fields::{
    extract_email, extract_phone, extract_qualification, extract_skill_set,
};
use crate::processing::name_extractor::NameExtractor;
use crate::processing::text_processor::NormalizedText;
use chrono::Datelike;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Structured fields extracted from one resume. Every field is always set;
/// missing values carry a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub qualification: String,
    pub skills: String,
    pub experience_years: u32,
}

impl AsRef<CandidateRecord> for CandidateRecord {
    fn as_ref(&self) -> &CandidateRecord {
        self
    }
}

/// Turns plain document text into a `CandidateRecord`
pub struct RecordBuilder {
    name_extractor: NameExtractor,
    current_year: i32,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new(Arc::new(GazetteerRecognizer::new()))
    }
}

impl RecordBuilder {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            name_extractor: NameExtractor::new(recognizer),
            current_year: chrono::Local::now().year(),
        }
    }

    /// Builder configured from the extraction settings
    pub fn from_config(config: &crate::config::ExtractionConfig) -> Self {
        let recognizer: Arc<dyn EntityRecognizer> = if config.ner_enabled {
            Arc::new(GazetteerRecognizer::with_given_names(&config.extra_given_names))
        } else {
            Arc::new(NullRecognizer)
        };
        Self::new(recognizer)
    }

    /// Year used to resolve "Present"/"Current" in date ranges
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn build(&self, raw_text: &str) -> CandidateRecord {
        let text = NormalizedText::new(raw_text);

        CandidateRecord {
            name: self.name_extractor.extract(&text),
            phone: extract_phone(&text),
            email: extract_email(&text),
            qualification: extract_qualification(&text),
            skills: extract_skill_set(&text),
            experience_years: extract_experience(text.full_text(), self.current_year),
        }
    }

    /// Builds every document independently on the rayon pool; output order matches input order
    pub fn build_batch<S>(&self, documents: &[S]) -> Vec<CandidateRecord>
    where
        S: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|document| self.build(document.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::fields::NOT_FOUND;
    use crate::processing::name_extractor::TEXT_EXTRACTION_FAILED;

    const SAMPLE: &str = "Priya Sharma
priya.sharma@example.com | 9876543210
Data Scientist

Education
B.Tech, Computer Science, 2014

Experience
Analytics Corp, Jan 2016 - Dec 2019
Insight Labs, 2020 - Present

Skills
Python, SQL, Pandas, TensorFlow, Leadership";

    #[test]
    fn test_build_full_record() {
        let record = RecordBuilder::default().with_current_year(2025).build(SAMPLE);

        assert_eq!(record.name, "Priya Sharma");
        assert_eq!(record.phone, "9876543210");
        assert_eq!(record.email, "priya.sharma@example.com");
        assert_eq!(record.qualification, "B.Tech");
        assert_eq!(record.skills, "Python,SQL,Pandas,TensorFlow,Leadership,Data Scientist");
        assert_eq!(record.experience_years, 8);
    }

    #[test]
    fn test_empty_document_yields_sentinels() {
        let record = RecordBuilder::default().build("");

        assert_eq!(record.name, TEXT_EXTRACTION_FAILED);
        assert_eq!(record.phone, NOT_FOUND);
        assert_eq!(record.email, NOT_FOUND);
        assert_eq!(record.qualification, NOT_FOUND);
        assert_eq!(record.skills, NOT_FOUND);
        assert_eq!(record.experience_years, 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let builder = RecordBuilder::default().with_current_year(2025);
        let documents = vec!["Jane Doe\nPython".to_string(), String::new(), SAMPLE.to_string()];

        let records = builder.build_batch(&documents);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[1].name, TEXT_EXTRACTION_FAILED);
        assert_eq!(records[2].name, "Priya Sharma");
    }

    #[test]
    fn test_record_serializes_with_all_fields() {
        let record = RecordBuilder::default().build("");
        let json = serde_json::to_value(&record).unwrap();

        for field in ["name", "phone", "email", "qualification", "skills", "experience_years"] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
    }
}
