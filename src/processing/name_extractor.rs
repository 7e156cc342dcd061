//! Candidate name inference
//!
//! Seven independent strategies look at the same normalized text and each
//! proposes zero or more scored names. The highest score wins; on a tie the
//! candidate generated first wins, so the declared strategy order is part of
//! the result.
//!
//! | strategy          | window     | score              |
//! |-------------------|------------|--------------------|
//! | top isolated line | 7 lines    | 100 - 10 × line    |
//! | header label      | 25 lines   | 90                 |
//! | aligned layout    | 15 lines   | 80                 |
//! | "resume of"       | 15 lines   | 85                 |
//! | capitalized run   | 20 lines   | 70 - 2 × line      |
//! | named entity      | 35 lines   | 60 - 5 × entity    |
//! | email local part  | 30 lines   | 30                 |

use crate::processing::entities::{EntityRecognizer, GazetteerRecognizer};
use crate::processing::text_processor::NormalizedText;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const TEXT_EXTRACTION_FAILED: &str = "Text extraction failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyTag {
    TopIsolated,
    HeaderBased,
    LeftAligned,
    RightAligned,
    ResumeOf,
    CapitalizedRun,
    NamedEntity,
    EmailDerived,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
    pub text: String,
    pub score: i32,
    pub strategy: StrategyTag,
}

impl NameCandidate {
    fn new(text: impl Into<String>, score: i32, strategy: StrategyTag) -> Self {
        Self {
            text: text.into(),
            score,
            strategy,
        }
    }
}

/// One name-guessing heuristic
pub trait NameStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate>;
}

/// Runs every strategy in a fixed order and keeps the best candidate
pub struct NameExtractor {
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(Arc::new(GazetteerRecognizer::new()))
    }
}

impl NameExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            strategies: vec![
                Box::new(TopIsolatedLine),
                Box::new(HeaderLabel),
                Box::new(AlignedLayout),
                Box::new(ResumeOf),
                Box::new(CapitalizedRun),
                Box::new(NamedEntity { recognizer }),
                Box::new(EmailLocalPart),
            ],
        }
    }

    /// Best guess for the candidate's name, or one of the sentinels
    pub fn extract(&self, text: &NormalizedText) -> String {
        if text.is_empty() {
            return TEXT_EXTRACTION_FAILED.to_string();
        }

        match self.best_candidate(text) {
            Some(best) => {
                debug!(
                    "Selected name '{}' (score {}, {:?})",
                    best.text, best.score, best.strategy
                );
                best.text
            }
            None => NAME_NOT_FOUND.to_string(),
        }
    }

    pub fn best_candidate(&self, text: &NormalizedText) -> Option<NameCandidate> {
        select_best(self.candidates(text))
    }

    /// All candidates in generation order
    pub fn candidates(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        self.strategies
            .iter()
            .flat_map(|strategy| {
                let found = strategy.generate(text);
                if !found.is_empty() {
                    debug!("{} proposed {} name candidate(s)", strategy.name(), found.len());
                }
                found
            })
            .collect()
    }
}

/// Highest score; the earliest candidate wins ties
fn select_best(candidates: Vec<NameCandidate>) -> Option<NameCandidate> {
    candidates
        .into_iter()
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
}

const LAYOUT_WORDS: &[&str] = &[
    "resume", "cv", "curriculum", "vitae", "profile", "application", "address", "phone", "email",
    "github", "linkedin",
];

const NAME_HEADERS: &[&str] = &[
    "Name",
    "Full Name",
    "Candidate Name",
    "Profile",
    "Personal Information",
    "Personal Details",
];

const HEADER_SEPARATORS: &[char] = &[':', '-', '–', '>'];

static LEFT_ALIGNED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-z]+(?:\s(?:[A-Z]\.?|[A-Z][a-z]+)){1,3})(?:\s*\n|\s{3,})")
        .expect("Invalid left-aligned name regex")
});

static RIGHT_ALIGNED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\n\s*|\s{3,})([A-Z][a-z]+(?:\s(?:[A-Z]\.?|[A-Z][a-z]+)){1,3})$")
        .expect("Invalid right-aligned name regex")
});

static RESUME_OF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:resume|cv|curriculum vitae)\s+(?:of|for|by)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3})")
        .expect("Invalid resume-of regex")
});

static CAPITALIZED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+(?:[A-Z]\.?|[A-Z][a-z]+)){1,4})\b")
        .expect("Invalid capitalized name regex")
});

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("Invalid email regex")
});

/// Short, fully capitalized line near the top of the page
struct TopIsolatedLine;

impl NameStrategy for TopIsolatedLine {
    fn name(&self) -> &'static str {
        "top isolated line"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        text.head(7)
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                let words = word_count(line);
                let lower = line.to_lowercase();
                (2..=4).contains(&words)
                    && line.chars().count() < 40
                    && line.split_whitespace().all(starts_uppercase)
                    && !LAYOUT_WORDS.iter().any(|word| lower.contains(word))
            })
            .map(|(index, line)| {
                NameCandidate::new(line.as_str(), 100 - 10 * index as i32, StrategyTag::TopIsolated)
            })
            .collect()
    }
}

/// "Name: Jane Doe", "Full Name - Jane Doe" and similar
struct HeaderLabel;

impl NameStrategy for HeaderLabel {
    fn name(&self) -> &'static str {
        "header label"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        let mut candidates = Vec::new();

        for line in text.head(25) {
            let lower = line.to_lowercase();
            for header in NAME_HEADERS {
                if !lower.contains(&header.to_lowercase()) {
                    continue;
                }
                for &separator in HEADER_SEPARATORS {
                    let Some(value) = line.split(separator).nth(1) else {
                        continue;
                    };
                    let value = value.trim();
                    if (2..=5).contains(&word_count(value))
                        && value.split_whitespace().all(|word| word.chars().count() > 1)
                    {
                        candidates.push(NameCandidate::new(value, 90, StrategyTag::HeaderBased));
                    }
                }
            }
        }

        candidates
    }
}

/// Name at the very start or very end of the top block, set off by a line
/// break or a wide gap (two-column layouts)
struct AlignedLayout;

impl NameStrategy for AlignedLayout {
    fn name(&self) -> &'static str {
        "aligned layout"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        let block = text.head_joined(15, "\n");
        let accept = |name: &str| {
            (2..=4).contains(&word_count(name))
                && !name
                    .split_whitespace()
                    .any(|word| matches!(word.to_lowercase().as_str(), "resume" | "cv"))
        };

        let left = LEFT_ALIGNED
            .captures_iter(&block)
            .map(|caps| caps[1].to_string())
            .filter(|name| accept(name))
            .map(|name| NameCandidate::new(name, 80, StrategyTag::LeftAligned));
        let right = RIGHT_ALIGNED
            .captures_iter(&block)
            .map(|caps| caps[1].to_string())
            .filter(|name| accept(name))
            .map(|name| NameCandidate::new(name, 80, StrategyTag::RightAligned));

        left.chain(right).collect()
    }
}

/// "Resume of Jane Doe", "CV for Jane Doe"
struct ResumeOf;

impl NameStrategy for ResumeOf {
    fn name(&self) -> &'static str {
        "resume-of phrase"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        let block = text.head_joined(15, " ");

        RESUME_OF
            .captures_iter(&block)
            .map(|caps| caps[1].to_string())
            .filter(|name| {
                (2..=4).contains(&word_count(name)) && name.split_whitespace().all(starts_uppercase)
            })
            .map(|name| NameCandidate::new(name, 85, StrategyTag::ResumeOf))
            .collect()
    }
}

/// Any run of capitalized words, preferring lines near the top
struct CapitalizedRun;

impl NameStrategy for CapitalizedRun {
    fn name(&self) -> &'static str {
        "capitalized run"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        let mut candidates = Vec::new();

        for (index, line) in text.head(20).iter().enumerate() {
            for caps in CAPITALIZED_NAME.captures_iter(line) {
                let name = &caps[1];
                if (2..=5).contains(&word_count(name)) {
                    candidates.push(NameCandidate::new(
                        name,
                        70 - 2 * index as i32,
                        StrategyTag::CapitalizedRun,
                    ));
                }
            }
        }

        candidates
    }
}

/// Person entities from the recognizer, earlier entities preferred
struct NamedEntity {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl NameStrategy for NamedEntity {
    fn name(&self) -> &'static str {
        "named entity"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        let section = text.head_joined(35, " ");

        // The index counts every entity, not only people
        self.recognizer
            .recognize(&section)
            .into_iter()
            .enumerate()
            .filter(|(_, entity)| entity.is_person() && (2..=5).contains(&word_count(&entity.text)))
            .map(|(index, entity)| {
                NameCandidate::new(entity.text, 60 - 5 * index as i32, StrategyTag::NamedEntity)
            })
            .collect()
    }
}

/// jane.doe@example.com -> "Jane Doe"
struct EmailLocalPart;

impl NameStrategy for EmailLocalPart {
    fn name(&self) -> &'static str {
        "email local part"
    }

    fn generate(&self, text: &NormalizedText) -> Vec<NameCandidate> {
        text.head(30)
            .iter()
            .filter_map(|line| EMAIL_ADDRESS.find(line))
            .filter_map(|email| {
                let local = email.as_str().split('@').next()?;
                if !local.contains('.') {
                    return None;
                }
                let name = local.split('.').map(capitalize).collect::<Vec<_>>().join(" ");
                Some(NameCandidate::new(name, 30, StrategyTag::EmailDerived))
            })
            .collect()
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

/// First character upper-cased, the rest lower-cased
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
