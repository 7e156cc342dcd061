//! Single-field extractors: contact details, qualification and skill set

use crate::processing::text_processor::NormalizedText;
use crate::processing::vocabulary::vocabulary;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Placeholder for any field that could not be determined
pub const NOT_FOUND: &str = "Not Found";

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{10}\b").expect("Invalid phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

/// First standalone run of exactly ten digits
pub fn extract_phone(text: &NormalizedText) -> String {
    first_match(&PHONE_REGEX, text.full_text())
}

/// First email-shaped token
pub fn extract_email(text: &NormalizedText) -> String {
    first_match(&EMAIL_REGEX, text.full_text())
}

/// Matched qualification tokens joined with ", "
pub fn extract_qualification(text: &NormalizedText) -> String {
    render(&vocabulary().qualifications(text.full_text()), ", ")
}

/// Dictionary skills followed by job titles, joined with ","
pub fn extract_skill_set(text: &NormalizedText) -> String {
    let vocab = vocabulary();
    let mut seen = HashSet::new();
    let combined: Vec<String> = vocab
        .skills(text.full_text())
        .into_iter()
        .chain(vocab.job_titles(text.full_text()))
        .filter(|item| seen.insert(item.clone()))
        .collect();

    render(&combined, ",")
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn render(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        NOT_FOUND.to_string()
    } else {
        items.join(separator)
    }
}
