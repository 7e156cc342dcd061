//! Named-entity recognition used by the name extractor
//!
//! The name extractor only needs "which spans look like people, in order".
//! `GazetteerRecognizer` answers that with word lists; anything smarter can be
//! plugged in behind `EntityRecognizer`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}

/// Returns entities in the order they appear in `text`
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Recognizes nothing; used when entity recognition is switched off
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn recognize(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}

static CAPITALIZED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][A-Za-z'\-]*\.?(?:[ \t]+[A-Z][A-Za-z'\-]*\.?)*")
        .expect("Invalid capitalized run regex")
});

const GIVEN_NAMES: &[&str] = &[
    "aarav", "aditi", "aditya", "ahmed", "aisha", "akash", "alex", "alice", "amit", "ananya",
    "andrew", "anil", "anita", "anjali", "anna", "arjun", "ashok", "david", "deepak", "divya",
    "emily", "emma", "fatima", "gaurav", "james", "jane", "jennifer", "john", "joseph", "karan",
    "kavya", "kiran", "laura", "lakshmi", "linda", "maria", "mark", "mary", "michael", "mohammed",
    "neha", "nikhil", "olivia", "pooja", "priya", "rahul", "raj", "rajesh", "ravi", "robert",
    "rohan", "sanjay", "sara", "sarah", "shreya", "sneha", "sophia", "sunil", "suresh", "thomas",
    "vijay", "vikram", "william", "yusuf",
];

const ORGANIZATION_SUFFIXES: &[&str] = &[
    "academy", "bank", "college", "company", "corp", "corporation", "group", "inc", "institute",
    "labs", "limited", "llc", "ltd", "school", "solutions", "systems", "technologies", "university",
];

/// Word-list recognizer: a capitalized run whose first word is a known given
/// name is a person; one ending in an organisation suffix is an organisation.
pub struct GazetteerRecognizer {
    given_names: HashSet<String>,
    organization_suffixes: HashSet<String>,
}

impl Default for GazetteerRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GazetteerRecognizer {
    pub fn new() -> Self {
        Self::with_given_names(Vec::<String>::new())
    }

    /// Built-in gazetteer extended with `extra` given names
    pub fn with_given_names<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut given_names: HashSet<String> =
            GIVEN_NAMES.iter().map(|name| name.to_string()).collect();
        given_names.extend(extra.into_iter().map(|name| name.as_ref().to_lowercase()));

        Self {
            given_names,
            organization_suffixes: ORGANIZATION_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn classify(&self, run: &str) -> Option<EntityLabel> {
        let words: Vec<String> = run
            .split_whitespace()
            .map(|word| word.trim_end_matches('.').to_lowercase())
            .collect();
        let first = words.first()?;
        let last = words.last()?;

        if words.len() >= 2 && self.organization_suffixes.contains(last) {
            Some(EntityLabel::Organization)
        } else if self.given_names.contains(first) {
            Some(EntityLabel::Person)
        } else {
            None
        }
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        CAPITALIZED_RUN
            .find_iter(text)
            .filter_map(|run| {
                let trimmed = run.as_str().trim_end_matches('.');
                self.classify(trimmed).map(|label| Entity {
                    text: trimmed.to_string(),
                    label,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_detected_by_given_name() {
        let recognizer = GazetteerRecognizer::new();
        let entities = recognizer.recognize("Contact Priya Sharma for details");

        // "Contact Priya Sharma" starts with an unknown word, so it is not a person
        assert!(entities.is_empty());

        let entities = recognizer.recognize("contact Priya Sharma for details");
        assert_eq!(
            entities,
            vec![Entity {
                text: "Priya Sharma".to_string(),
                label: EntityLabel::Person,
            }]
        );
    }

    #[test]
    fn test_organizations_are_reported_in_order() {
        let recognizer = GazetteerRecognizer::new();
        let entities = recognizer.recognize("studied at Stanford University then met john smith and Rahul Verma");

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].label, EntityLabel::Organization);
        assert_eq!(entities[0].text, "Stanford University");
        assert!(entities[1].is_person());
        assert_eq!(entities[1].text, "Rahul Verma");
    }

    #[test]
    fn test_extra_given_names() {
        let recognizer = GazetteerRecognizer::with_given_names(["Zubin"]);
        let entities = recognizer.recognize("by Zubin Mehta.");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Zubin Mehta");
    }

    #[test]
    fn test_null_recognizer() {
        assert!(NullRecognizer.recognize("Priya Sharma").is_empty());
    }
}
