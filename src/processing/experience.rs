//! Years-of-experience extraction
//!
//! Two independent signals are added together: the first explicit
//! "N years of experience" claim, and every "YYYY - YYYY|Present" date range.
//! Overlapping ranges, or a claim that restates the ranges, are counted more
//! than once. Callers that need a de-duplicated figure must post-process.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)";

static DIRECT_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)((?-u:\d)+)\s*(?:years?|yrs?)\s*(?:of\s+)?experience")
        .expect("Invalid experience regex")
});

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:{MONTH}\s+)?((?-u:\d){{4}})\s*[-–to]+\s*(?:{MONTH}\s+)?((?-u:\d){{4}}|Present|Current)"
    ))
    .expect("Invalid date range regex")
});

/// Breakdown of where the total came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExperienceEstimate {
    pub stated_years: u32,
    pub range_years: u32,
}

impl ExperienceEstimate {
    pub fn total(&self) -> u32 {
        self.stated_years.saturating_add(self.range_years)
    }
}

/// Total years of experience found in `text`; "Present"/"Current" resolve to `current_year`
pub fn extract_experience(text: &str, current_year: i32) -> u32 {
    estimate_experience(text, current_year).total()
}

pub fn estimate_experience(text: &str, current_year: i32) -> ExperienceEstimate {
    let stated_years = DIRECT_MENTION
        .captures(text)
        .map(|caps| saturating_number(&caps[1]))
        .unwrap_or(0);

    let range_years = DATE_RANGE
        .captures_iter(text)
        .filter_map(|caps| range_length(&caps[1], &caps[2], current_year))
        .fold(0u32, u32::saturating_add);

    ExperienceEstimate {
        stated_years,
        range_years,
    }
}

/// ASCII digits to a number, clamped at `u32::MAX`
fn saturating_number(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .fold(0u32, |value, digit| value.saturating_mul(10).saturating_add(digit))
}

/// Years covered by one range, or `None` if a year is malformed or the range runs backwards
fn range_length(start: &str, end: &str, current_year: i32) -> Option<u32> {
    let start: i32 = start.parse().ok()?;
    let end = if end.eq_ignore_ascii_case("present") || end.eq_ignore_ascii_case("current") {
        current_year
    } else {
        end.parse().ok()?
    };

    if end >= start {
        u32::try_from(end - start).ok()
    } else {
        None
    }
}
