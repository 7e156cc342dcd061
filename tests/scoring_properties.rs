//! Property tests for scoring, ranking and extraction robustness

use proptest::prelude::*;
use resume_ranker::processing::similarity::{IndelSimilarity, LevenshteinSimilarity, Similarity};
use resume_ranker::processing::{CandidateRecord, Criteria, Ranker, RecordBuilder, Scorer};

const QUALIFICATIONS: &[&str] = &["B.Tech", "MBA", "MCA", "B.Sc, M.Sc", "PhD", "Not Found"];
const SKILLS: &[&str] = &[
    "Python", "SQL", "Docker", "React", "Node.js", "AWS", "Leadership", "Java", "Excel", "Figma",
];

fn skill_list() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SKILLS), 0..6).prop_map(|skills| skills.join(","))
}

fn record_strategy() -> impl Strategy<Value = CandidateRecord> {
    (prop::sample::select(QUALIFICATIONS), skill_list(), 0u32..40).prop_map(
        |(qualification, skills, experience_years)| CandidateRecord {
            name: "Candidate".to_string(),
            phone: "Not Found".to_string(),
            email: "Not Found".to_string(),
            qualification: qualification.to_string(),
            skills: if skills.is_empty() { "Not Found".to_string() } else { skills },
            experience_years,
        },
    )
}

fn criteria_strategy() -> impl Strategy<Value = Criteria> {
    (
        prop::sample::select(QUALIFICATIONS),
        skill_list(),
        0u32..20,
        -3i64..15,
    )
        .prop_map(|(qualification, skills, min_experience, result_count)| Criteria {
            qualification: qualification.to_lowercase(),
            skills: skills.replace(',', ", ").to_lowercase(),
            min_experience,
            result_count,
        })
}

proptest! {
    /// Scoring the same inputs twice gives the same value
    #[test]
    fn prop_score_is_idempotent(record in record_strategy(), criteria in criteria_strategy()) {
        let scorer = Scorer::default();
        prop_assert_eq!(scorer.score(&record, &criteria), scorer.score(&record, &criteria));
    }

    /// Every component respects its cap and the total stays in [0, 100]
    #[test]
    fn prop_score_is_bounded(record in record_strategy(), criteria in criteria_strategy()) {
        let breakdown = Scorer::default().breakdown(&record, &criteria);

        prop_assert!((0.0..=30.0).contains(&breakdown.qualification));
        prop_assert!((0.0..=40.0).contains(&breakdown.skills));
        prop_assert!((0.0..=30.0).contains(&breakdown.experience));
        prop_assert!((0.0..=100.0).contains(&breakdown.total));
    }

    /// More experience never lowers the experience component
    #[test]
    fn prop_experience_is_monotonic(
        record in record_strategy(),
        criteria in criteria_strategy(),
        extra in 1u32..10,
    ) {
        let scorer = Scorer::default();
        let before = scorer.breakdown(&record, &criteria).experience;

        let mut more = record.clone();
        more.experience_years += extra;
        let after = scorer.breakdown(&more, &criteria).experience;

        prop_assert!(after >= before);
    }

    /// Ranking is repeatable, sorted and sized by the result count
    #[test]
    fn prop_ranking_is_deterministic(
        records in prop::collection::vec(record_strategy(), 0..20),
        criteria in criteria_strategy(),
    ) {
        let ranker = Ranker::default();
        let first = ranker.rank(records.clone(), &criteria);
        let second = ranker.rank(records.clone(), &criteria);

        let first_view: Vec<_> = first.iter().map(|s| (s.candidate.clone(), s.score)).collect();
        let second_view: Vec<_> = second.iter().map(|s| (s.candidate.clone(), s.score)).collect();
        prop_assert_eq!(first_view, second_view);

        prop_assert!(first.windows(2).all(|pair| pair[0].score >= pair[1].score));

        let expected_len = if criteria.result_count <= 0 {
            0
        } else {
            records.len().min(criteria.result_count as usize)
        };
        prop_assert_eq!(first.len(), expected_len);
    }

    /// Similarities stay on the 0-100 scale and a string fully matches itself
    #[test]
    fn prop_similarity_scale(a in "[a-z .,+#]{0,16}", b in "[a-z .,+#]{0,16}") {
        for similarity in [&IndelSimilarity as &dyn Similarity, &LevenshteinSimilarity] {
            prop_assert!(similarity.ratio(&a, &b) <= 100);
            prop_assert!(similarity.partial_ratio(&a, &b) <= 100);
            if !a.is_empty() {
                prop_assert_eq!(similarity.ratio(&a, &a), 100);
                prop_assert_eq!(similarity.partial_ratio(&a, &a), 100);
            }
        }
        prop_assert_eq!(IndelSimilarity.ratio(&a, &b), IndelSimilarity.ratio(&b, &a));
    }

    /// Arbitrary text always produces a fully populated record
    #[test]
    fn prop_builder_never_leaves_fields_empty(text in "\\PC{0,300}") {
        let record = RecordBuilder::default().with_current_year(2025).build(&text);

        prop_assert!(!record.name.is_empty());
        prop_assert!(!record.phone.is_empty());
        prop_assert!(!record.email.is_empty());
        prop_assert!(!record.qualification.is_empty());
        prop_assert!(!record.skills.is_empty());
    }
}
