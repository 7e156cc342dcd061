//! Fuzzy string similarity on a 0-100 scale
//!
//! Two shapes are offered by every backend: `ratio` compares the whole of
//! both strings, `partial_ratio` slides the shorter string along the longer
//! one and keeps the best alignment.

use crate::config::SimilarityBackend;
use std::sync::Arc;

/// Similarity scores in `0..=100`. Either string being empty scores 0.
pub trait Similarity: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> u32;
    fn partial_ratio(&self, a: &str, b: &str) -> u32;
}

/// Backend selected in the scoring configuration
pub fn for_backend(backend: SimilarityBackend) -> Arc<dyn Similarity> {
    match backend {
        SimilarityBackend::Indel => Arc::new(IndelSimilarity),
        SimilarityBackend::Levenshtein => Arc::new(LevenshteinSimilarity),
    }
}

/// Insertion/deletion distance normalised by the combined length,
/// i.e. `2 * LCS / (|a| + |b|)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelSimilarity;

impl Similarity for IndelSimilarity {
    fn ratio(&self, a: &str, b: &str) -> u32 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        to_percent(indel_ratio(&a, &b))
    }

    fn partial_ratio(&self, a: &str, b: &str) -> u32 {
        to_percent(best_alignment(a, b, indel_ratio))
    }
}

/// Edit distance normalised by the longer length, via `strsim`
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinSimilarity;

impl Similarity for LevenshteinSimilarity {
    fn ratio(&self, a: &str, b: &str) -> u32 {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        to_percent(strsim::normalized_levenshtein(a, b))
    }

    fn partial_ratio(&self, a: &str, b: &str) -> u32 {
        to_percent(best_alignment(a, b, |x, y| {
            let x: String = x.iter().collect();
            let y: String = y.iter().collect();
            strsim::normalized_levenshtein(&x, &y)
        }))
    }
}

fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round_ties_even().clamp(0.0, 100.0) as u32
}

fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    (2 * lcs_length(a, b)) as f64 / total as f64
}

/// Longest common subsequence, single rolling row
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];

    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Best `score` of the shorter string against every window of the longer one:
/// its growing prefixes, each full-length window, then its shrinking suffixes.
/// Equal-length inputs are aligned in both directions.
fn best_alignment<F>(a: &str, b: &str, score: F) -> f64
where
    F: Fn(&[char], &[char]) -> f64,
{
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let best = if a.len() <= b.len() {
        slide(&a, &b, &score)
    } else {
        slide(&b, &a, &score)
    };

    if a.len() == b.len() && best < 1.0 {
        best.max(slide(&b, &a, &score))
    } else {
        best
    }
}

fn slide<F>(needle: &[char], haystack: &[char], score: &F) -> f64
where
    F: Fn(&[char], &[char]) -> f64,
{
    let m = needle.len();
    let n = haystack.len();

    let prefixes = (1..m).map(|end| &haystack[..end]);
    let windows = (0..=n - m).map(|start| &haystack[start..start + m]);
    let suffixes = (n - m + 1..n).map(|start| &haystack[start..]);

    let mut best = 0.0f64;
    for window in prefixes.chain(windows).chain(suffixes) {
        best = best.max(score(needle, window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indel_ratio() {
        let sim = IndelSimilarity;
        assert_eq!(sim.ratio("python", "python"), 100);
        assert_eq!(sim.ratio("sql", "django"), 0);
        // LCS "ittn": 2 * 4 / 13
        assert_eq!(sim.ratio("kitten", "sitting"), 62);
        // only one of 'o'/'n' can be kept in order
        assert_eq!(sim.ratio("python", "django"), 17);
    }

    #[test]
    fn test_ratio_rounds_half_to_even() {
        // 2 * 1 / 16 = 12.5%
        assert_eq!(IndelSimilarity.ratio("abcdefgh", "aijklmnp"), 12);
    }

    #[test]
    fn test_partial_ratio_finds_substring() {
        let sim = IndelSimilarity;
        assert_eq!(sim.partial_ratio("this is a test", "this is a test!"), 100);
        assert_eq!(sim.partial_ratio("mba", "Executive mba, 2019"), 100);
        assert_eq!(sim.partial_ratio("Executive mba, 2019", "mba"), 100);
    }

    #[test]
    fn test_partial_ratio_considers_edge_windows() {
        // best window is the 5-char prefix "btech": 2 * 5 / 11
        assert_eq!(IndelSimilarity.partial_ratio("b.tech", "btech developer"), 91);
    }

    #[test]
    fn test_empty_strings_score_zero() {
        for sim in [for_backend(SimilarityBackend::Indel), for_backend(SimilarityBackend::Levenshtein)] {
            assert_eq!(sim.ratio("", "python"), 0);
            assert_eq!(sim.ratio("", ""), 0);
            assert_eq!(sim.partial_ratio("python", ""), 0);
        }
    }

    #[test]
    fn test_levenshtein_backend() {
        let sim = LevenshteinSimilarity;
        assert_eq!(sim.ratio("python", "python"), 100);
        // 3 edits over 7 chars
        assert_eq!(sim.ratio("kitten", "sitting"), 57);
        assert_eq!(sim.partial_ratio("sql", "postgresql"), 100);
    }

    #[test]
    fn test_lcs_length() {
        let a: Vec<char> = "ABCBDAB".chars().collect();
        let b: Vec<char> = "BDCABA".chars().collect();
        assert_eq!(lcs_length(&a, &b), 4);
    }
}
