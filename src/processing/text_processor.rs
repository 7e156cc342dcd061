//! Text normalization
//!
//! Every extractor works on the same cleaned, line-oriented view of a
//! document. Line order is preserved because position is a signal: names and
//! headers live near the top.

/// Trimmed, non-empty lines of one document plus the rejoined full text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    lines: Vec<String>,
    full_text: String,
}

impl NormalizedText {
    /// Split on line breaks, trim every line and drop the empty ones
    pub fn new(raw: &str) -> Self {
        let lines: Vec<String> = raw
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let full_text = lines.join("\n");

        Self { lines, full_text }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The first `count` lines (or all of them if there are fewer)
    pub fn head(&self, count: usize) -> &[String] {
        &self.lines[..count.min(self.lines.len())]
    }

    /// The first `count` lines joined with `separator`
    pub fn head_joined(&self, count: usize, separator: &str) -> String {
        self.head(count).join(separator)
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let text = NormalizedText::new("  Jane Doe  \n\n\t\nSoftware Engineer\r\n   \nPython, SQL ");

        assert_eq!(text.lines(), &["Jane Doe", "Software Engineer", "Python, SQL"]);
        assert_eq!(text.full_text(), "Jane Doe\nSoftware Engineer\nPython, SQL");
    }

    #[test]
    fn test_empty_document() {
        let text = NormalizedText::new(" \n\n  \t ");

        assert!(text.is_empty());
        assert_eq!(text.full_text(), "");
        assert!(text.head(7).is_empty());
    }

    #[test]
    fn test_head_is_clamped_to_available_lines() {
        let text = NormalizedText::from("a\nb\nc");

        assert_eq!(text.head(2), &["a", "b"]);
        assert_eq!(text.head(10).len(), 3);
        assert_eq!(text.head_joined(2, " "), "a b");
    }
}
