//! Output formatters for rankings and candidate records

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{RankedEntry, RankingReport, RecordEntry, RecordReport};
use crate::processing::fields::NOT_FOUND;
use crate::processing::scorer::{EXPERIENCE_WEIGHT, QUALIFICATION_WEIGHT, SKILLS_WEIGHT};
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String>;
    fn format_records(&self, report: &RecordReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score.round() as u8 {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    /// Dims sentinel values so real data stands out
    fn field(&self, value: &str) -> String {
        if value == NOT_FOUND {
            self.colorize(value, Color::BrightBlack)
        } else {
            value.to_string()
        }
    }

    fn format_record(&self, entry: &RecordEntry) -> String {
        let mut output = String::new();
        let record = &entry.record;

        output.push_str(&format!("  Name:          {}\n", self.colorize(&record.name, Color::Cyan)));
        output.push_str(&format!("  Phone:         {}\n", self.field(&record.phone)));
        output.push_str(&format!("  Email:         {}\n", self.field(&record.email)));
        output.push_str(&format!("  Qualification: {}\n", self.field(&record.qualification)));
        output.push_str(&format!("  Skills:        {}\n", self.field(&record.skills)));
        output.push_str(&format!("  Experience:    {} years\n", record.experience_years));
        output.push_str(&format!("  Source:        {}\n", entry.source));
        output
    }

    fn format_ranked(&self, ranked: &RankedEntry) -> String {
        let mut output = String::new();
        let id = ranked
            .entry
            .id
            .map(|id| format!(" (#{})", id))
            .unwrap_or_default();

        output.push_str(&format!(
            "{}. {}{} {:.2} {}\n",
            ranked.rank,
            self.colorize(&ranked.entry.record.name, Color::Cyan),
            id,
            ranked.score,
            self.format_score_badge(ranked.score)
        ));

        if self.detailed {
            output.push_str(&self.format_record(&ranked.entry));
            if let Some(breakdown) = &ranked.breakdown {
                output.push_str(&format!(
                    "  🎓 Qualification: {:.2}/{}\n",
                    breakdown.qualification, QUALIFICATION_WEIGHT
                ));
                output.push_str(&format!("  🛠️  Skills:        {:.2}/{}", breakdown.skills, SKILLS_WEIGHT));
                if !breakdown.matched_skills.is_empty() {
                    output.push_str(&format!(" ({})", breakdown.matched_skills.join(", ")));
                }
                output.push('\n');
                output.push_str(&format!(
                    "  ⏳ Experience:    {:.2}/{}\n",
                    breakdown.experience, EXPERIENCE_WEIGHT
                ));
            }
            output.push('\n');
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🏆 CANDIDATE RANKING", 1));
        output.push_str(&format!(
            "Generated: {} | Candidates scored: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.population
        ));

        output.push_str(&self.format_header("Criteria", 2));
        output.push_str(&format!("Qualification: {}\n", report.criteria.qualification));
        output.push_str(&format!("Skills: {}\n", report.criteria.skills));
        output.push_str(&format!("Minimum experience: {} years\n", report.criteria.min_experience));

        output.push_str(&self.format_header(&format!("Top {}", report.results.len()), 2));
        if report.results.is_empty() {
            output.push_str(&self.colorize("No candidates to show\n", Color::Yellow));
        }
        for ranked in &report.results {
            output.push_str(&self.format_ranked(ranked));
        }

        Ok(output)
    }

    fn format_records(&self, report: &RecordReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("📄 {} CANDIDATE RECORD(S)", report.entries.len()), 1));
        for entry in &report.entries {
            let title = match entry.id {
                Some(id) => format!("#{} {}", id, entry.record.name),
                None => entry.record.name.clone(),
            };
            output.push_str(&self.format_header(&title, 3));
            output.push_str(&self.format_record(entry));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_records(&self, report: &RecordReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        match score.round() as u8 {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    /// Pipes would break the table layout
    fn cell(value: &str) -> String {
        value.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 🏆 Candidate Ranking\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Candidates scored:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.population
            ));
        }

        output.push_str("## Criteria\n\n");
        output.push_str(&format!("- **Qualification:** {}\n", report.criteria.qualification));
        output.push_str(&format!("- **Skills:** {}\n", report.criteria.skills));
        output.push_str(&format!(
            "- **Minimum experience:** {} years\n\n",
            report.criteria.min_experience
        ));

        output.push_str("## Results\n\n");
        output.push_str("| Rank | Name | Score | Rating | Qualification | Skills | Experience |\n");
        output.push_str("|------|------|-------|--------|---------------|--------|------------|\n");
        for ranked in &report.results {
            let record = &ranked.entry.record;
            output.push_str(&format!(
                "| {} | {} | {:.2} | {} | {} | {} | {} |\n",
                ranked.rank,
                Self::cell(&record.name),
                ranked.score,
                Self::markdown_score_badge(ranked.score),
                Self::cell(&record.qualification),
                Self::cell(&record.skills),
                record.experience_years
            ));
        }

        Ok(output)
    }

    fn format_records(&self, report: &RecordReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📄 Candidate Records\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        for entry in &report.entries {
            let record = &entry.record;
            match entry.id {
                Some(id) => output.push_str(&format!("## #{} {}\n\n", id, record.name)),
                None => output.push_str(&format!("## {}\n\n", record.name)),
            }
            output.push_str(&format!("- **Phone:** {}\n", record.phone));
            output.push_str(&format!("- **Email:** {}\n", record.email));
            output.push_str(&format!("- **Qualification:** {}\n", record.qualification));
            output.push_str(&format!("- **Skills:** {}\n", record.skills));
            output.push_str(&format!("- **Experience:** {} years\n", record.experience_years));
            output.push_str(&format!("- **Source:** `{}`\n\n", entry.source));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn ranking(&self, report: &RankingReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_ranking(report)
    }

    pub fn records(&self, report: &RecordReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_records(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::CandidateRecord;
    use crate::processing::scorer::{Criteria, ScoreBreakdown};

    fn entry(id: Option<u64>, name: &str) -> RecordEntry {
        RecordEntry {
            id,
            source: format!("{}.txt", name.to_lowercase().replace(' ', "_")),
            record: CandidateRecord {
                name: name.to_string(),
                phone: "9876543210".to_string(),
                email: NOT_FOUND.to_string(),
                qualification: "MBA".to_string(),
                skills: "Python,SQL".to_string(),
                experience_years: 4,
            },
        }
    }

    fn ranking() -> RankingReport {
        RankingReport {
            metadata: Default::default(),
            criteria: Criteria {
                qualification: "MBA".to_string(),
                skills: "python, sql".to_string(),
                min_experience: 5,
                result_count: 2,
            },
            population: 3,
            results: vec![
                RankedEntry {
                    rank: 1,
                    score: 94.0,
                    entry: entry(Some(7), "Jane Doe"),
                    breakdown: Some(ScoreBreakdown {
                        qualification: 30.0,
                        skills: 40.0,
                        experience: 24.0,
                        total: 94.0,
                        matched_skills: vec!["python".to_string(), "sql".to_string()],
                    }),
                },
                RankedEntry {
                    rank: 2,
                    score: 54.0,
                    entry: entry(Some(3), "Ravi Kumar"),
                    breakdown: None,
                },
            ],
        }
    }

    #[test]
    fn test_console_ranking_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_ranking(&ranking()).unwrap();

        assert!(output.contains("█ 🏆 CANDIDATE RANKING"));
        assert!(output.contains("1. Jane Doe (#7) 94.00 [EXCELLENT]"));
        assert!(output.contains("2. Ravi Kumar (#3) 54.00 [BELOW AVG]"));
        assert!(output.contains("(python, sql)"));
    }

    #[test]
    fn test_json_ranking_flattens_entries() {
        let output = JsonFormatter::new(false).format_ranking(&ranking()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let first = &value["results"][0];
        assert_eq!(first["rank"], 1);
        assert_eq!(first["id"], 7);
        assert_eq!(first["record"]["name"], "Jane Doe");
        assert!(value["results"][1].get("breakdown").is_none());
    }

    #[test]
    fn test_markdown_records() {
        let report = RecordReport::new(vec![entry(None, "Jane Doe")]);
        let output = MarkdownFormatter::new(false).format_records(&report).unwrap();

        assert!(output.starts_with("# 📄 Candidate Records"));
        assert!(output.contains("## Jane Doe"));
        assert!(output.contains("- **Source:** `jane_doe.txt`"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let mut report = ranking();
        report.results[0].entry.record.skills = "C|C++".to_string();
        let output = ReportGenerator::with_options(false, false, true, false)
            .ranking(&report, OutputFormat::Markdown)
            .unwrap();

        assert!(output.contains("C\\|C++"));
    }
}
