//! CLI interface for the resume ranker

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Extract candidate records from resumes and rank them against job criteria")]
#[command(long_about = "Builds structured candidate records (name, contact details, qualification, skills, experience) from PDF, text and markdown resumes, stores them, and ranks stored candidates against qualification, skill and experience criteria")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json, markdown (defaults to the configured format)
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract records from resume files and store them
    Ingest {
        /// Resume files (PDF, TXT, MD)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the extracted records without storing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Rank stored candidates against criteria
    Rank {
        /// Required qualification, e.g. "B.Tech"
        #[arg(short, long, default_value = "")]
        qualification: String,

        /// Comma-separated required skills
        #[arg(short, long, default_value = "")]
        skills: String,

        /// Minimum years of experience
        #[arg(short, long, default_value_t = 0)]
        experience: u32,

        /// Number of candidates to return
        #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
        count: i64,

        /// Include the per-component score breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show one stored candidate
    Show {
        /// Candidate id
        id: u64,
    },

    /// Delete every stored candidate
    Reset,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_rank_arguments() {
        let cli = Cli::parse_from([
            "resume-ranker",
            "rank",
            "--qualification",
            "MBA",
            "--skills",
            "python, sql",
            "--experience",
            "3",
            "-n",
            "5",
            "--output",
            "json",
        ]);

        assert_eq!(cli.output.as_deref(), Some("json"));
        match cli.command {
            Commands::Rank { qualification, skills, experience, count, detailed, .. } => {
                assert_eq!(qualification, "MBA");
                assert_eq!(skills, "python, sql");
                assert_eq!(experience, 3);
                assert_eq!(count, 5);
                assert!(!detailed);
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_ingest_requires_files() {
        assert!(Cli::try_parse_from(["resume-ranker", "ingest"]).is_err());
    }
}
