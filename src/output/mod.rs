//! Report structures and their console, JSON and markdown renderings

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{RankingReport, RecordEntry, RecordReport};
