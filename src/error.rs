//! Error handling for the resume ranker application
//!
//! Field extraction and scoring never fail; they degrade to sentinel values.
//! These errors belong to the collaborators around that core: file input,
//! the record store, configuration and output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record store error: {0}")]
    Store(String),

    #[error("Candidate record not found: {0}")]
    RecordNotFound(u64),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, RankerError>;

impl From<tokio::task::JoinError> for RankerError {
    fn from(err: tokio::task::JoinError) -> Self {
        RankerError::Processing(format!("Background task failed: {}", err))
    }
}
