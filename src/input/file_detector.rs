//! File type detection

use crate::error::{RankerError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

/// Extensions accepted for ingestion
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                RankerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        match Self::from_extension(extension) {
            FileType::Unknown => Err(RankerError::UnsupportedFormat(format!(
                ".{} ({}); supported: {}",
                extension,
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))),
            file_type => Ok(file_type),
        }
    }
}
