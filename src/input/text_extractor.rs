//! Text extraction from the supported document formats

use crate::error::{RankerError, Result};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let display = path.display().to_string();

        // The decoder can panic on malformed files; keep that inside this document
        tokio::task::spawn_blocking(move || {
            match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
                Ok(Ok(text)) => Ok(text),
                Ok(Err(e)) => Err(RankerError::PdfExtraction(format!(
                    "Failed to extract text from PDF '{}': {}",
                    display, e
                ))),
                Err(_) => Err(RankerError::PdfExtraction(format!(
                    "PDF decoder aborted on '{}'",
                    display
                ))),
            }
        })
        .await?
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Renders markdown to HTML and strips it back to plain lines
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_to_text(&html_output)
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br />", "\n")
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n");

    let stripped = HTML_TAG.replace_all(&text, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_keeps_line_structure() {
        let text = markdown_to_text("# Jane Doe\n\n**Data Analyst**\n\n- Python\n- SQL &amp; Excel\n");
        assert_eq!(text, "Jane Doe\nData Analyst\nPython\nSQL & Excel");
    }

    #[test]
    fn test_html_entities_are_decoded_after_tags_are_stripped() {
        assert_eq!(html_to_text("<p>a &lt;b&gt; c</p>"), "a <b> c");
    }
}
