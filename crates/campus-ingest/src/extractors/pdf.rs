//! PDF text extractor.

use super::TextExtractor;
use crate::error::{IngestError, IngestResult};
use std::path::Path;
use tracing::debug;

/// Extractor for PDF files.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> IngestResult<String> {
        if !path.exists() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        debug!("Extracting PDF: {:?}", path);

        let content = pdf_extract::extract_text(path).map_err(|e| IngestError::ParseError {
            path: path.to_path_buf(),
            message: format!("Failed to extract text from PDF: {}", e),
        })?;

        let content = join_pages(&content);

        debug!("Extracted {} characters from PDF", content.len());

        Ok(content)
    }

    fn extensions(&self) -> &[&str] {
        &["pdf"]
    }
}

/// Pages come back separated by form feeds; join them with newlines and
/// collapse repeated blank lines.
fn join_pages(text: &str) -> String {
    text.replace('\x0C', "\n")
        .lines()
        .map(|line| line.trim())
        .fold(Vec::new(), |mut acc, line| {
            let last_was_empty = acc.last().map(|s: &String| s.is_empty()).unwrap_or(false);
            if !(line.is_empty() && last_was_empty) {
                acc.push(line.to_string());
            }
            acc
        })
        .join("\n")
        .trim()
        .to_string()
}
