//! Plain text and Markdown extractor.

use super::TextExtractor;
use crate::error::{IngestError, IngestResult};
use std::path::Path;

/// Extractor for plain text and Markdown files, read as-is.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> IngestResult<String> {
        if !path.exists() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(content.trim().to_string())
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "md"]
    }
}
