//! Word document text extractor.

use super::TextExtractor;
use crate::error::{IngestError, IngestResult};
use std::path::Path;
use tracing::debug;

/// Extractor for Word (.docx) files.
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> IngestResult<String> {
        if !path.exists() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        debug!("Extracting Word document: {:?}", path);

        let bytes = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| IngestError::ParseError {
            path: path.to_path_buf(),
            message: format!("Failed to read Word document: {}", e),
        })?;

        let content = paragraph_texts(docx);

        debug!("Extracted {} characters from Word document", content.len());

        Ok(content)
    }

    fn extensions(&self) -> &[&str] {
        &["docx"]
    }
}

/// Paragraph texts in document order, newline-separated.
fn paragraph_texts(docx: docx_rs::Docx) -> String {
    let mut content = String::new();

    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(text) = child {
                            content.push_str(&text.text);
                        }
                    }
                }
            }
            content.push('\n');
        }
    }

    content.trim().to_string()
}
