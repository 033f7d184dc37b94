//! Text extractors for the supported document formats.

mod docx;
mod pdf;
mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

use crate::error::IngestResult;
use campus_core::DocumentFormat;
use std::path::Path;

/// Trait for per-format text extraction.
pub trait TextExtractor: Send + Sync {
    /// Extract the raw text of the file at the given path.
    fn extract(&self, path: &Path) -> IngestResult<String>;

    /// Get the supported file extensions.
    fn extensions(&self) -> &[&str];

    /// Check if this extractor supports the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// Get the extractor for a document format.
pub fn extractor_for(format: DocumentFormat) -> Box<dyn TextExtractor> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfExtractor::new()),
        DocumentFormat::Docx => Box::new(DocxExtractor::new()),
        DocumentFormat::Text => Box::new(PlainTextExtractor::new()),
    }
}
