//! Campus Ingest - Document loading for the campus assistant.
//!
//! This crate provides:
//! - Per-format text extraction (PDF, Word, plain text/Markdown)
//! - Source discovery from configured entries and a scanned directory
//! - Best-effort loading into a document store

mod error;
mod extractors;
mod loader;

pub use error::{IngestError, IngestResult};
pub use extractors::{extractor_for, DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
pub use loader::{load_all, resolve_sources, scan_directory, LoadReport, SkippedSource};
