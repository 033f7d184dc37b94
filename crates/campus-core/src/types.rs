//! Core domain types for the campus assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Text => "text",
        }
    }

    /// Detect the format from a file extension. Unsupported extensions
    /// return `None` and are skipped at discovery time.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" | "md" => Some(DocumentFormat::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A document source to load: a logical name, a file path, and the format
/// resolved once at discovery time.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub name: String,
    pub path: PathBuf,
    pub format: DocumentFormat,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, format: DocumentFormat) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            format,
        }
    }
}

/// A successfully extracted document. Content is never empty: extraction
/// results with no text are dropped before they reach the store.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedDocument {
    pub name: String,
    pub content: String,
    pub format: DocumentFormat,
    pub source_path: PathBuf,
}

impl LoadedDocument {
    /// Character count of the extracted content.
    pub fn chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// An insertion-ordered collection of loaded documents with unique names.
///
/// Built wholesale by the loader and replaced wholesale on reload; individual
/// documents are never updated in place.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<LoadedDocument>,
    loaded_at: DateTime<Utc>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Insert a document. Returns `false` without inserting when the content
    /// is empty or the name is already taken (first-loaded wins).
    pub fn insert(&mut self, document: LoadedDocument) -> bool {
        if document.content.is_empty() || self.contains(&document.name) {
            return false;
        }
        self.documents.push(document);
        true
    }

    pub fn get(&self, name: &str) -> Option<&LoadedDocument> {
        self.documents.iter().find(|doc| doc.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.iter().any(|doc| doc.name == name)
    }

    /// Iterate documents in load order.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total character count across all documents.
    pub fn total_chars(&self) -> usize {
        self.documents.iter().map(|doc| doc.chars()).sum()
    }

    /// When this store generation was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
