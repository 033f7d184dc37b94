//! Status summary of the loaded document store.

use crate::types::DocumentStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Character count for a single loaded document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentChars {
    pub name: String,
    pub chars: usize,
}

/// Snapshot summary of a store generation: document count, sizes, and when
/// the generation was built.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub count: usize,
    pub total_chars: usize,
    pub documents: Vec<DocumentChars>,
    pub loaded_at: DateTime<Utc>,
}

impl StoreStatus {
    pub fn of(store: &DocumentStore) -> Self {
        let documents: Vec<DocumentChars> = store
            .iter()
            .map(|doc| DocumentChars {
                name: doc.name.clone(),
                chars: doc.chars(),
            })
            .collect();

        Self {
            count: documents.len(),
            total_chars: documents.iter().map(|d| d.chars).sum(),
            documents,
            loaded_at: store.loaded_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentFormat, LoadedDocument};
    use std::path::PathBuf;

    #[test]
    fn status_sums_per_document_chars() {
        let mut store = DocumentStore::new();
        for (name, content) in [("handbook", "abcde"), ("faq", "xyz")] {
            store.insert(LoadedDocument {
                name: name.to_string(),
                content: content.to_string(),
                format: DocumentFormat::Text,
                source_path: PathBuf::from(format!("{name}.txt")),
            });
        }

        let status = StoreStatus::of(&store);
        assert_eq!(status.count, 2);
        assert_eq!(status.total_chars, 8);
        assert_eq!(status.documents[0].name, "handbook");
        assert_eq!(status.documents[0].chars, 5);
    }

    #[test]
    fn empty_store_status() {
        let status = StoreStatus::of(&DocumentStore::new());
        assert_eq!(status.count, 0);
        assert_eq!(status.total_chars, 0);
        assert!(status.documents.is_empty());
    }
}
