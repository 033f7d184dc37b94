//! Shared handle to the active document store.

use crate::types::DocumentStore;
use std::sync::{Arc, RwLock};

/// A cloneable handle to the current document store generation.
///
/// Readers take an `Arc` snapshot and keep observing that generation even if
/// a reload swaps the handle underneath them; `replace` installs a fully
/// built store in one step, so no reader ever sees a partially loaded one.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Arc<DocumentStore>>>,
}

impl SharedStore {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// The current store generation.
    pub fn snapshot(&self) -> Arc<DocumentStore> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically swap in a freshly loaded store.
    pub fn replace(&self, store: DocumentStore) {
        let next = Arc::new(store);
        match self.inner.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentFormat, LoadedDocument};
    use std::path::PathBuf;

    fn store_with(name: &str, content: &str) -> DocumentStore {
        let mut store = DocumentStore::new();
        store.insert(LoadedDocument {
            name: name.to_string(),
            content: content.to_string(),
            format: DocumentFormat::Text,
            source_path: PathBuf::from(format!("{name}.txt")),
        });
        store
    }

    #[test]
    fn snapshot_keeps_old_generation_across_replace() {
        let shared = SharedStore::new(store_with("handbook", "old content"));
        let before = shared.snapshot();

        shared.replace(store_with("handbook", "new content"));

        assert_eq!(before.get("handbook").unwrap().content, "old content");
        let after = shared.snapshot();
        assert_eq!(after.get("handbook").unwrap().content, "new content");
    }

    #[test]
    fn clones_share_the_same_generation() {
        let shared = SharedStore::new(store_with("a", "one"));
        let other = shared.clone();

        shared.replace(store_with("b", "two"));

        assert!(other.snapshot().contains("b"));
    }
}
