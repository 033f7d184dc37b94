//! Document discovery and loading.

use crate::extractors::extractor_for;
use campus_config::DocumentsConfig;
use campus_core::{DocumentFormat, DocumentStore, LoadedDocument, SourceSpec};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A source that did not make it into the store, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedSource {
    pub origin: String,
    pub reason: String,
}

/// Outcome of a full load: the store plus everything that was skipped.
#[derive(Debug)]
pub struct LoadReport {
    pub store: DocumentStore,
    pub skipped: Vec<SkippedSource>,
}

/// Resolve configured source entries into specs, deriving each format from
/// the file extension. Entries with unsupported extensions are dropped with
/// a warning.
pub fn resolve_sources(config: &DocumentsConfig) -> Vec<SourceSpec> {
    let mut specs = Vec::new();

    for entry in &config.sources {
        let path = PathBuf::from(shellexpand::tilde(&entry.path).into_owned());
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match DocumentFormat::from_extension(extension) {
            Some(format) => specs.push(SourceSpec::new(&entry.name, path, format)),
            None => warn!(
                "Skipping source '{}': unsupported extension in {}",
                entry.name, entry.path
            ),
        }
    }

    specs
}

/// The configured scan directory with `~` expanded.
pub fn scan_directory(config: &DocumentsConfig) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&config.scan_directory).into_owned())
}

/// Load every named source, then scan the directory for extras.
///
/// Named sources load first and win name collisions against scanned files.
/// Every failure is absorbed: it is logged, recorded in the report, and never
/// stops the remaining documents from loading. An empty store is a valid
/// outcome; the assistant then answers from general knowledge only.
pub fn load_all(sources: &[SourceSpec], scan_dir: &Path) -> LoadReport {
    let mut store = DocumentStore::new();
    let mut skipped = Vec::new();

    for spec in sources {
        if !spec.path.exists() {
            warn!("{} not found", spec.path.display());
            skipped.push(SkippedSource {
                origin: spec.name.clone(),
                reason: format!("{} not found", spec.path.display()),
            });
            continue;
        }
        load_one(spec, &mut store, &mut skipped);
    }

    scan_extra_documents(scan_dir, &mut store, &mut skipped);

    info!(
        "Loaded {} documents, {} characters total",
        store.len(),
        store.total_chars()
    );

    LoadReport { store, skipped }
}

/// Extract one source and insert it if it produced any text.
fn load_one(spec: &SourceSpec, store: &mut DocumentStore, skipped: &mut Vec<SkippedSource>) {
    match extractor_for(spec.format).extract(&spec.path) {
        Ok(text) => {
            if text.is_empty() {
                warn!("No text extracted from {}", spec.path.display());
                skipped.push(SkippedSource {
                    origin: spec.name.clone(),
                    reason: format!("no text extracted from {}", spec.path.display()),
                });
                return;
            }

            let chars = text.chars().count();
            let inserted = store.insert(LoadedDocument {
                name: spec.name.clone(),
                content: text,
                format: spec.format,
                source_path: spec.path.clone(),
            });

            if inserted {
                info!("Loaded {}: {} characters", spec.name, chars);
            } else {
                warn!(
                    "Duplicate document name '{}', keeping the earlier one",
                    spec.name
                );
                skipped.push(SkippedSource {
                    origin: spec.name.clone(),
                    reason: "duplicate document name".to_string(),
                });
            }
        }
        Err(error) => {
            warn!("Failed to extract {}: {}", spec.path.display(), error);
            skipped.push(SkippedSource {
                origin: spec.name.clone(),
                reason: error.to_string(),
            });
        }
    }
}

/// Scan the extra-documents directory, deriving names from file stems.
/// A missing directory is created so a first run never fails on it.
fn scan_extra_documents(
    scan_dir: &Path,
    store: &mut DocumentStore,
    skipped: &mut Vec<SkippedSource>,
) {
    if !scan_dir.exists() {
        match std::fs::create_dir_all(scan_dir) {
            Ok(()) => info!("Created scan directory {}", scan_dir.display()),
            Err(error) => {
                warn!(
                    "Could not create scan directory {}: {}",
                    scan_dir.display(),
                    error
                );
                skipped.push(SkippedSource {
                    origin: scan_dir.display().to_string(),
                    reason: error.to_string(),
                });
            }
        }
        return;
    }

    debug!("Scanning {}", scan_dir.display());

    for entry in WalkDir::new(scan_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|item| item.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let format = match path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(DocumentFormat::from_extension)
        {
            Some(format) => format,
            None => {
                debug!("Ignoring {} (unsupported extension)", path.display());
                continue;
            }
        };

        let name = match path.file_stem().and_then(|s| s.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        if store.contains(&name) {
            debug!("Skipping {}: '{}' already loaded", path.display(), name);
            continue;
        }

        let spec = SourceSpec::new(name, path, format);
        load_one(&spec, store, skipped);
    }
}
