//! Context assembly: merge the document store into one bounded text blob.

use crate::types::DocumentStore;

/// Build the prompt context from all loaded documents.
///
/// Each document gets an equal share of the character budget and contributes
/// a header line plus up to that many characters of content, in load order.
/// The result never exceeds `max_chars` characters; an empty store yields an
/// empty string so callers can switch prompt templates.
///
/// Deterministic: the same store and budget always produce the same blob.
pub fn build_context(store: &DocumentStore, max_chars: usize) -> String {
    if store.is_empty() || max_chars == 0 {
        return String::new();
    }

    let per_doc_share = max_chars / store.len();

    let mut combined = String::new();
    for doc in store.iter() {
        combined.push('\n');
        combined.push_str("=== ");
        combined.push_str(&doc.name.to_uppercase());
        combined.push_str(" INFORMATION ===");
        combined.push('\n');
        combined.extend(doc.content.chars().take(per_doc_share));
        combined.push('\n');
    }

    if combined.chars().count() > max_chars {
        combined = combined.chars().take(max_chars).collect();
        combined = cut_at_sentence(combined, max_chars);
    }

    combined
}

/// Avoid ending mid-sentence: if the last period of the truncated text falls
/// within its final fifth, cut just after it; otherwise keep the hard cut.
fn cut_at_sentence(mut truncated: String, max_chars: usize) -> String {
    if let Some(idx) = truncated.rfind('.') {
        let period_pos = truncated[..idx].chars().count();
        if period_pos * 5 > max_chars * 4 {
            truncated.truncate(idx + 1);
        }
    }
    truncated
}
