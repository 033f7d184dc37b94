//! Status command - report the loaded document store.

use super::{format_count, load_config, load_documents, print_skipped};
use anyhow::{Context, Result};
use campus_core::StoreStatus;
use campus_ingest::SkippedSource;
use colored::Colorize;

pub fn run(json: bool) -> Result<()> {
    let config = load_config()?;
    let report = load_documents(&config)?;
    let status = StoreStatus::of(&report.store);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&status).context("Failed to serialize status")?
        );
        return Ok(());
    }

    print_status(&status, &report.skipped);
    Ok(())
}

/// Render a store status report; shared with the chat session.
pub fn print_status(status: &StoreStatus, skipped: &[SkippedSource]) {
    println!("{}", "Document Status".cyan().bold());
    println!("{}", "─".repeat(50));

    if status.count == 0 {
        println!(
            "{} No university documents loaded.",
            "Warning:".yellow().bold()
        );
        println!("The assistant is running with general knowledge only.");
    } else {
        println!(
            "{} {} documents loaded, {} characters",
            "✓".green(),
            status.count,
            format_count(status.total_chars)
        );
        println!(
            "  Loaded at {}",
            status.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!();
        for doc in &status.documents {
            println!(
                "  {}: {} characters",
                doc.name.bold(),
                format_count(doc.chars)
            );
        }
    }

    if !skipped.is_empty() {
        println!();
        print_skipped(skipped);
    }
}
