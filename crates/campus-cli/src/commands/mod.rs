//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod config;
pub mod init;
pub mod status;

use anyhow::{Context, Result};
use campus_config::{AppPaths, Config};
use campus_ingest::{load_all, resolve_sources, scan_directory, LoadReport, SkippedSource};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Get the application paths.
pub fn get_paths() -> Result<AppPaths> {
    AppPaths::new().context("Failed to determine application directories")
}

/// Load the configuration and apply its UI settings.
pub fn load_config() -> Result<Config> {
    let config = Config::load().context("Failed to load configuration")?;
    if !config.ui.color {
        colored::control::set_override(false);
    }
    Ok(config)
}

/// Load every configured document behind a spinner.
pub fn load_documents(config: &Config) -> Result<LoadReport> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Loading university documents...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let sources = resolve_sources(&config.documents);
    let scan_dir = scan_directory(&config.documents);
    let report = load_all(&sources, &scan_dir);

    pb.finish_and_clear();
    Ok(report)
}

/// Print one warning line per skipped source.
pub fn print_skipped(skipped: &[SkippedSource]) {
    for skip in skipped {
        println!(
            "{} {}: {}",
            "Skipped".yellow(),
            skip.origin.bold(),
            skip.reason
        );
    }
}

/// Format a count with thousands separators.
pub fn format_count(value: usize) -> String {
    let digits: Vec<char> = value.to_string().chars().rev().collect();
    let mut grouped = String::new();

    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
