//! Initialize the campus assistant.

use super::get_paths;
use anyhow::{Context, Result};
use campus_config::Config;
use campus_ingest::scan_directory;
use colored::Colorize;

pub fn run() -> Result<()> {
    let paths = get_paths()?;

    // Check if already initialized
    if paths.is_initialized() {
        println!(
            "{} The campus assistant is already initialized.",
            "Note:".yellow().bold()
        );
        println!("  Config: {}", paths.config_file.display());
        return Ok(());
    }

    println!("{}", "Initializing the campus assistant...".cyan().bold());

    // Create directories
    paths
        .ensure_dirs()
        .context("Failed to create directories")?;
    println!("  {} Created directories", "✓".green());

    // Create config file
    Config::create_default_file(&paths.config_file)
        .context("Failed to create config file")?;
    println!(
        "  {} Created config: {}",
        "✓".green(),
        paths.config_file.display()
    );

    // Create the document scan directory
    let config = Config::load_from(&paths.config_file).context("Failed to load config")?;
    let scan_dir = scan_directory(&config.documents);
    std::fs::create_dir_all(&scan_dir).context("Failed to create document directory")?;
    println!(
        "  {} Created document directory: {}",
        "✓".green(),
        scan_dir.display()
    );

    println!();
    println!("{}", "Campus assistant initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  1. Export your API key: {}",
        "export GOOGLE_API_KEY=...".cyan()
    );
    println!(
        "  2. Drop documents into {} or name them in the config",
        scan_dir.display()
    );
    println!("  3. Check what loaded: {}", "campus status".cyan());
    println!("  4. Ask away: {}", "campus ask \"How do I apply?\"".cyan());

    Ok(())
}
