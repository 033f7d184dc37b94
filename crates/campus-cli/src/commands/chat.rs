//! Chat command - interactive question session.

use super::{get_paths, load_config, load_documents, print_skipped};
use anyhow::{Context, Result};
use campus_core::{SharedStore, StoreStatus};
use campus_gemini::{Assistant, GeminiClient};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tokio::runtime::Runtime;

/// Run the interactive session.
pub fn run() -> Result<()> {
    let paths = get_paths()?;
    let config = load_config()?;

    let report = load_documents(&config)?;
    print_skipped(&report.skipped);
    let status = StoreStatus::of(&report.store);
    let store = SharedStore::new(report.store);

    let client =
        GeminiClient::from_config(&config.gemini).context("Failed to create Gemini client")?;
    let assistant = Assistant::new(client, config.documents.max_context_chars);

    let rt = Runtime::new().context("Failed to create async runtime")?;

    let mut rl = DefaultEditor::new()?;
    let history_path = paths.data_dir.join("chat_history");
    let _ = rl.load_history(&history_path);

    println!("{}", "Babcock University Assistant".cyan().bold());
    println!("{}", "─".repeat(50));
    if status.count == 0 {
        println!(
            "{} No documents loaded; answering from general knowledge.",
            "Note:".yellow()
        );
    } else {
        println!("{} documents loaded.", status.count);
    }
    println!(
        "Ask a question, or use {}, {}, {} to exit.",
        "/status".cyan(),
        "/reload".cyan(),
        "/quit".cyan()
    );
    println!();

    loop {
        let readline = rl.readline(&format!("{} ", "campus>".green().bold()));
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match line {
                    "/quit" | "/exit" | "quit" | "exit" => break,
                    "/status" => {
                        let snapshot = store.snapshot();
                        super::status::print_status(&StoreStatus::of(&snapshot), &[]);
                    }
                    "/reload" => {
                        let report = load_documents(&config)?;
                        print_skipped(&report.skipped);
                        println!(
                            "{} Reloaded {} documents.",
                            "✓".green(),
                            report.store.len()
                        );
                        store.replace(report.store);
                    }
                    "/help" => print_help(),
                    question => {
                        answer_question(&rt, &assistant, &store, question);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    // Save history
    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.save_history(&history_path);

    Ok(())
}

/// Stream one answer against the current store generation.
fn answer_question<G>(rt: &Runtime, assistant: &Assistant<G>, store: &SharedStore, question: &str)
where
    G: campus_gemini::TextGenerator,
{
    let snapshot = store.snapshot();

    println!();
    rt.block_on(async {
        let mut rx = assistant.answer_stream(question, &snapshot).await;

        let mut printed = 0;
        while let Some(partial) = rx.recv().await {
            print!("{}", &partial[printed..]);
            io::stdout().flush().ok();
            printed = partial.len();
        }
    });
    println!();
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  {}   Show loaded documents", "/status".cyan());
    println!("  {}   Reload documents from disk", "/reload".cyan());
    println!("  {}     Exit the session", "/quit".cyan());
    println!("Anything else is asked as a question.");
}
