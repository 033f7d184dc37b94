//! Ask command - one-shot question answering.

use super::{load_config, load_documents, print_skipped};
use anyhow::{Context, Result};
use campus_gemini::{Assistant, GeminiClient};
use colored::Colorize;
use std::io::{self, Write};
use tokio::runtime::Runtime;

pub fn run(question: &str, model: Option<String>, stream: bool) -> Result<()> {
    let config = load_config()?;

    let report = load_documents(&config)?;
    print_skipped(&report.skipped);

    let mut client =
        GeminiClient::from_config(&config.gemini).context("Failed to create Gemini client")?;
    if let Some(model) = model {
        client = client.with_model(model);
    }

    let assistant = Assistant::new(client, config.documents.max_context_chars);

    println!("{} {}", "Question:".cyan().bold(), question);
    println!("{}", "─".repeat(70));
    println!();

    let rt = Runtime::new().context("Failed to create async runtime")?;

    if stream {
        print!("{} ", "Answer:".green().bold());
        io::stdout().flush()?;

        rt.block_on(async {
            let mut rx = assistant.answer_stream(question, &report.store).await;

            // Each received value is the whole answer so far; print only
            // the part we have not shown yet.
            let mut printed = 0;
            while let Some(partial) = rx.recv().await {
                print!("{}", &partial[printed..]);
                io::stdout().flush().ok();
                printed = partial.len();
            }
        });

        println!();
    } else {
        let answer = rt.block_on(assistant.answer(question, &report.store));

        println!("{}", "Answer:".green().bold());
        println!();
        println!("{}", answer);
    }

    Ok(())
}
