//! Campus CLI - Document-grounded question answering for Babcock University.

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Campus Assistant - answers student questions from university documents
#[derive(Parser)]
#[command(name = "campus")]
#[command(version)]
#[command(about = "Document-grounded question answering for Babcock University", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the assistant (create config and document directory)
    Init,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show which documents are loaded and how large they are
    Status {
        /// Emit the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a single question
    Ask {
        /// Your question
        question: String,

        /// Model to use for generation (default: from config)
        #[arg(short, long)]
        model: Option<String>,

        /// Stream the response as it's generated
        #[arg(long)]
        stream: bool,
    },

    /// Start an interactive question session
    Chat,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config file in editor
    Edit,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campus=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campus=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Edit => commands::config::edit(),
        },
        Commands::Status { json } => commands::status::run(json),
        Commands::Ask {
            question,
            model,
            stream,
        } => commands::ask::run(&question, model, stream),
        Commands::Chat => commands::chat::run(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
