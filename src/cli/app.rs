//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Overrides};
use polls::output::OutputMode;

/// polls - Publish questions, collect answers, count votes
#[derive(Parser, Debug)]
#[command(
    name = "polls",
    version,
    about = "Publish questions, collect answers, count votes",
    long_about = "A small polling web application.\n\n\
                  'polls serve' starts the web pages; the other commands\n\
                  manage questions and votes in the same database."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/polls/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database file, overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// List the latest published questions
    List {
        /// Include every question, scheduled ones too
        #[arg(short, long)]
        all: bool,
    },

    /// Show a published question and its answers
    Show {
        /// Question ID
        id: i64,
    },

    /// Show the vote tallies of a question
    Results {
        /// Question ID
        id: i64,
    },

    /// Create a question, published now
    Create {
        /// Question text
        text: String,
    },

    /// Add an answer to a question
    AddChoice {
        /// Question ID
        id: i64,

        /// Answer text
        text: String,
    },

    /// Vote for an answer
    Vote {
        /// Question ID
        question: i64,

        /// Choice ID
        choice: String,
    },

    /// Delete a question and its answers
    Delete {
        /// Question ID
        id: i64,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let overrides = Overrides {
        config: cli.config,
        database: cli.database,
    };

    match cli.command {
        Some(Command::Serve {
            host,
            port,
            workers,
        }) => commands::serve(&overrides, host, port, workers),
        Some(Command::List { all }) => commands::list(&overrides, all, output_mode),
        Some(Command::Show { id }) => commands::show(&overrides, id, output_mode),
        Some(Command::Results { id }) => commands::results(&overrides, id, output_mode),
        Some(Command::Create { text }) => commands::create(&overrides, &text, output_mode),
        Some(Command::AddChoice { id, text }) => {
            commands::add_choice(&overrides, id, &text, output_mode)
        },
        Some(Command::Vote { question, choice }) => {
            commands::vote(&overrides, question, &choice, output_mode)
        },
        Some(Command::Delete { id }) => commands::delete(&overrides, id, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": polls::VERSION
                    })
                );
            } else {
                println!("polls v{}", polls::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": polls::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("polls v{}", polls::VERSION);
                println!("\nRun 'polls --help' for usage");
                println!("Run 'polls serve' to start the web server");
            }
            Ok(())
        },
    }
}
