mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lexicon_lib::vocabulary::{ReviewOutcome, WordId};

#[derive(Parser)]
#[command(name = "lexicon-cli", about = "Lexicon vocabulary notebook and review scheduler", version)]
struct Cli {
    /// Config file (default: <config dir>/lexicon/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a word to the notebook
    Add {
        /// The word or phrase
        text: String,
        /// Its meaning
        meaning: String,
        #[arg(long)]
        pronunciation: Option<String>,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
        /// Translation of the example
        #[arg(long)]
        translation: Option<String>,
    },

    /// List words, newest first
    List {
        /// Only words whose text or meaning contains this (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a word with its review history and upcoming intervals
    Show {
        id: WordId,
    },

    /// Edit a word's content (pass an empty string to clear an optional field)
    Edit {
        id: WordId,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        meaning: Option<String>,
        #[arg(long)]
        pronunciation: Option<String>,
        #[arg(long)]
        example: Option<String>,
        #[arg(long)]
        translation: Option<String>,
    },

    /// Delete a word
    Delete {
        id: WordId,
    },

    /// List words due for review, earliest first
    Due,

    /// Record a review outcome: again, hard, good or easy
    Review {
        id: WordId,
        outcome: ReviewOutcome,
    },

    /// Show notebook statistics
    Stats,

    /// Export the notebook as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Run the HTTP API
    #[cfg(feature = "server")]
    Serve {
        /// Bind address (default from config)
        #[arg(long)]
        host: Option<String>,
        /// Port (default from config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.config.as_deref())?;

    match cli.command {
        Command::Add { text, meaning, pronunciation, example, translation } => {
            commands::add::run(
                &app,
                text,
                meaning,
                pronunciation,
                example,
                translation,
                &cli.format,
                use_color,
            )?;
        }
        Command::List { search } => {
            commands::list::run(&app, search.as_deref(), &cli.format, use_color)?;
        }
        Command::Show { id } => {
            commands::show::run(&app, id, &cli.format, use_color)?;
        }
        Command::Edit { id, text, meaning, pronunciation, example, translation } => {
            let edit = commands::edit::EditArgs {
                text,
                meaning,
                pronunciation,
                example,
                translation,
            };
            commands::edit::run(&app, id, edit, &cli.format)?;
        }
        Command::Delete { id } => {
            commands::delete::run(&app, id, &cli.format)?;
        }
        Command::Due => {
            commands::due::run(&app, &cli.format, use_color)?;
        }
        Command::Review { id, outcome } => {
            commands::review::run(&app, id, outcome, &cli.format, use_color)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format)?;
        }
        Command::Export { output } => {
            commands::export::run(&app, output.as_deref())?;
        }
        #[cfg(feature = "server")]
        Command::Serve { host, port } => {
            commands::serve::run(&app, host, port)?;
        }
    }

    Ok(())
}
