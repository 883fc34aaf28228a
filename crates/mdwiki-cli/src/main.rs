//! mdwiki CLI
//!
//! Command-line interface for mdwiki - a markdown-backed encyclopedia.
//! Each subcommand maps to one page operation of the core controller;
//! this crate only renders the structured results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdwiki_core::{Config, EntryStore, PageController};

mod commands;
mod editor;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "mdwiki")]
#[command(about = "mdwiki - markdown-backed encyclopedia")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all entry titles
    #[command(alias = "ls")]
    List,
    /// Show an entry, or suggestions when the title is unknown
    Show {
        /// Entry title (any casing)
        title: String,
    },
    /// Search entries by title
    Search {
        /// Search query
        query: String,
    },
    /// Create a new entry
    #[command(alias = "create")]
    New {
        /// Entry title
        title: String,
        /// Entry body (opens editor if not provided)
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Edit an existing entry
    Edit {
        /// Entry title (any casing)
        title: String,
        /// Replacement body (opens editor if not provided)
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Show a randomly picked entry
    Random,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (entries_dir)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load().context("Failed to load configuration")?;
    let store = EntryStore::open(&config).context("Failed to open entry store")?;
    tracing::debug!(entries_dir = ?config.entries_dir, "store opened");
    let controller = PageController::new(store);

    match cli.command {
        Commands::List => commands::entry::list(&controller, &output),
        Commands::Show { title } => commands::entry::show(&controller, &title, &output),
        Commands::Search { query } => commands::entry::search(&controller, &query, &output),
        Commands::New { title, body } => commands::entry::create(&controller, &title, body, &output),
        Commands::Edit { title, body } => commands::entry::edit(&controller, &title, body, &output),
        Commands::Random => commands::entry::random(&controller, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mdwiki_core=warn,mdwiki_cli=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
