use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(author, version, about = "Slide-by-slide terminal presentations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck to present (shorthand for `present`)
    deck: Option<PathBuf>,

    /// Use this config file instead of ~/.config/snapdeck/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck in the terminal
    Present {
        /// Path to the deck file
        deck: PathBuf,
    },
    /// Validate a deck and list its sections
    Check {
        /// Path to the deck file
        deck: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a sample deck
    Init {
        /// Where to write the deck
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("failed to load configuration")?;

    let presenting = matches!(cli.command, Some(Commands::Present { .. }))
        || (cli.command.is_none() && cli.deck.is_some());
    init_logging(&config, presenting)?;

    match (cli.command, cli.deck) {
        (Some(Commands::Present { deck }), _) | (None, Some(deck)) => {
            commands::present::run(&config, &deck)
        }
        (Some(Commands::Check { deck, json }), _) => commands::check::run(&deck, json),
        (Some(Commands::Init { path, force }), _) => commands::init::run(&path, force),
        (None, None) => {
            anyhow::bail!("no deck given\n\nUsage: snapdeck <DECK>\n       snapdeck init deck.toml")
        }
    }
}

/// Logs go to stderr for one-shot commands and to the log file while the
/// terminal belongs to the presentation
fn init_logging(config: &AppConfig, presenting: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if presenting {
        let path = config.log_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
