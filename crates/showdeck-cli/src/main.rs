use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "showdeck")]
#[command(author, version, about = "A terminal presentation board with animated statistics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to play (shorthand for `run --deck`)
    #[arg(short = 'd', long = "deck")]
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a deck in the terminal
    Run {
        /// Deck file; the built-in sample deck when omitted
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },
    /// Validate a deck file without playing it
    Check {
        /// Deck file to validate
        deck: PathBuf,
    },
    /// Write the sample deck as a starting point
    Init {
        /// Output path
        #[arg(default_value = "deck.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.or(cli.deck)),
        None => commands::run::run(config, cli.deck),
        Some(Commands::Check { deck }) => commands::check::run(&deck),
        Some(Commands::Init { path }) => commands::init::run(&path),
    }
}
