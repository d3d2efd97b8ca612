use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use follow_me::config::AppConfig;
use follow_me::scores::{JsonScoreStore, ScoreStore};

/// Inspect or reset the Follow Me high-score table.
#[derive(Parser)]
#[command(name = "scores", about = "Manage Follow Me high scores")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "follow_me.toml")]
    config: PathBuf,

    /// Override the high-score file location
    #[arg(long)]
    scores: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the table, best first
    List,
    /// Remove every entry
    Clear,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(scores) = cli.scores {
        config.scores.path = scores;
    }

    let mut store = JsonScoreStore::open(&config.scores)
        .with_context(|| format!("opening scores at {}", config.scores.path.display()))?;

    match cli.command {
        Command::List => {
            let entries = store.top_scores();
            if entries.is_empty() {
                println!("No scores recorded in {}", store.path().display());
            }
            for (rank, entry) in entries.iter().enumerate() {
                println!("{:>2}. {:<16} {:>4}", rank + 1, entry.name, entry.score);
            }
        }
        Command::Clear => {
            store.clear().context("clearing scores")?;
            tracing::info!(path = %store.path().display(), "high scores cleared");
            println!("Cleared {}", store.path().display());
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
