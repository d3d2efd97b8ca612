use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use follow_me::config::{AppConfig, LoggingConfig};
use follow_me::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Repeat the sequence of lit pads; each round adds one more.
#[derive(Parser)]
#[command(name = "follow-me", about = "Simon Says memory game for the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "follow_me.toml")]
    config: PathBuf,

    /// Override the high-score file location
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Fix the random seed so every game plays the same sequences
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let loaded = AppConfig::try_load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();

    // Apply CLI overrides
    if let Some(scores) = cli.scores {
        config.scores.path = scores;
    }
    if let Some(seed) = cli.seed {
        config.pacing.seed = Some(seed);
    }

    init_tracing(&config.logging)?;
    tracing::info!(
        config = %cli.config.display(),
        config_found,
        scores = %config.scores.path.display(),
        "starting follow-me"
    );
    if !config_found {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let mut app = App::new(&config)
        .with_context(|| format!("opening scores at {}", config.scores.path.display()))?;

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal: always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    tracing::info!("exiting");
    res.context("running game loop")
}

/// Log to a file; the terminal belongs to the UI.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logging.file)
        .with_context(|| format!("opening log file {}", logging.file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .with_context(|| format!("invalid log filter '{}'", logging.filter))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
