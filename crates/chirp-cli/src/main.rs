//! chirp CLI: Single-user timeline manager driven by a numbered menu

use chirp_engine::{engine_version, Config, Timeline};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// In-memory timeline of short posts
#[derive(Parser)]
#[command(name = "chirp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load limits and seed posts from a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with an empty timeline
    #[arg(long)]
    no_seed: bool,

    /// Override the maximum number of posts
    #[arg(long)]
    capacity: Option<usize>,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    let mut timeline = Timeline::from_config(&config);
    if !cli.no_seed {
        let seeded = timeline.seed(&config.seed_posts);
        info!(seeded, "seeded timeline");
    }
    info!(
        version = engine_version(),
        capacity = config.capacity,
        "starting chirp"
    );

    match chirp_shell::run_interactive(timeline) {
        Ok(timeline) => info!(posts = timeline.len(), "session ended"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Resolve the config file (or defaults) and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, chirp_engine::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    config.validate()?;
    Ok(config)
}
