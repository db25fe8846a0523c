//! vidcat - Main entry point
//!
//! Loads the bootstrap configuration and video catalogue, prints the library
//! summary and optionally runs one interactive search.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidcat_common::config::{resolve_catalogue_path, resolve_config_path, TomlConfig};
use vidcat_common::VideoLibrary;
use vidcat_player::Session;

/// Command-line arguments for vidcat
#[derive(Parser, Debug)]
#[command(name = "vidcat")]
#[command(about = "Video catalogue and playlist manager")]
#[command(version)]
struct Args {
    /// Bootstrap TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML catalogue file
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Seed for random playback
    #[arg(long)]
    seed: Option<u64>,

    /// Search video titles and offer to play a result
    #[arg(short, long, conflicts_with = "tag")]
    search: Option<String>,

    /// Search video tags and offer to play a result
    #[arg(short, long)]
    tag: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let config = TomlConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    // Initialize tracing (stderr, so stdout only carries reports)
    let default_filter = format!(
        "vidcat_player={level},vidcat_common={level}",
        level = config.logging.level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if !config_path.exists() {
        warn!("No config file at {}, using defaults", config_path.display());
    }

    let catalogue_path = resolve_catalogue_path(args.catalogue.as_deref(), &config);
    info!("Catalogue: {}", catalogue_path.display());

    let library = VideoLibrary::load(&catalogue_path)
        .with_context(|| format!("Failed to load catalogue {}", catalogue_path.display()))?;

    let mut session = match args.seed.or(config.random_seed) {
        Some(seed) => Session::with_seed(library, seed),
        None => Session::new(library),
    };

    println!("{}", session.library_summary());
    println!("{}", session.show_all_videos());

    let results = match (&args.search, &args.tag) {
        (Some(term), _) => Some(session.search_by_title(term)),
        (None, Some(tag)) => Some(session.search_by_tag(tag)),
        (None, None) => None,
    };

    if let Some(results) = results {
        let stdin = io::stdin();
        let stdout = io::stdout();
        session
            .prompt_selection(&results, &mut stdin.lock(), &mut stdout.lock())
            .context("Failed to read search selection")?;
        println!("{}", session.status());
    }

    info!("Session {} finished", session.id());
    Ok(())
}
