// vidshelf - terminal video catalog
// Loads the catalog, wires up logging and hands stdin/stdout to the shell

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vidshelf::{CatalogLoader, Config, Shell, VideoPlayer};

#[derive(Parser)]
#[command(name = "vidshelf")]
#[command(about = "A command-driven video catalog with playlists, moderation and search")]
struct Args {
    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (.txt or .json), overrides the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable developer logging (stderr + debug output)
    #[arg(long)]
    dev: bool,
}

fn init_logging(log_dir: &Path, filter: &str, dev: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // Daily rotating file appender; stdout belongs to the shell
    let file_appender = tracing_appender::rolling::daily(log_dir, "vidshelf.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let base_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    // Dev mode mirrors everything to stderr as well
    let stderr_layer = dev.then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(base_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    let _guard = init_logging(&config.logging.directory, &config.logging.filter, args.dev)?;
    info!("🎬 vidshelf starting up");
    debug!("Config: {:?}", config);

    // The only fatal failure: no catalog, no player
    let library = CatalogLoader::new()
        .load(config.catalog_path.as_deref())
        .context("Failed to load video catalog")?;

    let player = VideoPlayer::new(library);
    let stdin = io::stdin();
    let mut shell = Shell::new(player, stdin.lock(), io::stdout(), config.shell.clone());
    shell.run()?;

    info!("👋 vidshelf shut down");
    Ok(())
}
