#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pointer;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use valentine_core::CardConfig;

/// Global card config, resolved from command line
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Global seed for cosmetic randomness, set from command line
static RANDOM_SEED: OnceLock<Option<u64>> = OnceLock::new();

/// Get the card config (set from command line or default)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the random seed, if one was given
pub fn get_random_seed() -> Option<u64> {
    RANDOM_SEED.get().copied().flatten()
}

/// Config file used when `--config` is not given
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("valentine").join("card.json"))
}

/// Valentine - an animated proposal card
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "Valentine - an animated proposal card for your desktop")]
struct Args {
    /// Card config file (JSON); defaults to <config dir>/valentine/card.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for confetti, backdrop and evasion randomness (reproducible runs)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Print the resolved card config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<CardConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("No card config found, using defaults");
                return Ok(CardConfig::default());
            }
        },
    };
    CardConfig::load(&path)
        .with_context(|| format!("failed to load card config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(args.config.as_deref())?;

    if args.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let title = config.question.clone();
    let _ = CARD_CONFIG.set(config);
    let _ = RANDOM_SEED.set(args.seed);

    tracing::info!(
        seed = ?args.seed,
        "Starting '{}' ({}x{})",
        title,
        args.width,
        args.height
    );

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
