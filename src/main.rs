//! Entry point for the portfolio viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load the portfolio document via `content`.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application with the loaded document and config.

mod app;
mod cache;
mod config;
mod content;
mod layout;
mod theme;

use crate::app::run_app;
use crate::cache::load_ui_prefs;
use crate::config::load_config;
use crate::content::load_portfolio;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_PORTFOLIO_PATH: &str = "conf/portfolio.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let portfolio_path = parse_args()?;
    let mut config = load_config(Path::new("conf/config.toml"));
    if let Some(prefs) = load_ui_prefs(&portfolio_path) {
        info!("Loaded per-portfolio UI preferences from cache");
        prefs.apply_to(&mut config);
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %portfolio_path.display(),
        level = %config.log_level,
        "Starting portfolio viewer"
    );
    let portfolio = load_portfolio(&portfolio_path)?;
    info!(
        sections = portfolio.section_count(),
        timeline_items = portfolio.experience.len(),
        "Loaded portfolio document"
    );
    run_app(portfolio, config, portfolio_path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PORTFOLIO_PATH));

    if !path.exists() {
        return Err(anyhow!(
            "Portfolio not found: {} (usage: folio-viewer [path-to-portfolio])",
            path.as_path().display()
        ));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
