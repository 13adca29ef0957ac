//! # CLI Layer
//!
//! This module is **one possible UI client** for shoplist. It is the only place that:
//! - Parses process arguments and session lines
//! - Reads stdin / writes stdout and stderr
//! - Installs the tracing subscriber
//! - Decides on colors
//!
//! ## Structure
//!
//! - [`run`]: startup (arguments, logging, config) and hand-off to the session
//! - `setup`: clap definitions for process arguments and session commands
//! - `session`: the read/dispatch/render loop
//! - `render` / `styles`: turning results into terminal text

pub mod render;
pub mod session;
pub mod setup;
pub mod styles;

use clap::Parser;
use directories::ProjectDirs;
use session::Session;
use setup::Cli;
use shoplist::api::ShoplistApi;
use shoplist::config::ShoplistConfig;
use shoplist::error::Result;
use shoplist::store::memory::InMemoryStore;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Overrides the platform config directory (used by tests and packagers).
pub const CONFIG_DIR_ENV: &str = "SHOPLIST_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let config = load_config(cli.config.as_deref())?;
    debug!(
        shops = config.shops.len(),
        categories = config.categories.len(),
        "catalog loaded"
    );

    let api = ShoplistApi::new(InMemoryStore::new(), config);
    let mut session = Session::new(api, io::stdout().lock(), io::stderr().lock());

    match cli.script {
        Some(path) => {
            let file = File::open(&path)?;
            session.run(BufReader::new(file), false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session.run(stdin.lock(), interactive)
        }
    }
}

fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// `-v` forces debug. Otherwise `RUST_LOG` wins over the default `warn`.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn load_config(explicit: Option<&Path>) -> Result<ShoplistConfig> {
    if let Some(path) = explicit {
        return ShoplistConfig::load(path);
    }

    match config_dir() {
        Some(dir) => ShoplistConfig::load_from_dir(dir),
        None => {
            warn!("could not determine a config directory, using the built-in catalog");
            Ok(ShoplistConfig::default())
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shoplist", "shoplist").map(|dirs| dirs.config_dir().to_path_buf())
}
