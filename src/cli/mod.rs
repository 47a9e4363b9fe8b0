//! cli
//!
//! Command-line interface layer for standup.
//!
//! # Responsibilities
//!
//! - Parse global flags and split off the command and its tokens
//! - Resolve global options from flags and config
//! - Load persisted state and assemble the registry
//! - Hand everything to the [`crate::engine::Dispatcher`]
//!
//! # Architecture
//!
//! The CLI layer is thin. It does no routing of its own; all command
//! selection, help and version handling happen in the engine.

pub mod args;
pub mod commands;
pub mod logging;

pub use args::Cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::config::{schema::validate_endpoint, Config};
use crate::core::state::{FileStateStore, StateStore};
use crate::engine::{Dispatcher, GlobalOptions, Invocation};
use crate::ui::output::Verbosity;
use crate::ui::UsagePrinter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. A rejected command
/// line is returned as a `clap::Error` inside the `anyhow::Error`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args()?;
    let config = Config::load()?;
    run_with(cli, &config)
}

/// Run an already parsed command line against `config`.
pub fn run_with(cli: Cli, config: &Config) -> Result<()> {
    let global = global_options(&cli, config)?;
    let verbosity = Verbosity::from_flags(global.quiet, global.debug);
    logging::init(verbosity, config.log_format());

    if let Some(path) = config.loaded_from() {
        debug!(path = %path.display(), "using config file");
    }

    let store: Arc<dyn StateStore> = Arc::new(FileStateStore::new(&global.state_dir));
    let state = store.load()?;

    let usage: Arc<dyn UsagePrinter> = Arc::new(commands::console_usage());
    let registry = commands::registry(usage.clone(), store.clone(), verbosity)?;

    let (name, tokens) = cli.command_line();
    let invocation = Invocation {
        name,
        tokens,
        global,
        state,
    };

    Dispatcher::new(registry, invocation, usage, store).run()
}

/// Resolve global options. CLI flags override config, which overrides
/// defaults.
pub fn global_options(cli: &Cli, config: &Config) -> Result<GlobalOptions> {
    let state_dir = match cli.state_dir.as_deref().or(config.state_dir()) {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let endpoint_override = match &cli.endpoint_override {
        Some(endpoint) => {
            validate_endpoint(endpoint)?;
            Some(endpoint.clone())
        }
        None => config.endpoint_override().map(str::to_string),
    };

    Ok(GlobalOptions {
        state_dir,
        endpoint_override,
        debug: cli.debug,
        quiet: cli.quiet,
    })
}
