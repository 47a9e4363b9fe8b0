//! cli::commands
//!
//! Concrete operations and registry assembly.
//!
//! # Architecture
//!
//! Each command implements [`crate::engine::Operation`]. [`registry`] wires
//! them under their names together with the collaborators they need; the
//! dispatcher takes it from there.
//!
//! Deployment commands live outside this crate and plug in the same way.

mod help;
mod rename_key_pair;
mod state_query;
mod version;

pub use help::HelpCommand;
pub use rename_key_pair::RenameKeyPairCommand;
pub use state_query::{QueryError, StateField, StateQuery};
pub use version::{version_line, VersionCommand};

use std::sync::Arc;

use crate::core::state::StateStore;
use crate::engine::{Registry, RegistryError, HELP_COMMAND, VERSION_COMMAND};
use crate::ui::output::Verbosity;
use crate::ui::{ConsoleUsage, UsagePrinter};

/// Program name shown in usage text.
pub const PROGRAM: &str = "standup";

/// Name of the key pair rename command.
pub const RENAME_KEY_PAIR_COMMAND: &str = "rename-key-pair";

/// Command listing shown by `standup help`, as (name, summary).
pub fn summaries() -> Vec<(&'static str, &'static str)> {
    let mut summaries = vec![
        (HELP_COMMAND, "Prints usage"),
        (VERSION_COMMAND, "Prints version"),
        (RENAME_KEY_PAIR_COMMAND, "Renames the key pair recorded in state"),
    ];
    summaries.extend(StateField::ALL.iter().map(|field| {
        let summary = match field {
            StateField::EnvId => "Prints environment ID",
            StateField::DirectorAddress => "Prints director address",
            StateField::DirectorUsername => "Prints director username",
            StateField::DirectorPassword => "Prints director password",
            StateField::DirectorCaCert => "Prints director CA certificate",
            StateField::SshKey => "Prints SSH private key for the director",
        };
        (field.command(), summary)
    }));
    summaries
}

/// Usage printer listing every built-in command.
pub fn console_usage() -> ConsoleUsage {
    ConsoleUsage::new(PROGRAM, summaries())
}

/// Assemble the registry of built-in commands.
///
/// # Arguments
///
/// * `usage` - Printer the `help` operation renders through
/// * `store` - Persistence handle for commands that write state
/// * `verbosity` - Output verbosity for confirmation messages
pub fn registry(
    usage: Arc<dyn UsagePrinter>,
    store: Arc<dyn StateStore>,
    verbosity: Verbosity,
) -> Result<Registry, RegistryError> {
    let mut builder = Registry::builder()
        .register(HELP_COMMAND, HelpCommand::new(usage))?
        .register(VERSION_COMMAND, VersionCommand)?
        .register(
            RENAME_KEY_PAIR_COMMAND,
            RenameKeyPairCommand::new(store, verbosity),
        )?;

    for field in StateField::ALL {
        builder = builder.register(field.command(), StateQuery::new(field))?;
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::FileStateStore;
    use tempfile::TempDir;

    fn build() -> Registry {
        let temp = TempDir::new().unwrap();
        registry(
            Arc::new(console_usage()),
            Arc::new(FileStateStore::new(temp.path())),
            Verbosity::Quiet,
        )
        .unwrap()
    }

    #[test]
    fn registers_every_listed_command() {
        let registry = build();
        for (name, _) in summaries() {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert_eq!(registry.len(), summaries().len());
    }

    #[test]
    fn help_and_version_are_registered() {
        let registry = build();
        assert!(registry.lookup("help").is_some());
        assert_eq!(registry.lookup("version").unwrap().usage(), "Prints version");
    }

    #[test]
    fn listing_mentions_every_command() {
        let text = console_usage().render();
        for (name, summary) in summaries() {
            assert!(text.contains(name));
            assert!(text.contains(summary));
        }
    }
}
