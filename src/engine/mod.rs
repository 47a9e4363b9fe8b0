//! engine
//!
//! Routes one parsed invocation to the operation that handles it.
//!
//! # Architecture
//!
//! The engine sits between the CLI layer and the operations:
//!
//! ```text
//! CLI args -> Invocation -> Dispatcher::run -> Operation::execute -> Result
//! ```
//!
//! The CLI layer assembles the [`Invocation`] and the [`Registry`]; the
//! [`Dispatcher`] resolves the target, intercepts help and version requests,
//! and otherwise hands the invocation to exactly one [`Operation`].
//!
//! # Invariants
//!
//! - The registry does not change during a run
//! - No operation is executed more than once per run
//! - Operations receive the invocation's tokens unchanged and their own copy
//!   of the state snapshot
//! - The engine performs no I/O of its own; everything goes through injected
//!   collaborators
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use standup::core::state::{FileStateStore, StateStore};
//! use standup::engine::{Dispatcher, GlobalOptions, Invocation, Registry};
//! use standup::ui::ConsoleUsage;
//!
//! let global = GlobalOptions::default();
//! let store = Arc::new(FileStateStore::new(&global.state_dir));
//! let invocation = Invocation {
//!     name: "help".to_string(),
//!     tokens: vec![],
//!     state: store.load()?,
//!     global,
//! };
//!
//! let dispatcher = Dispatcher::new(
//!     Registry::default(),
//!     invocation,
//!     Arc::new(ConsoleUsage::new("standup", std::iter::empty())),
//!     store,
//! );
//! dispatcher.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod command;
pub mod registry;
pub mod runner;

pub use command::Operation;
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use runner::{
    DispatchError, Dispatcher, Route, HELP_COMMAND, HELP_FLAGS, VERSION_COMMAND, VERSION_FLAGS,
};

use std::path::PathBuf;

use crate::core::state::StateSnapshot;

/// Options that apply to every command.
///
/// The dispatcher passes these through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    /// Directory holding `state.json`.
    pub state_dir: PathBuf,
    /// Cloud API endpoint override.
    pub endpoint_override: Option<String>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("."),
            endpoint_override: None,
            debug: false,
            quiet: false,
        }
    }
}

/// The parsed description of one command-line run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Requested command name; may be empty or unregistered.
    pub name: String,
    /// Trailing tokens after the command name, in caller order.
    pub tokens: Vec<String>,
    /// Global options.
    pub global: GlobalOptions,
    /// Previously persisted state.
    pub state: StateSnapshot,
}

impl Invocation {
    /// Invocation of `name` with `tokens` and default options and state.
    pub fn new<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
            global: GlobalOptions::default(),
            state: StateSnapshot::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_options {
        use super::*;

        #[test]
        fn default_values() {
            let global = GlobalOptions::default();
            assert_eq!(global.state_dir, PathBuf::from("."));
            assert!(global.endpoint_override.is_none());
            assert!(!global.debug);
            assert!(!global.quiet);
        }
    }

    mod invocation {
        use super::*;

        #[test]
        fn new_keeps_token_order() {
            let invocation = Invocation::new("some", ["--b", "2", "--a", "1"]);
            assert_eq!(invocation.name, "some");
            assert_eq!(invocation.tokens, vec!["--b", "2", "--a", "1"]);
            assert!(invocation.state.is_empty());
        }

        #[test]
        fn new_without_tokens() {
            let invocation = Invocation::new("help", Vec::<String>::new());
            assert!(invocation.tokens.is_empty());
        }
    }
}
