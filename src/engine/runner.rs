//! engine::runner
//!
//! The dispatcher - the single entry point for command execution.
//!
//! # Routing
//!
//! Every invocation is routed once, first match wins:
//!
//! ```text
//! name == "help"  -> listing | command usage | unknown (with listing)
//! lookup(name)    -> unknown (with listing)
//! --help / -h     -> command usage
//! --version / -v  -> version operation | unknown "version" (no listing)
//! otherwise       -> execute resolved operation
//! ```
//!
//! Routing is computed by [`Dispatcher::route`] without side effects and
//! then carried out by [`Dispatcher::run`].
//!
//! # Invariants
//!
//! - At most one `Operation::execute` call per run
//! - At most one usage print per run
//! - Operation errors are returned verbatim, never wrapped or logged
//! - Help flags win over version flags when both are present

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use super::command::Operation;
use super::registry::Registry;
use super::Invocation;
use crate::core::state::{StateSnapshot, StateStore};
use crate::ui::UsagePrinter;

/// Reserved command name that prints help for other commands.
pub const HELP_COMMAND: &str = "help";

/// Command name the version flags redirect to.
pub const VERSION_COMMAND: &str = "version";

/// Tokens that request per-command help.
pub const HELP_FLAGS: &[&str] = &["--help", "-h"];

/// Tokens that request the version.
pub const VERSION_FLAGS: &[&str] = &["--version", "-v"];

/// Errors raised by the dispatcher itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The requested command is not registered.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Where an invocation is routed.
pub enum Route<'a> {
    /// Print the full command listing.
    Listing,

    /// The named command is not registered.
    Unknown {
        name: &'a str,
        /// Whether the listing is printed alongside the error.
        print_listing: bool,
    },

    /// Print usage for a command without running it.
    CommandUsage {
        name: &'a str,
        operation: &'a dyn Operation,
    },

    /// Run the version operation in place of the resolved one.
    Version { operation: &'a dyn Operation },

    /// Run the resolved operation with the invocation's tokens and state.
    Execute {
        name: &'a str,
        operation: &'a dyn Operation,
    },
}

impl fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => write!(f, "Listing"),
            Route::Unknown {
                name,
                print_listing,
            } => f
                .debug_struct("Unknown")
                .field("name", name)
                .field("print_listing", print_listing)
                .finish(),
            Route::CommandUsage { name, .. } => {
                f.debug_struct("CommandUsage").field("name", name).finish()
            }
            Route::Version { .. } => write!(f, "Version"),
            Route::Execute { name, .. } => f.debug_struct("Execute").field("name", name).finish(),
        }
    }
}

/// Routes one invocation to its operation.
///
/// Holds everything captured at construction; nothing here changes during
/// a run.
pub struct Dispatcher {
    registry: Registry,
    invocation: Invocation,
    usage: Arc<dyn UsagePrinter>,
    state_store: Arc<dyn StateStore>,
}

impl Dispatcher {
    /// Create a dispatcher.
    ///
    /// # Arguments
    ///
    /// * `registry` - Operations available by name
    /// * `invocation` - The parsed invocation to route
    /// * `usage` - Renders listings and per-command help
    /// * `state_store` - Persistence handle for the invocation's state
    pub fn new(
        registry: Registry,
        invocation: Invocation,
        usage: Arc<dyn UsagePrinter>,
        state_store: Arc<dyn StateStore>,
    ) -> Self {
        Self {
            registry,
            invocation,
            usage,
            state_store,
        }
    }

    /// The invocation being routed.
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// The persistence handle the invocation's state came from.
    ///
    /// Routing never reads or writes state; operations that persist hold
    /// their own clone of this handle.
    #[allow(dead_code)] // Only inspected by tests; run() must stay free of I/O
    pub(crate) fn state_store(&self) -> &Arc<dyn StateStore> {
        &self.state_store
    }

    /// Decide where the invocation goes, without side effects.
    pub fn route(&self) -> Route<'_> {
        let name = self.invocation.name.as_str();
        let tokens = &self.invocation.tokens;

        if name == HELP_COMMAND {
            let Some(target) = tokens.first() else {
                return Route::Listing;
            };
            return match self.registry.lookup(target) {
                Some(operation) => Route::CommandUsage {
                    name: target,
                    operation,
                },
                None => Route::Unknown {
                    name: target,
                    print_listing: true,
                },
            };
        }

        let Some(operation) = self.registry.lookup(name) else {
            return Route::Unknown {
                name,
                print_listing: true,
            };
        };

        if contains_any(tokens, HELP_FLAGS) {
            return Route::CommandUsage { name, operation };
        }

        if contains_any(tokens, VERSION_FLAGS) {
            return match self.registry.lookup(VERSION_COMMAND) {
                Some(operation) => Route::Version { operation },
                None => Route::Unknown {
                    name: VERSION_COMMAND,
                    print_listing: false,
                },
            };
        }

        Route::Execute { name, operation }
    }

    /// Route the invocation and carry it out.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownCommand`] if a requested name is not registered
    /// - Whatever the executed operation returns, unchanged
    pub fn run(&self) -> Result<()> {
        let route = self.route();
        debug!(command = %self.invocation.name, ?route, "dispatching");

        match route {
            Route::Listing => {
                self.usage.print();
                Ok(())
            }
            Route::Unknown {
                name,
                print_listing,
            } => {
                if print_listing {
                    self.usage.print();
                }
                Err(DispatchError::UnknownCommand(name.to_string()).into())
            }
            Route::CommandUsage { name, operation } => {
                self.usage.print_command_usage(&operation.usage(), name);
                Ok(())
            }
            Route::Version { operation } => operation.execute(&[], StateSnapshot::default()),
            Route::Execute { operation, .. } => {
                operation.execute(&self.invocation.tokens, self.invocation.state.clone())
            }
        }
    }
}

/// Exact, case-sensitive match of any flag anywhere in `tokens`.
fn contains_any(tokens: &[String], flags: &[&str]) -> bool {
    tokens.iter().any(|token| flags.contains(&token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::StateError;
    use crate::engine::GlobalOptions;

    struct Stub;

    impl Operation for Stub {
        fn execute(&self, _tokens: &[String], _state: StateSnapshot) -> Result<()> {
            Ok(())
        }

        fn usage(&self) -> String {
            String::new()
        }
    }

    struct SilentUsage;

    impl UsagePrinter for SilentUsage {
        fn print(&self) {}
        fn print_command_usage(&self, _usage: &str, _command: &str) {}
    }

    struct NullStore;

    impl StateStore for NullStore {
        fn load(&self) -> Result<StateSnapshot, StateError> {
            Ok(StateSnapshot::default())
        }

        fn save(&self, _state: &StateSnapshot) -> Result<(), StateError> {
            Ok(())
        }
    }

    fn dispatcher(names: &[&str], name: &str, tokens: &[&str]) -> Dispatcher {
        let mut builder = Registry::builder();
        for n in names {
            builder = builder.register(*n, Stub).unwrap();
        }
        let invocation = Invocation {
            name: name.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            global: GlobalOptions::default(),
            state: StateSnapshot::default(),
        };
        Dispatcher::new(
            builder.build(),
            invocation,
            Arc::new(SilentUsage),
            Arc::new(NullStore),
        )
    }

    mod route {
        use super::*;

        #[test]
        fn bare_help_lists_commands() {
            let d = dispatcher(&["some"], "help", &[]);
            assert!(matches!(d.route(), Route::Listing));
        }

        #[test]
        fn help_with_known_target() {
            let d = dispatcher(&["some"], "help", &["some", "--ignored"]);
            assert!(matches!(d.route(), Route::CommandUsage { name: "some", .. }));
        }

        #[test]
        fn help_with_unknown_target() {
            let d = dispatcher(&["some"], "help", &["invalid-command"]);
            assert!(matches!(
                d.route(),
                Route::Unknown {
                    name: "invalid-command",
                    print_listing: true
                }
            ));
        }

        #[test]
        fn help_is_intercepted_even_when_registered() {
            let d = dispatcher(&["help", "some"], "help", &[]);
            assert!(matches!(d.route(), Route::Listing));
        }

        #[test]
        fn unknown_primary() {
            let d = dispatcher(&["some"], "some-unknown-command", &["--help"]);
            assert!(matches!(
                d.route(),
                Route::Unknown {
                    name: "some-unknown-command",
                    print_listing: true
                }
            ));
        }

        #[test]
        fn empty_name_is_unknown() {
            let d = dispatcher(&["some"], "", &[]);
            assert!(matches!(d.route(), Route::Unknown { name: "", .. }));
        }

        #[test]
        fn help_flag_in_any_position() {
            for flag in HELP_FLAGS {
                let d = dispatcher(&["some"], "some", &["--region", "x", *flag]);
                assert!(matches!(d.route(), Route::CommandUsage { name: "some", .. }));
            }
        }

        #[test]
        fn help_wins_over_version() {
            let d = dispatcher(&["some", "version"], "some", &["-v", "-h"]);
            assert!(matches!(d.route(), Route::CommandUsage { .. }));
        }

        #[test]
        fn version_flag_redirects() {
            for flag in VERSION_FLAGS {
                let d = dispatcher(&["some", "version"], "some", &[*flag]);
                assert!(matches!(d.route(), Route::Version { .. }));
            }
        }

        #[test]
        fn version_flag_without_version_command() {
            let d = dispatcher(&["some"], "some", &["-v"]);
            assert!(matches!(
                d.route(),
                Route::Unknown {
                    name: "version",
                    print_listing: false
                }
            ));
        }

        #[test]
        fn flags_match_exactly() {
            let d = dispatcher(
                &["some", "version"],
                "some",
                &["--HELP", "-H", "--help=true", "-vv", "--versions"],
            );
            assert!(matches!(d.route(), Route::Execute { name: "some", .. }));
        }

        #[test]
        fn plain_tokens_execute() {
            let d = dispatcher(&["some"], "some", &["--first-subcommand-flag", "first-value"]);
            assert!(matches!(d.route(), Route::Execute { name: "some", .. }));
        }
    }

    mod dispatch_error {
        use super::*;

        #[test]
        fn message_contract() {
            let err = DispatchError::UnknownCommand("some-unknown-command".to_string());
            assert_eq!(err.to_string(), "unknown command: some-unknown-command");
        }

        #[test]
        fn downcast_from_run() {
            let d = dispatcher(&[], "missing", &[]);
            let err = d.run().unwrap_err();
            assert_eq!(
                err.downcast_ref::<DispatchError>(),
                Some(&DispatchError::UnknownCommand("missing".to_string()))
            );
        }
    }

    #[test]
    fn accessors_expose_construction_state() {
        let d = dispatcher(&["some"], "some", &["a"]);
        assert_eq!(d.invocation().tokens, vec!["a".to_string()]);
        assert!(d.state_store().load().unwrap().is_empty());
    }

    #[test]
    fn route_debug_shows_names() {
        let d = dispatcher(&["some"], "some", &[]);
        assert_eq!(format!("{:?}", d.route()), "Execute { name: \"some\" }");
    }
}
