//! engine::command
//!
//! Operation trait for dispatch integration.
//!
//! # Architecture
//!
//! Every dispatchable command implements [`Operation`]. The dispatcher only
//! ever sees trait objects pulled from the [`super::Registry`]; it never
//! knows concrete operation types.
//!
//! # Invariants
//!
//! - `execute` is called at most once per dispatcher run
//! - `execute` receives the invocation's tokens unchanged and its own copy
//!   of the state snapshot
//! - `usage` is pure
//!
//! # Example
//!
//! ```
//! use anyhow::Result;
//! use standup::core::state::StateSnapshot;
//! use standup::engine::Operation;
//!
//! struct Region;
//!
//! impl Operation for Region {
//!     fn execute(&self, _tokens: &[String], state: StateSnapshot) -> Result<()> {
//!         println!("{}", state.aws.region);
//!         Ok(())
//!     }
//!
//!     fn usage(&self) -> String {
//!         "Prints the AWS region".to_string()
//!     }
//! }
//! ```

use anyhow::Result;

use crate::core::state::StateSnapshot;

/// A unit of dispatchable work identified by name in the registry.
pub trait Operation: Send + Sync {
    /// Run the operation.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Trailing command-line tokens, in caller order
    /// * `state` - Snapshot of persisted state, owned by this call
    ///
    /// # Errors
    ///
    /// Any error is handed back to the dispatcher's caller verbatim.
    fn execute(&self, tokens: &[String], state: StateSnapshot) -> Result<()>;

    /// Describe the operation and its options.
    fn usage(&self) -> String;
}
